//! The menu actions.
//!
//! Delete, complete and prioritize share one selection dialog: fetch a
//! snapshot, show it numbered from 1, ask for a number, and map the number
//! back to the task at that position. The snapshot is checked for staleness
//! right before the write it leads to.

use super::menu::{ActionError, Menu, StorageContext};
use crate::libs::input::{
    parse_description, parse_keyword, parse_priority_choice, parse_sort_choice, parse_status_choice, InputError,
};
use crate::libs::messages::{self, Message};
use crate::libs::snapshot::Snapshot;
use crate::libs::task::Task;
use crate::libs::view::View;
use tokio::io::{AsyncBufRead, AsyncWrite};

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub(super) async fn list_all(&mut self) -> Result<(), ActionError> {
        let tasks = self.tasks.list_all().or_report(Message::FetchFailed)?;
        self.show(&tasks, Message::NoTasksToShow).await
    }

    pub(super) async fn add_task(&mut self) -> Result<(), ActionError> {
        let answer = self.answer(Message::PromptTaskDescription).await?;
        let description = parse_description(&answer)?;

        let id = self.tasks.insert(&description).or_report(Message::AddFailed)?;
        tracing::debug!(id, "task inserted");

        self.console.say(messages::success(Message::TaskAdded(description))).await?;
        Ok(())
    }

    pub(super) async fn delete_task(&mut self) -> Result<(), ActionError> {
        let Some((snapshot, task)) = self.pick_task(Message::NoTasksToDelete, Message::PromptDeleteIndex).await? else {
            return Ok(());
        };

        self.ensure_current(&snapshot)?;
        self.tasks.delete(task.id).or_report(Message::DeleteFailed)?;
        tracing::debug!(id = task.id, "task deleted");

        self.console.say(messages::success(Message::TaskDeleted(task.description))).await?;
        Ok(())
    }

    pub(super) async fn mark_task(&mut self) -> Result<(), ActionError> {
        let Some((snapshot, task)) = self.pick_task(Message::NoTasksToComplete, Message::PromptCompleteIndex).await? else {
            return Ok(());
        };

        self.ensure_current(&snapshot)?;
        self.tasks.mark_complete(task.id).or_report(Message::UpdateFailed)?;
        tracing::debug!(id = task.id, "task marked complete");

        self.console.say(messages::success(Message::TaskCompleted(task.description))).await?;
        Ok(())
    }

    pub(super) async fn prioritize_task(&mut self) -> Result<(), ActionError> {
        let Some((snapshot, task)) = self.pick_task(Message::NoTasksToPrioritize, Message::PromptPriorityIndex).await? else {
            return Ok(());
        };
        let answer = self.answer(Message::PromptPriorityLevel).await?;
        let priority = parse_priority_choice(&answer)?;

        self.ensure_current(&snapshot)?;
        self.tasks.set_priority(task.id, priority).or_report(Message::UpdateFailed)?;
        tracing::debug!(id = task.id, priority = priority.level(), "task priority set");

        self.console.say(messages::success(Message::TaskPrioritySet(task.description, priority))).await?;
        Ok(())
    }

    pub(super) async fn filter_by_status(&mut self) -> Result<(), ActionError> {
        let answer = self.answer(Message::PromptStatusFilter).await?;
        let status = parse_status_choice(&answer)?;

        let tasks = self.tasks.list_by_status(status).or_report(Message::FetchFailed)?;
        self.show(&tasks, Message::NoTasksWithStatus(status.to_string())).await
    }

    pub(super) async fn search_tasks(&mut self) -> Result<(), ActionError> {
        let answer = self.answer(Message::PromptKeyword).await?;
        let keyword = parse_keyword(&answer)?;

        let tasks = self.tasks.search(&keyword).or_report(Message::FetchFailed)?;
        self.show(&tasks, Message::NoTasksMatching(keyword.to_string())).await
    }

    pub(super) async fn sort_tasks(&mut self) -> Result<(), ActionError> {
        let answer = self.answer(Message::PromptSortField).await?;
        let field = parse_sort_choice(&answer)?;

        let tasks = self.tasks.list_sorted(field).or_report(Message::FetchFailed)?;
        self.show(&tasks, Message::NoTasksToShow).await
    }

    async fn show(&mut self, tasks: &[Task], empty: Message) -> Result<(), ActionError> {
        if tasks.is_empty() {
            self.console.say(empty).await?;
            return Ok(());
        }
        for line in View::tasks(tasks) {
            self.console.say(line).await?;
        }
        Ok(())
    }

    /// Shows a fresh numbered listing and asks which task to act on.
    ///
    /// Returns `None` when there is nothing to pick from.
    async fn pick_task(&mut self, empty: Message, prompt: Message) -> Result<Option<(Snapshot, Task)>, ActionError> {
        let snapshot = self.tasks.snapshot().or_report(Message::FetchFailed)?;
        if snapshot.is_empty() {
            self.console.say(empty).await?;
            return Ok(None);
        }

        for line in View::numbered(snapshot.tasks()) {
            self.console.say(line).await?;
        }
        let answer = self.answer(prompt).await?;
        let task = snapshot.select(&answer)?.clone();

        Ok(Some((snapshot, task)))
    }

    /// Asks a follow-up question. The session ends if no answer can come.
    async fn answer(&mut self, question: Message) -> Result<String, ActionError> {
        self.console.ask(question).await?.ok_or(ActionError::InputClosed)
    }

    fn ensure_current(&self, snapshot: &Snapshot) -> Result<(), ActionError> {
        if self.tasks.is_current(snapshot).or_report(Message::FetchFailed)? {
            Ok(())
        } else {
            Err(InputError::StaleSelection.into())
        }
    }
}
