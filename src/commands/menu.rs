//! The interactive menu loop.
//!
//! The loop is a small state machine:
//!
//! ```text
//! ShowMenu ──▶ AwaitChoice ──▶ RunAction(action) ──▶ ShowMenu
//!                   │
//!                   └──▶ Exit (choice 9, or end of input at any question)
//! ```
//!
//! Exactly one question is pending at a time. An action, including every
//! follow-up question it asks, completes before the menu is shown again.
//! Problems inside an action never end the session: bad answers print
//! guidance and storage failures print a diagnostic, then the menu returns.
//! Only a broken console or input ending mid-action ends it early, the latter
//! through the normal shutdown.

use crate::db::db::Db;
use crate::db::tasks::Tasks;
use crate::libs::config::DatabaseLocation;
use crate::libs::console::{Console, Terminal};
use crate::libs::input::InputError;
use crate::libs::messages::{self, Message};
use crate::{msg_info, msg_success};
use anyhow::{anyhow, Result};
use std::io;
use std::str::FromStr;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// Everything the menu can do besides leaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListAll,
    Add,
    Delete,
    MarkComplete,
    FilterByStatus,
    Search,
    Sort,
    SetPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Action),
    Exit,
}

impl FromStr for MenuChoice {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = match s.trim() {
            "1" => MenuChoice::Run(Action::ListAll),
            "2" => MenuChoice::Run(Action::Add),
            "3" => MenuChoice::Run(Action::Delete),
            "4" => MenuChoice::Run(Action::MarkComplete),
            "5" => MenuChoice::Run(Action::FilterByStatus),
            "6" => MenuChoice::Run(Action::Search),
            "7" => MenuChoice::Run(Action::Sort),
            "8" => MenuChoice::Run(Action::SetPriority),
            "9" => MenuChoice::Exit,
            other => return Err(InputError::InvalidChoice(other.to_string())),
        };
        Ok(choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    ShowMenu,
    AwaitChoice,
    RunAction(Action),
    Exit,
}

/// Why an action stopped early.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The user's answer was rejected before touching storage.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A storage call failed; the message already carries the cause.
    #[error("{0}")]
    Storage(Message),

    /// Reading from or writing to the console failed.
    #[error(transparent)]
    Console(#[from] io::Error),

    /// The input ended while a follow-up question was pending.
    #[error("input closed")]
    InputClosed,
}

/// Attaches the user-facing description of a failed storage call.
pub(crate) trait StorageContext<T> {
    fn or_report(self, message: fn(String) -> Message) -> Result<T, ActionError>;
}

impl<T> StorageContext<T> for Result<T> {
    fn or_report(self, message: fn(String) -> Message) -> Result<T, ActionError> {
        self.map_err(|e| ActionError::Storage(message(format!("{:#}", e))))
    }
}

pub struct Menu<R, W> {
    pub(crate) tasks: Tasks,
    pub(crate) console: Console<R, W>,
}

impl<R, W> Menu<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(tasks: Tasks, console: Console<R, W>) -> Self {
        Self { tasks, console }
    }

    /// Runs until the user exits or the input ends, then closes the console
    /// and the database and returns the console's output sink.
    pub async fn run(mut self) -> Result<W> {
        let mut state = MenuState::ShowMenu;

        loop {
            state = match state {
                MenuState::ShowMenu => {
                    self.console.say(Message::MainMenu).await?;
                    MenuState::AwaitChoice
                }
                MenuState::AwaitChoice => match self.console.read_line().await? {
                    None => MenuState::Exit,
                    Some(line) => match line.parse::<MenuChoice>() {
                        Ok(MenuChoice::Run(action)) => MenuState::RunAction(action),
                        Ok(MenuChoice::Exit) => MenuState::Exit,
                        Err(e) => {
                            self.recover(ActionError::Input(e)).await?;
                            MenuState::ShowMenu
                        }
                    },
                },
                MenuState::RunAction(action) => {
                    tracing::debug!(?action, "running menu action");
                    match self.dispatch(action).await {
                        Ok(()) => MenuState::ShowMenu,
                        Err(ActionError::InputClosed) => MenuState::Exit,
                        Err(e) => {
                            self.recover(e).await?;
                            MenuState::ShowMenu
                        }
                    }
                }
                MenuState::Exit => return self.shutdown().await,
            };
        }
    }

    async fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::ListAll => self.list_all().await,
            Action::Add => self.add_task().await,
            Action::Delete => self.delete_task().await,
            Action::MarkComplete => self.mark_task().await,
            Action::FilterByStatus => self.filter_by_status().await,
            Action::Search => self.search_tasks().await,
            Action::Sort => self.sort_tasks().await,
            Action::SetPriority => self.prioritize_task().await,
        }
    }

    /// Reports a failed action and lets the loop carry on. Only console
    /// failures are passed back up.
    async fn recover(&mut self, error: ActionError) -> Result<()> {
        match error {
            ActionError::Input(e) => {
                tracing::debug!(error = %e, "rejected user input");
                self.console.say(messages::warning(Message::from(&e))).await?;
            }
            ActionError::Storage(message) => {
                tracing::error!(%message, "storage operation failed");
                self.console.say(messages::error(message)).await?;
            }
            ActionError::Console(e) => return Err(e.into()),
            ActionError::InputClosed => tracing::debug!("input closed during an action"),
        }
        Ok(())
    }

    async fn shutdown(mut self) -> Result<W> {
        self.console.say(Message::Goodbye).await?;
        let output = self.console.close().await?;
        self.tasks.close()?;
        tracing::debug!("console and database closed");

        Ok(output)
    }
}

/// Opens the database and drives the menu on the terminal.
pub async fn cmd(location: &DatabaseLocation) -> Result<()> {
    let db = Db::open(location).map_err(|e| anyhow!(Message::DbConnectionFailed(format!("{:#}", e))))?;
    msg_success!(Message::DbConnected);
    msg_info!(Message::TasksTableReady);

    Menu::new(Tasks::new(db), Terminal::terminal()).run().await?;

    Ok(())
}
