use super::task::Task;

pub struct View {}

impl View {
    /// `id. description - status - priority`, as used by the plain listings.
    /// The priority is shown as its bare level, 1 to 3.
    pub fn task_line(task: &Task) -> String {
        format!("{}. {} - {} - {}", task.id, task.description, task.status, task.priority.level())
    }

    /// `position: description - status - priority`, where `position` is the
    /// 1-based number the user types to pick the task.
    pub fn numbered_line(index: usize, task: &Task) -> String {
        format!("{}: {} - {} - {}", index + 1, task.description, task.status, task.priority.level())
    }

    pub fn tasks(tasks: &[Task]) -> Vec<String> {
        tasks.iter().map(Self::task_line).collect()
    }

    pub fn numbered(tasks: &[Task]) -> Vec<String> {
        tasks.iter().enumerate().map(|(index, task)| Self::numbered_line(index, task)).collect()
    }
}
