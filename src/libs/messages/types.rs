use crate::libs::task::Priority;

#[derive(Debug, Clone)]
pub enum Message {
    // === STARTUP / SHUTDOWN MESSAGES ===
    DbConnected,
    TasksTableReady,
    DbConnectionFailed(String), // error message
    ConfigLoadFailed(String),   // error message
    DbCloseFailed(String),      // error message
    CredentialsIgnored,
    Goodbye,

    // === MENU MESSAGES ===
    MainMenu,
    InvalidChoice,

    // === LISTING MESSAGES ===
    NoTasksToShow,
    NoTasksToDelete,
    NoTasksToComplete,
    NoTasksToPrioritize,
    NoTasksWithStatus(String),  // status label
    NoTasksMatching(String),    // keyword

    // === PROMPTS ===
    PromptTaskDescription,
    PromptDeleteIndex,
    PromptCompleteIndex,
    PromptPriorityIndex,
    PromptPriorityLevel,
    PromptStatusFilter,
    PromptKeyword,
    PromptSortField,

    // === TASK MESSAGES ===
    TaskAdded(String),                 // description
    TaskDeleted(String),               // description
    TaskCompleted(String),             // description
    TaskPrioritySet(String, Priority), // description, new priority

    // === INPUT ERRORS ===
    InvalidTaskNumber,
    NoKeyword,
    EmptyDescription,
    InvalidPriority,
    InvalidStatusChoice,
    InvalidSortChoice,
    StaleSelection,

    // === STORAGE ERRORS ===
    FetchFailed(String),  // error message
    AddFailed(String),    // error message
    DeleteFailed(String), // error message
    UpdateFailed(String), // error message

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String), // version, name, applied at
}
