#[derive(Debug, Clone)]
pub enum Message {
    // === PLANT MESSAGES ===
    PlantAdded(String),
    PlantRemoved(String),
    PlantNotFound(String),
    PlantRejected(String),
    PlantWatered(String, String), // name, date
    PlantsHeader,
    NoPlantsFound,
    ConfirmRemovePlant(String),
    RemovalCancelled,

    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskRejected(String),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskNotFoundWithId(i64),
    TasksHeader(String), // date
    AllTasksHeader,
    NoTasksForDate(String),
    NoTasksFound,
    SkippedCorruptTask(i64, String),
    SkippedUnreadableRow(String),
    TaskStoreWriteFailed(String),

    // === TODAY / DUE MESSAGES ===
    DueHeader(String),       // date
    ScheduledHeader(String), // date
    NothingDueToday,

    // === SCHEDULE MESSAGES ===
    CalendarHeader(String), // "Month YYYY"
    InvalidMonth(u32),

    // === CARE LOG MESSAGES ===
    CareLogged(String), // plant name
    CareLogHeader,
    NoCareLogged,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleSchedule,
    ConfigModuleDisplay,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportEmpty,
    ExportDirectoryMissing(String), // path

    // === PROMPTS ===
    PromptSelectModules,
    PromptPlantName,
    PromptSpecies,
    PromptLocation,
    PromptWateringInterval,
    PromptTaskPlantId,
    PromptTaskKind,
    PromptTaskDate,
    PromptTaskNote,
    PromptTaskPriority,
    PromptDefaultPriority,
    PromptShowCompleted,
}
