use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskClassification {
    #[default]
    Chore, // 0
    Fix,      // 1
    Feature,  // 2
    Refactor, // 3
    Test,     // 4
    Docs,     // 5
    Review,   // 6
    Meeting,  // 7
}

impl TaskClassification {
    pub const ALL: [TaskClassification; 8] = [
        TaskClassification::Chore,
        TaskClassification::Fix,
        TaskClassification::Feature,
        TaskClassification::Refactor,
        TaskClassification::Test,
        TaskClassification::Docs,
        TaskClassification::Review,
        TaskClassification::Meeting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskClassification::Chore => "chore",
            TaskClassification::Fix => "fix",
            TaskClassification::Feature => "feature",
            TaskClassification::Refactor => "refactor",
            TaskClassification::Test => "test",
            TaskClassification::Docs => "docs",
            TaskClassification::Review => "review",
            TaskClassification::Meeting => "meeting",
        }
    }

    /// Convert enum → DB integer
    pub fn to_db_code(&self) -> i64 {
        match self {
            TaskClassification::Chore => 0,
            TaskClassification::Fix => 1,
            TaskClassification::Feature => 2,
            TaskClassification::Refactor => 3,
            TaskClassification::Test => 4,
            TaskClassification::Docs => 5,
            TaskClassification::Review => 6,
            TaskClassification::Meeting => 7,
        }
    }

    /// Convert DB integer → enum
    pub fn from_db_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_db_code() == code)
    }

    /// Helper: parse a name typed on the command line (any case)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "feat" => Some(TaskClassification::Feature),
            "doc" => Some(TaskClassification::Docs),
            _ => Self::ALL.into_iter().find(|c| c.as_str() == name),
        }
    }
}

impl fmt::Display for TaskClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
