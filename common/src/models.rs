use serde::{Deserialize, Serialize};

/// Deployment environment a service runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Dev,
    Qa,
    Prod,
}

impl Environment {
    pub fn value(self) -> i32 {
        match self {
            Environment::Dev => 1,
            Environment::Qa => 2,
            Environment::Prod => 3,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Environment::Dev),
            2 => Some(Environment::Qa),
            3 => Some(Environment::Prod),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressStatus {
    NotStarted,
    Started,
    Completed,
}

impl ProgressStatus {
    pub fn value(self) -> i32 {
        match self {
            ProgressStatus::NotStarted => 0,
            ProgressStatus::Started => 1,
            ProgressStatus::Completed => 2,
        }
    }
}

/// Active flag of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub fn value(self) -> bool {
        matches!(self, Status::Active)
    }
}

impl From<bool> for Status {
    fn from(active: bool) -> Self {
        if active {
            Status::Active
        } else {
            Status::Inactive
        }
    }
}

/// Publication state of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseMgmtStatus {
    Draft,
    Live,
    Retired,
}

impl CourseMgmtStatus {
    pub fn value(self) -> &'static str {
        match self {
            CourseMgmtStatus::Draft => "draft",
            CourseMgmtStatus::Live => "live",
            CourseMgmtStatus::Retired => "retired",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_values_round_trip() {
        for env in [Environment::Dev, Environment::Qa, Environment::Prod] {
            assert_eq!(Environment::from_value(env.value()), Some(env));
        }
        assert_eq!(Environment::from_value(0), None);
    }

    #[test]
    fn test_progress_status_values() {
        assert_eq!(ProgressStatus::NotStarted.value(), 0);
        assert_eq!(ProgressStatus::Completed.value(), 2);
        assert_eq!(
            serde_json::to_string(&ProgressStatus::NotStarted).unwrap(),
            "\"NOT_STARTED\""
        );
    }

    #[test]
    fn test_status_from_bool() {
        assert_eq!(Status::from(true), Status::Active);
        assert!(!Status::Inactive.value());
    }

    #[test]
    fn test_course_status_serializes_as_value() {
        for status in [
            CourseMgmtStatus::Draft,
            CourseMgmtStatus::Live,
            CourseMgmtStatus::Retired,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.value()));
        }
        let parsed: CourseMgmtStatus = serde_json::from_str("\"live\"").unwrap();
        assert_eq!(parsed, CourseMgmtStatus::Live);
    }
}
