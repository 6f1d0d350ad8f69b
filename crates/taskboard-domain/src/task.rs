use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taskboard_core::BoardError;

use crate::status::Status;

/// Millisecond-derived task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl TaskId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(TaskId)
            .map_err(|e| BoardError::Validation(format!("invalid task id '{}': {}", s, e)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: Status,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Task {
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        status: Status,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status,
            created_at,
        }
    }

    pub fn update_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created_at).single()
    }

    /// Creation date in the local time zone and locale date format.
    pub fn created_date_label(&self) -> String {
        match self.created_at_utc() {
            Some(utc) => utc.with_timezone(&Local).format("%x").to_string(),
            None => String::new(),
        }
    }
}
