use std::fmt;

use crate::errors::RosterError;

/// How a message should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A human-readable outcome message produced by a roster operation.
///
/// The presentation layer decides how to render these (toast, log line, tool
/// response); the library only guarantees that every operation outcome maps to
/// exactly one notification with a distinguishable severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Success,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn info(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Info,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Error,
            title: title.into(),
            detail: detail.into(),
        }
    }
}

impl From<&RosterError> for Notification {
    fn from(err: &RosterError) -> Self {
        match err {
            RosterError::RosterFull => Notification::error(
                "Team is full",
                "You can only have 6 Pokemon in your team. Remove one first.",
            ),
            RosterError::DuplicateEntry(name) => Notification::error(
                "Already in team",
                format!("{} is already in your team.", name),
            ),
            RosterError::EmptyRoster => {
                Notification::error("Empty team", "You can't save an empty team.")
            }
            RosterError::NameRequired => Notification::error(
                "Team name required",
                "Please enter a name for your team.",
            ),
            RosterError::NameExists(_) => Notification::error(
                "Team name exists",
                "A team with this name already exists. Please choose a different name.",
            ),
            RosterError::TeamNotFound(name) => Notification::error(
                "Team not found",
                format!("There is no saved team named \"{}\".", name),
            ),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.detail)
    }
}
