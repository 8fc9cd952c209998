//! Record types produced by the confdata parser.

use time::Date;

use crate::error::ValidationError;

/// Longest conference short name accepted, in characters.
///
/// Image-map anchors are padded to exactly this width.
pub const MAX_CONF_NAME_LENGTH: usize = 8;

/// One validated `CONFITEM` line.
///
/// Only [`ConferenceEntry::new`] builds values, so every entry in existence
/// satisfies `deadline < start <= end` and, when a notification date is
/// present, `deadline < notification < start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceEntry {
    name: String,
    start_date: Date,
    end_date: Date,
    deadline_date: Date,
    notification_date: Option<Date>,
}

impl ConferenceEntry {
    /// Build an entry, checking every invariant before anything is stored.
    ///
    /// Checks run in a fixed order and the first violation is returned: name
    /// present, name length, start/end order, deadline before start, then the
    /// notification window.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] the fields violate.
    pub fn new(
        name: impl Into<String>,
        start_date: Date,
        end_date: Date,
        deadline_date: Date,
        notification_date: Option<Date>,
    ) -> Result<Self, ValidationError> {
        let entry = Self { name: name.into(), start_date, end_date, deadline_date, notification_date };
        entry.validate()?;
        Ok(entry)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.name.chars().count() > MAX_CONF_NAME_LENGTH {
            return Err(ValidationError::NameTooLong { name: self.name.clone(), max: MAX_CONF_NAME_LENGTH });
        }
        if self.start_date > self.end_date {
            return Err(ValidationError::EndBeforeStart { start: self.start_date, end: self.end_date });
        }
        if self.deadline_date >= self.start_date {
            return Err(ValidationError::DeadlineNotBeforeStart { deadline: self.deadline_date, start: self.start_date });
        }
        if let Some(notification) = self.notification_date {
            if notification <= self.deadline_date {
                return Err(ValidationError::NotificationNotAfterDeadline {
                    notification,
                    deadline: self.deadline_date,
                });
            }
            if notification >= self.start_date {
                return Err(ValidationError::NotificationNotBeforeStart { notification, start: self.start_date });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    #[must_use]
    pub fn deadline_date(&self) -> Date {
        self.deadline_date
    }

    #[must_use]
    pub fn notification_date(&self) -> Option<Date> {
        self.notification_date
    }

    /// Name right-padded with `_` to [`MAX_CONF_NAME_LENGTH`] characters.
    #[must_use]
    pub fn padded_name(&self) -> String {
        let pad = MAX_CONF_NAME_LENGTH.saturating_sub(self.name.chars().count());
        format!("{}{}", self.name, "_".repeat(pad))
    }
}

/// A `DATELINE` marker. Parsed and kept in file order but not drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLine {
    pub date: Date,
    pub label: String,
}
