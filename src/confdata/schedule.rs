//! Ordered collection of validated conference entries.

use super::entry::ConferenceEntry;
use crate::error::EmptyScheduleError;

/// Entries in file order until [`ScheduleSet::sort_by_deadline`] reorders them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSet {
    entries: Vec<ConferenceEntry>,
}

impl ScheduleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ConferenceEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConferenceEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[ConferenceEntry] {
        &self.entries
    }

    /// Stable ascending sort by deadline. Entries sharing a deadline keep
    /// their relative order, so sorting twice is a no-op.
    pub fn sort_by_deadline(&mut self) {
        self.entries.sort_by_key(ConferenceEntry::deadline_date);
    }

    /// Entry with the earliest deadline; the first one wins on ties.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyScheduleError`] when there are no entries.
    pub fn min_by_deadline(&self) -> Result<&ConferenceEntry, EmptyScheduleError> {
        self.entries
            .iter()
            .min_by_key(|entry| entry.deadline_date())
            .ok_or(EmptyScheduleError)
    }

    /// Entry with the latest conference end; the first one wins on ties.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyScheduleError`] when there are no entries.
    pub fn max_by_end_date(&self) -> Result<&ConferenceEntry, EmptyScheduleError> {
        self.entries
            .iter()
            .reduce(|best, entry| if entry.end_date() > best.end_date() { entry } else { best })
            .ok_or(EmptyScheduleError)
    }
}

impl<'a> IntoIterator for &'a ScheduleSet {
    type Item = &'a ConferenceEntry;
    type IntoIter = std::slice::Iter<'a, ConferenceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
