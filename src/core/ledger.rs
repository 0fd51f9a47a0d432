//! Ordered list of work entries with reducer-style transitions.

use crate::errors::{AppError, AppResult};
use crate::models::{MinuteBuckets, WorkEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub enum LedgerAction {
    Add(WorkEntry),
    /// Replace the entry with the same id
    Replace(WorkEntry),
    Delete(i64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WorkEntry>", into = "Vec<WorkEntry>")]
pub struct Ledger {
    entries: Vec<WorkEntry>,
}

impl Ledger {
    pub fn new(mut entries: Vec<WorkEntry>) -> Self {
        sort_chronologically(&mut entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[WorkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&WorkEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Apply one transition and return the resulting ledger.
    /// `self` is left untouched, so a failed action changes nothing.
    pub fn reduce(&self, action: LedgerAction) -> AppResult<Ledger> {
        let mut entries = self.entries.clone();

        match action {
            LedgerAction::Add(entry) => {
                if self.get(entry.id).is_some() {
                    return Err(AppError::Other(format!(
                        "entry id {} already exists",
                        entry.id
                    )));
                }
                entries.push(entry);
            }
            LedgerAction::Replace(entry) => {
                let slot = entries
                    .iter_mut()
                    .find(|e| e.id == entry.id)
                    .ok_or(AppError::EntryNotFound(entry.id))?;
                *slot = entry;
            }
            LedgerAction::Delete(id) => {
                let before = entries.len();
                entries.retain(|e| e.id != id);
                if entries.len() == before {
                    return Err(AppError::EntryNotFound(id));
                }
            }
        }

        sort_chronologically(&mut entries);
        Ok(Ledger { entries })
    }

    /// First free id at or after `now_ms`.
    pub fn next_id(&self, now_ms: i64) -> AppResult<i64> {
        match self.entries.iter().map(|e| e.id).max() {
            Some(max) if now_ms <= max => max
                .checked_add(1)
                .ok_or_else(|| AppError::Other("no free entry id left".into())),
            _ => Ok(now_ms),
        }
    }

    pub fn totals(&self) -> MinuteBuckets {
        totals_of(&self.entries)
    }
}

/// Loading a stored list re-sorts it and refuses duplicate ids.
impl TryFrom<Vec<WorkEntry>> for Ledger {
    type Error = AppError;

    fn try_from(entries: Vec<WorkEntry>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        if let Some(dup) = entries.iter().find(|e| !seen.insert(e.id)) {
            return Err(AppError::Other(format!("duplicate entry id {}", dup.id)));
        }
        Ok(Ledger::new(entries))
    }
}

impl From<Ledger> for Vec<WorkEntry> {
    fn from(ledger: Ledger) -> Self {
        ledger.entries
    }
}

pub fn totals_of(entries: &[WorkEntry]) -> MinuteBuckets {
    entries
        .iter()
        .fold(MinuteBuckets::zero(), |acc, e| acc + e.result)
}

/// Stable sort on start date then start time.
fn sort_chronologically(entries: &mut [WorkEntry]) {
    entries.sort_by_key(|e| (e.start_date, e.start_time));
}
