use crate::core::ledger::LedgerAction;
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use crate::session::Session;
use crate::session::log::ttlog;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove entry `id` and return it.
    pub fn apply(session: &mut Session, id: i64) -> AppResult<WorkEntry> {
        let removed = session
            .entries
            .get(id)
            .cloned()
            .ok_or(AppError::EntryNotFound(id))?;

        session.entries = session.entries.reduce(LedgerAction::Delete(id))?;

        ttlog(
            session,
            "del",
            &id.to_string(),
            &format!("Deleted entry of {}", removed.get_date_time()),
        );

        Ok(removed)
    }
}
