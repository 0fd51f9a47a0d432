use crate::core::calculator::try_classify;
use crate::core::holiday::HolidayCalendar;
use crate::errors::AppResult;
use crate::models::{EntryDraft, MinuteBuckets, WorkEntry};

pub struct Core;

impl Core {
    /// Resolve the holiday flag and classify the draft's span.
    pub fn evaluate(
        draft: &EntryDraft,
        calendar: &HolidayCalendar,
    ) -> AppResult<(bool, MinuteBuckets)> {
        let is_holiday = calendar.resolve(draft.span.start_date, draft.holiday);
        let result = try_classify(&draft.span, is_holiday)?;
        Ok((is_holiday, result))
    }

    /// Build a classified entry with the given identity.
    pub fn build_entry(
        id: i64,
        draft: EntryDraft,
        calendar: &HolidayCalendar,
    ) -> AppResult<WorkEntry> {
        let (is_holiday, result) = Self::evaluate(&draft, calendar)?;
        Ok(draft.into_entry(id, is_holiday, result))
    }
}
