pub mod entry;
pub mod holiday_mark;
pub mod minutes;
pub mod span;
pub mod user_info;

pub use entry::{EntryDraft, WorkEntry};
pub use holiday_mark::HolidayMark;
pub use minutes::MinuteBuckets;
pub use span::WorkSpan;
pub use user_info::UserInfo;
