//! Minute bucketing of a single work span.

pub mod classify;
pub mod night;
pub mod window;

pub use classify::{classify, minute_offset, try_classify};
pub use night::night_minutes;
pub use window::{RegulatedWindow, overtime_candidate};

pub const DAY_MINUTES: i64 = 1440;

/// Holiday work up to this many minutes is plain overtime.
pub const HOLIDAY_OVERTIME_CAP: i64 = 8 * 60;
