use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Minutes of one entry (or of a whole ledger) split by legal category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteBuckets {
    /// 연장: outside the regulated window, or the first 8h of holiday work
    pub overtime: i64,
    /// 휴일초과: holiday work beyond 8h
    pub holiday_excess: i64,
    /// 야간: 22:00-06:00
    pub night: i64,
}

impl MinuteBuckets {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.overtime == 0 && self.holiday_excess == 0 && self.night == 0
    }
}

impl Add for MinuteBuckets {
    type Output = MinuteBuckets;

    fn add(self, rhs: MinuteBuckets) -> MinuteBuckets {
        MinuteBuckets {
            overtime: self.overtime + rhs.overtime,
            holiday_excess: self.holiday_excess + rhs.holiday_excess,
            night: self.night + rhs.night,
        }
    }
}
