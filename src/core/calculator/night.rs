use super::DAY_MINUTES;

const NIGHT_MORNING_END: i64 = 6 * 60;
const NIGHT_EVENING_START: i64 = 22 * 60;

/// Minutes of `[from, to)` falling in 00:00-06:00 or 22:00-24:00 of any
/// spanned day. Offsets are minutes since midnight of the start day.
pub fn night_minutes(from: i64, to: i64) -> i64 {
    if to <= from {
        return 0;
    }

    let last_day = (to + DAY_MINUTES - 1) / DAY_MINUTES + 1;
    let mut total = 0;

    for n in 0..=last_day {
        let base = n * DAY_MINUTES;
        total += overlap(from, to, base, base + NIGHT_MORNING_END);
        total += overlap(from, to, base + NIGHT_EVENING_START, base + DAY_MINUTES);
    }

    total
}

fn overlap(from: i64, to: i64, lo: i64, hi: i64) -> i64 {
    (to.min(hi) - from.max(lo)).max(0)
}
