use chrono::NaiveTime;
use std::ops::RangeInclusive;

const fn wall_clock(hour: u32, min: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, min, 0) {
        Some(time) => time,
        None => panic!("Invalid window bound"),
    }
}

/// Short day tokens in selector order (Monday first)
pub const DAY_TOKENS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Departures counted as morning services (inclusive on both ends)
pub const MORNING_WINDOW: RangeInclusive<NaiveTime> = wall_clock(5, 0)..=wall_clock(10, 0);

/// Departures counted as evening services (inclusive on both ends)
pub const EVENING_WINDOW: RangeInclusive<NaiveTime> = wall_clock(17, 0)..=wall_clock(22, 0);

/// Morning commuter peak (inclusive on both ends)
pub const PEAK_MORNING_WINDOW: RangeInclusive<NaiveTime> = wall_clock(6, 0)..=wall_clock(9, 0);

/// Evening commuter peak (inclusive on both ends)
pub const PEAK_EVENING_WINDOW: RangeInclusive<NaiveTime> = wall_clock(16, 0)..=wall_clock(19, 0);

/// Delay between successive card reveals in the timetable list
pub const STAGGER_INTERVAL_MS: u32 = 100;
