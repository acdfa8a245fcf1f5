mod days_of_week;
mod preset;
mod station;
mod timetable;

pub use days_of_week::{weekday_long_name, weekday_token, DaysOfWeek};
pub use preset::Preset;
pub use station::Station;
pub use timetable::{RouteEndpoints, TimetableEntry};
