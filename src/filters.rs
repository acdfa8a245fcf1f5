use std::ops::RangeInclusive;

use chrono::NaiveTime;

use crate::constants::{EVENING_WINDOW, MORNING_WINDOW, PEAK_EVENING_WINDOW, PEAK_MORNING_WINDOW};
use crate::models::TimetableEntry;
use crate::time::parse_wall_clock;

/// Whether a service runs on the day named by a 3-letter token
///
/// Mirrors the remote query's case-insensitive substring match, so the same
/// predicate holds locally for rows the query returned.
#[must_use]
pub fn runs_on_day(entry: &TimetableEntry, day_token: &str) -> bool {
    entry
        .days_active
        .to_ascii_lowercase()
        .contains(&day_token.to_ascii_lowercase())
}

/// Station post-filter: each side is a no-op when unset, exact id match
/// against the resolved route endpoint otherwise
#[must_use]
pub fn matches_stations(
    entry: &TimetableEntry,
    start_station_id: Option<i64>,
    end_station_id: Option<i64>,
) -> bool {
    let start_ok = start_station_id.is_none_or(|id| entry.start_station_id() == Some(id));
    let end_ok = end_station_id.is_none_or(|id| entry.end_station_id() == Some(id));
    start_ok && end_ok
}

fn departs_within(entry: &TimetableEntry, windows: &[RangeInclusive<NaiveTime>]) -> bool {
    match parse_wall_clock(&entry.departure_time) {
        Ok(departure) => windows.iter().any(|w| w.contains(&departure)),
        Err(_) => {
            // Unparseable departure times are excluded rather than crashing
            leptos::logging::warn!(
                "Unparseable departure_time {:?} on entry {}; excluding from preset",
                entry.departure_time,
                entry.id
            );
            false
        }
    }
}

/// Services departing in the morning window (05:00-10:00 inclusive)
#[must_use]
pub fn morning_only(entries: &[TimetableEntry]) -> Vec<TimetableEntry> {
    entries
        .iter()
        .filter(|e| departs_within(e, &[MORNING_WINDOW]))
        .cloned()
        .collect()
}

/// Services departing in the evening window (17:00-22:00 inclusive)
#[must_use]
pub fn evening_only(entries: &[TimetableEntry]) -> Vec<TimetableEntry> {
    entries
        .iter()
        .filter(|e| departs_within(e, &[EVENING_WINDOW]))
        .cloned()
        .collect()
}

/// Services departing in either commuter peak (06:00-09:00 or 16:00-19:00,
/// inclusive)
#[must_use]
pub fn peak_hours(entries: &[TimetableEntry]) -> Vec<TimetableEntry> {
    entries
        .iter()
        .filter(|e| departs_within(e, &[PEAK_MORNING_WINDOW, PEAK_EVENING_WINDOW]))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RouteEndpoints, Station};

    fn entry(id: i64, departure: &str, days: &str) -> TimetableEntry {
        TimetableEntry {
            id,
            route_id: id,
            departure_time: departure.to_string(),
            arrival_time: "23:59:00".to_string(),
            days_active: days.to_string(),
            routes: None,
        }
    }

    fn entry_with_route(id: i64, start: (i64, &str), end: (i64, &str)) -> TimetableEntry {
        TimetableEntry {
            routes: Some(RouteEndpoints {
                start_station: Some(Station {
                    id: start.0,
                    name: start.1.to_string(),
                }),
                end_station: Some(Station {
                    id: end.0,
                    name: end.1.to_string(),
                }),
            }),
            ..entry(id, "08:00:00", "Mon")
        }
    }

    fn departures(entries: &[TimetableEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.departure_time.as_str()).collect()
    }

    #[test]
    fn test_runs_on_day_substring() {
        let fixture = [
            entry(1, "08:00:00", "Mon"),
            entry(2, "08:00:00", "MonWed"),
            entry(3, "08:00:00", "Tue"),
        ];
        let matched: Vec<i64> = fixture
            .iter()
            .filter(|e| runs_on_day(e, "Mon"))
            .map(|e| e.id)
            .collect();
        assert_eq!(matched, vec![1, 2]);
    }

    #[test]
    fn test_runs_on_day_case_insensitive() {
        let e = entry(1, "08:00:00", "SATSUN");
        assert!(runs_on_day(&e, "Sat"));
        assert!(runs_on_day(&e, "sun"));
        assert!(!runs_on_day(&e, "Fri"));
    }

    #[test]
    fn test_matches_stations_both_unset_is_noop() {
        let e = entry_with_route(1, (1, "Cape Town"), (4, "Bellville"));
        assert!(matches_stations(&e, None, None));
    }

    #[test]
    fn test_matches_stations_exact_per_side() {
        let e = entry_with_route(1, (1, "Cape Town"), (4, "Bellville"));
        assert!(matches_stations(&e, Some(1), None));
        assert!(matches_stations(&e, None, Some(4)));
        assert!(matches_stations(&e, Some(1), Some(4)));
        assert!(!matches_stations(&e, Some(2), None));
        assert!(!matches_stations(&e, Some(1), Some(5)));
    }

    #[test]
    fn test_matches_stations_unresolved_route_fails_active_filter() {
        let e = entry(1, "08:00:00", "Mon");
        assert!(matches_stations(&e, None, None));
        assert!(!matches_stations(&e, Some(1), None));
        assert!(!matches_stations(&e, None, Some(4)));
    }

    #[test]
    fn test_morning_only_boundaries() {
        let fixture = [
            entry(1, "04:59:00", "Mon"),
            entry(2, "05:00:00", "Mon"),
            entry(3, "10:00:00", "Mon"),
            entry(4, "10:01:00", "Mon"),
        ];
        let kept = morning_only(&fixture);
        assert_eq!(departures(&kept), vec!["05:00:00", "10:00:00"]);
    }

    #[test]
    fn test_evening_only_boundaries() {
        let fixture = [
            entry(1, "16:59:00", "Mon"),
            entry(2, "17:00:00", "Mon"),
            entry(3, "22:00:00", "Mon"),
            entry(4, "22:01:00", "Mon"),
        ];
        let kept = evening_only(&fixture);
        assert_eq!(departures(&kept), vec!["17:00:00", "22:00:00"]);
    }

    #[test]
    fn test_peak_hours_boundaries() {
        let fixture = [
            entry(1, "05:59:00", "Mon"),
            entry(2, "06:00:00", "Mon"),
            entry(3, "09:00:00", "Mon"),
            entry(4, "09:01:00", "Mon"),
            entry(5, "15:59:00", "Mon"),
            entry(6, "16:00:00", "Mon"),
            entry(7, "19:00:00", "Mon"),
            entry(8, "19:01:00", "Mon"),
        ];
        let kept = peak_hours(&fixture);
        assert_eq!(
            departures(&kept),
            vec!["06:00:00", "09:00:00", "16:00:00", "19:00:00"]
        );
    }

    #[test]
    fn test_unparseable_departure_excluded() {
        let fixture = [entry(1, "sixish", "Mon"), entry(2, "06:30:00", "Mon")];
        let kept = peak_hours(&fixture);
        assert_eq!(departures(&kept), vec!["06:30:00"]);
        assert!(morning_only(&fixture).iter().all(|e| e.id == 2));
    }
}
