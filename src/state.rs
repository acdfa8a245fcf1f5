use std::cell::Cell;
use std::rc::Rc;

use chrono::Weekday;

use crate::filters;
use crate::models::{weekday_token, Preset, TimetableEntry};

/// The three rider-facing filters
///
/// `selected_day` always holds a value; "today" is computed once at mount and
/// threaded through so the default cannot drift across a midnight boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub selected_day: Weekday,
    pub start_station_id: Option<i64>,
    pub end_station_id: Option<i64>,
}

impl FilterState {
    #[must_use]
    pub const fn new(today: Weekday) -> Self {
        Self {
            selected_day: today,
            start_station_id: None,
            end_station_id: None,
        }
    }

    /// Whether every filter sits at its default (controls the reset button)
    #[must_use]
    pub fn is_default(&self, today: Weekday) -> bool {
        self.selected_day == today
            && self.start_station_id.is_none()
            && self.end_station_id.is_none()
    }

    /// Canonical reset: both stations cleared, day back to the mount-time today
    pub fn reset(&mut self, today: Weekday) {
        *self = Self::new(today);
    }
}

/// Result sets owned by the query orchestrator
///
/// `all_trains` is the baseline (day-fetched, station-filtered); `timetables`
/// is what the cards render. Presets select subsets, they never mutate rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSets {
    pub all_trains: Vec<TimetableEntry>,
    pub timetables: Vec<TimetableEntry>,
    pub active_preset: Preset,
}

impl ResultSets {
    /// Apply a successful day fetch
    ///
    /// Rows are run through the local day and station predicates (the day
    /// check mirrors the remote match and is idempotent on its results) and
    /// become both the displayed set and the baseline. Any active preset is
    /// dropped.
    pub fn apply_fetch(&mut self, rows: Vec<TimetableEntry>, filter: &FilterState) {
        let day_token = weekday_token(filter.selected_day);
        let kept: Vec<TimetableEntry> = rows
            .into_iter()
            .filter(|row| {
                filters::runs_on_day(row, day_token)
                    && filters::matches_stations(
                        row,
                        filter.start_station_id,
                        filter.end_station_id,
                    )
            })
            .collect();
        self.all_trains.clone_from(&kept);
        self.timetables = kept;
        self.active_preset = Preset::AllTrains;
    }

    /// Apply a failed day fetch: empty the display, keep the stale baseline
    pub fn fetch_failed(&mut self) {
        self.timetables.clear();
        self.active_preset = Preset::AllTrains;
    }

    /// Apply a preset button
    ///
    /// Morning and evening cascade on the current display; peak starts over
    /// from the baseline; `AllTrains` restores the baseline.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.timetables = match preset {
            Preset::AllTrains => self.all_trains.clone(),
            Preset::MorningOnly => filters::morning_only(&self.timetables),
            Preset::EveningOnly => filters::evening_only(&self.timetables),
            Preset::PeakHours => filters::peak_hours(&self.all_trains),
        };
        self.active_preset = preset;
    }
}

/// Matches in-flight fetches to the request that issued them
///
/// Overlapping day fetches are not cancelled; instead each fetch records a
/// generation at issue time and a response is applied only while its
/// generation is still the latest. Last request issued wins.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard(Rc<Cell<u64>>);

impl FetchGuard {
    /// Start a new fetch, invalidating all earlier ones
    #[must_use]
    pub fn begin(&self) -> u64 {
        let generation = self.0.get() + 1;
        self.0.set(generation);
        generation
    }

    /// Whether a fetch started as `generation` may still apply its response
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.0.get() == generation
    }
}
