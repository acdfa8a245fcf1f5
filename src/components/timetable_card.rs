use chrono::Weekday;
use gloo_timers::future::TimeoutFuture;
use leptos::{component, create_signal, spawn_local, view, IntoView, SignalGet, SignalSet};

use crate::constants::STAGGER_INTERVAL_MS;
use crate::models::{DaysOfWeek, TimetableEntry};
use crate::time::format_time_12h;

/// One timetable row rendered as a card
///
/// Cards reveal one after another, `STAGGER_INTERVAL_MS` apart by list
/// position. The accent class marks whether the service runs only on the
/// selected day or on several.
#[component]
#[must_use]
pub fn TimetableCard(entry: TimetableEntry, selected_day: Weekday, index: usize) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    let delay = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(STAGGER_INTERVAL_MS);
    spawn_local(async move {
        TimeoutFuture::new(delay).await;
        set_visible.set(true);
    });

    let days = DaysOfWeek::from_token_string(&entry.days_active);
    let accent = if days.is_exactly(selected_day) {
        "single-day"
    } else {
        "multi-day"
    };
    let card_class = move || {
        if visible.get() {
            format!("timetable-card visible {accent}")
        } else {
            format!("timetable-card {accent}")
        }
    };

    view! {
        <div class=card_class>
            <p><strong>"Route: "</strong>{entry.route_id}</p>
            <p><strong>"Departure: "</strong>{format_time_12h(&entry.departure_time)}</p>
            <p><strong>"Arrival: "</strong>{format_time_12h(&entry.arrival_time)}</p>
            <p><strong>"From: "</strong>{entry.start_station_name().to_string()}</p>
            <p><strong>"To: "</strong>{entry.end_station_name().to_string()}</p>
            <p><strong>"Active Days: "</strong>{days.to_display_string()}</p>
        </div>
    }
}
