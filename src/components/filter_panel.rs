use chrono::Weekday;
use leptos::{
    component, view, Callable, Callback, IntoView, ReadSignal, Signal, SignalGet, SignalUpdate,
    WriteSignal,
};

use crate::components::day_selector::DaySelector;
use crate::components::station_select::StationSelect;
use crate::models::Station;
use crate::state::FilterState;

#[component]
#[must_use]
pub fn FilterPanel(
    filter: ReadSignal<FilterState>,
    set_filter: WriteSignal<FilterState>,
    stations: ReadSignal<Vec<Station>>,
    today: Weekday,
    on_reset: Callback<()>,
) -> impl IntoView {
    let is_default = move || filter.get().is_default(today);

    view! {
        <div class="filter-panel">
            <h2>"Filter Your Trip"</h2>

            <DaySelector filter=filter set_filter=set_filter />

            <StationSelect
                label="From (Start Station):"
                sentinel="All Start Stations"
                stations=stations
                selected=Signal::derive(move || filter.get().start_station_id)
                on_select=Callback::new(move |id| {
                    set_filter.update(|f| f.start_station_id = id);
                })
            />

            <StationSelect
                label="To (End Station):"
                sentinel="All End Stations"
                stations=stations
                selected=Signal::derive(move || filter.get().end_station_id)
                on_select=Callback::new(move |id| {
                    set_filter.update(|f| f.end_station_id = id);
                })
            />

            <button
                class="reset-button"
                disabled=is_default
                on:click=move |_| on_reset.call(())
            >
                "Reset Filters"
            </button>
        </div>
    }
}
