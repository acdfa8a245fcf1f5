use leptos::{
    component, event_target_value, view, Callable, Callback, IntoView, ReadSignal, Signal,
    SignalGet,
};

use crate::models::Station;

/// Dropdown over the station directory with an "All ..." sentinel option
///
/// An empty selection value maps to `None`, which disables that side of the
/// station post-filter.
#[component]
#[must_use]
pub fn StationSelect(
    label: &'static str,
    sentinel: &'static str,
    stations: ReadSignal<Vec<Station>>,
    selected: Signal<Option<i64>>,
    on_select: Callback<Option<i64>>,
) -> impl IntoView {
    view! {
        <div class="filter-row">
            <label><strong>{label}</strong></label>
            <select
                class="filter-select"
                prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    on_select.call(value.parse::<i64>().ok());
                }
            >
                <option value="">{sentinel}</option>
                {move || stations.get().iter().map(|station| {
                    view! {
                        <option value=station.id.to_string()>{station.name.clone()}</option>
                    }
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}
