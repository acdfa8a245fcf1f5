use chrono::Weekday;
use leptos::{
    component, event_target_value, view, IntoView, ReadSignal, SignalGet, WriteSignal,
    SignalUpdate,
};

use crate::constants::DAY_TOKENS;
use crate::models::{weekday_long_name, weekday_token};
use crate::state::FilterState;

#[component]
#[must_use]
pub fn DaySelector(
    filter: ReadSignal<FilterState>,
    set_filter: WriteSignal<FilterState>,
) -> impl IntoView {
    view! {
        <div class="filter-row">
            <label><strong>"Select a Day:"</strong></label>
            <select
                class="filter-select"
                prop:value=move || weekday_token(filter.get().selected_day).to_string()
                on:change=move |ev| {
                    if let Ok(day) = event_target_value(&ev).parse::<Weekday>() {
                        set_filter.update(|f| f.selected_day = day);
                    }
                }
            >
                {DAY_TOKENS.iter().map(|token| {
                    let day = token.parse::<Weekday>();
                    let label = day.map_or(*token, weekday_long_name);
                    view! {
                        <option value=*token>{label}</option>
                    }
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}
