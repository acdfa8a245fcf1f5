use leptos::{component, view, IntoView, ReadSignal, SignalGet};

use crate::components::timetable_card::TimetableCard;
use crate::models::weekday_long_name;
use crate::state::{FilterState, ResultSets};

#[component]
#[must_use]
pub fn TimetableList(
    filter: ReadSignal<FilterState>,
    results: ReadSignal<ResultSets>,
) -> impl IntoView {
    view! {
        {move || {
            let sets = results.get();
            let selected_day = filter.get().selected_day;
            if sets.timetables.is_empty() {
                view! {
                    <p class="no-trains">
                        "No trains scheduled for "
                        <strong>{weekday_long_name(selected_day)}</strong>
                        ". Try another day or adjust your filters."
                    </p>
                }.into_view()
            } else {
                sets.timetables
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        view! {
                            <TimetableCard entry=entry selected_day=selected_day index=index />
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_view()
            }
        }}
    }
}
