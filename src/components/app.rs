use leptos::{
    component, create_effect, create_signal, spawn_local, view, Callable, Callback, IntoView,
    SignalGet, SignalSet, SignalUpdate,
};
use leptos_meta::{provide_meta_context, Stylesheet, Title};

use chrono::{Datelike, Local};

use crate::api;
use crate::components::filter_panel::FilterPanel;
use crate::components::preset_buttons::PresetButtons;
use crate::components::timetable_list::TimetableList;
use crate::models::{weekday_token, Preset, Station};
use crate::state::{FetchGuard, FilterState, ResultSets};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Computed once at mount; reset and the default day both refer to this
    // value, so the view stays coherent across a midnight boundary.
    let today = Local::now().weekday();

    let (filter, set_filter) = create_signal(FilterState::new(today));
    let (stations, set_stations) = create_signal(Vec::<Station>::new());
    let (results, set_results) = create_signal(ResultSets::default());
    let guard = FetchGuard::default();

    // Station directory loads once; on failure the selectors keep only
    // their "All Stations" sentinel.
    spawn_local(async move {
        match api::fetch_stations().await {
            Ok(directory) => set_stations.set(directory),
            Err(e) => leptos::logging::error!("Failed to load station directory: {e}"),
        }
    });

    // Query orchestrator: one fetch per filter change, stale responses
    // discarded by generation.
    create_effect({
        let guard = guard.clone();
        move |_| {
            let current = filter.get();
            let generation = guard.begin();
            crate::log!(
                "Fetching timetables for {}",
                weekday_token(current.selected_day)
            );
            let guard = guard.clone();
            spawn_local(async move {
                let fetched =
                    api::fetch_timetables_for_day(weekday_token(current.selected_day)).await;
                if !guard.is_current(generation) {
                    crate::log!("Discarding stale timetable response ({generation})");
                    return;
                }
                match fetched {
                    Ok(rows) => set_results.update(|sets| sets.apply_fetch(rows, &current)),
                    Err(e) => {
                        leptos::logging::error!("Failed to fetch timetables: {e}");
                        set_results.update(ResultSets::fetch_failed);
                    }
                }
            });
        }
    });

    // The one reset contract: clear both station filters, go back to
    // today, restore the baseline. Both the Reset Filters button and the
    // Show All preset end up here.
    let reset_all = Callback::new(move |()| {
        set_filter.update(|f| f.reset(today));
        set_results.update(|sets| sets.apply_preset(Preset::AllTrains));
    });

    let on_preset = Callback::new(move |preset: Preset| match preset {
        Preset::AllTrains => reset_all.call(()),
        other => set_results.update(|sets| sets.apply_preset(other)),
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rail_rider.css"/>
        <Title text="Today's Train Timetable"/>

        <div class="app">
            <h1>"Today's Train Timetable"</h1>

            <FilterPanel
                filter=filter
                set_filter=set_filter
                stations=stations
                today=today
                on_reset=reset_all
            />

            <PresetButtons results=results on_preset=on_preset />

            <TimetableList filter=filter results=results />

            <p class="footer-tagline">
                "Built for South Africa's rail riders. Live data, smart filters, smoother commutes."
            </p>
        </div>
    }
}
