use leptos::{component, view, Callable, Callback, IntoView, ReadSignal, SignalGet};

use crate::models::Preset;
use crate::state::ResultSets;

#[component]
#[must_use]
pub fn PresetButtons(
    results: ReadSignal<ResultSets>,
    on_preset: Callback<Preset>,
) -> impl IntoView {
    let preset_button = move |preset: Preset, extra_class: &'static str| {
        let class = move || {
            let active = results.get().active_preset == preset;
            let mut class = format!("preset-button {extra_class}");
            if active {
                class.push_str(" active");
            }
            class
        };
        view! {
            <button class=class on:click=move |_| on_preset.call(preset)>
                {preset.button_label()}
            </button>
        }
    };

    view! {
        <div class="preset-buttons">
            {preset_button(Preset::MorningOnly, "")}
            {preset_button(Preset::EveningOnly, "")}
            {preset_button(Preset::PeakHours, "peak")}
            {preset_button(Preset::AllTrains, "reset")}
        </div>
        <p class="viewing-status">
            "Currently viewing: "
            <strong>{move || results.get().active_preset.label()}</strong>
        </p>
    }
}
