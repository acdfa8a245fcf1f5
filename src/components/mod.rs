#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod day_selector;
pub mod filter_panel;
pub mod preset_buttons;
pub mod station_select;
pub mod timetable_card;
pub mod timetable_list;
