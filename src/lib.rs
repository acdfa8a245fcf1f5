pub mod models;
pub mod components;
pub mod api;
pub mod constants;
pub mod time;
pub mod filters;
pub mod state;
pub mod logging;

pub use components::app::App;
