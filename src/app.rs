mod app_events;
mod app_render;
mod app_state;

pub use app_events::STILL_COOKING;
pub use app_state::App;



#[cfg(test)]
#[path = "app/app_render_tests.rs"]
mod app_render_tests;
