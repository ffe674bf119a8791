pub mod app;
pub mod settings_panel;
pub mod swipe_pad;

pub use app::App;
