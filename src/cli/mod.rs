mod app;
mod main;
mod menu;
mod prompt;

pub use app::*;
pub use main::*;
pub use menu::*;
pub use prompt::*;
