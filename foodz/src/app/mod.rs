mod app_config;
mod app_error;
mod foodz_app;
mod render;

pub use app_config::FoodzAppConfig;
pub use app_error::FoodzAppError;
pub use foodz_app::{FoodzCliArguments, FoodzOperation, LocationArgs};
pub use render::{render_detail, render_row};
