mod app;
mod args;
mod data_path;
mod logging;
pub mod setup;

pub use app::HerdbookApp;
pub use args::Args;
pub use data_path::{DataPath, DataPathType};
pub use logging::setup_logging;
