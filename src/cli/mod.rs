pub mod app;
mod commands;
mod interactive;

pub use app::App;
pub use commands::{Args, Commands};
pub use interactive::DataCollector;
