pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod keywords;
pub mod launch;
pub mod resolve;
pub mod util;

pub use cli::Cli;
pub use config::Config;
pub use engine::{best_effort_copy, Operation, TemplateEngine};
pub use error::{Error, Result};
pub use keywords::{extension_for, Keywords};
pub use launch::{Launcher, SystemLauncher};
pub use resolve::TemplateLocation;
