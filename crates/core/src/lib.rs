//! hunterd Core - error taxonomy, client releases and codec configuration

mod config;
mod error;
mod version;

pub use config::*;
pub use error::*;
pub use version::*;
