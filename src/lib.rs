pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::{HttpCatalog, MondayGateway};
pub use crate::config::FileConfig;
pub use crate::core::engine::{OrderEngine, OrderInput};
pub use crate::core::form::OrderForm;
pub use crate::utils::error::{OrderError, Result};
