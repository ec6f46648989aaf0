//! Per-invocation state for the Bulletin CLI.
//!
//! - Config file and store directory resolution
//! - Lazy config loading shared by every command

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_store_path};
