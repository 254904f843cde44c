//! Application-level utilities for the Ascent CLI.
//!
//! This module provides:
//! - Config path resolution and loading
//! - The per-invocation `AppContext`

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{missing_config_hint, resolve_config_path, LoadedConfig};
