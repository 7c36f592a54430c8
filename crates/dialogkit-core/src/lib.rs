//! # dialogkit-core
//!
//! Shared helpers for conversational agent tooling.
//!
//! This crate bundles the small pieces of glue a dialogue framework keeps
//! reaching for: YAML and JSON files, logging setup, terminal prompts,
//! random subsampling, hashable numeric arrays and a name-based component
//! registry. The `dialogkit` binary in `dialogkit-cli` exposes a few of them
//! on the command line.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dialogkit_core::prelude::*;
//!
//! fn main() -> dialogkit_core::Result<()> {
//!     LoggingConfig::new(LogLevel::Info).init()?;
//!
//!     let domain: serde_yaml::Value = read_yaml_file("domain.yml")?;
//!     dump_json_to_file("domain.json", &domain)?;
//!
//!     let answer = request_input(Some(&["y".into(), "n".into()]), Some("Continue? "), 3)?;
//!     println!("{}", cap_length(&answer, 20, true));
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`storage`]: text, JSON, YAML and zip helpers plus the TOML config
//! - [`utils`]: logging, prompts, text helpers, sampling, thread joining
//! - [`array`]: hashable `ndarray` wrapper, one-hot vectors
//! - [`registry`]: dotted-path component registry
//! - [`constants`]: framework-wide defaults
//! - [`error`]: hierarchical error system with troubleshooting hints

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use dialogkit_core::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // Storage
    pub use crate::storage::archive::zip_folder;
    pub use crate::storage::config::Config;
    pub use crate::storage::file::{
        create_dir_for_file, dump_json_to_file, dump_str_to_file, read_file, read_json_file,
    };
    pub use crate::storage::yaml::{
        dump_yaml_to_file, dump_yaml_to_string, read_yaml_file, read_yaml_string,
    };

    // Utilities
    pub use crate::utils::args::extract_args;
    pub use crate::utils::color::{TermColor, print_color, wrap_with_color};
    pub use crate::utils::input::request_input;
    pub use crate::utils::lazy::LazyValue;
    pub use crate::utils::logging::{LogLevel, LoggingArgs, LoggingConfig};
    pub use crate::utils::sampling::{subsample_array, subsample_slice};
    pub use crate::utils::text::{cap_length, generate_id, is_int, str_range_list};
    pub use crate::utils::threads::wait_for_threads;

    // Arrays and registry
    pub use crate::array::{HashableArray, is_training_data_empty, one_hot};
    pub use crate::registry::{Registry, module_path_from_instance};
}

/// Numeric array helpers.
///
/// - [`array::hashable`]: content-hashed array wrapper for sets and maps
/// - [`array::ops`]: one-hot vectors, empty training data check
pub mod array;

/// Framework-wide defaults (server port, fallback thresholds, ...)
pub mod constants;

/// Error handling - hierarchical error system.
///
/// - Domain-specific error variants (Storage, Input, Array, ...)
/// - Severity levels (Critical, High, Medium, Low)
/// - Troubleshooting hints for common issues
pub mod error;

/// Component registry keyed by dotted paths
pub mod registry;

/// Storage layer - file formats and configuration persistence.
///
/// - [`storage::file`]: plain text and JSON files
/// - [`storage::yaml`]: block-style, order-preserving YAML
/// - [`storage::archive`]: zip archives of directories
/// - [`storage::config`]: TOML configuration
pub mod storage;

/// Utilities layer - small independent helpers.
pub mod utils;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
