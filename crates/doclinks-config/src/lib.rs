//! # doclinks Configuration Library
//!
//! Configuration for the link extractors in `doclinks-core`.
//!
//! ## Features
//!
//! - TOML and YAML support (`toml` and `yaml` features, both on by default)
//! - Every field has a default, so partial files are valid
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doclinks_config::LinksConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LinksConfig::load_from_file("doclinks.toml")?;
//!     assert!(config.extraction.wikilinks.enabled);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod loader;

pub use config::*;
pub use loader::*;
