//! dze-core: config model, types.xml parser/writer, and editing logic
//!
//! This crate keeps a small surface:
//! - YAML change-list model and loader (serde)
//! - Owned XML tree for types.xml, read and written with quick-xml
//! - The updater that applies change records in place
//! - JSON dump of type entries for CLI inspection
//! - Timestamped zip backup of a types file or mission directory
//!
pub mod apply;
pub mod backup;
pub mod config;
pub mod error;
pub mod json;
pub mod xmlfmt;
pub mod xmlfmt_write;

pub use apply::{ApplyReport, apply_change, apply_config};
pub use config::{Config, ItemChange, TierSpec, load_config};
pub use error::{Error, Result};
pub use xmlfmt::{Element, Node, TypesDoc, parse_types, read_types};
pub use xmlfmt_write::{serialize_types, write_types};
