//! Generation preset module.
//!
//! This module contains the preset record, the family tag, and the
//! compiled-in preset tables with their lookup operations.
//!
//! # Module Structure
//!
//! - `model`: Preset record and backend-specific options
//! - `family`: The `PresetFamily` tag
//! - `catalog`: Lookup by `(family, id)`
//! - `emotion_mask`, `ghibli`, `neo_tokyo`: Per-family tables
//!
//! # Usage
//!
//! ```ignore
//! use snapmood_core::preset::{get_preset, is_preset, PresetFamily};
//! ```

mod catalog;
mod emotion_mask;
mod family;
mod ghibli;
mod model;
mod neo_tokyo;

// Re-export public API
pub use catalog::{default_preset, get_preset, ids, is_preset, presets, with_feature};
pub use family::PresetFamily;
pub use model::{Backend, BflOptions, Preset};
