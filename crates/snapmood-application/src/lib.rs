//! Application layer for snapmood.
//!
//! Use cases that coordinate the preset catalog with configuration.

pub mod preset_selection_service;

pub use preset_selection_service::{PresetSelectionService, Resolution, Selection};
