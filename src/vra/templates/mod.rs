//! Request templates module

mod api;
mod merge;

pub use merge::{apply_overrides, split_path, FieldOverride};
