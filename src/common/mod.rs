//! Common utility modules for shared functionality across the codebase.

pub mod display_utils;
pub mod path_normalizer;

pub use display_utils::{format_size, truncate_path};
pub use path_normalizer::{canonicalize, relative_forward_slashes};
