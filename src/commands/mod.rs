//! Command implementations for the mcwarm CLI

pub mod completions;
pub mod detect;
pub mod helpers;
pub mod list;
pub mod open;
pub mod plan;
pub mod reveal;
pub mod roots;
pub mod version;
pub mod warm;
