//! mcwarm - Minecraft instance cache warmer
//!
//! Finds CurseForge and Prism Launcher instances, picks a prioritized and
//! bounded set of files in each, and reads them so the operating system keeps
//! them in its page cache for the next launch.
//!
//! The pipeline is [`resolver`] -> [`discovery`] -> [`selector`] -> [`executor`].

pub mod common;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod error;
pub mod executor;
pub mod launcher;
pub mod logging;
pub mod progress;
pub mod resolver;
pub mod selector;
