//! External launcher integration
//!
//! Thin wrappers around processes the warmer starts but does not manage:
//! finding an installed launcher, opening it on its own or for an instance,
//! and revealing an instance folder in the file browser.

pub mod detect;
pub mod launch;
pub mod reveal;

pub use detect::{DetectedLauncher, detect_launcher};
pub use launch::{has_placeholder, launch, open, open_command, render_command};
pub use reveal::reveal;
