//! Domain models for mcwarm
//!
//! Plain data flowing through the pipeline: discovery produces [`Instance`]s,
//! selection turns one into a [`WarmPlan`], execution turns the plan into a
//! [`WarmResult`]. No stage mutates the output of another.

pub mod candidate;
pub mod instance;
pub mod plan;
pub mod result;

pub use candidate::{CandidateFile, Category};
pub use instance::{Instance, LauncherKind};
pub use plan::{SkipReason, SkippedFile, WarmPlan};
pub use result::{FileOutcome, FileReport, RunState, WarmMode, WarmResult};
