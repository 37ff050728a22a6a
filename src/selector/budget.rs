//! Byte limit shared across the instances of one run

use crate::config::SelectionConfig;

/// What is left of `max_total_bytes` after earlier instances.
///
/// Each instance is planned against the remainder, so a run over several
/// instances never reads more than the configured limit in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteBudget {
    /// `None` when unbounded
    remaining: Option<u64>,
}

impl ByteBudget {
    pub fn new(limit: Option<u64>) -> Self {
        Self { remaining: limit }
    }

    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Selection settings for the next instance, `None` once nothing is left
    pub fn selection_for(&self, base: &SelectionConfig) -> Option<SelectionConfig> {
        if self.is_exhausted() {
            return None;
        }
        let mut selection = base.clone();
        selection.max_total_bytes = self.remaining;
        Some(selection)
    }

    /// Charge bytes read (or planned) by an instance
    pub fn consume(&mut self, bytes: u64) {
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(bytes);
        }
    }
}
