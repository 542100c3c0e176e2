//! Tunable constants of the search

use crate::error::ConfigError;

/// Search strength and scoring constants
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Nodes deeper than this many plies below the root are scored as draws
    pub depth_cutoff: usize,
    /// A win found at depth `d` scores `win_score - d`, a loss `d - win_score`
    pub win_score: i32,
    /// Initial best score of a node and the root alpha-beta window.
    /// Must lie outside every reachable score.
    pub score_bound: i32,
    /// Whether to cut off siblings with alpha-beta pruning
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_cutoff: 4,
            win_score: 10,
            score_bound: 1000,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Disables alpha-beta pruning, searching every node below the root
    pub fn exhaustive(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn with_depth_cutoff(mut self, depth_cutoff: usize) -> Self {
        self.depth_cutoff = depth_cutoff;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // the deepest node examined sits at depth_cutoff + 1
        let deepest = i32::try_from(self.depth_cutoff)
            .ok()
            .and_then(|depth| depth.checked_add(1))
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "depth_cutoff ({}) is too large",
                    self.depth_cutoff
                ))
            })?;
        if self.win_score <= deepest {
            return Err(ConfigError::Validation(format!(
                "win_score ({}) must be greater than depth_cutoff + 1 ({})",
                self.win_score, deepest
            )));
        }
        if self.score_bound <= self.win_score {
            return Err(ConfigError::Validation(format!(
                "score_bound ({}) must be greater than win_score ({})",
                self.score_bound, self.win_score
            )));
        }
        Ok(())
    }
}
