//! Retriever configuration types

use serde::{Deserialize, Serialize};

/// Relevance-decision policy used by the parallel filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JudgeStrategy {
    /// Ask the LLM for a yes/no relevance verdict per chunk
    #[default]
    Binary,
    /// Ask the LLM for a 1-10 relevance score, kept iff score >= threshold
    Scored,
}

/// Configuration for relevance filtering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrieverConfig {
    /// Number of concurrent workers the chunk collection is partitioned across.
    /// A policy knob for the downstream endpoint's parallelism budget, not an
    /// autoscaling decision.
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Relevance-decision policy
    #[serde(default)]
    pub strategy: JudgeStrategy,
    /// Minimum score (inclusive) for a chunk to be kept under `Scored`
    #[serde(default = "default_relevance_threshold")]
    pub relevance_threshold: i32,
    /// Log each chunk's score at info level (operator insight only)
    #[serde(default)]
    pub log_scores: bool,
}

fn default_workers() -> usize {
    4
}

fn default_relevance_threshold() -> i32 {
    5
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            strategy: JudgeStrategy::default(),
            relevance_threshold: default_relevance_threshold(),
            log_scores: false,
        }
    }
}

impl RetrieverConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a binary (yes/no) configuration
    pub fn binary() -> Self {
        Self {
            strategy: JudgeStrategy::Binary,
            ..Default::default()
        }
    }

    /// Create a scored configuration with the given threshold
    pub fn scored(threshold: i32) -> Self {
        Self {
            strategy: JudgeStrategy::Scored,
            relevance_threshold: threshold,
            ..Default::default()
        }
    }

    /// Set the worker count (clamped to at least 1)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the relevance-decision strategy
    pub fn with_strategy(mut self, strategy: JudgeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the inclusive relevance threshold for scored filtering
    pub fn with_relevance_threshold(mut self, threshold: i32) -> Self {
        self.relevance_threshold = threshold;
        self
    }

    /// Set whether per-chunk scores are logged
    pub fn with_log_scores(mut self, log_scores: bool) -> Self {
        self.log_scores = log_scores;
        self
    }
}
