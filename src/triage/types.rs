use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// TriageOutcome
// ---------------------------------------------------------------------------

/// The three result shapes a renderer must distinguish.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TriageOutcome {
    /// No symptom keyword matched and no alert fired.
    NothingRecognized,
    /// Alerts fired but no symptom was classified. Alert keywords are an
    /// independent table, so this happens for phrases like "unconscious"
    /// that carry no symptom rule.
    AlertsOnly,
    /// At least one symptom was classified; alerts may also be present.
    Classified,
}

// ---------------------------------------------------------------------------
// AnalysisResult & MatchCounts
// ---------------------------------------------------------------------------

/// Everything one `analyze` call found, ready for rendering.
/// Ephemeral: no identity beyond the call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Symptom keywords found in the input, in rule scan order.
    pub detected_symptoms: Vec<String>,
    /// Candidate causes across all matched symptoms, deduplicated and
    /// sorted lexicographically ascending.
    pub etiologies: Vec<String>,
    /// Formatted guidance lines, one per matched symptom that has a
    /// treatment entry, in rule scan order.
    pub treatments: Vec<String>,
    /// Alert messages, in rule scan order.
    pub alerts: Vec<String>,
    pub counts: MatchCounts,
}

impl AnalysisResult {
    pub fn outcome(&self) -> TriageOutcome {
        if !self.detected_symptoms.is_empty() {
            TriageOutcome::Classified
        } else if !self.alerts.is_empty() {
            TriageOutcome::AlertsOnly
        } else {
            TriageOutcome::NothingRecognized
        }
    }
}

/// Per-collection sizes, for logging and renderer summaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchCounts {
    pub symptoms: usize,
    pub etiologies: usize,
    pub treatments: usize,
    pub alerts: usize,
}

impl MatchCounts {
    pub fn total(&self) -> usize {
        self.symptoms + self.etiologies + self.treatments + self.alerts
    }
}

// ---------------------------------------------------------------------------
// TriageError
// ---------------------------------------------------------------------------

/// Construction-time failures only. `analyze` itself has no error path:
/// unrecognized input is a normal empty result.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Knowledge data load failed ({0}): {1}")]
    KnowledgeLoad(String, String),

    #[error("Knowledge data parse failed ({0}): {1}")]
    KnowledgeParse(String, String),

    #[error("Invalid {table} rule '{keyword}': {problem}")]
    InvalidRule {
        table: &'static str,
        keyword: String,
        problem: &'static str,
    },
}

// ---------------------------------------------------------------------------
// TriageEngine trait
// ---------------------------------------------------------------------------

/// The main triage engine trait.
pub trait TriageEngine {
    /// Classify one free-text symptom description against the loaded rules.
    ///
    /// Infallible: arbitrary input (empty, punctuation, unrelated prose)
    /// produces a possibly-empty result, never an error.
    fn analyze(&self, text: &str) -> AnalysisResult;
}
