//! Clinsight — rule-based clinical triage over a static knowledge base.
//!
//! The engine matches free-text symptom descriptions against three immutable
//! rule tables (symptom→causes, alert-keyword→message, symptom→treatment)
//! and returns the recognized symptoms, candidate etiologies, over-the-counter
//! guidance, and critical-priority alerts. Decision-support aid for
//! non-diagnostic triage; not a medical device. Rendering is the caller's job.

pub mod config;
pub mod triage;

pub use triage::engine::DefaultTriageEngine;
pub use triage::knowledge::{AlertRule, KnowledgeBase, SymptomRule, TreatmentRule};
pub use triage::types::{AnalysisResult, MatchCounts, TriageEngine, TriageError, TriageOutcome};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for host applications that do not install their own
/// subscriber. Honors `RUST_LOG`, falling back to the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Clinsight tracing initialized v{}", config::APP_VERSION);
}
