use std::collections::BTreeSet;
use std::time::Instant;

use super::detection::{matched_alert_rules, matched_symptom_rules};
use super::helpers::format_treatment;
use super::knowledge::KnowledgeBase;
use super::types::{AnalysisResult, MatchCounts, TriageEngine};

/// Default implementation of the triage engine.
///
/// Holds the knowledge base and nothing else: every `analyze` call is a pure
/// function of the tables and the input text, so one engine instance can
/// serve any number of concurrent callers.
pub struct DefaultTriageEngine {
    knowledge: KnowledgeBase,
}

impl DefaultTriageEngine {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}

impl TriageEngine for DefaultTriageEngine {
    fn analyze(&self, text: &str) -> AnalysisResult {
        let start = Instant::now();

        // Lowercasing is the only normalization. No trimming, no
        // tokenization: matching is substring containment.
        let text_lower = text.to_lowercase();

        let alerts: Vec<String> = matched_alert_rules(&self.knowledge, &text_lower)
            .into_iter()
            .map(|rule| rule.message.clone())
            .collect();

        let mut detected_symptoms = Vec::new();
        let mut causes = BTreeSet::new();
        let mut treatments = Vec::new();
        for rule in matched_symptom_rules(&self.knowledge, &text_lower) {
            detected_symptoms.push(rule.keyword.clone());
            causes.extend(rule.causes.iter().cloned());
            if let Some(guidance) = self.knowledge.treatment_for(&rule.keyword) {
                treatments.push(format_treatment(&rule.keyword, guidance));
            }
        }

        // BTreeSet already gives deduplicated, ascending etiologies.
        let etiologies: Vec<String> = causes.into_iter().collect();

        let counts = MatchCounts {
            symptoms: detected_symptoms.len(),
            etiologies: etiologies.len(),
            treatments: treatments.len(),
            alerts: alerts.len(),
        };

        tracing::debug!(
            symptoms = counts.symptoms,
            alerts = counts.alerts,
            processing_ms = start.elapsed().as_millis() as u64,
            "Triage analysis complete"
        );

        AnalysisResult {
            detected_symptoms,
            etiologies,
            treatments,
            alerts,
            counts,
        }
    }
}
