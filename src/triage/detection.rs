//! Pure scan passes over the knowledge base. Aggregation lives in the
//! engine; each pass only answers "which rules fire for this text".

use super::helpers::keyword_matches;
use super::knowledge::{AlertRule, KnowledgeBase, SymptomRule};

/// Alert rules whose keyword occurs in the lowercased input, in declared
/// rule order. Every rule is evaluated independently: overlapping keywords
/// all fire, with no suppression or precedence between them.
pub fn matched_alert_rules<'a>(
    knowledge: &'a KnowledgeBase,
    text_lower: &str,
) -> Vec<&'a AlertRule> {
    knowledge
        .alert_rules()
        .iter()
        .filter(|rule| keyword_matches(text_lower, &rule.keyword))
        .collect()
}

/// Symptom rules whose keyword occurs in the lowercased input, in declared
/// rule order.
pub fn matched_symptom_rules<'a>(
    knowledge: &'a KnowledgeBase,
    text_lower: &str,
) -> Vec<&'a SymptomRule> {
    knowledge
        .symptom_rules()
        .iter()
        .filter(|rule| keyword_matches(text_lower, &rule.keyword))
        .collect()
}
