use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::TriageError;

/// One symptom keyword and its candidate causes (loaded from symptom_causes.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomRule {
    pub keyword: String,
    pub causes: Vec<String>,
}

/// One critical keyword and the alert message it raises (alert_rules.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRule {
    pub keyword: String,
    pub message: String,
}

/// One symptom keyword and its over-the-counter guidance (treatment_guide.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentRule {
    pub keyword: String,
    pub guidance: String,
}

const SYMPTOM_CAUSES_FILE: &str = "symptom_causes.json";
const ALERT_RULES_FILE: &str = "alert_rules.json";
const TREATMENT_GUIDE_FILE: &str = "treatment_guide.json";

// Bundled clinical set, embedded at compile time.
const BUNDLED_SYMPTOM_CAUSES: &str = include_str!("../../resources/symptom_causes.json");
const BUNDLED_ALERT_RULES: &str = include_str!("../../resources/alert_rules.json");
const BUNDLED_TREATMENT_GUIDE: &str = include_str!("../../resources/treatment_guide.json");

/// The immutable rule tables the engine matches against.
///
/// Keywords are lowercased at construction; rule order within each table is
/// the declared order of the source data and never re-sorted. Loaded once at
/// process start, read-only for the process lifetime, safe to share across
/// threads without synchronization.
pub struct KnowledgeBase {
    symptom_rules: Vec<SymptomRule>,
    alert_rules: Vec<AlertRule>,
    treatment_rules: Vec<TreatmentRule>,
}

impl KnowledgeBase {
    /// Build a knowledge base from explicit tables, normalizing keywords to
    /// lowercase and rejecting structurally malformed entries.
    pub fn new(
        symptom_rules: Vec<SymptomRule>,
        alert_rules: Vec<AlertRule>,
        treatment_rules: Vec<TreatmentRule>,
    ) -> Result<Self, TriageError> {
        let mut kb = Self {
            symptom_rules,
            alert_rules,
            treatment_rules,
        };
        kb.normalize();
        kb.validate()?;
        Ok(kb)
    }

    /// Load the three rule tables from JSON files in a directory.
    pub fn load(knowledge_dir: &Path) -> Result<Self, TriageError> {
        let symptom_rules = read_table(knowledge_dir, SYMPTOM_CAUSES_FILE)?;
        let alert_rules = read_table(knowledge_dir, ALERT_RULES_FILE)?;
        let treatment_rules = read_table(knowledge_dir, TREATMENT_GUIDE_FILE)?;
        Self::new(symptom_rules, alert_rules, treatment_rules)
    }

    /// Load rule tables from the default knowledge directory
    /// (`config::knowledge_dir()`), for deployments that override the
    /// bundled clinical set.
    pub fn load_default() -> Result<Self, TriageError> {
        Self::load(&crate::config::knowledge_dir())
    }

    /// Load the bundled clinical set (Standard Clinical Set v1.0),
    /// embedded in the binary at compile time.
    pub fn bundled() -> Result<Self, TriageError> {
        let symptom_rules = parse_table(SYMPTOM_CAUSES_FILE, BUNDLED_SYMPTOM_CAUSES)?;
        let alert_rules = parse_table(ALERT_RULES_FILE, BUNDLED_ALERT_RULES)?;
        let treatment_rules = parse_table(TREATMENT_GUIDE_FILE, BUNDLED_TREATMENT_GUIDE)?;
        Self::new(symptom_rules, alert_rules, treatment_rules)
    }

    /// Create a small knowledge base for tests (no file I/O). Includes the
    /// overlapping "fever" / "high fever" pair so overlap policy is covered.
    pub fn load_test() -> Self {
        Self {
            symptom_rules: vec![
                SymptomRule {
                    keyword: "fever".into(),
                    causes: vec![
                        "Infectious Pathology".into(),
                        "Systemic Inflammatory Response".into(),
                    ],
                },
                SymptomRule {
                    keyword: "high fever".into(),
                    causes: vec!["Sepsis Risk".into(), "Heat Stroke".into()],
                },
                SymptomRule {
                    keyword: "chills".into(),
                    causes: vec!["Bacteremia".into(), "Acute Febrile Illness".into()],
                },
                SymptomRule {
                    keyword: "chest pain".into(),
                    causes: vec!["Acute Coronary Syndrome".into(), "GERD".into()],
                },
                SymptomRule {
                    keyword: "cough".into(),
                    causes: vec!["URI".into(), "Bronchitis".into()],
                },
            ],
            alert_rules: vec![
                AlertRule {
                    keyword: "chest pain".into(),
                    message: "High Priority: Rule out ACS/Cardiac Event".into(),
                },
                AlertRule {
                    keyword: "unconscious".into(),
                    message: "Emergency: Immediate Resuscitation Required".into(),
                },
                AlertRule {
                    keyword: "seizure".into(),
                    message: "Emergency: Seizure Management Protocol".into(),
                },
            ],
            treatment_rules: vec![
                TreatmentRule {
                    keyword: "fever".into(),
                    guidance: "Acetaminophen/Paracetamol. Monitor temperature.".into(),
                },
                TreatmentRule {
                    keyword: "cough".into(),
                    guidance: "Antitussives or Expectorants. Hydration.".into(),
                },
            ],
        }
    }

    /// Symptom rules in declared order.
    pub fn symptom_rules(&self) -> &[SymptomRule] {
        &self.symptom_rules
    }

    /// Alert rules in declared order.
    pub fn alert_rules(&self) -> &[AlertRule] {
        &self.alert_rules
    }

    /// Look up over-the-counter guidance for a symptom keyword.
    pub fn treatment_for(&self, keyword: &str) -> Option<&str> {
        let lower = keyword.to_lowercase();
        self.treatment_rules
            .iter()
            .find(|t| t.keyword == lower)
            .map(|t| t.guidance.as_str())
    }

    fn normalize(&mut self) {
        for rule in &mut self.symptom_rules {
            rule.keyword = rule.keyword.to_lowercase();
        }
        for rule in &mut self.alert_rules {
            rule.keyword = rule.keyword.to_lowercase();
        }
        for rule in &mut self.treatment_rules {
            rule.keyword = rule.keyword.to_lowercase();
        }
    }

    fn validate(&self) -> Result<(), TriageError> {
        let mut seen = HashSet::new();
        for rule in &self.symptom_rules {
            check_keyword("symptom", &rule.keyword, &mut seen)?;
            if rule.causes.is_empty() {
                return Err(invalid("symptom", &rule.keyword, "cause list is empty"));
            }
            if rule.causes.iter().any(|c| c.is_empty()) {
                return Err(invalid("symptom", &rule.keyword, "cause label is empty"));
            }
        }

        let mut seen = HashSet::new();
        for rule in &self.alert_rules {
            check_keyword("alert", &rule.keyword, &mut seen)?;
            if rule.message.is_empty() {
                return Err(invalid("alert", &rule.keyword, "message is empty"));
            }
        }

        let mut seen = HashSet::new();
        for rule in &self.treatment_rules {
            check_keyword("treatment", &rule.keyword, &mut seen)?;
            if rule.guidance.is_empty() {
                return Err(invalid("treatment", &rule.keyword, "guidance is empty"));
            }
        }

        Ok(())
    }
}

fn check_keyword<'a>(
    table: &'static str,
    keyword: &'a str,
    seen: &mut HashSet<&'a str>,
) -> Result<(), TriageError> {
    if keyword.is_empty() {
        return Err(invalid(table, keyword, "keyword is empty"));
    }
    if !seen.insert(keyword) {
        return Err(invalid(table, keyword, "duplicate keyword"));
    }
    Ok(())
}

fn invalid(table: &'static str, keyword: &str, problem: &'static str) -> TriageError {
    TriageError::InvalidRule {
        table,
        keyword: keyword.to_string(),
        problem,
    }
}

fn read_table<T: serde::de::DeserializeOwned>(
    dir: &Path,
    file: &str,
) -> Result<Vec<T>, TriageError> {
    let path = dir.join(file);
    let json = std::fs::read_to_string(&path)
        .map_err(|e| TriageError::KnowledgeLoad(path.display().to_string(), e.to_string()))?;
    parse_table(file, &json)
}

fn parse_table<T: serde::de::DeserializeOwned>(
    file: &str,
    json: &str,
) -> Result<Vec<T>, TriageError> {
    serde_json::from_str(json)
        .map_err(|e| TriageError::KnowledgeParse(file.to_string(), e.to_string()))
}
