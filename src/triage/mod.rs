//! Rule-matching triage over the clinical knowledge base.
//!
//! `KnowledgeBase` holds three immutable rule tables loaded once at process
//! start; `DefaultTriageEngine` scans lowercased input text against them and
//! aggregates the four result collections. No tokenization, no NLU: matching
//! is substring containment, and the whole policy lives in one primitive
//! (`helpers::keyword_matches`).

pub mod detection;
pub mod engine;
pub mod helpers;
pub mod knowledge;
pub mod types;
