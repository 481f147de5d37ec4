// Readiness analysis engine.
// Implements: skill extraction, base/live scoring, 7-day plan, interview questions,
// company tier classification and round mapping.
// All static dictionaries are injected through `engine::Analyzer`; nothing here holds global state.

pub mod company_intel;
pub mod engine;
pub mod export;
pub mod extractor;
pub mod handlers;
pub mod plan;
pub mod questions;
pub mod rounds;
pub mod scoring;
pub mod taxonomy;
pub mod validation;
