//! Offline resume analytics: writing-quality and job-match metrics computed
//! locally from resume text and a job description.
//!
//! The core lives in [`analytics`] and is plain synchronous Rust. The binary
//! wraps it in a small axum service.

pub mod analytics;
pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod state;

pub use analytics::{analyze, analyze_with, AnalysisOptions, AnalysisResult};
pub use models::resume::{EducationEntry, ResumeData, ResumeFields};
