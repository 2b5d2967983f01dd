//! Core engine for automated home-loan document assessment.
//!
//! The library takes an ordered batch of recognized-text documents (text
//! acquisition lives with an external collaborator), classifies each one,
//! extracts typed facts, merges them into a single applicant profile, and
//! computes FOIR-based loan eligibility plus the follow-up report data.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
