//! Applicant-facing dashboard core for the job portal.
//!
//! The `dashboard` module owns the view-model for a signed-in applicant's
//! dashboard: the list of submitted applications, their lifecycle status, and
//! the withdrawal flow. Remote access, notifications, and navigation are
//! injected collaborator traits so the core can be exercised without a
//! rendering environment or a live portal.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod telemetry;
