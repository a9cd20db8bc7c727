//! Complaint intake: screening, duplicate detection, and priority triage.
//!
//! The surrounding portal collects the submission form and owns persistence;
//! this module owns the decision taken between the two. [`IntakeClassifier`]
//! is the pure rule engine, and [`service::IntakeService`] wraps it with the
//! submission screening guard and the per-key serialization that keeps
//! concurrent duplicate submissions from both reaching the store.

pub mod classification;
pub mod domain;
pub mod geo;
pub mod repository;
pub(crate) mod screening;
pub mod service;

#[cfg(test)]
mod tests;

pub use classification::{
    ClassificationError, IntakeClassifier, IntakeDecision, IntakePolicy, Priority, RejectionReason,
};
pub use domain::{
    ActiveComplaint, CandidateComplaint, CitizenId, ComplaintCategory, ComplaintId,
    ComplaintStatus, Coordinate, EvidencePhoto,
};
pub use geo::distance_meters;
pub use repository::{
    ComplaintRecord, ComplaintStore, NewComplaint, StoreError, SubmissionReceipt,
};
pub use screening::{IntakeGuard, IntakeViolation};
pub use service::{IntakeService, IntakeServiceError, SubmissionOutcome};
