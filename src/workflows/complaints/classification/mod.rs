mod config;
mod policy;
mod rules;

pub use config::IntakePolicy;
pub use policy::{IntakeDecision, Priority, RejectionReason};

pub(crate) use rules::normalize_title;

use super::domain::{ActiveComplaint, CandidateComplaint, ComplaintId, Coordinate};

/// Stateless rule engine deciding whether a candidate report enters the
/// queue, and at which priority.
#[derive(Debug, Clone)]
pub struct IntakeClassifier {
    policy: IntakePolicy,
}

impl IntakeClassifier {
    pub fn new(policy: IntakePolicy) -> Self {
        Self {
            policy: policy.sanitized(),
        }
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Classify one candidate against a snapshot of active reports.
    ///
    /// Deterministic for a given `(candidate, active)` pair; when several
    /// active reports qualify as duplicates, the first one in the supplied
    /// order is the reported conflict. Never mutates the snapshot and never
    /// persists anything.
    pub fn classify(
        &self,
        candidate: &CandidateComplaint,
        active: &[ActiveComplaint],
    ) -> Result<IntakeDecision, ClassificationError> {
        let scan = rules::scan_active(candidate, active, &self.policy)?;

        if let Some(conflicting_id) = scan.duplicate_of {
            return Ok(IntakeDecision::Rejected {
                reason: RejectionReason::DuplicateActiveReport {
                    conflicting_id,
                    title: candidate.title.trim().to_string(),
                },
            });
        }

        Ok(IntakeDecision::Accepted {
            priority: rules::priority_for(scan.nearby_count, &self.policy),
        })
    }
}

/// Coordinate problems that make a classification request malformed. These
/// signal a programming or data error upstream and are never coerced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassificationError {
    #[error("candidate coordinate out of range: {location:?}")]
    CandidateOutOfRange { location: Coordinate },
    #[error("active report {id:?} has an out-of-range coordinate: {location:?}")]
    ActiveOutOfRange {
        id: ComplaintId,
        location: Coordinate,
    },
}
