use serde::{Deserialize, Serialize};

use super::super::domain::ComplaintId;

/// Priority tier assigned at acceptance, ordered Low through High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Outcome of classifying one candidate against the active snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IntakeDecision {
    Accepted { priority: Priority },
    Rejected { reason: RejectionReason },
}

impl IntakeDecision {
    pub fn summary(&self) -> String {
        match self {
            IntakeDecision::Accepted { priority } => {
                format!("report accepted at {} priority", priority.label())
            }
            IntakeDecision::Rejected { reason } => reason.summary(),
        }
    }
}

/// Why a candidate was turned away; carries the conflicting report id for
/// traceability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RejectionReason {
    DuplicateActiveReport {
        conflicting_id: ComplaintId,
        title: String,
    },
}

impl RejectionReason {
    pub fn conflicting_id(&self) -> &ComplaintId {
        match self {
            RejectionReason::DuplicateActiveReport { conflicting_id, .. } => conflicting_id,
        }
    }

    /// User-facing message surfaced by the portal on rejection.
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::DuplicateActiveReport { title, .. } => {
                format!("an issue titled \"{title}\" has already been reported at this location")
            }
        }
    }
}
