use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classification::Priority;
use super::domain::{
    ActiveComplaint, CitizenId, ComplaintCategory, ComplaintId, ComplaintStatus, Coordinate,
    EvidencePhoto,
};

/// An accepted complaint ready to be appended. The store mints the id, the
/// creation timestamp, and the initial Pending status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComplaint {
    pub citizen_id: CitizenId,
    pub title: String,
    pub category: ComplaintCategory,
    pub description: String,
    pub location: Coordinate,
    pub photo: EvidencePhoto,
    pub priority: Priority,
}

/// The persisted complaint document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub id: ComplaintId,
    pub citizen_id: CitizenId,
    pub title: String,
    pub category: ComplaintCategory,
    pub description: String,
    pub location: Coordinate,
    pub photo: EvidencePhoto,
    pub status: ComplaintStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl ComplaintRecord {
    /// Snapshot view used when this record shows up in a later intake scan;
    /// `None` once the report has been resolved.
    pub fn active_view(&self) -> Option<ActiveComplaint> {
        self.status.is_active().then(|| ActiveComplaint {
            id: self.id.clone(),
            title: self.title.clone(),
            location: self.location,
            status: self.status,
            created_at: self.created_at,
        })
    }

    /// Confirmation shown to the submitting citizen.
    pub fn receipt(&self) -> SubmissionReceipt {
        SubmissionReceipt {
            complaint_id: self.id.clone(),
            status: self.status.label(),
            priority: self.priority.label(),
            message: format!(
                "Report successfully submitted! Priority: {}",
                self.priority.label()
            ),
        }
    }
}

/// Storage abstraction over the portal's document store so intake can be
/// exercised in isolation.
pub trait ComplaintStore: Send + Sync {
    /// Complaints whose status is Pending or In Progress. The status
    /// filtering is the store query's responsibility, not the classifier's.
    fn active(&self) -> Result<Vec<ActiveComplaint>, StoreError>;

    /// Durably append an accepted complaint.
    fn append(&self, complaint: NewComplaint) -> Result<ComplaintRecord, StoreError>;
}

/// Failures surfaced by the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("complaint store unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of an accepted submission for the UI layer.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    pub complaint_id: ComplaintId,
    pub status: &'static str,
    pub priority: &'static str,
    pub message: String,
}
