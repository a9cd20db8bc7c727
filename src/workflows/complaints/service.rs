use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use super::classification::{
    normalize_title, ClassificationError, IntakeClassifier, IntakeDecision, IntakePolicy,
    RejectionReason,
};
use super::domain::{CandidateComplaint, Coordinate};
use super::repository::{ComplaintRecord, ComplaintStore, NewComplaint, StoreError};
use super::screening::{IntakeGuard, IntakeViolation};

/// Edge length of the coordinate buckets used for submission keys, in
/// degrees. On the order of the duplicate radius at mid latitudes.
const KEY_CELL_DEGREES: f64 = 0.002;

/// Service composing the screening guard, the classifier, and the store,
/// with the per-key critical section that closes the check-then-insert race
/// between the snapshot fetch and the append.
pub struct IntakeService<S> {
    guard: IntakeGuard,
    classifier: IntakeClassifier,
    store: Arc<S>,
    locks: SubmissionLocks,
}

impl<S> IntakeService<S>
where
    S: ComplaintStore,
{
    pub fn new(store: Arc<S>, policy: IntakePolicy) -> Self {
        Self {
            guard: IntakeGuard::default(),
            classifier: IntakeClassifier::new(policy),
            store,
            locks: SubmissionLocks::default(),
        }
    }

    pub fn classifier(&self) -> &IntakeClassifier {
        &self.classifier
    }

    /// Screen, classify, and (on acceptance) persist one submission.
    ///
    /// Submissions sharing a key are serialized from the snapshot fetch
    /// through the append, so two racing duplicates cannot both pass
    /// classification against a snapshot containing neither of them.
    /// Submissions under different keys do not contend.
    pub fn submit(
        &self,
        candidate: CandidateComplaint,
    ) -> Result<SubmissionOutcome, IntakeServiceError> {
        let candidate = self.guard.screen(candidate)?;

        let key = SubmissionKey::derive(&candidate.title, candidate.location);
        let lease = self.locks.lease(&key);
        // Held through fetch, classify, and append; dropped on every exit
        // path. The section protects ordering, not data, so a poisoned
        // mutex is safe to re-enter.
        let _serialized = lease.lock().unwrap_or_else(PoisonError::into_inner);

        let active = self.store.active()?;
        let decision = self.classifier.classify(&candidate, &active)?;

        match decision {
            IntakeDecision::Accepted { priority } => {
                let record = self.store.append(NewComplaint {
                    citizen_id: candidate.citizen_id,
                    title: candidate.title,
                    category: candidate.category,
                    description: candidate.description,
                    location: candidate.location,
                    photo: candidate.photo,
                    priority,
                })?;
                info!(
                    complaint_id = %record.id.0,
                    priority = record.priority.label(),
                    category = record.category.label(),
                    "complaint accepted"
                );
                Ok(SubmissionOutcome::Accepted(record))
            }
            IntakeDecision::Rejected { reason } => {
                info!(
                    conflicting_id = %reason.conflicting_id().0,
                    "complaint rejected as duplicate"
                );
                Ok(SubmissionOutcome::Rejected { reason })
            }
        }
    }
}

/// How a screened submission came out.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Persisted with the assigned priority tier.
    Accepted(ComplaintRecord),
    /// Turned away as a duplicate of an active report; nothing persisted.
    Rejected { reason: RejectionReason },
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeServiceError {
    #[error(transparent)]
    Screening(#[from] IntakeViolation),
    #[error(transparent)]
    Classification(#[from] ClassificationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Serialization unit: normalized title plus a coarse coordinate cell, so
/// racing duplicates collide on one mutex while unrelated reports do not.
/// The citizen id is deliberately excluded; a user's rapid identical
/// resubmissions serialize through the same section and the later one is
/// rejected as a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct SubmissionKey {
    title: String,
    cell_east: i64,
    cell_north: i64,
}

impl SubmissionKey {
    pub(crate) fn derive(title: &str, location: Coordinate) -> Self {
        Self {
            title: normalize_title(title),
            cell_east: (location.longitude / KEY_CELL_DEGREES).floor() as i64,
            cell_north: (location.latitude / KEY_CELL_DEGREES).floor() as i64,
        }
    }
}

/// Lazily populated map of per-key mutexes. Entries are a few dozen bytes
/// and bounded by the distinct title/cell pairs seen by this process.
#[derive(Default)]
struct SubmissionLocks {
    inner: Mutex<HashMap<SubmissionKey, Arc<Mutex<()>>>>,
}

impl SubmissionLocks {
    fn lease(&self, key: &SubmissionKey) -> Arc<Mutex<()>> {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.entry(key.clone()).or_default().clone()
    }
}
