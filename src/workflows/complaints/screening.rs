use super::domain::{CandidateComplaint, Coordinate};

/// Submission problems caught before classification runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("issue title must not be blank")]
    BlankTitle,
    #[error("issue description must not be blank")]
    BlankDescription,
    #[error("a photo of the issue is required")]
    MissingPhoto,
    #[error("submission is not linked to a signed-in citizen")]
    MissingCitizen,
    #[error("pinned location is out of range: {location:?}")]
    LocationOutOfRange { location: Coordinate },
}

/// Boundary guard re-checking what the portal form promises: required
/// fields present and the pinned coordinate a real point on the globe.
#[derive(Debug, Default, Clone)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Validate a submission, returning it with title and description
    /// trimmed.
    pub fn screen(
        &self,
        mut candidate: CandidateComplaint,
    ) -> Result<CandidateComplaint, IntakeViolation> {
        candidate.title = candidate.title.trim().to_string();
        candidate.description = candidate.description.trim().to_string();

        if candidate.title.is_empty() {
            return Err(IntakeViolation::BlankTitle);
        }
        if candidate.description.is_empty() {
            return Err(IntakeViolation::BlankDescription);
        }
        if candidate.photo.storage_key.trim().is_empty() {
            return Err(IntakeViolation::MissingPhoto);
        }
        if candidate.citizen_id.0.trim().is_empty() {
            return Err(IntakeViolation::MissingCitizen);
        }
        if !candidate.location.in_range() {
            return Err(IntakeViolation::LocationOutOfRange {
                location: candidate.location,
            });
        }

        Ok(candidate)
    }
}
