use super::super::domain::{ActiveComplaint, CandidateComplaint, ComplaintId};
use super::super::geo;
use super::config::IntakePolicy;
use super::{ClassificationError, Priority};

pub(crate) struct ProximityScan {
    pub duplicate_of: Option<ComplaintId>,
    pub nearby_count: u32,
}

/// Case-insensitive comparison key for titles. Equality after trimming and
/// lowercasing is the only text-matching rule; there is no fuzzy matching.
pub(crate) fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Single pass over the active snapshot: remembers the first same-title
/// report inside the duplicate radius and counts every report inside the
/// density radius. The candidate itself is not yet persisted, so it never
/// counts against its own density.
pub(crate) fn scan_active(
    candidate: &CandidateComplaint,
    active: &[ActiveComplaint],
    policy: &IntakePolicy,
) -> Result<ProximityScan, ClassificationError> {
    if !candidate.location.in_range() {
        return Err(ClassificationError::CandidateOutOfRange {
            location: candidate.location,
        });
    }

    let candidate_title = normalize_title(&candidate.title);
    let mut duplicate_of = None;
    let mut nearby_count = 0u32;

    for entry in active {
        if !entry.location.in_range() {
            return Err(ClassificationError::ActiveOutOfRange {
                id: entry.id.clone(),
                location: entry.location,
            });
        }

        let distance = geo::distance_meters(candidate.location, entry.location);

        if duplicate_of.is_none()
            && distance <= policy.duplicate_radius_meters
            && normalize_title(&entry.title) == candidate_title
        {
            duplicate_of = Some(entry.id.clone());
        }

        if distance <= policy.density_radius_meters {
            nearby_count += 1;
        }
    }

    Ok(ProximityScan {
        duplicate_of,
        nearby_count,
    })
}

/// Bracket the nearby count into a tier; bracket edges belong to the higher
/// tier.
pub(crate) fn priority_for(nearby_count: u32, policy: &IntakePolicy) -> Priority {
    if nearby_count >= policy.high_priority_threshold {
        Priority::High
    } else if nearby_count >= policy.medium_priority_threshold {
        Priority::Medium
    } else {
        Priority::Low
    }
}
