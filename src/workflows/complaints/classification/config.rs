use serde::{Deserialize, Serialize};

const DEFAULT_DUPLICATE_RADIUS_METERS: f64 = 100.0;
const DEFAULT_DENSITY_RADIUS_METERS: f64 = 250.0;
const DEFAULT_HIGH_PRIORITY_THRESHOLD: u32 = 6;
const DEFAULT_MEDIUM_PRIORITY_THRESHOLD: u32 = 3;

/// Policy dials for duplicate rejection and priority triage.
///
/// These are municipal policy rather than physics, so they are plain data
/// that deployments override through the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakePolicy {
    /// Max distance at which a same-title active report blocks submission.
    pub duplicate_radius_meters: f64,
    /// Radius of the nearby-count used for priority triage.
    pub density_radius_meters: f64,
    /// Nearby count at or above which a report is High priority.
    pub high_priority_threshold: u32,
    /// Nearby count at or above which a report is Medium priority.
    pub medium_priority_threshold: u32,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            duplicate_radius_meters: DEFAULT_DUPLICATE_RADIUS_METERS,
            density_radius_meters: DEFAULT_DENSITY_RADIUS_METERS,
            high_priority_threshold: DEFAULT_HIGH_PRIORITY_THRESHOLD,
            medium_priority_threshold: DEFAULT_MEDIUM_PRIORITY_THRESHOLD,
        }
    }
}

impl IntakePolicy {
    /// Replace unusable dials with the defaults so a bad override cannot
    /// disable duplicate detection or invert the priority brackets.
    pub(crate) fn sanitized(self) -> Self {
        let defaults = Self::default();

        let duplicate_radius_meters =
            if self.duplicate_radius_meters.is_finite() && self.duplicate_radius_meters > 0.0 {
                self.duplicate_radius_meters
            } else {
                defaults.duplicate_radius_meters
            };

        let density_radius_meters =
            if self.density_radius_meters.is_finite() && self.density_radius_meters > 0.0 {
                self.density_radius_meters
            } else {
                defaults.density_radius_meters
            };

        let (medium_priority_threshold, high_priority_threshold) =
            if self.medium_priority_threshold <= self.high_priority_threshold {
                (self.medium_priority_threshold, self.high_priority_threshold)
            } else {
                (
                    defaults.medium_priority_threshold,
                    defaults.high_priority_threshold,
                )
            };

        Self {
            duplicate_radius_meters,
            density_radius_meters,
            high_priority_threshold,
            medium_priority_threshold,
        }
    }
}
