use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for persisted complaints; minted by the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplaintId(pub String);

/// Identifier wrapper for the submitting citizen account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CitizenId(pub String);

/// A WGS84 position pinned on the portal map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether the position is a finite point on the globe.
    pub fn in_range(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Issue categories offered on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintCategory {
    RoadsAndInfrastructure,
    GarbageAndWaste,
    StreetLighting,
    WaterAndDrainage,
}

impl ComplaintCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ComplaintCategory::RoadsAndInfrastructure => "Roads & Infrastructure",
            ComplaintCategory::GarbageAndWaste => "Garbage & Waste",
            ComplaintCategory::StreetLighting => "Street Lighting",
            ComplaintCategory::WaterAndDrainage => "Water & Drainage",
        }
    }
}

/// Lifecycle status tracked by the store; municipal staff move reports from
/// Pending through Resolved on their dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }

    /// Active reports are the ones intake classifies against.
    pub const fn is_active(self) -> bool {
        !matches!(self, ComplaintStatus::Resolved)
    }
}

/// Uploaded photo evidence. Capture and compression happen in the portal;
/// intake only requires that a reference is present and carries it through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidencePhoto {
    pub name: String,
    pub storage_key: String,
}

/// Snapshot view of a persisted, still-active complaint as returned by the
/// store's status-filtered query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveComplaint {
    pub id: ComplaintId,
    pub title: String,
    pub location: Coordinate,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
}

/// A complaint as submitted, before the store has assigned identity or a
/// creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateComplaint {
    pub citizen_id: CitizenId,
    pub title: String,
    pub category: ComplaintCategory,
    pub description: String,
    pub location: Coordinate,
    pub photo: EvidencePhoto,
}
