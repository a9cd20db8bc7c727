use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::workflows::complaints::classification::{IntakeClassifier, IntakePolicy};
use crate::workflows::complaints::domain::{
    ActiveComplaint, CandidateComplaint, CitizenId, ComplaintCategory, ComplaintId,
    ComplaintStatus, Coordinate, EvidencePhoto,
};
use crate::workflows::complaints::geo::EARTH_RADIUS_METERS;
use crate::workflows::complaints::repository::{
    ComplaintRecord, ComplaintStore, NewComplaint, StoreError,
};
use crate::workflows::complaints::service::IntakeService;

/// The portal's default map pin.
pub(super) fn base() -> Coordinate {
    Coordinate::new(19.0760, 72.8777)
}

/// A coordinate `meters` due east of `from`; accurate to well under a
/// centimeter for the sub-kilometer offsets these tests use.
pub(super) fn east_of(from: Coordinate, meters: f64) -> Coordinate {
    let lng_degrees =
        (meters / (EARTH_RADIUS_METERS * from.latitude.to_radians().cos())).to_degrees();
    Coordinate::new(from.latitude, from.longitude + lng_degrees)
}

pub(super) fn classifier() -> IntakeClassifier {
    IntakeClassifier::new(IntakePolicy::default())
}

pub(super) fn candidate(title: &str, location: Coordinate) -> CandidateComplaint {
    CandidateComplaint {
        citizen_id: CitizenId("citizen-7".to_string()),
        title: title.to_string(),
        category: ComplaintCategory::RoadsAndInfrastructure,
        description: "Deep pothole swallowing scooter wheels near the bus stop.".to_string(),
        location,
        photo: EvidencePhoto {
            name: "pothole.jpg".to_string(),
            storage_key: "media/complaints/pothole.jpg".to_string(),
        },
    }
}

pub(super) fn active(id: &str, title: &str, location: Coordinate) -> ActiveComplaint {
    ActiveComplaint {
        id: ComplaintId(id.to_string()),
        title: title.to_string(),
        location,
        status: ComplaintStatus::Pending,
        created_at: Utc::now(),
    }
}

/// `count` active reports with distinct titles, all inside the default
/// density radius of `around` and all outside the duplicate radius.
pub(super) fn cluster(count: usize, around: Coordinate) -> Vec<ActiveComplaint> {
    (0..count)
        .map(|i| {
            active(
                &format!("cmp-{i:03}"),
                &format!("Streetlight out #{i}"),
                east_of(around, 110.0 + 15.0 * i as f64),
            )
        })
        .collect()
}

pub(super) fn build_service() -> (IntakeService<MemoryStore>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = IntakeService::new(store.clone(), IntakePolicy::default());
    (service, store)
}

#[derive(Default)]
pub(super) struct MemoryStore {
    records: Mutex<Vec<ComplaintRecord>>,
    sequence: AtomicU64,
}

impl MemoryStore {
    pub(super) fn records(&self) -> Vec<ComplaintRecord> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl ComplaintStore for MemoryStore {
    fn active(&self) -> Result<Vec<ActiveComplaint>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.iter().filter_map(ComplaintRecord::active_view).collect())
    }

    fn append(&self, complaint: NewComplaint) -> Result<ComplaintRecord, StoreError> {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let record = ComplaintRecord {
            id: ComplaintId(format!("cmp-{sequence:06}")),
            citizen_id: complaint.citizen_id,
            title: complaint.title,
            category: complaint.category,
            description: complaint.description,
            location: complaint.location,
            photo: complaint.photo,
            status: ComplaintStatus::Pending,
            priority: complaint.priority,
            created_at: Utc::now(),
        };
        self.records
            .lock()
            .expect("store mutex poisoned")
            .push(record.clone());
        Ok(record)
    }
}

pub(super) struct UnavailableStore;

impl ComplaintStore for UnavailableStore {
    fn active(&self) -> Result<Vec<ActiveComplaint>, StoreError> {
        Err(StoreError::Unavailable("document store offline".to_string()))
    }

    fn append(&self, _complaint: NewComplaint) -> Result<ComplaintRecord, StoreError> {
        Err(StoreError::Unavailable("document store offline".to_string()))
    }
}
