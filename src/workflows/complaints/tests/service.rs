use std::sync::Arc;

use super::common::*;
use crate::workflows::complaints::classification::{IntakePolicy, Priority};
use crate::workflows::complaints::domain::{ComplaintStatus, Coordinate};
use crate::workflows::complaints::repository::{ComplaintStore, NewComplaint};
use crate::workflows::complaints::screening::IntakeViolation;
use crate::workflows::complaints::service::{
    IntakeService, IntakeServiceError, SubmissionKey, SubmissionOutcome,
};

#[test]
fn accepted_submission_is_persisted_as_pending() {
    let (service, store) = build_service();

    let outcome = service
        .submit(candidate("  Pothole on Main St  ", base()))
        .expect("submission succeeds");

    let record = match outcome {
        SubmissionOutcome::Accepted(record) => record,
        other => panic!("expected acceptance, got {other:?}"),
    };

    assert_eq!(record.title, "Pothole on Main St");
    assert_eq!(record.status, ComplaintStatus::Pending);
    assert_eq!(record.priority, Priority::Low);
    assert_eq!(store.records().len(), 1);

    let receipt = record.receipt();
    assert_eq!(receipt.status, "Pending");
    assert_eq!(receipt.priority, "Low");
    assert_eq!(receipt.message, "Report successfully submitted! Priority: Low");
}

#[test]
fn duplicate_resubmission_is_rejected_and_not_persisted() {
    let (service, store) = build_service();

    let first = service
        .submit(candidate("Pothole on Main St", base()))
        .expect("first submission succeeds");
    let first_id = match first {
        SubmissionOutcome::Accepted(record) => record.id,
        other => panic!("expected acceptance, got {other:?}"),
    };

    let second = service
        .submit(candidate("  POTHOLE ON MAIN ST ", east_of(base(), 50.0)))
        .expect("second submission evaluates");

    match second {
        SubmissionOutcome::Rejected { reason } => {
            assert_eq!(reason.conflicting_id(), &first_id);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(store.records().len(), 1);
}

#[test]
fn submission_priority_reflects_existing_density() {
    let (service, store) = build_service();

    for entry in cluster(6, base()) {
        let seed = candidate("seed", entry.location);
        store
            .append(NewComplaint {
                citizen_id: seed.citizen_id,
                title: entry.title,
                category: seed.category,
                description: seed.description,
                location: entry.location,
                photo: seed.photo,
                priority: Priority::Low,
            })
            .expect("seed append succeeds");
    }

    let outcome = service
        .submit(candidate("Overflowing bin", base()))
        .expect("submission succeeds");

    match outcome {
        SubmissionOutcome::Accepted(record) => assert_eq!(record.priority, Priority::High),
        other => panic!("expected acceptance, got {other:?}"),
    }
}

#[test]
fn screening_violations_stop_the_submission_before_the_store() {
    // The store errors on any call, so reaching it would fail the test for
    // the wrong reason.
    let service = IntakeService::new(Arc::new(UnavailableStore), IntakePolicy::default());

    match service.submit(candidate("   ", base())) {
        Err(IntakeServiceError::Screening(IntakeViolation::BlankTitle)) => {}
        other => panic!("expected screening violation, got {other:?}"),
    }
}

#[test]
fn service_exposes_its_sanitized_policy() {
    let (service, _store) = build_service();
    assert_eq!(service.classifier().policy(), &IntakePolicy::default());
}

#[test]
fn store_failures_propagate() {
    let service = IntakeService::new(Arc::new(UnavailableStore), IntakePolicy::default());

    match service.submit(candidate("Pothole on Main St", base())) {
        Err(IntakeServiceError::Store(_)) => {}
        other => panic!("expected store error, got {other:?}"),
    }
}

#[test]
fn submission_keys_collide_for_title_variants_at_one_spot() {
    // Mid-cell coordinate so small offsets stay in the same bucket.
    let spot = Coordinate::new(19.0770, 72.8770);

    let a = SubmissionKey::derive("Pothole on Main St", spot);
    let b = SubmissionKey::derive("  POTHOLE ON MAIN ST ", east_of(spot, 10.0));

    assert_eq!(a, b);
}

#[test]
fn submission_keys_separate_unrelated_reports() {
    let spot = Coordinate::new(19.0770, 72.8770);

    let pothole = SubmissionKey::derive("Pothole on Main St", spot);
    let streetlight = SubmissionKey::derive("Streetlight out", spot);
    assert_ne!(pothole, streetlight);

    let far_away = SubmissionKey::derive("Pothole on Main St", east_of(spot, 1_000.0));
    assert_ne!(pothole, far_away);
}
