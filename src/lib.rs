//! Intake classification engine for a citizen issue-reporting portal.
//!
//! The portal's forms, dashboards, map rendering, authentication, and the
//! document store itself live elsewhere; this crate owns the decision taken
//! between submission and persistence: reject a report as a duplicate of an
//! already-active one, or accept it with a priority tier derived from the
//! density of other active reports nearby.

pub mod config;
pub mod telemetry;
pub mod workflows;
