//! Eligibility Engine for military personnel health and leave records
//!
//! This crate classifies a person's operational readiness from their medical
//! restrictions and leaves: it canonicalizes restriction codes against the
//! catalog, detects overlapping leaves and resolves the operational status
//! on a reference date. An axum router exposes the rules over JSON.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod models;
