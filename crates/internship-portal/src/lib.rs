//! Domain library for the PM Internship Programme portal.
//!
//! The crate carries the public marketing-site content, the static job and
//! candidate catalog, and the admin dashboard: a view-state controller for the
//! section/modal/step/tab flow, candidate ranking, and a simulated scoring
//! pipeline behind an explicit port. The HTTP binary in `services/api` wires
//! these together.

pub mod config;
pub mod error;
pub mod portal;
pub mod telemetry;
