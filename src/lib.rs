#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Exact min-cost max-flow for multi-layer CDN routing.
//!
//! A [`FlowNetwork`] is built arc by arc over dense integer node ids, then
//! [`FlowNetwork::solve`] pushes up to `demand` units from a super-source to
//! a super-sink along successively cheapest residual paths and reports the
//! realised flow, its cost and whether the demand was met.

pub mod algo;
pub mod arc;
pub mod error;
pub mod graph;
pub mod report;
pub mod result;
pub mod scenario;
pub mod unit;

pub use crate::algo::{MinCostFlow, SuccessiveShortestPaths};
pub use crate::arc::Arc;
pub use crate::error::Error;
pub use crate::graph::FlowNetwork;
pub use crate::result::FlowResult;
pub use crate::unit::Unit;
