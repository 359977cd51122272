//! Shared library for the Mass readings Lambda.
//!
//! This crate provides the readings model, the lookup client, and the HTTP
//! helpers used by the Lambda entry point.

pub mod config;
pub mod error;
pub mod http;
pub mod lookup;
pub mod models;
pub mod readings;
pub mod usccb;

pub use config::Config;
pub use error::{Error, Result};
pub use lookup::MassSource;
pub use models::{ErrorBody, Mass, MassType, ReadingsPayload, SectionSummary};
pub use readings::{build_payload, parse_date};
pub use usccb::UsccbClient;
