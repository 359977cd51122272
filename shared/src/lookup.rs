//! Interface to whatever knows the readings for a given date.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Mass, MassType};
use crate::Result;

/// Looks up the mass celebrated on a date.
#[async_trait]
pub trait MassSource: Send + Sync {
    /// Try each of `types` in order and return the first mass found.
    ///
    /// `Ok(None)` means none of the variants exist for `date`.
    async fn get_mass_from_date(&self, date: NaiveDate, types: &[MassType]) -> Result<Option<Mass>>;
}
