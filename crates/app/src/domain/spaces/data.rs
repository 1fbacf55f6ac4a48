//! Space Data

use crate::domain::spaces::records::SpaceUuid;

/// New Space Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpace {
    pub uuid: SpaceUuid,
    pub title: String,
    pub description: Option<String>,
    pub space_type: String,
    pub capacity: u32,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Space Update Data
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub space_type: Option<String>,
    pub capacity: Option<u32>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub is_active: Option<bool>,
}

impl SpaceUpdate {
    /// Whether no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Criteria for browsing available spaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpaceFilter {
    /// Exact city match, ignoring case.
    pub city: Option<String>,

    /// Exact space type match, ignoring case.
    pub space_type: Option<String>,

    pub min_capacity: Option<u32>,
}
