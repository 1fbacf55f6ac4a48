//! Record identifiers.
//!
//! Every table keys its rows by a v7 UUID. `TypedUuid` tags the raw value
//! with the record it names so a space id cannot be passed where a user id
//! is expected.

use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    str::FromStr,
};

use uuid::Uuid;

pub struct TypedUuid<Record> {
    raw: Uuid,
    record: PhantomData<fn() -> Record>,
}

impl<Record> TypedUuid<Record> {
    /// Time-ordered, so freshly created rows sort after older ones.
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::now_v7())
    }

    pub const fn from_uuid(raw: Uuid) -> Self {
        Self {
            raw,
            record: PhantomData,
        }
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.raw
    }
}

impl<Record> Default for TypedUuid<Record> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Record> Clone for TypedUuid<Record> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Record> Copy for TypedUuid<Record> {}

impl<Record> PartialEq for TypedUuid<Record> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<Record> Eq for TypedUuid<Record> {}

impl<Record> Debug for TypedUuid<Record> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.raw, f)
    }
}

impl<Record> Display for TypedUuid<Record> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.raw, f)
    }
}

/// Accepts the hyphenated, simple and URN forms `uuid` understands.
impl<Record> FromStr for TypedUuid<Record> {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self::from_uuid)
    }
}
