//! Domain error classification.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// The kind of failure a domain service reports.
///
/// Every service error variant maps onto exactly one kind, which is what an
/// outer layer (HTTP, CLI) uses to decide how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller supplied data failed a precondition.
    Validation,

    /// Referenced row does not exist, or is soft-deleted.
    NotFound,

    /// Actor is not allowed to act on the resource.
    Authorization,

    /// Operation would violate an invariant.
    Conflict,

    /// Underlying storage failure.
    Persistence,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Authorization => "authorization",
            Self::Conflict => "conflict",
            Self::Persistence => "persistence",
        })
    }
}

/// Returns the name of the first field whose value is empty or whitespace.
pub(crate) fn first_blank_field<'a>(
    fields: impl IntoIterator<Item = (&'static str, &'a str)>,
) -> Option<&'static str> {
    fields
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
}

/// Returns the name of the first supplied field whose value is blank.
pub(crate) fn first_blank_update<'a>(
    fields: impl IntoIterator<Item = (&'static str, Option<&'a str>)>,
) -> Option<&'static str> {
    first_blank_field(
        fields
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value))),
    )
}
