//! Error types for the news API.
//!
//! Storage failures are inspected once, at the repository boundary, and
//! translated into [`StoreError`]. Services map those onto the
//! [`DomainError`] taxonomy that the transport layer renders.

use regex::Regex;
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

const PG_UNIQUE_VIOLATION: &str = "23505";
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Typed outcome of a storage operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row not found")]
    NotFound,

    #[error("{field}: {value} already exists")]
    Duplicate { field: String, value: String },

    #[error("referenced row does not exist")]
    ForeignKey,

    #[error("storage error: {0}")]
    Io(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return StoreError::NotFound;
        }

        if let sqlx::Error::Database(db) = &err {
            match db.code().as_deref() {
                Some(PG_UNIQUE_VIOLATION) => {
                    let detail = db
                        .try_downcast_ref::<PgDatabaseError>()
                        .and_then(PgDatabaseError::detail)
                        .unwrap_or("");
                    let (field, value) = parse_unique_violation(detail);
                    return StoreError::Duplicate { field, value };
                }
                Some(PG_FOREIGN_KEY_VIOLATION) => return StoreError::ForeignKey,
                _ => {}
            }
        }

        StoreError::Io(err)
    }
}

/// Extract the offending column and value from a Postgres unique-violation
/// detail line, e.g. `Key (slug)=(politics) already exists.`
pub fn parse_unique_violation(detail: &str) -> (String, String) {
    Regex::new(r"Key \((.+?)\)=\((.+?)\) already exists")
        .ok()
        .and_then(|re| {
            re.captures(detail)
                .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        })
        .unwrap_or_else(|| ("key".to_string(), "duplicate value".to_string()))
}

/// Domain-level outcomes surfaced by the service layer.
///
/// `NoFieldUpdate` is structurally an error value but semantically a
/// success: an update request that changes nothing. The transport layer
/// renders it as a non-failure response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{field}: {value} already exists")]
    DuplicateKey { field: String, value: String },

    #[error("no field update")]
    NoFieldUpdate,

    #[error("failed to fetch {0}")]
    FetchFailed(&'static str),

    #[error("failed to create {0}")]
    CreateFailed(&'static str),

    #[error("failed to update {0}")]
    UpdateFailed(&'static str),

    #[error("failed to update article topics")]
    RelationUpdateFailed,

    #[error("failed to delete {0}")]
    DeleteFailed(&'static str),

    #[error("failed to delete article topics")]
    RelationDeleteFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_and_value_from_unique_violation_detail() {
        let (field, value) = parse_unique_violation("Key (slug)=(politics) already exists.");
        assert_eq!(field, "slug");
        assert_eq!(value, "politics");
    }

    #[test]
    fn parses_values_containing_spaces() {
        let (field, value) =
            parse_unique_violation("Key (email)=(jane doe@example.com) already exists.");
        assert_eq!(field, "email");
        assert_eq!(value, "jane doe@example.com");
    }

    #[test]
    fn falls_back_on_unrecognized_detail() {
        let (field, value) = parse_unique_violation("duplicate key value violates constraint");
        assert_eq!(field, "key");
        assert_eq!(value, "duplicate value");
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::NotFound));
    }
}
