use std::sync::OnceLock;

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use regex::Regex;

use crate::error::AppError;

/// Converts Diesel database errors into structured AppError variants.
///
/// PostgreSQL constraint violation messages are parsed with cached regex
/// patterns so that duplicate-key and missing-field failures surface the
/// offending entity and field instead of a raw driver message.
pub struct DatabaseErrorConverter;

static KEY_VALUE_PATTERN: OnceLock<Regex> = OnceLock::new();
static COLUMN_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Matches "Key (field)=(value)" in PostgreSQL error detail lines.
fn key_value_pattern() -> &'static Regex {
    KEY_VALUE_PATTERN.get_or_init(|| Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap())
}

/// Matches quoted column names in PostgreSQL error messages.
fn column_pattern() -> &'static Regex {
    COLUMN_PATTERN.get_or_init(|| Regex::new(r#"column "([^"]+)""#).unwrap())
}

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info, operation)
            }
            DieselError::NotFound => AppError::NotFound {
                entity: "resource".to_string(),
                field: "id".to_string(),
                value: "unknown".to_string(),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: Box<dyn diesel::result::DatabaseErrorInformation + Send + Sync>,
        operation: &str,
    ) -> AppError {
        let entity = info.table_name().unwrap_or("resource").to_string();

        match kind {
            DatabaseErrorKind::UniqueViolation => {
                if let Some((field, value)) =
                    Self::extract_key_value(info.message(), info.details())
                {
                    AppError::Duplicate {
                        entity,
                        field,
                        value,
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Unique constraint violation: {}",
                            info.message()
                        )),
                    }
                }
            }
            DatabaseErrorKind::NotNullViolation => {
                if let Some(field) = Self::extract_column(info.message()) {
                    AppError::Validation {
                        field,
                        reason: format!("Field is required for {}", entity),
                    }
                } else {
                    AppError::Database {
                        operation: operation.to_string(),
                        source: anyhow::Error::msg(format!(
                            "Not null constraint violation: {}",
                            info.message()
                        )),
                    }
                }
            }
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {}", info.message())),
            },
        }
    }

    /// Extracts the violating field and value from a unique violation.
    ///
    /// PostgreSQL puts the "Key (field)=(value)" line in the detail section,
    /// but some drivers fold it into the primary message, so both are scanned.
    fn extract_key_value(message: &str, details: Option<&str>) -> Option<(String, String)> {
        let pattern = key_value_pattern();
        let captures = pattern
            .captures(message)
            .or_else(|| details.and_then(|d| pattern.captures(d)))?;
        Some((captures[1].to_string(), captures[2].to_string()))
    }

    /// Extracts the quoted column name from a not-null violation message.
    fn extract_column(message: &str) -> Option<String> {
        column_pattern()
            .captures(message)
            .map(|captures| captures[1].to_string())
    }
}
