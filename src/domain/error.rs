use super::enums::{ListKind, TimeField};
use thiserror::Error;

/// User-facing validation failures. The operation is aborted and state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", .0.empty_prompt())]
    EmptyText(ListKind),
    #[error("Please set a valid time greater than 0")]
    NonPositiveDuration,
}

/// Rejected countdown field input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field:?} only accepts digits, got {input:?}")]
    NotDigits { field: TimeField, input: String },
}
