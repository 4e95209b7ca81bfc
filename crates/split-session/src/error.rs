//! # API Error Type
//!
//! Unified error type for session operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in TipSplit                               │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  session.addItem(...)                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Session Operation                                               │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ── SplitError::Validation ──┐                │  │
//! │  │         │                                      ▼                │  │
//! │  │  Domain Error? ────── SplitError::* ───────── ApiError ────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.message = "Add at least one person before splitting the bill"   │
//! │    // e.code = "EMPTY_PEOPLE"                                           │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use split_core::SplitError;

/// API error returned from session operations.
///
/// ## Serialization
/// This is what the frontend receives when an operation fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price must not be negative"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await session.split();
/// } catch (e) {
///   switch (e.code) {
///     case 'EMPTY_PEOPLE':
///       showHint('Add at least one person first');
///       break;
///     case 'VALIDATION_ERROR':
///       showForm(e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item or person not found in the bill
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Split requested with items but an empty party
    EmptyPeople,

    /// An item has nobody to pay for it (zero eligible sharers or an
    /// unassigned exclusive item)
    UnpayableItem,

    /// Bill or party size cap reached
    BillLimit,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts domain errors to API errors.
impl From<SplitError> for ApiError {
    fn from(err: SplitError) -> Self {
        let code = match &err {
            SplitError::EmptyPeople => ErrorCode::EmptyPeople,
            SplitError::NoEligibleSharers { .. } | SplitError::UnassignedItem { .. } => {
                ErrorCode::UnpayableItem
            }
            SplitError::UnknownPerson { .. } => ErrorCode::ValidationError,
            SplitError::PersonNotFound(_) | SplitError::ItemNotFound(_) => ErrorCode::NotFound,
            SplitError::TooManyItems { .. } | SplitError::TooManyPeople { .. } => {
                ErrorCode::BillLimit
            }
            SplitError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
