//! # Validation Module
//!
//! Input validation utilities for TipSplit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (field-level rules)                              │
//! │  ├── Name / price / rate / id checks                                   │
//! │  └── Shared by bill mutation ops and the split engine                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Split engine (structural rules)                              │
//! │  ├── Empty party, duplicate ids, dangling assignments                  │
//! │  └── Zero-eligible-sharer detection                                    │
//! │                                                                         │
//! │  All validation runs BEFORE any allocation: all-or-nothing.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use split_core::validation::{validate_item_name, validate_price_cents};
//!
//! validate_item_name("Truffle Fries").unwrap();
//! validate_price_cents(1250).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_BILL_RATE_MPCT, MAX_TIP_RATE_MPCT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use split_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Margherita Pizza").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "item name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "item name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a person display name.
///
/// Same rules as item names but a shorter cap; 100 characters covers any
/// real name the party screen can render.
pub fn validate_person_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "person name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "person name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (comped items)
///
/// ## Example
/// ```rust
/// use split_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());  // $10.99
/// assert!(validate_price_cents(0).is_ok());     // Comped item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::NegativeAmount {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax or service-charge rate in milli-percent.
///
/// A typo guard for the bill mutation ops, not an engine rule: the split
/// engine computes any non-negative rate.
///
/// ## Rules
/// - Must be between 0 and 100_000 (0% to 100%)
/// - Real-world rates are 0–30_000 (0% to 30%); 100% is the sanity cap
pub fn validate_bill_rate_mpct(mpct: u32) -> ValidationResult<()> {
    if mpct > MAX_BILL_RATE_MPCT {
        return Err(ValidationError::OutOfRange {
            field: "rate".to_string(),
            min: 0,
            max: MAX_BILL_RATE_MPCT as i64,
        });
    }

    Ok(())
}

/// Validates a personal tip rate in milli-percent.
///
/// ## Rules
/// - Must be between 0 and 300_000 (0% to 300%)
/// - Higher cap than tax/service: generous tippers exist, 300% catches
///   typos like 2000 entered for 20
pub fn validate_tip_rate_mpct(mpct: u32) -> ValidationResult<()> {
    if mpct > MAX_TIP_RATE_MPCT {
        return Err(ValidationError::OutOfRange {
            field: "tip rate".to_string(),
            min: 0,
            max: MAX_TIP_RATE_MPCT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// Item and person ids are minted by the session layer as UUID v4; the
/// engine checks the format so a corrupted snapshot fails loudly instead
/// of silently never matching any assignment.
///
/// ## Example
/// ```rust
/// use split_core::validation::validate_id;
///
/// assert!(validate_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_id("not-a-uuid").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Margherita Pizza").is_ok());
        assert!(validate_item_name("Nachos (large)").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_person_name() {
        assert!(validate_person_name("Ana").is_ok());
        assert!(validate_person_name("").is_err());
        assert!(validate_person_name(&"A".repeat(150)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_bill_rate_mpct() {
        assert!(validate_bill_rate_mpct(0).is_ok());
        assert!(validate_bill_rate_mpct(8875).is_ok());
        assert!(validate_bill_rate_mpct(100_000).is_ok());
        assert!(validate_bill_rate_mpct(100_001).is_err());
    }

    #[test]
    fn test_validate_tip_rate_mpct() {
        assert!(validate_tip_rate_mpct(20_000).is_ok());
        assert!(validate_tip_rate_mpct(300_000).is_ok());
        assert!(validate_tip_rate_mpct(300_001).is_err());
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_id("").is_err());
        assert!(validate_id("not-a-uuid").is_err());
        assert!(validate_id("123").is_err());
    }
}
