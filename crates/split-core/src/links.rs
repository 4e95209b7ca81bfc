//! # Digital Tipping Links
//!
//! Assembles payment-app deep links and plain-text requests so a person
//! can collect the shares the split engine computed.
//!
//! STRING ASSEMBLY ONLY. This module performs no network calls, holds no
//! credentials, and never confirms that a payment happened — the link is
//! opened by the payer's own device.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{SplitResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Payment App
// =============================================================================

/// Supported peer-to-peer payment apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentApp {
    /// venmo.com pay links (supports a note).
    Venmo,
    /// cash.app/$cashtag links (amount only, no note).
    CashApp,
    /// paypal.me links (amount only, no note).
    PayPalMe,
}

// =============================================================================
// Link Assembly
// =============================================================================

/// Builds a payment deep link requesting `amount` from whoever opens it.
///
/// The handle is the recipient's username in the given app (Venmo
/// username, $cashtag without the `$`, or PayPal.Me name). Handle and note
/// are percent-encoded; the amount is formatted as plain `dollars.cents`.
///
/// Cash App and PayPal.Me links carry no note; a note passed for those
/// apps is ignored rather than rejected, so one call site can serve all
/// three.
///
/// ## Example
/// ```rust
/// use split_core::links::{payment_link, PaymentApp};
/// use split_core::money::Money;
///
/// let url = payment_link(
///     PaymentApp::Venmo,
///     "ana-garcia",
///     Money::from_cents(6444),
///     Some("Dinner at Rosa's"),
/// )
/// .unwrap();
///
/// assert_eq!(
///     url,
///     "https://venmo.com/ana-garcia?txn=pay&amount=64.44&note=Dinner%20at%20Rosa%27s"
/// );
/// ```
pub fn payment_link(
    app: PaymentApp,
    handle: &str,
    amount: Money,
    note: Option<&str>,
) -> SplitResult<String> {
    let handle = handle.trim();
    if handle.is_empty() {
        return Err(ValidationError::Required {
            field: "handle".to_string(),
        }
        .into());
    }
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        }
        .into());
    }

    let handle = urlencoding::encode(handle);
    let amount = amount_param(amount);

    let url = match app {
        PaymentApp::Venmo => {
            let mut url = format!("https://venmo.com/{handle}?txn=pay&amount={amount}");
            if let Some(note) = note {
                url.push_str("&note=");
                url.push_str(&urlencoding::encode(note));
            }
            url
        }
        PaymentApp::CashApp => format!("https://cash.app/${handle}/{amount}"),
        PaymentApp::PayPalMe => format!("https://paypal.me/{handle}/{amount}"),
    };

    Ok(url)
}

/// Builds a plain-text share request for messaging apps, as a fallback
/// when the payer doesn't use any of the supported payment apps.
///
/// ## Example
/// ```rust
/// use split_core::links::tip_request_message;
/// use split_core::money::Money;
///
/// let msg = tip_request_message("Ben", Money::from_cents(6075));
/// assert_eq!(msg, "Hey Ben, your share of the bill is $60.75.");
/// ```
pub fn tip_request_message(person_name: &str, amount: Money) -> String {
    format!(
        "Hey {}, your share of the bill is {}.",
        person_name.trim(),
        amount
    )
}

/// Formats an amount as the `dollars.cents` string payment apps expect.
fn amount_param(amount: Money) -> String {
    format!("{}.{:02}", amount.dollars(), amount.cents_part())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venmo_link_with_note() {
        let url = payment_link(
            PaymentApp::Venmo,
            "ana-garcia",
            Money::from_cents(6444),
            Some("Dinner at Rosa's"),
        )
        .unwrap();

        assert_eq!(
            url,
            "https://venmo.com/ana-garcia?txn=pay&amount=64.44&note=Dinner%20at%20Rosa%27s"
        );
    }

    #[test]
    fn test_venmo_link_without_note() {
        let url = payment_link(PaymentApp::Venmo, "ben", Money::from_cents(500), None).unwrap();
        assert_eq!(url, "https://venmo.com/ben?txn=pay&amount=5.00");
    }

    #[test]
    fn test_cash_app_link_ignores_note() {
        let url = payment_link(
            PaymentApp::CashApp,
            "benpays",
            Money::from_cents(6075),
            Some("ignored"),
        )
        .unwrap();
        assert_eq!(url, "https://cash.app/$benpays/60.75");
    }

    #[test]
    fn test_paypal_me_link() {
        let url =
            payment_link(PaymentApp::PayPalMe, "anagarcia", Money::from_cents(10_000), None)
                .unwrap();
        assert_eq!(url, "https://paypal.me/anagarcia/100.00");
    }

    #[test]
    fn test_handle_is_encoded() {
        let url = payment_link(
            PaymentApp::Venmo,
            "ana garcia",
            Money::from_cents(100),
            None,
        )
        .unwrap();
        assert_eq!(url, "https://venmo.com/ana%20garcia?txn=pay&amount=1.00");
    }

    #[test]
    fn test_rejects_empty_handle_and_non_positive_amount() {
        assert!(payment_link(PaymentApp::Venmo, "  ", Money::from_cents(100), None).is_err());
        assert!(payment_link(PaymentApp::Venmo, "ana", Money::zero(), None).is_err());
        assert!(payment_link(PaymentApp::Venmo, "ana", Money::from_cents(-5), None).is_err());
    }

    #[test]
    fn test_tip_request_message() {
        let msg = tip_request_message("Ben", Money::from_cents(6075));
        assert_eq!(msg, "Hey Ben, your share of the bill is $60.75.");
    }
}
