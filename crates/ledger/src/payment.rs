//! Payment strategies for settling the ledger's revenue.

use chrono::{DateTime, Utc};
use menu::Money;
use serde::Serialize;

use crate::error::PaymentError;

/// Receipt produced by a payment strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settlement {
    /// Short name of the payment method (e.g. "cash", "card").
    pub method: &'static str,
    pub amount: Money,
    /// Method specific detail, such as the masked card and holder.
    pub reference: Option<String>,
    pub settled_at: DateTime<Utc>,
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Paid {} by {}", self.amount, self.method)?;
        if let Some(reference) = &self.reference {
            write!(f, " ({reference})")?;
        }
        Ok(())
    }
}

/// An interchangeable settlement algorithm.
///
/// `pay` never fails: anything a method needs is validated when the
/// strategy is constructed.
pub trait PaymentStrategy {
    /// Returns the short method name, used in logs and metrics labels.
    fn method(&self) -> &'static str;

    /// Settles `amount`.
    fn pay(&self, amount: Money) -> Settlement;
}

/// Cash settlement; carries no metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashPayment;

impl PaymentStrategy for CashPayment {
    fn method(&self) -> &'static str {
        "cash"
    }

    fn pay(&self, amount: Money) -> Settlement {
        tracing::info!(%amount, "paid in cash");
        Settlement {
            method: self.method(),
            amount,
            reference: None,
            settled_at: Utc::now(),
        }
    }
}

/// Card settlement for a validated card number and holder.
#[derive(Clone, PartialEq, Eq)]
pub struct CardPayment {
    digits: String,
    card_holder: String,
}

impl CardPayment {
    /// Creates a card payment.
    ///
    /// Spaces and dashes in the card number are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] if the holder is blank, the number contains
    /// other characters, or it does not have 12 to 19 digits.
    pub fn new(
        card_number: impl AsRef<str>,
        card_holder: impl Into<String>,
    ) -> Result<Self, PaymentError> {
        let card_holder = card_holder.into();
        if card_holder.trim().is_empty() {
            return Err(PaymentError::EmptyCardHolder);
        }

        let mut digits = String::new();
        for c in card_number.as_ref().chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' => {}
                other => return Err(PaymentError::InvalidCardCharacter { found: other }),
            }
        }
        if !(12..=19).contains(&digits.len()) {
            return Err(PaymentError::InvalidCardNumber {
                digits: digits.len(),
            });
        }

        Ok(Self {
            digits,
            card_holder,
        })
    }

    pub fn card_holder(&self) -> &str {
        &self.card_holder
    }

    /// Returns the card number with all but the last four digits hidden.
    pub fn masked_number(&self) -> String {
        let last_four = &self.digits[self.digits.len() - 4..];
        format!("**** {last_four}")
    }
}

/// Hides the full card number from debug output.
impl std::fmt::Debug for CardPayment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardPayment")
            .field("card", &self.masked_number())
            .field("card_holder", &self.card_holder)
            .finish()
    }
}

impl PaymentStrategy for CardPayment {
    fn method(&self) -> &'static str {
        "card"
    }

    fn pay(&self, amount: Money) -> Settlement {
        let card = self.masked_number();
        tracing::info!(%amount, %card, holder = %self.card_holder, "processed card payment");
        Settlement {
            method: self.method(),
            amount,
            reference: Some(format!("{card}, {}", self.card_holder)),
            settled_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(d: f64) -> Money {
        Money::new(d).unwrap()
    }

    #[test]
    fn test_cash_payment() {
        let settlement = CashPayment.pay(money(28.0245));
        assert_eq!(settlement.method, "cash");
        assert!(settlement.reference.is_none());
        assert_eq!(settlement.to_string(), "Paid $28.02 by cash");
    }

    #[test]
    fn test_card_payment_masks_number() {
        let card = CardPayment::new("1234-5678-9876-5432", "Daniel Cojocaru").unwrap();
        assert_eq!(card.masked_number(), "**** 5432");
        assert_eq!(card.card_holder(), "Daniel Cojocaru");

        let settlement = card.pay(money(50.0));
        assert_eq!(settlement.method, "card");
        assert_eq!(
            settlement.reference.as_deref(),
            Some("**** 5432, Daniel Cojocaru")
        );
        assert_eq!(
            settlement.to_string(),
            "Paid $50.00 by card (**** 5432, Daniel Cojocaru)"
        );
    }

    #[test]
    fn test_card_debug_hides_number() {
        let card = CardPayment::new("4111 1111 1111 1111", "Ada").unwrap();
        let debug = format!("{card:?}");
        assert!(!debug.contains("4111 1111"));
        assert!(!debug.contains("411111111111"));
        assert!(debug.contains("**** 1111"));
    }

    #[test]
    fn test_card_requires_holder() {
        assert_eq!(
            CardPayment::new("1234567812345678", "  "),
            Err(PaymentError::EmptyCardHolder)
        );
    }

    #[test]
    fn test_card_number_length_validated() {
        assert_eq!(
            CardPayment::new("1234-5678", "Ada"),
            Err(PaymentError::InvalidCardNumber { digits: 8 })
        );
        assert!(CardPayment::new("12345678901234567890", "Ada").is_err());
    }

    #[test]
    fn test_card_number_characters_validated() {
        assert_eq!(
            CardPayment::new("1234-5678-ABCD-5432", "Ada"),
            Err(PaymentError::InvalidCardCharacter { found: 'A' })
        );
    }
}
