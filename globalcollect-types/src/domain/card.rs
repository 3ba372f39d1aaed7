//! Card details and the processor's payment-product table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Card schemes the processor accepts, with their payment-product codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    Visa,
    AmericanExpress,
    Master,
    Maestro,
    Solo,
    Dankort,
    Laser,
    Jcb,
    Discover,
}

impl CardBrand {
    /// The processor's numeric payment-product code for this scheme.
    pub fn payment_product(&self) -> u32 {
        match self {
            CardBrand::Visa => 1,
            CardBrand::AmericanExpress => 2,
            CardBrand::Master => 3,
            CardBrand::Maestro => 117,
            CardBrand::Solo => 118,
            CardBrand::Dankort => 123,
            CardBrand::Laser => 124,
            CardBrand::Jcb => 125,
            CardBrand::Discover => 128,
        }
    }
}

impl std::str::FromStr for CardBrand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visa" => Ok(CardBrand::Visa),
            "american_express" => Ok(CardBrand::AmericanExpress),
            "master" => Ok(CardBrand::Master),
            "maestro" => Ok(CardBrand::Maestro),
            "solo" => Ok(CardBrand::Solo),
            "dankort" => Ok(CardBrand::Dankort),
            "laser" => Ok(CardBrand::Laser),
            "jcb" => Ok(CardBrand::Jcb),
            "discover" => Ok(CardBrand::Discover),
            other => Err(DomainError::UnsupportedCardBrand(other.to_string())),
        }
    }
}

/// Card data as supplied by the caller.
///
/// The brand is kept as the caller's scheme string; it is resolved to a
/// payment product when an authorization is assembled, so an unsupported
/// scheme fails before anything touches the network.
#[derive(Clone, Serialize, Deserialize)]
pub struct CardDetails {
    number: String,
    month: u8,
    year: u16,
    verification_code: Option<String>,
    brand: String,
}

impl CardDetails {
    /// Creates card details. The expiry month must be 1-12.
    pub fn new(
        number: impl Into<String>,
        month: u8,
        year: u16,
        brand: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidExpiryMonth(month));
        }
        Ok(Self {
            number: number.into(),
            month,
            year,
            verification_code: None,
            brand: brand.into(),
        })
    }

    /// Attaches the card verification code.
    pub fn with_verification_code(mut self, code: impl Into<String>) -> Self {
        self.verification_code = Some(code.into());
        self
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn verification_code(&self) -> Option<&str> {
        self.verification_code.as_deref()
    }

    /// Expiry in the processor's `MMYY` form: two-digit month, two-digit year.
    pub fn expiry_mmyy(&self) -> String {
        format!("{:02}{:02}", self.month, self.year % 100)
    }
}

// Card number and verification code never appear in logs.
impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &"[REDACTED]")
            .field("month", &self.month)
            .field("year", &self.year)
            .field(
                "verification_code",
                &self.verification_code.as_ref().map(|_| "[REDACTED]"),
            )
            .field("brand", &self.brand)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_payment_product_table() {
        assert_eq!(CardBrand::Visa.payment_product(), 1);
        assert_eq!(CardBrand::AmericanExpress.payment_product(), 2);
        assert_eq!(CardBrand::Master.payment_product(), 3);
        assert_eq!(CardBrand::Maestro.payment_product(), 117);
        assert_eq!(CardBrand::Solo.payment_product(), 118);
        assert_eq!(CardBrand::Dankort.payment_product(), 123);
        assert_eq!(CardBrand::Laser.payment_product(), 124);
        assert_eq!(CardBrand::Jcb.payment_product(), 125);
        assert_eq!(CardBrand::Discover.payment_product(), 128);
    }

    #[test]
    fn test_unknown_brand_fails() {
        let result = CardBrand::from_str("diners_club");
        assert!(matches!(
            result,
            Err(DomainError::UnsupportedCardBrand(ref b)) if b == "diners_club"
        ));
    }

    #[test]
    fn test_expiry_format() {
        let card = CardDetails::new("4000100011112224", 9, 2027, "visa").unwrap();
        assert_eq!(card.expiry_mmyy(), "0927");

        let card = CardDetails::new("4000100011112224", 12, 2030, "visa").unwrap();
        assert_eq!(card.expiry_mmyy(), "1230");
    }

    #[test]
    fn test_invalid_month_fails() {
        assert!(matches!(
            CardDetails::new("4111111111111111", 0, 2027, "visa"),
            Err(DomainError::InvalidExpiryMonth(0))
        ));
        assert!(matches!(
            CardDetails::new("4111111111111111", 13, 2027, "visa"),
            Err(DomainError::InvalidExpiryMonth(13))
        ));
    }

    #[test]
    fn test_debug_redacts_card_data() {
        let card = CardDetails::new("4000100011112224", 9, 2027, "visa")
            .unwrap()
            .with_verification_code("123");
        let rendered = format!("{:?}", card);
        assert!(!rendered.contains("4000100011112224"));
        assert!(!rendered.contains("123"));
        assert!(rendered.contains("visa"));
    }
}
