//! Gateway configuration.
//!
//! The processor's implicit globals (merchant id, default currency, test
//! mode) become one explicit, immutable configuration value handed to the
//! gateway at construction.

use serde::{Deserialize, Serialize};

use globalcollect_types::Currency;

/// WebCollect test endpoint.
pub const TEST_URL: &str = "https://ps.gcsip.nl/wdl/wdl";
/// WebCollect live endpoint.
pub const LIVE_URL: &str = "https://ps.gcsip.com/wdl/wdl";

/// Which WebCollect endpoint operations are dispatched to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Test,
    Live,
}

impl Mode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Mode::Test => TEST_URL,
            Mode::Live => LIVE_URL,
        }
    }
}

/// Immutable gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Merchant identifier, required by every request's META block.
    pub merchant_id: String,
    /// Currency used when neither the money nor the options carry one.
    pub default_currency: Currency,
    pub mode: Mode,
}

impl GatewayConfig {
    /// Creates a test-mode configuration with the processor's historical
    /// CAD default currency.
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            default_currency: Currency::CAD,
            mode: Mode::Test,
        }
    }

    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn endpoint(&self) -> &'static str {
        self.mode.endpoint()
    }

    pub fn is_test(&self) -> bool {
        self.mode == Mode::Test
    }
}
