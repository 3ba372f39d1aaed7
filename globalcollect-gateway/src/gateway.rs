//! Operation assemblers and the purchase orchestrator.
//!
//! Each operation is a pure function of its inputs plus one network round
//! trip through the injected transport. No state is kept between calls;
//! the authorization token is the only cross-call artifact and it is
//! owned by the caller.

use std::str::FromStr;

use globalcollect_types::{
    AuthorizationToken, CardBrand, CardDetails, GatewayError, Money, OrderId, Outcome, ParamTree,
    PaymentOptions, Transport,
};

use crate::config::GatewayConfig;
use crate::wire::{build_request, parse_response};

const CONTENT_TYPE: (&str, &str) = ("Content-Type", "text/xml; charset=utf-8");
const LANGUAGE_CODE: &str = "en";

/// The GlobalCollect gateway.
///
/// Generic over `T: Transport` - the adapter is injected at construction.
/// This enables:
/// - Swapping the HTTP client without code changes
/// - Testing with a scripted transport double
/// - Compile-time checks for port implementation
pub struct Gateway<T: Transport> {
    config: GatewayConfig,
    transport: T,
}

impl<T: Transport> Gateway<T> {
    /// Creates a gateway. The merchant id is required; rejecting it here
    /// keeps every later operation free of configuration checks.
    pub fn new(config: GatewayConfig, transport: T) -> Result<Self, GatewayError> {
        if config.merchant_id.trim().is_empty() {
            return Err(GatewayError::MissingMerchantId);
        }
        Ok(Self { config, transport })
    }

    /// Returns the gateway configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Places an order with an attached payment (`INSERT_ORDERWITHPAYMENT`).
    ///
    /// Requires `order_id` and `country` in the options. The returned
    /// outcome carries an encoded authorization token whether the
    /// processor accepted or rejected - a rejected order can still be
    /// voided with it.
    #[tracing::instrument(skip_all, fields(order_id = ?options.order_id))]
    pub async fn authorize(
        &self,
        money: Money,
        card: &CardDetails,
        options: &PaymentOptions,
    ) -> Result<Outcome, GatewayError> {
        let raw_order_id = options
            .order_id
            .as_deref()
            .ok_or(GatewayError::MissingOption("order_id"))?;
        let country = options
            .country
            .as_deref()
            .ok_or(GatewayError::MissingOption("country"))?;

        let order_id = OrderId::normalize(raw_order_id);
        let payment_product = CardBrand::from_str(card.brand())?.payment_product();
        let authorization = AuthorizationToken::encode(&order_id, payment_product);

        let mut order = ParamTree::new()
            .with("ORDERID", order_id.as_str())
            .with("MERCHANTREFERENCE", order_id.as_str())
            .with("COUNTRYCODE", country)
            .with("LANGUAGECODE", LANGUAGE_CODE);
        self.add_amount(&mut order, money, options);

        let mut payment = ParamTree::new()
            .with("PAYMENTPRODUCTID", payment_product)
            .with("COUNTRYCODE", country)
            .with("LANGUAGECODE", LANGUAGE_CODE);
        self.add_amount(&mut payment, money, options);
        add_credit_card(&mut payment, card);

        let params = ParamTree::new()
            .with("ORDER", order)
            .with("PAYMENT", payment);
        self.commit("INSERT_ORDERWITHPAYMENT", params, authorization)
            .await
    }

    /// Confirms a previously authorized payment (`SET_PAYMENT`).
    ///
    /// The amount argument exists for symmetry with the other operations
    /// but is not transmitted: the processor settles the amount fixed at
    /// authorization time.
    #[tracing::instrument(skip_all, fields(authorization = %authorization))]
    pub async fn capture(
        &self,
        _money: Money,
        authorization: &AuthorizationToken,
        _options: &PaymentOptions,
    ) -> Result<Outcome, GatewayError> {
        let (order_id, payment_product) = authorization.decode();
        let payment = ParamTree::new()
            .with("ORDERID", order_id)
            .with("PAYMENTPRODUCTID", payment_product)
            .with("EFFORTID", 1u32);

        let params = ParamTree::new().with("PAYMENT", payment);
        self.commit("SET_PAYMENT", params, authorization.clone())
            .await
    }

    /// Cancels an authorized payment (`CANCEL_PAYMENT`).
    #[tracing::instrument(skip_all, fields(authorization = %authorization))]
    pub async fn void(
        &self,
        authorization: &AuthorizationToken,
        _options: &PaymentOptions,
    ) -> Result<Outcome, GatewayError> {
        let (order_id, _) = authorization.decode();
        let payment = ParamTree::new()
            .with("ORDERID", order_id)
            .with("ATTEMPTID", 1u32)
            .with("EFFORTID", 1u32);

        let params = ParamTree::new().with("PAYMENT", payment);
        self.commit("CANCEL_PAYMENT", params, authorization.clone())
            .await
    }

    /// Refunds a settled payment (`DO_REFUND`).
    #[tracing::instrument(skip_all, fields(authorization = %authorization))]
    pub async fn refund(
        &self,
        money: Money,
        authorization: &AuthorizationToken,
        options: &PaymentOptions,
    ) -> Result<Outcome, GatewayError> {
        let (order_id, _) = authorization.decode();
        let mut payment = ParamTree::new().with("ORDERID", order_id);
        self.add_amount(&mut payment, money, options);

        let params = ParamTree::new().with("PAYMENT", payment);
        self.commit("DO_REFUND", params, authorization.clone()).await
    }

    /// Authorize-then-capture as one composite operation.
    ///
    /// Short-circuits: a rejected authorization is returned unchanged and
    /// capture is never attempted. On the capture path the returned
    /// outcome is capture's, with the authorize-step token restored so it
    /// is never lost across the two steps.
    #[tracing::instrument(skip_all, fields(order_id = ?options.order_id))]
    pub async fn purchase(
        &self,
        money: Money,
        card: &CardDetails,
        options: &PaymentOptions,
    ) -> Result<Outcome, GatewayError> {
        let authorized = self.authorize(money, card, options).await?;
        if !authorized.success {
            return Ok(authorized);
        }

        let token = authorized.authorization;
        let mut captured = self.capture(money, &token, options).await?;
        captured.authorization = token;
        Ok(captured)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Assembly helpers
    // ─────────────────────────────────────────────────────────────────────────────

    fn add_amount(&self, tree: &mut ParamTree, money: Money, options: &PaymentOptions) {
        let currency = options
            .currency
            .or(money.currency())
            .unwrap_or(self.config.default_currency);
        tree.set("AMOUNT", money.amount());
        tree.set("CURRENCYCODE", currency.code());
    }

    async fn commit(
        &self,
        action: &str,
        params: ParamTree,
        authorization: AuthorizationToken,
    ) -> Result<Outcome, GatewayError> {
        let body = build_request(action, &self.config.merchant_id, &params)?;
        let url = self.config.endpoint();
        tracing::debug!(action, url, "dispatching request");

        let response = self.transport.send(url, &body, &[CONTENT_TYPE]).await?;
        parse_response(&response, authorization, self.config.is_test())
    }
}

fn add_credit_card(tree: &mut ParamTree, card: &CardDetails) {
    tree.set("CREDITCARDNUMBER", card.number());
    tree.set("EXPIRYDATE", card.expiry_mmyy());
    if let Some(code) = card.verification_code() {
        tree.set("CVV", code);
    }
}
