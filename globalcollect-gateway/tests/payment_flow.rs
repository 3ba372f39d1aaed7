//! End-to-end flow through the public API with a scripted transport.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use globalcollect_gateway::{Gateway, GatewayConfig};
use globalcollect_types::{
    CardDetails, Currency, Money, PaymentOptions, Transport, TransportError,
};

struct ScriptedTransport {
    responses: Mutex<VecDeque<String>>,
    bodies: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn new(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            bodies: Mutex::new(Vec::new()),
        }
    }

    fn body(&self, index: usize) -> String {
        self.bodies.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        _url: &str,
        body: &str,
        _headers: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        self.bodies.lock().unwrap().push(body.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Connect("script exhausted".to_string()))
    }
}

fn response(result: &str, inner: &str) -> String {
    format!(
        "<XML><REQUEST><RESPONSE><RESULT>{}</RESULT>{}</RESPONSE></REQUEST></XML>",
        result, inner
    )
}

#[tokio::test]
async fn purchase_then_refund_round_trip() {
    let transport = ScriptedTransport::new(&[
        &response("OK", "<ROW><ORDERID>1000123456</ORDERID><STATUSID>800</STATUSID></ROW>"),
        &response("OK", "<ROW><STATUSID>900</STATUSID></ROW>"),
        &response("NOK", "<ERROR><MESSAGE>ORDER WITHOUT REFUNDABLE PAYMENTS</MESSAGE></ERROR>"),
    ]);
    let gateway = Gateway::new(GatewayConfig::new("5128"), transport).unwrap();

    let card = CardDetails::new("4000100011112224", 9, 2030, "visa")
        .unwrap()
        .with_verification_code("123");
    let options = PaymentOptions::new()
        .with_order_id("1000123456")
        .with_country("CA")
        .with_currency(Currency::CAD);
    let amount = Money::minor(100).unwrap();

    let purchase = gateway.purchase(amount, &card, &options).await.unwrap();
    assert!(purchase.success);
    assert_eq!(purchase.message, "Success");
    assert_eq!(purchase.authorization.as_str(), "1000123456|1");

    // refunds against the test server fail until settlement; the outcome
    // still normalizes cleanly
    let refund = gateway
        .refund(Money::minor(80).unwrap(), &purchase.authorization, &options)
        .await
        .unwrap();
    assert!(!refund.success);
    assert_eq!(refund.message, "ORDER WITHOUT REFUNDABLE PAYMENTS");

    let transport = gateway.transport();
    assert!(transport.body(0).contains("<ACTION>INSERT_ORDERWITHPAYMENT</ACTION>"));
    assert!(transport.body(1).contains("<ACTION>SET_PAYMENT</ACTION>"));
    assert!(transport.body(2).contains("<ACTION>DO_REFUND</ACTION>"));
    assert!(transport.body(2).contains("<AMOUNT>80</AMOUNT>"));
}

#[tokio::test]
async fn capture_against_unsettled_token_reports_processor_errors() {
    let transport = ScriptedTransport::new(&[&response(
        "NOK",
        "<ERROR><MESSAGE> PARAMETER ORDERID NOT FOUND IN REQUEST </MESSAGE></ERROR>\
         <ERROR><MESSAGE> PARAMETER PAYMENTPRODUCTID NOT FOUND IN REQUEST </MESSAGE></ERROR>",
    )]);
    let gateway = Gateway::new(GatewayConfig::new("5128"), transport).unwrap();

    let capture = gateway
        .capture(
            Money::minor(100).unwrap(),
            &"".into(),
            &PaymentOptions::new(),
        )
        .await
        .unwrap();

    assert!(!capture.success);
    assert_eq!(
        capture.message,
        "PARAMETER ORDERID NOT FOUND IN REQUEST; PARAMETER PAYMENTPRODUCTID NOT FOUND IN REQUEST"
    );
}
