//! Request envelope serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use globalcollect_types::{GatewayError, ParamTree, ParamValue};

/// Fixed protocol version sent in every META block.
pub const PROTOCOL_VERSION: &str = "1.0";

/// Serializes an operation into the processor's envelope:
/// `XML > REQUEST > { ACTION, META { MERCHANTID, VERSION }, PARAMS { ... } }`
/// with nested tags named after the tree's keys, in insertion order.
pub fn build_request(
    action: &str,
    merchant_id: &str,
    params: &ParamTree,
) -> Result<String, GatewayError> {
    let mut writer = Writer::new(Vec::new());

    open(&mut writer, "XML")?;
    open(&mut writer, "REQUEST")?;
    scalar(&mut writer, "ACTION", action)?;
    open(&mut writer, "META")?;
    scalar(&mut writer, "MERCHANTID", merchant_id)?;
    scalar(&mut writer, "VERSION", PROTOCOL_VERSION)?;
    close(&mut writer, "META")?;
    open(&mut writer, "PARAMS")?;
    tree(&mut writer, params)?;
    close(&mut writer, "PARAMS")?;
    close(&mut writer, "REQUEST")?;
    close(&mut writer, "XML")?;

    String::from_utf8(writer.into_inner()).map_err(|e| GatewayError::Encode(e.to_string()))
}

fn tree(writer: &mut Writer<Vec<u8>>, params: &ParamTree) -> Result<(), GatewayError> {
    for (name, value) in params.iter() {
        match value {
            ParamValue::Scalar(text) => scalar(writer, name, text)?,
            ParamValue::Tree(subtree) => {
                open(writer, name)?;
                tree(writer, subtree)?;
                close(writer, name)?;
            }
        }
    }
    Ok(())
}

fn open(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), GatewayError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| GatewayError::Encode(e.to_string()))
}

fn close(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), GatewayError> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| GatewayError::Encode(e.to_string()))
}

fn scalar(writer: &mut Writer<Vec<u8>>, name: &str, value: &str) -> Result<(), GatewayError> {
    open(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(|e| GatewayError::Encode(e.to_string()))?;
    close(writer, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let params = ParamTree::new().with(
            "PAYMENT",
            ParamTree::new()
                .with("ORDERID", "9998990013")
                .with("EFFORTID", 1u32),
        );

        let body = build_request("SET_PAYMENT", "5128", &params).unwrap();
        assert_eq!(
            body,
            "<XML><REQUEST>\
             <ACTION>SET_PAYMENT</ACTION>\
             <META><MERCHANTID>5128</MERCHANTID><VERSION>1.0</VERSION></META>\
             <PARAMS><PAYMENT><ORDERID>9998990013</ORDERID><EFFORTID>1</EFFORTID></PAYMENT></PARAMS>\
             </REQUEST></XML>"
        );
    }

    #[test]
    fn test_sections_keep_insertion_order() {
        let params = ParamTree::new()
            .with("ORDER", ParamTree::new().with("ORDERID", "1"))
            .with("PAYMENT", ParamTree::new().with("PAYMENTPRODUCTID", 1u32));

        let body = build_request("INSERT_ORDERWITHPAYMENT", "1", &params).unwrap();
        let order_at = body.find("<ORDER>").unwrap();
        let payment_at = body.find("<PAYMENT>").unwrap();
        assert!(order_at < payment_at);
    }

    #[test]
    fn test_empty_scalar_serializes_as_empty_element() {
        let params = ParamTree::new().with("PAYMENT", ParamTree::new().with("ORDERID", ""));
        let body = build_request("CANCEL_PAYMENT", "5128", &params).unwrap();
        assert!(body.contains("<ORDERID></ORDERID>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let params = ParamTree::new().with("MERCHANTREFERENCE", "a&b<c>");
        let body = build_request("DO_REFUND", "5128", &params).unwrap();
        assert!(body.contains("<MERCHANTREFERENCE>a&amp;b&lt;c&gt;</MERCHANTREFERENCE>"));
    }
}
