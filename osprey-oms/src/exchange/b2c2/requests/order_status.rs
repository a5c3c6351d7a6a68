use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

use crate::model::order::Side;

/*----- */
// B2C2 Orders
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2OrdersRequest;

impl RestRequest for B2c2OrdersRequest {
    type Response = Vec<B2c2Order>;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/order")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

/*----- */
// B2C2 Single Order
/*----- */
#[derive(Debug, Serialize)]
pub struct B2c2OrderRequest {
    client_order_id: String,
}

impl B2c2OrderRequest {
    pub fn new(client_order_id: &str) -> Self {
        Self {
            client_order_id: client_order_id.to_owned(),
        }
    }
}

impl RestRequest for B2c2OrderRequest {
    type Response = B2c2Order;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/order/{}", self.client_order_id))
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

/*----- */
// B2C2 Order - Response
/*----- */
#[derive(Debug, Deserialize)]
pub struct B2c2Order {
    pub order_id: String,
    pub client_order_id: String,
    pub instrument: String,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
    // Null when the order was rejected
    #[serde(default)]
    pub executed_price: Option<Decimal>,
    pub order_type: String,
    #[serde(default)]
    pub executing_unit: Option<String>,
    pub created: DateTime<Utc>,
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn order_record_de() {
        let payload = r#"{
            "order_id":"d4e41399-e7a1-4576-9b46-349420040e1a",
            "client_order_id":"d4e41399-e7a1-4576-9b46-349420040e1a",
            "quantity":"3.0000000000",
            "side":"buy",
            "instrument":"BTCUSD.SPOT",
            "price":"11000.00000000",
            "executed_price":"10457.651100000",
            "executing_unit":"risk-adding-strategy",
            "order_type":"FOK",
            "created":"2018-02-06T16:07:50.122206Z"
        }"#;

        let order = serde_json::from_str::<B2c2Order>(payload).unwrap();
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.quantity, dec!(3));
        assert_eq!(order.executed_price, Some(dec!(10457.6511)));
        assert_eq!(order.order_type, "FOK");
    }

    #[test]
    fn rejected_order_has_no_executed_price() {
        let payload = r#"{
            "order_id":"a",
            "client_order_id":"b",
            "quantity":"1",
            "side":"sell",
            "instrument":"ETH/AUD",
            "price":"100",
            "executed_price":null,
            "order_type":"MKT",
            "created":"2020-01-01T00:00:00Z"
        }"#;

        let order = serde_json::from_str::<B2c2Order>(payload).unwrap();
        assert_eq!(order.executed_price, None);
    }

    #[test]
    fn single_order_path_embeds_client_order_id() {
        let request = B2c2OrderRequest::new("d4e41399");
        assert_eq!(request.path(), "/order/d4e41399");
    }
}
