use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use osprey_data::protocols::http::rest_request::RestRequest;

use crate::exchange::errors::ExecutionError;
use crate::model::{
    market::Market,
    order::{OpenOrder, OrderKind, Side},
};

/*----- */
// B2C2 New Order
/*----- */
// The venue only takes limit orders, market orders are rejected locally
// before any network call. The side selects the endpoint, it is not a body
// field.
#[derive(Debug, Serialize)]
pub struct B2c2NewOrder {
    #[serde(skip)]
    side: Side,
    cointype: String,
    amount: f64,
    rate: f64,
}

impl B2c2NewOrder {
    pub fn new(market: &Market, order: &OpenOrder) -> Result<Self, ExecutionError> {
        if order.order_kind == OrderKind::Market {
            return Err(ExecutionError::InvalidOrder(String::from(
                "b2c2 allows limit orders only",
            )));
        }

        Ok(Self {
            side: order.side,
            cointype: market.id.to_owned(),
            amount: order.amount,
            rate: order.price,
        })
    }

    // Explicit side-to-endpoint table
    fn path_for(side: Side) -> &'static str {
        match side {
            Side::Buy => "/my/buy",
            Side::Sell => "/my/sell",
        }
    }
}

impl RestRequest for B2c2NewOrder {
    // Raw venue acknowledgment, passed through untouched
    type Response = Value;
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed(Self::path_for(self.side))
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::exchange::b2c2::descriptor;

    fn open_order(side: Side, order_kind: OrderKind) -> OpenOrder {
        OpenOrder {
            symbol: String::from("BTCUSD.SPOT"),
            side,
            order_kind,
            amount: 0.5,
            price: 21000.0,
        }
    }

    #[test]
    fn market_orders_are_rejected_locally() {
        let market = descriptor::market("BTCUSD.SPOT").unwrap();
        for side in [Side::Buy, Side::Sell] {
            let result = B2c2NewOrder::new(market, &open_order(side, OrderKind::Market));
            assert!(matches!(result, Err(ExecutionError::InvalidOrder(_))));
        }
    }

    #[test]
    fn side_selects_the_endpoint() {
        let market = descriptor::market("BTCUSD.SPOT").unwrap();

        let buy = B2c2NewOrder::new(market, &open_order(Side::Buy, OrderKind::Limit)).unwrap();
        assert_eq!(buy.path(), "/my/buy");

        let sell = B2c2NewOrder::new(market, &open_order(Side::Sell, OrderKind::Limit)).unwrap();
        assert_eq!(sell.path(), "/my/sell");
    }

    #[test]
    fn body_carries_instrument_id_amount_and_rate() {
        let market = descriptor::market("BTCUSD.SPOT").unwrap();
        let order = B2c2NewOrder::new(market, &open_order(Side::Buy, OrderKind::Limit)).unwrap();

        let body = serde_json::to_value(order.body().unwrap()).unwrap();
        assert_eq!(body["cointype"], "btc");
        assert_eq!(body["amount"], 0.5);
        assert_eq!(body["rate"], 21000.0);
        // side is routing, not payload
        assert!(body.get("side").is_none());
    }
}
