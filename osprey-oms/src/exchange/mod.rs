pub mod b2c2;
pub mod errors;

use std::fmt::Display;

use async_trait::async_trait;
use hmac::Hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha512;

use crate::model::{
    balance::AssetBalance,
    order::{CancelOrder, OpenOrder},
    order_book::OrderBook,
    ticker::Ticker,
    trade::Trade,
};
use errors::ExecutionError;

/*----- */
// Convenient types
/*----- */
pub type HmacSha512 = Hmac<Sha512>;

/*----- */
// Execution Client Trait
/*----- */
// Venue seam: one implementation per exchange. Every operation is a stateless
// one-shot request / response translation, failures propagate immediately.
#[async_trait]
pub trait ExecutionClient {
    const CLIENT: ExecutionId;

    type Config;
    type NewOrderResponse;
    type CancelResponse;

    fn new(config: Self::Config) -> Self
    where
        Self: Sized;

    // Get balances for every asset held at the venue
    async fn fetch_balance(&self) -> Result<Vec<AssetBalance>, ExecutionError>;

    // Current bid / ask ladder for a single symbol
    async fn fetch_order_book(&self, symbol: &str) -> Result<OrderBook, ExecutionError>;

    // Latest prices for a single symbol
    async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker, ExecutionError>;

    // Historic trades for a single symbol, optionally bounded by a millisecond
    // timestamp and a maximum count
    async fn fetch_trades(
        &self,
        symbol: &str,
        since: Option<u64>,
        limit: Option<usize>,
    ) -> Result<Vec<Trade>, ExecutionError>;

    // Open an order for a single symbol
    async fn open_order(&self, request: OpenOrder)
        -> Result<Self::NewOrderResponse, ExecutionError>;

    // Cancel an order by venue order id
    async fn cancel_order(
        &self,
        request: CancelOrder,
    ) -> Result<Self::CancelResponse, ExecutionError>;
}

/*----- */
// Execution IDs
/*----- */
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionId {
    B2c2,
}

impl ExecutionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionId::B2c2 => "b2c2",
        }
    }
}

impl Display for ExecutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
