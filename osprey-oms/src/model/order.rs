use std::fmt::Display;

use serde::{Deserialize, Serialize};

/*----- */
// Side
/*----- */
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/*----- */
// Order kind
/*----- */
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Limit,
    Market,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Limit => "limit",
            OrderKind::Market => "market",
        }
    }
}

impl Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/*----- */
// Open Order
/*----- */
#[derive(Debug, Clone, PartialEq)]
pub struct OpenOrder {
    pub symbol: String,
    pub side: Side,
    pub order_kind: OrderKind,
    pub amount: f64,
    pub price: f64,
}

/*----- */
// Cancel Order
/*----- */
// `side` arrives as a caller supplied parameter and is validated at the
// venue boundary, where "buy" / "sell" are the only accepted values.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelOrder {
    pub id: String,
    pub side: Option<String>,
}
