use serde::{Deserialize, Serialize};

/*----- */
// Level
/*----- */
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub amount: f64,
}

impl Level {
    pub fn new(price: f64, amount: f64) -> Self {
        Self { price, amount }
    }
}

/*----- */
// Order Book
/*----- */
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderBook {
    pub symbol: String,
    pub bids: Vec<Level>,
    pub asks: Vec<Level>,
}
