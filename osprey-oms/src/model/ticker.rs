use serde::{Deserialize, Serialize};

/*----- */
// Ticker
/*----- */
// Unified ticker. Fields the venue does not publish stay `None` rather than
// being faked from other figures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    pub timestamp: u64,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
    pub close: Option<f64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub vwap: Option<f64>,
    pub base_volume: Option<f64>,
    pub quote_volume: Option<f64>,
}
