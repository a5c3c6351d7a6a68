use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::Side;

/*----- */
// Trade
/*----- */
// Unified trade record. Monetary fields are decimals so that derived values
// (cost = price x amount) stay exact instead of drifting through f64.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: Option<String>,
    pub symbol: String,
    // Milliseconds since epoch
    pub timestamp: u64,
    pub price: Decimal,
    pub amount: Decimal,
    pub cost: Decimal,
    pub side: Option<Side>,
    pub fee: Option<Decimal>,
}
