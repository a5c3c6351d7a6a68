use crate::exchange::errors::ExecutionError;
use crate::model::market::Market;

/*----- */
// Environment
/*----- */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.b2c2.net",
            Environment::Sandbox => "https://api.uat.b2c2.net",
        }
    }
}

/*----- */
// Capabilities
/*----- */
// Which unified operations this venue supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub create_order: bool,
    pub cancel_order: bool,
    pub fetch_balance: bool,
    pub fetch_currencies: bool,
    pub fetch_funding_rates: bool,
    pub fetch_markets: bool,
    pub fetch_ledger: bool,
    pub fetch_my_trades: bool,
    pub fetch_open_orders: bool,
    pub fetch_order: bool,
    pub fetch_orders: bool,
    pub fetch_withdrawals: bool,
    pub withdraw: bool,
}

pub const CAPABILITIES: Capabilities = Capabilities {
    create_order: true,
    cancel_order: true,
    fetch_balance: true,
    fetch_currencies: true,
    fetch_funding_rates: true,
    fetch_markets: true,
    fetch_ledger: true,
    fetch_my_trades: true,
    fetch_open_orders: false,
    fetch_order: true,
    fetch_orders: true,
    fetch_withdrawals: true,
    withdraw: true,
};

/*----- */
// Endpoint paths
/*----- */
pub const PRIVATE_GET_PATHS: &[&str] = &[
    "balance",
    "margin_requirements",
    "instruments",
    "order",
    "order/{client_order_id}",
    "trade",
    "ledger",
    "withdrawal",
    "currency",
    "funding_rates",
    "account_info",
];

pub const PRIVATE_POST_PATHS: &[&str] = &["request_for_quote", "order", "withdrawal"];

/*----- */
// Markets
/*----- */
pub const MARKETS: &[Market] = &[
    Market { id: "btc", symbol: "BTCUSD.SPOT", base: "BTC", quote: "USD", base_id: "btc", quote_id: "usd" },
    Market { id: "eth", symbol: "ETH/AUD", base: "ETH", quote: "AUD", base_id: "eth", quote_id: "aud" },
    Market { id: "xrp", symbol: "XRP/AUD", base: "XRP", quote: "AUD", base_id: "xrp", quote_id: "aud" },
    Market { id: "ltc", symbol: "LTC/AUD", base: "LTC", quote: "AUD", base_id: "ltc", quote_id: "aud" },
    Market { id: "doge", symbol: "DOGE/AUD", base: "DOGE", quote: "AUD", base_id: "doge", quote_id: "aud" },
    Market { id: "rfox", symbol: "RFOX/AUD", base: "RFOX", quote: "AUD", base_id: "rfox", quote_id: "aud" },
    Market { id: "powr", symbol: "POWR/AUD", base: "POWR", quote: "AUD", base_id: "powr", quote_id: "aud" },
    Market { id: "neo", symbol: "NEO/AUD", base: "NEO", quote: "AUD", base_id: "neo", quote_id: "aud" },
    Market { id: "trx", symbol: "TRX/AUD", base: "TRX", quote: "AUD", base_id: "trx", quote_id: "aud" },
    Market { id: "eos", symbol: "EOS/AUD", base: "EOS", quote: "AUD", base_id: "eos", quote_id: "aud" },
    Market { id: "xlm", symbol: "XLM/AUD", base: "XLM", quote: "AUD", base_id: "xlm", quote_id: "aud" },
    Market { id: "rhoc", symbol: "RHOC/AUD", base: "RHOC", quote: "AUD", base_id: "rhoc", quote_id: "aud" },
    Market { id: "gas", symbol: "GAS/AUD", base: "GAS", quote: "AUD", base_id: "gas", quote_id: "aud" },
];

// Resolve a unified symbol to its static market record
pub fn market(symbol: &str) -> Result<&'static Market, ExecutionError> {
    MARKETS
        .iter()
        .find(|market| market.symbol == symbol)
        .ok_or_else(|| ExecutionError::BadSymbol(symbol.to_owned()))
}

pub fn market_by_id(id: &str) -> Option<&'static Market> {
    MARKETS.iter().find(|market| market.id == id)
}

/*----- */
// Venue error codes
/*----- */
// https://docs.b2c2.net/#errors. Codes 407, 507 and 508 are not documented by
// the venue and deliberately fall through to the generic category.
pub fn map_venue_error(code: u64, message: String) -> ExecutionError {
    match code {
        // 401 invalid order type, 402 no orders with specified currencies,
        // 403 invalid payment currency name, 404 wrong transaction type,
        // 405 order with this id doesn't exist, 408 invalid currency name
        401..=405 | 408 => ExecutionError::InvalidOrder(message),
        // Not enough money or crypto
        406 => ExecutionError::InsufficientFunds(message),
        // 501 invalid public key, 502 invalid sign, 505 key has no permission
        501 | 502 | 505 => ExecutionError::Authentication(message),
        // Request time doesn't match current server time
        503 => ExecutionError::InvalidNonce(message),
        // Account locked
        506 => ExecutionError::AccountSuspended(message),
        // Invalid market name
        510 => ExecutionError::BadSymbol(message),
        // 400 missing parameter, 504 invalid method, 509 BIC/SWIFT required
        _ => ExecutionError::Exchange(message),
    }
}
