pub mod account_info;
pub mod balance;
pub mod cancel_order;
pub mod currencies;
pub mod funding_rates;
pub mod instruments;
pub mod ledger;
pub mod margin_requirements;
pub mod my_trades;
pub mod new_order;
pub mod order_book;
pub mod order_status;
pub mod request_for_quote;
pub mod ticker;
pub mod trade_history;
pub mod withdrawal;
