pub mod balance;
pub mod market;
pub mod order;
pub mod order_book;
pub mod ticker;
pub mod trade;
