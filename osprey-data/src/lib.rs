pub mod error;
pub mod protocols;
pub mod shared;
