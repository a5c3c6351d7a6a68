pub mod de;
pub mod logging;
pub mod nonce;
