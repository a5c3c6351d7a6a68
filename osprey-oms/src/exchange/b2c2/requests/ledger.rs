use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

/*----- */
// B2C2 Ledger
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2LedgerRequest;

impl RestRequest for B2c2LedgerRequest {
    type Response = Vec<B2c2LedgerEntry>;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/ledger")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

#[derive(Debug, Deserialize)]
pub struct B2c2LedgerEntry {
    pub transaction_id: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub reference: Option<String>,
    pub currency: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub group: Option<String>,
}
