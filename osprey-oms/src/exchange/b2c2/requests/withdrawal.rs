use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

/*----- */
// B2C2 Withdrawals
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2WithdrawalsRequest;

impl RestRequest for B2c2WithdrawalsRequest {
    type Response = Vec<B2c2Withdrawal>;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/withdrawal")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

#[derive(Debug, Deserialize)]
pub struct B2c2Withdrawal {
    #[serde(default)]
    pub withdrawal_id: Option<String>,
    pub currency: String,
    pub amount: Decimal,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/*----- */
// B2C2 New Withdrawal
/*----- */
#[derive(Debug, Serialize)]
pub struct B2c2NewWithdrawal {
    currency: String,
    amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_address: Option<String>,
}

impl B2c2NewWithdrawal {
    pub fn new(currency: &str, amount: Decimal, destination_address: Option<String>) -> Self {
        Self {
            currency: currency.to_owned(),
            amount,
            destination_address,
        }
    }
}

impl RestRequest for B2c2NewWithdrawal {
    type Response = B2c2Withdrawal;
    type Body = Self;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/withdrawal")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::POST
    }

    fn body(&self) -> Option<&Self::Body> {
        Some(self)
    }
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn withdrawal_record_de() {
        let payload = r#"{
            "withdrawal_id":"8b3e95a9-2342-4a1e-bd1c-42a36fee9633",
            "currency":"USD",
            "amount":"1000.0000000000",
            "created":"2018-03-01T10:00:00Z",
            "state":"pending"
        }"#;

        let withdrawal = serde_json::from_str::<B2c2Withdrawal>(payload).unwrap();
        assert_eq!(withdrawal.currency, "USD");
        assert_eq!(withdrawal.amount, dec!(1000));
        assert_eq!(withdrawal.state.as_deref(), Some("pending"));
    }

    #[test]
    fn new_withdrawal_body_omits_missing_address() {
        let request = B2c2NewWithdrawal::new("USD", dec!(100), None);
        let body = serde_json::to_value(request.body().unwrap()).unwrap();
        assert_eq!(body["currency"], "USD");
        assert!(body.get("destination_address").is_none());
    }
}
