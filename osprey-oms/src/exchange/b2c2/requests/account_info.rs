use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;

/*----- */
// B2C2 Account Info
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2AccountInfoRequest;

impl RestRequest for B2c2AccountInfoRequest {
    type Response = B2c2AccountInfo;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/account_info")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

#[derive(Debug, Deserialize)]
pub struct B2c2AccountInfo {
    pub risk_exposure: Decimal,
    pub max_risk_exposure: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub btc_max_qty_per_trade: Option<Decimal>,
}

#[cfg(test)]
mod test {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn account_info_de() {
        let payload = r#"{
            "risk_exposure":"735.5",
            "max_risk_exposure":"100000.0",
            "currency":"USD",
            "btc_max_qty_per_trade":"100.0"
        }"#;

        let info = serde_json::from_str::<B2c2AccountInfo>(payload).unwrap();
        assert_eq!(info.risk_exposure, dec!(735.5));
        assert_eq!(info.max_risk_exposure, dec!(100000));
        assert_eq!(info.btc_max_qty_per_trade, Some(dec!(100)));
    }
}
