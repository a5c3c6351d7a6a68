use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use osprey_data::protocols::http::rest_request::RestRequest;
use osprey_data::shared::de::de_flexible_f64;

use crate::model::balance::{AssetBalance, Balance};

/*----- */
// B2C2 Balance
/*----- */
#[derive(Debug, Default, Serialize)]
pub struct B2c2BalanceRequest;

impl RestRequest for B2c2BalanceRequest {
    type Response = B2c2BalanceResponse;
    type Body = ();

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/balance")
    }

    fn method() -> reqwest::Method {
        reqwest::Method::GET
    }
}

/*----- */
// B2C2 Balance - Response
/*----- */
#[derive(Debug, Deserialize)]
pub struct B2c2BalanceResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(alias = "balances")]
    pub balance: B2c2Balances,
}

// Read-write api keys return an array of per-asset objects, read-only keys a
// flat map of asset to amount.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum B2c2Balances {
    Nested(Vec<BTreeMap<String, B2c2AssetBalance>>),
    Flat(BTreeMap<String, f64>),
}

// Only `balance` feeds the unified model. The accompanying quote-valuation
// fields (`audbalance`, `rate`) are ignored.
#[derive(Debug, Deserialize)]
pub struct B2c2AssetBalance {
    #[serde(deserialize_with = "de_flexible_f64")]
    pub balance: f64,
}

impl From<B2c2BalanceResponse> for Vec<AssetBalance> {
    fn from(response: B2c2BalanceResponse) -> Self {
        // Collect through a map keyed by asset code so each asset yields
        // exactly one entry regardless of response shape
        let mut totals = BTreeMap::new();
        match response.balance {
            B2c2Balances::Nested(entries) => {
                for currencies in entries {
                    for (asset, asset_balance) in currencies {
                        totals.insert(asset.to_uppercase(), asset_balance.balance);
                    }
                }
            }
            B2c2Balances::Flat(currencies) => {
                for (asset, total) in currencies {
                    totals.insert(asset.to_uppercase(), total);
                }
            }
        }

        totals
            .into_iter()
            .map(|(asset, total)| AssetBalance::new(asset, Balance::from_total(total)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_write_key_shape_normalises_per_asset() {
        let payload = r#"{
            "status":"ok",
            "balances":[
                {"LTC":{"balance":0.1,"audbalance":16.59,"rate":165.95}},
                {"BTC":{"balance":0.004,"audbalance":86.19,"rate":21549.09}}
            ]
        }"#;

        let response = serde_json::from_str::<B2c2BalanceResponse>(payload).unwrap();
        let balances: Vec<AssetBalance> = response.into();

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].asset, "BTC");
        assert_eq!(balances[0].balance, Balance::new(0.004, 0.0, 0.004));
        assert_eq!(balances[1].asset, "LTC");
        assert_eq!(balances[1].balance, Balance::new(0.1, 0.0, 0.1));
    }

    #[test]
    fn read_only_key_shape_normalises_flat_map() {
        let payload = r#"{"status":"ok","balance":{"BTC":0.5,"ETH":2.25}}"#;

        let response = serde_json::from_str::<B2c2BalanceResponse>(payload).unwrap();
        let balances: Vec<AssetBalance> = response.into();

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].asset, "BTC");
        assert_eq!(balances[0].balance.total, 0.5);
        assert_eq!(balances[0].balance.free, 0.5);
        assert_eq!(balances[0].balance.used, 0.0);
        assert_eq!(balances[1].asset, "ETH");
        assert_eq!(balances[1].balance.total, 2.25);
    }

    #[test]
    fn duplicate_assets_across_entries_yield_one_entry() {
        let payload = r#"{
            "balances":[
                {"LTC":{"balance":0.1}},
                {"LTC":{"balance":0.2}}
            ]
        }"#;

        let response = serde_json::from_str::<B2c2BalanceResponse>(payload).unwrap();
        let balances: Vec<AssetBalance> = response.into();

        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].asset, "LTC");
        assert_eq!(balances[0].balance.total, 0.2);
    }

    #[test]
    fn string_amounts_are_accepted() {
        let payload = r#"{"balances":[{"LTC":{"balance":"0.1"}}]}"#;
        let response = serde_json::from_str::<B2c2BalanceResponse>(payload).unwrap();
        let balances: Vec<AssetBalance> = response.into();
        assert_eq!(balances[0].balance.total, 0.1);
    }
}
