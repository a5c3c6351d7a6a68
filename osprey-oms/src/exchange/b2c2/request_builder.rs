use hmac::Mac;
use serde_json::{Map, Value};

use osprey_data::{
    error::HttpError,
    protocols::http::{request_builder::ExchangeRequestBuilder, rest_request::RestRequest},
    shared::nonce::NonceGen,
};

use crate::exchange::HmacSha512;

use super::descriptor::Environment;

/*----- */
// B2C2 configuration
/*----- */
// Credentials are explicit adapter configuration, never process-global state.
#[derive(Debug, Clone, Default)]
pub struct B2c2Config {
    pub api_key: String,
    pub api_secret: String,
    pub environment: Environment,
}

impl B2c2Config {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            environment: Environment::Production,
        }
    }

    pub fn sandbox(mut self) -> Self {
        self.environment = Environment::Sandbox;
        self
    }

    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("B2C2_API_KEY").unwrap_or_default(),
            api_secret: std::env::var("B2C2_API_SECRET").unwrap_or_default(),
            environment: Environment::Production,
        }
    }
}

/*----- */
// B2C2 request signing
/*----- */
// Private endpoints get the nonce spliced into the JSON body and an
// HMAC-SHA512 hex digest over the body bytes exactly as sent. Public market
// data requests are built without credentials, headers or body.
#[derive(Debug)]
pub struct B2c2RequestBuilder {
    config: B2c2Config,
    nonce_gen: NonceGen,
}

impl B2c2RequestBuilder {
    pub fn new(config: B2c2Config) -> Self {
        Self {
            config,
            nonce_gen: NonceGen::new(),
        }
    }

    fn check_credentials(&self) -> Result<(), HttpError> {
        if self.config.api_key.is_empty() || self.config.api_secret.is_empty() {
            return Err(HttpError::Unauthorised(String::from(
                "b2c2 requires an api key and secret for all requests",
            )));
        }
        Ok(())
    }

    pub fn signed_body<Request>(&self, request: &Request) -> Result<String, HttpError>
    where
        Request: RestRequest,
    {
        let fields = match request.body() {
            Some(request_body) => {
                match serde_json::to_value(request_body).map_err(HttpError::Serialise)? {
                    Value::Object(map) => map,
                    // Unit bodies serialise to null, sign a nonce-only body
                    _ => Map::new(),
                }
            }
            None => Map::new(),
        };

        let mut body = Map::new();
        body.insert(String::from("nonce"), Value::from(self.nonce_gen.next()));
        for (key, value) in fields {
            body.insert(key, value);
        }

        serde_json::to_string(&Value::Object(body)).map_err(HttpError::Serialise)
    }

    #[inline]
    pub fn generate_signature(&self, body: &str) -> String {
        let mut mac = HmacSha512::new_from_slice(self.config.api_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(body.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl ExchangeRequestBuilder for B2c2RequestBuilder {
    fn build_signed_request<Request>(
        &self,
        builder: reqwest::RequestBuilder,
        request: Request,
    ) -> Result<reqwest::Request, HttpError>
    where
        Request: RestRequest,
    {
        // Public market data passes through untouched, no credentials needed
        if !Request::requires_signature() {
            return builder.build().map_err(HttpError::from);
        }

        self.check_credentials()?;

        let body = self.signed_body(&request)?;
        let signature = self.generate_signature(&body);

        builder
            .header("Content-Type", "application/json")
            .header("key", self.config.api_key.as_str())
            .header("sign", signature)
            .body(body)
            .build()
            .map_err(HttpError::from)
    }
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;

    use serde::Serialize;

    use super::*;

    #[derive(Debug, Serialize)]
    struct FakeOrder {
        cointype: String,
        amount: f64,
        rate: f64,
    }

    impl RestRequest for FakeOrder {
        type Response = serde_json::Value;
        type Body = Self;

        fn path(&self) -> Cow<'static, str> {
            Cow::Borrowed("/my/buy")
        }

        fn method() -> reqwest::Method {
            reqwest::Method::POST
        }

        fn body(&self) -> Option<&Self::Body> {
            Some(self)
        }
    }

    #[derive(Debug, Serialize)]
    struct FakePrices;

    impl RestRequest for FakePrices {
        type Response = serde_json::Value;
        type Body = ();

        fn path(&self) -> Cow<'static, str> {
            Cow::Borrowed("/latest")
        }

        fn method() -> reqwest::Method {
            reqwest::Method::GET
        }

        fn requires_signature() -> bool {
            false
        }
    }

    fn builder() -> B2c2RequestBuilder {
        B2c2RequestBuilder::new(B2c2Config::new("key", "topsecret"))
    }

    #[test]
    fn signature_matches_known_hmac_sha512_vector() {
        let body = r#"{"amount":1.5,"cointype":"btc","nonce":1700000000000,"rate":25000.0}"#;
        let signature = builder().generate_signature(body);
        assert_eq!(
            signature,
            "b567bdaa65e6ed6e4851981e9afe2899c4e1ef2a6490583cf995c0b867fdff77\
             39cf76eec4095aad8f7f0a9cae8ed885f6e28cbb36281155a2ad915d2200496c"
        );
    }

    #[test]
    fn signature_is_hex_sha512_and_deterministic() {
        let request_builder = builder();
        let first = request_builder.generate_signature(r#"{"nonce":1}"#);
        let second = request_builder.generate_signature(r#"{"nonce":1}"#);
        assert_eq!(first.len(), 128);
        assert_eq!(first, second);
        assert_ne!(first, request_builder.generate_signature(r#"{"nonce":2}"#));
    }

    #[test]
    fn signed_body_contains_nonce_and_request_fields() {
        let request_builder = builder();
        let body = request_builder
            .signed_body(&FakeOrder {
                cointype: String::from("btc"),
                amount: 2.0,
                rate: 3.0,
            })
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(value["nonce"].is_u64());
        assert_eq!(value["cointype"], "btc");
        assert_eq!(value["amount"], 2.0);
        assert_eq!(value["rate"], 3.0);
    }

    #[test]
    fn signed_bodies_use_fresh_nonces() {
        let request_builder = builder();
        let order = FakeOrder {
            cointype: String::from("btc"),
            amount: 2.0,
            rate: 3.0,
        };
        let first: serde_json::Value =
            serde_json::from_str(&request_builder.signed_body(&order).unwrap()).unwrap();
        let second: serde_json::Value =
            serde_json::from_str(&request_builder.signed_body(&order).unwrap()).unwrap();
        assert!(second["nonce"].as_u64().unwrap() > first["nonce"].as_u64().unwrap());
    }

    #[test]
    fn missing_credentials_fail_before_any_network_call() {
        let request_builder = B2c2RequestBuilder::new(B2c2Config::default());
        let http_client = reqwest::Client::new();
        let result = request_builder.build_signed_request(
            http_client.request(reqwest::Method::POST, "https://api.b2c2.net/my/buy"),
            FakeOrder {
                cointype: String::from("btc"),
                amount: 2.0,
                rate: 3.0,
            },
        );
        assert!(matches!(result, Err(HttpError::Unauthorised(_))));
    }

    #[test]
    fn public_requests_pass_through_unsigned() {
        // No credentials configured and none required
        let request_builder = B2c2RequestBuilder::new(B2c2Config::default());
        let http_client = reqwest::Client::new();
        let request = request_builder
            .build_signed_request(
                http_client.request(reqwest::Method::GET, "https://api.b2c2.net/latest"),
                FakePrices,
            )
            .unwrap();

        assert!(request.headers().get("sign").is_none());
        assert!(request.headers().get("key").is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn signed_request_carries_key_and_sign_headers() {
        let request_builder = builder();
        let http_client = reqwest::Client::new();
        let request = request_builder
            .build_signed_request(
                http_client.request(reqwest::Method::POST, "https://api.b2c2.net/my/buy"),
                FakeOrder {
                    cointype: String::from("btc"),
                    amount: 2.0,
                    rate: 3.0,
                },
            )
            .unwrap();

        assert_eq!(request.headers()["key"], "key");
        assert_eq!(request.headers()["Content-Type"], "application/json");
        assert_eq!(request.headers()["sign"].to_str().unwrap().len(), 128);
    }
}
