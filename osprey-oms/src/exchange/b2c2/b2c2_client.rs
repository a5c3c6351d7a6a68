use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use osprey_data::protocols::http::{client::RestClient, http_parser::HttpParser};

use crate::{
    exchange::{errors::ExecutionError, ExecutionClient, ExecutionId},
    model::{
        balance::AssetBalance,
        order::{CancelOrder, OpenOrder, Side},
        order_book::OrderBook,
        ticker::Ticker,
        trade::Trade,
    },
};

use super::{
    descriptor,
    request_builder::{B2c2Config, B2c2RequestBuilder},
    requests::{
        account_info::{B2c2AccountInfo, B2c2AccountInfoRequest},
        balance::B2c2BalanceRequest,
        cancel_order::B2c2CancelOrder,
        currencies::{B2c2CurrenciesRequest, B2c2Currency},
        funding_rates::{B2c2FundingRate, B2c2FundingRatesRequest},
        instruments::{B2c2Instrument, B2c2InstrumentsRequest},
        ledger::{B2c2LedgerEntry, B2c2LedgerRequest},
        margin_requirements::{B2c2MarginRequirements, B2c2MarginRequirementsRequest},
        my_trades::B2c2MyTradesRequest,
        new_order::B2c2NewOrder,
        order_book::B2c2OrderBookRequest,
        order_status::{B2c2Order, B2c2OrderRequest, B2c2OrdersRequest},
        request_for_quote::{B2c2Quote, B2c2QuoteRequest},
        ticker::B2c2LatestPricesRequest,
        trade_history::B2c2TradeHistoryRequest,
        withdrawal::{B2c2NewWithdrawal, B2c2Withdrawal, B2c2WithdrawalsRequest},
    },
};

/*----- */
// Convenient types
/*----- */
type B2c2RestClient = RestClient<B2c2HttpParser, B2c2RequestBuilder>;

#[derive(Debug)]
pub struct B2c2Execution {
    pub http_client: B2c2RestClient,
}

#[async_trait]
impl ExecutionClient for B2c2Execution {
    const CLIENT: ExecutionId = ExecutionId::B2c2;

    type Config = B2c2Config;
    type NewOrderResponse = Value;
    type CancelResponse = Value;

    fn new(config: B2c2Config) -> Self {
        let base_url = config.environment.base_url();
        B2c2Execution {
            http_client: B2c2RestClient::new(
                base_url,
                B2c2HttpParser,
                B2c2RequestBuilder::new(config),
            ),
        }
    }

    async fn fetch_balance(&self) -> Result<Vec<AssetBalance>, ExecutionError> {
        let response = self.http_client.execute(B2c2BalanceRequest).await?;
        Ok(response.into())
    }

    async fn fetch_order_book(&self, symbol: &str) -> Result<OrderBook, ExecutionError> {
        let market = descriptor::market(symbol)?;
        let response = self
            .http_client
            .execute(B2c2OrderBookRequest::new(market.id))
            .await?;
        Ok(response.into_order_book(market.symbol))
    }

    async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker, ExecutionError> {
        let market = descriptor::market(symbol)?;
        let response = self.http_client.execute(B2c2LatestPricesRequest).await?;
        response
            .ticker(market)
            .ok_or_else(|| ExecutionError::BadSymbol(symbol.to_owned()))
    }

    async fn fetch_trades(
        &self,
        symbol: &str,
        since: Option<u64>,
        limit: Option<usize>,
    ) -> Result<Vec<Trade>, ExecutionError> {
        let market = descriptor::market(symbol)?;
        let response = self
            .http_client
            .execute(B2c2TradeHistoryRequest::new(market.id))
            .await?;

        // The endpoint only filters by instrument, since / limit are applied
        // after parsing
        let mut trades = response.orders.into_iter().map(Trade::from).collect::<Vec<_>>();
        if let Some(since) = since {
            trades.retain(|trade| trade.timestamp >= since);
        }
        if let Some(limit) = limit {
            trades.truncate(limit);
        }
        Ok(trades)
    }

    async fn open_order(&self, request: OpenOrder) -> Result<Value, ExecutionError> {
        let market = descriptor::market(&request.symbol)?;
        let order = B2c2NewOrder::new(market, &request)?;
        Ok(self.http_client.execute(order).await?)
    }

    async fn cancel_order(&self, request: CancelOrder) -> Result<Value, ExecutionError> {
        let cancel = B2c2CancelOrder::new(&request)?;
        Ok(self.http_client.execute(cancel).await?)
    }
}

impl B2c2Execution {
    pub async fn fetch_order(&self, client_order_id: &str) -> Result<B2c2Order, ExecutionError> {
        Ok(self
            .http_client
            .execute(B2c2OrderRequest::new(client_order_id))
            .await?)
    }

    pub async fn fetch_orders(&self) -> Result<Vec<B2c2Order>, ExecutionError> {
        Ok(self.http_client.execute(B2c2OrdersRequest).await?)
    }

    // Own fills, unlike the anonymous order history these carry the side
    pub async fn fetch_my_trades(&self) -> Result<Vec<Trade>, ExecutionError> {
        let records = self.http_client.execute(B2c2MyTradesRequest).await?;
        Ok(records.into_iter().map(Trade::from).collect())
    }

    pub async fn fetch_ledger(&self) -> Result<Vec<B2c2LedgerEntry>, ExecutionError> {
        Ok(self.http_client.execute(B2c2LedgerRequest).await?)
    }

    pub async fn fetch_withdrawals(&self) -> Result<Vec<B2c2Withdrawal>, ExecutionError> {
        Ok(self.http_client.execute(B2c2WithdrawalsRequest).await?)
    }

    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        destination_address: Option<String>,
    ) -> Result<B2c2Withdrawal, ExecutionError> {
        Ok(self
            .http_client
            .execute(B2c2NewWithdrawal::new(currency, amount, destination_address))
            .await?)
    }

    pub async fn fetch_instruments(&self) -> Result<Vec<B2c2Instrument>, ExecutionError> {
        Ok(self.http_client.execute(B2c2InstrumentsRequest).await?)
    }

    pub async fn fetch_currencies(&self) -> Result<BTreeMap<String, B2c2Currency>, ExecutionError> {
        Ok(self.http_client.execute(B2c2CurrenciesRequest).await?)
    }

    pub async fn fetch_funding_rates(&self) -> Result<Vec<B2c2FundingRate>, ExecutionError> {
        Ok(self.http_client.execute(B2c2FundingRatesRequest).await?)
    }

    pub async fn fetch_account_info(&self) -> Result<B2c2AccountInfo, ExecutionError> {
        Ok(self.http_client.execute(B2c2AccountInfoRequest).await?)
    }

    pub async fn fetch_margin_requirements(
        &self,
    ) -> Result<B2c2MarginRequirements, ExecutionError> {
        Ok(self
            .http_client
            .execute(B2c2MarginRequirementsRequest)
            .await?)
    }

    pub async fn request_for_quote(
        &self,
        symbol: &str,
        side: Side,
        quantity: Decimal,
    ) -> Result<B2c2Quote, ExecutionError> {
        let market = descriptor::market(symbol)?;
        Ok(self
            .http_client
            .execute(B2c2QuoteRequest::new(market.symbol, side, quantity))
            .await?)
    }
}

/*----- */
// B2C2 HTTP response parser
/*----- */
#[derive(Debug)]
pub struct B2c2HttpParser;

// A payload only counts as a venue error when it carries a status or a
// message. Anything else (for instance a 2xx body that merely failed to
// deserialise as the typed response) falls through to the deserialise error.
#[derive(Debug, Deserialize)]
#[serde(try_from = "RawB2c2Error")]
pub struct B2c2ApiError {
    // Venue code, either a JSON number or a numeric string. Non-numeric
    // statuses ("error") leave it unset and the HTTP status takes over.
    pub status: Option<u64>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawB2c2Error {
    #[serde(default)]
    status: Option<VenueCode>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VenueCode {
    Num(u64),
    Str(String),
}

impl TryFrom<RawB2c2Error> for B2c2ApiError {
    type Error = &'static str;

    fn try_from(raw: RawB2c2Error) -> Result<Self, Self::Error> {
        if raw.status.is_none() && raw.message.is_none() {
            return Err("payload carries neither a status nor a message");
        }

        let status = match raw.status {
            Some(VenueCode::Num(code)) => Some(code),
            Some(VenueCode::Str(code)) => code.parse().ok(),
            None => None,
        };

        Ok(Self {
            status,
            message: raw.message,
        })
    }
}

impl HttpParser for B2c2HttpParser {
    type ApiError = B2c2ApiError;
    type OutputError = ExecutionError;

    fn parse_api_error(&self, status: StatusCode, api_error: Self::ApiError) -> Self::OutputError {
        let code = api_error.status.unwrap_or(u64::from(status.as_u16()));
        let message = api_error
            .message
            .unwrap_or_else(|| format!("http status {}", status));
        descriptor::map_venue_error(code, message)
    }
}
