//! Demo entry point: wires stub collaborators into the workflow and places
//! one order read from stdin (or a built-in sample with `--sample`).
//!
//! The stubs accept every product code and address, price everything at
//! 1.0, and always report the acknowledgment as sent. Real services plug in
//! through the same constructor parameters.

use std::io::Read;

use anyhow::Context;
use async_trait::async_trait;
use rust_decimal::Decimal;

use ordertaking_api::{HttpRequest, JsonString, PlaceOrderApi};
use ordertaking_core::Validated;
use ordertaking_domain::{Price, ProductCode};
use ordertaking_workflow::{
    AddressValidationError, CheckAddressExists, CheckedAddress, HtmlString, OrderAcknowledgment,
    PlaceOrderWorkflow, PricedOrder, SendResult, UnvalidatedAddress,
};

/// Accepts every address as-is.
struct StubAddressService;

#[async_trait]
impl CheckAddressExists for StubAddressService {
    async fn check_address_exists(
        &self,
        address: &UnvalidatedAddress,
    ) -> Validated<CheckedAddress, AddressValidationError> {
        Validated::valid(CheckedAddress(address.clone()))
    }
}

const SAMPLE_ORDER: &str = r#"{
  "order_id": "sample-order",
  "customer_info": {
    "first_name": "John",
    "last_name": "Doe",
    "email_address": "john.doe@example.com"
  },
  "shipping_address": {
    "address_line1": "Wall Street",
    "city": "New York",
    "zip_code": "12345"
  },
  "billing_address": {
    "address_line1": "Wall Street",
    "city": "New York",
    "zip_code": "12345"
  },
  "lines": [
    { "order_line_id": "line-1", "product_code": "W1234", "quantity": 25 }
  ]
}"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ordertaking_observability::init();

    let body = if std::env::args().any(|arg| arg == "--sample") {
        SAMPLE_ORDER.to_owned()
    } else {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading order form from stdin")?;
        input
    };

    let workflow = PlaceOrderWorkflow::new(
        |_: &ProductCode| true,
        StubAddressService,
        |_: &ProductCode| Price::unchecked(Decimal::ONE),
        |order: &PricedOrder| {
            HtmlString(format!("<p>Thank you for order {}.</p>", order.order_id))
        },
        |_: &OrderAcknowledgment| SendResult::Sent,
    );
    let api = PlaceOrderApi::new(workflow);

    let response = api
        .place_order(HttpRequest {
            action: "POST".to_owned(),
            uri: "/orders".to_owned(),
            body: JsonString(body),
        })
        .await;

    tracing::info!(status = response.http_status_code, "place-order request handled");
    println!("{}", response.body.0);
    Ok(())
}
