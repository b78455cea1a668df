//! `ordertaking-api` — JSON boundary for the place-order workflow.
//!
//! A request body is deserialized into an order form DTO, the workflow
//! runs, and the full ordered event or error list is rendered back.
//! Nothing is truncated or reordered on the way out. Real transport is out
//! of scope; the request/response shapes here are deliberately minimal.

pub mod dto;

use serde::Serialize;

use ordertaking_core::Validated;
use ordertaking_workflow::{
    CheckAddressExists, CheckProductCodeExists, CreateOrderAcknowledgmentLetter, GetProductPrice,
    PlaceOrderWorkflow, SendOrderAcknowledgment,
};

use crate::dto::{OrderFormDto, PlaceOrderErrorDto, PlaceOrderEventDto};

/// A raw JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonString(pub String);

/// Very simplified request shape.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub action: String,
    pub uri: String,
    pub body: JsonString,
}

/// Very simplified response shape.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub http_status_code: u16,
    pub body: JsonString,
}

/// The place-order workflow exposed as a JSON endpoint.
pub struct PlaceOrderApi<CP, CA, GP, CL, SA> {
    workflow: PlaceOrderWorkflow<CP, CA, GP, CL, SA>,
}

impl<CP, CA, GP, CL, SA> PlaceOrderApi<CP, CA, GP, CL, SA>
where
    CP: CheckProductCodeExists,
    CA: CheckAddressExists,
    GP: GetProductPrice,
    CL: CreateOrderAcknowledgmentLetter,
    SA: SendOrderAcknowledgment,
{
    pub fn new(workflow: PlaceOrderWorkflow<CP, CA, GP, CL, SA>) -> Self {
        Self { workflow }
    }

    /// Handle one place-order request end to end.
    pub async fn place_order(&self, request: HttpRequest) -> HttpResponse {
        let form: OrderFormDto = match serde_json::from_str(&request.body.0) {
            Ok(form) => form,
            Err(error) => {
                tracing::warn!(%error, "malformed order form");
                let errors = vec![PlaceOrderErrorDto {
                    code: "malformed_request".to_owned(),
                    message: error.to_string(),
                }];
                return HttpResponse {
                    http_status_code: 400,
                    body: to_json(&errors),
                };
            }
        };

        match self.workflow.place_order(form.to_unvalidated_order()).await {
            Validated::Valid(events) => {
                let events: Vec<PlaceOrderEventDto> =
                    events.iter().map(PlaceOrderEventDto::from_domain).collect();
                HttpResponse {
                    http_status_code: 200,
                    body: to_json(&events),
                }
            }
            Validated::Invalid(errors) => {
                let errors: Vec<PlaceOrderErrorDto> =
                    errors.iter().map(PlaceOrderErrorDto::from_domain).collect();
                HttpResponse {
                    http_status_code: 400,
                    body: to_json(&errors),
                }
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> JsonString {
    match serde_json::to_string(value) {
        Ok(body) => JsonString(body),
        Err(error) => {
            // These DTOs are plain data; failing to serialize them is a
            // defect, but the boundary still answers.
            tracing::error!(%error, "response serialization failed");
            JsonString("[]".to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use serde_json::Value;

    use ordertaking_domain::{Price, ProductCode};
    use ordertaking_workflow::{
        AddressValidationError, CheckedAddress, HtmlString, OrderAcknowledgment, PricedOrder,
        SendResult, UnvalidatedAddress,
    };

    struct PassThroughAddressService;

    #[async_trait]
    impl CheckAddressExists for PassThroughAddressService {
        async fn check_address_exists(
            &self,
            address: &UnvalidatedAddress,
        ) -> Validated<CheckedAddress, AddressValidationError> {
            Validated::valid(CheckedAddress(address.clone()))
        }
    }

    fn api() -> PlaceOrderApi<
        impl CheckProductCodeExists,
        impl CheckAddressExists,
        impl GetProductPrice,
        impl CreateOrderAcknowledgmentLetter,
        impl SendOrderAcknowledgment,
    > {
        PlaceOrderApi::new(PlaceOrderWorkflow::new(
            |_: &ProductCode| true,
            PassThroughAddressService,
            |_: &ProductCode| Price::unchecked(Decimal::new(400, 1)),
            |order: &PricedOrder| {
                HtmlString(format!("<p>Thank you for order {}.</p>", order.order_id))
            },
            |_: &OrderAcknowledgment| SendResult::Sent,
        ))
    }

    fn request(body: &str) -> HttpRequest {
        HttpRequest {
            action: "POST".to_owned(),
            uri: "/orders".to_owned(),
            body: JsonString(body.to_owned()),
        }
    }

    const ORDER_FORM: &str = r#"{
        "order_id": "order-1",
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

    #[tokio::test]
    async fn valid_order_answers_200_with_ordered_events() {
        let response = api().place_order(request(ORDER_FORM)).await;
        assert_eq!(response.http_status_code, 200);

        let events: Value = serde_json::from_str(&response.body.0).expect("valid JSON");
        let tags: Vec<&str> = events
            .as_array()
            .expect("array body")
            .iter()
            .map(|event| event["event"].as_str().expect("tag"))
            .collect();
        assert_eq!(
            tags,
            vec!["acknowledgment_sent", "order_placed", "billable_order_placed"]
        );
        assert_eq!(events[1]["amount_to_bill"], Value::from(1000.0));
    }

    #[tokio::test]
    async fn invalid_order_answers_400_with_every_error() {
        let body = ORDER_FORM
            .replace("john.doe@example.com", "not-an-email")
            .replace("W1234", "foo");
        let response = api().place_order(request(&body)).await;
        assert_eq!(response.http_status_code, 400);

        let errors: Value = serde_json::from_str(&response.body.0).expect("valid JSON");
        let messages: Vec<&str> = errors
            .as_array()
            .expect("array body")
            .iter()
            .map(|error| error["message"].as_str().expect("message"))
            .collect();
        assert_eq!(
            messages,
            vec![
                "EmailAddress: 'not-an-email' must match the pattern '.+@.+'",
                "ProductCode: Format not recognized 'foo'",
                "ProductCode: Format not recognized 'foo'",
            ]
        );
        assert!(errors.as_array().expect("array body").iter().all(|e| e["code"] == "validation"));
    }

    #[tokio::test]
    async fn malformed_body_answers_400() {
        let response = api().place_order(request("{ not json")).await;
        assert_eq!(response.http_status_code, 400);

        let errors: Value = serde_json::from_str(&response.body.0).expect("valid JSON");
        assert_eq!(errors[0]["code"], "malformed_request");
    }
}
