//! Public types at the boundary of the place-order workflow: raw inputs,
//! resulting events, and the unified error union.

use rust_decimal::Decimal;
use thiserror::Error;

use ordertaking_domain::{
    Address, BillingAmount, CustomerInfo, EmailAddress, OrderId, OrderLineId, OrderQuantity, Price,
    ProductCode,
};

// ------------------------------------
// Inputs to the workflow

/// Customer info as it arrives from the outside world, unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnvalidatedCustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// An address as it arrives from the outside world. Empty strings stand in
/// for absent optional lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnvalidatedAddress {
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub address_line4: String,
    pub city: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnvalidatedOrderLine {
    pub order_line_id: String,
    pub product_code: String,
    pub quantity: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnvalidatedOrder {
    pub order_id: String,
    pub customer_info: UnvalidatedCustomerInfo,
    pub shipping_address: UnvalidatedAddress,
    pub billing_address: UnvalidatedAddress,
    pub lines: Vec<UnvalidatedOrderLine>,
}

// ------------------------------------
// Outputs from the workflow (success case)

/// Produced when the acknowledgment letter was actually sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAcknowledgmentSent {
    pub order_id: OrderId,
    pub email_address: EmailAddress,
}

/// A validated line with its price attached.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrderLine {
    pub order_line_id: OrderLineId,
    pub product_code: ProductCode,
    pub quantity: OrderQuantity,
    pub line_price: Price,
}

/// An order that made it through validation and pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub order_id: OrderId,
    pub customer_info: CustomerInfo,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub amount_to_bill: BillingAmount,
    pub lines: Vec<PricedOrderLine>,
}

/// The events resulting from the workflow. Not every event occurs for
/// every order.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceOrderEvent {
    /// Sent to the shipping context. Emitted for every placed order.
    OrderPlaced(PricedOrder),
    /// Sent to the billing context. Only emitted when the amount to bill is
    /// greater than zero.
    BillableOrderPlaced {
        order_id: OrderId,
        billing_address: Address,
        amount_to_bill: BillingAmount,
    },
    /// Only emitted when the acknowledgment letter went out.
    AcknowledgmentSent(OrderAcknowledgmentSent),
}

impl PlaceOrderEvent {
    /// Stable event name, for logs and tagged serialization.
    pub fn event_type(&self) -> &'static str {
        match self {
            PlaceOrderEvent::OrderPlaced(_) => "order.placed",
            PlaceOrderEvent::BillableOrderPlaced { .. } => "order.billable_placed",
            PlaceOrderEvent::AcknowledgmentSent(_) => "order.acknowledgment_sent",
        }
    }
}

// ------------------------------------
// Error outputs

/// A field-level validation failure, e.g. a malformed email address or an
/// unknown product code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// A computed amount fell outside its allowed bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PricingError(pub String);

/// Identity of a remote collaborator, carried with its failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub endpoint: String,
}

/// An infrastructure-level failure in an external service, surfaced
/// verbatim with the originating service identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .service.name, .message)]
pub struct RemoteServiceError {
    pub service: ServiceInfo,
    pub message: String,
}

/// Everything that can go wrong in the place-order workflow. Constructed
/// only by the orchestrator when it translates a step's local error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    #[error("pricing failed: {0}")]
    Pricing(PricingError),

    #[error("remote service failed: {0}")]
    RemoteService(RemoteServiceError),
}
