//! `ordertaking-workflow` — the place-order workflow.
//!
//! Four steps run in sequence: validate, price, acknowledge, create events.
//! Each step accumulates its own errors internally; the step *sequence*
//! short-circuits, so a failed validation never reaches pricing. The
//! orchestrator translates each step's local error type into the unified
//! [`PlaceOrderError`] at the step boundary.

pub mod acknowledge;
pub mod collaborators;
pub mod events;
pub mod place_order;
pub mod price;
pub mod public_types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use acknowledge::acknowledge_order;
pub use collaborators::{
    AddressValidationError, CheckAddressExists, CheckProductCodeExists, CheckedAddress,
    CreateOrderAcknowledgmentLetter, GetProductPrice, HtmlString, OrderAcknowledgment,
    SendOrderAcknowledgment, SendResult,
};
pub use events::{create_billing_event, create_events};
pub use place_order::PlaceOrderWorkflow;
pub use price::price_order;
pub use public_types::{
    OrderAcknowledgmentSent, PlaceOrderError, PlaceOrderEvent, PricedOrder, PricedOrderLine,
    PricingError, RemoteServiceError, ServiceInfo, UnvalidatedAddress, UnvalidatedCustomerInfo,
    UnvalidatedOrder, UnvalidatedOrderLine, ValidationError,
};
pub use validate::{ValidatedOrder, ValidatedOrderLine, validate_order};
