//! Contracts for the external services the workflow consumes.
//!
//! The workflow never talks to infrastructure directly; each dependency is
//! a narrow trait, bound into [`PlaceOrderWorkflow`](crate::PlaceOrderWorkflow)
//! by the caller. The synchronous contracts carry blanket impls over plain
//! closures, so tests and wiring code can pass a lambda where a full
//! implementation would be noise.

use async_trait::async_trait;

use ordertaking_core::Validated;
use ordertaking_domain::{EmailAddress, Price, ProductCode};

use crate::public_types::{PricedOrder, UnvalidatedAddress};

/// Product-catalog membership check.
pub trait CheckProductCodeExists: Send + Sync {
    fn check_exists(&self, product_code: &ProductCode) -> bool;
}

impl<F> CheckProductCodeExists for F
where
    F: Fn(&ProductCode) -> bool + Send + Sync,
{
    fn check_exists(&self, product_code: &ProductCode) -> bool {
        self(product_code)
    }
}

/// Ways the address service can reject an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressValidationError {
    InvalidFormat,
    AddressNotFound,
}

/// An address the address service has seen and accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedAddress(pub UnvalidatedAddress);

/// Remote address-existence check; the workflow's only suspension point.
#[async_trait]
pub trait CheckAddressExists: Send + Sync {
    async fn check_address_exists(
        &self,
        address: &UnvalidatedAddress,
    ) -> Validated<CheckedAddress, AddressValidationError>;
}

/// Price lookup. Catalog prices are assumed in bounds at the source; the
/// pricing step still re-validates after multiplying by the quantity.
pub trait GetProductPrice: Send + Sync {
    fn get_product_price(&self, product_code: &ProductCode) -> Price;
}

impl<F> GetProductPrice for F
where
    F: Fn(&ProductCode) -> Price + Send + Sync,
{
    fn get_product_price(&self, product_code: &ProductCode) -> Price {
        self(product_code)
    }
}

/// Rendered acknowledgment letter content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlString(pub String);

/// A letter plus where to send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAcknowledgment {
    pub email_address: EmailAddress,
    pub letter: HtmlString,
}

pub trait CreateOrderAcknowledgmentLetter: Send + Sync {
    fn create_letter(&self, priced_order: &PricedOrder) -> HtmlString;
}

impl<F> CreateOrderAcknowledgmentLetter for F
where
    F: Fn(&PricedOrder) -> HtmlString + Send + Sync,
{
    fn create_letter(&self, priced_order: &PricedOrder) -> HtmlString {
        self(priced_order)
    }
}

/// Whether the acknowledgment went out. A send failure is business data,
/// not a workflow error: the order still goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendResult {
    Sent,
    NotSent,
}

pub trait SendOrderAcknowledgment: Send + Sync {
    fn send_acknowledgment(&self, acknowledgment: &OrderAcknowledgment) -> SendResult;
}

impl<F> SendOrderAcknowledgment for F
where
    F: Fn(&OrderAcknowledgment) -> SendResult + Send + Sync,
{
    fn send_acknowledgment(&self, acknowledgment: &OrderAcknowledgment) -> SendResult {
        self(acknowledgment)
    }
}
