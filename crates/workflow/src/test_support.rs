//! Shared fixtures for the unit tests in this crate.

use rust_decimal::Decimal;

use ordertaking_core::Validated;
use ordertaking_domain::{BillingAmount, OrderId, OrderLineId, OrderQuantity, ProductCode, UnitQuantity};

use crate::collaborators::CheckedAddress;
use crate::public_types::{PricedOrder, UnvalidatedAddress, UnvalidatedCustomerInfo};
use crate::validate::{ValidatedOrder, ValidatedOrderLine, to_address, to_customer_info};

/// Unwrap a validation that the test has arranged to succeed.
pub(crate) fn ok<T, E: std::fmt::Debug>(validated: Validated<T, E>) -> T {
    match validated {
        Validated::Valid(value) => value,
        Validated::Invalid(errors) => panic!("expected valid: {errors:?}"),
    }
}

pub(crate) fn wall_street() -> UnvalidatedAddress {
    UnvalidatedAddress {
        address_line1: "Wall Street".to_owned(),
        address_line2: String::new(),
        address_line3: String::new(),
        address_line4: String::new(),
        city: "New York".to_owned(),
        zip_code: "12345".to_owned(),
    }
}

pub(crate) fn john_doe() -> UnvalidatedCustomerInfo {
    UnvalidatedCustomerInfo {
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        email_address: "john.doe@example.com".to_owned(),
    }
}

/// A validated single line of `quantity` widgets.
pub(crate) fn widget_line(quantity: i32) -> ValidatedOrderLine {
    ValidatedOrderLine {
        order_line_id: ok(OrderLineId::new("OrderLineId", "line1")),
        product_code: ok(ProductCode::new("ProductCode", "W1234")),
        quantity: OrderQuantity::Unit(ok(UnitQuantity::new("OrderQuantity", quantity))),
    }
}

/// A validated order around the given lines, with fixed customer and
/// addresses.
pub(crate) fn validated_order(lines: Vec<ValidatedOrderLine>) -> ValidatedOrder {
    let address = ok(to_address(&CheckedAddress(wall_street())));
    ValidatedOrder {
        order_id: ok(OrderId::new("OrderId", "test")),
        customer_info: ok(to_customer_info(&john_doe())),
        shipping_address: address.clone(),
        billing_address: address,
        lines,
    }
}

/// A priced order with no lines and the given total, for the steps that
/// only look at the amount.
pub(crate) fn priced_order_with_amount(amount: Decimal) -> PricedOrder {
    let order = validated_order(Vec::new());
    PricedOrder {
        order_id: order.order_id,
        customer_info: order.customer_info,
        shipping_address: order.shipping_address,
        billing_address: order.billing_address,
        amount_to_bill: ok(BillingAmount::new(amount)),
        lines: Vec::new(),
    }
}
