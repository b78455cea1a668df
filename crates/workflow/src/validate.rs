//! Step 1: turn an unvalidated order into a [`ValidatedOrder`].
//!
//! Every independent piece (order id, customer info, both addresses, each
//! line) is validated on its own, then combined so the caller sees *all*
//! failures at once. Only genuinely dependent validations chain: an order
//! quantity cannot be checked without its validated product code, and an
//! address is only structurally validated after the existence check.

use ordertaking_core::{Validated, combine};
use ordertaking_domain::{
    Address, CustomerInfo, EmailAddress, OrderId, OrderLineId, OrderQuantity, PersonalName,
    ProductCode, String50, ZipCode,
};
use rust_decimal::Decimal;

use crate::collaborators::{
    AddressValidationError, CheckAddressExists, CheckProductCodeExists, CheckedAddress,
};
use crate::public_types::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
    ValidationError,
};

/// An order line whose pieces all passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrderLine {
    pub order_line_id: OrderLineId,
    pub product_code: ProductCode,
    pub quantity: OrderQuantity,
}

/// An order whose fields all passed validation; pricing has not run yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    pub order_id: OrderId,
    pub customer_info: CustomerInfo,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub lines: Vec<ValidatedOrderLine>,
}

pub fn to_customer_info(
    customer_info: &UnvalidatedCustomerInfo,
) -> Validated<CustomerInfo, ValidationError> {
    let first_name =
        String50::new("FirstName", &customer_info.first_name).map_err(ValidationError);
    let last_name = String50::new("LastName", &customer_info.last_name).map_err(ValidationError);
    let email_address =
        EmailAddress::new("EmailAddress", &customer_info.email_address).map_err(ValidationError);
    combine!(
        first_name = first_name,
        last_name = last_name,
        email_address = email_address
        => CustomerInfo {
            name: PersonalName { first_name, last_name },
            email_address,
        }
    )
}

pub fn to_address(checked_address: &CheckedAddress) -> Validated<Address, ValidationError> {
    let address = &checked_address.0;
    let address_line1 =
        String50::new("AddressLine1", &address.address_line1).map_err(ValidationError);
    let address_line2 =
        String50::new_option("AddressLine2", &address.address_line2).map_err(ValidationError);
    let address_line3 =
        String50::new_option("AddressLine3", &address.address_line3).map_err(ValidationError);
    let address_line4 =
        String50::new_option("AddressLine4", &address.address_line4).map_err(ValidationError);
    let city = String50::new("City", &address.city).map_err(ValidationError);
    let zip_code = ZipCode::new("ZipCode", &address.zip_code).map_err(ValidationError);
    combine!(
        address_line1 = address_line1,
        address_line2 = address_line2,
        address_line3 = address_line3,
        address_line4 = address_line4,
        city = city,
        zip_code = zip_code
        => Address {
            address_line1,
            address_line2,
            address_line3,
            address_line4,
            city,
            zip_code,
        }
    )
}

/// Run the remote existence check, translating its error variants into
/// validation errors.
pub async fn to_checked_address(
    check_address_exists: &impl CheckAddressExists,
    address: &UnvalidatedAddress,
) -> Validated<CheckedAddress, ValidationError> {
    check_address_exists
        .check_address_exists(address)
        .await
        .map_err(|error| match error {
            AddressValidationError::AddressNotFound => {
                ValidationError("Address not found".to_owned())
            }
            AddressValidationError::InvalidFormat => {
                ValidationError("Address has bad format".to_owned())
            }
        })
}

pub fn to_order_id(order_id: &str) -> Validated<OrderId, ValidationError> {
    OrderId::new("OrderId", order_id).map_err(ValidationError)
}

pub fn to_order_line_id(order_line_id: &str) -> Validated<OrderLineId, ValidationError> {
    OrderLineId::new("OrderLineId", order_line_id).map_err(ValidationError)
}

/// Validate the code structurally, then confirm it actually exists in the
/// product catalog.
pub fn to_product_code(
    check_product_code_exists: &impl CheckProductCodeExists,
    product_code: &str,
) -> Validated<ProductCode, ValidationError> {
    ProductCode::new("ProductCode", product_code)
        .map_err(ValidationError)
        .and_then(|code| {
            if check_product_code_exists.check_exists(&code) {
                Validated::valid(code)
            } else {
                Validated::invalid(ValidationError(format!("Invalid: {code}")))
            }
        })
}

pub fn to_order_quantity(
    product_code: &ProductCode,
    quantity: Decimal,
) -> Validated<OrderQuantity, ValidationError> {
    OrderQuantity::new("OrderQuantity", product_code, quantity).map_err(ValidationError)
}

pub fn to_validated_order_line(
    check_product_code_exists: &impl CheckProductCodeExists,
    line: &UnvalidatedOrderLine,
) -> Validated<ValidatedOrderLine, ValidationError> {
    let order_line_id = to_order_line_id(&line.order_line_id);
    let product_code = to_product_code(check_product_code_exists, &line.product_code);
    // The quantity range depends on the product code, so this chains rather
    // than combining; a bad code therefore reports once for the code itself
    // and once more through the quantity.
    let quantity = product_code
        .clone()
        .and_then(|code| to_order_quantity(&code, line.quantity));
    combine!(
        order_line_id = order_line_id,
        product_code = product_code,
        quantity = quantity
        => ValidatedOrderLine { order_line_id, product_code, quantity }
    )
}

/// Validate the whole order, accumulating failures from every independent
/// field, address and line.
pub async fn validate_order(
    check_product_code_exists: &impl CheckProductCodeExists,
    check_address_exists: &impl CheckAddressExists,
    order: &UnvalidatedOrder,
) -> Validated<ValidatedOrder, ValidationError> {
    let order_id = to_order_id(&order.order_id);
    let customer_info = to_customer_info(&order.customer_info);
    let shipping_address = to_checked_address(check_address_exists, &order.shipping_address)
        .await
        .and_then(|checked| to_address(&checked));
    let billing_address = to_checked_address(check_address_exists, &order.billing_address)
        .await
        .and_then(|checked| to_address(&checked));
    let lines: Validated<Vec<ValidatedOrderLine>, ValidationError> = order
        .lines
        .iter()
        .map(|line| to_validated_order_line(check_product_code_exists, line))
        .collect();
    combine!(
        order_id = order_id,
        customer_info = customer_info,
        shipping_address = shipping_address,
        billing_address = billing_address,
        lines = lines
        => ValidatedOrder {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            lines,
        }
    )
}
