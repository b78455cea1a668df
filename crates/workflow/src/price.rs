//! Step 2: attach prices to a validated order.
//!
//! Multiplying a unit price by a quantity can push a line out of the price
//! bounds, and summing in-bounds lines can exceed the billing bound; both
//! are reportable pricing errors, not programming errors.

use ordertaking_core::Validated;
use ordertaking_domain::sum_prices;

use crate::collaborators::GetProductPrice;
use crate::public_types::{PricedOrder, PricedOrderLine, PricingError};
use crate::validate::{ValidatedOrder, ValidatedOrderLine};

pub fn to_priced_order_line(
    get_product_price: &impl GetProductPrice,
    line: &ValidatedOrderLine,
) -> Validated<PricedOrderLine, PricingError> {
    let quantity = line.quantity.as_decimal();
    let price = get_product_price.get_product_price(&line.product_code);
    price
        .multiply(quantity)
        .map_err(PricingError)
        .map(|line_price| PricedOrderLine {
            order_line_id: line.order_line_id.clone(),
            product_code: line.product_code.clone(),
            quantity: line.quantity,
            line_price,
        })
}

/// Price every line and validate the total. Pricing failures accumulate
/// across lines; the total chains off the collected lines, since it is
/// derived from them.
pub fn price_order(
    get_product_price: &impl GetProductPrice,
    order: &ValidatedOrder,
) -> Validated<PricedOrder, PricingError> {
    let lines: Validated<Vec<PricedOrderLine>, PricingError> = order
        .lines
        .iter()
        .map(|line| to_priced_order_line(get_product_price, line))
        .collect();
    lines.and_then(|lines| {
        sum_prices(lines.iter().map(|line| &line.line_price))
            .map_err(PricingError)
            .map(|amount_to_bill| PricedOrder {
                order_id: order.order_id.clone(),
                customer_info: order.customer_info.clone(),
                shipping_address: order.shipping_address.clone(),
                billing_address: order.billing_address.clone(),
                amount_to_bill,
                lines,
            })
    })
}
