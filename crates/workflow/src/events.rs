//! Step 4: assemble the outgoing events.

use rust_decimal::Decimal;

use crate::public_types::{OrderAcknowledgmentSent, PlaceOrderEvent, PricedOrder};

/// The billing event only exists when there is something to bill: a zero
/// total emits nothing for the billing context.
pub fn create_billing_event(priced_order: &PricedOrder) -> Option<PlaceOrderEvent> {
    if priced_order.amount_to_bill.value() > Decimal::ZERO {
        Some(PlaceOrderEvent::BillableOrderPlaced {
            order_id: priced_order.order_id.clone(),
            billing_address: priced_order.billing_address.clone(),
            amount_to_bill: priced_order.amount_to_bill,
        })
    } else {
        None
    }
}

/// Emit, in order: the acknowledgment event (if the letter went out), the
/// order-placed event (always), and the billing event (if billable).
pub fn create_events(
    priced_order: PricedOrder,
    acknowledgment: Option<OrderAcknowledgmentSent>,
) -> Vec<PlaceOrderEvent> {
    let mut events = Vec::with_capacity(3);
    if let Some(sent) = acknowledgment {
        events.push(PlaceOrderEvent::AcknowledgmentSent(sent));
    }
    let billing_event = create_billing_event(&priced_order);
    events.push(PlaceOrderEvent::OrderPlaced(priced_order));
    if let Some(event) = billing_event {
        events.push(event);
    }
    events
}
