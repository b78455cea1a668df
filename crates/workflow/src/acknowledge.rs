//! Step 3: send the order acknowledgment.

use crate::collaborators::{
    CreateOrderAcknowledgmentLetter, OrderAcknowledgment, SendOrderAcknowledgment, SendResult,
};
use crate::public_types::{OrderAcknowledgmentSent, PricedOrder};

/// Build the letter and try to send it. This step cannot fail the
/// workflow: a send failure just means no acknowledgment event is emitted.
pub fn acknowledge_order(
    create_acknowledgment_letter: &impl CreateOrderAcknowledgmentLetter,
    send_acknowledgment: &impl SendOrderAcknowledgment,
    priced_order: &PricedOrder,
) -> Option<OrderAcknowledgmentSent> {
    let letter = create_acknowledgment_letter.create_letter(priced_order);
    let acknowledgment = OrderAcknowledgment {
        email_address: priced_order.customer_info.email_address.clone(),
        letter,
    };
    match send_acknowledgment.send_acknowledgment(&acknowledgment) {
        SendResult::Sent => Some(OrderAcknowledgmentSent {
            order_id: priced_order.order_id.clone(),
            email_address: priced_order.customer_info.email_address.clone(),
        }),
        SendResult::NotSent => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::HtmlString;
    use crate::test_support::priced_order_with_amount;
    use rust_decimal::Decimal;

    fn letter(order: &PricedOrder) -> HtmlString {
        HtmlString(format!("<p>Thank you for order {}.</p>", order.order_id))
    }

    #[test]
    fn successful_send_produces_the_acknowledgment() {
        let order = priced_order_with_amount(Decimal::from(100));
        let sent = acknowledge_order(&letter, &|_: &OrderAcknowledgment| SendResult::Sent, &order);
        match sent {
            Some(acknowledgment) => {
                assert_eq!(acknowledgment.order_id, order.order_id);
                assert_eq!(acknowledgment.email_address, order.customer_info.email_address);
            }
            None => panic!("expected an acknowledgment"),
        }
    }

    #[test]
    fn failed_send_produces_nothing() {
        let order = priced_order_with_amount(Decimal::from(100));
        let sent =
            acknowledge_order(&letter, &|_: &OrderAcknowledgment| SendResult::NotSent, &order);
        assert_eq!(sent, None);
    }
}
