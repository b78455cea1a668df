//! The place-order workflow: validate, price, acknowledge, create events.

use ordertaking_core::Validated;

use crate::acknowledge::acknowledge_order;
use crate::collaborators::{
    CheckAddressExists, CheckProductCodeExists, CreateOrderAcknowledgmentLetter, GetProductPrice,
    SendOrderAcknowledgment,
};
use crate::events::create_events;
use crate::price::price_order;
use crate::public_types::{PlaceOrderError, PlaceOrderEvent, UnvalidatedOrder};
use crate::validate::validate_order;

/// The workflow with its collaborators bound.
///
/// Collaborators are explicit constructor parameters, not process-wide
/// state, so independent orders can run concurrently and tests can swap in
/// whatever behavior they need.
pub struct PlaceOrderWorkflow<CP, CA, GP, CL, SA> {
    check_product_code_exists: CP,
    check_address_exists: CA,
    get_product_price: GP,
    create_acknowledgment_letter: CL,
    send_acknowledgment: SA,
}

impl<CP, CA, GP, CL, SA> PlaceOrderWorkflow<CP, CA, GP, CL, SA>
where
    CP: CheckProductCodeExists,
    CA: CheckAddressExists,
    GP: GetProductPrice,
    CL: CreateOrderAcknowledgmentLetter,
    SA: SendOrderAcknowledgment,
{
    pub fn new(
        check_product_code_exists: CP,
        check_address_exists: CA,
        get_product_price: GP,
        create_acknowledgment_letter: CL,
        send_acknowledgment: SA,
    ) -> Self {
        Self {
            check_product_code_exists,
            check_address_exists,
            get_product_price,
            create_acknowledgment_letter,
            send_acknowledgment,
        }
    }

    /// Run the four steps for one order.
    ///
    /// Each step accumulates its own errors internally; the step sequence
    /// short-circuits, so a failed validation never reaches pricing. Local
    /// step errors are translated into [`PlaceOrderError`] element-wise at
    /// each boundary.
    pub async fn place_order(
        &self,
        order: UnvalidatedOrder,
    ) -> Validated<Vec<PlaceOrderEvent>, PlaceOrderError> {
        let validated = validate_order(
            &self.check_product_code_exists,
            &self.check_address_exists,
            &order,
        )
        .await
        .map_err(PlaceOrderError::Validation);

        let priced = validated.and_then(|validated| {
            price_order(&self.get_product_price, &validated).map_err(PlaceOrderError::Pricing)
        });

        match priced {
            Validated::Valid(priced) => {
                let acknowledgment = acknowledge_order(
                    &self.create_acknowledgment_letter,
                    &self.send_acknowledgment,
                    &priced,
                );
                tracing::info!(
                    order_id = %priced.order_id,
                    amount = %priced.amount_to_bill.value(),
                    acknowledged = acknowledgment.is_some(),
                    "order placed"
                );
                Validated::Valid(create_events(priced, acknowledgment))
            }
            Validated::Invalid(errors) => {
                tracing::warn!(errors = errors.len(), "order rejected");
                Validated::Invalid(errors)
            }
        }
    }
}
