//! Wire DTOs for the place-order boundary.
//!
//! Inward conversions (`to_unvalidated_*`) always succeed; validation is
//! the workflow's job, not the wire format's. Outward conversions flatten
//! the domain types back to primitives, with absent optional address lines
//! rendered as empty strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ordertaking_domain::{Address, CustomerInfo};
use ordertaking_workflow::{
    PlaceOrderError, PlaceOrderEvent, PricedOrder, PricedOrderLine, UnvalidatedAddress,
    UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfoDto {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl CustomerInfoDto {
    pub fn to_unvalidated_customer_info(&self) -> UnvalidatedCustomerInfo {
        UnvalidatedCustomerInfo {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email_address: self.email_address.clone(),
        }
    }

    pub fn from_customer_info(customer_info: &CustomerInfo) -> CustomerInfoDto {
        CustomerInfoDto {
            first_name: customer_info.name.first_name.value().to_owned(),
            last_name: customer_info.name.last_name.value().to_owned(),
            email_address: customer_info.email_address.value().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressDto {
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub address_line3: String,
    #[serde(default)]
    pub address_line4: String,
    pub city: String,
    pub zip_code: String,
}

impl AddressDto {
    pub fn to_unvalidated_address(&self) -> UnvalidatedAddress {
        UnvalidatedAddress {
            address_line1: self.address_line1.clone(),
            address_line2: self.address_line2.clone(),
            address_line3: self.address_line3.clone(),
            address_line4: self.address_line4.clone(),
            city: self.city.clone(),
            zip_code: self.zip_code.clone(),
        }
    }

    pub fn from_address(address: &Address) -> AddressDto {
        let optional = |line: &Option<ordertaking_domain::String50>| {
            line.as_ref().map(|value| value.value().to_owned()).unwrap_or_default()
        };
        AddressDto {
            address_line1: address.address_line1.value().to_owned(),
            address_line2: optional(&address.address_line2),
            address_line3: optional(&address.address_line3),
            address_line4: optional(&address.address_line4),
            city: address.city.value().to_owned(),
            zip_code: address.zip_code.value().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFormLineDto {
    pub order_line_id: String,
    pub product_code: String,
    pub quantity: Decimal,
}

impl OrderFormLineDto {
    pub fn to_unvalidated_order_line(&self) -> UnvalidatedOrderLine {
        UnvalidatedOrderLine {
            order_line_id: self.order_line_id.clone(),
            product_code: self.product_code.clone(),
            quantity: self.quantity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFormDto {
    pub order_id: String,
    pub customer_info: CustomerInfoDto,
    pub shipping_address: AddressDto,
    pub billing_address: AddressDto,
    #[serde(default)]
    pub lines: Vec<OrderFormLineDto>,
}

impl OrderFormDto {
    pub fn to_unvalidated_order(&self) -> UnvalidatedOrder {
        UnvalidatedOrder {
            order_id: self.order_id.clone(),
            customer_info: self.customer_info.to_unvalidated_customer_info(),
            shipping_address: self.shipping_address.to_unvalidated_address(),
            billing_address: self.billing_address.to_unvalidated_address(),
            lines: self
                .lines
                .iter()
                .map(OrderFormLineDto::to_unvalidated_order_line)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricedOrderLineDto {
    pub order_line_id: String,
    pub product_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_price: Decimal,
}

impl PricedOrderLineDto {
    pub fn from_domain(line: &PricedOrderLine) -> PricedOrderLineDto {
        PricedOrderLineDto {
            order_line_id: line.order_line_id.value().to_owned(),
            product_code: line.product_code.value().to_owned(),
            quantity: line.quantity.as_decimal(),
            line_price: line.line_price.value(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPlacedDto {
    pub order_id: String,
    pub customer_info: CustomerInfoDto,
    pub shipping_address: AddressDto,
    pub billing_address: AddressDto,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_to_bill: Decimal,
    pub lines: Vec<PricedOrderLineDto>,
}

impl OrderPlacedDto {
    pub fn from_domain(order: &PricedOrder) -> OrderPlacedDto {
        OrderPlacedDto {
            order_id: order.order_id.value().to_owned(),
            customer_info: CustomerInfoDto::from_customer_info(&order.customer_info),
            shipping_address: AddressDto::from_address(&order.shipping_address),
            billing_address: AddressDto::from_address(&order.billing_address),
            amount_to_bill: order.amount_to_bill.value(),
            lines: order.lines.iter().map(PricedOrderLineDto::from_domain).collect(),
        }
    }
}

/// Tagged event DTO; serialization preserves the workflow's event order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlaceOrderEventDto {
    OrderPlaced(OrderPlacedDto),
    BillableOrderPlaced {
        order_id: String,
        billing_address: AddressDto,
        #[serde(with = "rust_decimal::serde::float")]
        amount_to_bill: Decimal,
    },
    AcknowledgmentSent {
        order_id: String,
        email_address: String,
    },
}

impl PlaceOrderEventDto {
    pub fn from_domain(event: &PlaceOrderEvent) -> PlaceOrderEventDto {
        match event {
            PlaceOrderEvent::OrderPlaced(order) => {
                PlaceOrderEventDto::OrderPlaced(OrderPlacedDto::from_domain(order))
            }
            PlaceOrderEvent::BillableOrderPlaced {
                order_id,
                billing_address,
                amount_to_bill,
            } => PlaceOrderEventDto::BillableOrderPlaced {
                order_id: order_id.value().to_owned(),
                billing_address: AddressDto::from_address(billing_address),
                amount_to_bill: amount_to_bill.value(),
            },
            PlaceOrderEvent::AcknowledgmentSent(sent) => PlaceOrderEventDto::AcknowledgmentSent {
                order_id: sent.order_id.value().to_owned(),
                email_address: sent.email_address.value().to_owned(),
            },
        }
    }
}

/// Error DTO: the workflow's error tag plus the human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderErrorDto {
    pub code: String,
    pub message: String,
}

impl PlaceOrderErrorDto {
    pub fn from_domain(error: &PlaceOrderError) -> PlaceOrderErrorDto {
        let (code, message) = match error {
            PlaceOrderError::Validation(error) => ("validation", error.0.clone()),
            PlaceOrderError::Pricing(error) => ("pricing", error.0.clone()),
            PlaceOrderError::RemoteService(error) => ("remote_service", error.to_string()),
        };
        PlaceOrderErrorDto {
            code: code.to_owned(),
            message,
        }
    }
}
