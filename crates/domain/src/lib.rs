//! `ordertaking-domain` — constrained value types of the order-taking domain.
//!
//! Every type here is built through a smart constructor: once a value
//! exists, its invariant holds, so the rest of the system never re-checks
//! lengths, patterns or bounds.

pub mod compound_types;
pub mod simple_types;

pub use compound_types::{Address, CustomerInfo, PersonalName};
pub use simple_types::{
    BillingAmount, EmailAddress, GizmoCode, KilogramQuantity, OrderId, OrderLineId, OrderQuantity,
    Price, ProductCode, String50, UnitQuantity, WidgetCode, ZipCode, sum_prices,
};
