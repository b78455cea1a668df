//! Compound value objects assembled from the simple constrained types.
//!
//! These records carry no validation of their own: each field is already a
//! validated value, so a constructed record is valid by construction.

use crate::simple_types::{EmailAddress, String50, ZipCode};

/// A customer's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalName {
    pub first_name: String50,
    pub last_name: String50,
}

/// Who placed the order and how to reach them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerInfo {
    pub name: PersonalName,
    pub email_address: EmailAddress,
}

/// A postal address. Lines 2–4 are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub address_line1: String50,
    pub address_line2: Option<String50>,
    pub address_line3: Option<String50>,
    pub address_line4: Option<String50>,
    pub city: String50,
    pub zip_code: ZipCode,
}
