//! Simple constrained types of the order-taking domain: single-field
//! wrappers, codes and amounts. Compound records live in
//! [`compound_types`](crate::compound_types).

use std::fmt;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use ordertaking_core::{
    Pattern, Validated, create_decimal, create_int, create_like, create_string,
    create_string_option,
};

static EMAIL_PATTERN: LazyLock<Pattern> = LazyLock::new(|| Pattern::new(".+@.+"));
static ZIP_PATTERN: LazyLock<Pattern> = LazyLock::new(|| Pattern::new(r"\d{5}"));
static WIDGET_PATTERN: LazyLock<Pattern> = LazyLock::new(|| Pattern::new(r"W\d{4}"));
static GIZMO_PATTERN: LazyLock<Pattern> = LazyLock::new(|| Pattern::new(r"G\d{3}"));

/// Text constrained to 1–50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct String50(String);

impl String50 {
    pub fn new(field_name: &str, raw: &str) -> Validated<String50, String> {
        create_string(field_name, String50, 50, raw)
    }

    /// Like [`String50::new`], but empty input yields `None` instead of an
    /// error.
    pub fn new_option(field_name: &str, raw: &str) -> Validated<Option<String50>, String> {
        create_string_option(field_name, String50, 50, raw)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// An email address. The format check is deliberately loose: anything with
/// an `@` between two non-empty parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(field_name: &str, raw: &str) -> Validated<EmailAddress, String> {
        create_like(field_name, EmailAddress, &EMAIL_PATTERN, raw)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A five-digit zip code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn new(field_name: &str, raw: &str) -> Validated<ZipCode, String> {
        create_like(field_name, ZipCode, &ZIP_PATTERN, raw)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// An order identifier: non-empty, at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(field_name: &str, raw: &str) -> Validated<OrderId, String> {
        create_string(field_name, OrderId, 50, raw)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An order-line identifier: non-empty, at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderLineId(String);

impl OrderLineId {
    pub fn new(field_name: &str, raw: &str) -> Validated<OrderLineId, String> {
        create_string(field_name, OrderLineId, 50, raw)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Widget codes are a `W` followed by four digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidgetCode(String);

impl WidgetCode {
    pub fn new(field_name: &str, code: &str) -> Validated<WidgetCode, String> {
        create_like(field_name, WidgetCode, &WIDGET_PATTERN, code)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Gizmo codes are a `G` followed by three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GizmoCode(String);

impl GizmoCode {
    pub fn new(field_name: &str, code: &str) -> Validated<GizmoCode, String> {
        create_like(field_name, GizmoCode, &GIZMO_PATTERN, code)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A product code is either a widget code or a gizmo code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductCode {
    Widget(WidgetCode),
    Gizmo(GizmoCode),
}

impl ProductCode {
    /// Dispatch on the leading character, then validate against that
    /// variant's pattern. A `W`/`G` code that fails its own pattern reports
    /// the pattern mismatch, not "Format not recognized".
    pub fn new(field_name: &str, code: &str) -> Validated<ProductCode, String> {
        if code.is_empty() {
            Validated::invalid(format!("{field_name}: Must not be empty"))
        } else if code.starts_with('W') {
            WidgetCode::new(field_name, code).map(ProductCode::Widget)
        } else if code.starts_with('G') {
            GizmoCode::new(field_name, code).map(ProductCode::Gizmo)
        } else {
            Validated::invalid(format!("{field_name}: Format not recognized '{code}'"))
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ProductCode::Widget(code) => code.value(),
            ProductCode::Gizmo(code) => code.value(),
        }
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Whole units, 1–1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitQuantity(i32);

impl UnitQuantity {
    pub fn new(field_name: &str, quantity: i32) -> Validated<UnitQuantity, String> {
        create_int(field_name, UnitQuantity, 1, 1000, quantity)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

// 0.05 and 100.00 kg.
const KILOGRAM_MIN: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
const KILOGRAM_MAX: Decimal = Decimal::from_parts(10000, 0, 0, false, 2);

/// A weight, 0.05–100.00 kg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KilogramQuantity(Decimal);

impl KilogramQuantity {
    pub fn new(field_name: &str, quantity: Decimal) -> Validated<KilogramQuantity, String> {
        create_decimal(field_name, KilogramQuantity, KILOGRAM_MIN, KILOGRAM_MAX, quantity)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// An order quantity. The variant is forced by the product code: widgets
/// are counted in units, gizmos are weighed in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderQuantity {
    Unit(UnitQuantity),
    Kilogram(KilogramQuantity),
}

impl OrderQuantity {
    /// Validate `quantity` against the range implied by `product_code`.
    /// For widgets the input is truncated toward zero to whole units first.
    pub fn new(
        field_name: &str,
        product_code: &ProductCode,
        quantity: Decimal,
    ) -> Validated<OrderQuantity, String> {
        match product_code {
            ProductCode::Widget(_) => {
                UnitQuantity::new(field_name, to_units(quantity)).map(OrderQuantity::Unit)
            }
            ProductCode::Gizmo(_) => {
                KilogramQuantity::new(field_name, quantity).map(OrderQuantity::Kilogram)
            }
        }
    }

    /// The numeric value, widened to a decimal for arithmetic.
    pub fn as_decimal(&self) -> Decimal {
        match self {
            OrderQuantity::Unit(quantity) => Decimal::from(quantity.value()),
            OrderQuantity::Kilogram(quantity) => quantity.value(),
        }
    }
}

/// Truncate toward zero, saturating outside the `i32` range (values that
/// far out fail the unit-quantity bounds anyway).
fn to_units(quantity: Decimal) -> i32 {
    let truncated = quantity.trunc();
    truncated.to_i32().unwrap_or(if truncated.is_sign_negative() {
        i32::MIN
    } else {
        i32::MAX
    })
}

// 0.0 and 1000.0.
const PRICE_MIN: Decimal = Decimal::from_parts(0, 0, 0, false, 1);
const PRICE_MAX: Decimal = Decimal::from_parts(10000, 0, 0, false, 1);

/// A unit or line price, 0.0–1000.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    pub fn new(price: Decimal) -> Validated<Price, String> {
        create_decimal("Price", Price, PRICE_MIN, PRICE_MAX, price)
    }

    /// Construct from a value already known to be in bounds, e.g. a price
    /// catalog validated at its own edge.
    ///
    /// Panics when out of bounds; never call this with untrusted input.
    pub fn unchecked(price: Decimal) -> Price {
        match Price::new(price) {
            Validated::Valid(price) => price,
            Validated::Invalid(errors) => {
                panic!("Not expecting Price to be out of bounds: {}", errors.join(", "))
            }
        }
    }

    /// Multiply by a quantity, re-validating the bounds: a large quantity
    /// can push a line price out of range.
    pub fn multiply(&self, quantity: Decimal) -> Validated<Price, String> {
        Price::new(self.0 * quantity)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

// 0.0 and 10000.0.
const BILLING_MIN: Decimal = Decimal::from_parts(0, 0, 0, false, 1);
const BILLING_MAX: Decimal = Decimal::from_parts(100000, 0, 0, false, 1);

/// The total to bill for an order, 0.0–10000.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BillingAmount(Decimal);

impl BillingAmount {
    pub fn new(amount: Decimal) -> Validated<BillingAmount, String> {
        create_decimal("BillingAmount", BillingAmount, BILLING_MIN, BILLING_MAX, amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Sum line prices into a validated billing amount. Summing can exceed the
/// billing bound even though every line is individually in bounds.
pub fn sum_prices<'a>(
    prices: impl IntoIterator<Item = &'a Price>,
) -> Validated<BillingAmount, String> {
    let total: Decimal = prices.into_iter().map(|price| price.0).sum();
    BillingAmount::new(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid<T>(msg: &str) -> Validated<T, String> {
        Validated::invalid(msg.to_owned())
    }

    fn string50(raw: &str) -> String50 {
        String50(raw.to_owned())
    }

    #[test]
    fn string50_rejects_empty_and_overlong_input() {
        assert_eq!(String50::new("test", ""), invalid("test must not be empty"));
        assert_eq!(String50::new("test", "blah"), Validated::Valid(string50("blah")));
        assert_eq!(
            String50::new("test", &"a".repeat(60)),
            invalid("test must not be more than 50 chars")
        );
    }

    #[test]
    fn optional_string50_treats_empty_as_none() {
        assert_eq!(String50::new_option("test", ""), Validated::Valid(None));
        assert_eq!(
            String50::new_option("test", "blah"),
            Validated::Valid(Some(string50("blah")))
        );
        assert_eq!(
            String50::new_option("test", &"a".repeat(60)),
            invalid("test must not be more than 50 chars")
        );
    }

    #[test]
    fn email_address_needs_an_at_sign_between_parts() {
        assert_eq!(
            EmailAddress::new("test", "foo"),
            invalid("test: 'foo' must match the pattern '.+@.+'")
        );
        assert_eq!(
            EmailAddress::new("test", "foo@"),
            invalid("test: 'foo@' must match the pattern '.+@.+'")
        );
        assert_eq!(
            EmailAddress::new("test", "@bar"),
            invalid("test: '@bar' must match the pattern '.+@.+'")
        );
        assert_eq!(
            EmailAddress::new("test", "foo@bar"),
            Validated::Valid(EmailAddress("foo@bar".to_owned()))
        );
    }

    #[test]
    fn zip_code_is_exactly_five_digits() {
        assert_eq!(
            ZipCode::new("test", "foo"),
            invalid(r"test: 'foo' must match the pattern '\d{5}'")
        );
        assert_eq!(
            ZipCode::new("test", "1234"),
            invalid(r"test: '1234' must match the pattern '\d{5}'")
        );
        assert_eq!(
            ZipCode::new("test", "12345"),
            Validated::Valid(ZipCode("12345".to_owned()))
        );
    }

    #[test]
    fn product_code_dispatches_on_the_prefix() {
        assert_eq!(
            ProductCode::new("pc", "W1234"),
            Validated::Valid(ProductCode::Widget(WidgetCode("W1234".to_owned())))
        );
        assert_eq!(
            ProductCode::new("pc", "G123"),
            Validated::Valid(ProductCode::Gizmo(GizmoCode("G123".to_owned())))
        );
        assert_eq!(
            ProductCode::new("pc", "foo"),
            invalid("pc: Format not recognized 'foo'")
        );
        assert_eq!(ProductCode::new("pc", ""), invalid("pc: Must not be empty"));
    }

    #[test]
    fn prefixed_code_failing_its_pattern_reports_the_mismatch() {
        // "W" routes to the widget validator, so the error names the widget
        // pattern rather than "Format not recognized".
        assert_eq!(
            ProductCode::new("pc", "W"),
            invalid(r"pc: 'W' must match the pattern 'W\d{4}'")
        );
        assert_eq!(
            ProductCode::new("pc", "G12"),
            invalid(r"pc: 'G12' must match the pattern 'G\d{3}'")
        );
    }

    #[test]
    fn product_code_round_trips_its_raw_value() {
        for raw in ["W1234", "G123"] {
            match ProductCode::new("pc", raw) {
                Validated::Valid(code) => assert_eq!(code.value(), raw),
                Validated::Invalid(errors) => panic!("expected valid code: {errors:?}"),
            }
        }
    }

    #[test]
    fn order_quantity_variant_follows_the_product_code() {
        let widget = ProductCode::Widget(WidgetCode("W1234".to_owned()));
        let gizmo = ProductCode::Gizmo(GizmoCode("G123".to_owned()));

        assert_eq!(
            OrderQuantity::new("OrderQuantity", &widget, Decimal::from(25)),
            Validated::Valid(OrderQuantity::Unit(UnitQuantity(25)))
        );
        assert_eq!(
            OrderQuantity::new("OrderQuantity", &widget, Decimal::ZERO),
            invalid("OrderQuantity: Must not be less than 1")
        );
        assert_eq!(
            OrderQuantity::new("OrderQuantity", &gizmo, Decimal::new(250, 1)),
            Validated::Valid(OrderQuantity::Kilogram(KilogramQuantity(Decimal::new(250, 1))))
        );
        assert_eq!(
            OrderQuantity::new("OrderQuantity", &gizmo, Decimal::ZERO),
            invalid("OrderQuantity: Must not be less than 0.05")
        );
        assert_eq!(
            OrderQuantity::new("OrderQuantity", &gizmo, Decimal::from(101)),
            invalid("OrderQuantity: Must not be greater than 100.00")
        );
    }

    #[test]
    fn widget_quantity_is_truncated_to_whole_units() {
        let widget = ProductCode::Widget(WidgetCode("W1234".to_owned()));
        assert_eq!(
            OrderQuantity::new("OrderQuantity", &widget, Decimal::new(257, 1)),
            Validated::Valid(OrderQuantity::Unit(UnitQuantity(25)))
        );
    }

    #[test]
    fn price_bounds_are_validated() {
        assert_eq!(
            Price::new(Decimal::from(40)),
            Validated::Valid(Price(Decimal::from(40)))
        );
        assert_eq!(
            Price::new(Decimal::from(1001)),
            invalid("Price: Must not be greater than 1000.0")
        );
        assert_eq!(
            Price::new(Decimal::from(-1)),
            invalid("Price: Must not be less than 0.0")
        );
    }

    #[test]
    fn price_multiply_revalidates_the_bounds() {
        let price = Price::unchecked(Decimal::new(400, 1));
        assert_eq!(
            price.multiply(Decimal::from(25)),
            Validated::Valid(Price(Decimal::from(1000)))
        );
        assert_eq!(
            price.multiply(Decimal::from(26)),
            invalid("Price: Must not be greater than 1000.0")
        );
    }

    #[test]
    #[should_panic(expected = "Not expecting Price to be out of bounds")]
    fn unchecked_price_panics_out_of_bounds() {
        let _ = Price::unchecked(Decimal::from(5000));
    }

    #[test]
    fn sum_prices_validates_the_total() {
        let prices = vec![Price(Decimal::from(900)), Price(Decimal::from(800))];
        assert_eq!(
            sum_prices(&prices),
            Validated::Valid(BillingAmount(Decimal::from(1700)))
        );

        let too_much: Vec<Price> = (0..11).map(|_| Price(Decimal::from(1000))).collect();
        assert_eq!(
            sum_prices(&too_much),
            invalid("BillingAmount: Must not be greater than 10000.0")
        );

        assert_eq!(
            sum_prices([]),
            Validated::Valid(BillingAmount(Decimal::ZERO))
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: unit quantity validity matches the 1..=1000 range.
            #[test]
            fn unit_quantity_validity_matches_the_bounds(quantity in -100i32..2000) {
                let result = UnitQuantity::new("OrderQuantity", quantity);
                prop_assert_eq!(result.is_valid(), (1..=1000).contains(&quantity));
            }

            /// Property: any accepted widget code reproduces its input, and
            /// re-validating that value succeeds with an equal code.
            #[test]
            fn widget_codes_round_trip_and_revalidate(raw in "W[0-9]{4}") {
                let code = match ProductCode::new("pc", &raw) {
                    Validated::Valid(code) => code,
                    Validated::Invalid(errors) => return Err(TestCaseError::fail(format!("{errors:?}"))),
                };
                prop_assert_eq!(code.value(), raw.as_str());

                let again = ProductCode::new("pc", code.value());
                prop_assert_eq!(again, Validated::Valid(code));
            }

            /// Property: strings of 1..=50 word characters always validate
            /// and round-trip through the wrapper.
            #[test]
            fn string50_round_trips(raw in "[a-zA-Z0-9 ]{1,50}") {
                match String50::new("field", &raw) {
                    Validated::Valid(value) => prop_assert_eq!(value.value(), raw.as_str()),
                    Validated::Invalid(errors) => return Err(TestCaseError::fail(format!("{errors:?}"))),
                }
            }
        }
    }
}
