//! Shipping cost calculation.
//!
//! The tariff is `(base + weight * per_kg) * priority_multiplier`, with a
//! further express surcharge applied to the whole post-priority amount,
//! rounded to cents. Pricing never fails: a weight that is not a usable
//! number, or is negative, yields the flat base cost.

use super::Priority;

/// Flat cost of any shipment.
pub const BASE_COST: f64 = 5.0;

/// Cost per kilogram of declared weight.
pub const COST_PER_KG: f64 = 2.0;

/// Multiplier applied to the whole amount for express service.
pub const EXPRESS_MULTIPLIER: f64 = 1.8;

/// Computes the shipping cost for a shipment.
///
/// An absent weight counts as zero. A non-finite or negative weight
/// short-circuits to [`BASE_COST`] for the entire calculation.
pub fn calculate_shipping_cost(weight: Option<f64>, priority: Priority, is_express: bool) -> f64 {
    let weight = weight.unwrap_or(0.0);
    if !weight.is_finite() || weight < 0.0 {
        return BASE_COST;
    }

    let mut cost = (BASE_COST + weight * COST_PER_KG) * priority.cost_multiplier();
    if is_express {
        cost *= EXPRESS_MULTIPLIER;
    }

    round_to_cents(cost)
}

/// Lenient pricing preview over raw, unvalidated input.
///
/// A blank weight counts as zero. An unparseable or negative one falls back
/// to the base cost. An unrecognised priority prices as standard.
pub fn quote(weight: Option<&str>, priority: Option<&str>, is_express: bool) -> f64 {
    let weight = match weight.map(str::trim).filter(|w| !w.is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => return BASE_COST,
        },
    };

    let priority = priority
        .and_then(|p| p.trim().parse::<Priority>().ok())
        .unwrap_or_default();

    calculate_shipping_cost(weight, priority, is_express)
}

/// Rounds a currency amount to two decimal places, halves away from zero.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn standard_two_kilos() {
        assert_eq!(calculate_shipping_cost(Some(2.0), Priority::Standard, false), 9.0);
    }

    #[test]
    fn express_surcharge_applies_after_priority() {
        assert_eq!(calculate_shipping_cost(Some(2.0), Priority::Standard, true), 16.2);
        assert_eq!(calculate_shipping_cost(Some(2.0), Priority::Urgent, true), 32.4);
    }

    #[test]
    fn urgent_doubles_subtotal() {
        assert_eq!(calculate_shipping_cost(Some(2.0), Priority::Urgent, false), 18.0);
    }

    #[test]
    fn priority_multiplies_by_one_and_a_half() {
        assert_eq!(calculate_shipping_cost(Some(0.5), Priority::Priority, false), 9.0);
    }

    #[test]
    fn absent_weight_counts_as_zero() {
        assert_eq!(calculate_shipping_cost(None, Priority::Standard, false), 5.0);
        assert_eq!(calculate_shipping_cost(None, Priority::Urgent, true), 18.0);
    }

    #[test]
    fn non_finite_weight_falls_back_to_base_cost() {
        assert_eq!(calculate_shipping_cost(Some(f64::NAN), Priority::Urgent, true), BASE_COST);
        assert_eq!(
            calculate_shipping_cost(Some(f64::INFINITY), Priority::Standard, false),
            BASE_COST
        );
    }

    #[test]
    fn negative_weight_falls_back_to_base_cost() {
        assert_eq!(calculate_shipping_cost(Some(-10.0), Priority::Standard, false), BASE_COST);
        assert_eq!(calculate_shipping_cost(Some(-0.01), Priority::Urgent, true), BASE_COST);
    }

    #[test]
    fn result_is_rounded_to_cents() {
        // (5 + 1.234 * 2) * 1.5 = 11.202
        assert_eq!(calculate_shipping_cost(Some(1.234), Priority::Priority, false), 11.2);
        // (5 + 1.2 * 2) = 7.4
        assert_eq!(calculate_shipping_cost(Some(1.2), Priority::Standard, false), 7.4);
    }

    #[test]
    fn quote_parses_raw_input() {
        assert_eq!(quote(Some("2.0"), Some("standard"), true), 16.2);
        assert_eq!(quote(Some(" 2 "), Some("urgent"), false), 18.0);
    }

    #[test]
    fn quote_blank_weight_is_zero() {
        assert_eq!(quote(Some(""), Some("standard"), false), 5.0);
        assert_eq!(quote(None, None, false), 5.0);
    }

    #[test]
    fn quote_unparseable_weight_is_base_cost_regardless_of_options() {
        assert_eq!(quote(Some("heavy"), Some("urgent"), true), BASE_COST);
        assert_eq!(quote(Some("nan"), Some("priority"), false), BASE_COST);
    }

    #[test]
    fn quote_negative_weight_is_base_cost() {
        assert_eq!(quote(Some("-10"), Some("standard"), false), BASE_COST);
        assert_eq!(quote(Some(" -2.5 "), Some("urgent"), true), BASE_COST);
    }

    #[test]
    fn quote_unknown_priority_prices_as_standard() {
        assert_eq!(quote(Some("2"), Some("overnight"), false), 9.0);
    }

    proptest! {
        #[test]
        fn standard_cost_is_linear_in_weight(weight in 0.0f64..10_000.0) {
            let expected = round_to_cents(5.0 + weight * 2.0);
            prop_assert_eq!(calculate_shipping_cost(Some(weight), Priority::Standard, false), expected);
        }

        #[test]
        fn quote_is_never_negative(weight in -1_000.0f64..1_000.0, express in any::<bool>()) {
            let raw = weight.to_string();
            prop_assert!(quote(Some(&raw), Some("priority"), express) >= 0.0);
        }

        #[test]
        fn cost_never_below_base(weight in 0.0f64..1_000.0, express in any::<bool>()) {
            for priority in Priority::choices() {
                prop_assert!(calculate_shipping_cost(Some(weight), *priority, express) >= BASE_COST);
            }
        }
    }
}
