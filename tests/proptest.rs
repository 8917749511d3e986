// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Property-based tests for pricing, formatting and validation.
//!
//! These tests verify invariants that should hold for any valid rental.

use alquipc::{
    DAILY_RATE, EmailAddress, EquipmentCount, ExtraDays, InitialDays, PhoneNumber, ServiceType,
    billing, format_currency,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Arbitrary Strategies
// =============================================================================

fn arb_service() -> impl Strategy<Value = ServiceType> {
    prop_oneof![
        Just(ServiceType::InCity),
        Just(ServiceType::OutOfCity),
        Just(ServiceType::OnPremises),
    ]
}

/// (equipment >= 2, initial days > 0, extra days >= 0)
fn arb_rental() -> impl Strategy<Value = (u32, u32, u32)> {
    (2u32..=500, 1u32..=365, 0u32..=365)
}

fn quote(service: ServiceType, (e, d1, d2): (u32, u32, u32)) -> alquipc::Breakdown {
    billing::calculate(
        service,
        EquipmentCount::new(e).unwrap(),
        InitialDays::new(d1).unwrap(),
        ExtraDays(d2),
    )
}

// =============================================================================
// Billing Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// initial_value = e * d1 * 35000 exactly.
    #[test]
    fn initial_value_is_exact(service in arb_service(), rental in arb_rental()) {
        let (e, d1, _) = rental;
        let b = quote(service, rental);
        prop_assert_eq!(b.initial_value(), Decimal::from(e) * Decimal::from(d1) * DAILY_RATE);
    }

    /// extra_value = e * d2 * 35000 * 0.98 exactly.
    #[test]
    fn extra_value_is_discounted(service in arb_service(), rental in arb_rental()) {
        let (e, _, d2) = rental;
        let b = quote(service, rental);
        prop_assert_eq!(
            b.extra_value(),
            Decimal::from(e) * Decimal::from(d2) * dec!(34300)
        );
    }

    /// In-city rentals carry neither surcharge nor discount.
    #[test]
    fn in_city_total_is_subtotal(rental in arb_rental()) {
        let b = quote(ServiceType::InCity, rental);
        prop_assert!(b.surcharge().is_zero());
        prop_assert!(b.discount().is_zero());
        prop_assert_eq!(b.total(), b.initial_value() + b.extra_value());
    }

    /// Out-of-city rentals add 5% of the subtotal.
    #[test]
    fn out_of_city_adds_surcharge(rental in arb_rental()) {
        let b = quote(ServiceType::OutOfCity, rental);
        let subtotal = b.initial_value() + b.extra_value();
        prop_assert_eq!(b.surcharge(), subtotal * dec!(0.05));
        prop_assert!(b.discount().is_zero());
        prop_assert_eq!(b.total(), subtotal + b.surcharge());
    }

    /// On-premises rentals subtract 5% of the subtotal.
    #[test]
    fn on_premises_subtracts_discount(rental in arb_rental()) {
        let b = quote(ServiceType::OnPremises, rental);
        let subtotal = b.initial_value() + b.extra_value();
        prop_assert_eq!(b.discount(), subtotal * dec!(0.05));
        prop_assert!(b.surcharge().is_zero());
        prop_assert_eq!(b.total(), subtotal - b.discount());
    }

    /// Every component is non-negative and at most one adjustment applies.
    #[test]
    fn components_non_negative(service in arb_service(), rental in arb_rental()) {
        let b = quote(service, rental);
        for amount in [b.initial_value(), b.extra_value(), b.surcharge(), b.discount(), b.total()] {
            prop_assert!(amount >= Decimal::ZERO);
        }
        prop_assert!(b.surcharge().is_zero() || b.discount().is_zero());
    }
}

// =============================================================================
// Formatting & Validation Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Stripping the symbol and separators gives back the whole amount.
    #[test]
    fn currency_round_trips_whole_amounts(n in 0u64..=1_000_000_000_000) {
        let formatted = format_currency(Decimal::from(n));
        prop_assert!(formatted.starts_with('$'));
        let digits: String = formatted[1..].chars().filter(|c| *c != '.').collect();
        prop_assert_eq!(digits.parse::<u64>().unwrap(), n);
    }

    /// Separators sit every three digits from the right.
    #[test]
    fn currency_groups_of_three(n in 1_000u64..=1_000_000_000_000) {
        let formatted = format_currency(Decimal::from(n));
        let groups: Vec<&str> = formatted[1..].split('.').collect();
        prop_assert!(groups[0].len() <= 3 && !groups[0].is_empty());
        prop_assert!(groups[1..].iter().all(|g| g.len() == 3));
    }

    /// Any ten ASCII digits are a valid phone.
    #[test]
    fn ten_digit_phones_accepted(phone in "[0-9]{10}") {
        prop_assert!(PhoneNumber::parse(&phone).is_ok());
    }

    /// Other digit counts are rejected.
    #[test]
    fn other_lengths_rejected(phone in "[0-9]{0,9}|[0-9]{11,15}") {
        prop_assert!(PhoneNumber::parse(&phone).is_err());
    }

    /// Simple word@word.tld addresses are accepted.
    #[test]
    fn simple_emails_accepted(
        user in "[a-z0-9._-]{1,12}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{user}@{domain}.{tld}");
        prop_assert!(EmailAddress::parse(&email).is_ok());
    }
}
