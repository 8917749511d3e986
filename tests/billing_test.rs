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

//! Billing calculator public API integration tests.

use alquipc::{
    Breakdown, DAILY_RATE, EquipmentCount, ExtraDays, InitialDays, ServiceType, billing,
    format_currency,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn make_quote(service: ServiceType, equipment: u32, initial: u32, extra: u32) -> Breakdown {
    billing::calculate(
        service,
        EquipmentCount::new(equipment).unwrap(),
        InitialDays::new(initial).unwrap(),
        ExtraDays(extra),
    )
}

#[test]
fn daily_rate_is_35000() {
    assert_eq!(DAILY_RATE, dec!(35000));
}

#[test]
fn minimum_rental_in_city() {
    let b = make_quote(ServiceType::InCity, 2, 1, 0);
    assert_eq!(b.total(), dec!(70000));
    assert_eq!(format_currency(b.total()), "$70.000");
}

#[test]
fn out_of_city_worked_example() {
    let b = make_quote(ServiceType::OutOfCity, 3, 4, 2);
    assert_eq!(b.initial_value(), dec!(420000));
    assert_eq!(b.extra_value(), dec!(205800));
    assert_eq!(b.surcharge(), dec!(31290));
    assert_eq!(b.discount(), Decimal::ZERO);
    assert_eq!(b.total(), dec!(657090));
}

#[test]
fn same_rental_priced_per_service() {
    let in_city = make_quote(ServiceType::InCity, 3, 4, 2);
    let out_of_city = make_quote(ServiceType::OutOfCity, 3, 4, 2);
    let on_premises = make_quote(ServiceType::OnPremises, 3, 4, 2);

    assert_eq!(in_city.total(), dec!(625800));
    assert_eq!(out_of_city.total(), dec!(657090));
    assert_eq!(on_premises.total(), dec!(594510));
    assert!(on_premises.total() < in_city.total());
    assert!(in_city.total() < out_of_city.total());
}

#[test]
fn no_extra_days_means_no_extra_value() {
    let b = make_quote(ServiceType::OnPremises, 5, 7, 0);
    assert_eq!(b.extra_value(), Decimal::ZERO);
    assert_eq!(b.initial_value(), dec!(1225000));
    assert_eq!(b.discount(), dec!(61250));
    assert_eq!(b.total(), dec!(1163750));
}

#[test]
fn service_adjustment_covers_extra_days_too() {
    let b = make_quote(ServiceType::OutOfCity, 2, 1, 1);
    // (70000 + 68600) * 0.05
    assert_eq!(b.surcharge(), dec!(6930));
}

#[test]
fn breakdown_is_copy_and_comparable() {
    let b = make_quote(ServiceType::InCity, 2, 2, 2);
    let copy = b;
    assert_eq!(b, copy);
}
