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

//! Rental charge calculation.
//!
//! The charge for one rental is computed in a single pass:
//!
//! | Component | Formula |
//! |-----------|---------|
//! | Initial value | equipment × initial days × [`DAILY_RATE`] |
//! | Extra value | equipment × extra days × [`DAILY_RATE`] × 0.98 |
//! | Surcharge | (initial + extra) × 0.05, out-of-city only |
//! | Discount | (initial + extra) × 0.05, on-premises only |
//! | Total | initial + extra + surcharge − discount |
//!
//! # Example
//!
//! ```
//! use alquipc::{billing, EquipmentCount, ExtraDays, InitialDays, ServiceType};
//! use rust_decimal_macros::dec;
//!
//! let breakdown = billing::calculate(
//!     ServiceType::OutOfCity,
//!     EquipmentCount::new(3).unwrap(),
//!     InitialDays::new(4).unwrap(),
//!     ExtraDays(2),
//! );
//! assert_eq!(breakdown.total(), dec!(657090));
//! ```

use crate::base::{EquipmentCount, ExtraDays, InitialDays};
use crate::rental::ServiceType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Price per machine per day.
pub const DAILY_RATE: Decimal = dec!(35000);

/// Share of the extra-days value that is charged (2% off).
pub const EXTRA_DAYS_FACTOR: Decimal = dec!(0.98);

/// Out-of-city surcharge and on-premises discount rate.
pub const SERVICE_ADJUSTMENT_RATE: Decimal = dec!(0.05);

/// Computed charges for one rental.
///
/// # Invariants
///
/// - Every component is non-negative.
/// - At most one of `surcharge` and `discount` is non-zero.
/// - `total == initial_value + extra_value + surcharge - discount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    initial_value: Decimal,
    extra_value: Decimal,
    surcharge: Decimal,
    discount: Decimal,
    total: Decimal,
}

impl Breakdown {
    pub fn initial_value(&self) -> Decimal {
        self.initial_value
    }

    /// Extra-days value after the 2% reduction.
    pub fn extra_value(&self) -> Decimal {
        self.extra_value
    }

    pub fn surcharge(&self) -> Decimal {
        self.surcharge
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Initial plus extra value, before the service adjustment.
    pub fn subtotal(&self) -> Decimal {
        self.initial_value + self.extra_value
    }

    fn assert_invariants(&self) {
        debug_assert!(
            self.surcharge.is_zero() || self.discount.is_zero(),
            "Invariant violated: both surcharge {} and discount {} applied",
            self.surcharge,
            self.discount
        );
        debug_assert!(
            self.total >= Decimal::ZERO,
            "Invariant violated: total went negative: {}",
            self.total
        );
    }
}

/// Prices a rental.
///
/// Pure and infallible: the count types guarantee their bounds, and the
/// arithmetic is done in [`Decimal`] so `u32` inputs cannot overflow.
pub fn calculate(
    service: ServiceType,
    equipment: EquipmentCount,
    initial_days: InitialDays,
    extra_days: ExtraDays,
) -> Breakdown {
    let equipment = Decimal::from(equipment.get());
    let initial_value = equipment * Decimal::from(initial_days.get()) * DAILY_RATE;
    let extra_value = equipment * Decimal::from(extra_days.get()) * DAILY_RATE * EXTRA_DAYS_FACTOR;

    let subtotal = initial_value + extra_value;
    let (surcharge, discount) = match service {
        ServiceType::InCity => (Decimal::ZERO, Decimal::ZERO),
        ServiceType::OutOfCity => (subtotal * SERVICE_ADJUSTMENT_RATE, Decimal::ZERO),
        ServiceType::OnPremises => (Decimal::ZERO, subtotal * SERVICE_ADJUSTMENT_RATE),
    };

    // Percentages widen the scale; normalize so `31290.0000` reads `31290`.
    let breakdown = Breakdown {
        initial_value: initial_value.normalize(),
        extra_value: extra_value.normalize(),
        surcharge: surcharge.normalize(),
        discount: discount.normalize(),
        total: (subtotal + surcharge - discount).normalize(),
    };
    breakdown.assert_invariants();
    breakdown
}
