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

//! Core identifier and count types for customers and rentals.
//!
//! Counts are only constructed through `parse`, so a value of one of these
//! types always satisfies its lower bound.

use crate::ValidationError;
use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;

/// Numeric customer identifier.
///
/// Accepts only plain ASCII digits: no sign, no separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(pub u64);

impl CustomerId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NonNumericId);
        }
        // Only digits remain, so the sole failure left is overflow.
        input.parse().map(CustomerId).map_err(|_| ValidationError::TooLarge {
            max: u64::MAX,
        })
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a signed integer the way the console accepts counts.
///
/// Overflow above `i64::MAX` is reported as too large. Overflow below
/// `i64::MIN` saturates, so the caller's lower bound produces the warning.
fn parse_integer(input: &str) -> Result<i64, ValidationError> {
    match input.trim().parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(ValidationError::TooLarge {
                max: u64::from(u32::MAX),
            }),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ValidationError::NotANumber),
        },
    }
}

/// Narrows an already bounds-checked count to `u32`.
fn to_count(value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::TooLarge {
        max: u64::from(u32::MAX),
    })
}

/// Number of machines rented. Minimum of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EquipmentCount(u32);

impl EquipmentCount {
    pub const MIN: u32 = 2;

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = parse_integer(input)?;
        if value < i64::from(Self::MIN) {
            return Err(ValidationError::TooFewEquipment);
        }
        to_count(value).map(EquipmentCount)
    }

    pub fn new(count: u32) -> Option<Self> {
        (count >= Self::MIN).then_some(EquipmentCount(count))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EquipmentCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Days in the base rental period. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InitialDays(u32);

impl InitialDays {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = parse_integer(input)?;
        if value <= 0 {
            return Err(ValidationError::NonPositiveDays);
        }
        to_count(value).map(InitialDays)
    }

    pub fn new(days: u32) -> Option<Self> {
        (days > 0).then_some(InitialDays(days))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for InitialDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Days added on top of the base period. May be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ExtraDays(pub u32);

impl ExtraDays {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = parse_integer(input)?;
        if value < 0 {
            return Err(ValidationError::NegativeDays);
        }
        to_count(value).map(ExtraDays)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ExtraDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_accepts_digits_only() {
        assert_eq!(CustomerId::parse("1032"), Ok(CustomerId(1032)));
        assert_eq!(CustomerId::parse(" 0 "), Ok(CustomerId(0)));
        assert_eq!(CustomerId::parse(""), Err(ValidationError::NonNumericId));
        assert_eq!(CustomerId::parse("-5"), Err(ValidationError::NonNumericId));
        assert_eq!(CustomerId::parse("+5"), Err(ValidationError::NonNumericId));
        assert_eq!(CustomerId::parse("12a"), Err(ValidationError::NonNumericId));
    }

    #[test]
    fn customer_id_overflow_is_too_large() {
        assert_eq!(
            CustomerId::parse("123456789012345678901234"),
            Err(ValidationError::TooLarge { max: u64::MAX })
        );
        assert_eq!(
            CustomerId::parse("18446744073709551615"),
            Ok(CustomerId(u64::MAX))
        );
    }

    #[test]
    fn equipment_needs_at_least_two() {
        assert_eq!(EquipmentCount::parse("2").map(|e| e.get()), Ok(2));
        assert_eq!(EquipmentCount::parse("1"), Err(ValidationError::TooFewEquipment));
        assert_eq!(EquipmentCount::parse("-3"), Err(ValidationError::TooFewEquipment));
        assert_eq!(EquipmentCount::parse("dos"), Err(ValidationError::NotANumber));
        assert_eq!(EquipmentCount::parse("2.5"), Err(ValidationError::NotANumber));
        assert!(EquipmentCount::new(1).is_none());
    }

    #[test]
    fn counts_beyond_u32_are_too_large() {
        let too_large = ValidationError::TooLarge {
            max: u64::from(u32::MAX),
        };
        assert_eq!(EquipmentCount::parse("99999999999").unwrap_err(), too_large);
        assert_eq!(InitialDays::parse("4294967296").unwrap_err(), too_large);
        assert_eq!(
            ExtraDays::parse("99999999999999999999999").unwrap_err(),
            too_large
        );
        assert_eq!(EquipmentCount::parse("4294967295").map(|e| e.get()), Ok(u32::MAX));
    }

    #[test]
    fn huge_negative_counts_hit_lower_bound() {
        let huge = "-99999999999999999999999";
        assert_eq!(EquipmentCount::parse(huge), Err(ValidationError::TooFewEquipment));
        assert_eq!(InitialDays::parse(huge), Err(ValidationError::NonPositiveDays));
        assert_eq!(ExtraDays::parse(huge), Err(ValidationError::NegativeDays));
    }

    #[test]
    fn initial_days_must_be_positive() {
        assert_eq!(InitialDays::parse("1").map(|d| d.get()), Ok(1));
        assert_eq!(InitialDays::parse("0"), Err(ValidationError::NonPositiveDays));
        assert_eq!(InitialDays::parse("-1"), Err(ValidationError::NonPositiveDays));
        assert_eq!(InitialDays::parse(""), Err(ValidationError::NotANumber));
        assert!(InitialDays::new(0).is_none());
    }

    #[test]
    fn extra_days_may_be_zero() {
        assert_eq!(ExtraDays::parse("0"), Ok(ExtraDays(0)));
        assert_eq!(ExtraDays::parse(" 7"), Ok(ExtraDays(7)));
        assert_eq!(ExtraDays::parse("-1"), Err(ValidationError::NegativeDays));
        assert_eq!(ExtraDays::parse("x"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn display_prints_inner_value() {
        assert_eq!(CustomerId(7).to_string(), "7");
        assert_eq!(ExtraDays(3).to_string(), "3");
    }
}
