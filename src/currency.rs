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

//! Currency rendering for invoice amounts.

use rust_decimal::{Decimal, RoundingStrategy};

const SYMBOL: char = '$';
const GROUP_SEPARATOR: char = '.';

/// Formats an amount as whole currency units with `.` thousands separators.
///
/// Halves round to even.
///
/// ```
/// use alquipc::format_currency;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_currency(dec!(1234567)), "$1.234.567");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .normalize();
    let grouped = group_thousands(&rounded.abs().to_string());

    if rounded.is_sign_negative() {
        format!("-{SYMBOL}{grouped}")
    } else {
        format!("{SYMBOL}{grouped}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}
