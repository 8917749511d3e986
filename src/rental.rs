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

//! Rental requests and service types.

use crate::ValidationError;
use crate::base::{EquipmentCount, ExtraDays, InitialDays};
use crate::billing::{self, Breakdown};
use serde::Serialize;
use std::fmt;

/// How the equipment reaches the customer.
///
/// The numeric code is the option the operator types at the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Delivered inside the city. No adjustment.
    InCity = 1,
    /// Delivered out of the city. 5% delivery surcharge.
    OutOfCity = 2,
    /// Used at the shop. 5% discount.
    OnPremises = 3,
}

impl ServiceType {
    /// Menu order.
    pub const ALL: [ServiceType; 3] = [Self::InCity, Self::OutOfCity, Self::OnPremises];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InCity => "Dentro de la Ciudad",
            Self::OutOfCity => "Fuera de la Ciudad",
            Self::OnPremises => "Dentro del Establecimiento",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::InCity),
            2 => Some(Self::OutOfCity),
            3 => Some(Self::OnPremises),
            _ => None,
        }
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let code = input
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::NonNumericService)?;
        Self::from_code(code).ok_or(ValidationError::UnknownService)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated rental request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalRequest {
    pub service: ServiceType,
    pub equipment: EquipmentCount,
    pub initial_days: InitialDays,
    pub extra_days: ExtraDays,
}

impl RentalRequest {
    /// Prices this request.
    pub fn quote(&self) -> Breakdown {
        billing::calculate(self.service, self.equipment, self.initial_days, self.extra_days)
    }
}
