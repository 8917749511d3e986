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

//! Error types for input validation and invoice generation.
//!
//! Two tiers: [`ValidationError`] is recoverable and only ever shown as a
//! warning before the field is asked again, [`InvoiceError`] is fatal for the
//! session and ends up in the failure log.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Per-field input rejections.
///
/// The display text is the warning shown to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or only whitespace
    #[error("El nombre no puede estar vacío.")]
    EmptyName,

    /// Customer id contains something other than digits
    #[error("El Id debe ser numérico.")]
    NonNumericId,

    /// Phone is not exactly ten digits
    #[error("El teléfono debe tener 10 dígitos numéricos.")]
    InvalidPhone,

    /// Email does not look like `user@domain.tld`
    #[error("El correo no es válido. Formato ejemplo: usuario@dominio.com")]
    InvalidEmail,

    /// Service option is a number outside 1..=3
    #[error("Opción inválida. Ingrese 1, 2 o 3.")]
    UnknownService,

    /// Service option is not a number
    #[error("Debe ingresar un número (1, 2 o 3).")]
    NonNumericService,

    /// Fewer than two machines requested
    #[error("Debe alquilar al menos 2 equipos.")]
    TooFewEquipment,

    /// Initial rental period is zero or negative
    #[error("Debe ser mayor a 0.")]
    NonPositiveDays,

    /// Extra days are negative
    #[error("No puede ser negativo.")]
    NegativeDays,

    /// A count field is not an integer
    #[error("Debe ingresar un número válido.")]
    NotANumber,

    /// An integer larger than the field can hold
    #[error("El número es demasiado grande (máximo {max}).")]
    TooLarge { max: u64 },
}

/// Faults that abort an invoice session.
#[derive(Error, Debug)]
pub enum InvoiceError {
    /// Reading the console or writing the invoice failed
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    /// Input stream reached EOF before the field was answered
    #[error("input closed while waiting for '{prompt}'")]
    InputClosed { prompt: String },

    /// The failure log directory could not be created
    #[error("cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON rendering of the invoice failed
    #[error("cannot serialize invoice: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The session panicked
    #[error("unexpected panic at {}: {message}", location.as_deref().unwrap_or("unknown location"))]
    Panic {
        message: String,
        location: Option<String>,
    },
}
