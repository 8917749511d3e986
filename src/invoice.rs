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

//! Invoice rendering.
//!
//! An [`Invoice`] is rendered either as the fixed-layout text block shown at
//! the counter or as JSON for scripts.

use crate::InvoiceError;
use crate::billing::Breakdown;
use crate::currency::format_currency;
use crate::customer::Customer;
use crate::rental::RentalRequest;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

const RULE: &str = "---------------------------------------------";

/// Invoice output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-layout text report
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Everything printed on one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub customer: Customer,
    pub rental: RentalRequest,
    pub breakdown: Breakdown,
}

impl Invoice {
    /// Prices `rental` and bundles it with the customer.
    pub fn new(customer: Customer, rental: RentalRequest) -> Self {
        let breakdown = rental.quote();
        Self {
            customer,
            rental,
            breakdown,
        }
    }

    pub fn render<W: Write>(&self, format: OutputFormat, out: &mut W) -> Result<(), InvoiceError> {
        match format {
            OutputFormat::Text => self.write_text(out)?,
            OutputFormat::Json => self.write_json(out)?,
        }
        out.flush()?;
        Ok(())
    }

    /// Writes the text report.
    ///
    /// The surcharge and discount lines appear only when non-zero.
    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let Invoice {
            customer,
            rental,
            breakdown,
        } = self;

        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "\t\t'ALQUIPC'")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Cliente: {}", customer.name)?;
        writeln!(out, "Id_Cliente: {}", customer.id)?;
        writeln!(out, "Teléfono: {}", customer.phone)?;
        writeln!(out, "E-mail: {}", customer.email)?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Tipo de servicio: {}", rental.service)?;
        writeln!(out, "Número de Equipos: {}", rental.equipment)?;
        writeln!(out, "No. de Días Iniciales: {}", rental.initial_days)?;
        writeln!(out, "Valor Alquiler: {}", format_currency(breakdown.initial_value()))?;
        writeln!(out, "No. de Días adicionales: {}", rental.extra_days)?;
        writeln!(
            out,
            "Valor Días adicionales (descontados 2%): {}",
            format_currency(breakdown.extra_value())
        )?;
        if !breakdown.surcharge().is_zero() {
            writeln!(
                out,
                "Valor Domicilio (+5%): {}",
                format_currency(breakdown.surcharge())
            )?;
        }
        if !breakdown.discount().is_zero() {
            writeln!(
                out,
                "Descuento Establecimiento (-5%): {}",
                format_currency(breakdown.discount())
            )?;
        }
        writeln!(out, "{RULE}")?;
        writeln!(out, "TOTAL A PAGAR: {}", format_currency(breakdown.total()))?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "Factura generada por ALQUIPC")?;
        writeln!(out, "Gracias por utilizar nuestros servicios.")?;
        writeln!(out)
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), InvoiceError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
