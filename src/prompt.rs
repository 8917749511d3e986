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

//! Console input collection.
//!
//! [`Prompter`] asks for one field at a time and keeps asking until the
//! field's validator accepts the answer. Rejections are printed as warnings
//! and never leave this module; only I/O faults and end of input do.

use crate::base::{CustomerId, EquipmentCount, ExtraDays, InitialDays};
use crate::customer::{Customer, CustomerName, EmailAddress, PhoneNumber};
use crate::rental::{RentalRequest, ServiceType};
use crate::{InvoiceError, ValidationError};
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Line-oriented prompt loop over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer the prompts and warnings go to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prints `prompt` and reads one line without its line terminator.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::InputClosed`] when the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, InvoiceError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InvoiceError::InputClosed {
                prompt: prompt.trim().trim_end_matches(':').trim_end().to_string(),
            });
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks until `validate` accepts the answer.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, InvoiceError> {
        loop {
            let answer = self.read_line(prompt)?;
            match validate(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    // Answers carry contact details; log the field only.
                    debug!("rejected answer for {:?}: {:?}", prompt.trim(), e);
                    writeln!(self.output, "WARNING: {e}")?;
                }
            }
        }
    }

    pub fn print_banner(&mut self) -> Result<(), InvoiceError> {
        writeln!(self.output, "\nBienvenido estimado cliente a 'ALQUIPC'")?;
        writeln!(self.output, "****************************************\n")?;
        Ok(())
    }

    pub fn print_service_menu(&mut self) -> Result<(), InvoiceError> {
        writeln!(self.output, "\nTipos de servicios ofrecidos")?;
        for service in ServiceType::ALL {
            writeln!(self.output, "[{}] {}", service.code(), service.label())?;
        }
        Ok(())
    }

    /// Collects name, id, phone and email, in that order.
    pub fn collect_customer(&mut self) -> Result<Customer, InvoiceError> {
        let name = self.ask("Nombre Cliente: ", CustomerName::parse)?;
        let id = self.ask("Id Cliente: ", CustomerId::parse)?;
        let phone = self.ask("Teléfono Cliente : ", PhoneNumber::parse)?;
        let email = self.ask("E-mail Cliente: ", EmailAddress::parse)?;

        Ok(Customer {
            name,
            id,
            phone,
            email,
        })
    }

    /// Shows the service menu, then collects service, equipment and days.
    pub fn collect_rental(&mut self) -> Result<RentalRequest, InvoiceError> {
        self.print_service_menu()?;
        let service = self.ask("Tipo de servicio tomado por el cliente: ", ServiceType::parse)?;
        let equipment = self.ask("Número de equipos que desea alquilar  ", EquipmentCount::parse)?;
        let initial_days = self.ask(
            "Número de días que desea tomar el alquiler: ",
            InitialDays::parse,
        )?;
        let extra_days = self.ask(
            "Número de días adicionales que toma el alquiler: ",
            ExtraDays::parse,
        )?;

        Ok(RentalRequest {
            service,
            equipment,
            initial_days,
            extra_days,
        })
    }

    /// Holds the terminal open until the operator presses ENTER.
    ///
    /// Read failures are ignored; the session is already over.
    pub fn wait_for_exit(&mut self) {
        if let Err(e) = self.read_line("Presiona ENTER para salir...") {
            warn!("exit prompt: {e}");
        }
    }
}
