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

//! One collect-compute-print pass.

use crate::InvoiceError;
use crate::invoice::{Invoice, OutputFormat};
use crate::prompt::Prompter;
use log::{debug, info};
use std::io::{BufRead, Write};

/// Runs a full invoice session on `prompter` and writes the invoice to
/// `invoice_out` in `format`.
///
/// Prompts and warnings stay on the prompter's writer, so `invoice_out`
/// receives nothing but the rendered invoice.
///
/// # Errors
///
/// Any [`InvoiceError`] from reading input or writing the invoice. Invalid
/// answers are handled inside the prompt loop and never surface here.
pub fn run_session<R: BufRead, W: Write, O: Write>(
    prompter: &mut Prompter<R, W>,
    format: OutputFormat,
    invoice_out: &mut O,
) -> Result<Invoice, InvoiceError> {
    prompter.print_banner()?;

    let customer = prompter.collect_customer()?;
    debug!("customer {} collected", customer.id);

    let rental = prompter.collect_rental()?;
    let invoice = Invoice::new(customer, rental);
    info!(
        "invoice for customer {}: service={:?} total={}",
        invoice.customer.id,
        invoice.rental.service,
        invoice.breakdown.total()
    );

    invoice.render(format, invoice_out)?;
    Ok(invoice)
}
