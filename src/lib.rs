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

//! # ALQUIPC
//!
//! This library drives the counter-side invoice generator for a PC rental
//! shop: it collects customer and rental details from the console, prices
//! the rental, and prints the invoice.
//!
//! ## Core Components
//!
//! - [`Prompter`]: Per-field prompt loop that re-asks until input validates
//! - [`billing::calculate`]: Pure pricing of a rental into a [`Breakdown`]
//! - [`format_currency`]: `$1.234.567` style amounts
//! - [`Invoice`]: Text or JSON rendering of one invoice
//! - [`FailureLogger`]: Timestamped fault reports for aborted sessions
//!
//! ## Example
//!
//! ```
//! use alquipc::{run_session, OutputFormat, Prompter};
//! use rust_decimal_macros::dec;
//! use std::io::Cursor;
//!
//! let answers = "Ana\n1032\n3001234567\nana@example.com\n2\n3\n4\n2\n";
//! let mut prompter = Prompter::new(Cursor::new(answers), Vec::new());
//! let mut printed = Vec::new();
//!
//! let invoice = run_session(&mut prompter, OutputFormat::Text, &mut printed).unwrap();
//! assert_eq!(invoice.breakdown.total(), dec!(657090));
//! assert!(String::from_utf8(printed).unwrap().contains("TOTAL A PAGAR: $657.090"));
//! ```

mod base;
pub mod billing;
mod currency;
pub mod customer;
pub mod error;
pub mod failure_log;
pub mod invoice;
pub mod prompt;
pub mod rental;
mod session;

pub use base::{CustomerId, EquipmentCount, ExtraDays, InitialDays};
pub use billing::{Breakdown, DAILY_RATE};
pub use currency::format_currency;
pub use customer::{Customer, CustomerName, EmailAddress, PhoneNumber};
pub use error::{InvoiceError, ValidationError};
pub use failure_log::{CaughtFault, FailureLogger, catch_panic};
pub use invoice::{Invoice, OutputFormat};
pub use prompt::Prompter;
pub use rental::{RentalRequest, ServiceType};
pub use session::run_session;
