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

//! Customer contact details.
//!
//! # Example
//!
//! ```
//! use alquipc::{Customer, CustomerId, CustomerName, EmailAddress, PhoneNumber};
//!
//! let customer = Customer {
//!     name: CustomerName::parse("Ana Pérez").unwrap(),
//!     id: CustomerId::parse("1032").unwrap(),
//!     phone: PhoneNumber::parse("3001234567").unwrap(),
//!     email: EmailAddress::parse("ana@example.com").unwrap(),
//! };
//! assert_eq!(customer.name.as_ref(), "Ana Pérez");
//! ```

use crate::ValidationError;
use crate::base::CustomerId;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Customer name, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name.to_string()))
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ten-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub const DIGITS: usize = 10;

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let phone = input.trim();
        if phone.len() != Self::DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(Self(phone.to_string()))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compiled once; matches `user@domain.tld` loosely.
fn email_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("Invalid regex"))
}

/// Email address in `user@domain.tld` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let email = input.trim();
        if !email_regex().is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(email.to_string()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub name: CustomerName,
    pub id: CustomerId,
    pub phone: PhoneNumber,
    pub email: EmailAddress,
}
