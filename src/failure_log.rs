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

//! Failure log files.
//!
//! When a session aborts, the fault is written to
//! `<output_dir>/error_<YYYYMMDD_HHMMSS>.log` so the operator can hand it in.
//! [`catch_panic`] turns a panic into an [`InvoiceError::Panic`] that keeps
//! the panic location and the backtrace taken at the panic site.

use crate::InvoiceError;
use chrono::{DateTime, Local};
use log::info;
use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Default directory for failure logs, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "salidas";

/// Writes fault reports into a fixed directory.
#[derive(Debug, Clone)]
pub struct FailureLogger {
    dir: PathBuf,
}

impl FailureLogger {
    /// Creates the output directory if needed and returns a logger for it.
    ///
    /// # Errors
    ///
    /// [`InvoiceError::OutputDir`] if the directory cannot be created.
    pub fn init(dir: impl Into<PathBuf>) -> Result<Self, InvoiceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| InvoiceError::OutputDir {
            path: dir.clone(),
            source,
        })?;
        info!("failure logs go to {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Log file path for a fault at `at`.
    pub fn log_path(&self, at: &DateTime<Local>) -> PathBuf {
        self.dir
            .join(format!("error_{}.log", at.format("%Y%m%d_%H%M%S")))
    }

    /// Writes a report for `fault` stamped with the current local time.
    ///
    /// Returns the path of the written file.
    pub fn record(&self, fault: &(dyn Error + 'static)) -> io::Result<PathBuf> {
        self.record_at(fault, &Local::now(), &Backtrace::capture())
    }

    /// Writes a report for a caught fault, using the panic-site backtrace
    /// when there is one.
    pub fn record_fault(&self, fault: &CaughtFault) -> io::Result<PathBuf> {
        match &fault.backtrace {
            Some(backtrace) => self.record_at(&fault.error, &Local::now(), backtrace),
            None => self.record(&fault.error),
        }
    }

    /// Writes a report with an explicit timestamp and backtrace.
    ///
    /// A report written in the same second as an earlier one replaces it.
    pub fn record_at(
        &self,
        fault: &(dyn Error + 'static),
        at: &DateTime<Local>,
        backtrace: &Backtrace,
    ) -> io::Result<PathBuf> {
        let path = self.log_path(at);
        fs::write(&path, render_report(fault, at, backtrace))?;
        info!("wrote failure log {}", path.display());
        Ok(path)
    }
}

/// A session fault, with the backtrace of the panic site when it panicked.
#[derive(Debug)]
pub struct CaughtFault {
    pub error: InvoiceError,
    pub backtrace: Option<Backtrace>,
}

impl From<InvoiceError> for CaughtFault {
    fn from(error: InvoiceError) -> Self {
        Self {
            error,
            backtrace: None,
        }
    }
}

struct PanicSite {
    location: Option<String>,
    backtrace: Backtrace,
}

thread_local! {
    static LAST_PANIC: RefCell<Option<PanicSite>> = const { RefCell::new(None) };
}

/// Installs a panic hook that records where the panic happened.
///
/// The previous hook still runs afterwards. Installing twice is a no-op.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let site = PanicSite {
                location: info.location().map(ToString::to_string),
                backtrace: Backtrace::force_capture(),
            };
            let _ = LAST_PANIC.try_with(|slot| *slot.borrow_mut() = Some(site));
            previous(info);
        }));
    });
}

/// Runs `session`, converting a panic into [`InvoiceError::Panic`].
pub fn catch_panic<T>(
    session: impl FnOnce() -> Result<T, InvoiceError>,
) -> Result<T, CaughtFault> {
    install_panic_hook();
    LAST_PANIC.with(|slot| *slot.borrow_mut() = None);

    match panic::catch_unwind(AssertUnwindSafe(session)) {
        Ok(result) => result.map_err(CaughtFault::from),
        Err(payload) => {
            let site = LAST_PANIC.with(|slot| slot.borrow_mut().take());
            let (location, backtrace) = match site {
                Some(site) => (site.location, Some(site.backtrace)),
                None => (None, None),
            };
            Err(CaughtFault {
                error: InvoiceError::Panic {
                    message: panic_message(payload.as_ref()),
                    location,
                },
                backtrace,
            })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Plain-text fault report: timestamp, description, cause chain, backtrace.
pub fn render_report(
    fault: &(dyn Error + 'static),
    at: &DateTime<Local>,
    backtrace: &Backtrace,
) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "ALQUIPC FAILURE REPORT");
    let _ = writeln!(report, "time: {}", at.format("%Y-%m-%d %H:%M:%S %:z"));
    let _ = writeln!(report, "error: {fault}");

    let mut source = fault.source();
    while let Some(cause) = source {
        let _ = writeln!(report, "caused by: {cause}");
        source = cause.source();
    }

    let _ = writeln!(report);
    match backtrace.status() {
        BacktraceStatus::Captured => {
            let _ = writeln!(report, "backtrace:\n{backtrace}");
        }
        _ => {
            let _ = writeln!(
                report,
                "backtrace: not captured (set RUST_BACKTRACE=1 to enable)"
            );
        }
    }
    report
}
