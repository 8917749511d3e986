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

use alquipc::failure_log::DEFAULT_OUTPUT_DIR;
use alquipc::{CaughtFault, FailureLogger, OutputFormat, Prompter, catch_panic, run_session};
use clap::Parser;
use log::{error, info};
use std::io::{self, Write};
use std::path::PathBuf;

/// ALQUIPC - PC rental invoice generator
///
/// Asks for the customer and rental details one field at a time, then prints
/// the invoice. Aborted sessions leave a timestamped report in the output
/// directory.
#[derive(Parser, Debug)]
#[command(name = "alquipc")]
#[command(about = "Interactive invoice generator for PC rentals", long_about = None)]
struct Args {
    /// Directory for failure logs (created on startup)
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Invoice rendering; with json, prompts go to stderr and stdout carries
    /// only the JSON document
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit right after the invoice instead of waiting for ENTER
    #[arg(long)]
    no_pause: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logger (respect RUST_LOG env var if set)
    env_logger::init();

    let logger = match FailureLogger::init(&args.output_dir) {
        Ok(logger) => Some(logger),
        Err(e) => {
            error!("{e}");
            None
        }
    };

    let mut prompter = Prompter::new(io::stdin().lock(), prompt_writer(args.format));
    let mut invoice_out = io::stdout();

    let outcome = catch_panic(|| run_session(&mut prompter, args.format, &mut invoice_out));

    if let Err(fault) = outcome {
        report_failure(&fault, logger.as_ref(), prompter.output());
    }

    if !args.no_pause {
        prompter.wait_for_exit();
    }
    info!("session finished");
}

/// Where prompts and warnings go: stdout for text, stderr when stdout must
/// stay machine-readable.
fn prompt_writer(format: OutputFormat) -> Box<dyn Write> {
    match format {
        OutputFormat::Text => Box::new(io::stdout()),
        OutputFormat::Json => Box::new(io::stderr()),
    }
}

/// Logs `fault` to the failure log and tells the operator where it went.
fn report_failure<W: Write>(fault: &CaughtFault, logger: Option<&FailureLogger>, out: &mut W) {
    let error = &fault.error;
    error!("session aborted: {error}");

    let Some(logger) = logger else {
        let _ = writeln!(out, "\nHa ocurrido un error inesperado: {error}");
        return;
    };

    match logger.record_fault(fault) {
        Ok(path) => {
            let _ = writeln!(
                out,
                "\nHa ocurrido un error inesperado. Se guardó un registro en: {}",
                path.display()
            );
        }
        Err(e) => {
            error!("cannot write failure log: {e}");
            let _ = writeln!(out, "\nHa ocurrido un error inesperado: {error}");
        }
    }
    let _ = out.flush();
}
