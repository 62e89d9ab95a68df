// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool for toggling a GPIO line.

use anyhow::Result;
use clap::Parser;
use gpio_toggle::pin::{Action, Controller, Offset};
use std::process::ExitCode;
use std::time::Duration;

// The chip and line are fixed - GPIO 2 on the first chip.
const CHIP: u32 = 0;
const PIN: Offset = 2;
const PULSE_PERIOD: Duration = Duration::from_secs(1);

fn main() -> ExitCode {
    match Opts::try_parse() {
        Ok(opts) => match run(opts.action()) {
            Ok(()) => return ExitCode::SUCCESS,
            Err(e) => emit_error(&opts, &e),
        },
        Err(e) => eprintln!("{e}"),
    }
    ExitCode::FAILURE
}

#[derive(Debug, Parser)]
#[command(
    name = "gpiotoggle",
    about = "A utility to toggle a GPIO line on Linux using the GPIO character device.",
    version
)]
struct Opts {
    /// Drive GPIO 2 high.
    #[arg(long, group = "action")]
    on: bool,

    /// Drive GPIO 2 low.
    #[arg(long, group = "action")]
    off: bool,

    /// Drive GPIO 2 low for a second, then back high.
    #[arg(long, group = "action")]
    cycle: bool,

    /// Provide more detailed error messages.
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Opts {
    // The requested action, if any. The flags are mutually exclusive.
    fn action(&self) -> Option<Action> {
        if self.on {
            Some(Action::On)
        } else if self.off {
            Some(Action::Off)
        } else if self.cycle {
            Some(Action::Cycle)
        } else {
            None
        }
    }
}

fn run(action: Option<Action>) -> Result<()> {
    let chip = Controller::open(CHIP)?;
    let line = chip.claim_output(PIN)?;
    match action {
        Some(Action::On) => {
            line.set_level(true)?;
            println!("GPIO {PIN} is ON");
        }
        Some(Action::Off) => {
            line.set_level(false)?;
            println!("GPIO {PIN} is OFF");
        }
        Some(Action::Cycle) => {
            println!("GPIO {PIN} is OFF for 1 second");
            line.pulse_low_then_high(PULSE_PERIOD)?;
            println!("GPIO {PIN} is ON again");
        }
        None => println!("Please specify --on, --off, or --cycle to control GPIO {PIN}."),
    }
    // line and chip drop here, releasing the request then the chip.
    Ok(())
}

fn emit_error(opts: &Opts, e: &anyhow::Error) {
    if opts.verbose {
        eprintln!("{e:#}");
    } else {
        eprintln!("{e}");
    }
}
