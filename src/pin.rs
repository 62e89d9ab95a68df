// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpiocdev::chip::Chip;
use gpiocdev::line::Value;
use gpiocdev::request::Request;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

pub use gpiocdev::line::Offset;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while claiming or driving the line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The GPIO chip character device could not be opened.
    #[error("cannot open GPIO chip '{}'", .path.display())]
    HardwareUnavailable {
        path: PathBuf,
        #[source]
        source: gpiocdev::Error,
    },

    /// The line could not be reserved as an output.
    #[error("cannot claim GPIO {offset} as an output")]
    PinClaimFailed {
        offset: Offset,
        #[source]
        source: gpiocdev::Error,
    },

    /// A level write on the reserved line failed.
    #[error("cannot write level to GPIO {offset}")]
    WriteFailed {
        offset: Offset,
        #[source]
        source: gpiocdev::Error,
    },
}

/// The level change requested on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    /// Drive the line high.
    On,
    /// Drive the line low.
    Off,
    /// Drive the line low for a fixed period, then high again.
    Cycle,
}

/// An open GPIO chip on which the output line is claimed.
///
/// The chip character device remains open until the controller is dropped.
#[derive(Debug)]
pub struct Controller {
    chip: Chip,
}

impl Controller {
    /// Open the chip with the given number, e.g. 0 for `/dev/gpiochip0`.
    pub fn open(num: u32) -> Result<Controller> {
        Controller::from_path(format!("/dev/gpiochip{num}"))
    }

    /// Open the chip at an explicit character device path.
    pub fn from_path<P: AsRef<Path>>(p: P) -> Result<Controller> {
        let chip = Chip::from_path(p.as_ref()).map_err(|source| Error::HardwareUnavailable {
            path: p.as_ref().to_path_buf(),
            source,
        })?;
        Ok(Controller { chip })
    }

    /// Reserve `offset` on this chip as an output.
    ///
    /// The line is driven low until set otherwise, and remains reserved
    /// until the returned [`Output`] is dropped.
    pub fn claim_output(&self, offset: Offset) -> Result<Output> {
        let req = Request::builder()
            .on_chip(self.chip.path())
            .with_consumer("gpiotoggle")
            .with_line(offset)
            .as_output(Value::Inactive)
            .request()
            .map_err(|source| Error::PinClaimFailed { offset, source })?;
        Ok(Output { req, offset })
    }
}

/// An exclusively held output line.
///
/// The reservation is released when the output is dropped.
#[derive(Debug)]
pub struct Output {
    req: Request,
    offset: Offset,
}

impl Output {
    /// Write `level` to the line, true for high.
    pub fn set_level(&self, level: bool) -> Result<()> {
        self.req
            .set_value(self.offset, Value::from(level))
            .map_err(|source| Error::WriteFailed {
                offset: self.offset,
                source,
            })
    }

    /// Drive the line low, hold it there for `period`, then drive it high.
    ///
    /// Blocks the calling thread for the full period, so the line is
    /// observably low for the whole window.
    pub fn pulse_low_then_high(&self, period: Duration) -> Result<()> {
        self.set_level(false)?;
        thread::sleep(period);
        self.set_level(true)
    }

    /// The offset of the line on its chip.
    pub fn offset(&self) -> Offset {
        self.offset
    }
}
