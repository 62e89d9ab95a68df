// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control of a single GPIO output line on Linux platforms
//! using the GPIO character device.
//!
//! The line is claimed and driven using the [`pin`] module.

/// Types for claiming and driving the output line.
pub mod pin;
