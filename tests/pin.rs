// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gpio_toggle::pin::{Controller, Error};
use gpiosim::{Level, Simpleton};
use std::thread;
use std::time::{Duration, Instant};

const OFFSET: u32 = 2;

#[test]
fn open_missing_chip() {
    let res = Controller::from_path("/dev/gpiochip_nonexistent");
    assert!(matches!(res, Err(Error::HardwareUnavailable { .. })));
}

#[test]
fn claim_drives_low() {
    let s = Simpleton::new(8);
    let c = Controller::from_path(s.dev_path()).unwrap();
    let _line = c.claim_output(OFFSET).unwrap();
    assert_eq!(s.get_level(OFFSET).unwrap(), Level::Low);
}

#[test]
fn claim_busy_line() {
    let s = Simpleton::new(8);
    let c = Controller::from_path(s.dev_path()).unwrap();
    let _line = c.claim_output(OFFSET).unwrap();
    let res = c.claim_output(OFFSET);
    assert!(matches!(res, Err(Error::PinClaimFailed { offset: OFFSET, .. })));
}

#[test]
fn claim_invalid_offset() {
    let s = Simpleton::new(8);
    let c = Controller::from_path(s.dev_path()).unwrap();
    let res = c.claim_output(42);
    assert!(matches!(res, Err(Error::PinClaimFailed { offset: 42, .. })));
}

#[test]
fn set_level() {
    let s = Simpleton::new(8);
    let c = Controller::from_path(s.dev_path()).unwrap();
    let line = c.claim_output(OFFSET).unwrap();

    line.set_level(true).unwrap();
    assert_eq!(s.get_level(OFFSET).unwrap(), Level::High);

    line.set_level(false).unwrap();
    assert_eq!(s.get_level(OFFSET).unwrap(), Level::Low);

    line.set_level(true).unwrap();
    assert_eq!(s.get_level(OFFSET).unwrap(), Level::High);
}

#[test]
fn pulse_low_then_high() {
    let s = Simpleton::new(8);
    let c = Controller::from_path(s.dev_path()).unwrap();
    let line = c.claim_output(OFFSET).unwrap();
    line.set_level(true).unwrap();

    let start = Instant::now();
    thread::scope(|ts| {
        let pulse = ts.spawn(|| line.pulse_low_then_high(Duration::from_millis(250)));
        // the line is held low for the whole period
        thread::sleep(Duration::from_millis(100));
        assert_eq!(s.get_level(OFFSET).unwrap(), Level::Low);
        pulse.join().unwrap().unwrap();
    });
    assert!(start.elapsed() >= Duration::from_millis(250));
    assert_eq!(s.get_level(OFFSET).unwrap(), Level::High);
}

#[test]
fn release_on_drop() {
    let s = Simpleton::new(8);
    let c = Controller::from_path(s.dev_path()).unwrap();
    let line = c.claim_output(OFFSET).unwrap();
    drop(line);
    // the claim is released, so the line can be claimed again
    let line = c.claim_output(OFFSET).unwrap();
    assert_eq!(line.offset(), OFFSET);
}
