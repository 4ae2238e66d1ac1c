//! HID mouse role
//!
//! Tracks a persistent button bitmask and emits relative motion reports.
//! Motion deltas are one-shot parameters of each report, only the buttons
//! survive between calls.

use core::cell::RefCell;

use embedded_hal::blocking::delay::DelayMs;
use log::error;
use packed_struct::prelude::*;

use crate::descriptor::ReportId;
use crate::transport::{self, HidTransport};

const POLL_INTERVAL_MS: u8 = 2;

/// Mouse input report: button mask, relative x/y, vertical wheel and
/// horizontal pan.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, PackedStruct)]
#[packed_struct(endian = "lsb", size_bytes = "5")]
pub struct MouseReport {
    #[packed_field]
    pub buttons: u8,
    #[packed_field]
    pub x: i8,
    #[packed_field]
    pub y: i8,
    #[packed_field]
    pub wheel: i8,
    #[packed_field]
    pub pan: i8,
}

pub struct Mouse<'a, T: HidTransport + DelayMs<u8>> {
    hid: &'a RefCell<T>,
    buttons: u8,
}

impl<'a, T: HidTransport + DelayMs<u8>> Mouse<'a, T> {
    pub fn new(hid: &'a RefCell<T>) -> Self {
        Self { hid, buttons: 0 }
    }

    /// Registers the shared descriptor table and blocks until the host has
    /// enumerated the device. Safe to call once per role.
    pub fn begin(&mut self) {
        self.buttons = 0;
        transport::start_role(self.hid, POLL_INTERVAL_MS);
    }

    /// The transport is shared and outlives any one role, nothing to release.
    pub fn end(&mut self) {}

    /// Sends a one-shot motion report carrying the current button mask.
    /// Deltas are not accumulated.
    pub fn move_pointer(&mut self, x: i8, y: i8, wheel: i8, pan: i8) {
        self.send_report(&MouseReport {
            buttons: self.buttons,
            x,
            y,
            wheel,
            pan,
        });
    }

    /// Holds the given buttons down. Reports only if the mask changed.
    pub fn press(&mut self, buttons: u8) {
        self.set_buttons(self.buttons | buttons);
    }

    /// Releases the given buttons. Reports only if the mask changed.
    pub fn release(&mut self, buttons: u8) {
        self.set_buttons(self.buttons & !buttons);
    }

    /// Press and immediately release: the host sees exactly two zero motion
    /// reports, `buttons` down then everything up. Any previously held
    /// buttons are released by the second report.
    pub fn click(&mut self, buttons: u8) {
        self.buttons = buttons;
        self.move_pointer(0, 0, 0, 0);
        self.buttons = 0;
        self.move_pointer(0, 0, 0, 0);
    }

    /// Pure query against the local mask, no I/O.
    #[must_use]
    pub fn is_pressed(&self, buttons: u8) -> bool {
        self.buttons & buttons != 0
    }

    fn set_buttons(&mut self, buttons: u8) {
        if buttons != self.buttons {
            self.buttons = buttons;
            self.move_pointer(0, 0, 0, 0);
        }
    }

    fn send_report(&mut self, report: &MouseReport) {
        let data = match report.pack() {
            Ok(data) => data,
            Err(e) => {
                error!("Error packing MouseReport: {:?}", e);
                return;
            }
        };
        transport::write_report(self.hid, ReportId::Mouse, &data);
    }
}
