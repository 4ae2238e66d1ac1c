//! HID consumer control role
//!
//! Stateless media key pulses. A code is reported, then code 0 releases it;
//! there is no sustained "held" consumer key.

use core::cell::RefCell;

use embedded_hal::blocking::delay::DelayMs;
use log::error;
use packed_struct::prelude::*;

use crate::descriptor::ReportId;
use crate::transport::{self, HidTransport};

const POLL_INTERVAL_MS: u8 = 3;

/// Consumer control input report: a single 16 bit usage code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, PackedStruct)]
#[packed_struct(endian = "lsb", size_bytes = "2")]
pub struct ConsumerReport {
    #[packed_field]
    pub code: u16,
}

pub struct ConsumerControl<'a, T: HidTransport + DelayMs<u8>> {
    hid: &'a RefCell<T>,
}

impl<'a, T: HidTransport + DelayMs<u8>> ConsumerControl<'a, T> {
    pub fn new(hid: &'a RefCell<T>) -> Self {
        Self { hid }
    }

    /// Registers the shared descriptor table and blocks until the host has
    /// enumerated the device.
    pub fn begin(&mut self) {
        transport::start_role(self.hid, POLL_INTERVAL_MS);
    }

    /// The transport is shared and outlives any one role, nothing to release.
    pub fn end(&mut self) {}

    /// Reports the code as pressed. Pair with [`release`](Self::release).
    pub fn press(&mut self, code: u16) {
        self.send_report(code);
    }

    /// Reports all consumer keys released.
    pub fn release(&mut self) {
        self.send_report(0);
    }

    /// Full down/up pulse: the code, then 0.
    pub fn send(&mut self, code: u16) {
        self.press(code);
        self.release();
    }

    fn send_report(&mut self, code: u16) {
        let data = match (ConsumerReport { code }).pack() {
            Ok(data) => data,
            Err(e) => {
                error!("Error packing ConsumerReport: {:?}", e);
                return;
            }
        };
        transport::write_report_throttled(self.hid, ReportId::Consumer, &data);
    }
}
