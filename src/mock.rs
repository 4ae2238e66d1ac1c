//! In-memory transport double for the unit tests
//!
//! Records everything the roles hand to the platform layer and lets tests
//! script mount, readiness and suspend behaviour. Delay calls are accounted
//! rather than slept so blocking paths can be asserted on.

use core::cell::Cell;

use embedded_hal::blocking::delay::DelayMs;
use std::vec::Vec;

use crate::transport::HidTransport;

#[derive(Default)]
pub struct MockHid {
    pub descriptor: Option<&'static [u8]>,
    pub poll_interval: Option<u8>,
    /// Number of `is_mounted` polls answered `false` before enumeration
    /// completes.
    pub mounted_in: Cell<u32>,
    /// Number of `is_ready` polls answered `false` before the endpoint
    /// accepts a report.
    pub ready_in: Cell<u32>,
    pub suspended: bool,
    pub wakeups: usize,
    pub fail_submit: bool,
    /// Every submitted report as `(report_id, payload)`, in order.
    pub reports: Vec<(u8, Vec<u8>)>,
    /// Total milliseconds of delay requested.
    pub slept_ms: u32,
}

impl MockHid {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HidTransport for MockHid {
    type Error = &'static str;

    fn register_descriptor(&mut self, descriptor: &'static [u8]) {
        self.descriptor = Some(descriptor);
    }

    fn set_poll_interval(&mut self, interval_ms: u8) {
        self.poll_interval = Some(interval_ms);
    }

    fn is_mounted(&self) -> bool {
        countdown(&self.mounted_in)
    }

    fn is_ready(&self) -> bool {
        countdown(&self.ready_in)
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn remote_wakeup(&mut self) {
        self.wakeups += 1;
        self.suspended = false;
    }

    fn submit_report(&mut self, report_id: u8, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_submit {
            return Err("endpoint stalled");
        }
        self.reports.push((report_id, data.to_vec()));
        Ok(())
    }
}

fn countdown(remaining: &Cell<u32>) -> bool {
    let n = remaining.get();
    if n == 0 {
        true
    } else {
        remaining.set(n - 1);
        false
    }
}

impl DelayMs<u8> for MockHid {
    fn delay_ms(&mut self, ms: u8) {
        self.slept_ms += u32::from(ms);
    }
}

impl DelayMs<u16> for MockHid {
    fn delay_ms(&mut self, ms: u16) {
        self.slept_ms += u32::from(ms);
    }
}
