//! Contract between the device roles and the platform USB stack
//!
//! The crate never talks to USB hardware itself. A platform layer (TinyUSB
//! style polling stacks, `usb-device` glue, a BLE-to-USB bridge) implements
//! [`HidTransport`] for its endpoint handle and the roles share that handle
//! through a `RefCell`. Implementations are expected to be driven from a
//! single logical thread of control; if real threads are introduced the
//! handle must be wrapped in a mutex by the platform layer, since the roles
//! only serialize through endpoint readiness.

use core::cell::RefCell;

use embedded_hal::blocking::delay::DelayMs;
use log::error;

use crate::descriptor::{ReportId, REPORT_DESCRIPTOR};

/// Period between endpoint readiness polls while a submission is blocked.
const READY_POLL_MS: u8 = 1;
/// Period between enumeration polls while `begin` waits for the host.
const MOUNT_POLL_MS: u8 = 1;
/// Pause after throttled submissions, keeps the report rate below host side
/// debounce logic.
const THROTTLE_MS: u8 = 2;

/// Operations the platform USB stack must provide for the shared HID endpoint.
///
/// All four device roles submit through one endpoint; reports are
/// distinguished by the Report ID tags baked into
/// [`REPORT_DESCRIPTOR`](crate::descriptor::REPORT_DESCRIPTOR).
pub trait HidTransport {
    /// Error produced by a failed submission. Submissions are best effort,
    /// failures are logged by the roles and never surfaced to the caller.
    type Error: core::fmt::Debug;

    /// Install the combined report descriptor table.
    ///
    /// Every role calls this from `begin`; implementations must treat
    /// repeated registration of the same table as a no-op.
    fn register_descriptor(&mut self, descriptor: &'static [u8]);

    /// Advisory interrupt endpoint polling interval.
    fn set_poll_interval(&mut self, interval_ms: u8);

    /// True once host enumeration has completed.
    fn is_mounted(&self) -> bool;

    /// True when the endpoint can accept a new report.
    fn is_ready(&self) -> bool;

    /// True while the USB link is suspended.
    fn is_suspended(&self) -> bool;

    /// Ask a suspended host link to resume. Best effort, no acknowledgement
    /// is awaited.
    fn remote_wakeup(&mut self);

    /// Hand a report tagged with a Report ID to the USB stack. Readiness must
    /// have been checked beforehand; the call itself must not block.
    fn submit_report(&mut self, report_id: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// Registers the descriptor table, applies the role's poll interval and
/// blocks until the host has enumerated the device.
pub(crate) fn start_role<T>(hid: &RefCell<T>, poll_interval_ms: u8)
where
    T: HidTransport + DelayMs<u8>,
{
    let mut hid = hid.borrow_mut();
    hid.register_descriptor(REPORT_DESCRIPTOR);
    hid.set_poll_interval(poll_interval_ms);
    while !hid.is_mounted() {
        hid.delay_ms(MOUNT_POLL_MS);
    }
}

/// Submits one report through the shared endpoint.
///
/// Wakes a suspended link first, then waits for endpoint readiness. There is
/// no timeout: if the host never resumes or never drains the endpoint this
/// blocks forever. That is the backpressure contract of the link, callers
/// needing an upper bound must arrange a watchdog outside this crate.
pub(crate) fn write_report<T>(hid: &RefCell<T>, report_id: ReportId, data: &[u8])
where
    T: HidTransport + DelayMs<u8>,
{
    let mut hid = hid.borrow_mut();
    if hid.is_suspended() {
        hid.remote_wakeup();
    }
    while !hid.is_ready() {
        hid.delay_ms(READY_POLL_MS);
    }
    if let Err(e) = hid.submit_report(report_id.into(), data) {
        error!("Failed to submit {:?} report: {:?}", report_id, e);
    }
}

/// [`write_report`] followed by a short fixed pause.
///
/// Used by the keyboard, consumer and gamepad roles so bursts of state
/// changes cannot outrun the host.
pub(crate) fn write_report_throttled<T>(hid: &RefCell<T>, report_id: ReportId, data: &[u8])
where
    T: HidTransport + DelayMs<u8>,
{
    write_report(hid, report_id, data);
    hid.borrow_mut().delay_ms(THROTTLE_MS);
}
