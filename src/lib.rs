//! Composite USB Human Interface Device roles for embedded USB stacks
//!
//! Provides mouse, keyboard, consumer control and gamepad device roles that
//! share a single HID endpoint of a platform USB stack. The platform stack is
//! abstracted behind the [`transport::HidTransport`] trait; anything that can
//! enumerate a HID interface, report link state and accept tagged reports can
//! drive all four roles.
//!
//! Each role keeps its own pressed state, serializes it into the fixed report
//! layout declared by [`descriptor::REPORT_DESCRIPTOR`] and hands it to the
//! shared endpoint. Submissions block until the host is ready to accept a
//! report, waking a suspended link first.
//!
//! ```no_run
//! use core::cell::RefCell;
//! use embedded_hal::blocking::delay::DelayMs;
//! use hid_composite_device::prelude::*;
//!
//! struct PlatformHid;
//!
//! impl HidTransport for PlatformHid {
//!     type Error = ();
//!     fn register_descriptor(&mut self, _descriptor: &'static [u8]) {}
//!     fn set_poll_interval(&mut self, _interval_ms: u8) {}
//!     fn is_mounted(&self) -> bool {
//!         true
//!     }
//!     fn is_ready(&self) -> bool {
//!         true
//!     }
//!     fn is_suspended(&self) -> bool {
//!         false
//!     }
//!     fn remote_wakeup(&mut self) {}
//!     fn submit_report(&mut self, _report_id: u8, _data: &[u8]) -> Result<(), ()> {
//!         Ok(())
//!     }
//! }
//!
//! impl DelayMs<u8> for PlatformHid {
//!     fn delay_ms(&mut self, _ms: u8) {}
//! }
//! impl DelayMs<u16> for PlatformHid {
//!     fn delay_ms(&mut self, _ms: u16) {}
//! }
//!
//! let hid = RefCell::new(PlatformHid);
//!
//! let mut keyboard = Keyboard::new(&hid);
//! let mut mouse = Mouse::new(&hid);
//!
//! keyboard.begin();
//! mouse.begin();
//!
//! keyboard.write_sequence("hello", 10);
//! mouse.click(MOUSE_LEFT);
//! ```
#![no_std]

//Allow the use of std in tests
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod descriptor;
pub mod device;
pub mod page;
pub mod prelude;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;
