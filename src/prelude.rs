//! Convenience re-exports for firmware using the device roles.

pub use crate::descriptor::{ReportId, REPORT_DESCRIPTOR};
pub use crate::device::consumer::ConsumerControl;
pub use crate::device::gamepad::Gamepad;
pub use crate::device::keyboard::Keyboard;
pub use crate::device::mouse::Mouse;
pub use crate::page::*;
pub use crate::transport::HidTransport;
