//! Device roles sharing the composite HID endpoint
//!
//! The roles are independent of each other; they share only the transport
//! handle and the descriptor table. Construct each role once, from the
//! application's composition root, and call `begin` before the first report.

pub mod consumer;
pub mod gamepad;
pub mod keyboard;
pub mod mouse;
