//! HID gamepad role
//!
//! Tracks a 16 bit button mask, a hat switch and six signed 16 bit axes.
//! Every accepted mutation re-submits the full composite report; axes not
//! named by a setter keep their previous value.

use core::cell::RefCell;

use embedded_hal::blocking::delay::DelayMs;
use log::{debug, error};
use packed_struct::prelude::*;

use crate::descriptor::ReportId;
use crate::page::HatSwitch;
use crate::transport::{self, HidTransport};

const POLL_INTERVAL_MS: u8 = 4;

/// Gamepad input report: button mask, hat value (low nibble of one byte) and
/// the x, y, z, Rz, Rx, Ry axes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, PackedStruct)]
#[packed_struct(endian = "lsb", size_bytes = "15")]
pub struct GamepadReport {
    #[packed_field]
    pub buttons: u16,
    #[packed_field]
    pub hat: u8,
    #[packed_field]
    pub x: i16,
    #[packed_field]
    pub y: i16,
    #[packed_field]
    pub z: i16,
    #[packed_field]
    pub rz: i16,
    #[packed_field]
    pub rx: i16,
    #[packed_field]
    pub ry: i16,
}

pub struct Gamepad<'a, T: HidTransport + DelayMs<u8>> {
    hid: &'a RefCell<T>,
    report: GamepadReport,
}

impl<'a, T: HidTransport + DelayMs<u8>> Gamepad<'a, T> {
    pub fn new(hid: &'a RefCell<T>) -> Self {
        Self {
            hid,
            report: GamepadReport::default(),
        }
    }

    /// Registers the shared descriptor table and blocks until the host has
    /// enumerated the device.
    pub fn begin(&mut self) {
        transport::start_role(self.hid, POLL_INTERVAL_MS);
    }

    /// The transport is shared and outlives any one role, nothing to release.
    pub fn end(&mut self) {}

    /// Holds the masked buttons down. Reports only if the mask changed.
    pub fn press(&mut self, buttons: u16) {
        let next = self.report.buttons | buttons;
        if next != self.report.buttons {
            self.report.buttons = next;
            self.send_report();
        }
    }

    /// Releases the masked buttons. Reports only if the mask changed.
    pub fn release(&mut self, buttons: u16) {
        let next = self.report.buttons & !buttons;
        if next != self.report.buttons {
            self.report.buttons = next;
            self.send_report();
        }
    }

    /// Releases every button and reports unconditionally.
    pub fn release_all(&mut self) {
        self.report.buttons = 0;
        self.send_report();
    }

    /// Sets the hat switch. Values outside [`HatSwitch`]'s range are ignored
    /// without a report.
    pub fn set_hat(&mut self, hat: u8) {
        if HatSwitch::try_from(hat).is_err() {
            debug!("Ignoring out of range hat value {}", hat);
            return;
        }
        self.report.hat = hat;
        self.send_report();
    }

    /// Sets all six axes and reports.
    pub fn set_axes(&mut self, x: i16, y: i16, z: i16, rz: i16, rx: i16, ry: i16) {
        self.report.x = clamp_axis(x);
        self.report.y = clamp_axis(y);
        self.report.z = clamp_axis(z);
        self.report.rz = clamp_axis(rz);
        self.report.rx = clamp_axis(rx);
        self.report.ry = clamp_axis(ry);
        self.send_report();
    }

    /// Sets the x/y pair, leaving the other axes untouched, and reports.
    pub fn set_left_stick(&mut self, x: i16, y: i16) {
        self.report.x = clamp_axis(x);
        self.report.y = clamp_axis(y);
        self.send_report();
    }

    /// Sets the z/Rz pair, leaving the other axes untouched, and reports.
    pub fn set_right_stick(&mut self, z: i16, rz: i16) {
        self.report.z = clamp_axis(z);
        self.report.rz = clamp_axis(rz);
        self.send_report();
    }

    /// Sets the Rx/Ry pair, leaving the other axes untouched, and reports.
    pub fn set_triggers(&mut self, rx: i16, ry: i16) {
        self.report.rx = clamp_axis(rx);
        self.report.ry = clamp_axis(ry);
        self.send_report();
    }

    fn send_report(&mut self) {
        let data = match self.report.pack() {
            Ok(data) => data,
            Err(e) => {
                error!("Error packing GamepadReport: {:?}", e);
                return;
            }
        };
        transport::write_report_throttled(self.hid, ReportId::Gamepad, &data);
    }
}

/// The descriptor declares a symmetric -32767..32767 range, so the two's
/// complement extreme is pulled up by one.
fn clamp_axis(value: i16) -> i16 {
    if value == i16::MIN {
        i16::MIN + 1
    } else {
        value
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mock::MockHid;
    use crate::page::GamepadButton;
    use std::vec::Vec;

    fn axes_of(report: &[u8]) -> Vec<i16> {
        report[3..15]
            .chunks(2)
            .map(|c| i16::from_le_bytes([c[0], c[1]]))
            .collect()
    }

    #[test]
    fn report_packs_buttons_hat_then_axes_little_endian() {
        let report = GamepadReport {
            buttons: 0x4001,
            hat: HatSwitch::Right.into(),
            x: 0x0102,
            y: -2,
            z: 3,
            rz: -4,
            rx: 5,
            ry: i16::MIN + 1,
        };

        assert_eq!(
            report.pack(),
            Ok([
                0x01, 0x40, // buttons, lsb first
                3,    // hat
                0x02, 0x01, // x
                0xFE, 0xFF, // y
                0x03, 0x00, // z
                0xFC, 0xFF, // rz
                0x05, 0x00, // rx
                0x01, 0x80, // ry
            ])
        );
    }

    #[test]
    fn press_and_release_report_only_on_change() {
        let hid = RefCell::new(MockHid::new());
        let mut gamepad = Gamepad::new(&hid);

        gamepad.press(GamepadButton::A.into());
        gamepad.press(GamepadButton::A.into());
        gamepad.release(GamepadButton::B.into());
        assert_eq!(hid.borrow().reports.len(), 1);

        gamepad.press(GamepadButton::Start.into());
        let hid = hid.borrow();
        assert_eq!(hid.reports.len(), 2);
        let buttons = u16::from_le_bytes([hid.reports[1].1[0], hid.reports[1].1[1]]);
        assert_eq!(
            buttons,
            u16::from(GamepadButton::A) | u16::from(GamepadButton::Start)
        );
    }

    #[test]
    fn release_all_always_reports() {
        let hid = RefCell::new(MockHid::new());
        let mut gamepad = Gamepad::new(&hid);

        gamepad.release_all();
        gamepad.release_all();

        let hid = hid.borrow();
        assert_eq!(hid.reports.len(), 2);
        assert_eq!(&hid.reports[1].1[0..2], &[0, 0]);
    }

    #[test]
    fn out_of_range_hat_is_ignored() {
        let hid = RefCell::new(MockHid::new());
        let mut gamepad = Gamepad::new(&hid);

        gamepad.set_hat(9);
        assert!(hid.borrow().reports.is_empty());

        gamepad.set_hat(HatSwitch::UpLeft.into());
        let hid = hid.borrow();
        assert_eq!(hid.reports.len(), 1);
        assert_eq!(hid.reports[0].1[2], 8);
    }

    #[test]
    fn every_setter_clamps_the_axis_extreme() {
        let hid = RefCell::new(MockHid::new());
        let mut gamepad = Gamepad::new(&hid);

        gamepad.set_axes(i16::MIN, i16::MIN, i16::MIN, i16::MIN, i16::MIN, i16::MIN);
        assert_eq!(
            axes_of(&hid.borrow().reports[0].1),
            vec![i16::MIN + 1; 6]
        );

        gamepad.set_left_stick(i16::MIN, 100);
        assert_eq!(axes_of(&hid.borrow().reports[1].1)[..2], [i16::MIN + 1, 100]);

        gamepad.set_right_stick(i16::MIN, i16::MIN);
        assert_eq!(
            axes_of(&hid.borrow().reports[2].1)[2..4],
            [i16::MIN + 1, i16::MIN + 1]
        );

        gamepad.set_triggers(i16::MIN, -1);
        assert_eq!(
            axes_of(&hid.borrow().reports[3].1)[4..6],
            [i16::MIN + 1, -1]
        );
    }

    #[test]
    fn partial_setters_keep_other_axes() {
        let hid = RefCell::new(MockHid::new());
        let mut gamepad = Gamepad::new(&hid);

        gamepad.set_axes(1, 2, 3, 4, 5, 6);
        gamepad.set_triggers(50, 60);

        let hid = hid.borrow();
        assert_eq!(axes_of(&hid.reports[1].1), vec![1, 2, 3, 4, 50, 60]);
    }

    #[test]
    fn report_layout_is_buttons_hat_axes() {
        let hid = RefCell::new(MockHid::new());
        let mut gamepad = Gamepad::new(&hid);

        gamepad.press(GamepadButton::RightThumb.into());
        gamepad.set_hat(HatSwitch::Right.into());
        gamepad.set_left_stick(0x0102, -2);

        let hid = hid.borrow();
        let report = &hid.reports.last().unwrap().1;
        assert_eq!(report.len(), 15);
        assert_eq!(&report[0..2], &[0x00, 0x40]); // buttons, lsb first
        assert_eq!(report[2], 3); // hat
        assert_eq!(&report[3..7], &[0x02, 0x01, 0xFE, 0xFF]); // x, y
    }
}
