//! HID keyboard role
//!
//! Tracks a modifier bitmask and up to six simultaneously held keys; every
//! mutation sends an absolute "currently held" report. The host treats a key
//! as pressed until a later report no longer lists it, so callers must pair
//! `press` with `release` (or use `write`, which pulses a single character).

use core::cell::RefCell;

use embedded_hal::blocking::delay::DelayMs;
use log::error;
use packed_struct::prelude::*;

use crate::descriptor::ReportId;
use crate::page::{KEY_CONTROL_LEFT, KEY_GUI_RIGHT, MODIFIER_LEFT_SHIFT};
use crate::transport::{self, HidTransport};

const POLL_INTERVAL_MS: u8 = 2;

/// Keyboard input report: modifier bitmask, reserved zero byte and six key
/// slots, value 0 meaning empty.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default, PackedStruct)]
#[packed_struct(endian = "lsb", size_bytes = "8")]
pub struct KeyboardReport {
    #[packed_field]
    pub modifiers: u8,
    #[packed_field]
    pub reserved: u8,
    #[packed_field(element_size_bytes = "1")]
    pub keys: [u8; 6],
}

pub struct Keyboard<'a, T: HidTransport + DelayMs<u8>> {
    hid: &'a RefCell<T>,
    report: KeyboardReport,
}

impl<'a, T: HidTransport + DelayMs<u8>> Keyboard<'a, T> {
    pub fn new(hid: &'a RefCell<T>) -> Self {
        Self {
            hid,
            report: KeyboardReport::default(),
        }
    }

    /// Registers the shared descriptor table and blocks until the host has
    /// enumerated the device.
    pub fn begin(&mut self) {
        transport::start_role(self.hid, POLL_INTERVAL_MS);
    }

    /// The transport is shared and outlives any one role, nothing to release.
    pub fn end(&mut self) {}

    /// Adds a key to the held set and reports. Modifier keycodes
    /// (`0xE0..=0xE7`) fold into the modifier bitmask without taking a slot;
    /// pressing a key that is already held is a no-op on the stored set but
    /// still reports.
    ///
    /// Returns the number of keys affected: 0 for keycode 0, and 0 with the
    /// held set untouched when all six slots are already occupied. The
    /// rejected case still reports, the host just sees the unchanged set.
    pub fn press(&mut self, keycode: u8) -> usize {
        if keycode == 0 {
            return 0;
        }
        let mut affected = 1;
        if is_modifier(keycode) {
            self.report.modifiers |= modifier_bit(keycode);
        } else if !self.report.keys.contains(&keycode) {
            match self.report.keys.iter_mut().find(|slot| **slot == 0) {
                Some(slot) => *slot = keycode,
                // Six keys already held, the seventh is rejected.
                None => affected = 0,
            }
        }
        self.send_report();
        affected
    }

    /// Removes a key from the held set and reports. Clears every slot
    /// holding the keycode in case a duplicate ever got in.
    ///
    /// Returns the number of keys affected, 0 only for keycode 0.
    pub fn release(&mut self, keycode: u8) -> usize {
        if keycode == 0 {
            return 0;
        }
        if is_modifier(keycode) {
            self.report.modifiers &= !modifier_bit(keycode);
        } else {
            for slot in self.report.keys.iter_mut().filter(|slot| **slot == keycode) {
                *slot = 0;
            }
        }
        self.send_report();
        1
    }

    /// Clears every slot and the modifier mask, then reports.
    pub fn release_all(&mut self) {
        self.report.keys = [0; 6];
        self.report.modifiers = 0;
        self.send_report();
    }

    /// Pulses a single ASCII character: key down report, then key up report.
    ///
    /// The keycode goes through slot 0, evicting whatever was held there.
    /// Characters outside 7 bit ASCII are ignored without any report. A shift
    /// modifier added for the character is dropped again before the key up
    /// report so a pulse cannot leak shift state; a shift held by the caller
    /// stays held.
    pub fn write(&mut self, ch: char) {
        let entry = match ASCII_TO_KEYCODE.get(ch as usize) {
            Some(entry) => entry,
            None => return,
        };
        let shift_added = entry.shift && self.report.modifiers & MODIFIER_LEFT_SHIFT == 0;
        if entry.shift {
            self.report.modifiers |= MODIFIER_LEFT_SHIFT;
        }
        self.report.keys[0] = entry.keycode;
        self.send_report();

        self.report.keys[0] = 0;
        if shift_added {
            self.report.modifiers &= !MODIFIER_LEFT_SHIFT;
        }
        self.send_report();
    }

    /// Types `text` one character at a time, sleeping `delay_ms` between
    /// characters. Purely sequential, no batching.
    pub fn write_sequence(&mut self, text: &str, delay_ms: u16)
    where
        T: DelayMs<u16>,
    {
        for ch in text.chars() {
            self.write(ch);
            DelayMs::<u16>::delay_ms(&mut *self.hid.borrow_mut(), delay_ms);
        }
    }

    fn send_report(&mut self) {
        let data = match self.report.pack() {
            Ok(data) => data,
            Err(e) => {
                error!("Error packing KeyboardReport: {:?}", e);
                return;
            }
        };
        transport::write_report_throttled(self.hid, ReportId::Keyboard, &data);
    }
}

fn is_modifier(keycode: u8) -> bool {
    (KEY_CONTROL_LEFT..=KEY_GUI_RIGHT).contains(&keycode)
}

fn modifier_bit(keycode: u8) -> u8 {
    1 << (keycode & 0x0F)
}

struct AsciiEntry {
    shift: bool,
    keycode: u8,
}

const fn plain(keycode: u8) -> AsciiEntry {
    AsciiEntry {
        shift: false,
        keycode,
    }
}

const fn shifted(keycode: u8) -> AsciiEntry {
    AsciiEntry {
        shift: true,
        keycode,
    }
}

/// ASCII to (shift, keycode) translation for a US layout host.
#[rustfmt::skip]
static ASCII_TO_KEYCODE: [AsciiEntry; 128] = [
    plain(0x00),   // 0x00 NUL
    plain(0x00),   // 0x01 SOH
    plain(0x00),   // 0x02 STX
    plain(0x00),   // 0x03 ETX
    plain(0x00),   // 0x04 EOT
    plain(0x00),   // 0x05 ENQ
    plain(0x00),   // 0x06 ACK
    plain(0x00),   // 0x07 BEL
    plain(0x2A),   // 0x08 BS
    plain(0x2B),   // 0x09 TAB
    plain(0x28),   // 0x0A LF
    plain(0x00),   // 0x0B VT
    plain(0x00),   // 0x0C FF
    plain(0x28),   // 0x0D CR
    plain(0x00),   // 0x0E SO
    plain(0x00),   // 0x0F SI
    plain(0x00),   // 0x10 DLE
    plain(0x00),   // 0x11 DC1
    plain(0x00),   // 0x12 DC2
    plain(0x00),   // 0x13 DC3
    plain(0x00),   // 0x14 DC4
    plain(0x00),   // 0x15 NAK
    plain(0x00),   // 0x16 SYN
    plain(0x00),   // 0x17 ETB
    plain(0x00),   // 0x18 CAN
    plain(0x00),   // 0x19 EM
    plain(0x00),   // 0x1A SUB
    plain(0x29),   // 0x1B ESC
    plain(0x00),   // 0x1C FS
    plain(0x00),   // 0x1D GS
    plain(0x00),   // 0x1E RS
    plain(0x00),   // 0x1F US
    plain(0x2C),   // 0x20 ' '
    shifted(0x1E), // 0x21 !
    shifted(0x34), // 0x22 "
    shifted(0x20), // 0x23 #
    shifted(0x21), // 0x24 $
    shifted(0x22), // 0x25 %
    shifted(0x24), // 0x26 &
    plain(0x34),   // 0x27 '
    shifted(0x26), // 0x28 (
    shifted(0x27), // 0x29 )
    shifted(0x25), // 0x2A *
    shifted(0x2E), // 0x2B +
    plain(0x36),   // 0x2C ,
    plain(0x2D),   // 0x2D -
    plain(0x37),   // 0x2E .
    plain(0x38),   // 0x2F /
    plain(0x27),   // 0x30 0
    plain(0x1E),   // 0x31 1
    plain(0x1F),   // 0x32 2
    plain(0x20),   // 0x33 3
    plain(0x21),   // 0x34 4
    plain(0x22),   // 0x35 5
    plain(0x23),   // 0x36 6
    plain(0x24),   // 0x37 7
    plain(0x25),   // 0x38 8
    plain(0x26),   // 0x39 9
    shifted(0x33), // 0x3A :
    plain(0x33),   // 0x3B ;
    shifted(0x36), // 0x3C <
    plain(0x2E),   // 0x3D =
    shifted(0x37), // 0x3E >
    shifted(0x38), // 0x3F ?
    shifted(0x1F), // 0x40 @
    shifted(0x04), // 0x41 A
    shifted(0x05), // 0x42 B
    shifted(0x06), // 0x43 C
    shifted(0x07), // 0x44 D
    shifted(0x08), // 0x45 E
    shifted(0x09), // 0x46 F
    shifted(0x0A), // 0x47 G
    shifted(0x0B), // 0x48 H
    shifted(0x0C), // 0x49 I
    shifted(0x0D), // 0x4A J
    shifted(0x0E), // 0x4B K
    shifted(0x0F), // 0x4C L
    shifted(0x10), // 0x4D M
    shifted(0x11), // 0x4E N
    shifted(0x12), // 0x4F O
    shifted(0x13), // 0x50 P
    shifted(0x14), // 0x51 Q
    shifted(0x15), // 0x52 R
    shifted(0x16), // 0x53 S
    shifted(0x17), // 0x54 T
    shifted(0x18), // 0x55 U
    shifted(0x19), // 0x56 V
    shifted(0x1A), // 0x57 W
    shifted(0x1B), // 0x58 X
    shifted(0x1C), // 0x59 Y
    shifted(0x1D), // 0x5A Z
    plain(0x2F),   // 0x5B [
    plain(0x31),   // 0x5C \
    plain(0x30),   // 0x5D ]
    shifted(0x23), // 0x5E ^
    shifted(0x2D), // 0x5F _
    plain(0x35),   // 0x60 `
    plain(0x04),   // 0x61 a
    plain(0x05),   // 0x62 b
    plain(0x06),   // 0x63 c
    plain(0x07),   // 0x64 d
    plain(0x08),   // 0x65 e
    plain(0x09),   // 0x66 f
    plain(0x0A),   // 0x67 g
    plain(0x0B),   // 0x68 h
    plain(0x0C),   // 0x69 i
    plain(0x0D),   // 0x6A j
    plain(0x0E),   // 0x6B k
    plain(0x0F),   // 0x6C l
    plain(0x10),   // 0x6D m
    plain(0x11),   // 0x6E n
    plain(0x12),   // 0x6F o
    plain(0x13),   // 0x70 p
    plain(0x14),   // 0x71 q
    plain(0x15),   // 0x72 r
    plain(0x16),   // 0x73 s
    plain(0x17),   // 0x74 t
    plain(0x18),   // 0x75 u
    plain(0x19),   // 0x76 v
    plain(0x1A),   // 0x77 w
    plain(0x1B),   // 0x78 x
    plain(0x1C),   // 0x79 y
    plain(0x1D),   // 0x7A z
    shifted(0x2F), // 0x7B {
    shifted(0x31), // 0x7C |
    shifted(0x30), // 0x7D }
    shifted(0x35), // 0x7E ~
    plain(0x4C),   // 0x7F DEL
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::mock::MockHid;
    use crate::page::{
        KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F, KEY_G, KEY_SHIFT_LEFT, MODIFIER_LEFT_CTRL,
    };
    use std::vec::Vec;

    fn keys_of(report: &[u8]) -> Vec<u8> {
        let mut keys: Vec<u8> = report[2..8].iter().copied().filter(|&k| k != 0).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn report_packs_modifiers_reserved_then_slots() {
        let report = KeyboardReport {
            modifiers: MODIFIER_LEFT_CTRL | MODIFIER_LEFT_SHIFT,
            reserved: 0,
            keys: [KEY_A, 0, KEY_C, 0, 0, KEY_F],
        };

        assert_eq!(
            report.pack(),
            Ok([
                MODIFIER_LEFT_CTRL | MODIFIER_LEFT_SHIFT,
                0,
                KEY_A,
                0,
                KEY_C,
                0,
                0,
                KEY_F
            ])
        );
    }

    #[test]
    fn press_release_tracks_key_set() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        assert_eq!(keyboard.press(KEY_A), 1);
        assert_eq!(keyboard.press(KEY_B), 1);
        assert_eq!(keyboard.press(KEY_C), 1);
        assert_eq!(keyboard.release(KEY_B), 1);

        let hid = hid.borrow();
        let last = &hid.reports.last().unwrap().1;
        assert_eq!(keys_of(last), vec![KEY_A, KEY_C]);
    }

    #[test]
    fn seventh_key_is_rejected_without_corruption() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        for k in [KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F] {
            assert_eq!(keyboard.press(k), 1);
        }
        let before = hid.borrow().reports.len();

        assert_eq!(keyboard.press(KEY_G), 0);
        // the report goes out but carries the unchanged six key set
        assert_eq!(hid.borrow().reports.len(), before + 1);
        assert_eq!(
            keys_of(&hid.borrow().reports.last().unwrap().1),
            vec![KEY_A, KEY_B, KEY_C, KEY_D, KEY_E, KEY_F]
        );

        keyboard.release(KEY_A);
        let hid = hid.borrow();
        let last = &hid.reports.last().unwrap().1;
        assert_eq!(keys_of(last), vec![KEY_B, KEY_C, KEY_D, KEY_E, KEY_F]);
    }

    #[test]
    fn repeated_press_does_not_duplicate() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        assert_eq!(keyboard.press(KEY_A), 1);
        assert_eq!(keyboard.press(KEY_A), 1);

        let hid = hid.borrow();
        assert_eq!(hid.reports.len(), 2);
        let last = &hid.reports.last().unwrap().1;
        assert_eq!(keys_of(last), vec![KEY_A]);
    }

    #[test]
    fn zero_keycode_is_a_no_op() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        assert_eq!(keyboard.press(0), 0);
        assert_eq!(keyboard.release(0), 0);
        assert!(hid.borrow().reports.is_empty());
    }

    #[test]
    fn modifiers_accumulate_without_clearing_each_other() {
        // The non-destructive OR variant: pressing a second modifier must not
        // reset the first. The legacy alternative rebuilt the mask from
        // scratch on every modifier press.
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        assert_eq!(keyboard.press(KEY_CONTROL_LEFT), 1);
        assert_eq!(keyboard.press(KEY_SHIFT_LEFT), 1);

        let hid = hid.borrow();
        let last = &hid.reports.last().unwrap().1;
        assert_eq!(last[0], MODIFIER_LEFT_CTRL | MODIFIER_LEFT_SHIFT);
        assert!(keys_of(last).is_empty());
    }

    #[test]
    fn release_all_yields_all_zero_report() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        keyboard.press(KEY_CONTROL_LEFT);
        keyboard.press(KEY_A);
        keyboard.press(KEY_B);
        keyboard.release_all();

        let hid = hid.borrow();
        assert_eq!(hid.reports.last().unwrap().1, vec![0; 8]);
    }

    #[test]
    fn write_pulses_exactly_one_character() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        keyboard.write('a');

        let hid = hid.borrow();
        assert_eq!(hid.reports.len(), 2);
        assert_eq!(hid.reports[0].1, vec![0, 0, KEY_A, 0, 0, 0, 0, 0]);
        assert_eq!(hid.reports[1].1, vec![0; 8]);
    }

    #[test]
    fn write_applies_shift_only_when_the_table_says_so() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        keyboard.write('A');
        keyboard.write('a');

        let hid = hid.borrow();
        assert_eq!(hid.reports.len(), 4);
        assert_eq!(hid.reports[0].1[0], MODIFIER_LEFT_SHIFT);
        assert_eq!(hid.reports[1].1[0], 0);
        assert_eq!(hid.reports[2].1[0], 0);
    }

    #[test]
    fn write_ignores_non_ascii() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        keyboard.write('é');
        keyboard.write('\u{80}');

        assert!(hid.borrow().reports.is_empty());
    }

    #[test]
    fn write_keeps_a_shift_held_by_the_caller() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        keyboard.press(KEY_SHIFT_LEFT);
        keyboard.write('A');

        let hid = hid.borrow();
        // key up report still carries the caller's shift
        assert_eq!(hid.reports.last().unwrap().1[0], MODIFIER_LEFT_SHIFT);
    }

    #[test]
    fn write_sequence_paces_characters() {
        let hid = RefCell::new(MockHid::new());
        let mut keyboard = Keyboard::new(&hid);

        keyboard.write_sequence("ab", 10);

        let hid = hid.borrow();
        // two pulses of two reports each
        assert_eq!(hid.reports.len(), 4);
        // two inter-character delays on top of the per-report throttle
        assert!(hid.slept_ms >= 20);
    }
}
