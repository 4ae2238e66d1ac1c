//! HID usage values used by the device roles
//!
//! Keycodes are the raw USB HID Keyboard/Keypad page usages (0x07); consumer
//! codes are Consumer page usages (0x0C). Only the values the roles and the
//! ASCII translation table need are named here, any raw usage in range can be
//! passed to the role operations directly.

use num_enum::{IntoPrimitive, TryFromPrimitive};

// Mouse button masks, bit positions per the mouse report descriptor.
pub const MOUSE_LEFT: u8 = 0x01;
pub const MOUSE_RIGHT: u8 = 0x02;
pub const MOUSE_MIDDLE: u8 = 0x04;
pub const MOUSE_BACKWARD: u8 = 0x08;
pub const MOUSE_FORWARD: u8 = 0x10;

// Modifier keycodes, the inclusive range the keyboard role folds into the
// modifier bitmask instead of a key slot.
pub const KEY_CONTROL_LEFT: u8 = 0xE0;
pub const KEY_SHIFT_LEFT: u8 = 0xE1;
pub const KEY_ALT_LEFT: u8 = 0xE2;
pub const KEY_GUI_LEFT: u8 = 0xE3;
pub const KEY_CONTROL_RIGHT: u8 = 0xE4;
pub const KEY_SHIFT_RIGHT: u8 = 0xE5;
pub const KEY_ALT_RIGHT: u8 = 0xE6;
pub const KEY_GUI_RIGHT: u8 = 0xE7;

// Modifier bits as they appear in byte 0 of the keyboard report.
pub const MODIFIER_LEFT_CTRL: u8 = 0x01;
pub const MODIFIER_LEFT_SHIFT: u8 = 0x02;
pub const MODIFIER_LEFT_ALT: u8 = 0x04;
pub const MODIFIER_LEFT_GUI: u8 = 0x08;
pub const MODIFIER_RIGHT_CTRL: u8 = 0x10;
pub const MODIFIER_RIGHT_SHIFT: u8 = 0x20;
pub const MODIFIER_RIGHT_ALT: u8 = 0x40;
pub const MODIFIER_RIGHT_GUI: u8 = 0x80;

// Common non-printing keycodes.
pub const KEY_ENTER: u8 = 0x28;
pub const KEY_ESCAPE: u8 = 0x29;
pub const KEY_BACKSPACE: u8 = 0x2A;
pub const KEY_TAB: u8 = 0x2B;
pub const KEY_SPACE: u8 = 0x2C;
pub const KEY_CAPS_LOCK: u8 = 0x39;
pub const KEY_DELETE: u8 = 0x4C;

// Letter keycodes, handy for firmware that emits fixed chords.
pub const KEY_A: u8 = 0x04;
pub const KEY_B: u8 = 0x05;
pub const KEY_C: u8 = 0x06;
pub const KEY_D: u8 = 0x07;
pub const KEY_E: u8 = 0x08;
pub const KEY_F: u8 = 0x09;
pub const KEY_G: u8 = 0x0A;
pub const KEY_H: u8 = 0x0B;
pub const KEY_I: u8 = 0x0C;
pub const KEY_J: u8 = 0x0D;
pub const KEY_K: u8 = 0x0E;
pub const KEY_L: u8 = 0x0F;
pub const KEY_M: u8 = 0x10;
pub const KEY_N: u8 = 0x11;
pub const KEY_O: u8 = 0x12;
pub const KEY_P: u8 = 0x13;
pub const KEY_Q: u8 = 0x14;
pub const KEY_R: u8 = 0x15;
pub const KEY_S: u8 = 0x16;
pub const KEY_T: u8 = 0x17;
pub const KEY_U: u8 = 0x18;
pub const KEY_V: u8 = 0x19;
pub const KEY_W: u8 = 0x1A;
pub const KEY_X: u8 = 0x1B;
pub const KEY_Y: u8 = 0x1C;
pub const KEY_Z: u8 = 0x1D;

/// Consumer page usage codes for the media keys most hosts understand.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive)]
#[repr(u16)]
pub enum Consumer {
    Unassigned = 0x00,
    ScanNextTrack = 0xB5,
    ScanPreviousTrack = 0xB6,
    Stop = 0xB7,
    PlayPause = 0xCD,
    Mute = 0xE2,
    VolumeIncrement = 0xE9,
    VolumeDecrement = 0xEA,
}

/// Gamepad button masks, bit positions per the gamepad report descriptor.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive)]
#[repr(u16)]
pub enum GamepadButton {
    A = 0x0001,
    B = 0x0002,
    C = 0x0004,
    X = 0x0008,
    Y = 0x0010,
    Z = 0x0020,
    LeftTrigger = 0x0040,
    RightTrigger = 0x0080,
    LeftTrigger2 = 0x0100,
    RightTrigger2 = 0x0200,
    Select = 0x0400,
    Start = 0x0800,
    Mode = 0x1000,
    LeftThumb = 0x2000,
    RightThumb = 0x4000,
}

/// Hat switch directions. `Centered` is the released state; it sits outside
/// the descriptor's logical range and reads as the null position on the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum HatSwitch {
    Centered = 0,
    Up = 1,
    UpRight = 2,
    Right = 3,
    DownRight = 4,
    Down = 5,
    DownLeft = 6,
    Left = 7,
    UpLeft = 8,
}
