//! Combined HID report descriptor for the four device roles
//!
//! The table is built once and registered by every role's `begin`; the
//! platform stack treats repeated registration as a no-op. Each sub table
//! carries a distinct Report ID item so all four roles can share one
//! interrupt endpoint.

use num_enum::IntoPrimitive;

/// Report ID tag distinguishing which role a report on the shared endpoint
/// belongs to. The values match the Report ID items in
/// [`REPORT_DESCRIPTOR`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive)]
#[repr(u8)]
pub enum ReportId {
    Keyboard = 1,
    Mouse = 2,
    Consumer = 3,
    Gamepad = 4,
}

/// Combined report descriptor: boot compatible keyboard, wheel and pan
/// mouse, single code consumer control and a 16 button, six axis gamepad.
#[rustfmt::skip]
pub const REPORT_DESCRIPTOR: &[u8] = &[
    // Keyboard (Report ID 1)
    0x05, 0x01,       // Usage Page (Generic Desktop),
    0x09, 0x06,       // Usage (Keyboard),
    0xA1, 0x01,       // Collection (Application),
    0x85, 0x01,       //   Report ID (1),
    0x05, 0x07,       //   Usage Page (Key Codes),
    0x19, 0xE0,       //   Usage Minimum (224),
    0x29, 0xE7,       //   Usage Maximum (231),
    0x15, 0x00,       //   Logical Minimum (0),
    0x25, 0x01,       //   Logical Maximum (1),
    0x95, 0x08,       //   Report Count (8),
    0x75, 0x01,       //   Report Size (1),
    0x81, 0x02,       //   Input (Data, Variable, Absolute), ;Modifier byte
    0x95, 0x01,       //   Report Count (1),
    0x75, 0x08,       //   Report Size (8),
    0x81, 0x01,       //   Input (Constant), ;Reserved byte
    0x05, 0x08,       //   Usage Page (LEDs),
    0x19, 0x01,       //   Usage Minimum (1),
    0x29, 0x05,       //   Usage Maximum (5),
    0x95, 0x05,       //   Report Count (5),
    0x75, 0x01,       //   Report Size (1),
    0x91, 0x02,       //   Output (Data, Variable, Absolute), ;LED report
    0x95, 0x01,       //   Report Count (1),
    0x75, 0x03,       //   Report Size (3),
    0x91, 0x01,       //   Output (Constant), ;LED report padding
    0x05, 0x07,       //   Usage Page (Key Codes),
    0x19, 0x00,       //   Usage Minimum (0),
    0x2A, 0xFF, 0x00, //   Usage Maximum (255),
    0x15, 0x00,       //   Logical Minimum (0),
    0x26, 0xFF, 0x00, //   Logical Maximum (255),
    0x95, 0x06,       //   Report Count (6),
    0x75, 0x08,       //   Report Size (8),
    0x81, 0x00,       //   Input (Data, Array),
    0xC0,             // End Collection

    // Mouse (Report ID 2)
    0x05, 0x01,       // Usage Page (Generic Desktop),
    0x09, 0x02,       // Usage (Mouse),
    0xA1, 0x01,       // Collection (Application),
    0x85, 0x02,       //   Report ID (2),
    0x09, 0x01,       //   Usage (Pointer),
    0xA1, 0x00,       //   Collection (Physical),
    0x05, 0x09,       //     Usage Page (Buttons),
    0x19, 0x01,       //     Usage Minimum (1),
    0x29, 0x05,       //     Usage Maximum (5),
    0x15, 0x00,       //     Logical Minimum (0),
    0x25, 0x01,       //     Logical Maximum (1),
    0x95, 0x05,       //     Report Count (5),
    0x75, 0x01,       //     Report Size (1),
    0x81, 0x02,       //     Input (Data, Variable, Absolute), ;Buttons
    0x95, 0x01,       //     Report Count (1),
    0x75, 0x03,       //     Report Size (3),
    0x81, 0x01,       //     Input (Constant), ;Button padding
    0x05, 0x01,       //     Usage Page (Generic Desktop),
    0x09, 0x30,       //     Usage (X),
    0x09, 0x31,       //     Usage (Y),
    0x15, 0x81,       //     Logical Minimum (-127),
    0x25, 0x7F,       //     Logical Maximum (127),
    0x95, 0x02,       //     Report Count (2),
    0x75, 0x08,       //     Report Size (8),
    0x81, 0x06,       //     Input (Data, Variable, Relative),
    0x09, 0x38,       //     Usage (Wheel),
    0x15, 0x81,       //     Logical Minimum (-127),
    0x25, 0x7F,       //     Logical Maximum (127),
    0x95, 0x01,       //     Report Count (1),
    0x75, 0x08,       //     Report Size (8),
    0x81, 0x06,       //     Input (Data, Variable, Relative),
    0x05, 0x0C,       //     Usage Page (Consumer),
    0x0A, 0x38, 0x02, //     Usage (AC Pan),
    0x15, 0x81,       //     Logical Minimum (-127),
    0x25, 0x7F,       //     Logical Maximum (127),
    0x95, 0x01,       //     Report Count (1),
    0x75, 0x08,       //     Report Size (8),
    0x81, 0x06,       //     Input (Data, Variable, Relative),
    0xC0,             //   End Collection,
    0xC0,             // End Collection

    // Consumer control (Report ID 3)
    0x05, 0x0C,       // Usage Page (Consumer),
    0x09, 0x01,       // Usage (Consumer Control),
    0xA1, 0x01,       // Collection (Application),
    0x85, 0x03,       //   Report ID (3),
    0x15, 0x00,       //   Logical Minimum (0),
    0x26, 0xFF, 0x03, //   Logical Maximum (0x03FF),
    0x19, 0x00,       //   Usage Minimum (0),
    0x2A, 0xFF, 0x03, //   Usage Maximum (0x03FF),
    0x95, 0x01,       //   Report Count (1),
    0x75, 0x10,       //   Report Size (16),
    0x81, 0x00,       //   Input (Data, Array),
    0xC0,             // End Collection

    // Gamepad (Report ID 4)
    0x05, 0x01,       // Usage Page (Generic Desktop),
    0x09, 0x05,       // Usage (Gamepad),
    0xA1, 0x01,       // Collection (Application),
    0x85, 0x04,       //   Report ID (4),
    0x05, 0x09,       //   Usage Page (Buttons),
    0x19, 0x01,       //   Usage Minimum (1),
    0x29, 0x10,       //   Usage Maximum (16),
    0x15, 0x00,       //   Logical Minimum (0),
    0x25, 0x01,       //   Logical Maximum (1),
    0x95, 0x10,       //   Report Count (16),
    0x75, 0x01,       //   Report Size (1),
    0x81, 0x02,       //   Input (Data, Variable, Absolute), ;Button mask
    0x05, 0x01,       //   Usage Page (Generic Desktop),
    0x09, 0x39,       //   Usage (Hat Switch),
    0x15, 0x01,       //   Logical Minimum (1),
    0x25, 0x08,       //   Logical Maximum (8),
    0x35, 0x00,       //   Physical Minimum (0),
    0x46, 0x3B, 0x01, //   Physical Maximum (315),
    0x95, 0x01,       //   Report Count (1),
    0x75, 0x04,       //   Report Size (4),
    0x81, 0x42,       //   Input (Data, Variable, Absolute, Null), ;Hat nibble
    0x95, 0x01,       //   Report Count (1),
    0x75, 0x04,       //   Report Size (4),
    0x81, 0x01,       //   Input (Constant), ;Hat padding
    0x05, 0x01,       //   Usage Page (Generic Desktop),
    0x09, 0x30,       //   Usage (X),
    0x09, 0x31,       //   Usage (Y),
    0x09, 0x32,       //   Usage (Z),
    0x09, 0x35,       //   Usage (Rz),
    0x09, 0x33,       //   Usage (Rx),
    0x09, 0x34,       //   Usage (Ry),
    0x16, 0x01, 0x80, //   Logical Minimum (-32767),
    0x26, 0xFF, 0x7F, //   Logical Maximum (32767),
    0x95, 0x06,       //   Report Count (6),
    0x75, 0x10,       //   Report Size (16),
    0x81, 0x02,       //   Input (Data, Variable, Absolute), ;Axes
    0xC0,             // End Collection
];
