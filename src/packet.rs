//! Extended-mode report packet.
//!
//! A report is 16 bytes. Byte 0 is not used; each of the 4 slots then
//! takes 3 bytes: X low bits, Y low bits, and an extension byte carrying
//! the two high bits of each axis.
//!
//! ```text
//! extension byte:  7 6 | 5 4 | 3 2 1 0
//!                  Y9:8 X9:8   (size)
//! ```
use crate::blob::{Blob, Frame, SLOT_COUNT};

/// Length of a report.
pub const PACKET_LEN: usize = 16;

/// X high bits in the extension byte.
const X_HIGH_MASK: u8 = 0x30;
/// Moves the X high bits to bits 8 and 9.
const X_HIGH_SHIFT: u32 = 4;
/// Y high bits in the extension byte.
const Y_HIGH_MASK: u8 = 0xC0;
/// Moves the Y high bits to bits 8 and 9.
const Y_HIGH_SHIFT: u32 = 2;

/// Byte offsets of one slot within a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLayout {
    pub x_low: usize,
    pub y_low: usize,
    pub extension: usize,
}

impl SlotLayout {
    const fn at(slot: usize) -> Self {
        Self {
            x_low: 1 + 3 * slot,
            y_low: 2 + 3 * slot,
            extension: 3 + 3 * slot,
        }
    }
}

/// Where each slot lives in a report.
pub const SLOT_LAYOUT: [SlotLayout; SLOT_COUNT] = [
    SlotLayout::at(0),
    SlotLayout::at(1),
    SlotLayout::at(2),
    SlotLayout::at(3),
];

fn decode_slot(packet: &[u8; PACKET_LEN], layout: &SlotLayout) -> Blob {
    let s = packet[layout.extension];
    let x = packet[layout.x_low] as u16 + (((s & X_HIGH_MASK) as u16) << X_HIGH_SHIFT);
    let y = packet[layout.y_low] as u16 + (((s & Y_HIGH_MASK) as u16) << Y_HIGH_SHIFT);
    Blob { x, y }
}

/// Decodes a report. Every slot and the mask come from `packet` alone.
pub fn decode(packet: &[u8; PACKET_LEN]) -> Frame {
    Frame::new(SLOT_LAYOUT.map(|layout| decode_slot(packet, &layout)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::{X_MAX, Y_LIMIT};

    #[test]
    fn test_layout_offsets() {
        assert_eq!(
            SLOT_LAYOUT[0],
            SlotLayout {
                x_low: 1,
                y_low: 2,
                extension: 3
            }
        );
        assert_eq!(SLOT_LAYOUT[3].extension, 12);
    }

    #[test]
    fn test_x_high_bits() {
        let mut packet = [0u8; PACKET_LEN];
        packet[1..4].copy_from_slice(&[0xFF, 0xFF, 0x30]);
        let frame = decode(&packet);
        assert_eq!(frame.blobs[0], Blob { x: 1023, y: 255 });
        assert!(frame.active.contains(0));
    }

    #[test]
    fn test_zero_packet_is_all_active() {
        let frame = decode(&[0u8; PACKET_LEN]);
        assert_eq!(frame.blobs, [Blob { x: 0, y: 0 }; SLOT_COUNT]);
        assert_eq!(frame.active.bits(), 0b1111);
    }

    #[test]
    fn test_empty_report() {
        // what the camera sends with nothing in view
        let packet = [0xFF; PACKET_LEN];
        let frame = decode(&packet);
        assert_eq!(frame.blobs, [Blob::NONE; SLOT_COUNT]);
        assert!(frame.active.is_empty());
    }

    #[test]
    fn test_y_high_bits_decide_validity() {
        let mut packet = [0u8; PACKET_LEN];
        // slot 1: y = 0xFF + 0x200 = 767
        packet[5] = 0xFF;
        packet[6] = 0x80;
        // slot 2: y = 0x00 + 0x300 = 768
        packet[9] = 0xC0;
        // slot 3: x = 0x12 + 0x100, y = 0x34 + 0x100
        packet[10] = 0x12;
        packet[11] = 0x34;
        packet[12] = 0x5F;
        let frame = decode(&packet);
        assert_eq!(frame.blobs[1], Blob { x: 0, y: 767 });
        assert_eq!(frame.blobs[2], Blob { x: 0, y: 768 });
        assert_eq!(frame.blobs[3], Blob { x: 0x112, y: 0x134 });
        assert_eq!(frame.active.bits(), 0b1011);
    }

    #[test]
    fn test_byte_zero_and_size_bits_ignored() {
        let mut packet = [0u8; PACKET_LEN];
        packet[0] = 0xAA;
        packet[3] = 0x0F;
        packet[13..].copy_from_slice(&[0xFF, 0xFF, 0xFF]);
        assert_eq!(decode(&packet), decode(&[0u8; PACKET_LEN]));
    }

    #[test]
    fn test_mask_matches_y_for_every_extension() {
        let mut packet = [0u8; PACKET_LEN];
        for s in 0..=u8::MAX {
            packet[1] = s.wrapping_mul(7);
            packet[2] = s.rotate_left(3);
            packet[3] = s;
            let frame = decode(&packet);
            let blob = frame.blobs[0];
            assert!(blob.x <= X_MAX);
            assert!(blob.y <= X_MAX);
            assert_eq!(frame.active.contains(0), blob.y < Y_LIMIT);
        }
    }
}
