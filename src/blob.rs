//! Tracked blobs as reported by the camera.

/// Number of blob slots in a report.
pub const SLOT_COUNT: usize = 4;
/// Largest X coordinate the camera reports.
pub const X_MAX: u16 = 1023;
/// Y values at or above this mark an empty slot.
pub const Y_LIMIT: u16 = 768;

/// Position of one blob slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blob {
    /// 0 to 1023
    pub x: u16,
    /// 0 to 767 while active
    pub y: u16,
}

impl Blob {
    /// What an empty slot reads as.
    pub const NONE: Blob = Blob { x: 1023, y: 1023 };

    /// A slot is active when its Y coordinate is in range. X is not checked.
    pub fn is_active(&self) -> bool {
        self.y < Y_LIMIT
    }
}

/// Bitmask of active slots, bit `n` for slot `n`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActiveBlobs(u8);

impl ActiveBlobs {
    pub const NONE: ActiveBlobs = ActiveBlobs(0);

    pub fn from_blobs(blobs: &[Blob; SLOT_COUNT]) -> Self {
        let mut mask = 0u8;
        for (slot, blob) in blobs.iter().enumerate() {
            if blob.is_active() {
                mask |= 1 << slot;
            }
        }
        Self(mask)
    }

    /// Raw mask, only the low 4 bits are ever set.
    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, slot: usize) -> bool {
        slot < SLOT_COUNT && self.0 & (1 << slot) != 0
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Active slot indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let mask = *self;
        (0..SLOT_COUNT).filter(move |&slot| mask.contains(slot))
    }
}

impl From<ActiveBlobs> for u8 {
    fn from(active: ActiveBlobs) -> Self {
        active.0
    }
}

/// One decoded report: every slot and the matching active mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub blobs: [Blob; SLOT_COUNT],
    pub active: ActiveBlobs,
}

impl Frame {
    /// State before any report has been read.
    pub const EMPTY: Frame = Frame {
        blobs: [Blob::NONE; SLOT_COUNT],
        active: ActiveBlobs::NONE,
    };

    /// Builds a frame, deriving the mask from the blobs.
    pub fn new(blobs: [Blob; SLOT_COUNT]) -> Self {
        Self {
            active: ActiveBlobs::from_blobs(&blobs),
            blobs,
        }
    }

    pub fn blob(&self, slot: usize) -> Option<Blob> {
        self.blobs.get(slot).copied()
    }

    /// Active blobs with their slot index.
    pub fn active(&self) -> impl Iterator<Item = (usize, Blob)> + '_ {
        self.active.iter().map(move |slot| (slot, self.blobs[slot]))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::EMPTY
    }
}
