//! Per-stage enable bits.

use std::fmt;

/// Hard ceiling on stages per pipeline: one bit of a `u32` mask per stage.
pub const MAX_STAGES: usize = u32::BITS as usize;

/// Bit `i` set means stage `i` executes. Break markers own a bit too, but
/// its value never matters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagSet(u32);

impl FlagSet {
    pub const ALL: FlagSet = FlagSet(u32::MAX);
    pub const NONE: FlagSet = FlagSet(0);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        FlagSet(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn contains(self, index: usize) -> bool {
        index < MAX_STAGES && (self.0 >> index) & 1 == 1
    }

    /// Sets bit `index`. Indices past the mask width are ignored.
    #[inline]
    pub fn insert(&mut self, index: usize) {
        if index < MAX_STAGES {
            self.0 |= 1u32 << index;
        }
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        FlagSet::ALL
    }
}

impl From<u32> for FlagSet {
    fn from(bits: u32) -> Self {
        FlagSet(bits)
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:#034b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_everything() {
        let flags = FlagSet::default();
        assert!((0..MAX_STAGES).all(|i| flags.contains(i)));
        assert_eq!(flags.bits(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_insert_and_contains() {
        let mut flags = FlagSet::NONE;
        assert!(!flags.contains(3));
        flags.insert(3);
        flags.insert(31);
        assert!(flags.contains(3));
        assert!(flags.contains(31));
        assert_eq!(flags.bits(), (1 << 3) | (1 << 31));
    }

    #[test]
    fn test_out_of_width_index() {
        let mut flags = FlagSet::NONE;
        flags.insert(32);
        assert_eq!(flags, FlagSet::NONE);
        assert!(!FlagSet::ALL.contains(32));
    }
}
