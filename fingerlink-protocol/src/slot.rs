//! Fingerprint record slots
//!
//! The sensor module owns the records; the relay only ever encodes a slot
//! index into an outgoing message.

/// Number of record slots in the sensor module
pub const SLOT_COUNT: u8 = 24;

/// First slot letter on the console (`a` selects slot 0)
const FIRST_LETTER: u8 = b'a';

/// A record slot index, always in `0..SLOT_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slot(u8);

impl Slot {
    /// Create a slot from a raw index
    pub fn new(index: u8) -> Option<Self> {
        (index < SLOT_COUNT).then_some(Slot(index))
    }

    /// Parse a slot from its console letter (`'a'`..=`'x'`)
    pub fn from_letter(byte: u8) -> Option<Self> {
        byte.checked_sub(FIRST_LETTER).and_then(Self::new)
    }

    /// Raw slot index
    pub fn index(self) -> u8 {
        self.0
    }

    /// Console letter selecting this slot
    pub fn letter(self) -> u8 {
        FIRST_LETTER + self.0
    }

    /// All slots in ascending order
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..SLOT_COUNT).map(Slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_letter_bounds() {
        assert_eq!(Slot::from_letter(b'a').map(Slot::index), Some(0));
        assert_eq!(Slot::from_letter(b'c').map(Slot::index), Some(2));
        assert_eq!(Slot::from_letter(b'x').map(Slot::index), Some(23));
        assert_eq!(Slot::from_letter(b'y'), None);
        assert_eq!(Slot::from_letter(b'`'), None);
        assert_eq!(Slot::from_letter(b'A'), None);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Slot::new(23).is_some());
        assert!(Slot::new(SLOT_COUNT).is_none());
        assert!(Slot::new(255).is_none());
    }

    #[test]
    fn test_all_slots() {
        assert_eq!(Slot::all().count(), SLOT_COUNT as usize);
        assert_eq!(Slot::all().last().map(Slot::letter), Some(b'x'));
    }

    proptest! {
        #[test]
        fn prop_letter_maps_linearly(byte in any::<u8>()) {
            match Slot::from_letter(byte) {
                Some(slot) => {
                    prop_assert!((b'a'..=b'x').contains(&byte));
                    prop_assert_eq!(slot.index(), byte - b'a');
                    prop_assert_eq!(slot.letter(), byte);
                }
                None => prop_assert!(!(b'a'..=b'x').contains(&byte)),
            }
        }
    }
}
