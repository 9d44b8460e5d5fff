use core::fmt;
use core::num::NonZeroU32;

/// Compact dense index of a node inside one graph.
///
/// - `u32` keeps per-query tables small
/// - `NonZero` lets `Option<Slot>` (the predecessor table) stay 4 bytes
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot(NonZeroU32);

impl Slot {
    /// Number of distinct slots, and so the largest node count a graph may have.
    pub const CAPACITY: usize = u32::MAX as usize;

    /// Create a slot from a 0-based index by storing index+1.
    ///
    /// `index` must be below [`Slot::CAPACITY`]; graphs refuse larger node
    /// sets, so indexes taken from a graph always fit.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::CAPACITY, "slot index {index} out of range");
        let raw = u32::try_from(index).unwrap_or(u32::MAX);
        Self(NonZeroU32::MIN.saturating_add(raw))
    }

    /// Like [`from_index`](Self::from_index), but `None` when `index` does
    /// not fit.
    pub fn try_from_index(index: usize) -> Option<Self> {
        let raw = u32::try_from(index).ok()?;
        NonZeroU32::MIN.checked_add(raw).map(Self)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.index())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_round_trip_index() {
        for i in [0_usize, 1, 2, 42, 10_000] {
            let slot = Slot::from_index(i);
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn slot_capacity_is_enforced() {
        let last = Slot::CAPACITY - 1;
        assert_eq!(Slot::try_from_index(last).map(Slot::index), Some(last));
        assert_eq!(Slot::try_from_index(Slot::CAPACITY), None);
        assert_eq!(Slot::try_from_index(usize::MAX), None);
    }

    #[test]
    fn option_slot_is_small() {
        assert_eq!(
            core::mem::size_of::<Slot>(),
            core::mem::size_of::<Option<Slot>>()
        );
    }

    #[test]
    fn slots_order_by_index() {
        assert!(Slot::from_index(3) < Slot::from_index(4));
        assert_eq!(format!("{}", Slot::from_index(7)), "7");
    }
}
