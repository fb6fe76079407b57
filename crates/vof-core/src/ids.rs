use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier used across the mesh.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// # Panics
    /// Panics if `index == u32::MAX`.
    pub fn from_index(index: u32) -> Self {
        match index.checked_add(1).and_then(NonZeroU32::new) {
            Some(v) => Self(v),
            None => panic!("Id index overflow: {index}"),
        }
    }

    /// Create an Id from a `usize` position, if it fits.
    pub fn try_from_usize(index: usize) -> Option<Self> {
        let index = u32::try_from(index).ok()?;
        let stored = index.checked_add(1)?;
        NonZeroU32::new(stored).map(Self)
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Recover the 0-based index as a `usize` (for slice access).
    pub fn idx(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type CellId = Id;
pub type FaceId = Id;
pub type PatchId = Id;
