//! Composite `(group, index)` resource key

use binrw::{BinRead, BinWrite};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a sound inside an archive.
///
/// Stored on disk as two little-endian `i32` values, group first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    BinRead,
    BinWrite,
    Serialize,
    Deserialize,
)]
#[brw(little)]
pub struct ResourceKey {
    /// Sound group number
    pub group: i32,
    /// Sound index within the group
    pub index: i32,
}

impl ResourceKey {
    /// Size of an encoded key in bytes
    pub const SIZE: usize = 8;

    /// Create a key from its group and index
    pub const fn new(group: i32, index: i32) -> Self {
        Self { group, index }
    }

    /// Whether both halves are non-negative
    pub const fn is_non_negative(self) -> bool {
        self.group >= 0 && self.index >= 0
    }
}

impl From<(i32, i32)> for ResourceKey {
    fn from((group, index): (i32, i32)) -> Self {
        Self::new(group, index)
    }
}

impl From<[i32; 2]> for ResourceKey {
    fn from([group, index]: [i32; 2]) -> Self {
        Self::new(group, index)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.group, self.index)
    }
}
