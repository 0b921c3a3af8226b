use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

pub(crate) type DiskVec = SmallVec<[Disk; 8]>;

/// A single sized, colored disk. All disks share the fixed height from the
/// board layout; a disk's position is derived from the tower and stack index
/// it occupies, never stored on the disk itself.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    pub width: Px,
    pub color: Rgb,
}

/// One ordered stack of disks, bottom-to-top. The strict-width invariant is
/// enforced at placement time by the engine, not on every access.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tower(DiskVec);

impl Tower {
    pub(crate) fn push(&mut self, disk: Disk) {
        self.0.push(disk);
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.0.pop()
    }

    pub fn top(&self) -> Option<Disk> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Disk> {
        self.0.iter()
    }
}

/// Validated initial arrangement for the first peg, bottom-to-top.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiskStack(DiskVec);

impl DiskStack {
    pub fn new(disks: impl IntoIterator<Item = Disk>) -> Result<Self> {
        let disks: DiskVec = disks.into_iter().collect();

        if disks.len() > GameConfig::MAX_DISKS as usize {
            return Err(GameError::TooManyDisks);
        }

        for pair in disks.windows(2) {
            if pair[1].width >= pair[0].width {
                return Err(GameError::UnorderedStack);
            }
        }

        Ok(Self(disks))
    }

    /// Constructor for generated stacks that are ordered by construction.
    pub(crate) fn from_ordered(disks: DiskVec) -> Self {
        debug_assert!(disks.windows(2).all(|pair| pair[1].width < pair[0].width));
        Self(disks)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_tower(self) -> Tower {
        Tower(self.0)
    }
}
