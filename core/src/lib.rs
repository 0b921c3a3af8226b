#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use disk::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use solver::*;
pub use types::*;

mod disk;
mod engine;
mod error;
mod generator;
mod layout;
mod solver;
mod types;

/// Player-chosen game parameters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub disks: DiskCount,
}

impl GameConfig {
    /// Largest count whose widest disk still fits within the column pitch of
    /// the default layout.
    pub const MAX_DISKS: DiskCount = 7;

    pub const fn new_unchecked(disks: DiskCount) -> Self {
        Self { disks }
    }

    /// Oversized requests clamp to [`Self::MAX_DISKS`]; zero disks is a legal
    /// degenerate empty board.
    pub fn new(disks: DiskCount) -> Self {
        if disks > Self::MAX_DISKS {
            log::warn!("Requested {} disks, clamping to {}", disks, Self::MAX_DISKS);
        }
        Self::new_unchecked(disks.min(Self::MAX_DISKS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_oversized_disk_counts() {
        assert_eq!(GameConfig::new(200).disks, GameConfig::MAX_DISKS);
        assert_eq!(GameConfig::new(0).disks, 0);
        assert_eq!(GameConfig::new(3).disks, 3);
    }

    #[test]
    fn unchecked_config_is_left_alone() {
        assert_eq!(GameConfig::new_unchecked(200).disks, 200);
    }
}
