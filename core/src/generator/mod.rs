use crate::*;
pub use random::*;

mod random;

/// Builds the initial arrangement of disks placed on the first peg.
pub trait DiskStackGenerator {
    fn generate(self, config: GameConfig, layout: &Layout) -> DiskStack;
}
