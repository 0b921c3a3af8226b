use super::*;
use crate::disk::DiskVec;

/// Produces the canonical strictly-decreasing stack of widths, with each disk
/// given a uniformly random color. Deterministic for a given seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomColorGenerator {
    seed: u64,
}

impl RandomColorGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DiskStackGenerator for RandomColorGenerator {
    fn generate(self, config: GameConfig, layout: &Layout) -> DiskStack {
        use rand::prelude::*;

        let disks = config.disks;
        if disks > GameConfig::MAX_DISKS {
            log::warn!(
                "Requested {} disks but the board fits {}, clamping",
                disks,
                GameConfig::MAX_DISKS
            );
        }
        let disks = disks.min(GameConfig::MAX_DISKS);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let stack: DiskVec = (0..disks)
            .map(|i| Disk {
                width: layout.disk_width(disks, i),
                color: Rgb {
                    r: rng.random(),
                    g: rng.random(),
                    b: rng.random(),
                },
            })
            .collect();

        DiskStack::from_ordered(stack)
    }
}
