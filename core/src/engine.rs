use serde::{Deserialize, Serialize};

use crate::*;

/// The disk currently detached from any tower during a drag gesture.
///
/// `origin` is recorded explicitly at pick-up time so a rejected placement can
/// return the disk without reverse-deriving the source tower from geometry.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeldDisk {
    disk: Disk,
    origin: Peg,
    grab_offset: Point,
    center: Point,
}

impl HeldDisk {
    pub fn disk(&self) -> Disk {
        self.disk
    }

    pub fn origin(&self) -> Peg {
        self.origin
    }

    /// Rendered center of the disk while it is dragged.
    pub fn center(&self) -> Point {
        self.center
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PickOutcome {
    NoChange,
    Lifted,
}

impl PickOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Lifted => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragOutcome {
    NoChange,
    Moved,
}

impl DragOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DropOutcome {
    NoChange,
    /// The disk landed on the targeted tower.
    Placed,
    /// Placement was rejected, the disk went back to its origin tower.
    Returned,
    /// The disk landed and the board is now solved.
    Won,
}

impl DropOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use DropOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Returned => true,
            Won => true,
        }
    }

    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Per drag gesture the game goes idle -> held (successful pick-up) -> idle
/// (drop, whether or not placement succeeded). All mutation happens inside
/// these three pointer operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HanoiGame {
    towers: [Tower; 3],
    hand: Option<HeldDisk>,
    layout: Layout,
    disk_count: DiskCount,
}

impl HanoiGame {
    pub fn new(stack: DiskStack) -> Self {
        Self::with_layout(stack, Layout::default())
    }

    pub fn with_layout(stack: DiskStack, layout: Layout) -> Self {
        let disk_count = stack.len() as DiskCount;
        Self {
            towers: [stack.into_tower(), Tower::default(), Tower::default()],
            hand: None,
            layout,
            disk_count,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn tower(&self, peg: Peg) -> &Tower {
        &self.towers[peg.index()]
    }

    pub fn held(&self) -> Option<&HeldDisk> {
        self.hand.as_ref()
    }

    /// Disk count chosen when the game was created.
    pub fn disk_count(&self) -> DiskCount {
        self.disk_count
    }

    /// Disks on the board plus the one in hand; constant for a game's lifetime.
    pub fn total_disks(&self) -> usize {
        let on_towers: usize = self.towers.iter().map(Tower::len).sum();
        on_towers + usize::from(self.hand.is_some())
    }

    /// Detaches the top disk of the first tower whose top disk's bounding box
    /// contains `pointer`. No-op when nothing is hit or a disk is already held.
    pub fn pick_up(&mut self, pointer: Point) -> PickOutcome {
        if self.hand.is_some() {
            return PickOutcome::NoChange;
        }

        for peg in Peg::ALL {
            let tower = &self.towers[peg.index()];
            let Some(top) = tower.top() else { continue };
            let rect = self.layout.top_disk_rect(peg, tower.len(), top.width);
            if !rect.contains(pointer) {
                continue;
            }

            let Some(disk) = self.towers[peg.index()].pop() else {
                continue;
            };
            let center = rect.center();
            self.hand = Some(HeldDisk {
                disk,
                origin: peg,
                grab_offset: Point::new(center.x - pointer.x, center.y - pointer.y),
                center,
            });
            log::debug!("Picked up disk of width {} from {}", disk.width, peg);
            return PickOutcome::Lifted;
        }

        PickOutcome::NoChange
    }

    /// Repositions the held disk's rendered center; tower contents are never
    /// touched. No-op when the hand is empty.
    pub fn drag(&mut self, pointer: Point) -> DragOutcome {
        match self.hand.as_mut() {
            Some(held) => {
                held.center = pointer + held.grab_offset;
                DragOutcome::Moved
            }
            None => DragOutcome::NoChange,
        }
    }

    /// Commits or reverts the drag: the pointer's x-coordinate buckets into a
    /// target tower (clamped to the board), a legal placement pushes the disk
    /// there, an illegal one returns it to its origin tower. Clears the hand
    /// either way.
    pub fn drop_at(&mut self, pointer: Point) -> DropOutcome {
        let Some(held) = self.hand.take() else {
            return DropOutcome::NoChange;
        };

        let target = self.layout.peg_at_x(pointer.x);
        if self.can_place(held.disk, target) {
            self.towers[target.index()].push(held.disk);
            log::debug!("Placed disk of width {} on {}", held.disk.width, target);
            if self.is_won() {
                DropOutcome::Won
            } else {
                DropOutcome::Placed
            }
        } else {
            self.towers[held.origin.index()].push(held.disk);
            log::debug!(
                "Rejected drop on {}, disk returned to {}",
                target,
                held.origin
            );
            DropOutcome::Returned
        }
    }

    /// The sole legality rule: the target is empty or its top disk is wider.
    /// Which tower the disk came from does not matter.
    pub fn can_place(&self, disk: Disk, peg: Peg) -> bool {
        match self.towers[peg.index()].top() {
            None => true,
            Some(top) => disk.width < top.width,
        }
    }

    /// Solved when the first two towers are empty, regardless of the third.
    pub fn is_won(&self) -> bool {
        self.tower(Peg::A).is_empty() && self.tower(Peg::B).is_empty()
    }
}
