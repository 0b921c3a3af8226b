use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed board geometry: three posts on a regular column pitch, disks stacking
/// up from the bottom edge of the surface in fixed-height steps.
///
/// The engine only ever needs the per-peg x-centers and the vertical stacking
/// increment; everything else here exists for the render pass.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub canvas_size: (Px, Px),
    pub first_center_x: Px,
    pub column_pitch: Px,
    pub disk_height: Px,
    pub base_disk_width: Px,
    pub width_increment: Px,
    pub post_width: Px,
    pub post_height: Px,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            canvas_size: (600.0, 400.0),
            first_center_x: 100.0,
            column_pitch: 200.0,
            disk_height: 20.0,
            base_disk_width: 60.0,
            width_increment: 20.0,
            post_width: 10.0,
            post_height: 150.0,
        }
    }
}

impl Layout {
    pub fn center_x(&self, peg: Peg) -> Px {
        self.first_center_x + self.column_pitch * peg.index() as Px
    }

    pub fn post_rect(&self, peg: Peg) -> Rect {
        let (_, height) = self.canvas_size;
        Rect::new(
            self.center_x(peg) - self.post_width / 2.0,
            height - self.post_height,
            self.post_width,
            self.post_height,
        )
    }

    /// Baseline position for the peg's name label.
    pub fn label_pos(&self, peg: Peg) -> Point {
        let (_, height) = self.canvas_size;
        Point::new(self.center_x(peg), height - self.post_height)
    }

    /// On-screen rectangle of the disk at `stack_index` (0 = bottom) on `peg`.
    pub fn disk_rect(&self, peg: Peg, stack_index: usize, width: Px) -> Rect {
        let (_, height) = self.canvas_size;
        Rect::new(
            self.center_x(peg) - width / 2.0,
            height - (stack_index as Px + 1.0) * self.disk_height,
            width,
            self.disk_height,
        )
    }

    pub fn top_disk_rect(&self, peg: Peg, tower_len: usize, width: Px) -> Rect {
        self.disk_rect(peg, tower_len.saturating_sub(1), width)
    }

    pub fn top_disk_center(&self, peg: Peg, tower_len: usize) -> Point {
        let (_, height) = self.canvas_size;
        Point::new(
            self.center_x(peg),
            height - tower_len as Px * self.disk_height + self.disk_height / 2.0,
        )
    }

    /// Rectangle for the disk in hand, centered on its dragged position.
    pub fn held_disk_rect(&self, center: Point, width: Px) -> Rect {
        Rect::new(
            center.x - width / 2.0,
            center.y - self.disk_height / 2.0,
            width,
            self.disk_height,
        )
    }

    /// Fixed-width column bucketing of a pointer x-coordinate. Out-of-range
    /// positions clamp to the nearest edge peg rather than being rejected.
    pub fn peg_at_x(&self, x: Px) -> Peg {
        let bucket = (x / self.column_pitch) as i64;
        Peg::ALL[bucket.clamp(0, 2) as usize]
    }

    /// Width of the disk at `stack_index` (0 = bottom) in a fresh `n`-disk game.
    pub fn disk_width(&self, n: DiskCount, stack_index: DiskCount) -> Px {
        self.base_disk_width + self.width_increment * Px::from(n - stack_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peg_centers_follow_the_column_pitch() {
        let layout = Layout::default();
        assert_eq!(layout.center_x(Peg::A), 100.0);
        assert_eq!(layout.center_x(Peg::B), 300.0);
        assert_eq!(layout.center_x(Peg::C), 500.0);
    }

    #[test]
    fn pointer_x_buckets_into_columns() {
        let layout = Layout::default();
        assert_eq!(layout.peg_at_x(0.0), Peg::A);
        assert_eq!(layout.peg_at_x(199.9), Peg::A);
        assert_eq!(layout.peg_at_x(200.0), Peg::B);
        assert_eq!(layout.peg_at_x(399.9), Peg::B);
        assert_eq!(layout.peg_at_x(400.0), Peg::C);
    }

    #[test]
    fn out_of_range_pointer_x_clamps_to_edge_pegs() {
        let layout = Layout::default();
        assert_eq!(layout.peg_at_x(-250.0), Peg::A);
        assert_eq!(layout.peg_at_x(10_000.0), Peg::C);
    }

    #[test]
    fn disks_stack_upward_from_the_bottom_edge() {
        let layout = Layout::default();
        let bottom = layout.disk_rect(Peg::A, 0, 120.0);
        let second = layout.disk_rect(Peg::A, 1, 100.0);

        assert_eq!(bottom, Rect::new(40.0, 380.0, 120.0, 20.0));
        assert_eq!(second, Rect::new(50.0, 360.0, 100.0, 20.0));
        assert_eq!(second.y + second.h, bottom.y);
    }

    #[test]
    fn top_disk_center_sits_midway_in_the_top_slot() {
        let layout = Layout::default();
        assert_eq!(layout.top_disk_center(Peg::A, 3), Point::new(100.0, 350.0));
        assert_eq!(layout.top_disk_center(Peg::B, 1), Point::new(300.0, 390.0));
    }

    #[test]
    fn fresh_game_widths_decrease_by_the_fixed_increment() {
        let layout = Layout::default();
        assert_eq!(layout.disk_width(3, 0), 120.0);
        assert_eq!(layout.disk_width(3, 1), 100.0);
        assert_eq!(layout.disk_width(3, 2), 80.0);
    }
}
