use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// One relocation of a disk-group's top disk between two named pegs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

/// Canonical optimal move sequence for `n` disks from `from` to `to`.
///
/// Produces exactly `2^n - 1` moves. This is the theoretical solution for a
/// fresh board; it neither reads nor writes any live game state.
pub fn solve(n: DiskCount, from: Peg, to: Peg, via: Peg) -> Vec<Move> {
    let mut moves = Vec::new();
    push_moves(n, from, to, via, &mut moves);
    moves
}

fn push_moves(n: DiskCount, from: Peg, to: Peg, via: Peg, moves: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    push_moves(n - 1, from, via, to, moves);
    moves.push(Move { from, to });
    push_moves(n - 1, via, to, from, moves);
}

/// Newline-joined `"<step>. <from> → <to>"` lines. Step numbers are assigned
/// here in a single pass over the finished sequence, 1-based and gapless.
pub fn hint_text(moves: &[Move]) -> String {
    moves
        .iter()
        .enumerate()
        .map(|(i, mv)| format!("{}. {} → {}", i + 1, mv.from, mv.to))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_count_is_two_to_the_n_minus_one() {
        for n in 0..=7u8 {
            let moves = solve(n, Peg::A, Peg::C, Peg::B);
            assert_eq!(moves.len(), (1usize << n) - 1);
        }
    }

    #[test]
    fn two_disk_sequence_matches_the_classic_solution() {
        let moves = solve(2, Peg::A, Peg::C, Peg::B);
        assert_eq!(
            moves,
            [
                Move { from: Peg::A, to: Peg::B },
                Move { from: Peg::A, to: Peg::C },
                Move { from: Peg::B, to: Peg::C },
            ]
        );
    }

    #[test]
    fn solution_is_playable_and_moves_everything_to_the_target() {
        // replay each sequence on integer stacks, checking legality per move
        for n in 1..=6u8 {
            let moves = solve(n, Peg::A, Peg::C, Peg::B);
            let mut pegs: [Vec<u8>; 3] = [(1..=n).rev().collect(), Vec::new(), Vec::new()];

            for mv in &moves {
                let disk = pegs[mv.from.index()].pop().unwrap();
                if let Some(&top) = pegs[mv.to.index()].last() {
                    assert!(disk < top, "illegal move in {}-disk solution", n);
                }
                pegs[mv.to.index()].push(disk);
            }

            assert!(pegs[0].is_empty());
            assert!(pegs[1].is_empty());
            assert_eq!(pegs[2].len(), usize::from(n));
        }
    }

    #[test]
    fn hint_text_numbers_steps_from_one_without_gaps() {
        let moves = solve(4, Peg::A, Peg::C, Peg::B);
        let text = hint_text(&moves);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 15);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("{}. ", i + 1)));
        }
    }

    #[test]
    fn hint_lines_use_the_arrow_format() {
        let moves = solve(1, Peg::A, Peg::C, Peg::B);
        assert_eq!(hint_text(&moves), "1. A → C");

        let moves = solve(2, Peg::B, Peg::A, Peg::C);
        assert_eq!(hint_text(&moves), "1. B → C\n2. B → A\n3. C → A");
    }

    #[test]
    fn zero_disks_solve_to_nothing() {
        assert!(solve(0, Peg::A, Peg::C, Peg::B).is_empty());
        assert_eq!(hint_text(&[]), "");
    }
}
