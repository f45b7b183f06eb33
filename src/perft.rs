//! Perft node counting over the legal move generator.

use crate::board::{Board, Move};

impl Board {
    /// Count leaf positions reachable in exactly `depth` plies.
    ///
    /// Finished games contribute no children, so a position drawn by rule
    /// is a leaf even if moves would otherwise be available.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|mv| self.apply_move(mv).perft(depth - 1))
            .sum()
    }

    /// Perft split by root move, in generation order.
    #[must_use]
    pub fn divide(&self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }
        self.legal_moves()
            .into_iter()
            .map(|mv| {
                let nodes = self.apply_move(&mv).perft(depth - 1);
                (mv, nodes)
            })
            .collect()
    }
}
