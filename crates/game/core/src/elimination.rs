//! Edge detection for player eliminations between consecutive snapshots.
//!
//! The server never sends an explicit "player eliminated" event; the client
//! infers it from a player's `alive` flag flipping from `true` to `false`
//! between two snapshots. [`diff`] is the pure comparison and
//! [`EliminationDetector`] owns the previous alive map across snapshots.
use std::collections::HashMap;

use crate::snapshot::{GameSnapshot, Phase, PlayerId};

/// Last known alive status per player.
pub type AliveMap = HashMap<PlayerId, bool>;

/// One-shot notification that a player just lost their last life.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerEliminated {
    pub player: PlayerId,
    pub name: String,
}

/// Players that were alive in `previous` and are dead in `next`.
///
/// A player missing from `previous` never fires, whatever their status: absence
/// of a prior entry is not treated as "was alive". Results follow turn order.
pub fn diff(previous: &AliveMap, next: &GameSnapshot) -> Vec<PlayerEliminated> {
    next.players
        .iter()
        .filter(|player| !player.alive && previous.get(&player.id) == Some(&true))
        .map(|player| PlayerEliminated {
            player: player.id.clone(),
            name: player.name.clone(),
        })
        .collect()
}

/// Stateful wrapper around [`diff`] that remembers the previous snapshot.
#[derive(Clone, Debug, Default)]
pub struct EliminationDetector {
    previous: AliveMap,
}

impl EliminationDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `snapshot` with the remembered statuses, then replaces them.
    ///
    /// A `GameOver` snapshot still reports its own eliminations, after which the
    /// map is emptied so the next game starts from first sight.
    pub fn observe(&mut self, snapshot: &GameSnapshot) -> Vec<PlayerEliminated> {
        let eliminated = diff(&self.previous, snapshot);

        self.previous = snapshot
            .players
            .iter()
            .map(|player| (player.id.clone(), player.alive))
            .collect();

        if snapshot.phase == Phase::GameOver {
            self.reset();
        }

        for event in &eliminated {
            tracing::debug!(player = %event.player, name = %event.name, "player eliminated");
        }

        eliminated
    }

    /// Records a status announced outside a snapshot. Never overwrites an
    /// entry already learned from a snapshot and never fires.
    pub fn seed(&mut self, player: PlayerId, alive: bool) {
        self.previous.entry(player).or_insert(alive);
    }

    pub fn reset(&mut self) {
        self.previous.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }

    pub fn last_known(&self, player: &PlayerId) -> Option<bool> {
        self.previous.get(player).copied()
    }
}
