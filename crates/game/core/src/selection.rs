//! Cards the local player has picked but not yet played.
//!
//! A hand may hold several cards of the same rank, so a selection refers to a
//! specific physical card: the n-th occurrence of a rank in the hand. The
//! store is reconciled against every snapshot and silently drops references
//! whose card is gone.
use crate::error::SelectionRejected;
use crate::rank::Rank;
use crate::snapshot::{GameSnapshot, Phase, PlayerId};

/// Reference to one card in the local hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardSlot {
    pub rank: Rank,
    /// Zero-based occurrence of `rank` within the hand.
    pub ordinal: usize,
}

impl CardSlot {
    pub const fn new(rank: Rank, ordinal: usize) -> Self {
        Self { rank, ordinal }
    }

    /// Slot for the card at `index` in `hand`.
    pub fn at(hand: &[Rank], index: usize) -> Option<Self> {
        let rank = *hand.get(index)?;
        let ordinal = hand[..index].iter().filter(|card| **card == rank).count();
        Some(Self { rank, ordinal })
    }

    /// Position of this card in `hand`, if it is still there.
    pub fn index_in(&self, hand: &[Rank]) -> Option<usize> {
        hand.iter()
            .enumerate()
            .filter(|(_, card)| **card == self.rank)
            .nth(self.ordinal)
            .map(|(index, _)| index)
    }

    pub fn is_in(&self, hand: &[Rank]) -> bool {
        self.index_in(hand).is_some()
    }
}

/// Outcome of a successful [`SelectionStore::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggled {
    Selected,
    Deselected,
}

/// Set of selected card slots, kept in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionStore {
    slots: Vec<CardSlot>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `slot` if absent, removes it if present.
    ///
    /// Refused unless the local player is seated, alive, holds the turn, the
    /// phase is `AwaitingPlay` and the card is currently in their hand.
    pub fn toggle(
        &mut self,
        slot: CardSlot,
        snapshot: &GameSnapshot,
        local: &PlayerId,
    ) -> Result<Toggled, SelectionRejected> {
        let player = snapshot.player(local).ok_or(SelectionRejected::NotSeated)?;
        if !player.alive {
            return Err(SelectionRejected::NotAlive);
        }
        if !snapshot.is_turn_of(local) {
            return Err(SelectionRejected::NotYourTurn);
        }
        if snapshot.phase != Phase::AwaitingPlay {
            return Err(SelectionRejected::WrongPhase(snapshot.phase));
        }
        if !slot.is_in(&player.hand) {
            return Err(SelectionRejected::NotInHand);
        }

        if let Some(position) = self.slots.iter().position(|held| *held == slot) {
            self.slots.remove(position);
            Ok(Toggled::Deselected)
        } else {
            self.slots.push(slot);
            Ok(Toggled::Selected)
        }
    }

    /// Drops every slot whose card is no longer in the local hand and returns
    /// how many were dropped.
    pub fn reconcile(&mut self, snapshot: &GameSnapshot, local: &PlayerId) -> usize {
        let hand = snapshot.hand_of(local);
        let before = self.slots.len();
        self.slots.retain(|slot| slot.is_in(hand));
        before - self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn contains(&self, slot: &CardSlot) -> bool {
        self.slots.contains(slot)
    }

    pub fn to_list(&self) -> Vec<CardSlot> {
        self.slots.clone()
    }

    /// Ranks of the selected cards, in pick order; the `make_play` payload.
    pub fn cards(&self) -> Vec<Rank> {
        self.slots.iter().map(|slot| slot.rank).collect()
    }
}
