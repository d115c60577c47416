//! Lenient decoding of the server's JSON snapshot.
//!
//! The server sends its internal game dictionary, with keys that differ from
//! the model names and with `null` placeholders for inactive features. These
//! structs accept both naming schemes and default every optional key, then
//! convert into the strict [`GameSnapshot`] model.
use std::collections::BTreeSet;

use serde::Deserialize;

use crate::error::SnapshotError;
use crate::rank::Rank;
use crate::snapshot::{Claim, DiceOutcome, GameSnapshot, Phase, Player, PlayerId, RevealedInfo};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.into_iter().next(),
        }
    }
}

/// Dice faces arrive as `"3"` from the server and as `3` elsewhere.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Face {
    Number(i64),
    Text(String),
}

impl Face {
    fn value(&self) -> Option<u8> {
        let face = match self {
            Face::Number(number) => *number,
            Face::Text(text) => text.trim().parse().ok()?,
        };
        (1..=6).contains(&face).then_some(face as u8)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireSnapshot {
    #[serde(default)]
    players: Vec<WirePlayer>,
    #[serde(default, alias = "currentTurnPlayerId")]
    current_turn: Option<PlayerId>,
    #[serde(default)]
    phase: Option<Phase>,
    #[serde(default, alias = "centerCardRank")]
    deck_type: Option<OneOrMany<Rank>>,
    #[serde(default, alias = "lastClaim")]
    last_claim_details: Option<WireClaim>,
    #[serde(default, alias = "revealedInfo")]
    revealed_cards_info: Option<WireRevealed>,
    #[serde(default)]
    log: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePlayer {
    id: PlayerId,
    name: String,
    alive: bool,
    #[serde(default)]
    hand: Option<Vec<Rank>>,
    #[serde(default)]
    dice_roll_attempts: Option<u32>,
    #[serde(default)]
    mystic_dice: Option<WireMysticDice>,
    #[serde(default)]
    mystic_dice_rolled_faces: Option<Vec<Face>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMysticDice {
    #[serde(default)]
    rolled_numbers: Option<Vec<Face>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireClaim {
    #[serde(default, alias = "claimantId")]
    player: Option<PlayerId>,
    #[serde(default, alias = "claimantName")]
    player_name: Option<String>,
    #[serde(default, alias = "claimedRank")]
    claimed_card_type: Option<Rank>,
    #[serde(default, alias = "claimedCount")]
    claimed_amount: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRevealed {
    #[serde(default)]
    is_revealed: Option<bool>,
    #[serde(default)]
    outcome_message: Option<String>,
    #[serde(default, alias = "diceOutcome")]
    dice_roll_outcome: Option<WireDice>,
    #[serde(default)]
    actual_cards: Option<Vec<Rank>>,
    #[serde(default)]
    player_to_roll_dice: Option<PlayerId>,
    #[serde(default)]
    claimer_name: Option<String>,
    #[serde(default)]
    claim_was_true: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDice {
    face: Face,
    #[serde(default)]
    is_loss: bool,
}

impl TryFrom<WireSnapshot> for GameSnapshot {
    type Error = SnapshotError;

    fn try_from(wire: WireSnapshot) -> Result<Self, Self::Error> {
        let phase = wire.phase.ok_or(SnapshotError::MissingPhase)?;

        Ok(Self {
            players: wire.players.into_iter().map(Player::from).collect(),
            current_turn: wire.current_turn,
            phase,
            center_card: wire.deck_type.and_then(OneOrMany::into_first),
            last_claim: wire.last_claim_details.and_then(WireClaim::into_claim),
            revealed: wire.revealed_cards_info.map(RevealedInfo::from),
            log: wire.log.unwrap_or_default(),
        })
    }
}

impl From<WirePlayer> for Player {
    fn from(wire: WirePlayer) -> Self {
        let faces = wire
            .mystic_dice_rolled_faces
            .or_else(|| wire.mystic_dice.and_then(|dice| dice.rolled_numbers))
            .unwrap_or_default();

        Self {
            id: wire.id,
            name: wire.name,
            alive: wire.alive,
            hand: wire.hand.unwrap_or_default(),
            dice_roll_attempts: wire.dice_roll_attempts.unwrap_or(0),
            rolled_faces: faces.iter().filter_map(Face::value).collect::<BTreeSet<_>>(),
        }
    }
}

impl WireClaim {
    /// The server resets the claim to all-`null` fields instead of omitting it.
    fn into_claim(self) -> Option<Claim> {
        Some(Claim {
            claimant_id: self.player?,
            claimant_name: self.player_name.filter(|name| !name.is_empty()),
            claimed_rank: self.claimed_card_type,
            claimed_count: self.claimed_amount.unwrap_or(0),
        })
    }
}

impl From<WireRevealed> for RevealedInfo {
    fn from(wire: WireRevealed) -> Self {
        Self {
            is_revealed: wire.is_revealed.unwrap_or(false),
            outcome_message: wire.outcome_message.unwrap_or_default(),
            dice_outcome: wire.dice_roll_outcome.and_then(|dice| {
                Some(DiceOutcome {
                    face: dice.face.value()?,
                    is_loss: dice.is_loss,
                })
            }),
            actual_cards: wire.actual_cards.unwrap_or_default(),
            player_to_roll_dice: wire.player_to_roll_dice,
            claimer_name: wire.claimer_name,
            claim_was_true: wire.claim_was_true,
        }
    }
}
