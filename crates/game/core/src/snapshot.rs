//! The authoritative game snapshot pushed by the server.
//!
//! A [`GameSnapshot`] is delivered wholesale after every state-changing action
//! and replaces whatever the client held before. It is never patched locally;
//! every derived value (permitted actions, selection validity, elimination
//! edges) is recomputed from the latest snapshot.
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rank::Rank;
use crate::wire::WireSnapshot;

/// Stable player identifier, unique within a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Stage of the per-turn protocol. Only the server moves between phases.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "title_case")]
pub enum Phase {
    /// The current player must lay down cards and make a claim.
    AwaitingPlay,
    /// The current player must believe or challenge the last claim.
    #[serde(rename = "awaitingLiarCall", alias = "awaitingChallenge")]
    AwaitingChallenge,
    /// A challenge was resolved and the loser must roll the dice.
    ResolvingDiceRoll,
    GameOver,
}

/// A seat in the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub alive: bool,
    /// Real values only for the receiving client's own seat.
    pub hand: Vec<Rank>,
    pub dice_roll_attempts: u32,
    /// Dice faces (1..=6) this player has already rolled this game.
    pub rolled_faces: BTreeSet<u8>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            alive: true,
            hand: Vec::new(),
            dice_roll_attempts: 0,
            rolled_faces: BTreeSet::new(),
        }
    }

    pub fn with_hand(mut self, hand: impl IntoIterator<Item = Rank>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }

    pub fn with_alive(mut self, alive: bool) -> Self {
        self.alive = alive;
        self
    }
}

/// The most recent claim made with face-down cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    pub claimant_id: PlayerId,
    /// `None` when the server did not include a display name.
    pub claimant_name: Option<String>,
    pub claimed_rank: Option<Rank>,
    pub claimed_count: u32,
}

impl Claim {
    pub fn new(claimant_id: impl Into<String>, claimant_name: impl Into<String>) -> Self {
        Self {
            claimant_id: PlayerId::new(claimant_id),
            claimant_name: Some(claimant_name.into()),
            claimed_rank: None,
            claimed_count: 0,
        }
    }

    pub fn claiming(mut self, rank: Rank, count: u32) -> Self {
        self.claimed_rank = Some(rank);
        self.claimed_count = count;
        self
    }
}

/// Result of the penalty dice roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiceOutcome {
    /// Always within 1..=6.
    pub face: u8,
    pub is_loss: bool,
}

/// What a challenge resolution revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealedInfo {
    pub is_revealed: bool,
    pub outcome_message: String,
    pub dice_outcome: Option<DiceOutcome>,
    pub actual_cards: Vec<Rank>,
    pub player_to_roll_dice: Option<PlayerId>,
    pub claimer_name: Option<String>,
    pub claim_was_true: Option<bool>,
}

/// Complete server-authoritative description of a game at one point in time.
///
/// Deserializes from the server's `game_state_update` payload; see the
/// `wire` module for the accepted field names and defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "WireSnapshot")]
pub struct GameSnapshot {
    /// Turn order, preserved exactly as received.
    pub players: Vec<Player>,
    pub current_turn: Option<PlayerId>,
    pub phase: Phase,
    pub center_card: Option<Rank>,
    pub last_claim: Option<Claim>,
    pub revealed: Option<RevealedInfo>,
    /// Server-maintained event log, replaced wholesale each snapshot.
    pub log: Vec<String>,
}

impl GameSnapshot {
    pub fn new(phase: Phase) -> Self {
        Self {
            players: Vec::new(),
            current_turn: None,
            phase,
            center_card: None,
            last_claim: None,
            revealed: None,
            log: Vec::new(),
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    pub fn with_turn(mut self, id: impl Into<String>) -> Self {
        self.current_turn = Some(PlayerId::new(id));
        self
    }

    pub fn with_center_card(mut self, rank: Rank) -> Self {
        self.center_card = Some(rank);
        self
    }

    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.last_claim = Some(claim);
        self
    }

    pub fn with_revealed(mut self, revealed: RevealedInfo) -> Self {
        self.revealed = Some(revealed);
        self
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == id)
    }

    /// Hand of the given player, empty when the player is not seated.
    pub fn hand_of(&self, id: &PlayerId) -> &[Rank] {
        self.player(id)
            .map(|player| player.hand.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_turn_of(&self, id: &PlayerId) -> bool {
        self.current_turn.as_ref() == Some(id)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_turn.as_ref().and_then(|id| self.player(id))
    }

    /// The player who must roll, if a dice roll is pending.
    pub fn player_to_roll(&self) -> Option<&PlayerId> {
        self.revealed
            .as_ref()
            .and_then(|revealed| revealed.player_to_roll_dice.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_server_payload() {
        let payload = json!({
            "lobbyCode": "ABCD",
            "deckType": ["Koningin"],
            "players": [
                {
                    "id": "sid-1",
                    "name": "Ada",
                    "hand": ["Boer", "Joker", "Koning"],
                    "alive": true,
                    "mysticDice": {"totalSides": 6, "remainingSafeSides": 6, "rolledNumbers": ["2", "5"]},
                    "diceRollAttempts": 2
                },
                {
                    "id": "sid-2",
                    "name": "Bo",
                    "hand": [],
                    "alive": false,
                    "mysticDice": {"totalSides": 6, "remainingSafeSides": 6, "rolledNumbers": []},
                    "diceRollAttempts": 0
                }
            ],
            "turnOrder": ["sid-2", "sid-1"],
            "currentTurn": "sid-1",
            "pile": [],
            "actualPileCards": [],
            "lastClaimDetails": {
                "player": "sid-2",
                "playerName": "Bo",
                "claimedCardType": "Koningin",
                "claimedAmount": 2,
                "actualCardsPlayed": []
            },
            "revealedCardsInfo": {
                "isRevealed": false,
                "claimerId": null,
                "claimerName": null,
                "actualCards": [],
                "claimWasTrue": null,
                "playerToRollDice": null,
                "outcomeMessage": null,
                "diceRollOutcome": null
            },
            "phase": "awaitingLiarCall",
            "log": ["Spel gestart in lobby ABCD!"]
        });

        let snapshot: GameSnapshot = serde_json::from_value(payload).unwrap();

        assert_eq!(snapshot.phase, Phase::AwaitingChallenge);
        assert_eq!(snapshot.center_card, Some(Rank::Queen));
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.players[0].id, PlayerId::from("sid-1"));
        assert_eq!(
            snapshot.players[0].hand,
            vec![Rank::Jack, Rank::Joker, Rank::King]
        );
        assert_eq!(snapshot.players[0].dice_roll_attempts, 2);
        assert_eq!(
            snapshot.players[0].rolled_faces.iter().copied().collect::<Vec<_>>(),
            vec![2, 5]
        );
        assert!(!snapshot.players[1].alive);
        assert!(snapshot.is_turn_of(&PlayerId::from("sid-1")));

        let claim = snapshot.last_claim.as_ref().unwrap();
        assert_eq!(claim.claimant_id, PlayerId::from("sid-2"));
        assert_eq!(claim.claimant_name.as_deref(), Some("Bo"));
        assert_eq!(claim.claimed_rank, Some(Rank::Queen));
        assert_eq!(claim.claimed_count, 2);

        let revealed = snapshot.revealed.as_ref().unwrap();
        assert!(!revealed.is_revealed);
        assert_eq!(revealed.dice_outcome, None);
        assert_eq!(snapshot.log.len(), 1);
    }

    #[test]
    fn claim_without_claimant_is_absent() {
        let snapshot: GameSnapshot = serde_json::from_value(json!({
            "phase": "awaitingPlay",
            "players": [],
            "lastClaimDetails": {
                "player": null,
                "playerName": null,
                "claimedCardType": null,
                "claimedAmount": null,
                "actualCardsPlayed": []
            }
        }))
        .unwrap();

        assert_eq!(snapshot.last_claim, None);
        assert_eq!(snapshot.current_turn, None);
        assert_eq!(snapshot.revealed, None);
    }

    #[test]
    fn accepts_model_field_names() {
        let snapshot: GameSnapshot = serde_json::from_value(json!({
            "phase": "awaitingChallenge",
            "currentTurnPlayerId": "p2",
            "centerCardRank": "King",
            "players": [
                {"id": "p1", "name": "Ada", "alive": true, "mysticDiceRolledFaces": [1, 9, 3]},
                {"id": "p2", "name": "Bo", "alive": true}
            ],
            "lastClaim": {"claimantId": "p1", "claimantName": "Ada", "claimedRank": "King", "claimedCount": 1},
            "revealedInfo": {
                "isRevealed": true,
                "outcomeMessage": "Ada lied",
                "diceOutcome": {"face": 4, "isLoss": false},
                "actualCards": ["Queen"],
                "playerToRollDice": "p1"
            }
        }))
        .unwrap();

        assert_eq!(snapshot.center_card, Some(Rank::King));
        assert!(snapshot.is_turn_of(&PlayerId::from("p2")));
        assert_eq!(
            snapshot.players[0].rolled_faces.iter().copied().collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(snapshot.last_claim.unwrap().claimant_id, PlayerId::from("p1"));
        let revealed = snapshot.revealed.unwrap();
        assert_eq!(
            revealed.dice_outcome,
            Some(DiceOutcome {
                face: 4,
                is_loss: false
            })
        );
        assert_eq!(revealed.player_to_roll_dice, Some(PlayerId::from("p1")));
    }

    #[test]
    fn dice_face_out_of_range_is_dropped() {
        let snapshot: GameSnapshot = serde_json::from_value(json!({
            "phase": "awaitingPlay",
            "revealedCardsInfo": {"isRevealed": true, "diceRollOutcome": {"face": "7", "isLoss": true}}
        }))
        .unwrap();

        assert_eq!(snapshot.revealed.unwrap().dice_outcome, None);
    }

    #[test]
    fn missing_phase_is_an_error() {
        let result = serde_json::from_value::<GameSnapshot>(json!({"players": []}));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_phase_is_an_error() {
        let result = serde_json::from_value::<GameSnapshot>(json!({"phase": "lobby"}));
        assert!(result.is_err());
    }

    #[test]
    fn hand_of_absent_player_is_empty() {
        let snapshot = GameSnapshot::new(Phase::AwaitingPlay)
            .with_player(Player::new("p1", "Ada").with_hand([Rank::King]));

        assert_eq!(snapshot.hand_of(&PlayerId::from("p1")), &[Rank::King]);
        assert!(snapshot.hand_of(&PlayerId::from("ghost")).is_empty());
    }
}
