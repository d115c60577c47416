//! Which actions the local player may take in the current snapshot.
//!
//! [`ActionGate::evaluate`] is a pure function of the snapshot, the local
//! player's identity and the current selection. It is re-run for every
//! snapshot and every input; its output is never cached, so an action that
//! became illegal on the server can never stay enabled locally.
use crate::error::ActionRejected;
use crate::selection::SelectionStore;
use crate::snapshot::{GameSnapshot, Phase, PlayerId};

const MAKE_PLAY_LABEL: &str = "Play selected cards";
const BELIEVE_LABEL: &str = "Believe the claim";
const CALL_LIAR_LABEL: &str = "Call liar";
const ROLL_DICE_LABEL: &str = "Roll the dice";
const RESTART_LABEL: &str = "Play again";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    MakePlay,
    BelieveClaim,
    CallLiar,
    RollDice,
    Restart,
}

/// How one action should be presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionState {
    pub visible: bool,
    pub enabled: bool,
    pub label: String,
}

impl ActionState {
    fn hidden(label: impl Into<String>) -> Self {
        Self {
            visible: false,
            enabled: false,
            label: label.into(),
        }
    }

    fn shown(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            visible: true,
            enabled,
            label: label.into(),
        }
    }

    /// Visible and enabled.
    pub fn is_available(&self) -> bool {
        self.visible && self.enabled
    }
}

/// Presentation of every action for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermittedActions {
    pub make_play: ActionState,
    pub believe_claim: ActionState,
    pub call_liar: ActionState,
    pub roll_dice: ActionState,
    pub restart: ActionState,
}

impl PermittedActions {
    /// Nothing offered; used when there is no snapshot or no local seat.
    pub fn idle() -> Self {
        Self {
            make_play: ActionState::hidden(MAKE_PLAY_LABEL),
            believe_claim: ActionState::hidden(BELIEVE_LABEL),
            call_liar: ActionState::hidden(CALL_LIAR_LABEL),
            roll_dice: ActionState::hidden(ROLL_DICE_LABEL),
            restart: ActionState::hidden(RESTART_LABEL),
        }
    }

    pub fn get(&self, kind: ActionKind) -> &ActionState {
        match kind {
            ActionKind::MakePlay => &self.make_play,
            ActionKind::BelieveClaim => &self.believe_claim,
            ActionKind::CallLiar => &self.call_liar,
            ActionKind::RollDice => &self.roll_dice,
            ActionKind::Restart => &self.restart,
        }
    }

    pub fn check(&self, kind: ActionKind) -> Result<(), ActionRejected> {
        if self.get(kind).is_available() {
            Ok(())
        } else {
            Err(ActionRejected::Unavailable { action: kind })
        }
    }

    /// The four per-turn actions, without `restart`.
    pub fn turn_actions(&self) -> [&ActionState; 4] {
        [
            &self.make_play,
            &self.believe_claim,
            &self.call_liar,
            &self.roll_dice,
        ]
    }
}

pub struct ActionGate;

impl ActionGate {
    pub fn evaluate(
        snapshot: &GameSnapshot,
        local: &PlayerId,
        selection: &SelectionStore,
    ) -> PermittedActions {
        let mut actions = PermittedActions::idle();

        if snapshot.phase == Phase::GameOver {
            actions.restart = ActionState::shown(RESTART_LABEL, true);
            return actions;
        }

        // Waiting, eliminated or unseated players have no action surface.
        let Some(player) = snapshot.player(local) else {
            return actions;
        };
        if !player.alive || !snapshot.is_turn_of(local) {
            return actions;
        }

        let has_cards = !player.hand.is_empty();
        let can_play = snapshot.phase == Phase::AwaitingPlay && has_cards && !selection.is_empty();
        actions.make_play = ActionState::shown(MAKE_PLAY_LABEL, can_play);

        match snapshot.phase {
            Phase::AwaitingPlay | Phase::GameOver => {}
            Phase::AwaitingChallenge => {
                if let Some(claim) = &snapshot.last_claim
                    && claim.claimant_id != *local
                    && has_cards
                    && let Some(name) = claim.claimant_name.as_deref()
                {
                    actions.believe_claim =
                        ActionState::shown(format!("I think {name} is telling the truth"), true);
                    actions.call_liar = ActionState::shown(format!("I think {name} is lying"), true);
                }
            }
            Phase::ResolvingDiceRoll => {
                if snapshot.player_to_roll() == Some(local) {
                    actions.roll_dice = ActionState::shown(ROLL_DICE_LABEL, true);
                }
            }
        }

        actions
    }
}
