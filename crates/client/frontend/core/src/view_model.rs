//! View-model snapshot derived from a [`ClientSession`].
//!
//! Rendering layers read a [`UiFrame`] and nothing else; they never touch the
//! selection or the alive map directly.
use game_core::{
    ActionKind, ActionState, CardSlot, Claim, DiceOutcome, GameSnapshot, LobbyCode, Phase, PlayerId,
    Rank, RevealedInfo,
};
use runtime::{ClientSession, Transport};

use crate::config::FrontendConfig;
use crate::consumer::FrontendState;
use crate::event::EventConsumer;
use crate::message::{MessageEntry, MessageLog};

/// High-level snapshot of the table used by presentation layers.
#[derive(Clone, Debug)]
pub struct UiFrame {
    pub lobby_code: Option<LobbyCode>,
    pub phase: Option<Phase>,
    pub players: Vec<PlayerRow>,
    pub center_card: Option<Rank>,
    pub claim_line: String,
    pub revealed: Option<RevealedPanel>,
    pub hand: Vec<HandCard>,
    /// The four turn actions followed by `restart`.
    pub actions: Vec<ActionView>,
    pub log: Vec<String>,
    pub chat: Vec<MessageEntry>,
    pub messages: Vec<MessageEntry>,
    pub overlay: Option<String>,
}

impl UiFrame {
    pub fn from_session<T: Transport>(
        session: &ClientSession<T>,
        state: &FrontendState,
        config: &FrontendConfig,
    ) -> Self {
        let local = session.local_player();
        let snapshot = session.snapshot();
        let actions = session.actions();

        Self {
            lobby_code: session.lobby_code().cloned(),
            phase: snapshot.map(|snapshot| snapshot.phase),
            players: snapshot
                .map(|snapshot| PlayerRow::collect(snapshot, local))
                .unwrap_or_default(),
            center_card: snapshot.and_then(|snapshot| snapshot.center_card),
            claim_line: claim_line(snapshot.and_then(|snapshot| snapshot.last_claim.as_ref())),
            revealed: snapshot
                .and_then(|snapshot| snapshot.revealed.as_ref())
                .and_then(RevealedPanel::from_info),
            hand: snapshot
                .map(|snapshot| HandCard::collect(snapshot.hand_of(local), session))
                .unwrap_or_default(),
            actions: [
                ActionKind::MakePlay,
                ActionKind::BelieveClaim,
                ActionKind::CallLiar,
                ActionKind::RollDice,
                ActionKind::Restart,
            ]
            .into_iter()
            .map(|kind| ActionView {
                kind,
                state: actions.get(kind).clone(),
            })
            .collect(),
            log: snapshot
                .map(|snapshot| tail(&snapshot.log, config.view.log_lines))
                .unwrap_or_default(),
            chat: collect_messages(state.chat(), config.view.log_lines),
            messages: collect_messages(state.message_log(), config.messages.visible),
            overlay: state.overlay().current().map(str::to_owned),
        }
    }

    /// Actions a renderer should draw.
    pub fn visible_actions(&self) -> impl Iterator<Item = &ActionView> {
        self.actions.iter().filter(|action| action.state.visible)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRow {
    pub id: PlayerId,
    pub name: String,
    pub alive: bool,
    pub is_current: bool,
    pub is_local: bool,
    pub card_count: usize,
    pub dice_roll_attempts: u32,
    pub rolled_faces: Vec<u8>,
}

impl PlayerRow {
    fn collect(snapshot: &GameSnapshot, local: &PlayerId) -> Vec<Self> {
        snapshot
            .players
            .iter()
            .map(|player| Self {
                id: player.id.clone(),
                name: player.name.clone(),
                alive: player.alive,
                is_current: snapshot.is_turn_of(&player.id),
                is_local: &player.id == local,
                card_count: player.hand.len(),
                dice_roll_attempts: player.dice_roll_attempts,
                rolled_faces: player.rolled_faces.iter().copied().collect(),
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandCard {
    pub index: usize,
    pub rank: Rank,
    pub selected: bool,
}

impl HandCard {
    fn collect<T: Transport>(hand: &[Rank], session: &ClientSession<T>) -> Vec<Self> {
        hand.iter()
            .enumerate()
            .map(|(index, rank)| Self {
                index,
                rank: *rank,
                selected: CardSlot::at(hand, index)
                    .is_some_and(|slot| session.selection().contains(&slot)),
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealedPanel {
    pub message: String,
    pub dice: Option<DiceOutcome>,
    pub cards: Vec<Rank>,
    pub claimer_name: Option<String>,
    pub claim_was_true: Option<bool>,
}

impl RevealedPanel {
    fn from_info(info: &RevealedInfo) -> Option<Self> {
        info.is_revealed.then(|| Self {
            message: info.outcome_message.clone(),
            dice: info.dice_outcome,
            cards: info.actual_cards.clone(),
            claimer_name: info.claimer_name.clone(),
            claim_was_true: info.claim_was_true,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionView {
    pub kind: ActionKind,
    pub state: ActionState,
}

fn claim_line(claim: Option<&Claim>) -> String {
    let Some(claim) = claim else {
        return "No claims yet.".to_owned();
    };

    let name = claim
        .claimant_name
        .as_deref()
        .unwrap_or(claim.claimant_id.as_str());
    match claim.claimed_rank {
        Some(rank) => format!("{name} claimed: {} {rank}(s)", claim.claimed_count),
        None => format!("{name} claimed: {} card(s)", claim.claimed_count),
    }
}

fn tail(lines: &[String], limit: usize) -> Vec<String> {
    let start = lines.len().saturating_sub(limit);
    lines[start..].to_vec()
}

fn collect_messages(messages: &MessageLog, limit: usize) -> Vec<MessageEntry> {
    messages.recent(limit).cloned().collect()
}
