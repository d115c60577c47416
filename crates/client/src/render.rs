//! Plain-text rendering of a [`UiFrame`].
use std::fmt::Write;

use client_frontend_core::{MessageLevel, UiFrame};
use game_core::{ActionKind, Rank};

const RULE: &str = "────────────────────────────────────────";

pub fn render(frame: &UiFrame) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_frame(&mut out, frame);
    out
}

fn write_frame(out: &mut String, frame: &UiFrame) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    let lobby = frame
        .lobby_code
        .as_ref()
        .map_or_else(|| "-".to_owned(), ToString::to_string);
    match frame.phase {
        Some(phase) => writeln!(out, "Lobby {lobby} | {phase}")?,
        None => writeln!(out, "Lobby {lobby} | waiting for the game to start")?,
    }

    if let Some(name) = &frame.overlay {
        writeln!(out, "*** {name} is OUT! ***")?;
    }

    if !frame.players.is_empty() {
        writeln!(out, "Players:")?;
        for player in &frame.players {
            let turn = if player.is_current { '>' } else { ' ' };
            let you = if player.is_local { " (you)" } else { "" };
            let status = if player.alive { "alive" } else { "dead" };
            writeln!(
                out,
                " {turn} {}{you}: {status}, {} card(s), dice {} {:?}",
                player.name, player.card_count, player.dice_roll_attempts, player.rolled_faces
            )?;
        }
    }

    if let Some(rank) = frame.center_card {
        writeln!(out, "Center card: {rank}")?;
    }
    writeln!(out, "{}", frame.claim_line)?;

    if let Some(panel) = &frame.revealed {
        writeln!(out, "Revealed: {}", panel.message)?;
        if !panel.cards.is_empty() {
            writeln!(out, "  cards: {}", join_ranks(&panel.cards))?;
        }
        if let Some(dice) = panel.dice {
            let outcome = if dice.is_loss { "lost" } else { "survived" };
            writeln!(out, "  dice: {} ({outcome})", dice.face)?;
        }
    }

    if !frame.hand.is_empty() {
        write!(out, "Hand:")?;
        for card in &frame.hand {
            let mark = if card.selected { "*" } else { "" };
            write!(out, " [{}{mark}] {}", card.index + 1, card.rank)?;
        }
        writeln!(out)?;
    }

    let actions: Vec<String> = frame
        .visible_actions()
        .map(|action| {
            let state = if action.state.enabled { "" } else { " (disabled)" };
            format!("{} {}{state}", command_for(action.kind), action.state.label)
        })
        .collect();
    if !actions.is_empty() {
        writeln!(out, "Actions: {}", actions.join(" | "))?;
    }

    if !frame.log.is_empty() {
        writeln!(out, "Log:")?;
        for line in &frame.log {
            writeln!(out, "  {line}")?;
        }
    }

    for entry in frame.chat.iter().rev() {
        writeln!(out, "chat: {}", entry.text)?;
    }

    for entry in frame.messages.iter().rev() {
        let prefix = match entry.level {
            MessageLevel::Info => "-",
            MessageLevel::Warning => "!",
            MessageLevel::Error => "x",
        };
        if entry.count > 1 {
            writeln!(out, "{prefix} {} (x{})", entry.text, entry.count)?;
        } else {
            writeln!(out, "{prefix} {}", entry.text)?;
        }
    }

    Ok(())
}

fn command_for(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::MakePlay => "/play",
        ActionKind::BelieveClaim => "/believe",
        ActionKind::CallLiar => "/liar",
        ActionKind::RollDice => "/roll",
        ActionKind::Restart => "/restart",
    }
}

fn join_ranks(ranks: &[Rank]) -> String {
    ranks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
