use game_core::{ActionKind, ClientRequest, LobbyCode, Phase, PlayerEliminated, PlayerId, Rank};
use runtime::{ClientSession, RecordingTransport, SessionEvent};
use serde_json::{Value, json};

const LOBBY: &str = "ABCD";

fn frame(event: &str, data: Value) -> String {
    json!({"event": event, "data": data}).to_string()
}

/// A two-player snapshot in the server's own format.
fn state(phase: &str, turn: &str, my_hand: &[&str], me_alive: bool, rival_alive: bool) -> Value {
    json!({
        "players": [
            {
                "id": "me", "name": "Me", "hand": my_hand, "alive": me_alive,
                "diceRollAttempts": 0, "mysticDice": {"rolledNumbers": []}
            },
            {
                "id": "rival", "name": "Rival", "hand": [], "alive": rival_alive,
                "diceRollAttempts": 1, "mysticDice": {"rolledNumbers": ["2"]}
            }
        ],
        "currentTurn": turn,
        "phase": phase,
        "deckType": ["Koning"],
        "lastClaimDetails": {
            "player": null, "playerName": null, "claimedCardType": null, "claimedAmount": null
        },
        "revealedCardsInfo": null,
        "log": ["Game started"]
    })
}

fn update(snapshot: Value) -> String {
    frame("game_state_update", snapshot)
}

fn session() -> ClientSession<RecordingTransport> {
    ClientSession::new(
        PlayerId::from("me"),
        Some(LobbyCode::new(LOBBY)),
        RecordingTransport::new(),
    )
}

fn eliminations(events: &[SessionEvent]) -> Vec<&PlayerEliminated> {
    events
        .iter()
        .filter_map(|event| match event {
            SessionEvent::PlayerEliminated(eliminated) => Some(eliminated),
            _ => None,
        })
        .collect()
}

fn rejection(events: &[SessionEvent]) -> Option<&str> {
    events.iter().find_map(|event| match event {
        SessionEvent::Rejected { reason } => Some(reason.as_str()),
        _ => None,
    })
}

#[test]
fn elimination_fires_once_and_closes_the_stale_turn() {
    let mut session = session();
    let hand = ["Koning", "Boer"];

    let first = session.apply_frame(&update(state("awaitingPlay", "me", &hand, true, true)));
    assert!(eliminations(&first).is_empty());
    assert!(session.actions().make_play.visible);

    let second = session.apply_frame(&update(state("awaitingPlay", "me", &hand, false, true)));
    assert_eq!(
        eliminations(&second),
        vec![&PlayerEliminated {
            player: PlayerId::from("me"),
            name: "Me".into(),
        }]
    );

    let actions = session.actions();
    for action in actions.turn_actions() {
        assert!(!action.is_available());
    }

    let again = session.apply_frame(&update(state("awaitingPlay", "me", &hand, false, true)));
    assert!(eliminations(&again).is_empty());
}

#[test]
fn first_snapshot_with_dead_players_never_fires() {
    let mut session = session();

    let events = session.apply_frame(&update(state("awaitingPlay", "rival", &[], false, false)));

    assert!(eliminations(&events).is_empty());
    assert_eq!(
        events.last(),
        Some(&SessionEvent::SnapshotApplied {
            phase: Phase::AwaitingPlay
        })
    );
}

#[test]
fn reconcile_keeps_only_the_selection_still_in_hand() {
    let mut session = session();
    session.apply_frame(&update(state(
        "awaitingPlay",
        "me",
        &["Koning", "Koningin", "Boer"],
        true,
        true,
    )));
    session.toggle_card(0);
    session.toggle_card(2);
    assert_eq!(session.selection().len(), 2);

    let events = session.apply_frame(&update(state(
        "awaitingPlay",
        "me",
        &["Koningin", "Boer"],
        true,
        true,
    )));

    assert!(events.contains(&SessionEvent::SelectionChanged { selected: 1 }));
    assert_eq!(session.selection().cards(), vec![Rank::Jack]);
}

#[test]
fn play_sends_selected_cards_and_clears_selection() {
    let mut session = session();
    session.apply_frame(&update(state("awaitingPlay", "me", &["Joker", "Koning"], true, true)));

    session.toggle_card(1);
    session.toggle_card(0);
    assert!(session.actions().make_play.is_available());

    let events = session.perform(ActionKind::MakePlay);

    let expected = ClientRequest::MakePlay {
        lobby_code: LobbyCode::new(LOBBY),
        cards_played: vec![Rank::King, Rank::Joker],
    };
    assert_eq!(events[0], SessionEvent::RequestSent(expected.clone()));
    assert_eq!(session.transport().sent(), &[expected]);
    assert!(session.selection().is_empty());
}

#[test]
fn play_without_selection_asks_for_a_card() {
    let mut session = session();
    session.apply_frame(&update(state("awaitingPlay", "me", &["Koning"], true, true)));

    let events = session.perform(ActionKind::MakePlay);

    assert_eq!(rejection(&events), Some("Select at least 1 card to play."));
    assert!(session.transport().sent().is_empty());
}

#[test]
fn toggling_out_of_turn_is_refused_with_a_notice() {
    let mut session = session();
    session.apply_frame(&update(state("awaitingPlay", "rival", &["Koning"], true, true)));

    let events = session.toggle_card(0);

    assert_eq!(rejection(&events), Some("it is not your turn"));
    assert!(session.selection().is_empty());
}

#[test]
fn own_claim_hides_challenge_and_refuses_liar_call() {
    let mut session = session();
    let mut snapshot = state("awaitingLiarCall", "me", &["Koning"], true, true);
    snapshot["lastClaimDetails"] = json!({
        "player": "me", "playerName": "Me", "claimedCardType": "Koning", "claimedAmount": 1
    });
    session.apply_frame(&update(snapshot));

    let actions = session.actions();
    assert!(!actions.believe_claim.visible);
    assert!(!actions.call_liar.visible);

    let events = session.perform(ActionKind::CallLiar);
    assert!(rejection(&events).is_some());
    assert!(session.transport().sent().is_empty());
}

#[test]
fn rival_claim_offers_named_answers() {
    let mut session = session();
    let mut snapshot = state("awaitingLiarCall", "me", &["Koning"], true, true);
    snapshot["lastClaimDetails"] = json!({
        "player": "rival", "playerName": "Rival", "claimedCardType": "Koning", "claimedAmount": 2
    });
    session.apply_frame(&update(snapshot));

    assert_eq!(
        session.actions().call_liar.label,
        "I think Rival is lying"
    );
    session.perform(ActionKind::BelieveClaim);

    assert_eq!(
        session.transport().sent(),
        &[ClientRequest::BelieveClaim {
            lobby_code: LobbyCode::new(LOBBY)
        }]
    );
}

#[test]
fn designated_roller_sends_roll_with_player_id() {
    let mut session = session();
    let mut snapshot = state("resolvingDiceRoll", "me", &["Koning"], true, true);
    snapshot["revealedCardsInfo"] = json!({
        "isRevealed": true,
        "outcomeMessage": "Me called liar and was wrong",
        "diceRollOutcome": null,
        "actualCards": ["Koning", "Joker"],
        "playerToRollDice": "me",
        "claimerName": "Rival",
        "claimWasTrue": true
    });
    session.apply_frame(&update(snapshot));

    session.perform(ActionKind::RollDice);

    assert_eq!(
        session.transport().sent(),
        &[ClientRequest::RollDice {
            lobby_code: LobbyCode::new(LOBBY),
            player_id: PlayerId::from("me"),
        }]
    );
}

#[test]
fn game_over_offers_only_restart() {
    let mut session = session();
    session.apply_frame(&update(state("awaitingPlay", "me", &["Koning"], true, true)));
    session.toggle_card(0);

    session.apply_frame(&update(state("gameOver", "me", &["Koning"], true, false)));

    let actions = session.actions();
    assert!(actions.restart.is_available());
    for action in actions.turn_actions() {
        assert!(!action.enabled);
    }
    assert!(session.selection().is_empty());

    session.perform(ActionKind::Restart);
    assert_eq!(
        session.transport().sent(),
        &[ClientRequest::RestartGameRequest {
            lobby_code: LobbyCode::new(LOBBY)
        }]
    );
}

#[test]
fn restart_resets_first_sight_rule() {
    let mut session = session();
    session.apply_frame(&update(state("awaitingPlay", "me", &[], true, true)));

    let events = session.apply_frame(&frame("game_restarted", json!({"lobbyCode": LOBBY})));
    assert_eq!(events, vec![SessionEvent::GameRestarted]);
    assert!(session.detector().is_empty());

    let events = session.apply_frame(&update(state("awaitingPlay", "me", &[], true, false)));
    assert!(eliminations(&events).is_empty());
}

#[test]
fn game_started_after_first_snapshot_keeps_alive_map() {
    let mut session = ClientSession::new(PlayerId::from("me"), None, RecordingTransport::new());

    let joined = session.apply_frame(&frame("lobby_created", json!({"lobbyCode": "QWER"})));
    assert_eq!(joined, vec![SessionEvent::LobbyJoined(LobbyCode::new("QWER"))]);

    session.apply_frame(&update(state("awaitingPlay", "rival", &[], true, true)));
    let started = session.apply_frame(&frame(
        "game_started",
        json!({"lobbyCode": "QWER", "players": [{"id": "me", "name": "Me"}]}),
    ));
    assert_eq!(
        started,
        vec![SessionEvent::GameStarted {
            lobby_code: Some(LobbyCode::new("QWER"))
        }]
    );

    let events = session.apply_frame(&update(state("awaitingPlay", "me", &[], true, false)));
    assert_eq!(eliminations(&events).len(), 1);
}

#[test]
fn game_over_event_reports_winner() {
    let mut session = session();

    let events = session.apply_frame(&frame("game_over", json!({"winner": "Rival"})));
    assert_eq!(
        events,
        vec![SessionEvent::GameOver {
            winner: Some("Rival".into())
        }]
    );

    let events = session.apply_frame(&frame("game_over", json!({"winner": "geen"})));
    assert_eq!(events, vec![SessionEvent::GameOver { winner: None }]);
}

#[test]
fn final_elimination_fires_when_game_over_precedes_the_snapshot() {
    let mut session = session();
    session.apply_frame(&update(state("resolvingDiceRoll", "rival", &["Joker"], true, true)));

    let over = session.apply_frame(&frame("game_over", json!({"winner": "Me"})));
    assert_eq!(over, vec![SessionEvent::GameOver { winner: Some("Me".into()) }]);
    assert_eq!(session.detector().last_known(&PlayerId::from("rival")), Some(true));

    let events = session.apply_frame(&update(state("gameOver", "rival", &["Joker"], true, false)));
    let fired = eliminations(&events);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].player, PlayerId::from("rival"));
    assert_eq!(fired[0].name, "Rival");
    assert!(session.detector().is_empty());

    let replay = session.apply_frame(&update(state("gameOver", "rival", &["Joker"], true, false)));
    assert!(eliminations(&replay).is_empty());
}

#[test]
fn bad_frames_keep_the_last_snapshot() {
    let mut session = session();
    session.apply_frame(&update(state("awaitingPlay", "me", &["Koning"], true, true)));

    assert!(session.apply_frame("{not json").is_empty());
    assert!(session.apply_frame(&frame("name_set", json!({"name": "Me"}))).is_empty());
    assert!(
        session
            .apply_frame(&update(json!({"players": [], "currentTurn": null})))
            .is_empty()
    );

    let snapshot = session.snapshot().unwrap();
    assert_eq!(snapshot.phase, Phase::AwaitingPlay);
    assert_eq!(snapshot.hand_of(&PlayerId::from("me")), &[Rank::King]);
}

#[test]
fn missing_local_player_means_no_actions() {
    let mut session = ClientSession::new(
        PlayerId::from("ghost"),
        Some(LobbyCode::new(LOBBY)),
        RecordingTransport::new(),
    );
    session.apply_frame(&update(state("awaitingPlay", "ghost", &[], true, true)));

    assert_eq!(session.actions(), game_core::PermittedActions::idle());
    assert!(rejection(&session.toggle_card(0)).is_some());
}

#[test]
fn actions_need_a_lobby() {
    let mut session = ClientSession::new(PlayerId::from("me"), None, RecordingTransport::new());
    session.apply_frame(&update(state("gameOver", "me", &[], true, true)));

    let events = session.perform(ActionKind::Restart);

    assert_eq!(rejection(&events), Some("not in a lobby yet"));
    assert!(session.transport().sent().is_empty());
}

#[test]
fn server_errors_and_chat_pass_through_verbatim() {
    let mut session = session();

    let events = session.apply_frame(&frame(
        "error_message",
        json!({"message": "Het is niet jouw beurt."}),
    ));
    assert_eq!(
        events,
        vec![SessionEvent::ServerError {
            message: "Het is niet jouw beurt.".into()
        }]
    );

    let events = session.apply_frame(&frame("chat_message", json!({"message": "Rival: hoi"})));
    assert_eq!(
        events,
        vec![SessionEvent::Chat {
            message: "Rival: hoi".into()
        }]
    );

    let events = session.chat("hallo");
    assert!(matches!(events.as_slice(), [SessionEvent::RequestSent(_)]));
}
