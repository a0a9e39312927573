//! End-to-end tournament flow over the line protocol.

use tourney_bots::{
    Bot, BotKind, BotSettings, PokerBot, Response, Session,
    bot::AdaptiveKnobs,
    game::PlayerAction,
};

fn get_action_line(round: &str, legal: &str, category: Option<&str>) -> String {
    let category = category
        .map(|c| format!(r#","hand_category":"{c}""#))
        .unwrap_or_default();
    let board = match round {
        "preflop" => "[]",
        "flop" => r#"["Ah","7c","2d"]"#,
        "turn" => r#"["Ah","7c","2d","9s"]"#,
        _ => r#"["Ah","7c","2d","9s","Kh"]"#,
    };
    format!(
        r#"{{"type":"get_action","state":{{"round_name":"{round}","pot":240,"current_bet":40,"big_blind":20,"player_bets":{{"hero":0}},"active_players":["hero","villain","third"],"current_player":"hero","community_cards":{board}}},"hole_cards":["As","Ad"],"legal_actions":{legal},"min_bet":80,"max_bet":1500{category}}}"#
    )
}

fn parse(reply: &str) -> Response {
    serde_json::from_str(reply).unwrap()
}

#[test]
fn test_full_tournament_over_protocol() {
    let bot = Bot::from_kind(BotKind::Hybrid, "hero", &BotSettings::default(), Some(2024));
    let mut session = Session::new(bot);

    let start = r#"{"type":"tournament_start","players":["hero","villain","third"],
        "starting_chips":1500}"#;
    assert_eq!(parse(&session.handle_line(start)), Response::Ack);

    for hand in 0..20 {
        for (round, category) in [
            ("preflop", None),
            ("flop", Some("three_of_a_kind")),
            ("turn", Some("three_of_a_kind")),
            ("river", Some("three_of_a_kind")),
        ] {
            let line = get_action_line(round, r#"["fold","call","raise"]"#, category);
            let Response::Action(decision) = parse(&session.handle_line(&line)) else {
                panic!("expected an action for {round}");
            };
            assert_ne!(decision.action, PlayerAction::Check);
            if decision.action == PlayerAction::Raise {
                assert!((80..=1500).contains(&decision.amount));
            }
            if round != "preflop" {
                // Trips raise the pot.
                assert_eq!(decision.action, PlayerAction::Raise);
                assert_eq!(decision.amount, 240);
            }
        }

        let winner = if hand % 2 == 0 { "hero" } else { "villain" };
        let complete = format!(
            r#"{{"type":"hand_complete","state":{{"round_name":"river","pot":480,"current_bet":0,"big_blind":20}},"result":{{"winners":["{winner}"],"pot":480}}}}"#
        );
        assert_eq!(parse(&session.handle_line(&complete)), Response::Ack);
    }

    let end =
        r#"{"type":"tournament_end","standings":[{"name":"hero","chips":4500,"placement":1}]}"#;
    assert_eq!(parse(&session.handle_line(end)), Response::Ack);

    let stats = session.bot().stats();
    assert_eq!(stats.hands_played, 20);
    assert_eq!(stats.hands_won, 10);
    assert!(stats.aggressive_actions >= 60);
}

#[test]
fn test_errors_do_not_end_the_session() {
    let mut session = Session::new(Bot::from_kind(
        BotKind::Random,
        "hero",
        &BotSettings::default(),
        Some(1),
    ));

    assert!(matches!(parse(&session.handle_line("{")), Response::Error { .. }));
    assert!(matches!(
        parse(&session.handle_line(&get_action_line("river", r#"["check","fold"]"#, None))),
        Response::Error { .. }
    ));

    let Response::Action(decision) =
        parse(&session.handle_line(&get_action_line("river", r#"["check"]"#, Some("pair"))))
    else {
        panic!("expected an action");
    };
    assert_eq!(decision.action, PlayerAction::Check);
}

#[test]
fn test_tight_settings_fold_everything_preflop() {
    let settings = BotSettings {
        initial_knobs: AdaptiveKnobs::new(0.5, 0.0),
        ..Default::default()
    };
    let mut session = Session::new(Bot::from_kind(BotKind::Hybrid, "hero", &settings, None));

    for _ in 0..50 {
        let line = get_action_line("preflop", r#"["fold","call","raise"]"#, None);
        assert_eq!(
            parse(&session.handle_line(&line)),
            Response::Action(tourney_bots::game::Decision::fold())
        );
    }
}
