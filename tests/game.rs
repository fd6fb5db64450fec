//! Game integration tests.

use truco::{
    Card, CardError, DECK_SIZE, Game, GameOptions, GameState, HandPhase, IdProvider,
    IdentityError, Outcome, PlayError, Player, PlayerError, PlayerId, RandomIds, Rank,
    RosterError, Seat, Suit, default_deck, shuffled_deck,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn card(code: &str) -> Card {
    code.parse().unwrap()
}

fn cards(codes: &[&str]) -> Vec<Card> {
    codes.iter().map(|code| card(code)).collect()
}

/// A started game with two seated players.
fn started_game(options: GameOptions) -> (Game, PlayerId, PlayerId) {
    init_logging();
    let mut ids = RandomIds::seeded(options.seed.first ^ options.seed.second);
    let mut game = Game::new(options, &mut ids).unwrap();
    let p1 = Player::new("player 1", &mut ids).unwrap();
    let p2 = Player::new("player 2", &mut ids).unwrap();
    let (id1, id2) = (p1.id().clone(), p2.id().clone());
    game.add_player(p1).unwrap();
    game.add_player(p2).unwrap();
    game.start().unwrap();
    (game, id1, id2)
}

fn seeded_game(seed1: u64, seed2: u64) -> (Game, PlayerId, PlayerId) {
    started_game(GameOptions::default().with_seed(seed1, seed2))
}

fn held(game: &Game, seat: Seat) -> Vec<Card> {
    game.player(seat).unwrap().cards().to_vec()
}

struct FailingIds;

impl IdProvider for FailingIds {
    fn next_id(&mut self) -> Result<String, IdentityError> {
        Err(IdentityError("entropy unavailable".into()))
    }
}

#[test]
fn card_codes_round_trip_and_map_to_glyphs() {
    let three_hearts = Card::new(Suit::Hearts, Rank::Three);
    assert_eq!(card("B3"), three_hearts);
    assert_eq!(three_hearts.to_string(), "B3");
    assert_eq!(three_hearts.unicode(), '\u{1F0B3}');
    assert_eq!(card("DE").unicode(), '\u{1F0DE}');
    assert_eq!(card("AB").unicode(), '\u{1F0AB}');

    assert_eq!("B".parse::<Card>(), Err(CardError::InvalidLength));
    assert_eq!("B33".parse::<Card>(), Err(CardError::InvalidLength));
    assert_eq!("E3".parse::<Card>(), Err(CardError::UnknownSuit('E')));
    assert_eq!("B8".parse::<Card>(), Err(CardError::UnknownRank('8')));
}

#[test]
fn seeded_shuffle_is_a_reproducible_permutation() {
    let deck = shuffled_deck(123, 456);
    assert_eq!(deck, shuffled_deck(123, 456));
    assert_ne!(deck, shuffled_deck(123, 457));

    let mut sorted = deck.to_vec();
    sorted.sort_by_key(|c| c.index());
    sorted.dedup();
    assert_eq!(sorted.len(), DECK_SIZE);
    assert_eq!(sorted, default_deck());
}

#[test]
fn player_name_length_is_validated() {
    let mut ids = RandomIds::seeded(3);
    assert_eq!(
        Player::new("a", &mut ids).unwrap_err(),
        PlayerError::NameTooShort
    );
    assert_eq!(
        Player::new("a".repeat(101), &mut ids).unwrap_err(),
        PlayerError::NameTooLong
    );
    assert!(Player::new("ab", &mut ids).is_ok());
    assert!(Player::new("a".repeat(100), &mut ids).is_ok());
    // Counted in characters, not bytes.
    assert!(Player::new("é".repeat(100), &mut ids).is_ok());
}

#[test]
fn identity_failures_propagate() {
    let err = Game::new(GameOptions::default(), &mut FailingIds).unwrap_err();
    assert_eq!(err, IdentityError("entropy unavailable".into()));

    assert!(matches!(
        Player::new("player 1", &mut FailingIds),
        Err(PlayerError::Identity(_))
    ));
}

#[test]
fn roster_rules() {
    let mut ids = RandomIds::seeded(5);
    let mut game = Game::new(GameOptions::default(), &mut ids).unwrap();
    let p1 = Player::new("player 1", &mut ids).unwrap();
    let p2 = Player::new("player 2", &mut ids).unwrap();
    let p3 = Player::new("player 3", &mut ids).unwrap();

    assert_eq!(game.start(), Err(RosterError::NotEnoughPlayers));

    assert_eq!(game.add_player(p1.clone()), Ok(Seat::First));
    assert_eq!(
        game.add_player(p1.clone()),
        Err(RosterError::PlayerAlreadyInGame)
    );
    assert_eq!(game.add_player(p2.clone()), Ok(Seat::Second));
    assert_eq!(game.add_player(p3.clone()), Err(RosterError::GameFull));

    assert_eq!(
        game.remove_player(p3.id()),
        Err(RosterError::PlayerNotFound)
    );
    assert_eq!(game.remove_player(p1.id()), Ok(p1));

    // The second player keeps their seat.
    assert!(game.player(Seat::First).is_none());
    assert_eq!(game.player(Seat::Second), Some(&p2));
    assert_eq!(game.start(), Err(RosterError::NotEnoughPlayers));

    assert_eq!(game.add_player(p3), Ok(Seat::First));
    assert_eq!(game.start(), Ok(()));
    assert_eq!(game.start(), Err(RosterError::AlreadyStarted));
}

#[test]
fn seeded_start_reveals_manilha_and_deals() {
    let (game, id1, _) = seeded_game(123, 456);

    assert!(game.is_running());
    assert_eq!(game.manilha(), Some(Card::new(Suit::Hearts, Rank::Three)));
    assert_eq!(game.current_player().unwrap().id(), &id1);
    assert_eq!(held(&game, Seat::First), cards(&["AD", "BD", "C3"]));
    assert_eq!(held(&game, Seat::Second), cards(&["D7", "A1", "D3"]));

    let hand = game.current_hand().unwrap();
    assert_eq!(hand.trump_rank(), Rank::Four);
    assert_eq!(hand.phase(), HandPhase::Round(0));
    assert_eq!(hand.remaining().len(), DECK_SIZE - 7);
    // The weakest trump still beats the strongest plain card.
    assert_eq!(
        hand.compare_cards(card("D4"), card("A3")),
        core::cmp::Ordering::Greater
    );

    let (again, _, _) = seeded_game(123, 456);
    assert_eq!(again.manilha(), game.manilha());
    assert_eq!(held(&again, Seat::First), held(&game, Seat::First));
    assert_eq!(held(&again, Seat::Second), held(&game, Seat::Second));
}

#[test]
fn play_errors_leave_state_untouched() {
    let mut ids = RandomIds::seeded(9);
    let mut game = Game::new(GameOptions::default().with_seed(123, 456), &mut ids).unwrap();
    let p1 = Player::new("player 1", &mut ids).unwrap();
    let p2 = Player::new("player 2", &mut ids).unwrap();
    let (id1, id2) = (p1.id().clone(), p2.id().clone());
    game.add_player(p1).unwrap();
    game.add_player(p2).unwrap();

    assert_eq!(game.play(&id1, card("AD")), Err(PlayError::GameNotRunning));
    game.start().unwrap();

    let before = (held(&game, Seat::First), held(&game, Seat::Second));

    assert_eq!(game.play(&id2, card("D7")), Err(PlayError::NotPlayerTurn));
    // Turn is checked before card ownership.
    assert_eq!(game.play(&id2, card("A4")), Err(PlayError::NotPlayerTurn));
    assert_eq!(
        game.play(&id1, card("D7")),
        Err(PlayError::PlayerDoesNotHaveCard)
    );

    assert_eq!((held(&game, Seat::First), held(&game, Seat::Second)), before);
    assert!(game.current_hand().unwrap().pile().is_empty());
    assert_eq!(game.current_player().unwrap().id(), &id1);

    assert_eq!(game.play(&id1, card("AD")), Ok(None));
    assert_eq!(game.current_hand().unwrap().pile().len(), 1);
    assert_eq!(game.current_player().unwrap().id(), &id2);
    assert_eq!(game.play(&id1, card("BD")), Err(PlayError::NotPlayerTurn));
    assert_eq!(game.current_hand().unwrap().pile().len(), 1);
}

#[test]
fn completed_hand_deals_the_next_one() {
    let (mut game, id1, id2) = seeded_game(123, 456);

    assert_eq!(game.play(&id1, card("AD")), Ok(None));
    assert_eq!(
        game.play(&id2, card("A1")),
        Ok(Some(Outcome::Won(Seat::Second)))
    );
    assert_eq!(game.last_round_winner().unwrap().id(), &id2);
    assert_eq!(game.current_player().unwrap().id(), &id2);

    game.play(&id2, card("D3")).unwrap();
    assert_eq!(
        game.play(&id1, card("BD")),
        Ok(Some(Outcome::Won(Seat::Second)))
    );
    assert!(game.hand_winner().is_none());

    game.play(&id2, card("D7")).unwrap();
    assert_eq!(
        game.play(&id1, card("C3")),
        Ok(Some(Outcome::Won(Seat::First)))
    );

    let hands = game.hands();
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[0].phase(), HandPhase::Resolved);
    assert_eq!(hands[0].winner(), Some(Outcome::Won(Seat::Second)));
    assert_eq!(hands[0].pile().len(), 6);
    assert_eq!(hands[1].index(), 1);

    // The new hand has no rounds yet: the last round is read from the old one.
    assert_eq!(game.last_round_winner().unwrap().id(), &id1);
    assert_eq!(game.hand_winner().unwrap().id(), &id2);
    assert_eq!(game.hand_wins(), [0, 1]);

    // The second hand is led and dealt first by the second seat.
    assert_eq!(game.manilha(), Some(card("D7")));
    assert_eq!(game.current_player().unwrap().id(), &id2);
    assert_eq!(held(&game, Seat::Second), cards(&["D3", "AB", "B2"]));
    assert_eq!(held(&game, Seat::First), cards(&["B7", "B6", "D2"]));
    assert!(game.is_running());
}

#[test]
fn drawn_round_and_first_round_tiebreak() {
    let (mut game, id1, id2) = seeded_game(123, 456);

    game.play(&id1, card("AD")).unwrap();
    game.play(&id2, card("A1")).unwrap();
    game.play(&id2, card("D7")).unwrap();
    game.play(&id1, card("BD")).unwrap();
    game.play(&id1, card("C3")).unwrap();
    assert_eq!(game.play(&id2, card("D3")), Ok(Some(Outcome::Draw)));

    assert!(game.last_round_winner().is_none());
    // One round each: the first round decides.
    assert_eq!(game.hand_winner().unwrap().id(), &id2);
}

#[test]
fn equal_plain_ranks_draw_without_moving_the_lead() {
    let (mut game, id1, id2) = seeded_game(7, 26);

    assert_eq!(game.manilha(), Some(card("BD")));
    assert_eq!(held(&game, Seat::First), cards(&["C1", "A3", "B4"]));
    assert_eq!(held(&game, Seat::Second), cards(&["A5", "BE", "D4"]));

    game.play(&id1, card("B4")).unwrap();
    assert_eq!(game.play(&id2, card("D4")), Ok(Some(Outcome::Draw)));

    assert!(game.last_round_winner().is_none());
    assert_eq!(game.current_player().unwrap().id(), &id1);
    assert_eq!(game.current_hand().unwrap().rounds(), [Outcome::Draw]);
}

#[test]
fn full_match_stops_at_target() {
    let (mut game, _, id2) = seeded_game(123, 456);

    let mut plays = 0;
    while game.is_running() {
        let current = game.current_player().unwrap();
        let (id, next) = (current.id().clone(), current.cards()[0]);
        game.play(&id, next).unwrap();
        plays += 1;
        assert!(plays <= 10_000, "match never ended");
    }

    assert_eq!(game.state(), GameState::Finished);
    assert_eq!(game.hand_wins(), [8, 12]);
    assert_eq!(plays, 126);
    // The hand after the deciding one is already dealt.
    assert_eq!(game.hands().len(), 22);
    assert_eq!(game.match_winner().unwrap().id(), &id2);

    let current = game.current_player().unwrap();
    let (id, next) = (current.id().clone(), current.cards()[0]);
    assert_eq!(game.play(&id, next), Err(PlayError::GameNotRunning));
    assert!(!game.is_running());
}

#[test]
fn drawn_hand_counts_for_nobody() {
    let (mut game, _, _) = seeded_game(123, 456);

    let mut drawn = 0;
    while game.is_running() {
        let (wins, dealt) = (game.hand_wins(), game.hands().len());
        let current = game.current_player().unwrap();
        let (id, next) = (current.id().clone(), current.cards()[0]);
        game.play(&id, next).unwrap();

        if game.hands().len() == dealt {
            continue;
        }
        let resolved = &game.hands()[dealt - 1];
        if resolved.winner() == Some(Outcome::Draw) {
            drawn += 1;
            assert_eq!(resolved.rounds()[0], Outcome::Draw);
            assert!(game.hand_winner().is_none());
            assert_eq!(game.hand_wins(), wins);
        } else {
            assert!(game.hand_winner().is_some());
            assert_eq!(game.hand_wins().iter().sum::<u32>(), wins.iter().sum::<u32>() + 1);
        }
    }

    // 21 resolved hands for 20 wins.
    assert_eq!(drawn, 1);
}

#[test]
fn lower_target_ends_sooner() {
    let (mut game, _, _) =
        started_game(GameOptions::default().with_seed(7, 26).with_target_wins(1));

    while game.is_running() {
        let current = game.current_player().unwrap();
        let (id, next) = (current.id().clone(), current.cards()[0]);
        game.play(&id, next).unwrap();
    }

    let wins = game.hand_wins();
    assert_eq!(wins.iter().max(), Some(&1));
    assert!(game.match_winner().is_some());
}

#[test]
fn leaving_a_running_match_finishes_it() {
    let (mut game, id1, id2) = seeded_game(123, 456);
    game.play(&id1, card("AD")).unwrap();

    let removed = game.remove_player(&id2).unwrap();
    assert_eq!(removed.id(), &id2);
    assert_eq!(game.state(), GameState::Finished);
    assert!(game.current_player().is_none());
    assert!(game.match_winner().is_none());
    assert_eq!(game.play(&id1, card("BD")), Err(PlayError::GameNotRunning));
}

#[test]
fn unseeded_game_still_deals_full_hands() {
    let mut ids = RandomIds::new();
    let mut game = Game::new(GameOptions::default(), &mut ids).unwrap();
    game.seed(0, 0);
    game.add_player(Player::new("player 1", &mut ids).unwrap())
        .unwrap();
    game.add_player(Player::new("player 2", &mut ids).unwrap())
        .unwrap();
    game.start().unwrap();

    let hand = game.current_hand().unwrap();
    let manilha = hand.manilha();
    let first = held(&game, Seat::First);
    let second = held(&game, Seat::Second);
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 3);
    assert!(!first.contains(&manilha) && !second.contains(&manilha));
    assert!(first.iter().all(|c| !second.contains(c)));
}
