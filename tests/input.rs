//! Pointer input integration tests.

use spiders::{
    Card, Game, GameOptions, GameState, InputHandler, InputOutcome, Layout, MoveOutcome, Pile,
    PointerEvent, Suit, Table,
};

const fn up(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).turned_up()
}

const fn down(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn cleared() -> Game {
    let mut game = Game::new(GameOptions::default(), 1);
    *game.table_mut() = Table::new();
    game.drain_events();
    game
}

#[test]
fn stock_press_deals_a_row() {
    let mut game = Game::new(GameOptions::default(), 12);
    let mut input = InputHandler::default();

    let outcome = input.handle(&mut game, PointerEvent::down(50.0, 20.0));
    assert_eq!(outcome, InputOutcome::RowDealt(10));
    assert_eq!(game.table().stock_len(), 40);
}

#[test]
fn presses_outside_everything_are_ignored() {
    let mut game = Game::new(GameOptions::default(), 12);
    let mut input = InputHandler::default();
    let before = game.table().clone();

    assert_eq!(
        input.handle(&mut game, PointerEvent::down(2000.0, 2000.0)),
        InputOutcome::Ignored
    );
    assert_eq!(
        input.handle(&mut game, PointerEvent::moved(10.0, 10.0)),
        InputOutcome::Ignored
    );
    assert_eq!(
        input.handle(&mut game, PointerEvent::up(10.0, 10.0)),
        InputOutcome::Ignored
    );
    assert_eq!(game.table(), &before);
}

#[test]
fn empty_stock_press_is_ignored() {
    let mut game = cleared();
    let mut input = InputHandler::default();

    assert_eq!(
        input.handle(&mut game, PointerEvent::down(50.0, 20.0)),
        InputOutcome::Ignored
    );
}

#[test]
fn press_on_face_down_top_starts_flip() {
    let mut game = cleared();
    game.table_mut().piles[2] = Pile::from_cards(vec![down(Suit::Spades, 3), down(Suit::Spades, 6)]);
    let mut input = InputHandler::default();

    // Pile 2 sits at x = 200; its second card starts at y = 70.
    let InputOutcome::FlipStarted(ticket) =
        input.handle(&mut game, PointerEvent::down(210.0, 150.0))
    else {
        panic!("expected a flip to start");
    };
    assert_eq!((ticket.pile, ticket.index), (2, 1));
    assert!(!game.table().piles[2].top().unwrap().face_up);

    // The card is locked until the flip completes.
    assert_eq!(
        input.handle(&mut game, PointerEvent::down(210.0, 150.0)),
        InputOutcome::Ignored
    );

    game.complete_flip(ticket).unwrap();
    assert!(game.table().piles[2].top().unwrap().face_up);
}

#[test]
fn press_on_buried_face_down_card_is_ignored() {
    let mut game = cleared();
    game.table_mut().piles[0] = Pile::from_cards(vec![
        down(Suit::Spades, 3),
        down(Suit::Spades, 6),
        up(Suit::Spades, 9),
    ]);
    let mut input = InputHandler::default();

    assert_eq!(
        input.handle(&mut game, PointerEvent::down(40.0, 45.0)),
        InputOutcome::Ignored
    );
    assert!(input.drag().is_none());
}

#[test]
fn drag_and_drop_moves_the_run() {
    let mut game = cleared();
    game.table_mut().piles[0] = Pile::from_cards(vec![up(Suit::Spades, 5)]);
    game.table_mut().piles[1] = Pile::from_cards(vec![up(Suit::Spades, 4)]);
    let mut input = InputHandler::new(Layout::default());

    assert_eq!(
        input.handle(&mut game, PointerEvent::down(120.0, 50.0)),
        InputOutcome::DragStarted { pile: 1, index: 0 }
    );
    assert_eq!(
        input.handle(&mut game, PointerEvent::moved(40.0, 80.0)),
        InputOutcome::Dragged
    );
    assert_eq!(input.drag().map(|drag| drag.card_origin()), Some((35.0, 70.0)));

    assert_eq!(
        input.handle(&mut game, PointerEvent::up(40.0, 80.0)),
        InputOutcome::Moved(MoveOutcome {
            moved: 1,
            runs_retired: 0
        })
    );
    assert!(input.drag().is_none());
    assert_eq!(game.table().piles[0].len(), 2);
    assert!(game.table().piles[1].is_empty());
}

#[test]
fn drag_from_middle_of_pile_moves_everything_above() {
    let mut game = cleared();
    game.table_mut().piles[0] = Pile::from_cards(vec![
        up(Suit::Hearts, 9),
        up(Suit::Hearts, 8),
        up(Suit::Hearts, 7),
    ]);
    let mut input = InputHandler::default();

    // y = 80 is covered by rows 0 and 1; row 1 is on top.
    assert_eq!(
        input.handle(&mut game, PointerEvent::down(40.0, 80.0)),
        InputOutcome::DragStarted { pile: 0, index: 1 }
    );
    // Pile 3 is empty; its drop zone spans y = 10..=140 at x = 285.
    assert_eq!(
        input.handle(&mut game, PointerEvent::up(300.0, 50.0)),
        InputOutcome::Moved(MoveOutcome {
            moved: 2,
            runs_retired: 0
        })
    );
    assert_eq!(game.table().piles[0].len(), 1);
    assert_eq!(
        game.table().piles[3].cards(),
        &[up(Suit::Hearts, 8), up(Suit::Hearts, 7)]
    );
}

#[test]
fn invalid_drop_leaves_table_untouched() {
    let mut game = cleared();
    game.table_mut().piles[0] = Pile::from_cards(vec![up(Suit::Spades, 5)]);
    game.table_mut().piles[1] = Pile::from_cards(vec![up(Suit::Hearts, 4)]);
    let before = game.table().clone();
    let mut input = InputHandler::default();

    input.handle(&mut game, PointerEvent::down(120.0, 50.0));
    assert_eq!(
        input.handle(&mut game, PointerEvent::up(40.0, 80.0)),
        InputOutcome::MoveRejected
    );
    assert_eq!(game.table(), &before);

    input.handle(&mut game, PointerEvent::down(120.0, 50.0));
    assert_eq!(
        input.handle(&mut game, PointerEvent::up(2000.0, 2000.0)),
        InputOutcome::MoveRejected
    );
    assert_eq!(game.table(), &before);
    assert!(input.drag().is_none());
}

#[test]
fn dealing_a_row_drops_the_current_drag() {
    let mut game = cleared();
    game.table_mut().piles[0] = Pile::from_cards(vec![up(Suit::Spades, 5)]);
    game.table_mut().piles[1] = Pile::from_cards(vec![up(Suit::Spades, 4)]);
    game.table_mut().stock = vec![down(Suit::Hearts, 9); 10];
    let mut input = InputHandler::default();

    assert_eq!(
        input.handle(&mut game, PointerEvent::down(120.0, 50.0)),
        InputOutcome::DragStarted { pile: 1, index: 0 }
    );
    assert_eq!(input.deal_row(&mut game), Ok(10));
    assert!(input.drag().is_none());

    assert_eq!(
        input.handle(&mut game, PointerEvent::up(40.0, 110.0)),
        InputOutcome::Ignored
    );
    assert_eq!(game.table().piles[1].len(), 2);
    assert_eq!(game.table().piles[0].len(), 2);
}

#[test]
fn won_game_ignores_input() {
    let mut game = cleared();
    game.table_mut().retired = vec![Suit::Spades; 7];
    game.table_mut().piles[0] =
        Pile::from_cards((2..=13).rev().map(|rank| up(Suit::Spades, rank)).collect());
    game.table_mut().piles[1] = Pile::from_cards(vec![up(Suit::Spades, 1)]);
    game.table_mut().stock = vec![down(Suit::Spades, 1)];
    let mut input = InputHandler::default();

    // Pile 1's only card: x = 115, y = 40.
    input.handle(&mut game, PointerEvent::down(120.0, 120.0));
    let outcome = input.handle(&mut game, PointerEvent::up(40.0, 420.0));
    assert!(matches!(outcome, InputOutcome::Moved(MoveOutcome { runs_retired: 1, .. })));
    assert_eq!(game.state(), GameState::Won);

    assert_eq!(
        input.handle(&mut game, PointerEvent::down(50.0, 20.0)),
        InputOutcome::Ignored
    );
    assert_eq!(game.table().stock_len(), 1);
}
