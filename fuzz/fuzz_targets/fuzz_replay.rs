#![no_main]

//! Full replay fuzzer.
//!
//! This fuzz target builds an arbitrary small board, replays an arbitrary
//! event log against it and checks that:
//! 1. Replay never panics
//! 2. The board keeps at most one player after every event
//! 3. Replaying the same input twice gives the same result

use arbitrary::Arbitrary;
use chuckie::game::{
    Board, Direction, Event, Game, Hen, Player, Position, Tile, check_invariants,
};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated tile, never the player.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzTile {
    Air,
    Platform,
    Ladder,
    Egg,
    HenRight,
    HenLeft,
}

impl FuzzTile {
    fn tile(self) -> Tile {
        match self {
            FuzzTile::Air => Tile::Air,
            FuzzTile::Platform => Tile::Platform,
            FuzzTile::Ladder => Tile::Ladder,
            FuzzTile::Egg => Tile::Egg,
            FuzzTile::HenRight => Tile::Hen(Hen::new()),
            FuzzTile::HenLeft => Tile::Hen(Hen::reversed()),
        }
    }
}

/// A fuzzer-generated event.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzEvent {
    Up,
    Down,
    Left,
    Right,
    Win,
    Lose,
}

impl FuzzEvent {
    fn event(self) -> Event {
        match self {
            FuzzEvent::Up => Event::PlayerMove(Direction::Up),
            FuzzEvent::Down => Event::PlayerMove(Direction::Down),
            FuzzEvent::Left => Event::PlayerMove(Direction::Left),
            FuzzEvent::Right => Event::PlayerMove(Direction::Right),
            FuzzEvent::Win => Event::GameOver { won: true },
            FuzzEvent::Lose => Event::GameOver { won: false },
        }
    }
}

/// Structured input for replay fuzzing.
#[derive(Arbitrary, Debug)]
struct ReplayInput {
    width: u8,
    height: u8,
    tiles: Vec<FuzzTile>,
    player: Option<(u8, u8, bool)>,
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: ReplayInput| {
    // Cap sizes to keep runs short
    let width = u16::from(input.width % 16) + 1;
    let height = u16::from(input.height % 16) + 1;
    let Some(mut board) = Board::new(width, height) else {
        return;
    };

    for (i, tile) in input.tiles.iter().take(usize::from(width * height)).enumerate() {
        let x = (i % usize::from(width)) as i32;
        let y = (i / usize::from(width)) as i32;
        board.set(Position::new(x, y), tile.tile());
    }
    if let Some((x, y, on_ladder)) = input.player {
        let pos = Position::new(i32::from(x) % i32::from(width), i32::from(y) % i32::from(height));
        board.set(pos, Tile::Player(Player { on_ladder }));
    }

    let events: Vec<Event> = input.events.iter().take(200).map(|e| e.event()).collect();

    let mut game = Game::new(board.clone(), events.clone());
    let result = game.run_with(|index, board| {
        let violations = check_invariants(board);
        assert!(violations.is_empty(), "after event {index}: {violations:?}");
    });

    let mut again = Game::new(board, events);
    assert_eq!(again.run(), result);
    assert_eq!(again.board(), game.board());
});
