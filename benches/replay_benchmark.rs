//! Benchmarks for replaying event logs.
//!
//! This benchmarks the per-event loop: the move, gravity and the hen round.

#![allow(missing_docs)]

use std::hint::black_box;

use chuckie::game::{Board, Direction, Event, Game, Hen, Player, Position, Tile};
use chuckie::replay::{Recording, verify};
use criterion::{Criterion, criterion_group, criterion_main};

/// A wide two-floor level: eggs along the top floor, hens patrolling below.
fn level(width: u16, hens: i32) -> Board {
    let mut board = Board::new(width, 4).unwrap_or_else(|| panic!("bad width {width}"));
    let w = i32::from(width);
    for x in 0..w {
        board.set(Position::new(x, 0), Tile::Platform);
        board.set(Position::new(x, 2), Tile::Platform);
        board.set(Position::new(x, 3), Tile::Egg);
    }
    board.set(Position::new(0, 1), Tile::Platform);
    board.set(Position::new(w - 1, 1), Tile::Platform);
    for i in 0..hens {
        board.set(Position::new(1 + i * 3, 1), Tile::Hen(Hen::new()));
    }
    board.set(Position::new(0, 3), Tile::Player(Player::new()));
    board
}

/// Walk right across the board, then claim the win.
fn walk(width: u16) -> Vec<Event> {
    let mut events = vec![Event::PlayerMove(Direction::Right); usize::from(width) - 1];
    events.push(Event::GameOver { won: true });
    events
}

fn bench_long_replay(c: &mut Criterion) {
    let board = level(200, 40);
    let events = walk(200);

    c.bench_function("replay_200_wide_40_hens", |b| {
        b.iter(|| {
            let mut game = Game::new(black_box(board.clone()), black_box(events.clone()));
            black_box(game.run())
        });
    });
}

fn bench_verify(c: &mut Criterion) {
    let board = level(64, 10);
    let mut recording = Recording::new("bench", &board, walk(64));
    let mut game = Game::new(board, recording.events.clone());
    let frames = &mut recording.frames;
    game.run_with(|_, board| frames.push(board.to_string()))
        .unwrap_or_else(|e| panic!("bench level failed to replay: {e}"));

    c.bench_function("verify_64_wide_with_frames", |b| {
        b.iter(|| black_box(verify(black_box(&recording))));
    });
}

fn bench_board_codec(c: &mut Criterion) {
    let board = level(200, 40);
    let text = board.to_string();

    c.bench_function("board_display_parse_200x4", |b| {
        b.iter(|| {
            let text = black_box(&board).to_string();
            black_box(Board::parse(200, 4, &text))
        });
    });

    c.bench_function("board_parse_200x4", |b| {
        b.iter(|| black_box(Board::parse(200, 4, black_box(&text))));
    });
}

criterion_group!(benches, bench_long_replay, bench_verify, bench_board_codec);
criterion_main!(benches);
