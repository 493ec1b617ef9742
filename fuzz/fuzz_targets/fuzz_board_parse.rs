#![no_main]

//! Board text parser fuzzer.
//!
//! Arbitrary text must either fail to parse or produce a board whose text
//! form parses back to the same board.

use chuckie::game::Board;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, u8, &str)| {
    let (width, height, text) = input;
    let width = u16::from(width % 32);
    let height = u16::from(height % 32);

    if let Ok(board) = Board::parse(width, height, text) {
        let printed = board.to_string();
        let reparsed = Board::parse(width, height, &printed).expect("printed board parses");
        assert_eq!(reparsed, board);
    }
});
