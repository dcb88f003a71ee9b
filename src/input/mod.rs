use macroquad::prelude::*;
use crate::application::Key;
use crate::domain::Direction;

/// Keys the board reacts to by key code rather than by character
const CODED_KEYS: [(KeyCode, Key); 5] = [
    (KeyCode::Up, Key::Arrow(Direction::Up)),
    (KeyCode::Down, Key::Arrow(Direction::Down)),
    (KeyCode::Left, Key::Arrow(Direction::Left)),
    (KeyCode::Right, Key::Arrow(Direction::Right)),
    (KeyCode::Escape, Key::Escape),
];

/// Collect this frame's key presses as toolkit-independent keys.
/// Arrows and Escape come first in fixed order, then typed characters
/// in the order they were typed. Presses of both kinds within one frame
/// are not interleaved by arrival time.
pub fn pressed_keys() -> Vec<Key> {
    let coded = CODED_KEYS
        .iter()
        .filter(|(code, _)| is_key_pressed(*code))
        .map(|&(_, key)| key);

    let typed = std::iter::from_fn(get_char_pressed)
        .filter(|c| !c.is_control())
        .map(Key::Char);

    coded.chain(typed).collect()
}
