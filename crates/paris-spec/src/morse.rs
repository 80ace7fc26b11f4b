//! International Morse symbol table (letters and digits).

use std::fmt;

/// A single Morse symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short mark, one dot unit.
    Dot,
    /// Long mark, `dash_weight` dot units.
    Dash,
}

impl Symbol {
    /// Character used when rendering patterns.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

use Symbol::{Dash as H, Dot as D};

const LETTERS: [&[Symbol]; 26] = [
    &[D, H],       // A
    &[H, D, D, D], // B
    &[H, D, H, D], // C
    &[H, D, D],    // D
    &[D],          // E
    &[D, D, H, D], // F
    &[H, H, D],    // G
    &[D, D, D, D], // H
    &[D, D],       // I
    &[D, H, H, H], // J
    &[H, D, H],    // K
    &[D, H, D, D], // L
    &[H, H],       // M
    &[H, D],       // N
    &[H, H, H],    // O
    &[D, H, H, D], // P
    &[H, H, D, H], // Q
    &[D, H, D],    // R
    &[D, D, D],    // S
    &[H],          // T
    &[D, D, H],    // U
    &[D, D, D, H], // V
    &[D, H, H],    // W
    &[H, D, D, H], // X
    &[H, D, H, H], // Y
    &[H, H, D, D], // Z
];

const DIGITS: [&[Symbol]; 10] = [
    &[H, H, H, H, H], // 0
    &[D, H, H, H, H], // 1
    &[D, D, H, H, H], // 2
    &[D, D, D, H, H], // 3
    &[D, D, D, D, H], // 4
    &[D, D, D, D, D], // 5
    &[H, D, D, D, D], // 6
    &[H, H, D, D, D], // 7
    &[H, H, H, D, D], // 8
    &[H, H, H, H, D], // 9
];

/// Looks up the symbol pattern for a character, ignoring case.
///
/// Returns `None` for characters without a mapping; callers skip them.
pub fn lookup(c: char) -> Option<&'static [Symbol]> {
    let c = c.to_ascii_uppercase();
    match c {
        'A'..='Z' => Some(LETTERS[(c as u8 - b'A') as usize]),
        '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize]),
        _ => None,
    }
}

/// Renders the dot/dash pattern of a text for display.
///
/// Letters are separated by a space and words by ` / `. Unmapped characters
/// are dropped, and words without any mapped character are omitted.
pub fn encode_text(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter_map(lookup)
                .map(|pattern| pattern.iter().map(|s| s.as_char()).collect::<String>())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}
