//! Formatting utilities for terminal output

use crate::core::{KeyboardStatus, LetterStatus, Verdict, alphabet};
use crate::game::{Attempt, Cell};
use colored::{ColoredString, Colorize};

/// Keyboard rows in on-screen order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Format one grid cell
///
/// The bracket style encodes the verdict so it stays readable without color:
/// `[A]` correct, `(A)` present, ` A ` absent or unscored, ` _ ` empty.
#[must_use]
pub fn format_cell(cell: Cell) -> ColoredString {
    let Some(letter) = cell.letter else {
        return " _ ".bright_black();
    };
    let ch = alphabet::display(letter);

    match cell.verdict {
        Some(Verdict::Correct) => format!("[{ch}]").black().on_green().bold(),
        Some(Verdict::Present) => format!("({ch})").black().on_yellow().bold(),
        Some(Verdict::Absent) => format!(" {ch} ").white().on_bright_black(),
        None => format!(" {ch} ").bold(),
    }
}

/// Format a grid row as a single line
#[must_use]
pub fn format_row(attempt: &Attempt) -> String {
    attempt
        .cells()
        .into_iter()
        .map(|cell| format_cell(cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one keyboard key by its status
#[must_use]
pub fn format_key(letter: u8, status: LetterStatus) -> ColoredString {
    let ch = alphabet::display(letter).to_string();
    match status {
        LetterStatus::Unknown => ch.normal(),
        LetterStatus::Absent => ch.bright_black().strikethrough(),
        LetterStatus::Present => ch.yellow().bold(),
        LetterStatus::Correct => ch.green().bold(),
    }
}

/// Format the keyboard as three indented lines
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|letter| format_key(letter, keyboard.status_of(letter)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::ALPHABET;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|r| r.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, ALPHABET.to_vec());
    }

    #[test]
    fn cell_styles_without_color() {
        plain();
        let cell = |letter, verdict| Cell {
            letter: Some(letter),
            verdict,
        };

        assert_eq!(format_cell(Cell::default()).to_string(), " _ ");
        assert_eq!(format_cell(cell(b's', None)).to_string(), " S ");
        assert_eq!(
            format_cell(cell(b's', Some(Verdict::Correct))).to_string(),
            "[S]"
        );
        assert_eq!(
            format_cell(cell(b's', Some(Verdict::Present))).to_string(),
            "(S)"
        );
        assert_eq!(
            format_cell(cell(b's', Some(Verdict::Absent))).to_string(),
            " S "
        );
    }

    #[test]
    fn keyboard_without_color() {
        plain();
        let lines = format_keyboard(&KeyboardStatus::new());
        assert_eq!(lines[0], "Q W E R T Y U I O P");
        assert_eq!(lines[1], " A S D F G H J K L");
        assert_eq!(lines[2], "  Z X C V B N M");
    }
}
