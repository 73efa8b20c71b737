//! Key bindings for the board screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Player intent on the board, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCommand {
    /// Place the first pool tile with this letter.
    PlaceLetter(char),
    /// Place the pool tile at this display index.
    PlaceAt(usize),
    /// Take back the rightmost placed tile.
    RemoveLast,
    /// Take back the tile under the slot cursor.
    RemoveAtCursor,
    /// Move the slot cursor left.
    CursorLeft,
    /// Move the slot cursor right.
    CursorRight,
    /// Reveal the hint.
    Hint,
    /// Reshuffle every tile into the pool.
    Shuffle,
    /// Give up on the word.
    GiveUp,
    /// Abandon the game and return to the menu.
    Quit,
}

/// Decodes a key press on the board screen.
pub fn board_command(key: KeyEvent) -> Option<BoardCommand> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let command = match key.code {
        KeyCode::Char('g') | KeyCode::Char('G') if ctrl => BoardCommand::GiveUp,
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => BoardCommand::Quit,
        KeyCode::Esc => BoardCommand::Quit,
        KeyCode::Char('?') | KeyCode::F(1) => BoardCommand::Hint,
        KeyCode::Tab => BoardCommand::Shuffle,
        KeyCode::Backspace => BoardCommand::RemoveLast,
        KeyCode::Delete | KeyCode::Enter => BoardCommand::RemoveAtCursor,
        KeyCode::Left => BoardCommand::CursorLeft,
        KeyCode::Right => BoardCommand::CursorRight,
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            BoardCommand::PlaceLetter(c.to_ascii_uppercase())
        }
        KeyCode::Char(c @ '1'..='9') => BoardCommand::PlaceAt(c as usize - '1' as usize),
        _ => return None,
    };
    Some(command)
}

/// Moves a slot cursor within `0..len`, wrapping at both ends.
pub fn move_cursor(cursor: usize, len: usize, command: BoardCommand) -> usize {
    if len == 0 {
        return 0;
    }
    match command {
        BoardCommand::CursorLeft => (cursor + len - 1) % len,
        BoardCommand::CursorRight => (cursor + 1) % len,
        _ => cursor.min(len - 1),
    }
}
