use std::string::String;
use std::vec::Vec;

use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::terminal::Cursor;

/// Key sequences a VT terminal sends for the navigation keys.
pub mod csi {
    pub const LEFT: &str = "\x1b[D";
    pub const RIGHT: &str = "\x1b[C";
    pub const HOME: &str = "\x1b[H";
    pub const END: &str = "\x1b[F";
    pub const DELETE: &str = "\x1b[3~";
}

#[derive(Debug)]
enum SeqState {
    Ground,
    Escape,
    Csi {
        arg1: Option<usize>,
        arg2: Option<usize>,
        second: bool,
    },
}

/// A terminal that interprets the subset of sequences the editor
/// emits, keeping a screen grid so tests can assert exactly what a
/// user would see.
pub struct MockTerminal {
    screen: Vec<Vec<char>>,
    pub cursor: Cursor,
    rows: usize,
    columns: usize,
    saved_cursor: Option<Cursor>,
    state: SeqState,
    keyboard_tx: Option<Sender<u8>>,
    keyboard_rx: Option<Receiver<u8>>,
    terminal_tx: Option<Sender<u8>>,
    terminal_rx: Receiver<u8>,
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new(24, 80, Cursor::new(0, 0))
    }
}

impl MockTerminal {
    pub fn new(rows: usize, columns: usize, cursor: Cursor) -> Self {
        let (terminal_tx, terminal_rx) = unbounded();
        let (keyboard_tx, keyboard_rx) = unbounded();

        Self {
            screen: vec![vec!['\0'; columns]; rows],
            cursor,
            rows,
            columns,
            saved_cursor: None,
            state: SeqState::Ground,
            keyboard_tx: Some(keyboard_tx),
            keyboard_rx: Some(keyboard_rx),
            terminal_tx: Some(terminal_tx),
            terminal_rx,
        }
    }

    /// Channel ends for the editor side: where its output goes and
    /// where its input comes from.
    pub fn take_io(&mut self) -> (Sender<u8>, Receiver<u8>) {
        (
            self.terminal_tx.take().unwrap(),
            self.keyboard_rx.take().unwrap(),
        )
    }

    /// The keyboard side. Dropping it ends the editor's input.
    pub fn take_keyboard(&mut self) -> Sender<u8> {
        self.keyboard_tx.take().unwrap()
    }

    pub fn get_cursor(&self) -> Cursor {
        self.cursor
    }

    /// Screen contents from `(row, column)` up to the first blank
    /// cell.
    pub fn row_tail(&self, row: usize, column: usize) -> String {
        self.screen[row][column..]
            .iter()
            .take_while(|&&c| c != '\0')
            .collect()
    }

    fn move_column(&mut self, steps: isize) {
        self.cursor.column =
            0.max((self.cursor.column as isize + steps).min(self.columns as isize - 1)) as usize;
    }

    pub fn advance_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.advance(byte);
        }
    }

    pub fn advance(&mut self, byte: u8) {
        match self.state {
            SeqState::Ground => match byte {
                0x1b => self.state = SeqState::Escape,
                0x20..=0x7e => {
                    let cursor = self.cursor;
                    self.screen[cursor.row][cursor.column] = byte as char;
                    self.move_column(1);
                }
                _ => (),
            },
            SeqState::Escape => {
                self.state = if byte == b'[' {
                    SeqState::Csi {
                        arg1: None,
                        arg2: None,
                        second: false,
                    }
                } else {
                    SeqState::Ground
                };
            }
            SeqState::Csi {
                ref mut arg1,
                ref mut arg2,
                ref mut second,
            } => match byte {
                b'0'..=b'9' => {
                    let digit = (byte - b'0') as usize;
                    let arg = if *second { arg2 } else { arg1 };

                    *arg = Some(arg.unwrap_or(0) * 10 + digit);
                }
                b';' => *second = true,
                _ => {
                    let (arg1, arg2) = (*arg1, *arg2);
                    self.state = SeqState::Ground;
                    self.apply_csi(byte, arg1, arg2);
                }
            },
        }
    }

    fn apply_csi(&mut self, byte: u8, arg1: Option<usize>, arg2: Option<usize>) {
        match byte {
            b'H' => {
                let row = arg1.unwrap_or(1) - 1;
                let column = arg2.unwrap_or(1) - 1;

                self.cursor = Cursor::new(row.min(self.rows - 1), column.min(self.columns - 1));
            }
            b'K' => {
                let cursor = self.cursor;

                for column in cursor.column..self.columns {
                    self.screen[cursor.row][column] = '\0';
                }
            }
            b'J' => {
                assert_eq!(arg1, Some(2));

                for row in 0..self.rows {
                    for column in 0..self.columns {
                        self.screen[row][column] = '\0';
                    }
                }
            }
            b'D' => self.move_column(-1),
            b'C' => self.move_column(1),
            b's' => self.saved_cursor = Some(self.cursor),
            b'u' => self.cursor = self.saved_cursor.unwrap(),
            _ => unimplemented!("unexpected CSI final byte {:?}", byte as char),
        }
    }

    /// Consume editor output until the other end hangs up.
    pub fn listen(&mut self) {
        while let Ok(byte) = self.terminal_rx.recv() {
            self.advance(byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_and_position() {
        let mut term = MockTerminal::default();

        term.advance_slice(b"\x1b[11;46H");
        assert_eq!(term.get_cursor(), Cursor::new(10, 45));

        term.advance_slice(b"hi");
        assert_eq!(term.row_tail(10, 45), "hi");
        assert_eq!(term.get_cursor(), Cursor::new(10, 47));
    }

    #[test]
    fn erase_to_end_of_line() {
        let mut term = MockTerminal::default();

        term.advance_slice(b"\x1b[1;1Habc");
        term.advance_slice(b"\x1b[1;2H\x1b[K");

        assert_eq!(term.row_tail(0, 0), "a");
        assert_eq!(term.get_cursor(), Cursor::new(0, 1));
    }

    #[test]
    fn relative_moves_and_save() {
        let mut term = MockTerminal::default();

        term.advance_slice(b"\x1b[5;5H");
        term.advance_slice(b"\x1b[D");
        assert_eq!(term.get_cursor(), Cursor::new(4, 3));

        term.advance_slice(b"\x1b[s\x1b[C\x1b[C\x1b[u");
        assert_eq!(term.get_cursor(), Cursor::new(4, 3));
    }

    #[test]
    fn clear_screen() {
        let mut term = MockTerminal::default();

        term.advance_slice(b"\x1b[1;1Habc");
        term.advance_slice(b"\x1b[2J\x1b[H");

        assert_eq!(term.row_tail(0, 0), "");
        assert_eq!(term.get_cursor(), Cursor::new(0, 0));
    }
}
