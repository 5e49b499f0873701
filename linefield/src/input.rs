//! Key decoding.
//!
//! A [`KeyDecoder`] is a state machine fed one raw byte at a time. It
//! consumes multi-byte key encodings whole and yields one normalized
//! [`KeyEvent`] per key, so the engine never sees a partial sequence.
//! Two interchangeable decoders cover the two terminal families:
//! [`AnsiDecoder`] for VT-style escape sequences and [`ConsoleDecoder`]
//! for console drivers that prefix navigation keys with an extended-key
//! byte.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Normalized key event.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum KeyEvent {
    Char(u8),
    Enter,
    Escape,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    /// A byte or sequence outside the recognized set. The engine
    /// ignores these.
    Unrecognized,
}

/// Inclusive range of raw character codes the engine will insert.
///
/// Bounds are clamped to printable ASCII, so the edit buffer only ever
/// holds printable single-byte characters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AcceptRange {
    low: u8,
    high: u8,
}

impl AcceptRange {
    pub fn new(low: u8, high: u8) -> Self {
        Self {
            low: low.max(0x20),
            high: high.min(0x7e),
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        (self.low..=self.high).contains(&byte)
    }
}

impl Default for AcceptRange {
    /// All printable ASCII.
    fn default() -> Self {
        Self::new(0x20, 0x7e)
    }
}

/// Byte-fed key decoder.
///
/// Decoders are pure classifiers; they own nothing but their sequence
/// state. The blocking read lives in the editor wrappers.
pub trait KeyDecoder: Default {
    /// Feed one raw byte. `None` means the byte started or continued a
    /// multi-byte sequence and no event is ready yet.
    fn advance(&mut self, byte: u8) -> Option<KeyEvent>;

    /// Signal end of input. A sequence cut short degrades to
    /// [`KeyEvent::Escape`] rather than leaking partial events; a
    /// decoder at rest yields `None`.
    fn interrupt(&mut self) -> Option<KeyEvent>;
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
enum ControlByte {
    CtrlH = 0x08,
    LineFeed = 0x0a,
    CarriageReturn = 0x0d,
    Escape = 0x1b,
    Backspace = 0x7f,
}

fn ground_event(byte: u8) -> KeyEvent {
    match ControlByte::try_from(byte) {
        Ok(ControlByte::CarriageReturn) | Ok(ControlByte::LineFeed) => KeyEvent::Enter,
        Ok(ControlByte::CtrlH) | Ok(ControlByte::Backspace) => KeyEvent::Backspace,
        Ok(ControlByte::Escape) => KeyEvent::Escape,
        Err(_) => {
            if byte < 0x20 {
                KeyEvent::Unrecognized
            } else {
                KeyEvent::Char(byte)
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
enum AnsiState {
    Ground,
    Escape,
    Csi,
    /// Got `CSI <digit>`, waiting for the closing `~`.
    Tilde(KeyEvent),
}

/// Decoder for VT-style terminals delivering escape sequences.
///
/// Navigation keys arrive as `ESC [ D`/`C` (arrows), `ESC [ H`/`F` or
/// `ESC [ 1~`/`4~` (home/end) and `ESC [ 3~` (delete). A lone escape
/// followed by anything but `[` is reported as [`KeyEvent::Escape`].
pub struct AnsiDecoder {
    state: AnsiState,
}

impl Default for AnsiDecoder {
    fn default() -> Self {
        Self {
            state: AnsiState::Ground,
        }
    }
}

impl KeyDecoder for AnsiDecoder {
    fn advance(&mut self, byte: u8) -> Option<KeyEvent> {
        match self.state {
            AnsiState::Ground => match ground_event(byte) {
                KeyEvent::Escape => {
                    self.state = AnsiState::Escape;
                    None
                }
                event => Some(event),
            },
            AnsiState::Escape => {
                if byte == b'[' {
                    self.state = AnsiState::Csi;
                    None
                } else {
                    self.state = AnsiState::Ground;
                    Some(KeyEvent::Escape)
                }
            }
            AnsiState::Csi => match byte {
                b'D' => {
                    self.state = AnsiState::Ground;
                    Some(KeyEvent::ArrowLeft)
                }
                b'C' => {
                    self.state = AnsiState::Ground;
                    Some(KeyEvent::ArrowRight)
                }
                b'H' => {
                    self.state = AnsiState::Ground;
                    Some(KeyEvent::Home)
                }
                b'F' => {
                    self.state = AnsiState::Ground;
                    Some(KeyEvent::End)
                }
                b'1' => {
                    self.state = AnsiState::Tilde(KeyEvent::Home);
                    None
                }
                b'3' => {
                    self.state = AnsiState::Tilde(KeyEvent::Delete);
                    None
                }
                b'4' => {
                    self.state = AnsiState::Tilde(KeyEvent::End);
                    None
                }
                _ => {
                    self.state = AnsiState::Ground;
                    Some(KeyEvent::Unrecognized)
                }
            },
            AnsiState::Tilde(event) => {
                self.state = AnsiState::Ground;
                if byte == b'~' {
                    Some(event)
                } else {
                    Some(KeyEvent::Unrecognized)
                }
            }
        }
    }

    fn interrupt(&mut self) -> Option<KeyEvent> {
        match core::mem::replace(&mut self.state, AnsiState::Ground) {
            AnsiState::Ground => None,
            _ => Some(KeyEvent::Escape),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
enum ScanCode {
    Home = 71,
    ArrowLeft = 75,
    ArrowRight = 77,
    End = 79,
    Delete = 83,
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
enum ConsoleState {
    Ground,
    Extended,
}

/// Decoder for console drivers that deliver navigation keys as an
/// extended-key prefix (`0x00` or `0xE0`) followed by a scan code.
pub struct ConsoleDecoder {
    state: ConsoleState,
}

impl Default for ConsoleDecoder {
    fn default() -> Self {
        Self {
            state: ConsoleState::Ground,
        }
    }
}

impl KeyDecoder for ConsoleDecoder {
    fn advance(&mut self, byte: u8) -> Option<KeyEvent> {
        match self.state {
            ConsoleState::Ground => match byte {
                0x00 | 0xe0 => {
                    self.state = ConsoleState::Extended;
                    None
                }
                _ => Some(ground_event(byte)),
            },
            ConsoleState::Extended => {
                self.state = ConsoleState::Ground;

                Some(match ScanCode::try_from(byte) {
                    Ok(ScanCode::Home) => KeyEvent::Home,
                    Ok(ScanCode::ArrowLeft) => KeyEvent::ArrowLeft,
                    Ok(ScanCode::ArrowRight) => KeyEvent::ArrowRight,
                    Ok(ScanCode::End) => KeyEvent::End,
                    Ok(ScanCode::Delete) => KeyEvent::Delete,
                    Err(_) => KeyEvent::Unrecognized,
                })
            }
        }
    }

    fn interrupt(&mut self) -> Option<KeyEvent> {
        match core::mem::replace(&mut self.state, ConsoleState::Ground) {
            ConsoleState::Ground => None,
            ConsoleState::Extended => Some(KeyEvent::Escape),
        }
    }
}
