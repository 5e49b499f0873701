use linefield::{sync_editor::with_std::edit_at, terminal::CLEAR_SCREEN};
use std::io::Write;
use termion::raw::IntoRawMode;

fn main() {
    // Raw mode is restored when the guard drops, on every exit path.
    let mut stdout = std::io::stdout().into_raw_mode().unwrap();

    stdout.write_all(CLEAR_SCREEN).unwrap();
    stdout.flush().unwrap();

    let entry = edit_at(10, 45, 25, b'a', b'z').unwrap();

    stdout.write_all(CLEAR_SCREEN).unwrap();

    if entry.is_empty() {
        write!(stdout, "Empty input.\n\r").unwrap();
    } else {
        write!(stdout, "You entered: {}\n\r", entry).unwrap();
    }
}
