use embedded_io_adapters::tokio_1::FromTokio;
use linefield::{async_io::IO, builder::EditorBuilder, terminal::CLEAR_SCREEN, Submission};
use termion::raw::IntoRawMode;
use tokio::io::{self, AsyncWriteExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _raw_term = std::io::stdout().into_raw_mode().unwrap();

    let mut stdout = io::stdout();
    stdout.write_all(CLEAR_SCREEN).await.unwrap();
    stdout.flush().await.unwrap();

    let mut io = IO::new(FromTokio::new(io::stdin()), FromTokio::new(io::stdout()));

    let mut editor = EditorBuilder::with_capacity(25)
        .at(10, 45)
        .accept(b'a', b'z')
        .build_async();

    let entry = match editor.edit(&mut io).await.unwrap() {
        Submission::Entered(text) => String::from(text),
        Submission::Cancelled => String::new(),
    };

    stdout.write_all(CLEAR_SCREEN).await.unwrap();

    let message = if entry.is_empty() {
        String::from("Empty input.\n\r")
    } else {
        format!("You entered: {}\n\r", entry)
    };

    stdout.write_all(message.as_bytes()).await.unwrap();
    stdout.flush().await.unwrap();
}
