mod app;
mod command;

pub use app::App;
pub use command::ShellCommand;

use std::io;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{info, instrument};

/// Reads commands from stdin until it closes or the user quits.
#[instrument(skip_all)]
pub async fn run(app: &mut App) -> io::Result<()> {
    let mut lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    println!("{}", command::HELP);

    while let Some(line) = lines.next().await {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                for output in app.handle(command).await {
                    println!("{}", output);
                }
            }
            Err(error) => println!("{}", error),
        }
    }

    info!("👋 Bye");
    Ok(())
}
