// Entry point.
// Sets up logging and the terminal, then runs the feed until the user quits.

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::info;

use snapfeed::app::App;
use snapfeed::{Config, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    logging::init(&config.log_path(), &config.log_filter)?;

    let app = App::new(&config)?;

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = app.run(&mut terminal);
    let cleanup = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;
    cleanup?;
    info!("exited cleanly");
    Ok(())
}
