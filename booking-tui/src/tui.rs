//! Terminal setup and the event loop

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;

use crate::app::App;
use crate::ui;

const TICK: Duration = Duration::from_millis(100);

/// Take over the terminal, run the app until it quits, then restore the terminal
pub async fn run(app: &mut App) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    // Restore even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        tracing::error!(error = %err, "Terminal loop failed");
    }
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            let intent = app.key_intent(key);
            if intent.calls_backend() {
                app.loading = true;
                terminal.draw(|f| ui::draw(f, app))?;
            }
            app.dispatch(intent).await;
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}
