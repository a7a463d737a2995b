pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::Result;
use crate::feed::NewsFeed;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(feed: NewsFeed) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, feed).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, feed: NewsFeed) -> Result<()> {
    let mut tui_app = TuiApp::new(feed);
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // Initial load, drawn behind a loading indicator
    terminal.draw(|frame| layout::render(frame, &mut tui_app))?;
    tui_app.feed.load_more().await;

    loop {
        terminal.draw(|frame| layout::render(frame, &mut tui_app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => match Action::from(key) {
                Action::Quit => {
                    tui_app.should_quit = true;
                }
                Action::MoveUp => {
                    tui_app.move_up();
                }
                Action::MoveDown => {
                    tui_app.move_down();
                    if tui_app.near_end() {
                        // Loading flags and has_more gate this internally
                        tui_app.feed.load_more().await;
                    }
                }
                Action::GotoTop => {
                    tui_app.goto_top();
                }
                Action::GotoBottom => {
                    tui_app.goto_bottom();
                    if tui_app.near_end() {
                        tui_app.feed.load_more().await;
                    }
                }
                Action::Refresh => {
                    tui_app.feed.state.is_loading = true;
                    terminal.draw(|frame| layout::render(frame, &mut tui_app))?;

                    tui_app.feed.refresh().await;
                    tui_app.clamp_selection();
                }
                Action::DismissError => {
                    tui_app.feed.dismiss_error();
                }
                Action::None => {}
            },
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}
