//! Terminal setup and the main event loop

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::core::{event_handler::EventType, Component, EventHandler};
use super::photos_screen::PhotosScreen;
use super::theme::Theme;
use crate::backend::factory::create_backend;
use crate::config::Config;
use crate::icons::IconService;
use crate::uri::SystemUriHandler;
use crate::view_model::PhotosViewModel;

/// Run the TUI until the user quits
pub async fn run_app(config: Config) -> Result<()> {
    let backend = create_backend(&config.api)?;
    let theme = Theme::from_config(&config.theme, IconService::new(config.ui.icon_theme))?;

    let mut view_model = PhotosViewModel::new(backend, config.api.per_page);
    view_model.load_initial();
    let mut screen = PhotosScreen::new(view_model, theme, SystemUriHandler);

    let mut terminal = init_terminal(config.ui.mouse_enabled)?;
    let mut events = EventHandler::with_tick_rate(Duration::from_millis(config.ui.tick_rate_ms));

    let res = run_ui(&mut terminal, &mut screen, &mut events).await;

    // Restore the terminal whether or not the loop failed
    restore_terminal(&mut terminal, config.ui.mouse_enabled)?;
    log::info!("Exiting");

    res
}

fn init_terminal(mouse_enabled: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to initialise terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mouse_enabled: bool) -> Result<()> {
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    screen: &mut PhotosScreen,
    events: &mut EventHandler,
) -> Result<()> {
    let mut dirty = true;

    loop {
        if screen.poll_feed() {
            dirty = true;
        }

        if dirty && events.should_render() {
            terminal.draw(|f| screen.render(f, f.area()))?;
            events.mark_rendered();
            dirty = false;
        }

        let event = events.next_event().await?;
        match event {
            EventType::Resize(_, _) => dirty = true,
            EventType::Other => {}
            // Ticks also redraw so the busy indicator stays current
            ref input => {
                screen.handle_event(input);
                dirty = true;
            }
        }

        if screen.should_quit() {
            break;
        }
    }

    Ok(())
}
