use crate::catalog::Catalog;
use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::filter::Location;
use crate::logger;
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    config: Config,
}

impl App {
    /// Start the listing page over the catalog at the given location. Returns
    /// the location the page ended on.
    ///
    pub fn start(config: Config, catalog: Catalog, location: Location) -> Result<String> {
        logger::init(config.log_level_filter())?;

        info!("Starting application...");
        let theme = Theme::by_name(&config.theme_name);
        let mut state = State::new(catalog, config.search_debounce(), location, theme);
        state.mount();

        let mut app = App { state, config };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(app.state.location().to_string())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whether the
    /// loop ends on request or on error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run(&mut self, terminal: &mut AppTerminal) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            if let Ok(size) = terminal.size() {
                self.state.set_terminal_size(size);
            }
            tui_logger::move_events();
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
            self.save_theme_change();
        }
        Ok(())
    }

    /// Persist the colour theme after the user cycles it.
    ///
    fn save_theme_change(&mut self) {
        if let Some(name) = self.state.take_theme_change() {
            self.config.theme_name = name;
            if let Err(e) = self.config.save() {
                error!("Failed to save config: {}", e);
            }
        }
    }
}
