//! Main application orchestrator.

use crossterm::event::{Event, EventStream, KeyEvent, MouseEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::{KioskEvent, KioskSettings, KioskShell};
use crate::domain::Catalog;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::{KioskScreen, KioskScreenState, ScreenCommand};

/// Owns the kiosk state and drives the terminal event loop.
pub struct App {
    shell: KioskShell,
    screen: KioskScreenState,
    theme: Theme,
    event_rx: mpsc::UnboundedReceiver<KioskEvent>,
}

impl App {
    /// Builds the app around a fresh shell whose timers report back to this app.
    #[must_use]
    pub fn new(catalog: Catalog, settings: KioskSettings, theme: Theme) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            shell: KioskShell::new(catalog, settings, event_tx),
            screen: KioskScreenState::new(),
            theme,
            event_rx,
        }
    }

    /// The kiosk state.
    #[must_use]
    pub const fn shell(&self) -> &KioskShell {
        &self.shell
    }

    /// # Errors
    /// Returns error if drawing to or reading from the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let result = self.run_event_loop(terminal).await;
        self.shell.shutdown();
        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        loop {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.shell.handle_event(event);
                }
                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                return Ok(());
                            }
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "Terminal event error");
                        }
                        None => {
                            debug!("Terminal event stream closed");
                            return Ok(());
                        }
                    }
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let screen = KioskScreen::new(&self.shell, &self.theme);
        frame.render_stateful_widget(screen, frame.area(), &mut self.screen);
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        let command = match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => None,
        };
        command.map_or(EventResult::Continue, |command| self.apply(command))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenCommand> {
        if !EventHandler::is_press(&key) {
            return None;
        }
        self.screen.handle_key(key, &self.shell)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<ScreenCommand> {
        let (column, row) = EventHandler::left_click(&mouse)?;
        self.screen.handle_click(column, row, &self.shell)
    }

    fn apply(&mut self, command: ScreenCommand) -> EventResult {
        match command {
            ScreenCommand::AddItem(item) => self.shell.add_to_order(item),
            ScreenCommand::RemoveLine(position) => {
                self.shell.remove_from_order(position);
            }
            ScreenCommand::ProcessOrder(total) => {
                self.shell.process_order(total);
            }
            ScreenCommand::Quit => {
                info!("Quit requested");
                return EventResult::Exit;
            }
        }
        EventResult::Continue
    }
}
