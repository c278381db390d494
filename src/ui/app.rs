//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::DashboardConfig;
use crate::consts::cli_consts::layout::{HEADER_HEIGHT, PAGE_SCROLL_LINES};
use crate::dashboard::{RouteIntent, Router, assemble, card};
use crate::navigation::{Screen, StackRouter};
use crate::ui::dashboard::{DashboardState, render_dashboard, screen_layout};
use crate::ui::detail::{render_detail, render_unmatched};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::mpsc;

/// Lines scrolled per mouse wheel notch.
const WHEEL_SCROLL_LINES: i32 = 3;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The document the dashboard was assembled from.
    config: DashboardConfig,

    /// Dashboard view plus focus and scroll.
    dashboard: DashboardState,

    /// Screen stack.
    router: StackRouter,

    /// Handed to cards on activation; intents are applied on the next tick.
    intent_sender: mpsc::UnboundedSender<RouteIntent>,

    /// Receives intents issued by cards.
    intent_receiver: mpsc::UnboundedReceiver<RouteIntent>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(config: DashboardConfig, ui_config: UIConfig) -> Self {
        let (intent_sender, intent_receiver) = mpsc::unbounded_channel();
        let dashboard = DashboardState::new(assemble(&config), &ui_config);
        Self {
            config,
            dashboard,
            router: StackRouter::new(),
            intent_sender,
            intent_receiver,
        }
    }

    /// Lay the dashboard out for a terminal of the given size.
    pub fn resize(&mut self, area: Rect) {
        let [_, body_area, _] = screen_layout(area);
        self.dashboard.set_body_area(body_area);
    }

    /// Apply every intent issued since the last tick.
    pub fn drain_intents(&mut self) {
        while let Ok(intent) = self.intent_receiver.try_recv() {
            self.router.push(intent);
        }
    }

    fn on_dashboard(&self) -> bool {
        matches!(self.router.current(), Screen::Dashboard)
    }

    fn activate(&mut self, row: usize, column: usize) {
        let card = self
            .config
            .content
            .get(row)
            .and_then(|row| row.row.get(column));
        if let Some(card) = card {
            card::on_activate(card, &mut self.intent_sender);
        }
    }

    fn activate_focused(&mut self) {
        if let Some((row, column)) = self.dashboard.focused_position() {
            self.activate(row, column);
        }
    }

    fn go_back(&mut self) {
        if let Err(e) = self.router.back() {
            log::debug!("{}", e);
        }
    }

    /// Handle a key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Skip events that are not KeyEventKind::Press
        if key.kind == KeyEventKind::Release {
            return false;
        }
        if key.code == KeyCode::Char('q') {
            return true;
        }

        if self.on_dashboard() {
            match key.code {
                KeyCode::Esc => return true,
                KeyCode::Tab | KeyCode::Right | KeyCode::Down => self.dashboard.focus_next(),
                KeyCode::BackTab | KeyCode::Left | KeyCode::Up => self.dashboard.focus_prev(),
                KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
                KeyCode::PageDown => self.dashboard.scroll_by(PAGE_SCROLL_LINES as i32),
                KeyCode::PageUp => self.dashboard.scroll_by(-(PAGE_SCROLL_LINES as i32)),
                KeyCode::Char('j') => self.dashboard.scroll_by(1),
                KeyCode::Char('k') => self.dashboard.scroll_by(-1),
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => self.go_back(),
                KeyCode::Char('h') => self.router.home(),
                _ => {}
            }
        }
        false
    }

    /// Handle a mouse event: click to open a card, wheel to scroll, click the
    /// back arrow to leave a detail screen.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let on_dashboard = self.on_dashboard();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if on_dashboard => {
                if let Some((row, column)) = self.dashboard.card_at_screen(mouse.column, mouse.row)
                {
                    self.dashboard.focus_position(row, column);
                    self.activate(row, column);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row < HEADER_HEIGHT && mouse.column < 4 {
                    self.go_back();
                }
            }
            MouseEventKind::ScrollDown if on_dashboard => {
                self.dashboard.scroll_by(WHEEL_SCROLL_LINES)
            }
            MouseEventKind::ScrollUp if on_dashboard => {
                self.dashboard.scroll_by(-WHEEL_SCROLL_LINES)
            }
            _ => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the current screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // Apply navigation requested during the previous turn
        app.drain_intents();

        let size = terminal.size()?;
        app.resize(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|f| render(f, &app))?;

        // Poll for input events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    let last_event = app.router.last_displayed_event();
    match app.router.current() {
        Screen::Dashboard => render_dashboard(f, &app.dashboard, last_event),
        Screen::Detail(detail) => render_detail(f, detail, last_event),
        Screen::Unmatched { route } => render_unmatched(f, route, last_event),
    }
}
