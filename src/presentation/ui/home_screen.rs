//! Home screen with the Login and Logout controls.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::infrastructure::config::LoginMode;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{StatusBar, StatusLevel};

const LOGO: [&str; 5] = [
    r"   .--.   ",
    r" /  ()  \ ",
    r"|  (  )  |",
    r" \  ()  / ",
    r"   '--'   ",
];

/// Focusable buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Control {
    Login,
    Logout,
}

impl Control {
    const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Logout => "Logout",
        }
    }

    const fn other(self) -> Self {
        match self {
            Self::Login => Self::Logout,
            Self::Logout => Self::Login,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum HomeAction {
    None,
    Login,
    Logout,
}

/// Home screen UI.
///
/// Shows the logo only while authenticated. There is no loading or error
/// state: effect failures are logged, not displayed.
pub struct HomeScreen {
    focus: Control,
    authenticated: bool,
    login_mode: LoginMode,
}

impl HomeScreen {
    /// Creates new home screen.
    #[must_use]
    pub const fn new(login_mode: LoginMode) -> Self {
        Self {
            focus: Control::Login,
            authenticated: false,
            login_mode,
        }
    }

    /// Returns the focused control.
    #[must_use]
    pub const fn focus(&self) -> Control {
        self.focus
    }

    /// Returns the flag the screen renders from.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Updates the rendered flag from the store.
    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        if EventHandler::is_submit_event(&key) {
            return match self.focus {
                Control::Login => HomeAction::Login,
                Control::Logout => HomeAction::Logout,
            };
        }

        match key.code {
            KeyCode::Char('l') => HomeAction::Login,
            KeyCode::Char('o') => HomeAction::Logout,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = self.focus.other();
                HomeAction::None
            }
            _ => HomeAction::None,
        }
    }

    fn button(&self, control: Control, area: Rect, buf: &mut Buffer) {
        let style = if self.focus == control {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Paragraph::new(control.label())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .render(area, buf);
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Fill(1),
            Constraint::Length(1),
        ]);
        let [_, center, _, footer] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(40),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" authshell ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [logo_area, _, text_area, _, buttons_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(inner);

        if self.authenticated {
            let logo: Vec<Line> = LOGO.iter().map(|row| Line::from(*row)).collect();
            Paragraph::new(logo)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Cyan))
                .render(logo_area, buf);
        }

        let text = if self.authenticated {
            "You are logged in."
        } else {
            "You are logged out."
        };
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(text_area, buf);

        let [_, login_area, _, logout_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Fill(1),
        ])
        .areas(buttons_area);
        self.button(Control::Login, login_area, buf);
        self.button(Control::Logout, logout_area, buf);

        let level = if self.authenticated {
            StatusLevel::Success
        } else {
            StatusLevel::Info
        };
        let status = StatusBar::new()
            .left(" Tab: Focus | Enter: Press | l: Login | o: Logout | q: Quit")
            .right(format!("login: {} ", self.login_mode))
            .level(level);
        (&status).render(footer, buf);
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn rendered(screen: &HomeScreen) -> String {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf);
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_initial_state() {
        let screen = HomeScreen::new(LoginMode::Action);
        assert_eq!(screen.focus(), Control::Login);
        assert!(!screen.is_authenticated());
    }

    #[test]
    fn test_enter_presses_focused_control() {
        let mut screen = HomeScreen::new(LoginMode::Action);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), HomeAction::Login);

        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), Control::Logout);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), HomeAction::Logout);
    }

    #[test]
    fn test_shortcuts() {
        let mut screen = HomeScreen::new(LoginMode::Action);
        assert_eq!(screen.handle_key(key(KeyCode::Char('l'))), HomeAction::Login);
        assert_eq!(screen.handle_key(key(KeyCode::Char('o'))), HomeAction::Logout);
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), HomeAction::None);
    }

    #[test]
    fn test_focus_wraps() {
        let mut screen = HomeScreen::new(LoginMode::Action);
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Right));
        assert_eq!(screen.focus(), Control::Login);
    }

    #[test]
    fn test_logo_only_when_authenticated() {
        let mut screen = HomeScreen::new(LoginMode::Effect);

        let logged_out = rendered(&screen);
        assert!(logged_out.contains("logged out"));
        assert!(!logged_out.contains("()"));
        assert!(logged_out.contains("Login"));
        assert!(logged_out.contains("Logout"));
        assert!(logged_out.contains("login: effect"));

        screen.set_authenticated(true);
        let logged_in = rendered(&screen);
        assert!(logged_in.contains("logged in"));
        assert!(logged_in.contains("()"));
    }
}
