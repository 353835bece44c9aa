//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::application::store::{AuthAction, Store};
use crate::application::use_cases::LoginEffect;
use crate::domain::entities::AuthToken;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;
use crate::infrastructure::config::{LoginConfig, LoginMode};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::home_screen::{HomeAction, HomeScreen};

type EffectOutcome = Result<AuthToken, AuthError>;

/// Owns the home screen and routes its controls to the store.
pub struct App {
    running: bool,
    screen: HomeScreen,
    store: Store,
    login_effect: LoginEffect,
    login_config: LoginConfig,
    effect_tx: mpsc::UnboundedSender<EffectOutcome>,
    effect_rx: mpsc::UnboundedReceiver<EffectOutcome>,
}

impl App {
    /// Creates the app, syncing the screen with the current auth flag.
    #[must_use]
    pub fn new(store: Store, auth_port: Arc<dyn AuthPort>, login_config: LoginConfig) -> Self {
        let login_effect = LoginEffect::new(auth_port, store.clone());
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();
        let mut screen = HomeScreen::new(login_config.mode);
        screen.set_authenticated(store.select(|state| state.auth.is_authenticated));

        Self {
            running: true,
            screen,
            store,
            login_effect,
            login_config,
            effect_tx,
            effect_rx,
        }
    }

    /// Runs the event loop until a quit key is pressed.
    ///
    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut state_rx = self.store.subscribe();

        info!(mode = %self.login_config.mode, "Starting UI");
        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(outcome) = self.effect_rx.recv() => {
                    self.handle_effect_outcome(outcome);
                }

                Ok(()) = state_rx.changed() => {
                    let authenticated = state_rx.borrow_and_update().auth.is_authenticated;
                    self.screen.set_authenticated(authenticated);
                }

                Some(event) = terminal_events.next() => {
                    if let Some(key) = EventHandler::key_press(&event?) {
                        if self.handle_key(key) == EventResult::Exit {
                            self.running = false;
                        }
                    }
                }

                else => break,
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        frame.render_widget(&self.screen, frame.area());
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match self.screen.handle_key(key) {
            HomeAction::Login => self.login(),
            HomeAction::Logout => self.logout(),
            HomeAction::None => {}
        }

        EventResult::Continue
    }

    fn login(&self) {
        match self.login_config.mode {
            LoginMode::Action => {
                debug!("Dispatching login action");
                self.store.dispatch(AuthAction::Login);
            }
            LoginMode::Effect => {
                debug!("Spawning login effect");
                let effect = self.login_effect.clone();
                let credentials = self.login_config.credentials();
                let tx = self.effect_tx.clone();
                tokio::spawn(async move {
                    let outcome = effect.execute(credentials).await;
                    let _ = tx.send(outcome);
                });
            }
        }
    }

    fn logout(&self) {
        debug!("Dispatching logout action");
        self.store.dispatch(AuthAction::Logout);
    }

    fn handle_effect_outcome(&self, outcome: EffectOutcome) {
        match outcome {
            Ok(token) => info!(token = %token, "Login effect completed"),
            Err(e) => error!(error = %e, "Login effect failed"),
        }
    }
}
