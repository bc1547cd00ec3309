//! Client controller: routes terminal input into the game and game events
//! into presentation state.
//!
//! Kept free of terminal I/O so the whole flow can be driven from tests.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};

use crate::config::AppConfig;
use crate::core::{GameSnapshot, GameState};
use crate::input::{handle_key_event, left_click, should_quit, BoardCursor, Direction, UiCommand};
use crate::term::{FrameBuffer, GameView, HudState, Viewport};
use crate::types::{Difficulty, GameEvent};

/// How long a status message stays on screen.
pub const MESSAGE_MS: u64 = 3000;

/// Screen the client is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu { selected: Difficulty },
    Playing,
}

/// Whether the loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusMessage {
    text: String,
    expires_ms: u64,
}

pub struct App {
    game: GameState,
    screen: Screen,
    cursor: BoardCursor,
    view: GameView,
    sound: bool,
    show_help: bool,
    /// Set when opening help paused the clock, so closing it resumes.
    help_paused: bool,
    message: Option<StatusMessage>,
    now_ms: u64,
    bells: u32,
    snapshot: GameSnapshot,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let difficulty = config.difficulty.unwrap_or(Difficulty::Easy);
        let game = GameState::with_difficulty(difficulty, config.seed);
        let screen = match config.difficulty {
            Some(_) => Screen::Playing,
            None => Screen::Menu {
                selected: Difficulty::Easy,
            },
        };

        let mut app = Self {
            cursor: BoardCursor::new(game.rows(), game.cols()),
            game,
            screen,
            view: GameView::default(),
            sound: config.sound,
            show_help: false,
            help_paused: false,
            message: None,
            now_ms: 0,
            bells: 0,
            snapshot: GameSnapshot::default(),
        };
        app.drain_game_events();
        app
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cursor(&self) -> BoardCursor {
        self.cursor
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    /// Number of bells requested since the last call.
    pub fn take_bells(&mut self) -> u32 {
        std::mem::take(&mut self.bells)
    }

    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event, viewport: Viewport) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, viewport);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if should_quit(key) {
            return Flow::Quit;
        }
        let Some(command) = handle_key_event(key) else {
            return Flow::Continue;
        };

        match self.screen {
            Screen::Menu { selected } => self.menu_command(selected, command),
            Screen::Playing => self.play_command(command),
        }
        self.drain_game_events();
        Flow::Continue
    }

    /// Left click selects the tile under the pointer.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, viewport: Viewport) {
        if self.screen != Screen::Playing || self.show_help {
            return;
        }
        let Some((x, y)) = left_click(mouse) else {
            return;
        };

        self.game.snapshot_into(&mut self.snapshot);
        if let Some(pos) = self.view.tile_at(&self.snapshot, viewport, x, y) {
            self.cursor.set(pos);
            self.game.select_tile(pos);
            self.drain_game_events();
        }
    }

    /// Move game time forward by `elapsed_ms` of wall time.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.now_ms += elapsed_ms as u64;
        if self.screen == Screen::Playing {
            self.game.advance(elapsed_ms);
            self.drain_game_events();
        }
        if self
            .message
            .as_ref()
            .is_some_and(|m| m.expires_ms <= self.now_ms)
        {
            self.message = None;
        }
    }

    /// Hash of everything the next frame would show.
    pub fn fingerprint(&mut self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        self.game.snapshot_into(&mut self.snapshot);
        let mut h = DefaultHasher::new();
        self.snapshot.fingerprint().hash(&mut h);
        match self.screen {
            Screen::Menu { selected } => selected.as_str().hash(&mut h),
            Screen::Playing => "playing".hash(&mut h),
        }
        self.cursor.position().hash(&mut h);
        self.show_help.hash(&mut h);
        self.message().hash(&mut h);
        h.finish()
    }

    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Menu { selected } => self.view.render_menu_into(selected, viewport, fb),
            Screen::Playing => {
                self.game.snapshot_into(&mut self.snapshot);
                let hud = HudState {
                    cursor: Some(self.cursor.position()),
                    message: self.message.as_ref().map(|m| m.text.as_str()),
                    show_help: self.show_help,
                };
                self.view.render_into(&self.snapshot, hud, viewport, fb);
            }
        }
    }

    fn menu_command(&mut self, selected: Difficulty, command: UiCommand) {
        let pos = Difficulty::ALL.iter().position(|d| *d == selected).unwrap_or(0);
        let len = Difficulty::ALL.len();
        match command {
            UiCommand::Move(Direction::Up) | UiCommand::Move(Direction::Left) => {
                self.screen = Screen::Menu {
                    selected: Difficulty::ALL[(pos + len - 1) % len],
                };
            }
            UiCommand::Move(Direction::Down) | UiCommand::Move(Direction::Right) => {
                self.screen = Screen::Menu {
                    selected: Difficulty::ALL[(pos + 1) % len],
                };
            }
            UiCommand::Select => self.start(selected),
            UiCommand::Difficulty(difficulty) => self.start(difficulty),
            _ => {}
        }
    }

    fn start(&mut self, difficulty: Difficulty) {
        tracing::info!(difficulty = difficulty.as_str(), "starting game");
        self.game.select_difficulty(difficulty);
        self.screen = Screen::Playing;
    }

    fn play_command(&mut self, command: UiCommand) {
        if self.show_help {
            if command == UiCommand::Help {
                self.toggle_help();
            }
            return;
        }

        match command {
            UiCommand::Move(dir) => self.cursor.step(dir),
            UiCommand::Select => {
                self.game.select_tile(self.cursor.position());
            }
            UiCommand::Hint => {
                if let Err(err) = self.game.hint() {
                    tracing::debug!(%err, "hint refused");
                }
            }
            UiCommand::Pause => {
                self.game.toggle_pause();
            }
            UiCommand::Restart => self.game.reset(),
            UiCommand::Help => self.toggle_help(),
            UiCommand::Difficulty(difficulty) => self.game.select_difficulty(difficulty),
        }
    }

    fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.help_paused = self.game.clock_running() && self.game.toggle_pause();
        } else if self.help_paused {
            self.help_paused = false;
            if self.game.paused() {
                self.game.toggle_pause();
            }
        }
    }

    fn drain_game_events(&mut self) {
        for event in self.game.take_events() {
            match event {
                GameEvent::NewRound {
                    generation,
                    rows,
                    cols,
                } => {
                    tracing::info!(generation, rows, cols, "new round");
                    self.cursor.resize(rows, cols);
                    self.message = None;
                }
                GameEvent::PlaySound(kind) => {
                    tracing::trace!(sound = kind.as_str(), "sound");
                    if self.sound {
                        self.bells += 1;
                    }
                }
                GameEvent::ShowMessage(text) => {
                    self.message = Some(StatusMessage {
                        text,
                        expires_ms: self.now_ms + MESSAGE_MS,
                    });
                }
                GameEvent::RoundWon { final_score } => {
                    tracing::info!(final_score, "round won");
                }
                GameEvent::RoundLost { final_score } => {
                    tracing::info!(final_score, "round lost");
                }
                other => tracing::trace!(?other, "game event"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use std::path::PathBuf;

    fn config(difficulty: Option<Difficulty>) -> AppConfig {
        AppConfig {
            difficulty,
            seed: 7,
            sound: true,
            log_dir: PathBuf::from("/tmp"),
        }
    }

    fn press(app: &mut App, code: KeyCode) -> Flow {
        app.handle_key(KeyEvent::from(code))
    }

    #[test]
    fn menu_shows_without_configured_difficulty() {
        let app = App::new(&config(None));
        assert_eq!(
            app.screen(),
            Screen::Menu {
                selected: Difficulty::Easy
            }
        );
    }

    #[test]
    fn menu_navigation_starts_selected_difficulty() {
        let mut app = App::new(&config(None));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.game().difficulty(), Some(Difficulty::Hard));
        assert_eq!((app.game().rows(), app.game().cols()), (8, 8));
    }

    #[test]
    fn menu_does_not_run_the_clock() {
        let mut app = App::new(&config(None));
        app.update(10_000);
        assert_eq!(app.game().seconds_remaining(), 45);
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(&config(Some(Difficulty::Easy)));
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Flow::Quit);
    }

    #[test]
    fn enter_reveals_tile_under_cursor() {
        let mut app = App::new(&config(Some(Difficulty::Easy)));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().pending(), Some(app.cursor().position()));
        assert_eq!(app.cursor().position(), crate::types::Position::new(0, 1));
    }

    #[test]
    fn hint_without_points_shows_message_then_expires() {
        let mut app = App::new(&config(Some(Difficulty::Easy)));
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(
            app.message(),
            Some("You need at least 5 points to use a hint.")
        );
        assert_eq!(app.game().score(), 0);

        app.update(MESSAGE_MS as u32);
        assert_eq!(app.message(), None);
    }

    #[test]
    fn help_pauses_and_resumes_clock() {
        let mut app = App::new(&config(Some(Difficulty::Easy)));
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help());
        assert!(app.game().paused());

        // Other commands are swallowed while help is open.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().pending(), None);

        press(&mut app, KeyCode::Char('?'));
        assert!(!app.show_help());
        assert!(!app.game().paused());
    }

    #[test]
    fn help_keeps_user_pause() {
        let mut app = App::new(&config(Some(Difficulty::Easy)));
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('?'));
        assert!(app.game().paused());
    }

    #[test]
    fn mismatch_rings_bell_when_sound_enabled() {
        let mut app = App::new(&config(Some(Difficulty::Easy)));
        let first = app.game().board().tiles()[0].value;
        let other = app
            .game()
            .board()
            .tiles()
            .iter()
            .position(|t| t.value != first)
            .unwrap();
        let target = app.game().board().position(other);

        press(&mut app, KeyCode::Enter);
        app.game.select_tile(target);
        app.drain_game_events();
        assert_eq!(app.take_bells(), 1);
        assert_eq!(app.take_bells(), 0);
    }

    #[test]
    fn difficulty_key_resizes_cursor() {
        let mut app = App::new(&config(Some(Difficulty::Hard)));
        for _ in 0..7 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.cursor().position().row, 7);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.cursor().position().row, 3);
        assert_eq!(app.game().total_pairs(), 8);
    }

    #[test]
    fn click_selects_tile_under_pointer() {
        let mut app = App::new(&config(Some(Difficulty::Easy)));
        let vp = Viewport::new(80, 24);
        let layout = app.view.layout(4, 4, vp);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: layout.start_x + 2,
            row: layout.start_y + 1,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click, vp);
        assert_eq!(app.game().pending(), Some(crate::types::Position::new(0, 0)));
    }

    #[test]
    fn fingerprint_tracks_cursor() {
        let mut app = App::new(&config(Some(Difficulty::Easy)));
        let before = app.fingerprint();
        press(&mut app, KeyCode::Down);
        assert_ne!(before, app.fingerprint());
    }
}
