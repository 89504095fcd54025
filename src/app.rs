use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;

use crate::input::InputKey;
use crate::renderer::{GameRenderer, RenderView};
use crate::session::{Session, SessionConfig};

/// The loop driver: owns the session and the renderer, translates terminal
/// key events into logical inputs, and ticks the simulation once per frame.
pub struct App {
    /// Is the application running?
    running: bool,
    session: Session,
    renderer: GameRenderer,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new() -> Result<Self> {
        Ok(Self {
            running: true,
            session: Session::new(SessionConfig::default())?,
            renderer: GameRenderer::new(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            terminal.draw(|frame| {
                let enemies = self.session.enemy_bounds();
                let projectiles = self.session.projectile_bounds();
                let view = RenderView {
                    phase: self.session.phase(),
                    score: self.session.score(),
                    tick_count: self.session.tick_count(),
                    player: self.session.player_bounds(),
                    enemies: &enemies,
                    projectiles: &projectiles,
                    arena_width: self.session.config().arena_width,
                    arena_height: self.session.config().arena_height,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            self.handle_events()?;
            self.session.advance();

            // Small sleep to maintain ~60 FPS and prevent CPU spinning
            std::thread::sleep(Duration::from_millis(16));
        }
        Ok(())
    }

    /// Drain all pending terminal events without blocking.
    fn handle_events(&mut self) -> Result<()> {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Map a terminal key event onto the three logical inputs. Quit stays a
    /// driver concern and never reaches the session.
    fn on_key_event(&mut self, key: KeyEvent) {
        let pressed = match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => true,
            KeyEventKind::Release => false,
        };

        if pressed {
            match (key.modifiers, key.code) {
                (_, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
                | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
                    self.quit();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.session.set_input(InputKey::Left, pressed);
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.session.set_input(InputKey::Right, pressed);
            }
            KeyCode::Char(' ') => {
                self.session.set_input(InputKey::Fire, pressed);
            }
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
