use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::{Bounds, GameState};

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub phase: GameState,
    pub score: u32,
    pub tick_count: u64,
    pub player: Bounds,
    pub enemies: &'a [Bounds],
    pub projectiles: &'a [Bounds],
    pub arena_width: f32,
    pub arena_height: f32,
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to state-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.phase {
            GameState::Start => self.render_start(frame, view),
            GameState::Playing => self.render_game(frame, view),
            GameState::GameOver => self.render_game_over(frame, view),
        }
    }

    fn render_start(&self, frame: &mut Frame, view: &RenderView) {
        let start_text = vec![
            Line::from(""),
            Line::from("SPACE INVADERS").centered().green().bold(),
            Line::from(""),
            Line::from("Press SPACE to start").centered().white(),
            Line::from("Arrow keys to move, SPACE to shoot")
                .centered()
                .dark_gray(),
        ];

        frame.render_widget(
            Paragraph::new(start_text).alignment(Alignment::Center),
            centered_box(view.area, 44, 8),
        );
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        // Render stars (simple background)
        if view.tick_count % 10 < 5 {
            let star_text = (0..area.height)
                .map(|_| {
                    let mut rng = rand::rng();
                    if rng.random_bool(0.05) { "." } else { " " }
                })
                .collect::<Vec<_>>()
                .join("\n");
            frame.render_widget(
                Paragraph::new(star_text).style(Style::default().fg(Color::DarkGray)),
                area,
            );
        }

        // Render enemies
        for enemy in view.enemies {
            if let Some(cells) = project(enemy, view) {
                fill(
                    frame,
                    cells,
                    '▓',
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                );
            }
        }

        // Render projectiles
        for projectile in view.projectiles {
            if let Some(cells) = project(projectile, view) {
                fill(frame, cells, '|', Style::default().fg(Color::Yellow));
            }
        }

        // Render player
        if let Some(cells) = project(&view.player, view) {
            fill(
                frame,
                cells,
                '█',
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );
        }

        // Score overlay at the top
        let score_line = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let score_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(score_line), score_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[←/a →/d: Move] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };

        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        GAME OVER          ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press SPACE to play again").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            view.area,
        );
    }
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map arena-space bounds onto terminal cells, clipped to the render area.
/// Returns None when the box falls entirely off screen.
fn project(bounds: &Bounds, view: &RenderView) -> Option<Rect> {
    let area = view.area;
    let sx = f32::from(area.width) / view.arena_width;
    let sy = f32::from(area.height) / view.arena_height;

    let left = (bounds.left() * sx).round() as i32;
    let top = (bounds.top() * sy).round() as i32;
    let width = ((bounds.width() * sx).round() as i32).max(1);
    let height = ((bounds.height() * sy).round() as i32).max(1);

    let x0 = left.max(0);
    let y0 = top.max(0);
    let x1 = (left + width).min(i32::from(area.width));
    let y1 = (top + height).min(i32::from(area.height));
    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    Some(Rect {
        x: area.x + x0 as u16,
        y: area.y + y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}

/// Fill a cell rectangle with one glyph.
fn fill(frame: &mut Frame, cells: Rect, glyph: char, style: Style) {
    let row: String = std::iter::repeat_n(glyph, cells.width as usize).collect();
    let lines: Vec<Line> = (0..cells.height).map(|_| Line::from(row.clone())).collect();
    frame.render_widget(Paragraph::new(lines).style(style), cells);
}

/// A fixed-size box centered in the given area, shrunk to fit.
fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
