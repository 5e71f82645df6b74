use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::view::{SceneView, SegmentKind};
use crate::game::{Direction, Point};
use crate::metrics::SessionMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &SceneView, metrics: &SessionMetrics) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

        let stats = self.render_stats(chunks[0], view, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the grid horizontally
        let game_area = Layout::horizontal([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(chunks[1])[1];

        if view.game_over {
            let game_over = self.render_game_over(game_area, view);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(game_area, view);
            frame.render_widget(grid, game_area);
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, view: &SceneView) -> Paragraph<'_> {
        let mut lines = Vec::new();

        // Rows from the top of the grid down: +y is up
        for y in (-view.bound..=view.bound).rev() {
            let mut spans = Vec::new();

            for x in -view.bound..=view.bound {
                let pos = Point::new(x, y);

                let cell = if let Some(segment) = view.segment_at(pos) {
                    match segment.kind {
                        SegmentKind::Head => Span::styled(
                            format!("{} ", heading_glyph(segment.heading)),
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        ),
                        SegmentKind::Tail => Span::styled(
                            format!("{} ", heading_glyph(segment.heading)),
                            Style::default().fg(Color::Green),
                        ),
                        SegmentKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
                    }
                } else if pos == view.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        view: &SceneView,
        metrics: &SessionMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.games_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, _area: Rect, view: &SceneView) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("←", Style::default().fg(Color::Cyan)),
            Span::raw("/"),
            Span::styled("A", Style::default().fg(Color::Cyan)),
            Span::raw(" turn left | "),
            Span::styled("→", Style::default().fg(Color::Cyan)),
            Span::raw("/"),
            Span::styled("D", Style::default().fg(Color::Cyan)),
            Span::raw(" turn right | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn heading_glyph(heading: Option<Direction>) -> char {
    match heading {
        Some(Direction::Up) => '▲',
        Some(Direction::Right) => '►',
        Some(Direction::Down) => '▼',
        Some(Direction::Left) => '◄',
        None => '□',
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
