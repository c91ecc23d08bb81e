use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Duration;

use crate::game::{BoardView, Cell, EndCause, GameState, GameStatus};
use crate::metrics::SessionStats;

/// Draws one frame: stats header, the projected board (or the end screen),
/// and a controls footer. All game knowledge comes in through [`BoardView`]
/// and the few scalar fields read here; the renderer never walks the snake.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        stats: &SessionStats,
        tick: Duration,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Controls
            ])
            .split(frame.area());

        frame.render_widget(self.header(state, stats, tick), chunks[0]);

        // Center the board horizontally
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.status {
            GameStatus::Playing => {
                let view = BoardView::project(state);
                frame.render_widget(self.board(&view), board_area);
            }
            GameStatus::Over(cause) => {
                frame.render_widget(self.end_screen(state, stats, cause), board_area);
            }
        }

        frame.render_widget(self.controls(), chunks[2]);
    }

    fn board(&self, view: &BoardView) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(view.height());

        for y in 0..view.height() {
            let mut spans = Vec::with_capacity(view.width());
            for x in 0..view.width() {
                spans.push(match view.cell(x, y) {
                    Cell::SnakeHead => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::SnakeBody => Span::styled("□ ", Style::default().fg(Color::Green)),
                    Cell::Food => Span::styled(
                        "● ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                });
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

    fn header(&self, state: &GameState, stats: &SessionStats, tick: Duration) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                state.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", label),
            Span::styled(stats.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Tick: ", label),
            Span::styled(format!("{}ms", tick.as_millis()), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(stats.elapsed_text(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn end_screen(
        &self,
        state: &GameState,
        stats: &SessionStats,
        cause: EndCause,
    ) -> Paragraph<'_> {
        let (headline, detail, accent) = match cause {
            EndCause::HitWall => ("GAME OVER", "Ran into the wall", Color::Red),
            EndCause::HitSelf => ("GAME OVER", "Ran into yourself", Color::Red),
            EndCause::BoardCleared => ("YOU WIN!", "Nothing left but snake", Color::Green),
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                headline,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(detail, Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(stats.high_score.to_string(), Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    stats.games_played.to_string(),
                    Style::default().fg(Color::White),
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
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
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
                .border_style(Style::default().fg(accent)),
        )
    }

    fn controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine};
    use ratatui::{Terminal, backend::TestBackend};

    /// Draw one frame into a test buffer and flatten it to text, one line
    /// per terminal row
    fn screen_text(state: &GameState, stats: &SessionStats) -> String {
        let renderer = Renderer::new();
        let mut terminal = Terminal::new(TestBackend::new(64, 32)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, state, stats, Duration::from_millis(160)))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let mut text = String::new();
        for (i, cell) in buffer.content.iter().enumerate() {
            if i > 0 && i % width == 0 {
                text.push('\n');
            }
            text.push_str(cell.symbol());
        }
        text
    }

    #[test]
    fn test_playing_screen_shows_header_and_board() {
        let mut engine = GameEngine::new(GameConfig::small());
        let state = engine.reset();
        let stats = SessionStats::new();

        let text = screen_text(&state, &stats);

        assert!(text.contains("Score: 0"));
        assert!(text.contains("Tick: 160ms"));
        assert!(text.contains("■"));
        assert!(text.contains("●"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_end_screen_reports_session_stats() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.score = 4;
        state.status = GameStatus::Over(EndCause::HitSelf);

        let mut stats = SessionStats::new();
        stats.record_game(6);
        stats.record_game(4);

        let text = screen_text(&state, &stats);

        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final Score: 4"));
        assert!(text.contains("High Score: 6"));
        assert!(text.contains("Games: 2"));
    }

    #[test]
    fn test_win_screen_headline() {
        let mut engine = GameEngine::new(GameConfig::small());
        let mut state = engine.reset();
        state.status = GameStatus::Over(EndCause::BoardCleared);
        let stats = SessionStats::new();

        let text = screen_text(&state, &stats);

        assert!(text.contains("YOU WIN!"));
        assert!(!text.contains("GAME OVER"));
    }
}
