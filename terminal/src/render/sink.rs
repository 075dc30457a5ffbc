use super::board::board_lines;
use super::types::{CellDimensions, Hud};
use anyhow::Result;
use common::Board;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

/// Presents a finished frame. Called once per loop iteration.
pub trait DisplaySink {
    fn present(&mut self, board: &Board, hud: &Hud) -> Result<()>;
}

pub struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    dims: CellDimensions,
}

impl<B: Backend> TerminalSink<B> {
    pub fn new(backend: B, dims: CellDimensions) -> Result<Self> {
        Ok(Self { terminal: Terminal::new(backend)?, dims })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> DisplaySink for TerminalSink<B> {
    fn present(&mut self, board: &Board, hud: &Hud) -> Result<()> {
        let dims = self.dims;
        self.terminal.draw(|f| render_frame(f, board, hud, dims))?;
        Ok(())
    }
}

// Cells times chars per cell plus the border, clamped to what a terminal can address
fn outer_size(cells: u16, chars_per_cell: u16) -> u16 {
    let size = cells as u32 * chars_per_cell as u32 + 2;
    size.min(u16::MAX as u32) as u16
}

pub fn render_frame(frame: &mut Frame, board: &Board, hud: &Hud, dims: CellDimensions) {
    let board_height = outer_size(board.rows(), dims.vertical);
    let board_width = outer_size(board.cols(), dims.horizontal);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height),
            Constraint::Length(1), // Status
            Constraint::Length(1), // Controls help
            Constraint::Min(0),
        ])
        .split(frame.area());

    let mut arena_area = chunks[0];
    arena_area.width = arena_area.width.min(board_width);

    let arena = Paragraph::new(board_lines(board, dims))
        .block(Block::default().borders(Borders::ALL).title(" gridsnake "));
    frame.render_widget(arena, arena_area);

    let status = Paragraph::new(hud.status_line())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(status, chunks[1]);

    let help = Paragraph::new("WASD move  g grow  n/m faster/slower  Esc quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}
