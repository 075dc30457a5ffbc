use super::types::CellDimensions;
use common::Board;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

pub fn to_terminal_color(c: common::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Turn the board's cells into styled terminal lines, one colored block per cell.
pub fn board_lines(board: &Board, dims: CellDimensions) -> Vec<Line<'static>> {
    let blank = " ".repeat(dims.horizontal as usize);
    let mut lines = Vec::with_capacity(board.rows() as usize * dims.vertical as usize);

    for row in 0..board.rows() {
        let spans: Vec<Span<'static>> = (0..board.cols())
            .map(|col| {
                let color = board.cell_color(col, row).unwrap_or(board.background());
                Span::styled(blank.clone(), Style::default().bg(to_terminal_color(color)))
            })
            .collect();

        for _ in 0..dims.vertical {
            lines.push(Line::from(spans.clone()));
        }
    }

    lines
}
