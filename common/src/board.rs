use serde::{Deserialize, Serialize};
use crate::{Player, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const FOOD: Color = Color::new(200, 30, 10);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Colors used to paint the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub head: Color,
    pub body: Color,
    pub food: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Color::BLACK,
            head: Color::BLUE,
            body: Color::GREEN,
            food: Color::FOOD,
        }
    }
}

/// Something cells can be painted on.
pub trait Surface {
    fn fill(&mut self, col: u16, row: u16, color: Color);
    fn clear(&mut self);
}

/// RGB8 pixel buffer laid out as a grid of square cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u16,
    rows: u16,
    cell_size: u16,
    background: Color,
    pixels: Vec<u8>,
}

impl Board {
    pub fn new(cols: u16, rows: u16, cell_size: u16, background: Color) -> Self {
        let len = cols as usize * cell_size as usize * rows as usize * cell_size as usize * 3;
        let mut board = Board {
            cols,
            rows,
            cell_size,
            background,
            pixels: vec![0; len],
        };
        board.clear();
        board
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell_size(&self) -> u16 {
        self.cell_size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Width of the pixel buffer in pixels.
    pub fn pixel_width(&self) -> usize {
        self.cols as usize * self.cell_size as usize
    }

    pub fn pixel_height(&self) -> usize {
        self.rows as usize * self.cell_size as usize
    }

    /// Raw RGB8 bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of a cell, sampled from its top-left pixel.
    pub fn cell_color(&self, col: u16, row: u16) -> Option<Color> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        let px = col as usize * self.cell_size as usize;
        let py = row as usize * self.cell_size as usize;
        let i = (py * self.pixel_width() + px) * 3;
        Some(Color::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }
}

impl Surface for Board {
    fn fill(&mut self, col: u16, row: u16, color: Color) {
        if col >= self.cols || row >= self.rows {
            return;
        }
        let size = self.cell_size as usize;
        let width = self.pixel_width();
        let x0 = col as usize * size;
        let y0 = row as usize * size;
        for y in y0..y0 + size {
            let start = (y * width + x0) * 3;
            for px in self.pixels[start..start + size * 3].chunks_exact_mut(3) {
                px.copy_from_slice(&[color.r, color.g, color.b]);
            }
        }
    }

    fn clear(&mut self) {
        let bg = self.background;
        for px in self.pixels.chunks_exact_mut(3) {
            px.copy_from_slice(&[bg.r, bg.g, bg.b]);
        }
    }
}

/// Repaint the whole frame: background, then head, body and food on top.
pub fn draw_world<S: Surface>(surface: &mut S, world: &World, player: &Player, palette: &Palette) {
    surface.clear();

    let head = player.snake.head();
    surface.fill(head.x as u16, head.y as u16, palette.head);
    for p in player.snake.segment_positions() {
        surface.fill(p.x as u16, p.y as u16, palette.body);
    }
    for food in &world.foods {
        surface.fill(food.position.x as u16, food.position.y as u16, food.color);
    }
}
