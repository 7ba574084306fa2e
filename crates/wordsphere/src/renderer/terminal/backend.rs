//! Terminal backend implementation

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::CellMetrics;
use crate::renderer::{Color, DrawCommand, RenderBackend, RenderError, SurfaceCapabilities, TextBounds};

/// Opacity at which labels switch to bold
const BOLD_OPACITY: f64 = 0.75;

/// Cell in the terminal buffer
#[derive(Clone, PartialEq)]
struct Cell {
    symbol: String,
    fg: Color,
    bg: Color,
    bold: bool,
    depth: f64,
}

impl Cell {
    fn blank(bg: Color) -> Self {
        Self {
            symbol: " ".to_string(),
            fg: Color::White,
            bg,
            bold: false,
            depth: f64::MAX,
        }
    }
}

/// Terminal rendering backend with depth buffer
///
/// Brighter labels sit in front: a cell keeps whichever glyph has the lowest
/// depth, where depth is `1 - opacity`.
pub struct TerminalBackend {
    /// Terminal width in cells
    columns: u16,
    /// Terminal height in cells
    rows: u16,
    /// Render buffer
    buffer: Vec<Cell>,
    /// Previous frame buffer for diff rendering
    prev_buffer: Vec<Cell>,
    /// Surface units per cell
    metrics: CellMetrics,
    /// Clear color
    clear_color: Color,
    /// Re-query the terminal size every frame
    follow_terminal: bool,
    /// Repaint every cell on the next frame
    full_redraw: bool,
}

impl TerminalBackend {
    /// Create a backend sized to the current terminal
    pub fn new(metrics: CellMetrics) -> Result<Self, RenderError> {
        let (columns, rows) =
            terminal::size().map_err(|e| RenderError::InitError(e.to_string()))?;

        let mut backend = Self::with_size(columns, rows, metrics);
        backend.follow_terminal = true;
        Ok(backend)
    }

    /// Create a backend with a fixed grid, independent of any terminal
    pub fn with_size(columns: u16, rows: u16, metrics: CellMetrics) -> Self {
        let clear_color = Color::Rgb(5, 7, 12);
        let size = columns as usize * rows as usize;

        Self {
            columns,
            rows,
            buffer: vec![Cell::blank(clear_color); size],
            prev_buffer: vec![Cell::blank(clear_color); size],
            metrics,
            clear_color,
            follow_terminal: false,
            full_redraw: true,
        }
    }

    /// Refresh terminal size
    pub fn refresh_size(&mut self) -> Result<(), RenderError> {
        let (columns, rows) =
            terminal::size().map_err(|e| RenderError::TerminalError(e.to_string()))?;

        if columns != self.columns || rows != self.rows {
            tracing::debug!(columns, rows, "terminal resized");
            self.columns = columns;
            self.rows = rows;
            let size = columns as usize * rows as usize;
            self.buffer = vec![Cell::blank(self.clear_color); size];
            self.prev_buffer = vec![Cell::blank(self.clear_color); size];
            self.full_redraw = true;
        }

        Ok(())
    }

    /// Get buffer index for coordinates
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col >= 0 && row >= 0 && col < self.columns as i32 && row < self.rows as i32 {
            Some(row as usize * self.columns as usize + col as usize)
        } else {
            None
        }
    }

    fn wins_depth(&self, col: i32, row: i32, depth: f64) -> bool {
        self.index(col, row)
            .is_some_and(|idx| depth < self.buffer[idx].depth)
    }

    /// Set a cell in the buffer with depth test
    fn set_cell(&mut self, col: i32, row: i32, symbol: String, fg: Color, bold: bool, depth: f64) {
        if let Some(idx) = self.index(col, row) {
            if depth < self.buffer[idx].depth {
                self.break_wide_glyph(col, row);
                let cell = &mut self.buffer[idx];
                cell.symbol = symbol;
                cell.fg = fg;
                cell.bold = bold;
                cell.depth = depth;
            }
        }
    }

    /// Blank the other cells of a wide glyph covering `(col, row)` before
    /// part of it is overwritten
    fn break_wide_glyph(&mut self, col: i32, row: i32) {
        let Some(idx) = self.index(col, row) else {
            return;
        };

        if self.buffer[idx].symbol.is_empty() {
            // Continuation: walk back to the glyph's first cell
            let mut c = col - 1;
            while let Some(i) = self.index(c, row) {
                let lead = self.buffer[i].symbol.is_empty();
                self.buffer[i].symbol = " ".to_string();
                if !lead {
                    break;
                }
                c -= 1;
            }
        } else {
            let width = self.buffer[idx].symbol.width() as i32;
            for extra in 1..width {
                if let Some(i) = self.index(col + extra, row) {
                    if self.buffer[i].symbol.is_empty() {
                        self.buffer[i].symbol = " ".to_string();
                    }
                }
            }
        }
    }

    /// Write a run of text starting at a cell, clipping at the grid edges
    fn write_run(&mut self, col: i32, row: i32, text: &str, fg: Color, bold: bool, depth: f64) {
        let mut col = col;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }

            if width == 1 {
                self.set_cell(col, row, ch.to_string(), fg, bold, depth);
            } else if (0..width).all(|extra| self.wins_depth(col + extra, row, depth)) {
                self.set_cell(col, row, ch.to_string(), fg, bold, depth);
                // Continuation cells stay empty so the diff pass does not
                // overwrite the second half
                for extra in 1..width {
                    self.set_cell(col + extra, row, String::new(), fg, bold, depth);
                }
            } else {
                // A wide glyph is drawn whole or not at all
                for extra in 0..width {
                    self.set_cell(col + extra, row, " ".to_string(), fg, bold, depth);
                }
            }
            col += width;
        }
    }
}

impl RenderBackend for TerminalBackend {
    fn capabilities(&self) -> SurfaceCapabilities {
        let (width, height) = self.metrics.surface_size(self.columns, self.rows);
        SurfaceCapabilities {
            width,
            height,
        }
    }

    fn begin_frame(&mut self) -> Result<(), RenderError> {
        if self.follow_terminal {
            self.refresh_size()?;
        }

        // Swap buffers
        std::mem::swap(&mut self.buffer, &mut self.prev_buffer);

        let blank = Cell::blank(self.clear_color);
        for cell in &mut self.buffer {
            *cell = blank.clone();
        }

        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        let mut stdout = io::stdout();
        let frame_err = |e: io::Error| RenderError::FrameError(e.to_string());

        // Hide cursor during rendering
        queue!(stdout, cursor::Hide).map_err(frame_err)?;

        // Diff render - only update changed cells
        for row in 0..self.rows {
            for col in 0..self.columns {
                let idx = row as usize * self.columns as usize + col as usize;
                let cell = &self.buffer[idx];
                if !self.full_redraw && cell == &self.prev_buffer[idx] {
                    continue;
                }
                if cell.symbol.is_empty() {
                    continue;
                }

                let weight = if cell.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                queue!(
                    stdout,
                    cursor::MoveTo(col, row),
                    SetAttribute(weight),
                    SetForegroundColor(cell.fg.to_crossterm()),
                    SetBackgroundColor(cell.bg.to_crossterm()),
                    Print(&cell.symbol)
                )
                .map_err(frame_err)?;
            }
        }

        queue!(stdout, SetAttribute(Attribute::Reset)).map_err(frame_err)?;
        stdout.flush().map_err(frame_err)?;
        self.full_redraw = false;

        Ok(())
    }

    fn clear(&mut self, color: Color) {
        if color != self.clear_color {
            self.full_redraw = true;
        }
        self.clear_color = color;
        for cell in &mut self.buffer {
            *cell = Cell::blank(color);
        }
    }

    fn measure_text(&self, text: &str, _size: f64) -> TextBounds {
        // Terminal glyphs have one size; only the column count varies
        TextBounds {
            width: text.width() as f64 * self.metrics.cell_width,
            height: self.metrics.cell_height,
        }
    }

    fn draw_text(&mut self, command: &DrawCommand) {
        let bounds = self.measure_text(&command.text, command.size);
        let (left, top) = command.top_left(bounds);
        let (col, row) = self.metrics.cell_origin(left, top);
        let depth = 1.0 - command.opacity;

        if let Some(shadow) = command.shadow {
            let (dx, dy) = self.metrics.cell_origin(shadow.dx, shadow.dy);
            if dx != 0 || dy != 0 {
                let fg = shadow
                    .color
                    .with_opacity(command.opacity * 0.5, &self.clear_color);
                // Shadows lose to any label
                self.write_run(col + dx, row + dy, &command.text, fg, false, depth + 1.0);
            }
        }

        let fg = command.color.with_opacity(command.opacity, &self.clear_color);
        let bold = command.opacity >= BOLD_OPACITY;
        self.write_run(col, row, &command.text, fg, bold, depth);
    }
}
