//! Surface - the drawing target handed to render callbacks.
//!
//! A 2D grid of Cells with flat row-major storage: `index = y * width + x`.
//! Writes outside the grid are clipped silently.

use crate::types::{Attr, Cell, Rgba};

/// A 2D buffer of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Surface {
    /// Create a new surface filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Overwrite a cell. Returns false if out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Get raw cells slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire surface to default cells.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize, discarding content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); width as usize * height as usize];
    }

    /// Fill a rectangle with a background color, clipped to the surface.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgba) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);

        for row in y..y_end {
            for col in x..x_end {
                let idx = self.index(col, row);
                let cell = &mut self.cells[idx];
                cell.char = b' ' as u32;
                cell.bg = bg;
            }
        }
    }

    /// Draw a single line of text starting at (x, y).
    ///
    /// Characters past the right edge are dropped. Returns the number of
    /// cells written.
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgba, attrs: Attr) -> usize {
        if y >= self.height {
            return 0;
        }

        let mut written = 0;
        for (offset, ch) in text.chars().enumerate() {
            let Some(col) = usize::from(x).checked_add(offset) else { break };
            if col >= self.width as usize {
                break;
            }
            let idx = self.index(col as u16, y);
            let cell = &mut self.cells[idx];
            cell.char = ch as u32;
            cell.fg = fg;
            cell.attrs = attrs;
            written += 1;
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_blank() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.cells().len(), 12);
        assert!(surface.cells().iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn test_set_out_of_bounds_is_clipped() {
        let mut surface = Surface::new(2, 2);
        let cell = Cell { char: 'x' as u32, ..Cell::default() };

        assert!(surface.set(1, 1, cell));
        assert!(!surface.set(2, 0, cell));
        assert_eq!(surface.get(1, 1).map(|c| c.char), Some('x' as u32));
        assert!(surface.get(2, 0).is_none());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut surface = Surface::new(3, 3);
        surface.fill_rect(1, 1, 10, 10, Rgba::RED);

        assert_eq!(surface.get(0, 0).map(|c| c.bg), Some(Rgba::TERMINAL_DEFAULT));
        assert_eq!(surface.get(1, 1).map(|c| c.bg), Some(Rgba::RED));
        assert_eq!(surface.get(2, 2).map(|c| c.bg), Some(Rgba::RED));
    }

    #[test]
    fn test_draw_text_truncates_at_edge() {
        let mut surface = Surface::new(5, 1);
        let written = surface.draw_text(2, 0, "slice", Rgba::GREEN, Attr::BOLD);

        assert_eq!(written, 3);
        assert_eq!(surface.get(2, 0).map(|c| c.char), Some('s' as u32));
        assert_eq!(surface.get(4, 0).map(|c| c.char), Some('i' as u32));
        assert_eq!(surface.get(4, 0).map(|c| c.attrs), Some(Attr::BOLD));
    }

    #[test]
    fn test_draw_text_below_surface() {
        let mut surface = Surface::new(5, 1);
        assert_eq!(surface.draw_text(0, 1, "miss", Rgba::WHITE, Attr::NONE), 0);
    }

    #[test]
    fn test_resize_discards_content() {
        let mut surface = Surface::new(2, 2);
        surface.fill_rect(0, 0, 2, 2, Rgba::BLUE);
        surface.resize(3, 1);

        assert_eq!(surface.width(), 3);
        assert_eq!(surface.height(), 1);
        assert!(surface.cells().iter().all(|c| *c == Cell::default()));
    }
}
