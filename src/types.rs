//! Core types for spark-canvas.
//!
//! Colors, cell attributes and the cell itself are what a canvas surface is
//! made of. `ComponentType` tags nodes in the component tree.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
/// Special value: r=-1 means "terminal default" (let the output decide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Default color (let the output decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Transparent color.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single surface cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Unicode codepoint (32 for space).
    pub char: u32,
    /// Foreground color.
    pub fg: Rgba,
    /// Background color.
    pub bg: Rgba,
    /// Attribute flags (bold, italic, etc.).
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg: Rgba::TERMINAL_DEFAULT,
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Component Type
// =============================================================================

/// Kind of node in the component tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentType {
    /// Unallocated slot.
    #[default]
    None,
    /// Plain component (may register with a canvas host).
    Component,
    /// Component exposing a canvas host capability.
    CanvasHost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.char, b' ' as u32);
        assert!(cell.fg.is_terminal_default());
        assert!(cell.bg.is_terminal_default());
        assert_eq!(cell.attrs, Attr::NONE);
    }

    #[test]
    fn test_attr_combine() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(!attrs.contains(Attr::ITALIC));
    }

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::RED, Rgba::new(255, 0, 0, 255));
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(!Rgba::BLACK.is_transparent());
    }
}
