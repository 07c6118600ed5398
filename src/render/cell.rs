//! Cell and theme primitives.
//!
//! A [`Cell`] is one character plus its [`CellStyle`]. A [`Theme`] bundles the
//! fill rune and the two style aspects containers paint with: `content` for
//! the widget body (and scrollbar sliders) and `border` for frames and
//! scrollbar troughs. Colors are stored as optional strings that can be
//! parsed as named colors or `#rrggbb` hex values by the terminal driver.

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl CellStyle {
    /// Create a new `CellStyle` with all attributes unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this style with the foreground color replaced.
    pub fn fg(mut self, color: &str) -> Self {
        self.fg = Some(color.to_owned());
        self
    }

    /// Copy of this style with the background color replaced.
    pub fn bg(mut self, color: &str) -> Self {
        self.bg = Some(color.to_owned());
        self
    }

    /// Copy of this style with the bold flag set.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Copy of this style with the dim flag set.
    pub fn dim(mut self, dim: bool) -> Self {
        self.dim = dim;
        self
    }

    /// Copy of this style with the reverse-video flag set.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// Create a new cell.
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with default style.
    pub fn blank() -> Self {
        Self { ch: ' ', style: CellStyle::default() }
    }

    /// A blank (space) cell with the given style.
    pub fn blank_styled(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Fill rune plus the style aspects a container paints with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// The rune used when filling a region.
    pub fill: char,
    /// Style for widget content; scrollbars use it for the slider.
    pub content: CellStyle,
    /// Style for frames; scrollbars use it for the trough.
    pub border: CellStyle,
}

impl Theme {
    /// A monochrome theme: space fill, default styles, dim trough.
    pub fn mono() -> Self {
        Self {
            fill: ' ',
            content: CellStyle::new(),
            border: CellStyle::new().dim(true),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mono()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_style_default_is_empty() {
        let style = CellStyle::default();
        assert!(style.fg.is_none());
        assert!(style.bg.is_none());
        assert!(!style.bold);
        assert!(!style.dim);
        assert!(!style.reverse);
    }

    #[test]
    fn cell_style_builders() {
        let style = CellStyle::new().fg("red").bg("#0000ff").bold(true).dim(true).reverse(true);
        assert_eq!(style.fg, Some("red".into()));
        assert_eq!(style.bg, Some("#0000ff".into()));
        assert!(style.bold);
        assert!(style.dim);
        assert!(style.reverse);
    }

    #[test]
    fn cell_new() {
        let cell = Cell::new('X', CellStyle::new().fg("white"));
        assert_eq!(cell.ch, 'X');
        assert_eq!(cell.style.fg, Some("white".into()));
    }

    #[test]
    fn cell_blank() {
        let cell = Cell::blank();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.style, CellStyle::default());
        assert_eq!(Cell::default(), cell);
    }

    #[test]
    fn cell_blank_styled() {
        let style = CellStyle::new().bg("blue");
        let cell = Cell::blank_styled(style.clone());
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.style, style);
    }

    #[test]
    fn theme_mono_defaults() {
        let theme = Theme::mono();
        assert_eq!(theme.fill, ' ');
        assert!(theme.border.dim);
        assert_eq!(Theme::default(), theme);
    }
}
