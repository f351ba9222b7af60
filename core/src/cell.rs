use serde::{Deserialize, Serialize};

/// One cell of the immutable mine layout: either a bomb, or the number of
/// bombs among its up-to-8 neighbors. `Clue(0)` is a blank cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutCell {
    Bomb,
    Clue(u8),
}

impl LayoutCell {
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Clue(0))
    }

    /// Display glyph of the underlying layout value. Clues never exceed 8,
    /// so the digit stays single-width.
    pub const fn glyph(self) -> char {
        match self {
            Self::Bomb => '*',
            Self::Clue(0) => ' ',
            Self::Clue(count) => (b'0' + (count % 10)) as char,
        }
    }
}

impl Default for LayoutCell {
    fn default() -> Self {
        Self::Clue(0)
    }
}

/// Player-facing state of a single cell, independent of the mine layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Covered,
    Flagged,
    Uncovered,
}

impl Visibility {
    pub const fn is_uncovered(self) -> bool {
        matches!(self, Self::Uncovered)
    }

    /// Display glyph of the cell as the player sees it; the layout value
    /// shows through only once the cell is uncovered.
    pub const fn glyph(self, layout: LayoutCell) -> char {
        match self {
            Self::Covered => '?',
            Self::Flagged => 'X',
            Self::Uncovered => layout.glyph(),
        }
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Covered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_glyphs_cover_bombs_blanks_and_digits() {
        assert_eq!(LayoutCell::Bomb.glyph(), '*');
        assert_eq!(LayoutCell::Clue(0).glyph(), ' ');
        assert_eq!(LayoutCell::Clue(3).glyph(), '3');
        assert_eq!(LayoutCell::Clue(8).glyph(), '8');
    }

    #[test]
    fn visibility_masks_layout_until_uncovered() {
        assert_eq!(Visibility::Covered.glyph(LayoutCell::Bomb), '?');
        assert_eq!(Visibility::Flagged.glyph(LayoutCell::Clue(2)), 'X');
        assert_eq!(Visibility::Uncovered.glyph(LayoutCell::Clue(2)), '2');
    }

    #[test]
    fn cells_start_covered_and_blank() {
        assert_eq!(Visibility::default(), Visibility::Covered);
        assert_eq!(LayoutCell::default(), LayoutCell::Clue(0));
    }
}
