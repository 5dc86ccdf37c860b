//! Table geometry used for hit-testing pointer input.
//!
//! The layout only answers "what is under this point"; painting is left to
//! the host, which is free to use the same numbers.

use crate::table::{PILE_COUNT, Table};

/// An axis-aligned rectangle. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns whether the point lies inside the rectangle or on its edge.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Positions of piles, cards and the stock button on the canvas.
///
/// ```
/// use spiders::Layout;
///
/// let layout = Layout::default().with_card_size(80.0, 120.0);
/// assert_eq!(layout.card_rect(1, 0).x, 30.0 + 95.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Card width.
    pub card_width: f64,
    /// Card height.
    pub card_height: f64,
    /// Horizontal gap between piles.
    pub column_gap: f64,
    /// Left edge of the first pile.
    pub margin_left: f64,
    /// Top edge of the first card of every pile.
    pub pile_top: f64,
    /// Vertical distance between consecutive cards in a pile.
    pub row_offset: f64,
    /// Area that deals a row from the stock when pressed.
    pub stock: Rect,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            card_width: 70.0,
            card_height: 100.0,
            column_gap: 15.0,
            margin_left: 30.0,
            pile_top: 40.0,
            row_offset: 30.0,
            stock: Rect::new(30.0, 10.0, 70.0, 50.0),
        }
    }
}

impl Layout {
    /// Sets the card size.
    #[must_use]
    pub const fn with_card_size(mut self, width: f64, height: f64) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    /// Sets the gap between piles.
    #[must_use]
    pub const fn with_column_gap(mut self, gap: f64) -> Self {
        self.column_gap = gap;
        self
    }

    /// Sets the vertical distance between cards in a pile.
    #[must_use]
    pub const fn with_row_offset(mut self, offset: f64) -> Self {
        self.row_offset = offset;
        self
    }

    /// Sets the stock button area.
    #[must_use]
    pub const fn with_stock(mut self, stock: Rect) -> Self {
        self.stock = stock;
        self
    }

    /// Returns the left edge of `pile`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "pile indices are tiny and exact in f64"
    )]
    pub fn pile_x(&self, pile: usize) -> f64 {
        pile as f64 * (self.card_width + self.column_gap) + self.margin_left
    }

    /// Returns the area covered by the card at `row` of `pile`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "row indices are tiny and exact in f64"
    )]
    pub fn card_rect(&self, pile: usize, row: usize) -> Rect {
        Rect::new(
            self.pile_x(pile),
            row as f64 * self.row_offset + self.pile_top,
            self.card_width,
            self.card_height,
        )
    }

    /// Returns the area in which a dragged run is dropped onto `pile` while
    /// it holds `len` cards.
    ///
    /// The zone starts one row offset above the next free slot and extends a
    /// card height below it, so an empty pile's zone starts above its first
    /// slot.
    #[must_use]
    pub fn drop_zone(&self, pile: usize, len: usize) -> Rect {
        let slot = self.card_rect(pile, len);
        Rect::new(
            slot.x,
            slot.y - self.row_offset,
            self.card_width,
            self.card_height + self.row_offset,
        )
    }

    /// Returns whether the point presses the stock button.
    #[must_use]
    pub fn hit_stock(&self, x: f64, y: f64) -> bool {
        self.stock.contains(x, y)
    }

    /// Returns the topmost card under the point as `(pile, row)`.
    #[must_use]
    pub fn card_at(&self, table: &Table, x: f64, y: f64) -> Option<(usize, usize)> {
        table.piles.iter().enumerate().find_map(|(pile, cards)| {
            (0..cards.len())
                .rev()
                .find(|&row| self.card_rect(pile, row).contains(x, y))
                .map(|row| (pile, row))
        })
    }

    /// Returns the piles whose drop zone contains the point, in pile order.
    pub fn drop_targets<'a>(
        &'a self,
        table: &'a Table,
        x: f64,
        y: f64,
    ) -> impl Iterator<Item = usize> + 'a {
        (0..PILE_COUNT).filter(move |&pile| {
            let len = table.piles[pile].len();
            self.drop_zone(pile, len).contains(x, y)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};

    fn table_with_lengths(lengths: &[usize]) -> Table {
        let mut table = Table::new();
        for (pile, &len) in lengths.iter().enumerate() {
            for _ in 0..len {
                table.piles[pile].push(Card::new(Suit::Spades, 1));
            }
        }
        table
    }

    #[test]
    fn card_rects_follow_column_pitch() {
        let layout = Layout::default();
        let rect = layout.card_rect(2, 3);
        assert_eq!(rect, Rect::new(200.0, 130.0, 70.0, 100.0));
    }

    #[test]
    fn stock_button_hit() {
        let layout = Layout::default();
        assert!(layout.hit_stock(30.0, 10.0));
        assert!(layout.hit_stock(100.0, 60.0));
        assert!(!layout.hit_stock(101.0, 60.0));
        assert!(!layout.hit_stock(50.0, 61.0));
    }

    #[test]
    fn topmost_card_wins_overlap() {
        let layout = Layout::default();
        let table = table_with_lengths(&[3]);
        // Rows 0..=2 all cover y = 110; row 2 is painted last.
        assert_eq!(layout.card_at(&table, 50.0, 110.0), Some((0, 2)));
        assert_eq!(layout.card_at(&table, 50.0, 45.0), Some((0, 0)));
        assert_eq!(layout.card_at(&table, 50.0, 300.0), None);
    }

    #[test]
    fn gap_between_piles_hits_nothing() {
        let layout = Layout::default();
        let table = table_with_lengths(&[1, 1]);
        assert_eq!(layout.card_at(&table, 105.0, 50.0), None);
        assert_eq!(layout.card_at(&table, 120.0, 50.0), Some((1, 0)));
    }

    #[test]
    fn drop_zone_tracks_pile_length() {
        let layout = Layout::default();
        let table = table_with_lengths(&[0, 4]);

        let empty: Vec<usize> = layout.drop_targets(&table, 40.0, 15.0).collect();
        assert_eq!(empty, vec![0]);

        // Pile 1 has four cards; its next slot starts at y = 160.
        let on_pile: Vec<usize> = layout.drop_targets(&table, 130.0, 140.0).collect();
        assert_eq!(on_pile, vec![1]);
        let below: Vec<usize> = layout.drop_targets(&table, 130.0, 261.0).collect();
        assert!(below.is_empty());
    }
}
