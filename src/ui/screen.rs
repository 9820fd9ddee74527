//! Screen composition in content coordinates.
//!
//! The whole screen is one scrollable column: the header (featured strip,
//! stats, titles) scrolls together with the catalog cards. The featured
//! strip additionally scrolls sideways. Rendering and tap resolution both
//! read the same [`ScreenLayout`].

use crate::catalog::Catalog;
use crate::ui::card::{CardRegions, CardTarget, ProductCard};
use ratatui::layout::{Position, Rect};

pub const FEATURED_TITLE: &str = "Produits phares";
pub const CATALOG_TITLE: &str = "Catalogue";

const PAD_X: u16 = 1;
const PAD_TOP: u16 = 1;
const PAD_BOTTOM: u16 = 1;
const STRIP_GAP: u16 = 2;
const STATS_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Featured,
    Catalog,
}

/// A card on screen: which list, which index in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardRef {
    pub section: Section,
    pub index: usize,
}

impl CardRef {
    pub fn featured(index: usize) -> Self {
        Self {
            section: Section::Featured,
            index,
        }
    }

    pub fn catalog(index: usize) -> Self {
        Self {
            section: Section::Catalog,
            index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub featured_title: Rect,
    /// Visible window of the featured strip.
    pub strip: Rect,
    /// Featured cards in strip coordinates (origin at the strip's first column).
    pub featured: Vec<Rect>,
    /// Width of all featured cards laid side by side.
    pub strip_width: u16,
    pub stats: Rect,
    pub catalog_title: Rect,
    pub catalog: Vec<Rect>,
    /// Present only while there is feedback to show.
    pub feedback: Option<Rect>,
    pub height: u16,
}

impl ScreenLayout {
    pub fn compute(catalog: &Catalog, width: u16, compact_width: u16, has_feedback: bool) -> Self {
        let inner_x = PAD_X.min(width);
        let inner_width = width.saturating_sub(PAD_X * 2);
        let line = |y: u16| Rect::new(inner_x, y, inner_width, 1);

        let mut y = PAD_TOP;
        let featured_title = line(y);
        y += 2;

        let strip_height = catalog
            .featured
            .iter()
            .map(|product| ProductCard::height(product, true))
            .max()
            .unwrap_or(0);
        let mut featured = Vec::with_capacity(catalog.featured.len());
        let mut x = 0u16;
        for product in &catalog.featured {
            if !featured.is_empty() {
                x = x.saturating_add(STRIP_GAP);
            }
            featured.push(Rect::new(
                x,
                0,
                compact_width,
                ProductCard::height(product, true),
            ));
            x = x.saturating_add(compact_width);
        }
        let strip = Rect::new(inner_x, y, inner_width, strip_height);
        y = y.saturating_add(strip_height).saturating_add(1);

        let stats = Rect::new(inner_x, y, inner_width, STATS_HEIGHT);
        y = y.saturating_add(STATS_HEIGHT + 1);

        let catalog_title = line(y);
        y = y.saturating_add(2);

        let mut cards = Vec::with_capacity(catalog.items.len());
        for (index, product) in catalog.items.iter().enumerate() {
            if index > 0 {
                y = y.saturating_add(1);
            }
            let height = ProductCard::height(product, false);
            cards.push(Rect::new(inner_x, y, inner_width, height));
            y = y.saturating_add(height);
        }

        let feedback = has_feedback.then(|| {
            let rect = line(y.saturating_add(1));
            y = y.saturating_add(2);
            rect
        });

        Self {
            featured_title,
            strip,
            featured,
            strip_width: x,
            stats,
            catalog_title,
            catalog: cards,
            feedback,
            height: y.saturating_add(PAD_BOTTOM),
        }
    }

    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.height.saturating_sub(viewport_height)
    }

    pub fn max_strip_offset(&self) -> u16 {
        self.strip_width.saturating_sub(self.strip.width)
    }

    /// Rows `[top, bottom)` a card occupies in content coordinates. The
    /// featured strip reports its title too so it stays readable.
    pub fn card_rows(&self, card: CardRef) -> Option<(u16, u16)> {
        match card.section {
            Section::Featured => self
                .featured
                .get(card.index)
                .map(|_| (self.featured_title.y, self.strip.bottom())),
            Section::Catalog => self.catalog.get(card.index).map(|r| (r.y, r.bottom())),
        }
    }

    /// Resolves a tap in content coordinates.
    pub fn hit(&self, x: u16, y: u16, strip_offset: u16) -> Option<(CardRef, CardTarget)> {
        if self.strip.contains(Position::new(x, y)) {
            let local_x = (x - self.strip.x).saturating_add(strip_offset);
            let local_y = y - self.strip.y;
            return self.featured.iter().enumerate().find_map(|(index, area)| {
                CardRegions::compute(*area)
                    .hit(local_x, local_y)
                    .map(|target| (CardRef::featured(index), target))
            });
        }
        self.catalog.iter().enumerate().find_map(|(index, area)| {
            CardRegions::compute(*area)
                .hit(x, y)
                .map(|target| (CardRef::catalog(index), target))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(has_feedback: bool) -> ScreenLayout {
        ScreenLayout::compute(&Catalog::builtin(), 80, 34, has_feedback)
    }

    #[test]
    fn sections_are_stacked_top_to_bottom() {
        let layout = layout(true);
        assert!(layout.featured_title.y < layout.strip.y);
        assert!(layout.strip.bottom() <= layout.stats.y);
        assert!(layout.stats.bottom() <= layout.catalog_title.y);
        assert!(layout.catalog_title.y < layout.catalog[0].y);
        let last = layout.catalog.last().unwrap();
        let feedback = layout.feedback.unwrap();
        assert!(last.bottom() <= feedback.y);
        assert!(feedback.bottom() <= layout.height);
    }

    #[test]
    fn catalog_cards_are_separated_by_one_row() {
        let layout = layout(false);
        for pair in layout.catalog.windows(2) {
            assert_eq!(pair[0].bottom() + 1, pair[1].y);
        }
    }

    #[test]
    fn feedback_row_only_with_feedback() {
        let without = layout(false);
        let with = layout(true);
        assert!(without.feedback.is_none());
        assert_eq!(with.height, without.height + 2);
    }

    #[test]
    fn featured_strip_overflows_narrow_screens() {
        let layout = layout(false);
        assert_eq!(layout.featured.len(), 3);
        assert_eq!(layout.strip_width, 34 * 3 + 2 * 2);
        assert_eq!(layout.strip.width, 78);
        assert_eq!(layout.max_strip_offset(), 106 - 78);
    }

    #[test]
    fn hit_resolves_strip_with_offset() {
        let layout = layout(false);
        let second = layout.featured[1];
        let regions = CardRegions::compute(second);
        // Second card's buy button, after scrolling the strip by 10 columns.
        let x = layout.strip.x + regions.buy.x - 10;
        let y = layout.strip.y + regions.buy.y;
        assert_eq!(
            layout.hit(x, y, 10),
            Some((CardRef::featured(1), CardTarget::Buy))
        );
    }

    #[test]
    fn hit_resolves_catalog_controls() {
        let layout = layout(false);
        let regions = CardRegions::compute(layout.catalog[2]);
        assert_eq!(
            layout.hit(regions.favorite.x, regions.favorite.y, 0),
            Some((CardRef::catalog(2), CardTarget::Favorite))
        );
        assert_eq!(
            layout.hit(regions.body.x + 3, regions.body.y + 2, 0),
            Some((CardRef::catalog(2), CardTarget::Preview))
        );
    }

    #[test]
    fn hit_misses_titles_and_stats() {
        let layout = layout(false);
        assert_eq!(layout.hit(5, layout.featured_title.y, 0), None);
        assert_eq!(layout.hit(5, layout.stats.y + 1, 0), None);
        assert_eq!(layout.hit(5, layout.catalog_title.y, 0), None);
    }
}
