//! Product card presenter.
//!
//! A card is a pure function of a product, the compact flag and the
//! favorite flag. It never mutates view state: taps are resolved to a
//! [`CardTarget`] and handed to a [`CardHandler`].

use crate::catalog::{Product, ProductId};
use crate::ui::text;
use crate::ui::theme::{
    ACCENT_ORANGE, BODY_TEXT, BUTTON_BG, BUTTON_TEXT, FAVORITE_ACTIVE_BG, GLOBAL_BORDER,
    IMAGE_FILL, MUTED_TEXT, TITLE_TEXT,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Widget};

pub const IMAGE_ROWS: u16 = 3;
pub const BUY_LABEL: &str = "Acheter";
pub const FAVORITE_ON_LABEL: &str = "♥ Favori";
pub const FAVORITE_OFF_LABEL: &str = "♡ Favori";
const FAVORITE_BUTTON_WIDTH: u16 = 10;

/// Callbacks owned by whoever holds the view state.
pub trait CardHandler {
    fn toggle_favorite(&mut self, product_id: &ProductId);
    fn buy(&mut self, product: &Product);
    fn preview(&mut self, product: &Product);
}

/// What a tap on a card lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    /// Card body, outside both controls.
    Preview,
    Buy,
    Favorite,
}

impl CardTarget {
    /// Invokes exactly one callback for this target.
    pub fn activate<H: CardHandler + ?Sized>(self, product: &Product, handler: &mut H) {
        match self {
            CardTarget::Preview => handler.preview(product),
            CardTarget::Buy => handler.buy(product),
            CardTarget::Favorite => handler.toggle_favorite(&product.id),
        }
    }
}

/// Tap regions of a card placed at some area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRegions {
    pub body: Rect,
    pub buy: Rect,
    pub favorite: Rect,
}

impl CardRegions {
    pub fn compute(area: Rect) -> Self {
        let inner = inner_area(area);
        let content = padded(inner);
        let y = inner.bottom().saturating_sub(1);
        let favorite_width = FAVORITE_BUTTON_WIDTH.min(content.width);
        let favorite = Rect {
            x: content.right().saturating_sub(favorite_width),
            y,
            width: favorite_width,
            height: u16::from(!inner.is_empty()),
        };
        let buy = Rect {
            x: content.x,
            y,
            width: content.width.saturating_sub(favorite_width + 1),
            height: u16::from(!inner.is_empty()),
        };
        Self {
            body: area,
            buy,
            favorite,
        }
    }

    /// Resolves a tap, innermost control first so a control tap never
    /// also counts as a body tap.
    pub fn hit(&self, x: u16, y: u16) -> Option<CardTarget> {
        let position = Position::new(x, y);
        if self.buy.contains(position) {
            Some(CardTarget::Buy)
        } else if self.favorite.contains(position) {
            Some(CardTarget::Favorite)
        } else if self.body.contains(position) {
            Some(CardTarget::Preview)
        } else {
            None
        }
    }
}

pub struct ProductCard<'a> {
    product: &'a Product,
    compact: bool,
    is_favorite: bool,
    focused: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            compact: false,
            is_favorite: false,
            focused: false,
        }
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn description_lines(compact: bool) -> u16 {
        if compact {
            2
        } else {
            3
        }
    }

    /// Rows a card needs: borders, image, title, optional tag, spacer,
    /// description, spacer, buttons.
    pub fn height(product: &Product, compact: bool) -> u16 {
        let tag_rows = u16::from(product.tag().is_some());
        2 + IMAGE_ROWS + 1 + tag_rows + 1 + Self::description_lines(compact) + 1 + 1
    }

    fn render_image(&self, area: Rect, buf: &mut Buffer) {
        let Some(host) = self.product.image_host() else {
            return;
        };
        buf.set_style(area, Style::default().bg(IMAGE_FILL));
        let label = text::truncate(&format!("▣ {}", host), area.width as usize);
        let middle = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        Line::styled(label, Style::default().fg(MUTED_TEXT).bg(IMAGE_FILL))
            .alignment(Alignment::Center)
            .render(middle, buf);
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let price_width = text::width(&self.product.price) as u16;
        let name_width = if price_width == 0 {
            area.width
        } else {
            area.width.saturating_sub(price_width + 1)
        };
        let name = text::truncate(&self.product.name, name_width as usize);
        Line::styled(
            name,
            Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
        )
        .render(area, buf);
        if price_width > 0 {
            Line::styled(
                self.product.price.clone(),
                Style::default()
                    .fg(ACCENT_ORANGE)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Right)
            .render(area, buf);
        }
    }

    fn render_buttons(&self, regions: &CardRegions, buf: &mut Buffer) {
        let buy_style = Style::default()
            .fg(BUTTON_TEXT)
            .bg(BUTTON_BG)
            .add_modifier(Modifier::BOLD);
        buf.set_style(regions.buy, buy_style);
        Line::styled(BUY_LABEL, buy_style)
            .alignment(Alignment::Center)
            .render(regions.buy, buf);

        let (label, style) = if self.is_favorite {
            (
                FAVORITE_ON_LABEL,
                Style::default()
                    .fg(ACCENT_ORANGE)
                    .bg(FAVORITE_ACTIVE_BG)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (FAVORITE_OFF_LABEL, Style::default().fg(MUTED_TEXT))
        };
        buf.set_style(regions.favorite, style);
        Line::from(Span::styled(label, style))
            .alignment(Alignment::Center)
            .render(regions.favorite, buf);
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(*buf.area());
        if area.is_empty() {
            return;
        }
        let border = if self.focused {
            ACCENT_ORANGE
        } else {
            GLOBAL_BORDER
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .render(area, buf);

        let inner = inner_area(area);
        if inner.is_empty() {
            return;
        }
        let content = padded(inner);
        let row = |offset: u16| -> Option<Rect> {
            let y = inner.y.checked_add(offset)?;
            (y < inner.bottom().saturating_sub(1)).then_some(Rect {
                x: content.x,
                y,
                width: content.width,
                height: 1,
            })
        };

        let image = Rect {
            height: IMAGE_ROWS.min(inner.height.saturating_sub(1)),
            ..inner
        };
        self.render_image(image, buf);

        let mut offset = IMAGE_ROWS;
        if let Some(title) = row(offset) {
            self.render_title(title, buf);
        }
        offset += 1;

        if let Some(tag) = self.product.tag() {
            if let Some(rect) = row(offset) {
                let tag = text::truncate(&tag.to_uppercase(), rect.width as usize);
                Line::styled(
                    tag,
                    Style::default()
                        .fg(ACCENT_ORANGE)
                        .add_modifier(Modifier::BOLD),
                )
                .render(rect, buf);
            }
            offset += 1;
        }
        offset += 1;

        let max_lines = Self::description_lines(self.compact) as usize;
        for (index, line) in text::wrap(&self.product.description, content.width as usize, max_lines)
            .into_iter()
            .enumerate()
        {
            if let Some(rect) = row(offset + index as u16) {
                Line::styled(line, Style::default().fg(BODY_TEXT)).render(rect, buf);
            }
        }

        self.render_buttons(&CardRegions::compute(area), buf);
    }
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn padded(inner: Rect) -> Rect {
    Rect {
        x: inner.x.saturating_add(1),
        width: inner.width.saturating_sub(2),
        ..inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 34, 12)
    }

    #[test]
    fn regions_sit_on_last_inner_row() {
        let regions = CardRegions::compute(area());
        assert_eq!(regions.buy.y, 10);
        assert_eq!(regions.favorite.y, 10);
        assert_eq!(regions.favorite.width, FAVORITE_BUTTON_WIDTH);
        assert_eq!(regions.favorite.right(), 32);
        assert_eq!(regions.buy.x, 2);
        assert_eq!(regions.buy.right() + 1, regions.favorite.x);
    }

    #[test]
    fn controls_win_over_body() {
        let regions = CardRegions::compute(area());
        assert_eq!(regions.hit(3, 10), Some(CardTarget::Buy));
        assert_eq!(regions.hit(30, 10), Some(CardTarget::Favorite));
        assert_eq!(regions.hit(5, 4), Some(CardTarget::Preview));
        // Gap between the two buttons belongs to the body.
        assert_eq!(
            regions.hit(regions.buy.right(), 10),
            Some(CardTarget::Preview)
        );
        assert_eq!(regions.hit(40, 4), None);
    }

    #[test]
    fn tiny_area_has_no_controls() {
        let regions = CardRegions::compute(Rect::new(0, 0, 2, 2));
        assert!(regions.buy.is_empty());
        assert!(regions.favorite.is_empty());
    }

    #[test]
    fn height_depends_on_tag_and_mode() {
        let mut product = Product::default();
        assert_eq!(ProductCard::height(&product, false), 12);
        assert_eq!(ProductCard::height(&product, true), 11);
        product.tag = Some("Nouveauté".to_string());
        assert_eq!(ProductCard::height(&product, true), 12);
    }
}
