use crate::catalog::{Catalog, Product, ProductId};
use crate::config::UiConfig;
use crate::ui::card::{CardHandler, CardTarget};
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::screen::{CardRef, ScreenLayout, Section};
use crate::ui::store::{CatalogIntent, CatalogReducer, CatalogState};
use ratatui::layout::{Position, Rect};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owner of everything the catalog screen shows.
///
/// Created when the screen mounts and dropped when it goes away; view
/// state only changes through [`App::dispatch`].
pub struct App {
    should_quit: bool,
    catalog: Catalog,
    /// Favorites, cart and feedback (MVI pattern).
    state: CatalogState,
    focus: Option<CardRef>,
    /// Featured card to return to when focus moves back up to the strip.
    strip_focus: usize,
    scroll: u16,
    strip_offset: u16,
    viewport: Rect,
    compact_width: u16,
    scroll_step: u16,
}

impl App {
    pub fn new(catalog: Catalog, ui: &UiConfig) -> Self {
        let focus = if !catalog.featured.is_empty() {
            Some(CardRef::featured(0))
        } else if !catalog.items.is_empty() {
            Some(CardRef::catalog(0))
        } else {
            None
        };
        Self {
            should_quit: false,
            catalog,
            state: CatalogState::default(),
            focus,
            strip_focus: 0,
            scroll: 0,
            strip_offset: 0,
            viewport: body_rect(Rect::new(0, 0, 80, 24)),
            compact_width: ui.compact_card_width,
            scroll_step: ui.scroll_step.max(1),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn focus(&self) -> Option<CardRef> {
        self.focus
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn strip_offset(&self) -> u16 {
        self.strip_offset
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn scroll_step(&self) -> u16 {
        self.scroll_step
    }

    pub fn product(&self, card: CardRef) -> Option<&Product> {
        match card.section {
            Section::Featured => self.catalog.featured.get(card.index),
            Section::Catalog => self.catalog.items.get(card.index),
        }
    }

    /// Layout for the current viewport width and feedback state.
    pub fn layout(&self) -> ScreenLayout {
        self.layout_for(self.viewport.width)
    }

    pub fn layout_for(&self, width: u16) -> ScreenLayout {
        ScreenLayout::compute(
            &self.catalog,
            width,
            self.compact_width,
            self.state.last_action().is_some(),
        )
    }

    /// Terminal resized; `cols`×`rows` is the whole terminal.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = body_rect(Rect::new(0, 0, cols, rows));
        self.clamp_scroll();
    }

    /// Runs an intent through the reducer. The caller re-renders afterwards.
    pub fn dispatch(&mut self, intent: CatalogIntent) {
        tracing::debug!(?intent, "Dispatching catalog intent");
        dispatch_mvi!(self, state, CatalogReducer, intent);
        tracing::debug!(
            favorites = self.state.favorites_count(),
            cart = self.state.cart_count(),
            last_action = %self.state.last_action_text(),
            "Catalog state updated"
        );
        self.clamp_scroll();
    }

    /// Taps a card control. Returns false when the card does not exist.
    pub fn activate(&mut self, card: CardRef, target: CardTarget) -> bool {
        let Some(product) = self.product(card).cloned() else {
            return false;
        };
        self.set_focus(card);
        target.activate(&product, self);
        true
    }

    /// Taps the focused card.
    pub fn activate_focused(&mut self, target: CardTarget) -> bool {
        match self.focus {
            Some(card) => self.activate(card, target),
            None => false,
        }
    }

    /// Left click at terminal coordinates.
    pub fn on_click(&mut self, column: u16, row: u16) -> bool {
        if !self.viewport.contains(Position::new(column, row)) {
            return false;
        }
        let x = column - self.viewport.x;
        let y = (row - self.viewport.y).saturating_add(self.scroll);
        match self.layout().hit(x, y, self.strip_offset) {
            Some((card, target)) => self.activate(card, target),
            None => false,
        }
    }

    /// Moves focus one row up (negative) or down. The featured strip is a single row.
    pub fn move_focus_vertical(&mut self, delta: i32) {
        let has_strip = !self.catalog.featured.is_empty();
        let rows = usize::from(has_strip) + self.catalog.items.len();
        if rows == 0 {
            return;
        }
        let current = match self.focus {
            Some(CardRef {
                section: Section::Featured,
                ..
            }) => 0,
            Some(CardRef {
                section: Section::Catalog,
                index,
            }) => index + usize::from(has_strip),
            None => 0,
        };
        let next = step(current, delta, rows);
        let card = if has_strip && next == 0 {
            CardRef::featured(self.strip_focus.min(self.catalog.featured.len() - 1))
        } else {
            CardRef::catalog(next - usize::from(has_strip))
        };
        self.set_focus(card);
    }

    /// Moves focus sideways inside the featured strip.
    pub fn move_focus_horizontal(&mut self, delta: i32) {
        let Some(CardRef {
            section: Section::Featured,
            index,
        }) = self.focus
        else {
            return;
        };
        let next = step(index, delta, self.catalog.featured.len());
        self.set_focus(CardRef::featured(next));
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll = offset_by(self.scroll, delta);
        self.clamp_scroll();
    }

    pub fn scroll_strip_by(&mut self, delta: i32) {
        self.strip_offset = offset_by(self.strip_offset, delta);
        self.clamp_scroll();
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.viewport.height.max(1)));
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.viewport.height.max(1)));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = u16::MAX;
        self.clamp_scroll();
    }

    fn set_focus(&mut self, card: CardRef) {
        self.focus = Some(card);
        if card.section == Section::Featured {
            self.strip_focus = card.index;
        }
        self.ensure_visible(card);
    }

    /// Scrolls just enough for `card` to be fully on screen.
    fn ensure_visible(&mut self, card: CardRef) {
        let layout = self.layout();
        if let Some((top, bottom)) = layout.card_rows(card) {
            let height = self.viewport.height;
            if top < self.scroll {
                self.scroll = top;
            } else if bottom > self.scroll.saturating_add(height) {
                self.scroll = bottom.saturating_sub(height).min(top);
            }
        }
        if card.section == Section::Featured {
            if let Some(area) = layout.featured.get(card.index) {
                let width = layout.strip.width;
                if area.x < self.strip_offset {
                    self.strip_offset = area.x;
                } else if area.right() > self.strip_offset.saturating_add(width) {
                    self.strip_offset = area.right().saturating_sub(width).min(area.x);
                }
            }
        }
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let layout = self.layout();
        self.scroll = self.scroll.min(layout.max_scroll(self.viewport.height));
        self.strip_offset = self.strip_offset.min(layout.max_strip_offset());
    }
}

impl CardHandler for App {
    fn toggle_favorite(&mut self, product_id: &ProductId) {
        self.dispatch(CatalogIntent::ToggleFavorite {
            product_id: product_id.clone(),
        });
    }

    fn buy(&mut self, product: &Product) {
        self.dispatch(CatalogIntent::Buy {
            product: product.clone(),
        });
    }

    fn preview(&mut self, product: &Product) {
        self.dispatch(CatalogIntent::Preview {
            product: product.clone(),
        });
    }
}

fn step(current: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs() as usize)
    } else {
        current.saturating_add(delta as usize).min(last)
    }
}

fn offset_by(value: u16, delta: i32) -> u16 {
    let next = i32::from(value).saturating_add(delta);
    next.clamp(0, i32::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        let mut app = App::new(Catalog::builtin(), &UiConfig::default());
        app.on_resize(80, 24);
        app
    }

    #[test]
    fn focus_starts_on_first_featured_card() {
        let app = make_app();
        assert_eq!(app.focus(), Some(CardRef::featured(0)));
    }

    #[test]
    fn focus_starts_on_catalog_without_featured() {
        let catalog = Catalog::new(Vec::new(), Catalog::builtin().items);
        let app = App::new(catalog, &UiConfig::default());
        assert_eq!(app.focus(), Some(CardRef::catalog(0)));
    }

    #[test]
    fn step_clamps_both_ends() {
        assert_eq!(step(0, -1, 5), 0);
        assert_eq!(step(4, 1, 5), 4);
        assert_eq!(step(2, 1, 5), 3);
        assert_eq!(step(0, 1, 0), 0);
    }

    #[test]
    fn vertical_move_returns_to_last_strip_card() {
        let mut app = make_app();
        app.move_focus_horizontal(1);
        app.move_focus_horizontal(1);
        app.move_focus_vertical(1);
        assert_eq!(app.focus(), Some(CardRef::catalog(0)));
        app.move_focus_vertical(-1);
        assert_eq!(app.focus(), Some(CardRef::featured(2)));
    }

    #[test]
    fn horizontal_move_ignored_in_catalog() {
        let mut app = make_app();
        app.move_focus_vertical(1);
        app.move_focus_horizontal(1);
        assert_eq!(app.focus(), Some(CardRef::catalog(0)));
    }

    #[test]
    fn focusing_last_card_scrolls_it_into_view() {
        let mut app = make_app();
        for _ in 0..10 {
            app.move_focus_vertical(1);
        }
        assert_eq!(app.focus(), Some(CardRef::catalog(4)));
        let layout = app.layout();
        let (top, bottom) = layout.card_rows(CardRef::catalog(4)).unwrap();
        assert!(app.scroll() <= top);
        assert!(bottom <= app.scroll() + app.viewport().height);
    }

    #[test]
    fn focusing_strip_card_scrolls_strip() {
        let mut app = make_app();
        app.move_focus_horizontal(2);
        let layout = app.layout();
        let area = layout.featured[2];
        assert!(app.strip_offset() > 0);
        assert!(area.right() <= app.strip_offset() + layout.strip.width);
    }

    #[test]
    fn scroll_is_clamped() {
        let mut app = make_app();
        app.scroll_by(-5);
        assert_eq!(app.scroll(), 0);
        app.scroll_to_bottom();
        assert_eq!(app.scroll(), app.layout().max_scroll(app.viewport().height));
        app.scroll_strip_by(1_000);
        assert_eq!(app.strip_offset(), app.layout().max_strip_offset());
    }
}
