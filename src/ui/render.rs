use crate::ui::app::App;
use crate::ui::card::ProductCard;
use crate::ui::footer::Footer;
use crate::ui::layout::layout_regions;
use crate::ui::screen::{CardRef, ScreenLayout, CATALOG_TITLE, FEATURED_TITLE};
use crate::ui::theme::{BODY_TEXT, GLOBAL_BORDER, TITLE_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Widget};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    render_frame(app, area, frame.buffer_mut());
}

/// Body plus footer bar.
pub fn render_frame(app: &App, area: Rect, buf: &mut Buffer) {
    let (body, footer) = layout_regions(area);
    render_screen(app, body, buf);
    Footer::new().widget(footer).render(footer, buf);
}

/// Renders the scrolled catalog screen into `area`.
///
/// The full content is drawn off-screen at its natural height, then the
/// window starting at the scroll offset is copied into `buf`.
pub fn render_screen(app: &App, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let layout = app.layout_for(area.width);
    let mut content = Buffer::empty(Rect::new(0, 0, area.width, layout.height));

    render_title(FEATURED_TITLE, layout.featured_title, &mut content);
    render_strip(app, &layout, &mut content);
    render_stats(app, layout.stats, &mut content);
    render_title(CATALOG_TITLE, layout.catalog_title, &mut content);

    let state = app.state();
    for (index, (product, card_area)) in app
        .catalog()
        .items
        .iter()
        .zip(layout.catalog.iter())
        .enumerate()
    {
        ProductCard::new(product)
            .favorite(state.is_favorite(product.id.as_str()))
            .focused(app.focus() == Some(CardRef::catalog(index)))
            .render(*card_area, &mut content);
    }

    if let Some(feedback) = layout.feedback {
        Line::styled(state.last_action_text(), Style::default().fg(BODY_TEXT))
            .alignment(Alignment::Center)
            .render(feedback, &mut content);
    }

    let scroll = app.scroll().min(layout.max_scroll(area.height));
    blit(&content, Position::new(0, scroll), buf, area);
}

fn render_title(title: &str, area: Rect, buf: &mut Buffer) {
    Line::styled(
        title,
        Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
    )
    .render(area, buf);
}

fn render_strip(app: &App, layout: &ScreenLayout, buf: &mut Buffer) {
    if layout.strip.is_empty() {
        return;
    }
    let mut strip = Buffer::empty(Rect::new(0, 0, layout.strip_width, layout.strip.height));
    let state = app.state();
    for (index, (product, card_area)) in app
        .catalog()
        .featured
        .iter()
        .zip(layout.featured.iter())
        .enumerate()
    {
        ProductCard::new(product)
            .compact(true)
            .favorite(state.is_favorite(product.id.as_str()))
            .focused(app.focus() == Some(CardRef::featured(index)))
            .render(*card_area, &mut strip);
    }
    let offset = app.strip_offset().min(layout.max_strip_offset());
    blit(&strip, Position::new(offset, 0), buf, layout.strip);
}

fn render_stats(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    block.render(area, buf);

    let state = app.state();
    let style = Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD);
    let row = Rect {
        x: inner.x.saturating_add(1),
        width: inner.width.saturating_sub(2),
        height: inner.height.min(1),
        ..inner
    };
    Line::styled(format!("Favoris : {}", state.favorites_count()), style).render(row, buf);
    Line::styled(format!("Panier : {} article(s)", state.cart_count()), style)
        .alignment(Alignment::Right)
        .render(row, buf);
}

/// Copies the window of `src` starting at `origin` into `dst_area` of `dst`.
fn blit(src: &Buffer, origin: Position, dst: &mut Buffer, dst_area: Rect) {
    for dy in 0..dst_area.height {
        for dx in 0..dst_area.width {
            let from = Position::new(origin.x.saturating_add(dx), origin.y.saturating_add(dy));
            let to = Position::new(dst_area.x + dx, dst_area.y + dy);
            if let (Some(cell), Some(target)) = (src.cell(from), dst.cell_mut(to)) {
                *target = cell.clone();
            }
        }
    }
}

/// Renders one frame of `width`×`height` as plain text, one line per row.
pub fn render_snapshot(app: &mut App, width: u16, height: u16) -> String {
    app.on_resize(width, height);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render_frame(app, area, &mut buf);
    buffer_to_text(&buf)
}

/// Plain text of a buffer, one line per row. Cells covered by a wide glyph
/// are skipped so the text reads as it looks on screen.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = *buf.area();
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut x = area.left();
        while x < area.right() {
            let Some(cell) = buf.cell(Position::new(x, y)) else {
                break;
            };
            line.push_str(cell.symbol());
            x = x.saturating_add(cell.symbol().width().max(1) as u16);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
