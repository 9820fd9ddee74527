use ratatui::layout::Rect;

pub const FOOTER_HEIGHT: u16 = 3;

/// Splits the terminal into the scrolled body and the fixed footer bar.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_takes_bottom_rows() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(body, Rect::new(0, 0, 80, 21));
        assert_eq!(footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn tiny_terminal_is_all_footer() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 2);
    }
}
