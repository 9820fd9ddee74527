use crate::ui::text;
use crate::ui::theme::{GLOBAL_BORDER, TITLE_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str =
    " ↑↓←→: Naviguer │ Entrée: Aperçu │ A: Acheter │ F: Favori │ PgUp/PgDn: Défiler │ Q: Quitter";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let hints = text::truncate(
            HINTS,
            content_width.saturating_sub(text::width(&version) + 1),
        );
        let padding = content_width
            .saturating_sub(text::width(&hints))
            .saturating_sub(text::width(&version));

        let text_style = Style::default().fg(TITLE_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
