use crate::ui::app::View;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

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

    pub fn widget(&self, area: Rect, view: &View, has_active_filters: bool) -> Paragraph<'static> {
        let hints = hints(view, has_active_filters);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

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

fn hints(view: &View, has_active_filters: bool) -> String {
    match view {
        View::Listing => {
            let mut hints = String::from(
                " Enter: Open │ Tab: Category │ Ctrl+O: Sort │ Ctrl+F: Favorite │ Ctrl+G: Favorites",
            );
            if has_active_filters {
                hints.push_str(" │ Ctrl+L: Clear all");
            }
            hints.push_str(" │ Ctrl+Q: Quit");
            hints
        }
        View::Detail { .. } => " f: Favorite │ Esc: Back │ Ctrl+Q: Quit".to_string(),
        View::Favorites => {
            " Enter: Open │ Ctrl+F: Remove │ Esc: Back │ Ctrl+Q: Quit".to_string()
        }
    }
}
