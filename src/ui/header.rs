use crate::ui::app::{Snapshot, View};
use crate::ui::products::FetchStatus;
use crate::ui::theme::{
    ACCENT, FAVORITE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &View, snapshot: &Snapshot) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_label, status_color) = match snapshot.products.status() {
            FetchStatus::Idle => ("idle", HEADER_SEPARATOR),
            FetchStatus::Loading => ("loading", STATUS_PENDING),
            FetchStatus::Succeeded => ("ready", STATUS_OK),
            FetchStatus::Failed => ("error", STATUS_ERROR),
        };
        let page = match view {
            View::Listing => "Products",
            View::Detail { .. } => "Product details",
            View::Favorites => "Favorites",
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Shopfront",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(page, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", Style::default().fg(status_color)),
            Span::styled(status_label, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("♥ ", Style::default().fg(FAVORITE)),
            Span::styled(snapshot.favorites.count().to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
