use crate::catalog::Product;
use crate::ui::app::{App, Snapshot, View};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, listing_regions};
use crate::ui::products::{DetailLookup, FetchStatus};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_PENDING,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let snapshot = app.snapshot();
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.view(), &snapshot), header);
    frame.render_widget(Clear, body);

    match app.view() {
        View::Listing => draw_listing(frame, body, app, &snapshot),
        View::Detail { raw_id } => draw_detail(frame, body, raw_id, &snapshot),
        View::Favorites => draw_favorites(frame, body, app, &snapshot),
    }

    let footer_widget = Footer::new();
    frame.render_widget(
        footer_widget.widget(footer, app.view(), snapshot.filters.has_active_filters()),
        footer,
    );
}

fn draw_listing(frame: &mut Frame<'_>, body: Rect, app: &App, snapshot: &Snapshot) {
    let (bar, list_area) = listing_regions(body);

    let category = match snapshot.filters.selected_category() {
        "" => "All categories",
        other => other,
    };
    let pending = if app.search_pending() { " …" } else { "" };
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let bar_lines = vec![
        Line::from(vec![
            Span::styled(" Search: ", label),
            Span::styled(format!("{}▏", app.search_input()), value),
            Span::styled(pending, label),
        ]),
        Line::from(vec![
            Span::styled(" Category: ", label),
            Span::styled(category.to_string(), value),
            Span::styled("   Sort: ", label),
            Span::styled(snapshot.filters.sort_by().label(), value),
        ]),
    ];
    frame.render_widget(Paragraph::new(bar_lines).block(bordered("Filters")), bar);

    let products = &snapshot.products;
    let message = match products.status() {
        FetchStatus::Idle | FetchStatus::Loading if products.items().is_empty() => Some(
            Line::styled(" Loading products…", Style::default().fg(STATUS_PENDING)),
        ),
        FetchStatus::Failed => Some(Line::from(vec![
            Span::styled(
                format!(" {}", products.error().unwrap_or("Failed to fetch products")),
                Style::default().fg(STATUS_ERROR),
            ),
            Span::styled("  (Ctrl+R to retry)", Style::default().fg(MUTED_TEXT)),
        ])),
        _ if snapshot.visible.is_empty() => Some(Line::styled(
            " No products found",
            Style::default().fg(MUTED_TEXT),
        )),
        _ => None,
    };
    if let Some(message) = message {
        frame.render_widget(Paragraph::new(message).block(bordered("Products")), list_area);
        return;
    }

    let title = format!("Showing {} products", snapshot.visible.len());
    draw_product_list(
        frame,
        list_area,
        &title,
        &snapshot.visible,
        app.listing_cursor(),
        |id| snapshot.favorites.contains(id),
    );
}

fn draw_detail(frame: &mut Frame<'_>, body: Rect, raw_id: &str, snapshot: &Snapshot) {
    let product = match snapshot.products.lookup(raw_id) {
        DetailLookup::Loading => {
            let line = Line::styled(" Loading…", Style::default().fg(STATUS_PENDING));
            frame.render_widget(Paragraph::new(line).block(bordered("Product")), body);
            return;
        }
        DetailLookup::NotFound => {
            let line = Line::styled(" Product not found", Style::default().fg(STATUS_ERROR));
            frame.render_widget(Paragraph::new(line).block(bordered("Product")), body);
            return;
        }
        DetailLookup::Found(product) => product,
    };

    let label = Style::default().fg(MUTED_TEXT);
    let heart = if snapshot.favorites.contains(product.id) {
        Span::styled("♥ In favorites", Style::default().fg(FAVORITE))
    } else {
        Span::styled("♡ Not in favorites", label)
    };
    let lines = vec![
        Line::styled(
            product.title.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::raw(product.category.clone()),
        ]),
        Line::from(vec![
            Span::styled("Price:    ", label),
            Span::raw(product.formatted_price()),
        ]),
        Line::from(vec![
            Span::styled("Rating:   ", label),
            Span::raw(format!(
                "{:.1} / 5 ({} reviews)",
                product.rating.rate, product.rating.count
            )),
        ]),
        Line::from(vec![Span::styled("Image:    ", label), Span::raw(product.image.clone())]),
        Line::from(heart),
        Line::from(""),
        Line::from(product.description.clone()),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(bordered("Product")),
        body,
    );
}

fn draw_favorites(frame: &mut Frame<'_>, body: Rect, app: &App, snapshot: &Snapshot) {
    let items = snapshot.favorites.items();
    if items.is_empty() {
        let line = Line::styled(" No favorites yet", Style::default().fg(MUTED_TEXT));
        frame.render_widget(Paragraph::new(line).block(bordered("Favorites")), body);
        return;
    }

    let title = format!("Favorites ({})", snapshot.favorites.count());
    draw_product_list(frame, body, &title, items, app.favorites_cursor(), |_| true);
}

fn draw_product_list(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    products: &[Product],
    cursor: usize,
    is_favorite: impl Fn(u64) -> bool,
) {
    let rows: Vec<ListItem> = products
        .iter()
        .map(|product| {
            let marker = if is_favorite(product.id) {
                Span::styled("♥ ", Style::default().fg(FAVORITE))
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(
                    format!("{:>9}  ", product.formatted_price()),
                    Style::default().fg(ACCENT),
                ),
                Span::styled(
                    format!("{:<18}  ", product.category),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(product.title.clone(), Style::default().fg(HEADER_TEXT)),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(bordered(title))
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn bordered(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
