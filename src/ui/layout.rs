use ratatui::layout::Rect;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the listing body into the filter bar (search + filters) and the list.
pub fn listing_regions(body: Rect) -> (Rect, Rect) {
    let bar_height = body.height.min(4);
    let bar = Rect {
        height: bar_height,
        ..body
    };
    let list = Rect {
        y: body.y + bar_height,
        height: body.height.saturating_sub(bar_height),
        ..body
    };
    (bar, list)
}
