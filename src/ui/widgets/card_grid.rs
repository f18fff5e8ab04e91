//! Card grid widget for ratatui
//!
//! Renders the fridge contents as bordered cards, three per row in
//! row-major display order. Each card shows the item name in bold and
//! an elapsed-time caption underneath.

use chrono::NaiveDateTime;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::age::format_age;
use crate::items::Item;

/// Cards per grid row
pub const GRID_COLS: usize = 3;

/// Rows a single card occupies, borders included
const CARD_HEIGHT: u16 = 4;

/// Widget for rendering the fridge card grid
pub struct CardGrid<'a> {
    items: &'a [Item],
    selected: usize,
    now: NaiveDateTime,
}

impl<'a> CardGrid<'a> {
    pub fn new(items: &'a [Item], now: NaiveDateTime) -> Self {
        Self {
            items,
            selected: 0,
            now,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    fn render_card(&self, item: &Item, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(100, 100, 120))
        };

        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let name = truncate_name(&item.name, inner.width as usize);
        buf.set_string(
            inner.x,
            inner.y,
            name,
            Style::default().add_modifier(Modifier::BOLD),
        );

        if inner.height > 1 {
            let caption = format!("🕒 {}", format_age(item.added_at, self.now));
            buf.set_string(
                inner.x,
                inner.y + 1,
                caption,
                Style::default().fg(Color::DarkGray),
            );
        }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let card_width = area.width / GRID_COLS as u16;
        if card_width < 4 || area.height < CARD_HEIGHT {
            return;
        }

        // Scroll whole rows so the selected card stays visible
        let visible_rows = (area.height / CARD_HEIGHT) as usize;
        let selected_row = self.selected / GRID_COLS;
        let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

        for (index, item) in self.items.iter().enumerate() {
            let row = index / GRID_COLS;
            if row < first_row {
                continue;
            }
            if row - first_row >= visible_rows {
                break;
            }

            let col = (index % GRID_COLS) as u16;
            let card_area = Rect {
                x: area.x + col * card_width,
                y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            };
            self.render_card(item, index == self.selected, card_area, buf);
        }
    }
}

/// Truncate a string to fit within max_len characters, adding "…" if truncated
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let truncated: String = name.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
