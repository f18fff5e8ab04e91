//! Main UI application
//!
//! Coordinates rendering and input handling. The app keeps view state
//! only (current screen, selection cursor, form input); the item table
//! itself is reloaded from the store on every cycle.

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::items::{Inventory, Item};
use crate::ui::widgets::{CardGrid, GRID_COLS};

/// Which screen is showing
#[derive(Debug, Clone, PartialEq)]
enum View {
    /// Moving the selection around the card grid
    Browsing,
    /// The add-item popup is open
    AddForm { input: String },
}

/// Main UI application
pub struct App {
    inventory: Inventory,
    view: View,
    /// Selection cursor, an index into the display-ordered grid
    selected: usize,
}

impl App {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory,
            view: View::Browsing,
            selected: 0,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Handle keyboard input, returns true if the app should quit
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if matches!(self.view, View::AddForm { .. }) {
            self.handle_form_input(key)
        } else {
            self.handle_browse_input(key)
        }
    }

    fn handle_browse_input(&mut self, key: KeyEvent) -> Result<bool> {
        let count = self.inventory.display_items()?.len();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('a') | KeyCode::Char('+') => {
                self.view = View::AddForm {
                    input: String::new(),
                };
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(GRID_COLS);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 {
                    self.selected = (self.selected + GRID_COLS).min(count - 1);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if count > 0 {
                    self.inventory.remove(self.selected)?;
                    self.selected = self.selected.min(count.saturating_sub(2));
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn handle_form_input(&mut self, key: KeyEvent) -> Result<bool> {
        let View::AddForm { input } = &mut self.view else {
            return Ok(false);
        };

        match key.code {
            KeyCode::Esc => {
                self.view = View::Browsing;
            }
            KeyCode::Enter => {
                let name = input.clone();
                self.view = View::Browsing;
                self.inventory.add(&name, Local::now().naive_local())?;
                // The new item sorts first; move the cursor onto it
                if !name.trim().is_empty() {
                    self.selected = 0;
                }
            }
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            _ => {}
        }

        Ok(false)
    }

    /// Render one frame. `items` is the display-ordered table loaded
    /// fresh for this cycle.
    pub fn render(&self, frame: &mut Frame, items: &[Item], now: NaiveDateTime) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);

        if items.is_empty() {
            render_empty_state(frame, chunks[1]);
        } else {
            let selected = self.selected.min(items.len() - 1);
            frame.render_widget(CardGrid::new(items, now).selected(selected), chunks[1]);
        }

        self.render_footer(frame, chunks[2]);

        if let View::AddForm { input } = &self.view {
            render_add_form(frame, input);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Paragraph::new(Span::styled(
            "Fridge",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::Rgb(100, 100, 120))),
        );
        frame.render_widget(header, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            ("a", "add"),
            ("d", "delete"),
            ("←↑↓→", "select"),
            ("q", "quit"),
        ];

        let mut spans = Vec::new();
        for (key, desc) in hints {
            if !spans.is_empty() {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn render_empty_state(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            "Fridge is empty.",
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            "Press a to add an item",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(message, rows[1]);
}

fn render_add_form(frame: &mut Frame, input: &str) {
    let area = centered_rect(50, 30, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Add Item")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let name_line = if input.is_empty() {
        Line::from(vec![
            Span::raw("Name: "),
            Span::styled("e.g. Milk", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw("Name: "), Span::raw(input.to_string())])
    };

    let hint_line = Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" save  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]);

    let form = Paragraph::new(vec![name_line, Line::default(), hint_line]);
    frame.render_widget(form, inner);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
