//! Interactive form: the inventory on the left, a small data-entry form on
//! the right.
//!
//! Key handling lives in [`Form`] and is independent of the terminal, so it is
//! tested by feeding it key events against an in-memory inventory. The event
//! loop and the drawing code are the only parts that touch the screen.

use super::render::format_item_line;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::{DefaultTerminal, Frame};
use stockpile::api::{CmdMessage, MessageLevel, StockApi};
use stockpile::commands::list::EMPTY_MESSAGE;
use stockpile::error::{Result, StockError};
use stockpile::index::index_items;
use stockpile::store::DataStore;
use unicode_width::UnicodeWidthStr;

const NAME_LABEL: &str = "Item Name: ";
const STOCK_LABEL: &str = "Stock: ";
const ID_LABEL: &str = "Item ID to delete: ";

pub(super) fn run<S: DataStore>(api: &mut StockApi<S>) -> Result<()> {
    let mut terminal = ratatui::init();
    let mut form = Form::default();
    let result = event_loop(&mut terminal, &mut form, api);
    ratatui::restore();
    result
}

fn event_loop<S: DataStore>(
    terminal: &mut DefaultTerminal,
    form: &mut Form,
    api: &mut StockApi<S>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, form, api))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && form.handle_key(key, api) == Flow::Exit {
                return Ok(());
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    Name,
    Stock,
    ItemId,
    AddButton,
    DeleteButton,
    ExitButton,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Name,
        Focus::Stock,
        Focus::ItemId,
        Focus::AddButton,
        Focus::DeleteButton,
        Focus::ExitButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Default)]
pub(super) struct Form {
    name: String,
    stock: String,
    item_id: String,
    focus: Focus,
    status: Option<CmdMessage>,
}

impl Form {
    pub(super) fn handle_key<S: DataStore>(&mut self, key: KeyEvent, api: &mut StockApi<S>) -> Flow {
        match key.code {
            KeyCode::Esc => return Flow::Exit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Exit
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => return self.activate(api),
            KeyCode::Backspace => {
                if let Some(field) = self.field_mut() {
                    field.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.field_mut() {
                    field.push(c);
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Name => Some(&mut self.name),
            Focus::Stock => Some(&mut self.stock),
            Focus::ItemId => Some(&mut self.item_id),
            _ => None,
        }
    }

    fn activate<S: DataStore>(&mut self, api: &mut StockApi<S>) -> Flow {
        match self.focus {
            Focus::AddButton => self.add(api),
            Focus::DeleteButton => self.delete(api),
            Focus::ExitButton => return Flow::Exit,
            _ => self.focus = self.focus.next(),
        }
        Flow::Continue
    }

    fn add<S: DataStore>(&mut self, api: &mut StockApi<S>) {
        if self.name.is_empty() || self.stock.is_empty() {
            return;
        }
        match api.add_item(&self.name, &self.stock) {
            Ok(result) => {
                self.status = result.messages.into_iter().last();
                self.name.clear();
                self.stock.clear();
            }
            Err(StockError::InvalidInput(_)) => {
                self.status = Some(CmdMessage::error("Invalid stock value."));
            }
            Err(e) => {
                // The item is already in the list; only the save failed
                self.status = Some(CmdMessage::error(e.to_string()));
                self.name.clear();
                self.stock.clear();
            }
        }
    }

    fn delete<S: DataStore>(&mut self, api: &mut StockApi<S>) {
        let id = self.item_id.trim().to_string();
        if id.is_empty() {
            self.status = Some(CmdMessage::warning("Please enter an item ID to delete."));
            return;
        }
        match api.delete_items(&[id.as_str()]) {
            Ok(_) => {
                self.status = Some(CmdMessage::success(format!("Item [{}] deleted.", id)));
                self.item_id.clear();
            }
            Err(StockError::InvalidInput(_)) | Err(StockError::OutOfRange { .. }) => {
                self.status = Some(CmdMessage::error("Invalid item ID."));
            }
            Err(e) => {
                self.status = Some(CmdMessage::error(e.to_string()));
                self.item_id.clear();
            }
        }
    }
}

fn draw<S: DataStore>(frame: &mut Frame, form: &Form, api: &StockApi<S>) {
    let [list_area, form_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(frame.area());

    draw_inventory(frame, list_area, api);
    draw_form(frame, form_area, form);
}

fn draw_inventory<S: DataStore>(frame: &mut Frame, area: Rect, api: &StockApi<S>) {
    let items = api.inventory().list();
    let lines: Vec<Line> = if items.is_empty() {
        vec![Line::from(EMPTY_MESSAGE)]
    } else {
        index_items(items)
            .iter()
            .map(|di| Line::from(format_item_line(di)))
            .collect()
    };

    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::bordered().title(format!(" Inventory ({}) ", items.len())));
    frame.render_widget(list, area);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &Form) {
    let block = Block::bordered().title(" Manage Inventory ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = [
        (Focus::Name, NAME_LABEL, form.name.as_str()),
        (Focus::Stock, STOCK_LABEL, form.stock.as_str()),
        (Focus::ItemId, ID_LABEL, form.item_id.as_str()),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (focus, label, value) in fields {
        lines.push(field_line(label, value, form.focus == focus));
        lines.push(Line::default());
    }

    let buttons = [
        (Focus::AddButton, "Add Item"),
        (Focus::DeleteButton, "Delete Item"),
        (Focus::ExitButton, "Exit"),
    ];
    let mut spans = Vec::new();
    for (focus, label) in buttons {
        let style = if form.focus == focus {
            Style::new().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::new()
        };
        spans.push(Span::styled(format!("[ {} ]", label), style));
        spans.push(Span::raw("  "));
    }
    lines.push(Line::from(spans));
    lines.push(Line::default());

    if let Some(status) = &form.status {
        lines.push(Line::styled(status.content.clone(), status_style(&status.level)));
    }
    lines.push(Line::styled(
        "Tab/Shift-Tab move · Enter select · Esc quit",
        Style::new().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines), inner);

    // Put the terminal cursor at the end of the focused input
    if let Some((row, label, value)) = fields
        .iter()
        .enumerate()
        .find(|(_, (focus, _, _))| *focus == form.focus)
        .map(|(i, (_, label, value))| (i, *label, *value))
    {
        let x = inner.x + (label.width() + value.width()) as u16;
        let y = inner.y + (row * 2) as u16;
        if x < inner.right() && y < inner.bottom() {
            frame.set_cursor_position((x, y));
        }
    }
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::new().add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(value, Style::new().add_modifier(Modifier::UNDERLINED)),
    ])
}

fn status_style(level: &MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::new().fg(Color::DarkGray),
        MessageLevel::Success => Style::new().fg(Color::Green),
        MessageLevel::Warning => Style::new().fg(Color::Yellow),
        MessageLevel::Error => Style::new().fg(Color::Red),
    }
}
