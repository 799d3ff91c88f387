use colored::Colorize;
use stockpile::api::{CmdMessage, MessageLevel};
use stockpile::config::StockConfig;
use stockpile::index::DisplayItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) const NAME_WIDTH: usize = 60;

/// `[1] Widget (Stock: 12)`, with over-long names cut to [`NAME_WIDTH`] columns.
pub(super) fn format_item_line(di: &DisplayItem) -> String {
    format!(
        "[{}] {} (Stock: {})",
        di.index,
        truncate_to_width(&di.item.name, NAME_WIDTH),
        di.item.stock
    )
}

pub(super) fn print_items(items: &[DisplayItem]) {
    for di in items {
        let stock = format!("(Stock: {})", di.item.stock);
        let stock = if di.item.stock == 0 {
            stock.red()
        } else {
            stock.dimmed()
        };
        println!(
            "{} {} {}",
            format!("[{}]", di.index).yellow(),
            truncate_to_width(&di.item.name, NAME_WIDTH),
            stock
        );
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_config(config: &StockConfig) {
    for key in StockConfig::keys() {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
