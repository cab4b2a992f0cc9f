// src/console.rs
use crate::presenter::RowContent;
use chrono::Local;
use colored::{Color, Colorize};
use std::io::{self, Write};
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
pub struct SnackRow {
    #[tabled(rename = "Index")]
    pub index: usize,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Image")]
    pub image: String,
}

fn timestamp() -> colored::ColoredString {
    format!("[{}]", Local::now().format("%H:%M:%S")).color(Color::Green)
}

pub struct StdUtils;

impl StdUtils {
    pub fn prompt(message: &str) {
        let symbol = "[OPT]".color(Color::Magenta);
        print!("{} {} {}: ", symbol, timestamp(), message);
        // A prompt that fails to flush only shows up late.
        let _ = io::stdout().flush();
    }

    pub fn stdout(message: &str) {
        let symbol = "[MSG]".color(Color::Yellow);
        println!("{} {} {}", symbol, timestamp(), message);
    }

    pub fn stderr(message: &str) {
        let symbol = "[ERR]".color(Color::Red);
        eprintln!("{} {} {}", symbol, timestamp(), message);
    }

    pub fn snack_rows(rows: &[RowContent]) -> Vec<SnackRow> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| SnackRow {
                index,
                name: truncate(&row.title, 40),
                image: row.image_uri.to_string(),
            })
            .collect()
    }

    pub fn print_rows(rows: &[RowContent]) {
        if rows.is_empty() {
            Self::stderr("No snacks found");
            return;
        }

        println!("\n{}", " SNACKS ".on_white().black().bold());
        let table = Table::new(Self::snack_rows(rows));
        println!("{}", table);
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
