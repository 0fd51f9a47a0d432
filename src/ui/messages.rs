//! Console messages. Colors are dropped when NO_COLOR is set.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled(colour: Colour, icon: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return icon.to_string();
    }
    Style::new().fg(colour).bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", styled(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", styled(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", styled(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", styled(Colour::Red, ICON_ERR), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("=== {} ===", msg);
    if std::env::var_os("NO_COLOR").is_some() {
        println!("{line}");
    } else {
        println!("{}", Colour::Blue.bold().paint(line));
    }
}
