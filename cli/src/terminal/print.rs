use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;
use wavescan_common::config::Config;

pub const TOTAL_WIDTH: usize = 60;

/// Events on this target skip the level symbol in the formatter.
pub const RAW_TARGET: &str = "wavescan::print";

const KEY_WIDTH: usize = 15;

#[macro_export]
macro_rules! wprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: "wavescan::print", "{}", msg);
}

pub fn banner() {
    let text_content: String = format!("⟦ WAVESCAN v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_cyan().bold();
    let sep: ColoredString = "═"
        .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
        .bright_black();
    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_cyan(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).bright_black()));
}

pub fn end_of_program() {
    fat_separator();
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// Key/value line padded with dots, used for the startup config echo.
pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn config_lines(cfg: &Config) {
    aligned_line("interface", &cfg.interface);
    aligned_line("capture folder", cfg.capture_folder.display());
    aligned_line("simulate", cfg.simulate_capture);
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

pub fn as_tree_one_level(rows: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in rows.iter().enumerate() {
        let last: bool = i + 1 == rows.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(9usize.saturating_sub(key.len()));
        print(&format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn no_results() {
    print(&format!("{}", "0 NETWORKS FOUND".red().bold()));
}
