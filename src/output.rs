use owo_colors::OwoColorize;

use crate::report::FlattenReport;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Used for verbose narration.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Print the end-of-run counters under a one-line heading.
pub fn print_summary(heading: &str, report: &FlattenReport) {
    if report.is_clean() {
        print_success(heading);
    } else if is_tty() {
        println!("{} {}", "warn:".yellow().bold(), heading);
    } else {
        println!("warn: {}", heading);
    }
    println!("{}", report);
}
