// simish/src/ui/output_format.rs
//! Status message formatting for stderr.

use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

/// Prints an informational message, colored cyan when the stream supports it.
pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())?;
    } else {
        writeln!(writer, "{}", msg)?;
    }
    Ok(())
}

/// Prints a success message.
pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.green())?;
    } else {
        writeln!(writer, "{}", msg)?;
    }
    Ok(())
}

/// Prints a warning with a `Warning:` prefix.
pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg.yellow())?;
    } else {
        writeln!(writer, "Warning: {}", msg)?;
    }
    Ok(())
}

/// Prints an error with an `Error:` prefix.
pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg.red())?;
    } else {
        writeln!(writer, "Error: {}", msg)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_messages_have_no_escape_codes() {
        let mut out = Vec::new();
        print_warn_message(&mut out, "careful", false).unwrap();
        print_error_message(&mut out, "broken", false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Warning: careful\nError: broken\n");
    }

    #[test]
    fn test_colored_messages_contain_escape_codes() {
        let mut out = Vec::new();
        print_info_message(&mut out, "hello", true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("hello"));
    }
}
