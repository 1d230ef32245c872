use anyhow::Result;
use crossterm::{
    QueueableCommand,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};

use crate::ui::theme::get_theme;

fn print_marked<W: Write + ?Sized>(out: &mut W, mark: &str, color: Color, message: &str) -> Result<()> {
    out.queue(SetForegroundColor(color))?;
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print(mark))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color))?;
    out.queue(Print(message))?;
    out.queue(ResetColor)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

pub fn print_success<W: Write + ?Sized>(out: &mut W, message: &str) -> Result<()> {
    print_marked(out, "✓ ", get_theme().success, message)
}

pub fn print_warning<W: Write + ?Sized>(out: &mut W, message: &str) -> Result<()> {
    print_marked(out, "! ", get_theme().warning, message)
}

pub fn print_hint<W: Write + ?Sized>(out: &mut W, message: &str) -> Result<()> {
    out.queue(SetForegroundColor(get_theme().hint))?;
    out.queue(Print(message))?;
    out.queue(ResetColor)?;
    writeln!(out)?;
    Ok(())
}

/// Prints `- item` lines, tagging the entry equal to `marked` if any.
pub fn print_bullet_list<W: Write + ?Sized>(
    out: &mut W,
    items: &[&str],
    marked: Option<&str>,
) -> Result<()> {
    let theme = get_theme();
    for item in items {
        write!(out, "- ")?;
        out.queue(SetForegroundColor(theme.accent))?;
        out.queue(Print(item))?;
        out.queue(ResetColor)?;
        if marked == Some(*item) {
            out.queue(SetForegroundColor(theme.hint))?;
            out.queue(Print(" (base)"))?;
            out.queue(ResetColor)?;
        }
        if let Err(err) = writeln!(out) {
            if err.kind() == io::ErrorKind::BrokenPipe {
                return Ok(());
            }
            return Err(err.into());
        }
    }
    Ok(())
}

/// Prints the error chain to stderr.
pub fn print_error(err: &anyhow::Error) -> Result<()> {
    let mut stderr = io::stderr();
    print_marked(&mut stderr, "✗ ", get_theme().error, &format!("{:#}", err))
}
