use anyhow::Result;
use colored::Colorize;

use crate::deck::SlideRegistry;

pub fn run() -> Result<()> {
    let deck = SlideRegistry::builtin()?;
    let width = deck.len().to_string().len();
    for (idx, slide) in deck.iter().enumerate() {
        let marker = if slide.content.diagram().is_some() {
            " (live diagram)".dimmed().to_string()
        } else {
            String::new()
        };
        let number = format!("{:>width$}", idx + 1);
        println!("{}  {}{}", number.cyan(), slide.title.bold(), marker);
    }
    Ok(())
}
