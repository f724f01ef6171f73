//! Terminal setup and restoration

use checkout_core::prelude::*;
use crossterm::{execute, terminal::SetTitle};

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Set the terminal window title (the page title)
pub fn set_title(title: &str) -> Result<()> {
    execute!(std::io::stdout(), SetTitle(title))?;
    Ok(())
}
