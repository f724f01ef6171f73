//! Main TUI runner - entry point and event loop

use checkout_app::config::Settings;
use checkout_app::{process_message, AppState, CheckoutEvent, Message};
use checkout_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive checkout screen until the user quits
pub fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    info!(
        "Starting checkout: \"{}\" ({})",
        settings.page.title, settings.page.description
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Title failures are cosmetic; keep going
    if let Err(e) = terminal::set_title(&settings.page.title) {
        warn!("Failed to set terminal title: {}", e);
    }

    let mut state = AppState::with_settings(settings);
    let result = run_loop(&mut term, &mut state);

    ratatui::restore();

    info!(
        "Checkout closed (coupon: {})",
        state.checkout.applied_coupon_code().unwrap_or("none")
    );
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw checkout screen")?;

        if let Some(message) = event::poll().context("Failed to read terminal event")? {
            dispatch(state, message);
        }
    }

    Ok(())
}

fn dispatch(state: &mut AppState, message: Message) {
    for event in process_message(state, message) {
        if let CheckoutEvent::BookingRequested = event {
            info!(
                "Booking requested at {}",
                checkout_core::format_currency(state.checkout.price_summary().discounted)
            );
        }
    }
}
