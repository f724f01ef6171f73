//! checkout-app - Application state and update logic for Airline Checkout
//!
//! This crate implements the TEA (The Elm Architecture) pattern: the
//! [`AppState`] model, [`Message`]s, the [`update`] function and a
//! toolkit-independent [`CheckoutView`] projection. It never touches the
//! terminal, so the headless driver reuses it unchanged.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;
pub mod view_model;

// Re-export primary types
pub use handler::{handle_key, update, CheckoutEvent, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppPhase, AppState, CheckoutState, CouponStatus, Focus};
pub use view_model::{CheckoutView, CouponSection, PricePanel};
