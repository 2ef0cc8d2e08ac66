//! UI layer for the desktop GUI: Home and Order views.

pub mod app;

pub use app::{PizzaOrderApp, StartupConfig};
