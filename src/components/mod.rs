//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod fields;
mod sidebar;
mod stat_card;
mod state_panel;
mod status_badge;

pub use delete_confirm_button::DeleteConfirmButton;
pub use fields::{FormNotice, TextAreaField, TextField};
pub use sidebar::AppShell;
pub use stat_card::StatCard;
pub use state_panel::StatePanel;
pub use status_badge::StatusBadge;
