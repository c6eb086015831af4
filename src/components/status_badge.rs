//! Project status pill

use leptos::prelude::*;

use crate::models::ProjectStatus;

#[component]
pub fn StatusBadge(status: Option<ProjectStatus>) -> impl IntoView {
    let (class, label) = match status {
        Some(status) => (format!("status-badge {}", status.css_class()), status.label()),
        None => ("status-badge status-unknown".to_string(), "Unknown"),
    };
    view! { <span class=class>{label}</span> }
}
