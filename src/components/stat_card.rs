use leptos::prelude::*;

/// Single figure with a caption, used in stats rows
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card {}", accent)>
            <span class="stat-value">{move || value.get()}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
