use leptos::prelude::*;
use leptos_router::components::A;

use crate::store::{use_session_store, SessionStateStoreFields};

/// Landing page
#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_session_store();
    let signed_in = move || store.signed_in().get();

    view! {
        <div class="landing">
            <header class="landing-header">
                <h1>"ProjectDesk"</h1>
                <p class="tagline">"Keep track of your clients and the projects you run for them."</p>
            </header>
            <div class="landing-actions">
                <Show
                    when=signed_in
                    fallback=|| view! {
                        <A href="/login" attr:class="btn btn-primary">"Log in"</A>
                        <A href="/signup" attr:class="btn btn-secondary">"Create an account"</A>
                    }
                >
                    <A href="/dashboard" attr:class="btn btn-primary">"Go to dashboard"</A>
                </Show>
            </div>
            <section class="landing-features">
                <div class="feature">
                    <h3>"Clients"</h3>
                    <p>"One place for contact details and company information."</p>
                </div>
                <div class="feature">
                    <h3>"Projects"</h3>
                    <p>"Status, schedule and client for every engagement."</p>
                </div>
                <div class="feature">
                    <h3>"Dashboard"</h3>
                    <p>"See what is in progress and what starts this week."</p>
                </div>
            </section>
        </div>
    }
}
