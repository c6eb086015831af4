//! Login and Signup Pages

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_navigate;

use super::redirect_after;
use crate::components::{FormNotice, TextField};
use crate::context::use_app;
use crate::forms::{submit, LoginForm, PasswordStrength, SignupForm, SubmitState, ROLES};
use crate::store::{store_signed_in, use_session_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let store = use_session_store();
    let navigate = StoredValue::new(use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(SubmitState::default());

    if app.is_signed_in() {
        return view! { <Redirect path="/dashboard"/> }.into_any();
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(SubmitState::is_submitting) {
            return;
        }

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let api = app.api();
        let delay = app.login_redirect_delay();
        state.set(SubmitState::Submitting);

        spawn_local(async move {
            match submit(&form, |request| async move { api.login(&request).await }).await {
                Ok(_) => {
                    store_signed_in(&store);
                    let _ = state.try_set(SubmitState::Success);
                    redirect_after(navigate, delay, "/dashboard").await;
                }
                Err(next) => {
                    let _ = state.try_set(next);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-subtitle">"Log in to manage your clients and projects."</p>
                <form on:submit=on_submit novalidate=true>
                    <TextField
                        label="Email"
                        field="email"
                        value=email
                        state=state
                        input_type="email"
                        placeholder="you@example.com"
                        required=true
                    />
                    <TextField
                        label="Password"
                        field="password"
                        value=password
                        state=state
                        input_type="password"
                        required=true
                    />
                    <FormNotice state=state success="Login successful! Redirecting..."/>
                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || state.with(|s| s.is_submitting() || *s == SubmitState::Success)
                    >
                        {move || if state.with(SubmitState::is_submitting) { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let app = use_app();
    let navigate = StoredValue::new(use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let state = RwSignal::new(SubmitState::default());

    let strength = Memo::new(move |_| password.with(|p| PasswordStrength::of(p)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(SubmitState::is_submitting) {
            return;
        }

        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            role: role.get_untracked(),
        };
        let api = app.api();
        let delay = app.redirect_delay();
        state.set(SubmitState::Submitting);

        spawn_local(async move {
            match submit(&form, |request| async move { api.signup(&request).await }).await {
                Ok(()) => {
                    let _ = state.try_set(SubmitState::Success);
                    redirect_after(navigate, delay, "/login").await;
                }
                Err(next) => {
                    let _ = state.try_set(next);
                }
            }
        });
    };

    let role_error = move || state.with(|s| s.field_error("role"));

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form on:submit=on_submit novalidate=true>
                    <TextField label="Full name" field="name" value=name state=state required=true/>
                    <TextField
                        label="Email"
                        field="email"
                        value=email
                        state=state
                        input_type="email"
                        placeholder="you@example.com"
                        required=true
                    />
                    <TextField
                        label="Password"
                        field="password"
                        value=password
                        state=state
                        input_type="password"
                        required=true
                    />
                    <Show when=move || strength.get() != PasswordStrength::Empty>
                        <div class=move || format!("password-strength strength-{}", strength.get().bars())>
                            <div class="strength-bars">
                                {(1..=3)
                                    .map(|bar| view! {
                                        <span class=move || { if strength.get().bars() >= bar { "bar filled" } else { "bar" } }></span>
                                    })
                                    .collect_view()}
                            </div>
                            <span class="strength-label">{move || strength.get().label()}</span>
                        </div>
                    </Show>
                    <TextField
                        label="Confirm password"
                        field="confirm_password"
                        value=confirm_password
                        state=state
                        input_type="password"
                        required=true
                    />
                    <div class="form-group" class:has-error=move || role_error().is_some()>
                        <label for="role">"Role"<span class="required">" *"</span></label>
                        <select
                            id="role"
                            prop:value=move || role.get()
                            on:change=move |ev| {
                                role.set(event_target_value(&ev));
                                state.update(|s| s.clear_field("role"));
                            }
                        >
                            <option value="">"Select a role"</option>
                            {ROLES
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                        {move || role_error().map(|m| view! { <span class="field-error">{m}</span> })}
                    </div>
                    <FormNotice state=state success="Account created! Redirecting to login..."/>
                    <button
                        type="submit"
                        class="btn btn-primary btn-block"
                        disabled=move || state.with(|s| s.is_submitting() || *s == SubmitState::Success)
                    >
                        {move || if state.with(SubmitState::is_submitting) { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}
