//! Form Field Components
//!
//! Labelled inputs bound to a string signal. Field errors are read from the
//! form's `SubmitState` and cleared as soon as the user edits the field.

use leptos::prelude::*;

use crate::forms::SubmitState;

/// Text-like input (`text`, `email`, `password`, `tel`, `date`)
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    /// Field key used by validation
    field: &'static str,
    value: RwSignal<String>,
    state: RwSignal<SubmitState>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let error = move || state.with(|s| s.field_error(field));

    view! {
        <div class="form-group" class:has-error=move || error().is_some()>
            <label for=field>
                {label}
                {required.then_some(view! { <span class="required">" *"</span> })}
            </label>
            <input
                id=field
                name=field
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || state.with(SubmitState::is_submitting)
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    state.update(|s| s.clear_field(field));
                }
            />
            <FieldError message=Signal::derive(error)/>
        </div>
    }
}

/// Multi-line text input
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    field: &'static str,
    value: RwSignal<String>,
    state: RwSignal<SubmitState>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let error = move || state.with(|s| s.field_error(field));

    view! {
        <div class="form-group" class:has-error=move || error().is_some()>
            <label for=field>
                {label}
                {required.then_some(view! { <span class="required">" *"</span> })}
            </label>
            <textarea
                id=field
                name=field
                rows="4"
                prop:value=move || value.get()
                disabled=move || state.with(SubmitState::is_submitting)
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    state.update(|s| s.clear_field(field));
                }
            ></textarea>
            <FieldError message=Signal::derive(error)/>
        </div>
    }
}

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|m| view! { <span class="field-error">{m}</span> })
}

/// Server message or success notice above the submit button
#[component]
pub fn FormNotice(
    state: RwSignal<SubmitState>,
    /// Shown once the save succeeded
    success: &'static str,
) -> impl IntoView {
    move || {
        state.with(|s| match s {
            SubmitState::Success => Some(view! { <div class="notice notice-success">{success}</div> }.into_any()),
            SubmitState::Editing { server_error: Some(message), .. } => {
                Some(view! { <div class="notice notice-error">{message.clone()}</div> }.into_any())
            }
            _ => None,
        })
    }
}
