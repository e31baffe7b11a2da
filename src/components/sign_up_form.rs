//! Sign-up Form Component
//!
//! Validates on submit, then re-validates on every edit. The first invalid
//! field takes focus.

use leptos::html::Input;
use leptos::prelude::*;

use crate::validation::{first_error, validate, Field, FieldErrors, SignUpForm};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let (form, set_form) = signal(SignUpForm::default());
    let (errors, set_errors) = signal(FieldErrors::new());
    let (attempted, set_attempted) = signal(false);
    let (accepted, set_accepted) = signal(false);

    let inputs = Field::ALL.map(|field| (field, NodeRef::<Input>::new()));

    let focus = move |field: Field| {
        let input = inputs
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, node_ref)| node_ref.get_untracked());
        if let Some(input) = input {
            let _ = input.focus();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_attempted.set(true);

        let current = form.get_untracked();
        let found = validate(&current);
        match first_error(&found) {
            Some(field) => {
                tracing::debug!(?field, errors = found.len(), "sign-up form rejected");
                set_accepted.set(false);
                focus(field);
            }
            None => {
                tracing::info!(username = %current.username, "sign-up form accepted");
                set_accepted.set(true);
            }
        }
        set_errors.set(found);
    };

    view! {
        <form class="sign-up-form" on:submit=on_submit>
            <h1>"Sign up"</h1>
            {inputs.into_iter().map(|(field, node_ref)| view! {
                <input
                    type=field.input_type()
                    placeholder=field.placeholder()
                    node_ref=node_ref
                    prop:value=move || form.with(|f| f.value(field).to_string())
                    on:input=move |ev| {
                        set_form.update(|f| f.set(field, event_target_value(&ev)));
                        if attempted.get_untracked() {
                            set_errors.set(validate(&form.get_untracked()));
                        }
                    }
                />
                <span class="field-error">
                    {move || errors.with(|e| e.get(&field).copied().unwrap_or(""))}
                </span>
            }).collect_view()}
            <button type="submit">"Add"</button>
            <Show when=move || accepted.get()>
                <p class="form-success">"Welcome aboard!"</p>
            </Show>
        </form>
    }
}
