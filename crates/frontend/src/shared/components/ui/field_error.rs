use leptos::prelude::*;

/// Inline validation message under a form control.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! { <p class="form__error" role="alert">{text}</p> }
        })
    }
}
