use super::FieldError;
use leptos::prelude::*;

/// Text input with label and inline validation message
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: Signal<String>,
    /// Validation message; the control is marked invalid while set
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Input type: "text" (default), "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// ID for the input element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {move || label.get()}
            </label>
            <input
                id=id
                class=move || {
                    if error.with(|e| e.is_some()) {
                        "form__input form__input--invalid"
                    } else {
                        "form__input"
                    }
                }
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                disabled=move || disabled.get()
                aria-invalid=move || error.with(|e| e.is_some()).to_string()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            <FieldError message=error />
        </div>
    }
}
