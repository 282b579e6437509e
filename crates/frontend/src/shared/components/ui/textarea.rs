use super::FieldError;
use leptos::prelude::*;

/// Textarea with label and inline validation message
#[component]
pub fn Textarea(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: Signal<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let textarea_rows = rows.unwrap_or(4);
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {move || label.get()}
            </label>
            <textarea
                id=id
                class=move || {
                    if error.with(|e| e.is_some()) {
                        "form__textarea form__textarea--invalid"
                    } else {
                        "form__textarea"
                    }
                }
                placeholder=move || placeholder.get()
                disabled=move || disabled.get()
                rows=textarea_rows
                prop:value=move || value.get()
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
