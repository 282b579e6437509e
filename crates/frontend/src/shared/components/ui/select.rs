use super::FieldError;
use leptos::prelude::*;

/// Select with a leading placeholder option and inline validation message
#[component]
pub fn Select(
    #[prop(into)]
    label: Signal<String>,
    /// Current value; empty string selects the placeholder
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(optional, into)]
    placeholder: Signal<String>,
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {move || label.get()}
            </label>
            <select
                id=id
                class=move || {
                    if error.with(|e| e.is_some()) {
                        "form__select form__select--invalid"
                    } else {
                        "form__select"
                    }
                }
                disabled=move || disabled.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {move || placeholder.get()}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
            <FieldError message=error />
        </div>
    }
}
