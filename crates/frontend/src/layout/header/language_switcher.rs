use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::shared::i18n::Language;
use leptos::prelude::*;

/// Segmented EN / עב toggle.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="lang-switch" role="group" aria-label="Language">
            {icon("globe")}
            {Language::all()
                .into_iter()
                .map(|language| {
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if i18n.language.get() == language {
                                    "lang-switch__btn lang-switch__btn--active"
                                } else {
                                    "lang-switch__btn"
                                }
                            }
                            aria-pressed=move || (i18n.language.get() == language).to_string()
                            on:click=move |_| i18n.set_language(language)
                        >
                            {language.switcher_label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
