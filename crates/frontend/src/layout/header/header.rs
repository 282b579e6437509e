use super::language_switcher::LanguageSwitcher;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <header data-zone="header" class="header no-print">
            <div class="header__content">
                <span class="header__logo">{icon("scale")}</span>
                <h1 class="header__title">{move || i18n.t("title")}</h1>
            </div>
            <div class="header__actions">
                <LanguageSwitcher />
            </div>
        </header>
    }
}
