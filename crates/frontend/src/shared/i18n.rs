//! Active UI language as context.
//!
//! String tables live in `contracts::shared::i18n`; this module only keeps the
//! current language in a signal and mirrors it onto `<html dir lang>`.

use contracts::shared::i18n::{translate, Language};
use leptos::prelude::*;
use web_sys::window;

/// Set `dir` and `lang` on the document element.
fn apply_document_language(language: Language) {
    let root = match window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(root) => root,
        None => return,
    };
    let _ = root.set_attribute("dir", language.dir());
    let _ = root.set_attribute("lang", language.code());
}

#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<Language>,
}

impl I18nContext {
    pub fn set_language(&self, language: Language) {
        if self.language.get_untracked() == language {
            return;
        }
        log::debug!("language -> {}", language.code());
        self.language.set(language);
        apply_document_language(language);
    }

    /// Reactive lookup; re-runs when the language changes.
    pub fn t(&self, key: &str) -> String {
        translate(self.language.get(), key).to_string()
    }

    /// Lookup for event handlers and async tasks.
    pub fn t_untracked(&self, key: &str) -> String {
        translate(self.language.get_untracked(), key).to_string()
    }
}

#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let initial = Language::default();
    apply_document_language(initial);

    provide_context(I18nContext {
        language: RwSignal::new(initial),
    });

    children()
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Wrap your app with I18nProvider.")
}
