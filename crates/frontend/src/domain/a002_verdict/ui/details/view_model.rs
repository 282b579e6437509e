use crate::shared::clipboard::{copy_to_clipboard_with_callback, print_page};
use crate::shared::i18n::{use_i18n, I18nContext};
use crate::shared::notify::{use_notifier, Notifier};
use contracts::domain::a002_verdict::{clipboard_text, VerdictResponse};
use leptos::prelude::*;

/// ViewModel for the verdict screen
#[derive(Clone, Copy)]
pub struct VerdictDetailsViewModel {
    pub verdict: RwSignal<VerdictResponse>,
    pub reasoning_open: RwSignal<bool>,
    i18n: I18nContext,
    notifier: Notifier,
}

impl VerdictDetailsViewModel {
    pub fn new(verdict: VerdictResponse) -> Self {
        Self {
            verdict: RwSignal::new(verdict),
            reasoning_open: RwSignal::new(false),
            i18n: use_i18n(),
            notifier: use_notifier(),
        }
    }

    pub fn toggle_reasoning(&self) {
        self.reasoning_open.update(|open| *open = !*open);
    }

    /// Copies the plain-text rendering, headed in the current UI language.
    pub fn copy_command(&self) {
        let language = self.i18n.language.get_untracked();
        let text = self.verdict.with_untracked(|v| clipboard_text(v, language));
        let notifier = self.notifier;
        let i18n = self.i18n;
        copy_to_clipboard_with_callback(&text, move || {
            notifier.success(i18n.t_untracked("copied"));
        });
    }

    pub fn print_command(&self) {
        print_page();
    }
}
