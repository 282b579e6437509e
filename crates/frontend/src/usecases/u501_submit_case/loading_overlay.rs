use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::usecases::u501_submit_case::SubmitPhase;
use leptos::prelude::*;
use thaw::*;

/// Full-screen blocker shown while a submission is in flight.
#[component]
pub fn LoadingOverlay(
    #[prop(into)]
    phase: Signal<SubmitPhase>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Show when=move || phase.get().is_busy()>
            <div class="overlay" role="alertdialog" aria-busy="true">
                <div class="overlay__panel">
                    <Spinner />
                    <p class="overlay__title">{move || i18n.t("loading")}</p>
                    <p class="overlay__phase">
                        {move || phase.get().message_key().map(|key| i18n.t(key)).unwrap_or_default()}
                    </p>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                        " "
                        {move || i18n.t("cancel")}
                    </Button>
                </div>
            </div>
        </Show>
    }
}
