use crate::domain::a002_verdict::ui::details::VerdictDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::i18n::I18nProvider;
use crate::shared::notify::Notifier;
use crate::usecases::u501_submit_case::CaseForm;
use contracts::domain::a002_verdict::VerdictResponse;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(Notifier::new());

    let on_verdict = Callback::new(move |verdict: VerdictResponse| ctx.show_verdict(verdict));
    let on_new_case = Callback::new(move |_: ()| ctx.new_case());

    view! {
        <ConfigProvider>
            <I18nProvider>
                <Shell>
                    {move || match ctx.verdict.get() {
                        Some(verdict) => {
                            view! { <VerdictDetails verdict=verdict on_new_case=on_new_case /> }
                                .into_any()
                        }
                        None => view! { <CaseForm on_verdict=on_verdict /> }.into_any(),
                    }}
                </Shell>
            </I18nProvider>
        </ConfigProvider>
    }
}
