use super::view_model::VerdictDetailsViewModel;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::a002_verdict::{SectionKind, VerdictResponse};
use leptos::prelude::*;
use thaw::*;

/// One verdict field. Direction and alignment follow the text, not the UI.
#[component]
fn VerdictField(
    vm: VerdictDetailsViewModel,
    kind: SectionKind,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let i18n = use_i18n();
    let section = move || {
        vm.verdict.with(|v| {
            let s = v.section(kind);
            (s.text.to_string(), s.direction)
        })
    };

    view! {
        <div class=format!("verdict__field {}", class)>
            <h3 class="verdict__label">{move || i18n.t(kind.label_key())}</h3>
            {move || {
                let (text, direction) = section();
                view! {
                    <p
                        class="verdict__text"
                        dir=direction.as_str()
                        style=format!("text-align: {}", direction.text_align())
                    >
                        {text}
                    </p>
                }
            }}
        </div>
    }
}

#[component]
pub fn VerdictDetails(verdict: VerdictResponse, on_new_case: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let vm = VerdictDetailsViewModel::new(verdict);

    view! {
        <div class="verdict">
            <section class="card verdict__header">
                <h2 class="card__title">
                    {icon("gavel")}
                    " "
                    {move || i18n.t("legalOpinion")}
                </h2>
                <div class="verdict__actions no-print">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.copy_command()>
                        {icon("copy")}
                        " "
                        {move || i18n.t("copy")}
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.print_command()>
                        {icon("printer")}
                        " "
                        {move || i18n.t("print")}
                    </Button>
                </div>
            </section>

            <section class="card">
                <VerdictField vm=vm kind=SectionKind::Decision class="verdict__field--decision" />
                <div class="verdict__parties">
                    <VerdictField vm=vm kind=SectionKind::Winner class="verdict__field--winner" />
                    <VerdictField vm=vm kind=SectionKind::Loser class="verdict__field--loser" />
                </div>
                <VerdictField vm=vm kind=SectionKind::Summary />
            </section>

            <section class="card">
                <button
                    type="button"
                    class="verdict__toggle no-print"
                    aria-expanded=move || vm.reasoning_open.get().to_string()
                    on:click=move |_| vm.toggle_reasoning()
                >
                    {move || {
                        if vm.reasoning_open.get() {
                            view! { {icon("chevron-up")} " " {i18n.t("hideReasoning")} }.into_any()
                        } else {
                            view! { {icon("chevron-down")} " " {i18n.t("showReasoning")} }.into_any()
                        }
                    }}
                </button>
                <Show when=move || vm.reasoning_open.get()>
                    <VerdictField vm=vm kind=SectionKind::Reasoning />
                </Show>
            </section>

            <div class="verdict__footer no-print">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_new_case.run(())>
                    {icon("rotate-ccw")}
                    " "
                    {move || i18n.t("newCase")}
                </Button>
            </div>
        </div>
    }
}
