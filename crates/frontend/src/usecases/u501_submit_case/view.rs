use super::loading_overlay::LoadingOverlay;
use super::view_model::CaseFormVm;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::file_upload::FileUploadZone;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::a001_case::CaseField;
use contracts::domain::a002_verdict::VerdictResponse;
use leptos::prelude::*;
use thaw::*;

/// Case entry form: party details, documents and the submit action.
#[component]
pub fn CaseForm(on_verdict: Callback<VerdictResponse>) -> impl IntoView {
    let i18n = use_i18n();
    let vm = CaseFormVm::new();
    let busy = vm.is_busy();

    let on_cancel = Callback::new(move |_: ()| vm.cancel());

    view! {
        <div class="case-form">
            <section class="card">
                <h2 class="card__title">{move || i18n.t("caseDetails")}</h2>

                <div class="form__row">
                    <Input
                        id="plaintiff-name"
                        label=Signal::derive(move || i18n.t("plaintiffName"))
                        value=vm.text(CaseField::PlaintiffName)
                        on_input=vm.on_input(CaseField::PlaintiffName)
                        placeholder=Signal::derive(move || i18n.t("enterPlaintiffName"))
                        error=vm.error_for(CaseField::PlaintiffName)
                        disabled=busy
                    />
                    <Input
                        id="defendant-name"
                        label=Signal::derive(move || i18n.t("defendantName"))
                        value=vm.text(CaseField::DefendantName)
                        on_input=vm.on_input(CaseField::DefendantName)
                        placeholder=Signal::derive(move || i18n.t("enterDefendantName"))
                        error=vm.error_for(CaseField::DefendantName)
                        disabled=busy
                    />
                </div>

                <div class="form__row">
                    <Input
                        id="claim-amount"
                        input_type="number"
                        label=Signal::derive(move || i18n.t("claimAmount"))
                        value=vm.text(CaseField::ClaimAmount)
                        on_input=vm.on_input(CaseField::ClaimAmount)
                        placeholder=Signal::derive(move || i18n.t("enterAmount"))
                        error=vm.error_for(CaseField::ClaimAmount)
                        disabled=busy
                    />
                    <Select
                        id="claim-currency"
                        label=Signal::derive(move || i18n.t("claimCurrency"))
                        value=vm.text(CaseField::ClaimCurrency)
                        on_change=vm.on_input(CaseField::ClaimCurrency)
                        options=vm.currency_options()
                        placeholder=Signal::derive(move || i18n.t("selectCurrency"))
                        error=vm.error_for(CaseField::ClaimCurrency)
                        disabled=busy
                    />
                </div>

                <Textarea
                    id="claim-reason"
                    label=Signal::derive(move || i18n.t("claimReason"))
                    value=vm.text(CaseField::ClaimReason)
                    on_input=vm.on_input(CaseField::ClaimReason)
                    placeholder=Signal::derive(move || i18n.t("describeReason"))
                    error=vm.error_for(CaseField::ClaimReason)
                    disabled=busy
                    rows=5
                />
            </section>

            <section class="card">
                <h2 class="card__title">{move || i18n.t("documentEvidence")}</h2>

                <div class="form__row">
                    <div class="party-docs">
                        <h3 class="party-docs__title">{move || i18n.t("plaintiffDocuments")}</h3>
                        <FileUploadZone id="plaintiff-letter" slot=vm.plaintiff_letter disabled=busy />
                        <FileUploadZone id="plaintiff-evidence" slot=vm.plaintiff_evidence disabled=busy />
                    </div>
                    <div class="party-docs">
                        <h3 class="party-docs__title">{move || i18n.t("defendantDocuments")}</h3>
                        <FileUploadZone id="defendant-letter" slot=vm.defendant_letter disabled=busy />
                        <FileUploadZone id="defendant-evidence" slot=vm.defendant_evidence disabled=busy />
                    </div>
                </div>
            </section>

            <div class="case-form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit(on_verdict)
                    disabled=busy
                >
                    {icon("gavel")}
                    " "
                    {move || i18n.t("createOpinion")}
                </Button>
            </div>

            <LoadingOverlay phase=vm.phase() on_cancel=on_cancel />
        </div>
    }
}
