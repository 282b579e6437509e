use serde::{Deserialize, Serialize};

use super::validation::FormErrors;

// ============================================================================
// Currency
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "ILS")]
    Ils,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ils => "ILS",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Ils => "₪",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    /// Option label for the currency picker, e.g. "₪ ILS".
    pub fn label(&self) -> String {
        format!("{} {}", self.symbol(), self.code())
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }

    pub fn all() -> [Currency; 4] {
        [Currency::Ils, Currency::Usd, Currency::Eur, Currency::Gbp]
    }
}

// ============================================================================
// Form fields
// ============================================================================

/// Editable case fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaseField {
    PlaintiffName,
    DefendantName,
    ClaimAmount,
    ClaimCurrency,
    ClaimReason,
}

impl CaseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseField::PlaintiffName => "plaintiffName",
            CaseField::DefendantName => "defendantName",
            CaseField::ClaimAmount => "claimAmount",
            CaseField::ClaimCurrency => "claimCurrency",
            CaseField::ClaimReason => "claimReason",
        }
    }
}

// ============================================================================
// Draft (raw form state)
// ============================================================================

/// Keystroke-level form state. Amount stays text until validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseDraft {
    pub plaintiff_name: String,
    pub defendant_name: String,
    pub claim_amount: String,
    pub claim_currency: Option<Currency>,
    pub claim_reason: String,
}

impl CaseDraft {
    /// Writes a text field. Currency is set through `claim_currency` directly.
    pub fn set_text(&mut self, field: CaseField, value: String) {
        match field {
            CaseField::PlaintiffName => self.plaintiff_name = value,
            CaseField::DefendantName => self.defendant_name = value,
            CaseField::ClaimAmount => self.claim_amount = value,
            CaseField::ClaimReason => self.claim_reason = value,
            CaseField::ClaimCurrency => self.claim_currency = Currency::from_code(&value),
        }
    }

    /// Checks every field and returns the typed input or the full error map.
    pub fn validate(&self) -> Result<CaseInput, FormErrors> {
        let mut errors = FormErrors::default();

        if self.plaintiff_name.trim().is_empty() {
            errors.insert(CaseField::PlaintiffName, "plaintiffNameRequired");
        }
        if self.defendant_name.trim().is_empty() {
            errors.insert(CaseField::DefendantName, "defendantNameRequired");
        }

        let amount = self.claim_amount.trim();
        let parsed_amount = if amount.is_empty() {
            errors.insert(CaseField::ClaimAmount, "claimAmountRequired");
            None
        } else {
            match amount.parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => Some(value),
                _ => {
                    errors.insert(CaseField::ClaimAmount, "claimAmountInvalid");
                    None
                }
            }
        };

        if self.claim_currency.is_none() {
            errors.insert(CaseField::ClaimCurrency, "claimCurrencyRequired");
        }
        if self.claim_reason.trim().is_empty() {
            errors.insert(CaseField::ClaimReason, "claimReasonRequired");
        }

        match (parsed_amount, self.claim_currency) {
            (Some(claim_amount), Some(claim_currency)) if errors.is_empty() => Ok(CaseInput {
                plaintiff_name: self.plaintiff_name.trim().to_string(),
                defendant_name: self.defendant_name.trim().to_string(),
                claim_amount,
                claim_currency,
                claim_reason: self.claim_reason.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

// ============================================================================
// Validated input
// ============================================================================

/// Case details that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseInput {
    pub plaintiff_name: String,
    pub defendant_name: String,
    pub claim_amount: f64,
    pub claim_currency: Currency,
    pub claim_reason: String,
}
