//! Static two-locale string tables and script-direction helpers.
//!
//! The tables are read-only process-wide data; the active language lives in
//! the UI layer and is passed in explicitly.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    /// Label shown on the language switcher button.
    pub fn switcher_label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::He => "עב",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::He)
    }

    /// Value for the document `dir` attribute.
    pub fn dir(&self) -> &'static str {
        TextDirection::of_language(*self).as_str()
    }

    pub fn all() -> [Language; 2] {
        [Language::En, Language::He]
    }
}

/// Writing direction of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn of_text(text: &str) -> Self {
        if is_rtl_text(text) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn of_language(language: Language) -> Self {
        if language.is_rtl() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    /// CSS `text-align` value matching the direction.
    pub fn text_align(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "left",
            TextDirection::Rtl => "right",
        }
    }
}

/// True when `text` contains at least one character from the Hebrew block (U+0590–U+05FF).
pub fn is_rtl_text(text: &str) -> bool {
    text.chars().any(|c| ('\u{0590}'..='\u{05FF}').contains(&c))
}

/// Looks up `key` in the dictionary of `language`, returning the key itself when missing.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    let table = match language {
        Language::En => &*EN,
        Language::He => &*HE,
    };
    table.get(key).copied().unwrap_or(key)
}

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("title", "AI Judicial Assistant"),
        ("caseDetails", "Case Details"),
        ("plaintiffName", "Plaintiff Name"),
        ("defendantName", "Defendant Name"),
        ("claimAmount", "Claim Amount"),
        ("claimCurrency", "Claim Currency"),
        ("claimReason", "Claim Reason"),
        ("documentEvidence", "Document Evidence"),
        ("plaintiffDocuments", "Plaintiff Documents"),
        ("defendantDocuments", "Defendant Documents"),
        ("uploadLetter", "Upload Letter (PDF/DOC)"),
        ("uploadEvidence", "Upload Evidence (Optional)"),
        ("createOpinion", "Create Legal Opinion"),
        ("selectCurrency", "Select currency"),
        ("enterPlaintiffName", "Enter plaintiff name"),
        ("enterDefendantName", "Enter defendant name"),
        ("enterAmount", "Enter amount"),
        ("describeReason", "Describe the reason for the claim..."),
        // upload zone
        ("dragDrop", "Drag & drop or click to upload"),
        ("dropHere", "Drop the files here"),
        ("removeFile", "Remove file"),
        ("fileTooLarge", "File is too large (max 10MB)"),
        ("fileTypeNotSupported", "File type is not supported"),
        // validation
        ("plaintiffNameRequired", "Plaintiff name is required"),
        ("defendantNameRequired", "Defendant name is required"),
        ("claimAmountRequired", "Claim amount is required"),
        ("claimAmountInvalid", "Claim amount must be a positive number"),
        ("claimCurrencyRequired", "Please select a currency"),
        ("claimReasonRequired", "Claim reason is required"),
        // progress
        ("loading", "Processing..."),
        ("uploading", "Uploading documents..."),
        ("analyzing", "Analyzing case..."),
        ("cancel", "Cancel"),
        // errors
        ("errorTitle", "Request failed"),
        ("genericError", "An error occurred while processing your request. Please try again."),
        ("networkError", "Could not reach the server. Check your connection and try again."),
        // result
        ("legalOpinion", "Legal Opinion"),
        ("decision", "Decision"),
        ("winner", "Winner"),
        ("loser", "Loser"),
        ("summary", "Summary"),
        ("reasoning", "Reasoning"),
        ("showReasoning", "Show full reasoning"),
        ("hideReasoning", "Hide reasoning"),
        ("copy", "Copy"),
        ("copied", "Copied to clipboard"),
        ("print", "Print"),
        ("newCase", "Start New Case"),
    ])
});

static HE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("title", "עוזר שיפוטי מבוסס AI"),
        ("caseDetails", "פרטי התיק"),
        ("plaintiffName", "שם התובע"),
        ("defendantName", "שם הנתבע"),
        ("claimAmount", "סכום התביעה"),
        ("claimCurrency", "מטבע התביעה"),
        ("claimReason", "סיבת התביעה"),
        ("documentEvidence", "ראיות מסמכים"),
        ("plaintiffDocuments", "מסמכי התובע"),
        ("defendantDocuments", "מסמכי הנתבע"),
        ("uploadLetter", "העלה מכתב (PDF/DOC)"),
        ("uploadEvidence", "העלה ראיות (אופציונלי)"),
        ("createOpinion", "צור חוות דעת"),
        ("selectCurrency", "בחר מטבע"),
        ("enterPlaintiffName", "הזן שם תובע"),
        ("enterDefendantName", "הזן שם נתבע"),
        ("enterAmount", "הזן סכום"),
        ("describeReason", "תאר את סיבת התביעה..."),
        ("dragDrop", "גרור ושחרר או לחץ להעלאה"),
        ("dropHere", "שחרר את הקבצים כאן"),
        ("removeFile", "הסר קובץ"),
        ("fileTooLarge", "הקובץ גדול מדי (מקסימום 10MB)"),
        ("fileTypeNotSupported", "סוג הקובץ אינו נתמך"),
        ("plaintiffNameRequired", "שם התובע הוא שדה חובה"),
        ("defendantNameRequired", "שם הנתבע הוא שדה חובה"),
        ("claimAmountRequired", "סכום התביעה הוא שדה חובה"),
        ("claimAmountInvalid", "סכום התביעה חייב להיות מספר חיובי"),
        ("claimCurrencyRequired", "יש לבחור מטבע"),
        ("claimReasonRequired", "סיבת התביעה היא שדה חובה"),
        ("loading", "מעבד..."),
        ("uploading", "מעלה מסמכים..."),
        ("analyzing", "מנתח את התיק..."),
        ("cancel", "ביטול"),
        ("errorTitle", "הבקשה נכשלה"),
        ("genericError", "אירעה שגיאה בעיבוד הבקשה. אנא נסה שוב."),
        ("networkError", "לא ניתן להתחבר לשרת. בדוק את החיבור ונסה שוב."),
        ("legalOpinion", "חוות דעת משפטית"),
        ("decision", "החלטה"),
        ("winner", "הצד הזוכה"),
        ("loser", "הצד המפסיד"),
        ("summary", "תקציר"),
        ("reasoning", "נימוקים"),
        ("showReasoning", "הצג נימוקים מלאים"),
        ("hideReasoning", "הסתר נימוקים"),
        ("copy", "העתק"),
        ("copied", "הועתק ללוח"),
        ("print", "הדפס"),
        ("newCase", "התחל תיק חדש"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_keys() {
        assert_eq!(translate(Language::En, "newCase"), "Start New Case");
        assert_eq!(translate(Language::He, "newCase"), "התחל תיק חדש");
    }

    #[test]
    fn test_translate_missing_key_returns_key() {
        assert_eq!(translate(Language::En, "noSuchKey"), "noSuchKey");
        assert_eq!(translate(Language::He, ""), "");
    }

    #[test]
    fn test_dictionaries_have_same_keys() {
        let mut en: Vec<_> = EN.keys().copied().collect();
        let mut he: Vec<_> = HE.keys().copied().collect();
        en.sort_unstable();
        he.sort_unstable();
        assert_eq!(en, he);
    }

    #[test]
    fn test_is_rtl_text() {
        assert!(is_rtl_text("שלום"));
        assert!(is_rtl_text("Winner: דני"));
        assert!(is_rtl_text("\u{0590}"));
        assert!(is_rtl_text("\u{05FF}"));
        assert!(!is_rtl_text("Alice"));
        assert!(!is_rtl_text(""));
        // Arabic is outside the Hebrew block
        assert!(!is_rtl_text("مرحبا"));
        assert!(!is_rtl_text("\u{0600}"));
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::He.code(), "he");
        assert_eq!(Language::default().code(), "en");
        assert_eq!(Language::He.dir(), "rtl");
        assert_eq!(Language::default().dir(), "ltr");
    }

    #[test]
    fn test_loading_title_differs_from_phase_lines() {
        for language in Language::all() {
            let title = translate(language, "loading");
            assert_ne!(title, translate(language, "uploading"));
            assert_ne!(title, translate(language, "analyzing"));
        }
        assert_eq!(translate(Language::En, "loading"), "Processing...");
    }

    #[test]
    fn test_direction_of_text_ignores_ui_language() {
        assert_eq!(TextDirection::of_text("Bob"), TextDirection::Ltr);
        assert_eq!(TextDirection::of_text("בוב"), TextDirection::Rtl);
        assert_eq!(TextDirection::Rtl.text_align(), "right");
    }
}
