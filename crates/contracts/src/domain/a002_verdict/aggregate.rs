use serde::{Deserialize, Serialize};

use crate::shared::i18n::TextDirection;

/// Structured legal opinion returned by the inference service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictResponse {
    pub decision: String,
    pub winner: String,
    pub loser: String,
    pub reasoning: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Decision,
    Winner,
    Loser,
    Summary,
    Reasoning,
}

impl SectionKind {
    /// Localization key of the section heading.
    pub fn label_key(&self) -> &'static str {
        match self {
            SectionKind::Decision => "decision",
            SectionKind::Winner => "winner",
            SectionKind::Loser => "loser",
            SectionKind::Summary => "summary",
            SectionKind::Reasoning => "reasoning",
        }
    }
}

/// One verdict field prepared for display, with its own text direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictSection<'a> {
    pub kind: SectionKind,
    pub text: &'a str,
    pub direction: TextDirection,
}

impl VerdictResponse {
    pub fn field(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Decision => &self.decision,
            SectionKind::Winner => &self.winner,
            SectionKind::Loser => &self.loser,
            SectionKind::Summary => &self.summary,
            SectionKind::Reasoning => &self.reasoning,
        }
    }

    pub fn section(&self, kind: SectionKind) -> VerdictSection<'_> {
        let text = self.field(kind);
        VerdictSection {
            kind,
            text,
            direction: TextDirection::of_text(text),
        }
    }

    /// All sections in display order.
    pub fn sections(&self) -> Vec<VerdictSection<'_>> {
        [
            SectionKind::Decision,
            SectionKind::Winner,
            SectionKind::Loser,
            SectionKind::Summary,
            SectionKind::Reasoning,
        ]
        .into_iter()
        .map(|kind| self.section(kind))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_per_field() {
        let verdict = VerdictResponse {
            decision: "התובע זכאי לפיצוי".into(),
            winner: "Alice".into(),
            loser: "בוב".into(),
            reasoning: "Receipt shows payment".into(),
            summary: "סיכום".into(),
        };
        let directions: Vec<_> = verdict.sections().iter().map(|s| s.direction).collect();
        assert_eq!(
            directions,
            vec![
                TextDirection::Rtl,
                TextDirection::Ltr,
                TextDirection::Rtl,
                TextDirection::Rtl,
                TextDirection::Ltr,
            ]
        );
        assert_eq!(verdict.section(SectionKind::Winner).text, "Alice");
    }
}
