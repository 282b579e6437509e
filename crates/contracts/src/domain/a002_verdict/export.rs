//! Plain-text rendering of a verdict for the clipboard.

use super::aggregate::{SectionKind, VerdictResponse};
use crate::shared::i18n::{translate, Language};

const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "--------------------------------------------------";

/// Serializes the verdict into one block with section headings in `language`.
///
/// Layout:
/// ```text
/// Legal Opinion
/// =====
///
/// Decision:
/// <decision>
///
/// Winner: <winner>
/// Loser: <loser>
///
/// -----
/// Summary:
/// <summary>
///
/// -----
/// Reasoning:
/// <reasoning>
/// ```
pub fn clipboard_text(verdict: &VerdictResponse, language: Language) -> String {
    let heading = |kind: SectionKind| translate(language, kind.label_key());

    let mut out = String::new();
    out.push_str(translate(language, "legalOpinion"));
    out.push('\n');
    out.push_str(HEAVY_RULE);
    out.push_str("\n\n");

    out.push_str(&format!("{}:\n{}\n\n", heading(SectionKind::Decision), verdict.decision));
    out.push_str(&format!("{}: {}\n", heading(SectionKind::Winner), verdict.winner));
    out.push_str(&format!("{}: {}\n\n", heading(SectionKind::Loser), verdict.loser));

    out.push_str(LIGHT_RULE);
    out.push('\n');
    out.push_str(&format!("{}:\n{}\n\n", heading(SectionKind::Summary), verdict.summary));

    out.push_str(LIGHT_RULE);
    out.push('\n');
    out.push_str(&format!("{}:\n{}\n", heading(SectionKind::Reasoning), verdict.reasoning));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reads the sections back out of `clipboard_text` output.
    fn parse(text: &str, language: Language) -> Option<VerdictResponse> {
        let h = |kind: SectionKind| translate(language, kind.label_key());

        let decision_marker = format!("{}:\n", h(SectionKind::Decision));
        let winner_marker = format!("\n\n{}: ", h(SectionKind::Winner));
        let loser_marker = format!("\n{}: ", h(SectionKind::Loser));
        let summary_marker = format!("\n\n{}\n{}:\n", LIGHT_RULE, h(SectionKind::Summary));
        let reasoning_marker = format!("\n\n{}\n{}:\n", LIGHT_RULE, h(SectionKind::Reasoning));

        let rest = &text[text.find(&decision_marker)? + decision_marker.len()..];
        let (decision, rest) = rest.split_once(&winner_marker)?;
        let (winner, rest) = rest.split_once(&loser_marker)?;
        let (loser, rest) = rest.split_once(&summary_marker)?;
        let (summary, rest) = rest.split_once(&reasoning_marker)?;
        let reasoning = rest.strip_suffix('\n')?;

        Some(VerdictResponse {
            decision: decision.to_string(),
            winner: winner.to_string(),
            loser: loser.to_string(),
            reasoning: reasoning.to_string(),
            summary: summary.to_string(),
        })
    }

    fn sample() -> VerdictResponse {
        VerdictResponse {
            decision: "The defendant shall pay 100 USD.\nCosts are split.".into(),
            winner: "Alice".into(),
            loser: "Bob".into(),
            reasoning: "1. A contract existed.\n2. It was breached.\n\n3. Damages proven.".into(),
            summary: "Dispute over an unpaid invoice.".into(),
        }
    }

    #[test]
    fn test_copy_text_round_trips_content() {
        for language in Language::all() {
            let verdict = sample();
            let text = clipboard_text(&verdict, language);
            assert_eq!(parse(&text, language), Some(verdict));
        }
    }

    #[test]
    fn test_copy_text_round_trips_hebrew_content() {
        let verdict = VerdictResponse {
            decision: "התביעה מתקבלת".into(),
            winner: "דני".into(),
            loser: "רונית".into(),
            reasoning: "הוצגה קבלה".into(),
            summary: "סכסוך על תשלום".into(),
        };
        let text = clipboard_text(&verdict, Language::He);
        assert!(text.starts_with("חוות דעת משפטית\n"));
        assert_eq!(parse(&text, Language::He), Some(verdict));
    }

    #[test]
    fn test_copy_text_layout() {
        let text = clipboard_text(&sample(), Language::En);
        assert!(text.starts_with("Legal Opinion\n=================================================="));
        assert!(text.contains("\nWinner: Alice\nLoser: Bob\n"));
        assert_eq!(text.matches(LIGHT_RULE).count(), 2);
    }
}
