//! Upload slots of the case form.

use crate::shared::file_staging::{SlotConfig, SlotMode};

/// Each party attaches one evidence image, previewed inline.
pub const EVIDENCE_MODE: SlotMode = SlotMode::Single;

pub fn letter_slot() -> SlotConfig {
    SlotConfig::letter("uploadLetter")
}

pub fn evidence_slot() -> SlotConfig {
    SlotConfig::evidence("uploadEvidence", EVIDENCE_MODE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::file_staging::tests::file;
    use crate::shared::file_staging::{FileCategory, StagingSlot};

    #[test]
    fn test_evidence_slot_previews_images() {
        let config = evidence_slot();
        assert!(config.preview);
        assert_eq!(config.category, FileCategory::Image);

        let mut slot = StagingSlot::new(config);
        slot.accept(vec![file("photo.png", 1_024, "image/png")]);
        assert_eq!(slot.preview_candidate().map(|f| f.name), Some("photo.png"));

        // a replacement becomes the new candidate
        slot.accept(vec![file("second.jpg", 2_048, "image/jpeg")]);
        assert_eq!(slot.preview_candidate().map(|f| f.name), Some("second.jpg"));

        slot.remove(0);
        assert!(slot.preview_candidate().is_none());
    }

    #[test]
    fn test_letter_slot_never_previews() {
        let config = letter_slot();
        assert!(!config.preview);

        let mut slot = StagingSlot::new(config);
        slot.accept(vec![file("letter.pdf", 1_024, "application/pdf")]);
        assert_eq!(slot.files().len(), 1);
        assert!(slot.preview_candidate().is_none());
    }
}
