//! Upload slot state: size/type filtering, single vs multiple holding, dedup.
//!
//! The slot is generic over the file handle so the browser can stage
//! `web_sys::File` wrappers while tests stage plain structs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard client-side limit per file (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Minimal view of a staged file.
pub trait StagedFile {
    fn name(&self) -> String;
    fn size(&self) -> u64;
    /// MIME type as reported by the host; may be empty.
    fn mime_type(&self) -> String;

    fn is_image(&self) -> bool {
        self.mime_type().starts_with("image/")
    }

    /// Lowercased extension including the dot, e.g. `".pdf"`.
    fn extension(&self) -> Option<String> {
        let name = self.name();
        name.rfind('.')
            .filter(|idx| *idx + 1 < name.len())
            .map(|idx| name[idx..].to_ascii_lowercase())
    }
}

const LETTER_TYPES: &[(&str, &str)] = &[
    ("application/pdf", ".pdf"),
    ("application/msword", ".doc"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ".docx",
    ),
];

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/png", ".png"),
    ("image/jpeg", ".jpg"),
    ("image/jpeg", ".jpeg"),
    ("image/gif", ".gif"),
    ("image/webp", ".webp"),
    ("image/bmp", ".bmp"),
];

const DOCUMENT_EXTRA_TYPES: &[(&str, &str)] = &[
    ("application/pdf", ".pdf"),
    ("text/plain", ".txt"),
];

/// What an upload slot is meant to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCategory {
    /// Party letter: PDF / DOC / DOCX.
    Letter,
    /// Evidence pictures only.
    Image,
    /// Evidence pictures plus PDF and plain text.
    EvidenceMixed,
}

impl FileCategory {
    fn allowed(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            FileCategory::Letter => LETTER_TYPES.to_vec(),
            FileCategory::Image => IMAGE_TYPES.to_vec(),
            FileCategory::EvidenceMixed => IMAGE_TYPES
                .iter()
                .chain(DOCUMENT_EXTRA_TYPES)
                .copied()
                .collect(),
        }
    }

    /// A file passes when either its MIME type or its extension is on the list.
    pub fn accepts<F: StagedFile>(&self, file: &F) -> bool {
        let mime = file.mime_type().to_ascii_lowercase();
        let ext = file.extension();
        self.allowed().iter().any(|(allowed_mime, allowed_ext)| {
            (!mime.is_empty() && mime == *allowed_mime) || ext.as_deref() == Some(*allowed_ext)
        })
    }

    /// Value for the `accept` attribute of a file input.
    pub fn accept_attr(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for (mime, ext) in self.allowed() {
            if !parts.contains(&mime) {
                parts.push(mime);
            }
            parts.push(ext);
        }
        parts.join(",")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotMode {
    Single,
    Multiple,
}

/// Declarative description of one upload area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConfig {
    /// Localization key of the label above the zone.
    pub label_key: &'static str,
    pub category: FileCategory,
    pub mode: SlotMode,
    /// Show an inline preview for image content (single slots only).
    pub preview: bool,
}

impl SlotConfig {
    pub fn letter(label_key: &'static str) -> Self {
        Self {
            label_key,
            category: FileCategory::Letter,
            mode: SlotMode::Single,
            preview: false,
        }
    }

    pub fn evidence(label_key: &'static str, mode: SlotMode) -> Self {
        Self {
            label_key,
            category: match mode {
                SlotMode::Single => FileCategory::Image,
                SlotMode::Multiple => FileCategory::EvidenceMixed,
            },
            mode,
            // previews are only produced for a single held image
            preview: mode == SlotMode::Single,
        }
    }
}

/// Why a candidate file was not staged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("file '{name}' is {size} bytes, over the upload limit")]
    TooLarge { name: String, size: u64 },
    #[error("file '{name}' has unsupported type '{mime}'")]
    UnsupportedType { name: String, mime: String },
}

impl FileRejection {
    pub fn file_name(&self) -> &str {
        match self {
            FileRejection::TooLarge { name, .. } | FileRejection::UnsupportedType { name, .. } => {
                name
            }
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            FileRejection::TooLarge { .. } => "fileTooLarge",
            FileRejection::UnsupportedType { .. } => "fileTypeNotSupported",
        }
    }
}

/// Files currently held by a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotFiles<F> {
    Single(Option<F>),
    Multiple(Vec<F>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagingSlot<F> {
    config: SlotConfig,
    files: SlotFiles<F>,
}

impl<F: StagedFile> StagingSlot<F> {
    pub fn new(config: SlotConfig) -> Self {
        let files = match config.mode {
            SlotMode::Single => SlotFiles::Single(None),
            SlotMode::Multiple => SlotFiles::Multiple(Vec::new()),
        };
        Self { config, files }
    }

    pub fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Stages candidates and reports the ones that were refused.
    ///
    /// Oversized and off-list files are dropped first. A single slot then keeps
    /// the first survivor in place of whatever it held; a multiple slot appends
    /// survivors whose (name, size) pair it does not hold yet.
    pub fn accept(&mut self, candidates: Vec<F>) -> Vec<FileRejection> {
        let mut rejected = Vec::new();
        let mut survivors = Vec::new();

        for file in candidates {
            if file.size() > MAX_FILE_SIZE_BYTES {
                log::warn!("rejecting '{}': {} bytes", file.name(), file.size());
                rejected.push(FileRejection::TooLarge {
                    name: file.name(),
                    size: file.size(),
                });
            } else if !self.config.category.accepts(&file) {
                log::warn!("rejecting '{}': type '{}'", file.name(), file.mime_type());
                rejected.push(FileRejection::UnsupportedType {
                    name: file.name(),
                    mime: file.mime_type(),
                });
            } else {
                survivors.push(file);
            }
        }

        match &mut self.files {
            SlotFiles::Single(held) => {
                if let Some(first) = survivors.into_iter().next() {
                    *held = Some(first);
                }
            }
            SlotFiles::Multiple(held) => {
                for file in survivors {
                    let duplicate = held
                        .iter()
                        .any(|h| h.name() == file.name() && h.size() == file.size());
                    if !duplicate {
                        held.push(file);
                    }
                }
            }
        }

        rejected
    }

    /// Single slots ignore `index` and clear; multiple slots remove by position.
    pub fn remove(&mut self, index: usize) {
        match &mut self.files {
            SlotFiles::Single(held) => *held = None,
            SlotFiles::Multiple(held) => {
                if index < held.len() {
                    held.remove(index);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        match &mut self.files {
            SlotFiles::Single(held) => *held = None,
            SlotFiles::Multiple(held) => held.clear(),
        }
    }

    pub fn files(&self) -> Vec<&F> {
        match &self.files {
            SlotFiles::Single(held) => held.iter().collect(),
            SlotFiles::Multiple(held) => held.iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files().is_empty()
    }

    /// The file to preview, if this slot shows previews and holds an image.
    pub fn preview_candidate(&self) -> Option<&F> {
        match &self.files {
            SlotFiles::Single(Some(file)) if self.config.preview && file.is_image() => Some(file),
            _ => None,
        }
    }
}

impl<F: Clone> StagingSlot<F> {
    pub fn cloned_files(&self) -> Vec<F> {
        match &self.files {
            SlotFiles::Single(held) => held.iter().cloned().collect(),
            SlotFiles::Multiple(held) => held.clone(),
        }
    }
}

/// "12.3 KB" style size label.
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct FakeFile {
        pub name: &'static str,
        pub size: u64,
        pub mime: &'static str,
    }

    impl StagedFile for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }
        fn size(&self) -> u64 {
            self.size
        }
        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    pub(crate) fn file(name: &'static str, size: u64, mime: &'static str) -> FakeFile {
        FakeFile { name, size, mime }
    }

    fn names(slot: &StagingSlot<FakeFile>) -> Vec<&'static str> {
        slot.files().iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_oversized_file_rejected_and_held_set_unchanged() {
        let mut slot = StagingSlot::new(SlotConfig::letter("uploadLetter"));
        slot.accept(vec![file("a.pdf", 100, "application/pdf")]);

        let rejected = slot.accept(vec![file("big.pdf", MAX_FILE_SIZE_BYTES + 1, "application/pdf")]);

        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].message_key(), "fileTooLarge");
        assert_eq!(names(&slot), vec!["a.pdf"]);
    }

    #[test]
    fn test_multiple_slot_oversized_dropped_valid_appended() {
        let mut slot = StagingSlot::new(SlotConfig::evidence("uploadEvidence", SlotMode::Multiple));
        slot.accept(vec![file("held.png", 10, "image/png")]);

        let rejected = slot.accept(vec![
            file("huge.png", MAX_FILE_SIZE_BYTES + 1, "image/png"),
            file("ok.jpg", 20, "image/jpeg"),
        ]);

        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].file_name(), "huge.png");
        assert_eq!(rejected[0].message_key(), "fileTooLarge");
        assert_eq!(names(&slot), vec!["held.png", "ok.jpg"]);
    }

    #[test]
    fn test_exact_limit_is_accepted() {
        let mut slot = StagingSlot::new(SlotConfig::letter("uploadLetter"));
        let rejected = slot.accept(vec![file("edge.pdf", MAX_FILE_SIZE_BYTES, "application/pdf")]);
        assert!(rejected.is_empty());
        assert_eq!(names(&slot), vec!["edge.pdf"]);
    }

    #[test]
    fn test_single_slot_keeps_first_and_replaces() {
        let mut slot = StagingSlot::new(SlotConfig::letter("uploadLetter"));
        slot.accept(vec![file("old.pdf", 10, "application/pdf")]);
        slot.accept(vec![
            file("new.docx", 20, ""),
            file("other.doc", 30, "application/msword"),
        ]);
        assert_eq!(names(&slot), vec!["new.docx"]);
    }

    #[test]
    fn test_single_slot_all_rejected_keeps_previous() {
        let mut slot = StagingSlot::new(SlotConfig::letter("uploadLetter"));
        slot.accept(vec![file("keep.pdf", 10, "application/pdf")]);
        let rejected = slot.accept(vec![file("photo.png", 10, "image/png")]);
        assert_eq!(rejected[0].message_key(), "fileTypeNotSupported");
        assert_eq!(names(&slot), vec!["keep.pdf"]);
    }

    #[test]
    fn test_multiple_slot_dedup_by_name_and_size() {
        let mut slot = StagingSlot::new(SlotConfig::evidence("uploadEvidence", SlotMode::Multiple));
        slot.accept(vec![file("a.png", 10, "image/png"), file("b.png", 20, "image/png")]);
        let before = slot.clone();

        slot.accept(vec![file("a.png", 10, "image/png")]);
        assert_eq!(slot, before);

        // same name, different size is a different file
        slot.accept(vec![file("a.png", 11, "image/png")]);
        assert_eq!(names(&slot), vec!["a.png", "b.png", "a.png"]);
    }

    #[test]
    fn test_multiple_slot_dedup_within_one_drop() {
        let mut slot = StagingSlot::new(SlotConfig::evidence("uploadEvidence", SlotMode::Multiple));
        slot.accept(vec![
            file("x.jpg", 5, "image/jpeg"),
            file("notes.txt", 7, "text/plain"),
            file("x.jpg", 5, "image/jpeg"),
        ]);
        assert_eq!(names(&slot), vec!["x.jpg", "notes.txt"]);
    }

    #[test]
    fn test_multiple_slot_remove_by_index() {
        let mut slot = StagingSlot::new(SlotConfig::evidence("uploadEvidence", SlotMode::Multiple));
        slot.accept(vec![
            file("1.png", 1, "image/png"),
            file("2.png", 2, "image/png"),
            file("3.png", 3, "image/png"),
        ]);
        slot.remove(1);
        assert_eq!(names(&slot), vec!["1.png", "3.png"]);
        slot.remove(10);
        assert_eq!(names(&slot), vec!["1.png", "3.png"]);
    }

    #[test]
    fn test_single_slot_remove_clears() {
        let mut slot = StagingSlot::new(SlotConfig::evidence("uploadEvidence", SlotMode::Single));
        slot.accept(vec![file("p.webp", 1, "image/webp")]);
        slot.remove(0);
        assert!(slot.is_empty());
    }

    #[test]
    fn test_image_slot_refuses_pdf_but_mixed_accepts() {
        let pdf = file("scan.pdf", 1, "application/pdf");
        assert!(!FileCategory::Image.accepts(&pdf));
        assert!(FileCategory::EvidenceMixed.accepts(&pdf));
        assert!(FileCategory::EvidenceMixed.accepts(&file("n.TXT", 1, "")));
        assert!(FileCategory::Image.accepts(&file("pic.BMP", 1, "")));
        assert!(!FileCategory::Letter.accepts(&file("noext", 1, "")));
    }

    #[test]
    fn test_preview_only_for_single_image_slots() {
        let mut single = StagingSlot::new(SlotConfig::evidence("uploadEvidence", SlotMode::Single));
        single.accept(vec![file("p.png", 1, "image/png")]);
        assert_eq!(single.preview_candidate().map(|f| f.name), Some("p.png"));

        let multi_config = SlotConfig::evidence("uploadEvidence", SlotMode::Multiple);
        assert!(!multi_config.preview);
        let mut multi = StagingSlot::new(multi_config);
        multi.accept(vec![file("p.png", 1, "image/png")]);
        assert!(multi.preview_candidate().is_none());

        let mut letter = StagingSlot::new(SlotConfig::letter("uploadLetter"));
        letter.accept(vec![file("l.pdf", 1, "application/pdf")]);
        assert!(letter.preview_candidate().is_none());
    }

    #[test]
    fn test_accept_attr_lists_mime_and_extensions() {
        assert_eq!(
            FileCategory::Letter.accept_attr(),
            "application/pdf,.pdf,application/msword,.doc,application/vnd.openxmlformats-officedocument.wordprocessingml.document,.docx"
        );
        assert!(FileCategory::Image.accept_attr().contains("image/jpeg,.jpg,.jpeg"));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
    }
}
