use contracts::shared::file_staging::StagedFile;
use uuid::Uuid;
use web_sys::FileList;

/// A file picked or dropped by the user, tagged with a stable id for keyed lists.
#[derive(Debug, Clone)]
pub struct BrowserFile {
    pub id: Uuid,
    pub file: web_sys::File,
}

impl BrowserFile {
    pub fn new(file: web_sys::File) -> Self {
        Self {
            id: Uuid::new_v4(),
            file,
        }
    }
}

impl PartialEq for BrowserFile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl StagedFile for BrowserFile {
    fn name(&self) -> String {
        self.file.name()
    }

    fn size(&self) -> u64 {
        self.file.size().max(0.0) as u64
    }

    fn mime_type(&self) -> String {
        self.file.type_()
    }
}

pub fn files_from_list(list: &FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile::new)
        .collect()
}
