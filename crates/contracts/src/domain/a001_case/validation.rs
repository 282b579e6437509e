use std::collections::BTreeMap;

use super::aggregate::CaseField;

/// Sparse field → message-key map produced by validation.
///
/// Keys are localization keys; the view translates them for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: BTreeMap<CaseField, &'static str>,
}

impl FormErrors {
    pub fn insert(&mut self, field: CaseField, message_key: &'static str) {
        self.entries.insert(field, message_key);
    }

    pub fn get(&self, field: CaseField) -> Option<&'static str> {
        self.entries.get(&field).copied()
    }

    /// Drops the entry for an edited field. Returns true if one was present.
    pub fn clear(&mut self, field: CaseField) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = CaseField> + '_ {
        self.entries.keys().copied()
    }

    /// String-keyed copy, e.g. `{"claimAmount": "claimAmountInvalid"}`.
    pub fn to_map(&self) -> BTreeMap<&'static str, &'static str> {
        self.entries
            .iter()
            .map(|(field, key)| (field.as_str(), *key))
            .collect()
    }
}
