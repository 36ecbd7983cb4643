//! Most-recent-first list of saved swatches

use swatch_model::{InternalSwatch, Swatch, to_external};

/// Bounded, deduplicated history of saved swatches
#[derive(Debug, Clone)]
pub struct SavedSwatches {
    entries: Vec<InternalSwatch>,
    limit: usize,
}

impl SavedSwatches {
    /// Wrap loaded entries, trimming them to `limit` (at least one)
    pub fn new(mut entries: Vec<InternalSwatch>, limit: usize) -> Self {
        let limit = limit.max(1);
        entries.truncate(limit);
        Self { entries, limit }
    }

    /// Maximum number of entries kept
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Put `swatch` first, dropping any older entry with the same mode and
    /// hex colors and evicting the oldest entries past the limit
    pub fn push(&mut self, swatch: InternalSwatch) {
        self.entries.retain(|saved| !saved.same_as(&swatch));
        self.entries.insert(0, swatch);
        self.entries.truncate(self.limit);
    }

    /// Entries, newest first
    pub fn as_slice(&self) -> &[InternalSwatch] {
        &self.entries
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&InternalSwatch> {
        self.entries.get(index)
    }

    /// Most recently saved entry
    pub fn first(&self) -> Option<&InternalSwatch> {
        self.entries.first()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been saved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &InternalSwatch> {
        self.entries.iter()
    }

    /// Wire form of every entry
    pub fn to_external(&self) -> Vec<Swatch> {
        self.entries.iter().map(to_external).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swatch(raw: &str) -> InternalSwatch {
        Swatch::solid(raw).to_internal().unwrap()
    }

    #[test]
    fn test_push_prepends_and_dedupes() {
        let mut saved = SavedSwatches::new(vec![], 12);
        saved.push(swatch("#111111"));
        saved.push(swatch("#222222"));
        saved.push(swatch("#111111"));

        let hexes: Vec<_> = saved.to_external();
        assert_eq!(
            hexes,
            vec![Swatch::solid("#111111"), Swatch::solid("#222222")]
        );
    }

    #[test]
    fn test_resaving_first_entry_keeps_count() {
        let mut saved = SavedSwatches::new(
            vec![swatch("#111111"), swatch("#222222")],
            12,
        );
        saved.push(swatch("#111111"));
        assert_eq!(saved.len(), 2);
        assert_eq!(saved.first().unwrap().to_external(), Swatch::solid("#111111"));
    }

    #[test]
    fn test_dedupe_respects_mode() {
        let mut saved = SavedSwatches::new(vec![], 12);
        saved.push(swatch("#3366cc"));
        saved.push(
            Swatch::gradient("#3366cc", "#cc3366").to_internal().unwrap(),
        );
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut saved = SavedSwatches::new(vec![], 3);
        for hex in ["#000001", "#000002", "#000003", "#000004", "#000005"] {
            saved.push(swatch(hex));
            assert!(saved.len() <= 3);
        }
        assert_eq!(
            saved.to_external(),
            vec![
                Swatch::solid("#000005"),
                Swatch::solid("#000004"),
                Swatch::solid("#000003"),
            ]
        );
    }

    #[test]
    fn test_loaded_entries_are_trimmed_and_limit_is_at_least_one() {
        let saved = SavedSwatches::new(
            vec![swatch("#000001"), swatch("#000002")],
            0,
        );
        assert_eq!(saved.limit(), 1);
        assert_eq!(saved.len(), 1);
    }
}
