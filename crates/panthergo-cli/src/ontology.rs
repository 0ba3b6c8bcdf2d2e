//! Annotation data sets accepted by the enrichment endpoint
//!
//! The table is a plain value handed to whoever needs it (parameter
//! validation, output naming) rather than looked up from global state.

/// One annotation data set: the identifier sent to PANTHER and the short
/// name used in output file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OntologyEntry {
    pub id: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
}

/// Frozen table of annotation data sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OntologyTable {
    entries: &'static [OntologyEntry],
}

impl OntologyTable {
    /// The three Gene Ontology root terms.
    pub const GO_ROOTS: OntologyTable = OntologyTable {
        entries: &[
            OntologyEntry {
                id: "GO:0003674",
                short_name: "GO-MF",
                description: "molecular function",
            },
            OntologyEntry {
                id: "GO:0008150",
                short_name: "GO-BP",
                description: "biological process",
            },
            OntologyEntry {
                id: "GO:0005575",
                short_name: "GO-CC",
                description: "cellular component",
            },
        ],
    };

    /// Build a table from a static entry list
    pub const fn new(entries: &'static [OntologyEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [OntologyEntry] {
        self.entries
    }

    /// Look up an entry by its identifier
    pub fn get(&self, id: &str) -> Option<&'static OntologyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Short name for `id`, e.g. `GO-BP` for `GO:0008150`
    pub fn short_name(&self, id: &str) -> Option<&'static str> {
        self.get(id).map(|e| e.short_name)
    }

    /// Identifiers in table order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.id)
    }
}

impl Default for OntologyTable {
    fn default() -> Self {
        Self::GO_ROOTS
    }
}
