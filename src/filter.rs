use schema::CatalogEntry;

/// The type filter applied alongside the name query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSelector {
    /// The "all" sentinel: no type filtering.
    All,
    /// Only entries carrying this exact type tag.
    Tag(String),
}

impl TypeSelector {
    /// Parse the wire form of the selector, where "all" is the sentinel.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("all") {
            TypeSelector::All
        } else {
            TypeSelector::Tag(raw.trim().to_string())
        }
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            TypeSelector::All => true,
            TypeSelector::Tag(tag) => entry.type_tags().any(|t| t == tag.as_str()),
        }
    }
}

/// The visible subset of the catalog for a name query and type selector.
///
/// An entry is kept when its name contains the query case-insensitively and
/// the selector matches one of its type tags. Catalog order is preserved;
/// this is a pure function of its inputs.
pub fn filter_catalog<'a>(
    catalog: &'a [CatalogEntry],
    query: &str,
    selector: &TypeSelector,
) -> Vec<&'a CatalogEntry> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&query))
        .filter(|entry| selector.matches(entry))
        .collect()
}

/// Every type tag observed across the catalog, duplicates removed, in
/// discovery order. This is the set of selectable filter options.
pub fn observed_types(catalog: &[CatalogEntry]) -> Vec<String> {
    let mut types = Vec::new();
    for entry in catalog {
        for tag in entry.type_tags() {
            if !types.iter().any(|known: &String| known.as_str() == tag) {
                types.push(tag.to_string());
            }
        }
    }
    types
}
