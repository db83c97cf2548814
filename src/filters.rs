//! `itemFilter` sets for the two search operations.

/// A named, possibly multi-valued search constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFilter {
    /// Filter name, e.g. `ListingType`.
    pub name: &'static str,
    /// Accepted values, in the order they are sent.
    pub values: Vec<&'static str>,
}

impl ItemFilter {
    pub fn new(name: &'static str, values: &[&'static str]) -> Self {
        Self {
            name,
            values: values.to_vec(),
        }
    }
}

/// Ordered filters appended to a query as `itemFilter(N)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<ItemFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter; its index is its position in the set.
    pub fn push(&mut self, filter: ItemFilter) -> &mut Self {
        self.filters.push(filter);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemFilter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Expands the set into indexed query pairs.
    ///
    /// Produces `itemFilter(N).name` followed by one `itemFilter(N).value(M)`
    /// per value.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (n, filter) in self.filters.iter().enumerate() {
            pairs.push((format!("itemFilter({n}).name"), filter.name.to_string()));
            for (m, value) in filter.values.iter().enumerate() {
                pairs.push((format!("itemFilter({n}).value({m})"), value.to_string()));
            }
        }
        pairs
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a ItemFilter;
    type IntoIter = std::slice::Iter<'a, ItemFilter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

/// Which search operation a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// `findItemsByKeywords`; `bin_only` keeps only auction-with-BIN listings.
    Keywords { bin_only: bool },
    /// `findCompletedItems`, restricted to sold used items.
    CompletedItems,
}

impl SearchKind {
    /// `OPERATION-NAME` for this search.
    pub fn operation_name(&self) -> &'static str {
        match self {
            SearchKind::Keywords { .. } => "findItemsByKeywords",
            SearchKind::CompletedItems => "findCompletedItems",
        }
    }

    /// The filter set this search sends.
    pub fn filters(&self) -> FilterSet {
        let mut set = FilterSet::new();
        match self {
            SearchKind::Keywords { bin_only: true } => {
                set.push(ItemFilter::new("ListingType", &["AuctionWithBIN"]));
            }
            SearchKind::Keywords { bin_only: false } => {
                set.push(ItemFilter::new(
                    "ListingType",
                    &["AuctionWithBIN", "FixedPrice", "Auction"],
                ));
            }
            SearchKind::CompletedItems => {
                set.push(ItemFilter::new("Condition", &["Used", "Unspecified"]))
                    .push(ItemFilter::new("SoldItemsOnly", &["true"]));
            }
        }
        set
    }
}
