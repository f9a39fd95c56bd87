use crate::domain::shared::value_objects::ProductId;

/// Upper bound on retained history entries.
pub const MAX_HISTORY_LENGTH: usize = 20;

/// Recently viewed products, most recent first, no duplicates. Re-viewing a
/// product moves it to the front instead of duplicating it.
#[derive(Debug, Clone, Default)]
pub struct BrowsingHistory {
    entries: Vec<ProductId>,
}

impl BrowsingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor for data already persisted in the session store. An
    /// over-long persisted list is truncated to the bound.
    pub fn from_entries(mut entries: Vec<ProductId>) -> Self {
        entries.truncate(MAX_HISTORY_LENGTH);
        Self { entries }
    }

    pub fn entries(&self) -> &[ProductId] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ProductId> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a product view: removes any existing occurrence, prepends the
    /// id, and truncates to the bound.
    pub fn record(&mut self, product_id: ProductId) {
        self.entries.retain(|id| *id != product_id);
        self.entries.insert(0, product_id);
        self.entries.truncate(MAX_HISTORY_LENGTH);
    }
}
