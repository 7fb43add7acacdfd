use serde::{Deserialize, Serialize};

/// `{ "items": [...] }` list envelope used by every resource listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ItemsResponse<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
