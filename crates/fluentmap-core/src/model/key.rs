use crate::model::{Columns, OnDelete, Slot};
use serde::Serialize;

///
/// Key
///
/// Foreign key owned by a collection, join, or joined subclass, pointing
/// back at the owning (or super) type's table.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Key {
    pub columns: Columns,
    pub foreign_key: Slot<String>,
    pub property_ref: Slot<String>,
    pub on_delete: Slot<OnDelete>,
    pub not_null: Slot<bool>,
    pub update: Slot<bool>,
    pub unique: Slot<bool>,
}

impl Key {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
