use crate::model::{Fetch, Key, Property, Reference, Slot};
use serde::Serialize;

///
/// Join
///
/// Secondary table holding some of a class's properties, keyed back to
/// the class table.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Join {
    pub table: Slot<String>,
    pub schema: Slot<String>,
    pub key: Key,
    pub fetch: Slot<Fetch>,
    pub inverse: Slot<bool>,
    pub optional: Slot<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Reference>,
}

impl Join {
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: Slot::explicit(table.into()),
            schema: Slot::new(),
            key: Key::new(),
            fetch: Slot::new(),
            inverse: Slot::new(),
            optional: Slot::new(),
            properties: Vec::new(),
            references: Vec::new(),
        }
    }
}
