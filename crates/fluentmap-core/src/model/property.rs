use crate::model::{Access, Column, Columns, Generator, Member, Slot, TypeRef};
use serde::Serialize;

///
/// Id
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Id {
    pub member: Member,
    pub columns: Columns,
    pub generator: Slot<Generator>,
    pub unsaved_value: Slot<String>,
    pub access: Slot<Access>,
}

impl Id {
    /// New id mapping; the column defaults to the member name.
    #[must_use]
    pub fn new(member: Member) -> Self {
        let columns = Columns::defaulted(vec![Column::new(member.name())]);

        Self {
            member,
            columns,
            generator: Slot::new(),
            unsaved_value: Slot::new(),
            access: Slot::new(),
        }
    }
}

///
/// Property
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Property {
    pub member: Member,
    pub columns: Columns,
    pub access: Slot<Access>,
    pub insert: Slot<bool>,
    pub update: Slot<bool>,
    pub lazy: Slot<bool>,
    pub formula: Slot<String>,
    pub custom_type: Slot<TypeRef>,
    pub optimistic_lock: Slot<bool>,
}

impl Property {
    /// New property mapping; the column defaults to the member name.
    #[must_use]
    pub fn new(member: Member) -> Self {
        let columns = Columns::defaulted(vec![Column::new(member.name())]);

        Self {
            member,
            columns,
            access: Slot::new(),
            insert: Slot::new(),
            update: Slot::new(),
            lazy: Slot::new(),
            formula: Slot::new(),
            custom_type: Slot::new(),
            optimistic_lock: Slot::new(),
        }
    }
}
