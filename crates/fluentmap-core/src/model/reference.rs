use crate::model::{Access, Cascade, Column, Columns, Fetch, Member, NotFound, Slot, TypeRef};
use serde::Serialize;

///
/// Reference
///
/// Many-to-one association: the foreign key column lives on the owning
/// class and points at `referenced`.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Reference {
    pub member: Member,
    pub referenced: TypeRef,
    pub columns: Columns,
    pub cascade: Slot<Cascade>,
    pub fetch: Slot<Fetch>,
    pub lazy: Slot<bool>,
    pub not_found: Slot<NotFound>,
    pub foreign_key: Slot<String>,
    pub property_ref: Slot<String>,
    pub access: Slot<Access>,
    pub insert: Slot<bool>,
    pub update: Slot<bool>,
    pub unique: Slot<bool>,
    pub not_null: Slot<bool>,
}

impl Reference {
    /// New reference; the column defaults to `{member}_id`.
    #[must_use]
    pub fn new(member: Member, referenced: TypeRef) -> Self {
        let columns = Columns::defaulted(vec![Column::new(format!("{}_id", member.name()))]);

        Self {
            member,
            referenced,
            columns,
            cascade: Slot::new(),
            fetch: Slot::new(),
            lazy: Slot::new(),
            not_found: Slot::new(),
            foreign_key: Slot::new(),
            property_ref: Slot::new(),
            access: Slot::new(),
            insert: Slot::new(),
            update: Slot::new(),
            unique: Slot::new(),
            not_null: Slot::new(),
        }
    }
}
