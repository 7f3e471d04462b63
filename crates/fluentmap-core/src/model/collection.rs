use crate::model::{
    Access, Cache, Cascade, CollectionKind, Columns, Fetch, Key, Member, NotFound,
    OptimisticLock, Slot, TypeRef,
};
use derive_more::Display;
use serde::Serialize;

///
/// Collection
///
/// One-to-many or many-to-many collection. The key references the owning
/// type; for many-to-many the relationship carries the child-side key.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Collection {
    pub member: Member,
    pub child: TypeRef,
    pub relationship: Relationship,
    pub key: Key,

    pub kind: Slot<CollectionKind>,
    pub access: Slot<Access>,
    pub batch_size: Slot<u32>,
    pub cache: Slot<Cache>,
    pub cascade: Slot<Cascade>,
    pub check: Slot<String>,
    pub collection_type: Slot<TypeRef>,
    pub fetch: Slot<Fetch>,
    pub generic: Slot<bool>,
    pub inverse: Slot<bool>,
    pub lazy: Slot<bool>,
    pub optimistic_lock: Slot<OptimisticLock>,
    pub persister: Slot<TypeRef>,
    pub schema: Slot<String>,
    pub where_clause: Slot<String>,
    pub table_name: Slot<String>,
    pub order_by: Slot<String>,
}

impl Collection {
    #[must_use]
    pub fn one_to_many(member: Member, child: TypeRef) -> Self {
        Self::new(
            member,
            child,
            Relationship::OneToMany {
                not_found: Slot::new(),
            },
        )
    }

    #[must_use]
    pub fn many_to_many(member: Member, child: TypeRef) -> Self {
        Self::new(member, child, Relationship::ManyToMany(ManyToMany::default()))
    }

    fn new(member: Member, child: TypeRef, relationship: Relationship) -> Self {
        Self {
            member,
            child,
            relationship,
            key: Key::new(),
            kind: Slot::defaulted(CollectionKind::Bag),
            access: Slot::new(),
            batch_size: Slot::new(),
            cache: Slot::new(),
            cascade: Slot::new(),
            check: Slot::new(),
            collection_type: Slot::new(),
            fetch: Slot::new(),
            generic: Slot::new(),
            inverse: Slot::new(),
            lazy: Slot::new(),
            optimistic_lock: Slot::new(),
            persister: Slot::new(),
            schema: Slot::new(),
            where_clause: Slot::new(),
            table_name: Slot::new(),
            order_by: Slot::new(),
        }
    }

    #[must_use]
    pub const fn relationship_kind(&self) -> RelationshipKind {
        match self.relationship {
            Relationship::OneToMany { .. } => RelationshipKind::OneToMany,
            Relationship::ManyToMany(_) => RelationshipKind::ManyToMany,
        }
    }

    #[must_use]
    pub const fn many_to_many_ref(&self) -> Option<&ManyToMany> {
        match &self.relationship {
            Relationship::ManyToMany(m) => Some(m),
            Relationship::OneToMany { .. } => None,
        }
    }

    pub const fn many_to_many_mut(&mut self) -> Option<&mut ManyToMany> {
        match &mut self.relationship {
            Relationship::ManyToMany(m) => Some(m),
            Relationship::OneToMany { .. } => None,
        }
    }
}

///
/// Relationship
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Relationship {
    OneToMany { not_found: Slot<NotFound> },
    ManyToMany(ManyToMany),
}

///
/// RelationshipKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum RelationshipKind {
    #[display("one-to-many")]
    OneToMany,
    #[display("many-to-many")]
    ManyToMany,
}

///
/// ManyToMany
/// Child side of a many-to-many association table.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ManyToMany {
    pub columns: Columns,
    pub foreign_key: Slot<String>,
}
