use derive_more::Display;
use serde::Serialize;
use std::fmt;

///
/// TypeRef
///
/// Descriptor of a mapped type: the simple name used by naming
/// conventions, and the full path used for identity.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TypeRef {
    pub name: String,
    pub path: String,
}

impl TypeRef {
    /// Describe a Rust type by its `type_name`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::from_path(std::any::type_name::<T>())
    }

    /// Describe a type from a `::`-separated path; generic arguments are
    /// stripped from the simple name.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let base = path.split('<').next().unwrap_or(path);
        let name = base.rsplit("::").next().unwrap_or(base);

        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

///
/// Member
///
/// A member-reference token naming a property or field on a mapped type.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Member {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeRef>,
}

impl Member {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    /// Attach the member's value type.
    #[must_use]
    pub fn of<T: ?Sized + 'static>(mut self) -> Self {
        self.ty = Some(TypeRef::of::<T>());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Member {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

///
/// Access
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Access {
    #[display("backfield")]
    BackingField,
    #[display("field.camelcase")]
    CamelCaseField,
    #[display("field")]
    Field,
    #[display("noop")]
    NoOp,
    #[display("nosetter.camelcase")]
    NoSetterCamelCase,
    #[display("property")]
    Property,
    #[display("readonly")]
    ReadOnlyProperty,
}

///
/// Cascade
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Cascade {
    #[display("all")]
    All,
    #[display("all-delete-orphan")]
    AllDeleteOrphan,
    #[display("delete")]
    Delete,
    #[display("delete-orphan")]
    DeleteOrphan,
    #[display("merge")]
    Merge,
    #[display("none")]
    None,
    #[display("save-update")]
    SaveUpdate,
}

///
/// Fetch
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum Fetch {
    #[display("select")]
    Select,
    #[display("join")]
    Join,
    #[display("subselect")]
    Subselect,
}

///
/// CacheUsage
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum CacheUsage {
    #[display("read-only")]
    ReadOnly,
    #[display("read-write")]
    ReadWrite,
    #[display("nonstrict-read-write")]
    NonStrictReadWrite,
    #[display("transactional")]
    Transactional,
}

///
/// Cache
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Cache {
    pub usage: CacheUsage,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Cache {
    #[must_use]
    pub const fn new(usage: CacheUsage) -> Self {
        Self {
            usage,
            region: None,
        }
    }
}

///
/// OptimisticLock
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum OptimisticLock {
    #[display("none")]
    None,
    #[display("version")]
    Version,
    #[display("dirty")]
    Dirty,
    #[display("all")]
    All,
}

///
/// NotFound
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum NotFound {
    #[display("ignore")]
    Ignore,
    #[display("exception")]
    Exception,
}

///
/// OnDelete
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum OnDelete {
    #[display("cascade")]
    Cascade,
    #[display("noaction")]
    NoAction,
}

///
/// CollectionKind
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Serialize)]
pub enum CollectionKind {
    #[default]
    #[display("bag")]
    Bag,
    #[display("set")]
    Set,
    #[display("list")]
    List,
}

///
/// Generator
///

#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize)]
pub enum Generator {
    #[display("assigned")]
    Assigned,
    #[display("guid")]
    Guid,
    #[display("guid.comb")]
    GuidComb,
    #[display("identity")]
    Identity,
    #[display("increment")]
    Increment,
    #[display("native")]
    Native,
    #[display("sequence({_0})")]
    Sequence(String),
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    #[test]
    fn type_ref_uses_last_path_segment() {
        let ty = TypeRef::of::<Widget>();

        assert_eq!(ty.name, "Widget");
        assert!(ty.path.ends_with("::Widget"));
    }

    #[test]
    fn type_ref_strips_generic_arguments() {
        let ty = TypeRef::from_path("alloc::vec::Vec<app::Order>");

        assert_eq!(ty.name, "Vec");
    }

    #[test]
    fn attribute_values_render_as_mapping_keywords() {
        assert_eq!(Access::CamelCaseField.to_string(), "field.camelcase");
        assert_eq!(Cascade::AllDeleteOrphan.to_string(), "all-delete-orphan");
        assert_eq!(CacheUsage::ReadOnly.to_string(), "read-only");
        assert_eq!(Generator::Sequence("seq".into()).to_string(), "sequence(seq)");
    }
}
