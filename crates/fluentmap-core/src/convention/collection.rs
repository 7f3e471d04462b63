use crate::convention::{Convention, DispatchTable};
use std::{any::Any, sync::Arc};

///
/// ConventionCollection
///
/// Ordered set of conventions supplied by the application. Order is
/// significant: among convention writes to the same attribute, the one
/// registered last wins. Conventions are shared, so one collection can
/// back any number of builds.
///

#[derive(Clone, Default)]
pub struct ConventionCollection {
    conventions: Vec<Arc<dyn Convention>>,
}

impl ConventionCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a convention.
    pub fn add<C: Convention>(&mut self, convention: C) -> &mut Self {
        self.conventions.push(Arc::new(convention));
        self
    }

    /// Append an already shared convention.
    pub fn add_shared(&mut self, convention: Arc<dyn Convention>) -> &mut Self {
        self.conventions.push(convention);
        self
    }

    /// Insert a convention ahead of every other, so later ones override it.
    pub fn prepend<C: Convention>(&mut self, convention: C) -> &mut Self {
        self.conventions.insert(0, Arc::new(convention));
        self
    }

    /// Replace every convention of type `C` with `convention`, keeping the
    /// position of the first. Appends when none is present.
    pub fn replace<C: Convention>(&mut self, convention: C) -> &mut Self {
        let replacement: Arc<dyn Convention> = Arc::new(convention);

        match self.conventions.iter().position(is::<C>) {
            Some(index) => {
                self.conventions[index] = replacement;
                let mut seen = 0usize;
                self.conventions.retain(|c| {
                    if is::<C>(c) {
                        seen += 1;
                        seen == 1
                    } else {
                        true
                    }
                });
            }
            None => self.conventions.push(replacement),
        }

        self
    }

    /// Remove every convention of type `C`; returns how many were removed.
    pub fn remove<C: Convention>(&mut self) -> usize {
        let before = self.conventions.len();
        self.conventions.retain(|c| !is::<C>(c));

        before - self.conventions.len()
    }

    #[must_use]
    pub fn contains<C: Convention>(&self) -> bool {
        self.conventions.iter().any(is::<C>)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.conventions.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Convention>> {
        self.conventions.iter()
    }

    /// Register every convention into `table`, in order.
    pub fn register_into(&self, table: &mut DispatchTable) {
        for convention in &self.conventions {
            Arc::clone(convention).register(table);
        }
    }
}

impl<C: Convention> Extend<C> for ConventionCollection {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        for convention in iter {
            self.add(convention);
        }
    }
}

// is
// concrete type check through the Any supertrait
fn is<C: Convention>(convention: &Arc<dyn Convention>) -> bool {
    let any: &dyn Any = convention.as_ref();

    any.is::<C>()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        convention::{ClassConvention, ConventionCategory},
        error::ConventionError,
        instance::ClassInstance,
    };

    struct Table(&'static str);

    impl ClassConvention for Table {
        fn apply(&self, instance: &mut ClassInstance<'_>) -> Result<(), ConventionError> {
            instance.table(self.0);
            Ok(())
        }
    }

    impl Convention for Table {
        fn register(self: Arc<Self>, table: &mut DispatchTable) {
            table.class(self);
        }
    }

    struct Other;

    impl ClassConvention for Other {
        fn apply(&self, _instance: &mut ClassInstance<'_>) -> Result<(), ConventionError> {
            Ok(())
        }
    }

    impl Convention for Other {
        fn register(self: Arc<Self>, table: &mut DispatchTable) {
            table.class(self);
        }
    }

    #[test]
    fn prepend_goes_first() {
        let mut conventions = ConventionCollection::new();
        conventions.add(Other).prepend(Table("t"));

        let mut table = DispatchTable::new();
        conventions.register_into(&mut table);
        let names = table.names(ConventionCategory::Class);

        assert!(names[0].ends_with("Table"));
        assert!(names[1].ends_with("Other"));
    }

    #[test]
    fn replace_keeps_first_position_and_drops_duplicates() {
        let mut conventions = ConventionCollection::new();
        conventions
            .add(Table("a"))
            .add(Other)
            .add(Table("b"))
            .replace(Table("c"));

        assert_eq!(conventions.len(), 2);
        let first: &dyn Any = conventions.iter().next().unwrap().as_ref();
        assert_eq!(first.downcast_ref::<Table>().unwrap().0, "c");
    }

    #[test]
    fn replace_appends_when_absent() {
        let mut conventions = ConventionCollection::new();
        conventions.add(Other).replace(Table("x"));

        assert_eq!(conventions.len(), 2);
        assert!(conventions.contains::<Table>());
    }

    #[test]
    fn remove_by_type() {
        let mut conventions = ConventionCollection::new();
        conventions.add(Table("a")).add(Other).add(Table("b"));

        assert_eq!(conventions.remove::<Table>(), 2);
        assert!(!conventions.contains::<Table>());
        assert!(conventions.contains::<Other>());
        assert_eq!(conventions.remove::<Table>(), 0);
    }
}
