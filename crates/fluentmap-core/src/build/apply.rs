use crate::{
    build::BuildPhase,
    convention::{ConventionCategory, ConventionFinder, DispatchEntry, DispatchTable},
    error::{BuildError, ConventionError},
    instance::{
        ClassInstance, CollectionInstance, DocumentInstance, IdInstance, JoinInstance,
        KeyInstance, KeyOwner, PropertyInstance, ReferenceInstance, SubclassInstance,
    },
    model::{
        Class, Collection, Document, Join, Property, Reference, RelationshipKind, Subclass,
        SubclassKind, TypeRef,
    },
    obs::{BuildEvent, BuildReport, BuildSink, TracingSink},
};

/// Run every convention the finder dispatches over `documents`.
///
/// Re-running over an already refined model changes nothing, since
/// conventions only refill attributes the user never set.
pub fn apply_conventions(
    finder: &dyn ConventionFinder,
    documents: &mut [Document],
) -> Result<(), BuildError> {
    let mut report = BuildReport::default();
    let mut applier = Applier::new(finder.dispatch(), &TracingSink, &mut report);

    applier.documents(documents)
}

// invoke
// acceptance check then apply for one handler against one facade
macro_rules! invoke {
    ($instance:ident) => {
        |handler| {
            if !handler.accepts(&$instance) {
                return Ok(false);
            }
            handler.apply(&mut $instance)?;

            Ok(true)
        }
    };
}

///
/// Applier
///
/// Walks the model in a fixed order: document, class, id, properties,
/// references, collections and their keys, joins with their keys and
/// members, then subclasses depth-first.
///

pub(crate) struct Applier<'a> {
    table: &'a DispatchTable,
    sink: &'a dyn BuildSink,
    report: &'a mut BuildReport,
    path: Vec<String>,
    elements: u64,
}

impl<'a> Applier<'a> {
    pub(crate) fn new(
        table: &'a DispatchTable,
        sink: &'a dyn BuildSink,
        report: &'a mut BuildReport,
    ) -> Self {
        Self {
            table,
            sink,
            report,
            path: Vec::new(),
            elements: 0,
        }
    }

    /// Elements visited so far.
    pub(crate) const fn elements(&self) -> u64 {
        self.elements
    }

    pub(crate) fn documents(&mut self, documents: &mut [Document]) -> Result<(), BuildError> {
        for document in documents {
            self.document(document)?;
        }

        Ok(())
    }

    fn document(&mut self, document: &mut Document) -> Result<(), BuildError> {
        let table = self.table;
        let segment = document
            .classes
            .first()
            .map_or_else(|| "document".to_string(), |c| format!("{}.document", c.ty));

        self.scoped(segment, |this| {
            let mut instance = DocumentInstance::new(document);
            this.run(ConventionCategory::Document, &table.document, invoke!(instance))
        })?;

        for class in &mut document.classes {
            self.class(class)?;
        }

        Ok(())
    }

    fn class(&mut self, class: &mut Class) -> Result<(), BuildError> {
        let table = self.table;
        self.path.push(class.ty.name.clone());

        {
            let mut instance = ClassInstance::new(class);
            self.run(ConventionCategory::Class, &table.class, invoke!(instance))?;
        }

        let Class {
            ty,
            id,
            properties,
            references,
            collections,
            joins,
            subclasses,
            ..
        } = class;

        if let Some(id) = id {
            self.scoped(format!("id:{}", id.member.name), |this| {
                let mut instance = IdInstance::new(id, ty);
                this.run(ConventionCategory::Id, &table.id, invoke!(instance))
            })?;
        }
        self.members(ty, properties, references)?;
        for collection in collections {
            self.collection(collection, ty)?;
        }
        for join in joins {
            self.join(join, ty)?;
        }
        for subclass in subclasses {
            self.subclass(subclass)?;
        }

        self.path.pop();

        Ok(())
    }

    fn members(
        &mut self,
        entity: &TypeRef,
        properties: &mut [Property],
        references: &mut [Reference],
    ) -> Result<(), BuildError> {
        let table = self.table;

        for property in properties {
            self.scoped(property.member.name.clone(), |this| {
                let mut instance = PropertyInstance::new(property, entity);
                this.run(ConventionCategory::Property, &table.property, invoke!(instance))
            })?;
        }
        for reference in references {
            self.scoped(reference.member.name.clone(), |this| {
                let mut instance = ReferenceInstance::new(reference, entity);
                this.run(ConventionCategory::Reference, &table.reference, invoke!(instance))
            })?;
        }

        Ok(())
    }

    fn collection(
        &mut self,
        collection: &mut Collection,
        entity: &TypeRef,
    ) -> Result<(), BuildError> {
        let table = self.table;
        let kind = collection.relationship_kind();

        self.scoped(collection.member.name.clone(), |this| {
            {
                let mut instance = CollectionInstance::new(collection, entity);
                this.run(ConventionCategory::Collection, &table.collection, invoke!(instance))?;
                match kind {
                    RelationshipKind::OneToMany => {
                        this.run(ConventionCategory::HasMany, &table.has_many, invoke!(instance))?;
                    }
                    RelationshipKind::ManyToMany => this.run(
                        ConventionCategory::HasManyToMany,
                        &table.has_many_to_many,
                        invoke!(instance),
                    )?,
                }
            }

            this.scoped("key".to_string(), |this| {
                let mut instance =
                    KeyInstance::new(&mut collection.key, KeyOwner::Collection, entity);
                this.run(ConventionCategory::Key, &table.key, invoke!(instance))
            })
        })
    }

    fn join(&mut self, join: &mut Join, entity: &TypeRef) -> Result<(), BuildError> {
        let table = self.table;
        let segment = format!("join:{}", join.table.get().map_or("", String::as_str));

        self.scoped(segment, |this| {
            {
                let mut instance = JoinInstance::new(join, entity);
                this.run(ConventionCategory::Join, &table.join, invoke!(instance))?;
            }

            this.scoped("key".to_string(), |this| {
                let mut instance = KeyInstance::new(&mut join.key, KeyOwner::Join, entity);
                this.run(ConventionCategory::Key, &table.key, invoke!(instance))
            })?;

            this.members(entity, &mut join.properties, &mut join.references)
        })
    }

    fn subclass(&mut self, subclass: &mut Subclass) -> Result<(), BuildError> {
        let table = self.table;
        let kind = subclass.kind;
        self.path.push(subclass.ty.name.clone());

        {
            let mut instance = SubclassInstance::new(subclass);
            self.run(ConventionCategory::Subclass, &table.subclass, invoke!(instance))?;
            if kind == SubclassKind::Joined {
                self.run(
                    ConventionCategory::JoinedSubclass,
                    &table.joined_subclass,
                    invoke!(instance),
                )?;
            }
        }

        let Subclass {
            ty,
            extends,
            key,
            properties,
            references,
            collections,
            joins,
            subclasses,
            ..
        } = subclass;

        if let Some(key) = key {
            self.scoped("key".to_string(), |this| {
                let mut instance = KeyInstance::new(key, KeyOwner::JoinedSubclass, extends);
                this.run(ConventionCategory::Key, &table.key, invoke!(instance))
            })?;
        }
        self.members(ty, properties, references)?;
        for collection in collections {
            self.collection(collection, ty)?;
        }
        for join in joins {
            self.join(join, ty)?;
        }
        for nested in subclasses {
            self.subclass(nested)?;
        }

        self.path.pop();

        Ok(())
    }

    // scoped
    // runs `f` with one more path segment
    fn scoped<T>(
        &mut self,
        segment: String,
        f: impl FnOnce(&mut Self) -> Result<T, BuildError>,
    ) -> Result<T, BuildError> {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();

        result
    }

    // run
    // every handler of one category against one element, in order
    fn run<H: ?Sized>(
        &mut self,
        category: ConventionCategory,
        entries: &[DispatchEntry<H>],
        mut invoke: impl FnMut(&H) -> Result<bool, ConventionError>,
    ) -> Result<(), BuildError> {
        self.elements = self.elements.saturating_add(1);
        if entries.is_empty() {
            return Ok(());
        }

        let path = self.path.join(".");
        for entry in entries {
            let applied = invoke(entry.handler()).map_err(|source| BuildError::Convention {
                phase: BuildPhase::ApplyConventions,
                category,
                convention: entry.name(),
                path: path.clone(),
                source,
            })?;

            let event = if applied {
                BuildEvent::ConventionApplied {
                    category,
                    convention: entry.name(),
                    path: &path,
                }
            } else {
                BuildEvent::ConventionSkipped {
                    category,
                    convention: entry.name(),
                    path: &path,
                }
            };
            self.sink.record(&event);
            self.report.record(&event);
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        convention::{
            ClassConvention, Convention, ConventionBuilder, ConventionCollection,
            DefaultConventionFinder,
        },
        model::Member,
        obs::NullSink,
    };
    use std::sync::Arc;

    fn document() -> Document {
        let mut class = Class::new(TypeRef::from_path("app::ExampleClass"));
        class.properties.push(Property::new(Member::new("Name")));
        class.collections.push(Collection::one_to_many(
            Member::new("Children"),
            TypeRef::from_path("app::Child"),
        ));

        Document::new(vec![class])
    }

    struct Failing;

    impl ClassConvention for Failing {
        fn apply(&self, _instance: &mut ClassInstance<'_>) -> Result<(), ConventionError> {
            Err(ConventionError::invalid("no tables today"))
        }
    }

    impl Convention for Failing {
        fn register(self: Arc<Self>, table: &mut DispatchTable) {
            table.class(self);
        }
    }

    #[test]
    fn failing_convention_reports_category_and_path() {
        let mut conventions = ConventionCollection::new();
        conventions.add(Failing);
        let finder = DefaultConventionFinder::without_defaults(&conventions);
        let mut documents = vec![document()];

        let err = apply_conventions(&finder, &mut documents).unwrap_err();
        match err {
            BuildError::Convention {
                phase,
                category,
                path,
                ..
            } => {
                assert_eq!(phase, BuildPhase::ApplyConventions);
                assert_eq!(category, ConventionCategory::Class);
                assert_eq!(path, "ExampleClass");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn key_conventions_run_after_collection_conventions() {
        let mut conventions = ConventionCollection::new();
        conventions
            .add(ConventionBuilder::key().always(|key| {
                key.column("from_key");
            }))
            .add(ConventionBuilder::collection().always(|c| {
                c.key().column("from_collection");
            }));
        let finder = DefaultConventionFinder::without_defaults(&conventions);
        let mut documents = vec![document()];

        apply_conventions(&finder, &mut documents).unwrap();

        let key = &documents[0].classes[0].collections[0].key;
        assert_eq!(key.columns.names(), vec!["from_key"]);
    }

    #[test]
    fn rejected_conventions_are_counted_as_skipped() {
        let mut conventions = ConventionCollection::new();
        conventions.add(
            ConventionBuilder::property().when(|p| p.member().name == "Missing", |p| {
                p.length(10);
            }),
        );
        let finder = DefaultConventionFinder::without_defaults(&conventions);
        let mut documents = vec![document()];
        let mut report = BuildReport::default();

        Applier::new(finder.dispatch(), &NullSink, &mut report)
            .documents(&mut documents)
            .unwrap();

        assert_eq!(report.conventions_skipped, 1);
        assert_eq!(report.conventions_applied, 0);
    }
}
