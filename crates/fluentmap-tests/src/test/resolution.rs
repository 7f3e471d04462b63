use fluentmap::core::{
    convention::{ClassConvention, Convention, DispatchTable},
    error::ConventionError,
    instance::ClassInstance,
};
use std::sync::Arc;

///
/// AuditColumns
///
/// Class convention that requires every class to map a `Name` member and
/// gives it a fixed length.
///

pub struct AuditColumns;

impl Convention for AuditColumns {
    fn register(self: Arc<Self>, table: &mut DispatchTable) {
        table.class(self);
    }

    fn name(&self) -> &'static str {
        "audit-columns"
    }
}

impl ClassConvention for AuditColumns {
    fn apply(&self, instance: &mut ClassInstance<'_>) -> Result<(), ConventionError> {
        instance.property("Name")?.length(200);

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use proptest::prelude::*;

    fn children_map(declare: impl FnOnce(&mut OneToManyPart<'_>)) -> ClassMap<ExampleInheritedClass> {
        let mut map = ClassMap::<ExampleInheritedClass>::new();
        map.id("Id");
        declare(&mut map.has_many::<ExampleClass>("Children"));
        map
    }

    fn table_convention(table: &'static str) -> impl Convention {
        ConventionBuilder::collection().always(move |c| {
            c.table(table);
        })
    }

    fn first_collection(documents: &[Document]) -> &Collection {
        &documents[0].classes[0].collections[0]
    }

    #[test]
    fn last_registered_convention_wins() {
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(children_map(|_| {}));
        pipeline
            .conventions_mut()
            .add(table_convention("first"))
            .add(table_convention("second"));

        let documents = pipeline.build().unwrap();

        assert_eq!(
            first_collection(&documents).table_name,
            "second".to_string()
        );
    }

    #[test]
    fn explicit_value_beats_every_convention() {
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(children_map(|m| {
            m.table("children");
        }));
        pipeline
            .conventions_mut()
            .add(table_convention("first"))
            .add(table_convention("second"));

        let documents = pipeline.build().unwrap();
        let collection = first_collection(&documents);

        assert_eq!(collection.table_name, "children".to_string());
        assert!(collection.table_name.is_explicit());
    }

    #[test]
    fn specific_category_runs_after_general() {
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(children_map(|_| {}));
        pipeline
            .conventions_mut()
            .add(ConventionBuilder::has_many().always(|c| {
                c.table("has_many");
            }))
            .add(table_convention("collection"));

        let documents = pipeline.build().unwrap();

        assert_eq!(
            first_collection(&documents).table_name,
            "has_many".to_string()
        );
    }

    #[test]
    fn reapplying_conventions_changes_nothing() {
        let mut conventions = ConventionCollection::new();
        conventions
            .add(table_convention("children"))
            .add(ConventionBuilder::key().always(|k| {
                k.not_nullable();
            }));

        let mut pipeline = BuildPipeline::new();
        pipeline
            .add_source(children_map(|m| {
                m.inverse();
            }))
            .use_conventions(conventions.clone());
        let mut documents = pipeline.build().unwrap();
        let first = documents.clone();

        let finder = DefaultConventionFinder::new(pipeline.config(), &conventions);
        apply_conventions(&finder, &mut documents).unwrap();
        apply_conventions(&finder, &mut documents).unwrap();

        assert_eq!(documents, first);
    }

    #[test]
    fn rejected_elements_are_left_alone() {
        let mut map = children_map(|_| {});
        map.has_many_to_many::<ExampleParentClass>("Parents");

        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(map);
        pipeline.conventions_mut().add(
            ConventionBuilder::collection().when(
                |c| c.child_type() == &ExampleClass::type_ref(),
                |c| {
                    c.batch_size(25);
                },
            ),
        );

        let (documents, report) = pipeline.build_with_report().unwrap();
        let class = &documents[0].classes[0];

        assert_eq!(class.collections[0].batch_size, 25);
        assert!(!class.collections[1].batch_size.has_value());
        assert!(report.conventions_skipped >= 1);
    }

    #[test]
    fn built_in_conventions_can_be_disabled() {
        let mut map = ClassMap::<ExampleClass>::new();
        map.id("Id");
        map.references::<ExampleParentClass>("Parent");

        let config = BuildConfig::from_toml_str("default_conventions = false").unwrap();
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(map).with_config(config);

        let documents = pipeline.build().unwrap();
        let class = &documents[0].classes[0];

        assert!(!class.table.has_value());
        assert_eq!(class.references[0].columns.first_name(), Some("Parent_id"));
    }

    #[test]
    fn naming_config_drives_built_in_conventions() {
        let mut map = ClassMap::<ExampleClass>::new();
        map.id("Id");
        map.map("DisplayName");
        map.references::<ExampleParentClass>("Parent");

        let config = BuildConfig::from_toml_str(
            r#"
            merge_mappings = true

            [naming]
            case = "snake"
            foreign_key_suffix = "_fk"
            table_prefix = "tbl_"
            "#,
        )
        .unwrap();
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(map).with_config(config);

        let documents = pipeline.build().unwrap();
        let class = &documents[0].classes[0];

        assert_eq!(class.table, "tbl_example_class".to_string());
        assert_eq!(class.properties[0].columns.first_name(), Some("display_name"));
        assert_eq!(class.references[0].columns.first_name(), Some("parent_fk"));
    }

    #[test]
    fn failing_convention_aborts_the_build() {
        let mut map = ClassMap::<ExampleClass>::new();
        map.id("Id");

        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(map);
        pipeline.conventions_mut().add(AuditColumns);

        let err = pipeline.build().unwrap_err();

        assert!(matches!(
            err,
            BuildError::Convention { ref path, .. } if path == "ExampleClass"
        ));
        assert!(matches!(
            err,
            BuildError::Convention { convention, .. } if convention == "audit-columns"
        ));
        assert!(matches!(
            err.convention_leaf(),
            Some(ConventionError::UnknownMember { member, .. }) if member == "Name"
        ));
    }

    #[test]
    fn class_convention_reaches_named_property() {
        let mut map = ClassMap::<ExampleClass>::new();
        map.id("Id");
        map.map("Name").not_nullable();

        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(map);
        pipeline.conventions_mut().add(AuditColumns);

        let documents = pipeline.build().unwrap();
        let column = &documents[0].classes[0].property("Name").unwrap().columns;

        let length = column.get().and_then(|cols| cols[0].length.get().copied());
        assert_eq!(length, Some(200));
    }

    #[test]
    fn document_serializes_with_explicit_markers() {
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(children_map(|m| {
            m.table("children");
        }));

        let documents = pipeline.build().unwrap();
        let json = serde_json::to_value(&documents[0]).unwrap();
        let collection = &json["classes"][0]["collections"][0];

        assert_eq!(collection["table_name"]["value"], "children");
        assert_eq!(collection["table_name"]["explicit"], true);
        assert!(collection["key"]["columns"].get("explicit").is_none());
        assert_eq!(
            collection["key"]["columns"]["value"][0]["name"],
            "ExampleInheritedClass_id"
        );
    }

    proptest! {
        #[test]
        fn last_of_any_convention_sequence_wins(
            tables in prop::collection::vec("[a-z]{1,8}", 1..6),
        ) {
            let mut pipeline = BuildPipeline::new();
            pipeline.add_source(children_map(|_| {}));
            for table in tables.clone() {
                pipeline.conventions_mut().add(ConventionBuilder::collection().always(
                    move |c| {
                        c.table(table.clone());
                    },
                ));
            }

            let documents = pipeline.build().unwrap();

            prop_assert_eq!(first_collection(&documents).table_name.get(), tables.last());
        }

        #[test]
        fn explicit_value_survives_any_convention_sequence(
            explicit in "[a-z]{1,8}",
            tables in prop::collection::vec("[a-z]{1,8}", 0..6),
        ) {
            let declared = explicit.clone();
            let mut pipeline = BuildPipeline::new();
            pipeline.add_source(children_map(move |m| {
                m.table(declared);
            }));
            for table in tables {
                pipeline.conventions_mut().add(ConventionBuilder::collection().always(
                    move |c| {
                        c.table(table.clone());
                    },
                ));
            }

            let documents = pipeline.build().unwrap();

            prop_assert_eq!(first_collection(&documents).table_name.get(), Some(&explicit));
        }
    }
}
