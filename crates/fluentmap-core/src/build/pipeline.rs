use crate::{
    build::{BuildPhase, MappingProvider, ProvidedMapping, apply::Applier},
    config::BuildConfig,
    convention::{ConventionCollection, ConventionFinder, DefaultConventionFinder},
    error::BuildError,
    model::{Class, Document, Key, Subclass, SubclassKind, TypeRef},
    obs::{BuildEvent, BuildReport, BuildSink, TracingSink},
};
use std::{collections::HashSet, path::Path, sync::Arc};
use tracing::info_span;

///
/// BuildPipeline
///
/// Owns the mapping sources, the application's conventions and the build
/// configuration. Every `build` call starts from the sources again and
/// constructs a fresh finder, so a pipeline can be built repeatedly.
///

pub struct BuildPipeline {
    sources: Vec<Box<dyn MappingProvider>>,
    conventions: ConventionCollection,
    config: BuildConfig,
    sink: Arc<dyn BuildSink>,
}

impl BuildPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            conventions: ConventionCollection::new(),
            config: BuildConfig::default(),
            sink: Arc::new(TracingSink),
        }
    }

    pub fn add_source<P: MappingProvider + 'static>(&mut self, provider: P) -> &mut Self {
        self.sources.push(Box::new(provider));
        self
    }

    /// Conventions applied after the built-in defaults.
    pub fn use_conventions(&mut self, conventions: ConventionCollection) -> &mut Self {
        self.conventions = conventions;
        self
    }

    /// Mutable access to the registered conventions.
    pub const fn conventions_mut(&mut self) -> &mut ConventionCollection {
        &mut self.conventions
    }

    pub fn with_config(&mut self, config: BuildConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Load the build configuration from a TOML file.
    pub fn load_config(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, BuildError> {
        self.config = BuildConfig::from_path(path)?;

        Ok(self)
    }

    pub fn with_sink<S: BuildSink + 'static>(&mut self, sink: S) -> &mut Self {
        self.sink = Arc::new(sink);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build every mapping document. Any error aborts the whole build.
    pub fn build(&self) -> Result<Vec<Document>, BuildError> {
        self.build_with_report().map(|(documents, _)| documents)
    }

    /// Build, also returning the counters folded from the build's events.
    pub fn build_with_report(&self) -> Result<(Vec<Document>, BuildReport), BuildError> {
        let span = info_span!("fluentmap_build", sources = self.sources.len());
        let _enter = span.enter();

        let mut report = BuildReport::default();

        // collect
        self.phase_start(BuildPhase::CollectSources);
        let classes = self.collect(&mut report)?;
        self.phase_finish(BuildPhase::CollectSources, classes.len() as u64);

        // instantiate
        self.phase_start(BuildPhase::InstantiateFacades);
        let mut documents = Vec::with_capacity(classes.len());
        let mut prepared = 0u64;
        for mut class in classes {
            prepared += prepare_class(&mut class)?;
            documents.push(Document::new(vec![class]));
        }
        self.phase_finish(BuildPhase::InstantiateFacades, prepared);

        // apply
        self.phase_start(BuildPhase::ApplyConventions);
        let finder = DefaultConventionFinder::new(&self.config, &self.conventions);
        let visited = {
            let mut applier = Applier::new(finder.dispatch(), &*self.sink, &mut report);
            applier.documents(&mut documents)?;
            applier.elements()
        };
        self.phase_finish(BuildPhase::ApplyConventions, visited);

        // finalize
        self.phase_start(BuildPhase::Finalize);
        let documents = if self.config.merge_mappings {
            merge(documents)
        } else {
            documents
        };
        for document in &documents {
            let event = BuildEvent::DocumentEmitted {
                classes: document.classes.len() as u64,
            };
            self.sink.record(&event);
            report.record(&event);
        }
        self.phase_finish(BuildPhase::Finalize, documents.len() as u64);

        Ok((documents, report))
    }

    // collect
    // asks every provider once, then attaches subclasses beneath their base
    fn collect(&self, report: &mut BuildReport) -> Result<Vec<Class>, BuildError> {
        let mut classes = Vec::new();
        let mut pending = Vec::new();
        let mut seen = HashSet::new();

        for source in &self.sources {
            let provider = source.name();
            let provided = source.provide().map_err(|err| BuildError::Source {
                provider: provider.clone(),
                source: err,
            })?;

            if !seen.insert(provided.ty().clone()) {
                return Err(BuildError::DuplicateClass {
                    ty: provided.ty().path.clone(),
                });
            }

            let event = BuildEvent::SourceCollected {
                provider: &provider,
                ty: &provided.ty().name,
            };
            self.sink.record(&event);
            report.record(&event);

            match provided {
                ProvidedMapping::Class(class) => classes.push(class),
                ProvidedMapping::Subclass { base, mut mapping } => {
                    mapping.extends = base;
                    pending.push(mapping);
                }
            }
        }

        attach_subclasses(&mut classes, pending)?;

        Ok(classes)
    }

    fn phase_start(&self, phase: BuildPhase) {
        self.sink.record(&BuildEvent::PhaseStart { phase });
    }

    fn phase_finish(&self, phase: BuildPhase, elements: u64) {
        self.sink.record(&BuildEvent::PhaseFinish { phase, elements });
    }
}

impl Default for BuildPipeline {
    fn default() -> Self {
        Self::new()
    }
}

// attach_subclasses
// repeated passes so a subclass may arrive before its own base subclass
fn attach_subclasses(classes: &mut [Class], mut pending: Vec<Subclass>) -> Result<(), BuildError> {
    while !pending.is_empty() {
        let before = pending.len();
        let mut unplaced = Vec::new();

        for subclass in pending {
            match find_base(classes, &subclass.extends) {
                Some(children) => children.push(subclass),
                None => unplaced.push(subclass),
            }
        }

        if unplaced.len() == before {
            let orphan = &unplaced[0];
            return Err(BuildError::OrphanSubclass {
                subclass: orphan.ty.path.clone(),
                base: orphan.extends.path.clone(),
            });
        }
        pending = unplaced;
    }

    Ok(())
}

// find_base
// subclass list of the class or subclass mapped for `base`
fn find_base<'a>(classes: &'a mut [Class], base: &TypeRef) -> Option<&'a mut Vec<Subclass>> {
    for class in classes {
        if &class.ty == base {
            return Some(&mut class.subclasses);
        }
        if let Some(subclass) = class.find_subclass_mut(base) {
            return Some(&mut subclass.subclasses);
        }
    }

    None
}

// prepare_class
// fixes subclass kinds from the root discriminator and gives every joined
// subclass a key; returns the number of subclasses prepared
fn prepare_class(class: &mut Class) -> Result<u64, BuildError> {
    let kind = if class.discriminator.is_some() {
        SubclassKind::Discriminated
    } else {
        SubclassKind::Joined
    };

    prepare_subclasses(&mut class.subclasses, kind, &class.ty)
}

fn prepare_subclasses(
    subclasses: &mut [Subclass],
    kind: SubclassKind,
    root: &TypeRef,
) -> Result<u64, BuildError> {
    let mut prepared = 0;

    for subclass in subclasses {
        subclass.kind = kind;
        match kind {
            SubclassKind::Joined => {
                subclass.key.get_or_insert_with(Key::new);
            }
            SubclassKind::Discriminated => {
                // a declared key column has no table to point at
                if subclass.key.take().is_some_and(|key| key.columns.is_explicit()) {
                    return Err(BuildError::DiscriminatedSubclassKey {
                        subclass: subclass.ty.path.clone(),
                        root: root.path.clone(),
                    });
                }
            }
        }
        prepared += 1 + prepare_subclasses(&mut subclass.subclasses, kind, root)?;
    }

    Ok(prepared)
}

// merge
// one document holding every class; document attributes come from the first
fn merge(documents: Vec<Document>) -> Vec<Document> {
    let mut documents = documents.into_iter();
    let Some(mut merged) = documents.next() else {
        return Vec::new();
    };
    for document in documents {
        merged.classes.extend(document.classes);
    }

    vec![merged]
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::SourceError,
        model::{Discriminator, Layer, Member, Property},
    };

    fn ty(name: &str) -> TypeRef {
        TypeRef::from_path(&format!("app::{name}"))
    }

    fn class(name: &str) -> ProvidedMapping {
        let mut class = Class::new(ty(name));
        class.properties.push(Property::new(Member::new("Name")));
        ProvidedMapping::Class(class)
    }

    fn subclass(name: &str, base: &str) -> ProvidedMapping {
        ProvidedMapping::Subclass {
            base: ty(base),
            mapping: Subclass::new(ty(name), ty(base)),
        }
    }

    #[test]
    fn one_document_per_class() {
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(class("A")).add_source(class("B"));

        let documents = pipeline.build().unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1].classes[0].ty, ty("B"));
    }

    #[test]
    fn merge_mappings_emits_single_document() {
        let mut pipeline = BuildPipeline::new();
        pipeline
            .add_source(class("A"))
            .add_source(class("B"))
            .with_config(BuildConfig {
                merge_mappings: true,
                ..BuildConfig::default()
            });

        let (documents, report) = pipeline.build_with_report().unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].classes.len(), 2);
        assert_eq!(report.documents, 1);
        assert_eq!(report.classes, 2);
        assert_eq!(report.sources, 2);
    }

    #[test]
    fn subclasses_attach_in_any_order() {
        let mut pipeline = BuildPipeline::new();
        pipeline
            .add_source(subclass("C", "B"))
            .add_source(subclass("B", "A"))
            .add_source(class("A"));

        let documents = pipeline.build().unwrap();
        let root = &documents[0].classes[0];

        assert_eq!(root.subclasses[0].ty, ty("B"));
        assert_eq!(root.subclasses[0].subclasses[0].ty, ty("C"));
        assert_eq!(root.subclasses[0].kind, SubclassKind::Joined);
        assert!(root.subclasses[0].subclasses[0].key.is_some());
    }

    #[test]
    fn discriminator_makes_plain_subclasses() {
        let ProvidedMapping::Class(mut root) = class("A") else {
            unreachable!()
        };
        root.discriminator = Some(Discriminator::default());

        let mut pipeline = BuildPipeline::new();
        pipeline
            .add_source(ProvidedMapping::Class(root))
            .add_source(subclass("B", "A"));

        let documents = pipeline.build().unwrap();
        let sub = &documents[0].classes[0].subclasses[0];

        assert_eq!(sub.kind, SubclassKind::Discriminated);
        assert!(sub.key.is_none());
    }

    #[test]
    fn declared_key_under_discriminator_is_fatal() {
        let ProvidedMapping::Class(mut root) = class("A") else {
            unreachable!()
        };
        root.discriminator = Some(Discriminator::default());
        let mut keyed = Subclass::new(ty("B"), ty("A"));
        keyed
            .key
            .get_or_insert_with(Key::new)
            .columns
            .rename(Layer::Explicit, "a_fk");

        let mut pipeline = BuildPipeline::new();
        pipeline
            .add_source(ProvidedMapping::Class(root))
            .add_source(ProvidedMapping::Subclass {
                base: ty("A"),
                mapping: keyed,
            });

        let err = pipeline.build().unwrap_err();

        assert!(matches!(
            err,
            BuildError::DiscriminatedSubclassKey { ref subclass, ref root }
                if subclass == "app::B" && root == "app::A"
        ));
    }

    #[test]
    fn orphan_subclass_is_fatal() {
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(class("A")).add_source(subclass("B", "Missing"));

        let err = pipeline.build().unwrap_err();

        assert!(matches!(
            err,
            BuildError::OrphanSubclass { ref base, .. } if base == "app::Missing"
        ));
    }

    #[test]
    fn duplicate_class_is_fatal() {
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(class("A")).add_source(class("A"));

        assert!(matches!(
            pipeline.build().unwrap_err(),
            BuildError::DuplicateClass { .. }
        ));
    }

    #[test]
    fn failing_source_names_provider() {
        let mut pipeline = BuildPipeline::new();
        pipeline.add_source(|| -> Result<ProvidedMapping, SourceError> {
            Err(SourceError::Invalid {
                message: "broken".to_string(),
            })
        });

        let err = pipeline.build().unwrap_err();

        assert!(matches!(err, BuildError::Source { .. }));
        assert!(err.to_string().contains("broken"));
    }
}
