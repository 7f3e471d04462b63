//! Build instrumentation.
//!
//! The pipeline never logs or counts directly; everything flows through
//! [`BuildEvent`] into a [`BuildSink`]. The default sink forwards to
//! `tracing`, and every build also folds its events into a [`BuildReport`].

use crate::{build::BuildPhase, convention::ConventionCategory};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

///
/// BuildEvent
///

#[derive(Clone, Copy, Debug)]
pub enum BuildEvent<'a> {
    PhaseStart {
        phase: BuildPhase,
    },
    PhaseFinish {
        phase: BuildPhase,
        elements: u64,
    },
    SourceCollected {
        provider: &'a str,
        ty: &'a str,
    },
    ConventionApplied {
        category: ConventionCategory,
        convention: &'static str,
        path: &'a str,
    },
    ConventionSkipped {
        category: ConventionCategory,
        convention: &'static str,
        path: &'a str,
    },
    DocumentEmitted {
        classes: u64,
    },
}

///
/// BuildSink
///

pub trait BuildSink: Send + Sync {
    fn record(&self, event: &BuildEvent<'_>);
}

///
/// TracingSink
///
/// Default sink: phases at `info`, convention invocations at `debug`,
/// skips at `trace`.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl BuildSink for TracingSink {
    fn record(&self, event: &BuildEvent<'_>) {
        match *event {
            BuildEvent::PhaseStart { phase } => info!(%phase, "build phase started"),
            BuildEvent::PhaseFinish { phase, elements } => {
                info!(%phase, elements, "build phase finished");
            }
            BuildEvent::SourceCollected { provider, ty } => {
                debug!(provider, ty, "mapping source collected");
            }
            BuildEvent::ConventionApplied {
                category,
                convention,
                path,
            } => debug!(%category, convention, path, "convention applied"),
            BuildEvent::ConventionSkipped {
                category,
                convention,
                path,
            } => trace!(%category, convention, path, "convention skipped"),
            BuildEvent::DocumentEmitted { classes } => {
                debug!(classes, "mapping document emitted");
            }
        }
    }
}

///
/// NullSink
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl BuildSink for NullSink {
    fn record(&self, _event: &BuildEvent<'_>) {}
}

///
/// BuildReport
///
/// Counters folded from one build's events.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BuildReport {
    pub sources: u64,
    pub documents: u64,
    pub classes: u64,
    pub conventions_applied: u64,
    pub conventions_skipped: u64,
    pub by_category: BTreeMap<ConventionCategory, CategoryCounts>,
}

///
/// CategoryCounts
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CategoryCounts {
    pub applied: u64,
    pub skipped: u64,
}

impl BuildReport {
    pub fn record(&mut self, event: &BuildEvent<'_>) {
        match *event {
            BuildEvent::SourceCollected { .. } => {
                self.sources = self.sources.saturating_add(1);
            }
            BuildEvent::ConventionApplied { category, .. } => {
                self.conventions_applied = self.conventions_applied.saturating_add(1);
                let entry = self.by_category.entry(category).or_default();
                entry.applied = entry.applied.saturating_add(1);
            }
            BuildEvent::ConventionSkipped { category, .. } => {
                self.conventions_skipped = self.conventions_skipped.saturating_add(1);
                let entry = self.by_category.entry(category).or_default();
                entry.skipped = entry.skipped.saturating_add(1);
            }
            BuildEvent::DocumentEmitted { classes } => {
                self.documents = self.documents.saturating_add(1);
                self.classes = self.classes.saturating_add(classes);
            }
            BuildEvent::PhaseStart { .. } | BuildEvent::PhaseFinish { .. } => {}
        }
    }

    /// Applied count for one category.
    #[must_use]
    pub fn applied(&self, category: ConventionCategory) -> u64 {
        self.by_category
            .get(&category)
            .map_or(0, |counts| counts.applied)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_folds_convention_events() {
        let mut report = BuildReport::default();
        for event in [
            BuildEvent::ConventionApplied {
                category: ConventionCategory::Collection,
                convention: "fk",
                path: "ExampleClass.Children",
            },
            BuildEvent::ConventionSkipped {
                category: ConventionCategory::Collection,
                convention: "table",
                path: "ExampleClass.Children",
            },
            BuildEvent::DocumentEmitted { classes: 2 },
        ] {
            report.record(&event);
        }

        assert_eq!(report.conventions_applied, 1);
        assert_eq!(report.conventions_skipped, 1);
        assert_eq!(report.applied(ConventionCategory::Collection), 1);
        assert_eq!(report.applied(ConventionCategory::Reference), 0);
        assert_eq!(report.documents, 1);
        assert_eq!(report.classes, 2);
    }
}
