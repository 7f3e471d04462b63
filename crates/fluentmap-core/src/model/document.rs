use crate::model::{Access, Cascade, Class, Slot};
use serde::Serialize;

///
/// Document
///
/// A unit of mapping output: document-wide defaults plus the classes it
/// holds. Builds produce one document per class unless merged.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Document {
    pub default_access: Slot<Access>,
    pub default_cascade: Slot<Cascade>,
    pub default_lazy: Slot<bool>,
    pub schema: Slot<String>,
    pub catalog: Slot<String>,
    pub auto_import: Slot<bool>,

    pub classes: Vec<Class>,
}

impl Document {
    #[must_use]
    pub fn new(classes: Vec<Class>) -> Self {
        Self {
            classes,
            ..Self::default()
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.iter()
    }
}
