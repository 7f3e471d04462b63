use crate::model::Slot;
use serde::Serialize;

///
/// Column
///
/// A mapped column. The name is owned by the element's `columns` slot;
/// the remaining attributes carry their own explicit tracking.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub length: Slot<u32>,
    pub not_null: Slot<bool>,
    pub unique: Slot<bool>,
    pub unique_key: Slot<String>,
    pub index: Slot<String>,
    pub sql_type: Slot<String>,
    pub check: Slot<String>,
    pub default: Slot<String>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Copy of this column under a new name, keeping its attributes.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

///
/// Columns
///

pub type Columns = Slot<Vec<Column>>;

impl Slot<Vec<Column>> {
    /// Names of the current columns, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.get()
            .map(|cols| cols.iter().map(|c| c.name.as_str()).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.get()?.first().map(|c| c.name.as_str())
    }

    /// Replace the column list with a single column through `layer`,
    /// keeping the attributes of the current first column.
    pub fn rename(&mut self, layer: crate::model::Layer, name: &str) -> bool {
        let column = self
            .get()
            .and_then(|cols| cols.first())
            .map_or_else(|| Column::new(name), |col| col.renamed(name));

        self.write(layer, vec![column])
    }

    /// Apply `f` to every current column.
    pub fn each_mut(&mut self, mut f: impl FnMut(&mut Column)) {
        if let Some(cols) = self.get_mut() {
            cols.iter_mut().for_each(&mut f);
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Layer;

    #[test]
    fn convention_rename_keeps_column_attributes() {
        let mut col = Column::new("Name");
        col.length.set_explicit(100);
        let mut columns = Columns::defaulted(vec![col]);

        assert!(columns.rename(Layer::Convention, "name_col"));

        let cols = columns.get().unwrap();
        assert_eq!(cols[0].name, "name_col");
        assert_eq!(cols[0].length, 100);
    }

    #[test]
    fn convention_rename_skips_explicit_columns() {
        let mut columns = Columns::explicit(vec![Column::new("name")]);

        assert!(!columns.rename(Layer::Convention, "xxx"));
        assert_eq!(columns.names(), vec!["name"]);
    }

    #[test]
    fn rename_creates_first_column() {
        let mut columns = Columns::new();
        columns.rename(Layer::Convention, "Parent_id");

        assert_eq!(columns.first_name(), Some("Parent_id"));
    }
}
