use super::Schema;

use crate::{Error, Result};

use indexmap::IndexMap;
use std::fmt;

/// Explicit correlation of names between a previous and a next schema.
///
/// Name continuity alone cannot tell a rename from a delete followed by a
/// create, so callers record renames here. An entity without an entry keeps
/// its name on both sides.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenameMapping {
    models: IndexMap<String, String>,
    #[cfg_attr(feature = "serde", serde(with = "field_hints"))]
    fields: IndexMap<FieldPath, FieldPath>,
    enums: IndexMap<String, String>,
}

/// A field identified by its owning model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldPath {
    pub model: String,
    pub field: String,
}

impl FieldPath {
    pub fn new(model: impl Into<String>, field: impl Into<String>) -> FieldPath {
        FieldPath {
            model: model.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.model, self.field)
    }
}

impl RenameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.fields.is_empty() && self.enums.is_empty()
    }

    pub fn add_model_hint(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.models.insert(from.into(), to.into());
    }

    /// Records a field rename. Both paths name the owning model as it is
    /// called in their respective schema.
    pub fn add_field_hint(&mut self, from: FieldPath, to: FieldPath) {
        self.fields.insert(from, to);
    }

    pub fn add_enum_hint(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.enums.insert(from.into(), to.into());
    }

    pub fn get_model(&self, from: &str) -> Option<&str> {
        self.models.get(from).map(String::as_str)
    }

    pub fn get_model_source(&self, to: &str) -> Option<&str> {
        reverse(&self.models, to)
    }

    pub fn get_field(&self, from: &FieldPath) -> Option<&FieldPath> {
        self.fields.get(from)
    }

    pub fn get_field_source(&self, to: &FieldPath) -> Option<&FieldPath> {
        self.fields
            .iter()
            .find(|(_, next)| *next == to)
            .map(|(previous, _)| previous)
    }

    pub fn get_enum(&self, from: &str) -> Option<&str> {
        self.enums.get(from).map(String::as_str)
    }

    pub fn get_enum_source(&self, to: &str) -> Option<&str> {
        reverse(&self.enums, to)
    }

    /// Checks every entry against the two schemas.
    ///
    /// All problems are collected and reported in one
    /// [`Error::invalid_rename_mapping`].
    pub fn verify(&self, previous: &Schema, next: &Schema) -> Result<()> {
        let mut problems = vec![];

        for (from, to) in &self.models {
            if previous.model(from).is_none() {
                problems.push(format!("model `{from}` is not in the previous schema"));
            }
            if next.model(to).is_none() {
                problems.push(format!("model `{to}` is not in the next schema"));
            }
        }
        duplicate_targets(self.models.values(), "model", &mut problems);

        for (from, to) in &self.fields {
            if previous
                .model(&from.model)
                .and_then(|model| model.field_by_name(&from.field))
                .is_none()
            {
                problems.push(format!("field `{from}` is not in the previous schema"));
            }
            if next
                .model(&to.model)
                .and_then(|model| model.field_by_name(&to.field))
                .is_none()
            {
                problems.push(format!("field `{to}` is not in the next schema"));
            }

            let expected = self.get_model(&from.model).unwrap_or(&from.model);
            if expected != to.model {
                problems.push(format!(
                    "field `{from}` is mapped to `{to}`, but model `{}` maps to `{expected}`",
                    from.model
                ));
            }
        }
        duplicate_targets(self.fields.values(), "field", &mut problems);

        for (from, to) in &self.enums {
            if previous.enum_(from).is_none() {
                problems.push(format!("enum `{from}` is not in the previous schema"));
            }
            if next.enum_(to).is_none() {
                problems.push(format!("enum `{to}` is not in the next schema"));
            }
        }
        duplicate_targets(self.enums.values(), "enum", &mut problems);

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::invalid_rename_mapping(problems.join("; ")))
        }
    }
}

fn reverse<'a>(map: &'a IndexMap<String, String>, to: &str) -> Option<&'a str> {
    map.iter()
        .find(|(_, next)| *next == to)
        .map(|(previous, _)| previous.as_str())
}

fn duplicate_targets<'a, T>(
    targets: impl Iterator<Item = &'a T>,
    kind: &str,
    problems: &mut Vec<String>,
) where
    T: fmt::Display + Eq + std::hash::Hash + 'a,
{
    let mut seen = std::collections::HashSet::new();
    for target in targets {
        if !seen.insert(target) {
            problems.push(format!("more than one {kind} is renamed to `{target}`"));
        }
    }
}

/// Field hints use a struct key, which formats like TOML and JSON cannot use
/// as map keys; they are stored as a list of pairs instead.
#[cfg(feature = "serde")]
mod field_hints {
    use super::FieldPath;

    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Hint {
        from: FieldPath,
        to: FieldPath,
    }

    pub(super) fn serialize<S: Serializer>(
        hints: &IndexMap<FieldPath, FieldPath>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let hints: Vec<Hint> = hints
            .iter()
            .map(|(from, to)| Hint {
                from: from.clone(),
                to: to.clone(),
            })
            .collect();
        hints.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<IndexMap<FieldPath, FieldPath>, D::Error> {
        let hints = Vec::<Hint>::deserialize(deserializer)?;
        Ok(hints.into_iter().map(|hint| (hint.from, hint.to)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Enum, Field, Model, TypeIdentifier};

    fn schema(model: &str, field: &str) -> Schema {
        Schema::builder()
            .model(
                Model::new(model)
                    .field(Field::id("id"))
                    .field(Field::scalar(field, TypeIdentifier::String)),
            )
            .enum_(Enum::new("Color", ["RED"]))
            .build()
            .unwrap()
    }

    #[test]
    fn lookups_in_both_directions() {
        let mut mapping = RenameMapping::new();
        mapping.add_model_hint("Todo", "Task");
        mapping.add_field_hint(FieldPath::new("Todo", "title"), FieldPath::new("Task", "name"));

        assert_eq!(mapping.get_model("Todo"), Some("Task"));
        assert_eq!(mapping.get_model_source("Task"), Some("Todo"));
        assert_eq!(mapping.get_model("Task"), None);
        assert_eq!(
            mapping.get_field_source(&FieldPath::new("Task", "name")),
            Some(&FieldPath::new("Todo", "title"))
        );
    }

    #[test]
    fn verify_accepts_consistent_hints() {
        let mut mapping = RenameMapping::new();
        mapping.add_model_hint("Todo", "Task");
        mapping.add_field_hint(FieldPath::new("Todo", "title"), FieldPath::new("Task", "name"));

        mapping
            .verify(&schema("Todo", "title"), &schema("Task", "name"))
            .unwrap();
    }

    #[test]
    fn verify_reports_every_unknown_name() {
        let mut mapping = RenameMapping::new();
        mapping.add_model_hint("Ghost", "Task");
        mapping.add_enum_hint("Color", "Colour");

        let err = mapping
            .verify(&schema("Todo", "title"), &schema("Task", "title"))
            .unwrap_err();

        assert!(err.is_invalid_rename_mapping());
        assert_eq!(
            err.to_string(),
            "invalid rename mapping: model `Ghost` is not in the previous schema; enum `Colour` is not in the next schema"
        );
    }

    #[test]
    fn verify_rejects_field_hint_crossing_models() {
        let mut mapping = RenameMapping::new();
        mapping.add_field_hint(FieldPath::new("Todo", "title"), FieldPath::new("Task", "title"));

        let err = mapping
            .verify(&schema("Todo", "title"), &schema("Task", "title"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid rename mapping: field `Todo.title` is mapped to `Task.title`, but model `Todo` maps to `Todo`"
        );
    }

    #[test]
    fn verify_rejects_two_sources_for_one_target() {
        let previous = Schema::builder()
            .model(Model::new("A").field(Field::id("id")))
            .model(Model::new("B").field(Field::id("id")))
            .build()
            .unwrap();
        let next = Schema::builder()
            .model(Model::new("C").field(Field::id("id")))
            .build()
            .unwrap();

        let mut mapping = RenameMapping::new();
        mapping.add_model_hint("A", "C");
        mapping.add_model_hint("B", "C");

        let err = mapping.verify(&previous, &next).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid rename mapping: more than one model is renamed to `C`"
        );
    }
}
