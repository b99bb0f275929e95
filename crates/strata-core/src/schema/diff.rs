use super::{Enum, Field, FieldPath, Model, Relation, RelationSide, RenameMapping, Schema};

/// The inputs of one diff: both schemas and the rename mapping correlating
/// them.
///
/// Correlation follows one rule for every entity kind: an explicit mapping
/// entry wins, otherwise an entity keeps its name, unless that name was
/// explicitly handed to or taken from a different entity.
#[derive(Debug, Clone, Copy)]
pub struct DiffContext<'a> {
    previous: &'a Schema,
    next: &'a Schema,
    mapping: &'a RenameMapping,
}

impl<'a> DiffContext<'a> {
    pub fn new(previous: &'a Schema, next: &'a Schema, mapping: &'a RenameMapping) -> Self {
        Self {
            previous,
            next,
            mapping,
        }
    }

    pub fn previous(&self) -> &'a Schema {
        self.previous
    }

    pub fn next(&self) -> &'a Schema {
        self.next
    }

    pub fn mapping(&self) -> &'a RenameMapping {
        self.mapping
    }

    /// The previous model that `next` evolved from, if any.
    pub fn previous_model_for(&self, next: &Model) -> Option<&'a Model> {
        let name: &str = match self.mapping.get_model_source(&next.name) {
            Some(source) => source,
            None if self.mapping.get_model(&next.name).is_some() => return None,
            None => &next.name,
        };
        self.previous.model(name)
    }

    /// The next model that `previous` evolved into, if any.
    pub fn next_model_for(&self, previous: &Model) -> Option<&'a Model> {
        let name: &str = match self.mapping.get_model(&previous.name) {
            Some(target) => target,
            None if self.mapping.get_model_source(&previous.name).is_some() => return None,
            None => &previous.name,
        };
        self.next.model(name)
    }

    /// The field of `previous_model` that `next_field` of `next_model`
    /// evolved from, if any.
    pub fn previous_field_for(
        &self,
        previous_model: &'a Model,
        next_model: &Model,
        next_field: &Field,
    ) -> Option<&'a Field> {
        let to = FieldPath::new(&next_model.name, &next_field.name);
        let name: &str = match self.mapping.get_field_source(&to) {
            Some(source) if source.model == previous_model.name => source.field.as_str(),
            Some(_) => return None,
            None => {
                let same = FieldPath::new(&previous_model.name, &next_field.name);
                if self.mapping.get_field(&same).is_some() {
                    return None;
                }
                &next_field.name
            }
        };
        previous_model.field_by_name(name)
    }

    /// The field of `next_model` that `previous_field` of `previous_model`
    /// evolved into, if any.
    pub fn next_field_for(
        &self,
        previous_model: &Model,
        next_model: &'a Model,
        previous_field: &Field,
    ) -> Option<&'a Field> {
        let from = FieldPath::new(&previous_model.name, &previous_field.name);
        let name: &str = match self.mapping.get_field(&from) {
            Some(target) if target.model == next_model.name => target.field.as_str(),
            Some(_) => return None,
            None => {
                let same = FieldPath::new(&next_model.name, &previous_field.name);
                if self.mapping.get_field_source(&same).is_some() {
                    return None;
                }
                &previous_field.name
            }
        };
        next_model.field_by_name(name)
    }

    pub fn previous_enum_for(&self, next: &Enum) -> Option<&'a Enum> {
        let name: &str = match self.mapping.get_enum_source(&next.name) {
            Some(source) => source,
            None if self.mapping.get_enum(&next.name).is_some() => return None,
            None => &next.name,
        };
        self.previous.enum_(name)
    }

    pub fn next_enum_for(&self, previous: &Enum) -> Option<&'a Enum> {
        let name: &str = match self.mapping.get_enum(&previous.name) {
            Some(target) => target,
            None if self.mapping.get_enum_source(&previous.name).is_some() => return None,
            None => &previous.name,
        };
        self.next.enum_(name)
    }

    /// The previous relation that `next` evolved from.
    ///
    /// Relations are correlated through their fields, never by name: the
    /// side A field is tried first, then side B. A relation whose fields are
    /// all new has no counterpart.
    pub fn previous_relation_for(&self, next: &Relation) -> Option<&'a Relation> {
        RelationSide::ALL.into_iter().find_map(|side| {
            let (next_model, next_field) = self.next.relation_field(next, side)?;
            let previous_model = self.previous_model_for(next_model)?;
            let previous_field = self.previous_field_for(previous_model, next_model, next_field)?;
            let relation = previous_field.ty.as_relation()?;
            self.previous.relation(&relation.relation)
        })
    }

    /// True when `previous` still joins the same models on the same sides
    /// once model renames are applied.
    pub fn same_endpoints(&self, previous: &Relation, next: &Relation) -> bool {
        RelationSide::ALL.into_iter().all(|side| {
            self.previous
                .model(previous.model(side))
                .and_then(|model| self.next_model_for(model))
                .is_some_and(|model| model.name == next.model(side))
        })
    }

    /// Resolves a previous field path to the field itself.
    pub fn previous_field(&self, path: &FieldPath) -> Option<(&'a Model, &'a Field)> {
        let model = self.previous.model(&path.model)?;
        Some((model, model.field_by_name(&path.field)?))
    }

    /// Resolves a next field path to the field itself.
    pub fn next_field(&self, path: &FieldPath) -> Option<(&'a Model, &'a Field)> {
        let model = self.next.model(&path.model)?;
        Some((model, model.field_by_name(&path.field)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, Model, TypeIdentifier};

    fn schema(models: Vec<(&str, Vec<&str>)>) -> Schema {
        let mut builder = Schema::builder();
        for (name, fields) in models {
            let mut model = Model::new(name).field(Field::id("id"));
            for field in fields {
                model = model.field(Field::scalar(field, TypeIdentifier::String));
            }
            builder = builder.model(model);
        }
        builder.build().unwrap()
    }

    #[test]
    fn unmapped_names_correlate_by_name() {
        let previous = schema(vec![("Todo", vec!["title"])]);
        let next = schema(vec![("Todo", vec!["title"])]);
        let mapping = RenameMapping::new();
        let cx = DiffContext::new(&previous, &next, &mapping);

        let next_todo = next.model("Todo").unwrap();
        let previous_todo = cx.previous_model_for(next_todo).unwrap();
        assert_eq!(previous_todo.name, "Todo");

        let title = next_todo.field_by_name("title").unwrap();
        assert!(cx.previous_field_for(previous_todo, next_todo, title).is_some());
    }

    #[test]
    fn renamed_away_name_is_not_reused() {
        // `Todo` was renamed to `Task`, and a brand new `Todo` appeared.
        let previous = schema(vec![("Todo", vec![])]);
        let next = schema(vec![("Todo", vec![]), ("Task", vec![])]);
        let mut mapping = RenameMapping::new();
        mapping.add_model_hint("Todo", "Task");
        let cx = DiffContext::new(&previous, &next, &mapping);

        assert!(cx.previous_model_for(next.model("Todo").unwrap()).is_none());
        assert_eq!(
            cx.previous_model_for(next.model("Task").unwrap()).map(|m| m.name.as_str()),
            Some("Todo")
        );
        assert_eq!(
            cx.next_model_for(previous.model("Todo").unwrap()).map(|m| m.name.as_str()),
            Some("Task")
        );
    }

    #[test]
    fn field_swap() {
        let previous = schema(vec![("Todo", vec!["a", "b"])]);
        let next = schema(vec![("Todo", vec!["a", "b"])]);
        let mut mapping = RenameMapping::new();
        mapping.add_field_hint(FieldPath::new("Todo", "a"), FieldPath::new("Todo", "b"));
        mapping.add_field_hint(FieldPath::new("Todo", "b"), FieldPath::new("Todo", "a"));
        let cx = DiffContext::new(&previous, &next, &mapping);

        let previous_todo = previous.model("Todo").unwrap();
        let next_todo = next.model("Todo").unwrap();
        let next_b = next_todo.field_by_name("b").unwrap();
        assert_eq!(
            cx.previous_field_for(previous_todo, next_todo, next_b).map(|f| f.name.as_str()),
            Some("a")
        );

        let previous_b = previous_todo.field_by_name("b").unwrap();
        assert_eq!(
            cx.next_field_for(previous_todo, next_todo, previous_b).map(|f| f.name.as_str()),
            Some("a")
        );
    }
}
