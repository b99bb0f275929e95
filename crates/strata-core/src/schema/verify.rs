use super::{FieldTy, Model, Schema};

use crate::{Error, Result};

use std::collections::{HashMap, HashSet};

struct Verify<'a> {
    schema: &'a Schema,
    problems: Vec<String>,
}

impl Schema {
    pub(crate) fn verify(&self) -> Result<()> {
        let mut verify = Verify {
            schema: self,
            problems: vec![],
        };
        verify.verify();

        if verify.problems.is_empty() {
            Ok(())
        } else {
            Err(Error::invalid_schema(verify.problems.join("; ")))
        }
    }
}

impl Verify<'_> {
    fn verify(&mut self) {
        let schema = self.schema;
        self.verify_unique_names();

        for model in &schema.models {
            self.verify_model(model);
        }
        self.verify_index_names();

        for relation in &schema.relations {
            for model in [&relation.model_a, &relation.model_b] {
                if schema.model(model).is_none() {
                    self.problems.push(format!(
                        "relation `{}` references unknown model `{model}`",
                        relation.name
                    ));
                }
            }
        }
    }

    fn verify_unique_names(&mut self) {
        let problems = &mut self.problems;
        let mut check = |kind: &str, names: Vec<&str>| {
            let mut seen = HashSet::new();
            for name in names {
                if !seen.insert(name) {
                    problems.push(format!("duplicate {kind} name `{name}`"));
                }
            }
        };

        check(
            "model",
            self.schema.models.iter().map(|m| m.name.as_str()).collect(),
        );
        check(
            "relation",
            self.schema
                .relations
                .iter()
                .map(|r| r.name.as_str())
                .collect(),
        );
        check(
            "enum",
            self.schema.enums.iter().map(|e| e.name.as_str()).collect(),
        );
    }

    /// Index names share one namespace per database schema on most
    /// flavors, so two tables can't reuse one.
    fn verify_index_names(&mut self) {
        let schema = self.schema;
        let mut owners: HashMap<&str, &str> = HashMap::new();
        for model in schema.models.iter().filter(|model| !model.is_embedded) {
            for index in &model.indexes {
                match owners.get(index.name.as_str()) {
                    Some(owner) if *owner != model.name => {
                        self.problems.push(format!(
                            "index name `{}` is used by both `{owner}` and `{}`",
                            index.name, model.name
                        ));
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(&index.name, &model.name);
                    }
                }
            }
        }
    }

    fn verify_model(&mut self, model: &Model) {
        let mut field_names = HashSet::new();
        for field in &model.fields {
            if !field_names.insert(field.name.as_str()) {
                self.problems.push(format!(
                    "duplicate field name `{}` in model `{}`",
                    field.name, model.name
                ));
            }
        }

        let ids = model.fields.iter().filter(|field| field.is_id()).count();
        match (model.is_embedded, ids) {
            (false, 1) | (true, 0) => {}
            (false, 0) => self
                .problems
                .push(format!("model `{}` has no identity field", model.name)),
            (false, _) => self.problems.push(format!(
                "model `{}` has more than one identity field",
                model.name
            )),
            (true, _) => self.problems.push(format!(
                "embedded model `{}` must not declare an identity field",
                model.name
            )),
        }

        let mut sides = HashSet::new();
        for field in &model.fields {
            match &field.ty {
                FieldTy::Scalar(_) => {}
                FieldTy::Enum(enum_) => {
                    if self.schema.enum_(&enum_.name).is_none() {
                        self.problems.push(format!(
                            "field `{}.{}` references unknown enum `{}`",
                            model.name, field.name, enum_.name
                        ));
                    }
                }
                FieldTy::Relation(rel) => {
                    let Some(relation) = self.schema.relation(&rel.relation) else {
                        self.problems.push(format!(
                            "field `{}.{}` references unknown relation `{}`",
                            model.name, field.name, rel.relation
                        ));
                        continue;
                    };

                    if relation.model(rel.side) != model.name
                        || relation.model(rel.side.opposite()) != rel.target
                    {
                        self.problems.push(format!(
                            "field `{}.{}` does not match side {} of relation `{}`",
                            model.name, field.name, rel.side, relation.name
                        ));
                    }

                    if !sides.insert((rel.relation.as_str(), rel.side)) {
                        self.problems.push(format!(
                            "relation `{}` has more than one field on side {}",
                            rel.relation, rel.side
                        ));
                    }
                }
            }
        }

        let mut index_names = HashSet::new();
        for index in &model.indexes {
            if !index_names.insert(index.name.as_str()) {
                self.problems.push(format!(
                    "duplicate index name `{}` in model `{}`",
                    index.name, model.name
                ));
            }

            if index.fields.is_empty() {
                self.problems
                    .push(format!("index `{}` has no fields", index.name));
            }

            for field in &index.fields {
                match model.field_by_name(field) {
                    Some(f) if f.is_column() => {}
                    Some(_) => self.problems.push(format!(
                        "index `{}` covers `{}.{field}`, which is not stored as a column",
                        index.name, model.name
                    )),
                    None => self.problems.push(format!(
                        "index `{}` references unknown field `{}.{field}`",
                        index.name, model.name
                    )),
                }
            }
        }
    }
}
