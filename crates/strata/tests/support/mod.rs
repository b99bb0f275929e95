#![allow(dead_code)]

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use strata::{QueryRunner, SchemaExecutor};
use strata_core::{
    async_trait,
    schema::{Field, Model, Relation, RelationSide},
    DataQueries, Result,
};
use strata_sql::Migration;

/// In-memory answers to the checker's questions. Every question asked is
/// recorded.
#[derive(Debug, Default, Clone)]
pub struct FakeData {
    populated: HashSet<String>,
    nulls: HashSet<(String, String)>,
    duplicates: HashSet<(String, String)>,
    pairs: HashSet<String>,
    duplicate_pairs: HashSet<(String, RelationSide)>,
    enum_values: HashSet<(String, String, String)>,
    pub asked: Arc<Mutex<Vec<String>>>,
}

impl FakeData {
    pub fn rows(mut self, model: &str) -> Self {
        self.populated.insert(model.to_string());
        self
    }

    pub fn nulls(mut self, model: &str, field: &str) -> Self {
        self.populated.insert(model.to_string());
        self.nulls.insert((model.to_string(), field.to_string()));
        self
    }

    pub fn duplicates(mut self, model: &str, field: &str) -> Self {
        self.populated.insert(model.to_string());
        self.duplicates
            .insert((model.to_string(), field.to_string()));
        self
    }

    pub fn pairs(mut self, relation: &str) -> Self {
        self.pairs.insert(relation.to_string());
        self
    }

    pub fn duplicate_pairs(mut self, relation: &str, side: RelationSide) -> Self {
        self.pairs.insert(relation.to_string());
        self.duplicate_pairs.insert((relation.to_string(), side));
        self
    }

    pub fn enum_value(mut self, model: &str, field: &str, value: &str) -> Self {
        self.populated.insert(model.to_string());
        self.enum_values
            .insert((model.to_string(), field.to_string(), value.to_string()));
        self
    }

    pub fn asked(&self) -> Vec<String> {
        let mut asked = self.asked.lock().unwrap().clone();
        asked.sort();
        asked
    }

    fn ask(&self, question: String) {
        self.asked.lock().unwrap().push(question);
    }
}

#[async_trait]
impl DataQueries for FakeData {
    async fn exists_rows(&self, model: &Model) -> Result<bool> {
        self.ask(format!("rows {}", model.name));
        Ok(self.populated.contains(&model.name))
    }

    async fn exists_null(&self, model: &Model, field: &Field) -> Result<bool> {
        self.ask(format!("nulls {}.{}", model.name, field.name));
        Ok(self
            .nulls
            .contains(&(model.name.clone(), field.name.clone())))
    }

    async fn exists_duplicates(&self, model: &Model, field: &Field) -> Result<bool> {
        self.ask(format!("duplicates {}.{}", model.name, field.name));
        Ok(self
            .duplicates
            .contains(&(model.name.clone(), field.name.clone())))
    }

    async fn exists_relation_pairs(&self, relation: &Relation) -> Result<bool> {
        self.ask(format!("pairs {}", relation.name));
        Ok(self.pairs.contains(&relation.name))
    }

    async fn exists_duplicate_relation_pairs(
        &self,
        relation: &Relation,
        side: RelationSide,
    ) -> Result<bool> {
        self.ask(format!("duplicate pairs {} {:?}", relation.name, side));
        Ok(self
            .duplicate_pairs
            .contains(&(relation.name.clone(), side)))
    }

    async fn exists_enum_value(&self, model: &Model, field: &Field, value: &str) -> Result<bool> {
        self.ask(format!("enum value {}.{} {value}", model.name, field.name));
        Ok(self.enum_values.contains(&(
            model.name.clone(),
            field.name.clone(),
            value.to_string(),
        )))
    }
}

/// Records every migration it is asked to apply.
#[derive(Debug, Default, Clone)]
pub struct RecordingExecutor {
    pub applied: Arc<Mutex<Vec<Migration>>>,
}

impl RecordingExecutor {
    pub fn applied(&self) -> Vec<Migration> {
        self.applied.lock().unwrap().clone()
    }
}

#[async_trait]
impl SchemaExecutor for RecordingExecutor {
    async fn apply_migration(&self, migration: &Migration) -> Result<()> {
        self.applied.lock().unwrap().push(migration.clone());
        Ok(())
    }
}

/// Answers every probe with `answer` and records the SQL it was sent.
#[derive(Debug, Default, Clone)]
pub struct RecordingRunner {
    pub answer: bool,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl RecordingRunner {
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryRunner for RecordingRunner {
    async fn query_exists(&self, sql: &str) -> Result<bool> {
        self.queries.lock().unwrap().push(sql.to_string());
        Ok(self.answer)
    }
}
