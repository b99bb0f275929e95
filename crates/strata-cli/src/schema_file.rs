use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};
use strata_core::schema::{RenameMapping, Schema};

const SCHEMA_FILE_VERSION: u32 = 1;

/// A schema snapshot on disk, together with the renames that lead to it
/// from the snapshot before.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Schema file format version
    version: u32,

    pub schema: Schema,

    #[serde(default)]
    pub renames: RenameMapping,
}

impl SchemaFile {
    pub fn new(schema: Schema) -> Self {
        Self {
            version: SCHEMA_FILE_VERSION,
            schema,
            renames: RenameMapping::default(),
        }
    }

    /// Attach the renames leading to this schema
    pub fn renames(mut self, renames: RenameMapping) -> Self {
        self.renames = renames;
        self
    }

    /// Load a schema file from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file: SchemaFile = contents.parse()?;
        tracing::debug!(
            path = %path.display(),
            models = file.schema.models.len(),
            "loaded schema file"
        );
        Ok(file)
    }

    /// Save the schema file to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_string())?;
        Ok(())
    }
}

impl FromStr for SchemaFile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let file: SchemaFile = toml::from_str(s)?;

        if file.version != SCHEMA_FILE_VERSION {
            bail!(
                "Unsupported schema file version: {}. Expected version {}",
                file.version,
                SCHEMA_FILE_VERSION
            );
        }

        // Files are edited by hand; run them through the same checks as a
        // schema built in code.
        let Schema {
            models,
            relations,
            enums,
        } = file.schema;
        let builder = models
            .into_iter()
            .fold(Schema::builder(), |builder, model| builder.model(model));
        let builder = relations
            .into_iter()
            .fold(builder, |builder, relation| builder.relation(relation));
        let schema = enums
            .into_iter()
            .fold(builder, |builder, e| builder.enum_(e))
            .build()?;

        Ok(SchemaFile {
            version: file.version,
            schema,
            renames: file.renames,
        })
    }
}

impl fmt::Display for SchemaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toml = toml::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&toml)
    }
}
