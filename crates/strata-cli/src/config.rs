use clap::ValueEnum;
use strata_core::Capability;
use strata_sql::Serializer;

/// Configuration for Strata CLI operations
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace (schema or database) the project's tables live in
    pub namespace: String,

    /// Database flavor used when a command does not pick one
    pub flavor: Flavor,
}

/// SQL dialect targeted by a migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Flavor {
    Postgresql,
    Mysql,
    Sqlite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "public".to_string(),
            flavor: Flavor::Postgresql,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `STRATA_NAMESPACE` and `STRATA_FLAVOR`.
    /// Unrecognized flavors are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(namespace) = std::env::var("STRATA_NAMESPACE") {
            config.namespace = namespace;
        }
        if let Some(flavor) = std::env::var("STRATA_FLAVOR")
            .ok()
            .and_then(|value| Flavor::from_str(&value, true).ok())
        {
            config.flavor = flavor;
        }
        config
    }

    /// Set the namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the default flavor
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }
}

impl Flavor {
    pub fn capability(self) -> &'static Capability {
        match self {
            Flavor::Postgresql => &Capability::POSTGRESQL,
            Flavor::Mysql => &Capability::MYSQL,
            Flavor::Sqlite => &Capability::SQLITE,
        }
    }

    pub fn serializer(self) -> Serializer {
        match self {
            Flavor::Postgresql => Serializer::postgresql(),
            Flavor::Mysql => Serializer::mysql(),
            Flavor::Sqlite => Serializer::sqlite(),
        }
    }
}
