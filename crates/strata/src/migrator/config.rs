use strata_sql::migration::BREAKPOINT;

/// Settings shared by every migration a [`Migrator`](super::Migrator) runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratorConfig {
    namespace: String,
    accept_warnings: bool,
    breakpoint: String,
}

impl MigratorConfig {
    /// Settings for the project stored under `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            accept_warnings: false,
            breakpoint: BREAKPOINT.to_string(),
        }
    }

    /// Apply migrations that only produce warnings without asking.
    pub fn accept_warnings(mut self, accept: bool) -> Self {
        self.accept_warnings = accept;
        self
    }

    /// Marker joining statements in the [`Migration`](strata_sql::Migration)
    /// handed to the executor.
    pub fn breakpoint(mut self, marker: impl Into<String>) -> Self {
        self.breakpoint = marker.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn accepts_warnings(&self) -> bool {
        self.accept_warnings
    }

    pub fn breakpoint_marker(&self) -> &str {
        &self.breakpoint
    }
}
