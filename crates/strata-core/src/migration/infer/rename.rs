use std::collections::HashSet;

/// Prefix marking the transient name of a two-phase rename.
pub(super) const TRANSIENT_PREFIX: &str = "__";

/// A planned rename of one entity.
#[derive(Debug, Clone)]
pub(super) struct Rename {
    pub(super) to: String,

    /// Set when the rename goes through a transient name.
    pub(super) transient: Option<String>,
}

impl Rename {
    /// The name held once the first phase is applied.
    pub(super) fn first_target(&self) -> &str {
        self.transient.as_deref().unwrap_or(&self.to)
    }

    /// The second phase, as `(transient, final)`.
    pub(super) fn second_phase(&self) -> Option<(&str, &str)> {
        self.transient
            .as_deref()
            .map(|transient| (transient, self.to.as_str()))
    }
}

/// Hands out transient names that collide with nothing in either schema nor
/// with each other.
#[derive(Debug, Default)]
pub(super) struct TransientNames {
    taken: HashSet<String>,
}

impl TransientNames {
    pub(super) fn reserve<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.taken.extend(names.into_iter().map(str::to_string));
    }

    /// Plans a rename to `to`, through a transient name when `two_phase`.
    pub(super) fn rename(&mut self, to: &str, two_phase: bool) -> Rename {
        Rename {
            to: to.to_string(),
            transient: two_phase.then(|| self.transient_for(to)),
        }
    }

    fn transient_for(&mut self, to: &str) -> String {
        let mut name = format!("{TRANSIENT_PREFIX}{to}");
        while self.taken.contains(&name) {
            name.insert_str(0, TRANSIENT_PREFIX);
        }
        self.taken.insert(name.clone());
        name
    }
}
