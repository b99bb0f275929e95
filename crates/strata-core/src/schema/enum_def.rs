use std::collections::HashSet;

/// A named set of string values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enum {
    pub name: String,

    /// Values in declaration order. Order is kept for display but ignored when
    /// comparing two enums.
    pub values: Vec<String>,
}

impl Enum {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Enum
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Enum {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// True when both enums hold the same values, in any order.
    pub fn same_values(&self, other: &Enum) -> bool {
        let lhs: HashSet<&str> = self.values.iter().map(String::as_str).collect();
        let rhs: HashSet<&str> = other.values.iter().map(String::as_str).collect();
        lhs == rhs
    }

    /// Values present here that `next` no longer has.
    pub fn removed_values<'a>(&'a self, next: &'a Enum) -> impl Iterator<Item = &'a str> + 'a {
        self.values
            .iter()
            .map(String::as_str)
            .filter(move |value| !next.has_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_order_is_ignored() {
        let previous = Enum::new("Color", ["RED", "GREEN"]);
        let next = Enum::new("Color", ["GREEN", "RED"]);
        assert!(previous.same_values(&next));
    }

    #[test]
    fn removed_values_keep_declaration_order() {
        let previous = Enum::new("Color", ["RED", "GREEN", "BLUE"]);
        let next = Enum::new("Color", ["GREEN"]);
        assert_eq!(
            previous.removed_values(&next).collect::<Vec<_>>(),
            ["RED", "BLUE"]
        );
    }
}
