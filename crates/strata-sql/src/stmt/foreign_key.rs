use super::Name;

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    /// Constraint name.
    pub name: String,

    /// Referencing columns.
    pub columns: Vec<String>,

    /// The referenced table.
    pub references: Name,

    /// Referenced columns, in the order of `columns`.
    pub referenced_columns: Vec<String>,

    /// When true, deleting a referenced row deletes the referencing rows.
    pub on_delete_cascade: bool,
}

impl ForeignKey {
    pub(crate) fn identifiers<'a>(&'a self, idents: &mut Vec<&'a str>) {
        idents.push(&self.name);
        idents.extend(self.columns.iter().map(String::as_str));
        idents.push(self.references.table());
        idents.extend(self.referenced_columns.iter().map(String::as_str));
    }
}
