use crate::{
    driver::Capability,
    schema::{DiffContext, Index, Model},
};

use std::collections::HashSet;

pub(super) struct IndexesDiff<'a> {
    pub(super) items: Vec<IndexesDiffItem<'a>>,
}

pub(super) enum IndexesDiffItem<'a> {
    CreateIndex(&'a Index),
    DeleteIndex(&'a Index),

    /// Same name, different content. The index is dropped and recreated
    /// under the same name.
    ReplaceIndex {
        previous: &'a Index,
        next: &'a Index,
    },

    /// Same content under a new name.
    RenameIndex {
        previous: &'a Index,
        next: &'a Index,
    },
}

impl<'a> IndexesDiff<'a> {
    pub(super) fn from(
        cx: &DiffContext<'a>,
        capability: &Capability,
        previous_model: &'a Model,
        next_model: &'a Model,
    ) -> Self {
        let mut items = vec![];

        let same_content = |previous: &Index, next: &Index| {
            previous.unique == next.unique
                && previous.fields.len() == next.fields.len()
                && previous.fields.iter().zip(&next.fields).all(|(prev, next)| {
                    let mapped = previous_model
                        .field_by_name(prev)
                        .and_then(|field| cx.next_field_for(previous_model, next_model, field))
                        .map(|field| field.name.as_str());
                    mapped.unwrap_or(prev.as_str()) == next.as_str()
                })
        };

        let mut removed: Vec<&'a Index> = vec![];
        for previous in &previous_model.indexes {
            match next_model.index_by_name(&previous.name) {
                Some(next) if same_content(previous, next) => {}
                Some(next) => items.push(IndexesDiffItem::ReplaceIndex { previous, next }),
                None => removed.push(previous),
            }
        }

        let mut renamed: HashSet<&str> = HashSet::new();
        for next in &next_model.indexes {
            if previous_model.index_by_name(&next.name).is_some() {
                continue;
            }

            let source = removed.iter().copied().find(|previous| {
                !renamed.contains(previous.name.as_str()) && same_content(*previous, next)
            });

            match source {
                Some(previous) if capability.schema_mutations.rename_index => {
                    renamed.insert(previous.name.as_str());
                    items.push(IndexesDiffItem::RenameIndex { previous, next });
                }
                _ => items.push(IndexesDiffItem::CreateIndex(next)),
            }
        }

        for previous in removed {
            if !renamed.contains(previous.name.as_str()) {
                items.push(IndexesDiffItem::DeleteIndex(previous));
            }
        }

        Self { items }
    }
}
