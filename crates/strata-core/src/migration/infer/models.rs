use super::{
    indexes::IndexesDiff,
    rename::{Rename, TransientNames},
};

use crate::{
    driver::Capability,
    schema::{DiffContext, Field, Model},
};

use std::collections::HashSet;

pub(super) struct ModelsDiff<'a> {
    pub(super) items: Vec<ModelsDiffItem<'a>>,
}

pub(super) enum ModelsDiffItem<'a> {
    CreateModel(&'a Model),
    DeleteModel(&'a Model),

    /// A model present on both sides, whether or not anything changed.
    AlterModel {
        previous: &'a Model,
        next: &'a Model,
        rename: Option<Rename>,
        fields: FieldsDiff<'a>,
        indexes: IndexesDiff<'a>,
    },
}

pub(super) struct FieldsDiff<'a> {
    pub(super) items: Vec<FieldsDiffItem<'a>>,
}

pub(super) enum FieldsDiffItem<'a> {
    CreateField(&'a Field),
    DeleteField(&'a Field),
    AlterField {
        previous: &'a Field,
        next: &'a Field,
        rename: Option<Rename>,
    },
}

impl<'a> ModelsDiff<'a> {
    pub(super) fn from(
        cx: &DiffContext<'a>,
        capability: &Capability,
        names: &mut TransientNames,
    ) -> Self {
        let mut items = vec![];
        let mut matched: HashSet<&str> = HashSet::new();

        for next in &cx.next().models {
            let Some(previous) = cx.previous_model_for(next) else {
                items.push(ModelsDiffItem::CreateModel(next));
                continue;
            };
            matched.insert(previous.name.as_str());

            // Models always rename through a transient name so that the
            // final name is only claimed once every model has vacated its
            // previous one.
            let rename = (previous.name != next.name).then(|| names.rename(&next.name, true));

            items.push(ModelsDiffItem::AlterModel {
                previous,
                next,
                rename,
                fields: FieldsDiff::from(cx, previous, next, names),
                indexes: IndexesDiff::from(cx, capability, previous, next),
            });
        }

        for previous in &cx.previous().models {
            if !matched.contains(previous.name.as_str()) {
                items.push(ModelsDiffItem::DeleteModel(previous));
            }
        }

        Self { items }
    }
}

impl<'a> FieldsDiff<'a> {
    pub(super) fn from(
        cx: &DiffContext<'a>,
        previous_model: &'a Model,
        next_model: &'a Model,
        names: &mut TransientNames,
    ) -> Self {
        let mut items = vec![];
        let mut matched: HashSet<&str> = HashSet::new();

        for next in &next_model.fields {
            let Some(previous) = cx.previous_field_for(previous_model, next_model, next) else {
                items.push(FieldsDiffItem::CreateField(next));
                continue;
            };
            matched.insert(previous.name.as_str());

            if !previous.has_diff(next) {
                continue;
            }

            let rename = (previous.name != next.name).then(|| {
                let occupied = previous_model.field_by_name(&next.name).is_some();
                names.rename(&next.name, occupied)
            });

            items.push(FieldsDiffItem::AlterField {
                previous,
                next,
                rename,
            });
        }

        for previous in &previous_model.fields {
            if !matched.contains(previous.name.as_str()) {
                items.push(FieldsDiffItem::DeleteField(previous));
            }
        }

        Self { items }
    }
}
