use super::rename::{Rename, TransientNames};

use crate::schema::{DiffContext, Enum};

use std::collections::HashSet;

pub(super) struct EnumsDiff<'a> {
    pub(super) items: Vec<EnumsDiffItem<'a>>,
}

pub(super) enum EnumsDiffItem<'a> {
    CreateEnum(&'a Enum),
    DeleteEnum(&'a Enum),

    /// Only recorded when the name or the value set changed.
    AlterEnum {
        previous: &'a Enum,
        rename: Option<Rename>,
        values: Option<&'a [String]>,
    },
}

impl<'a> EnumsDiff<'a> {
    pub(super) fn from(cx: &DiffContext<'a>, names: &mut TransientNames) -> Self {
        let mut items = vec![];
        let mut matched: HashSet<&str> = HashSet::new();

        for next in &cx.next().enums {
            let Some(previous) = cx.previous_enum_for(next) else {
                items.push(EnumsDiffItem::CreateEnum(next));
                continue;
            };
            matched.insert(previous.name.as_str());

            let rename = (previous.name != next.name).then(|| {
                let occupied = cx.previous().enum_(&next.name).is_some();
                names.rename(&next.name, occupied)
            });
            let values = (!previous.same_values(next)).then_some(next.values.as_slice());

            if rename.is_some() || values.is_some() {
                items.push(EnumsDiffItem::AlterEnum {
                    previous,
                    rename,
                    values,
                });
            }
        }

        for previous in &cx.previous().enums {
            if !matched.contains(previous.name.as_str()) {
                items.push(EnumsDiffItem::DeleteEnum(previous));
            }
        }

        Self { items }
    }
}
