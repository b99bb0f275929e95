use super::rename::{Rename, TransientNames};

use crate::schema::{DiffContext, OnDelete, Relation};

use std::collections::HashSet;

pub(super) struct RelationsDiff<'a> {
    pub(super) items: Vec<RelationsDiffItem<'a>>,
}

pub(super) enum RelationsDiffItem<'a> {
    CreateRelation(&'a Relation),
    DeleteRelation(&'a Relation),
    AlterRelation {
        previous: &'a Relation,
        rename: Option<Rename>,
        on_delete_a: Option<OnDelete>,
        on_delete_b: Option<OnDelete>,
    },
}

impl<'a> RelationsDiff<'a> {
    pub(super) fn from(cx: &DiffContext<'a>, names: &mut TransientNames) -> Self {
        let mut items = vec![];
        let mut matched: HashSet<&str> = HashSet::new();

        for next in &cx.next().relations {
            // A previous relation claimed by an earlier next relation can't
            // be claimed twice; the latecomer is a new relation.
            let previous = cx
                .previous_relation_for(next)
                .filter(|previous| !matched.contains(previous.name.as_str()));

            let Some(previous) = previous else {
                items.push(RelationsDiffItem::CreateRelation(next));
                continue;
            };
            matched.insert(previous.name.as_str());

            // The join table keys rows by side, so a relation that moved to
            // other models or swapped sides is rebuilt.
            if !cx.same_endpoints(previous, next) {
                items.push(RelationsDiffItem::DeleteRelation(previous));
                items.push(RelationsDiffItem::CreateRelation(next));
                continue;
            }

            let rename = (previous.name != next.name).then(|| {
                let occupied = cx.previous().relation(&next.name).is_some();
                names.rename(&next.name, occupied)
            });
            let on_delete_a =
                (previous.on_delete_a != next.on_delete_a).then_some(next.on_delete_a);
            let on_delete_b =
                (previous.on_delete_b != next.on_delete_b).then_some(next.on_delete_b);

            if rename.is_some() || on_delete_a.is_some() || on_delete_b.is_some() {
                items.push(RelationsDiffItem::AlterRelation {
                    previous,
                    rename,
                    on_delete_a,
                    on_delete_b,
                });
            }
        }

        for previous in &cx.previous().relations {
            if !matched.contains(previous.name.as_str()) {
                items.push(RelationsDiffItem::DeleteRelation(previous));
            }
        }

        Self { items }
    }
}
