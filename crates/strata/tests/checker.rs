mod support;
use support::FakeData;

use pretty_assertions::assert_eq;
use strata::{DestructiveChangeChecker, Verdict, Violation, Warning};
use strata_core::{
    schema::{
        DefaultValue, DiffContext, Enum, Field, Model, Relation, RelationSide, RenameMapping,
        TypeIdentifier,
    },
    Capability, MigrationStepsInferrer, Schema,
};

async fn check(previous: &Schema, next: &Schema, data: &FakeData) -> Verdict {
    let mapping = RenameMapping::new();
    let steps = MigrationStepsInferrer::new(&Capability::POSTGRESQL)
        .evaluate(previous, next, &mapping)
        .unwrap();
    let cx = DiffContext::new(previous, next, &mapping);
    DestructiveChangeChecker::new(data, &cx)
        .check(&steps)
        .await
        .unwrap()
}

/// `Todo` with an id plus `fields`.
fn todo(fields: impl IntoIterator<Item = Field>) -> Schema {
    let model = fields
        .into_iter()
        .fold(Model::new("Todo").field(Field::id("id")), Model::field);
    Schema::builder().model(model).build().unwrap()
}

fn bare_todo() -> Schema {
    todo(Vec::<Field>::new())
}

fn title() -> Field {
    Field::scalar("title", TypeIdentifier::String)
}

fn todo_with_status(values: &[&str], with_field: bool) -> Schema {
    let mut model = Model::new("Todo").field(Field::id("id"));
    if with_field {
        model = model.field(Field::enum_("status", "Status"));
    }
    Schema::builder()
        .model(model)
        .enum_(Enum::new("Status", values.iter().copied()))
        .build()
        .unwrap()
}

fn todo_and_comment() -> Schema {
    Schema::builder()
        .model(Model::new("Todo").field(Field::id("id")))
        .model(Model::new("Comment").field(Field::id("id")))
        .build()
        .unwrap()
}

/// `Todo` has many `Comment`s; each comment belongs to one todo.
fn todo_with_comments(required: bool) -> Schema {
    let mut todo = Field::relation("todo", "Todo", "TodoToComment", RelationSide::B);
    if required {
        todo = todo.required();
    }
    Schema::builder()
        .model(Model::new("Todo").field(Field::id("id")).field(
            Field::relation("comments", "Comment", "TodoToComment", RelationSide::A).list(),
        ))
        .model(Model::new("Comment").field(Field::id("id")).field(todo))
        .relation(Relation::new("TodoToComment", "Todo", "Comment"))
        .build()
        .unwrap()
}

/// `Todo` has many `Comment`s, with `Todo` on `todo_side` of the relation.
/// The comment's way back to its todo only exists with `back_relation`.
fn todo_comments(todo_side: RelationSide, back_relation: bool) -> Schema {
    let relation = match todo_side {
        RelationSide::A => Relation::new("TodoToComment", "Todo", "Comment"),
        RelationSide::B => Relation::new("TodoToComment", "Comment", "Todo"),
    };
    let mut comment = Model::new("Comment").field(Field::id("id"));
    if back_relation {
        comment = comment.field(Field::relation(
            "todo",
            "Todo",
            "TodoToComment",
            todo_side.opposite(),
        ));
    }
    Schema::builder()
        .model(Model::new("Todo").field(Field::id("id")).field(
            Field::relation("comments", "Comment", "TodoToComment", todo_side).list(),
        ))
        .model(comment)
        .relation(relation)
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Safe changes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_models_never_touch_the_database() {
    let previous = todo([title()]);
    let next = Schema::builder()
        .model(Model::new("Todo").field(Field::id("id")).field(title()))
        .model(
            Model::new("Tag")
                .field(Field::id("id"))
                .field(Field::scalar("name", TypeIdentifier::String).required()),
        )
        .build()
        .unwrap();

    let data = FakeData::default().rows("Todo");
    let verdict = check(&previous, &next, &data).await;

    assert!(verdict.is_safe());
    assert_eq!(data.asked(), Vec::<String>::new());
}

#[tokio::test]
async fn deleting_an_empty_model_is_safe() {
    let previous = todo_and_comment();
    let next = bare_todo();

    let verdict = check(&previous, &next, &FakeData::default()).await;
    assert!(verdict.is_safe());
}

#[tokio::test]
async fn required_field_with_default_is_safe_on_populated_model() {
    let previous = todo([title()]);
    let next = todo([
        title(),
        Field::scalar("priority", TypeIdentifier::Int)
            .required()
            .default(DefaultValue::Int(1)),
    ]);

    let verdict = check(&previous, &next, &FakeData::default().rows("Todo")).await;
    assert!(verdict.is_safe());
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

#[tokio::test]
async fn deleting_a_populated_model_warns() {
    let previous = todo_and_comment();
    let next = bare_todo();

    let verdict = check(&previous, &next, &FakeData::default().rows("Comment")).await;
    assert_eq!(
        verdict,
        Verdict::Warnings(vec![Warning::ModelHasRows {
            model: "Comment".to_string()
        }])
    );
}

#[tokio::test]
async fn deleting_a_field_of_a_populated_model_warns() {
    let verdict = check(
        &todo([title()]),
        &bare_todo(),
        &FakeData::default().rows("Todo"),
    )
    .await;

    assert_eq!(
        verdict.warnings(),
        [Warning::FieldHasData {
            model: "Todo".to_string(),
            field: "title".to_string(),
        }]
    );
}

#[tokio::test]
async fn optional_type_change_warns() {
    let previous = todo([title()]);
    let next = todo([Field::scalar("title", TypeIdentifier::Int)]);

    let verdict = check(&previous, &next, &FakeData::default().rows("Todo")).await;
    assert_eq!(
        verdict,
        Verdict::Warnings(vec![Warning::FieldChangeLosesData {
            model: "Todo".to_string(),
            field: "title".to_string(),
        }])
    );
}

#[tokio::test]
async fn deleting_a_connected_relation_warns() {
    let verdict = check(
        &todo_with_comments(false),
        &todo_and_comment(),
        &FakeData::default().pairs("TodoToComment"),
    )
    .await;

    assert_eq!(
        verdict,
        Verdict::Warnings(vec![Warning::RelationHasPairs {
            relation: "TodoToComment".to_string()
        }])
    );
}

#[tokio::test]
async fn retargeting_a_relation_drops_its_pairs() {
    let user = || Model::new("User").field(Field::id("id"));
    let previous = Schema::builder()
        .model(Model::new("Todo").field(Field::id("id")).field(
            Field::relation("comments", "Comment", "TodoToComment", RelationSide::A).list(),
        ))
        .model(Model::new("Comment").field(Field::id("id")).field(Field::relation(
            "todo",
            "Todo",
            "TodoToComment",
            RelationSide::B,
        )))
        .model(user())
        .relation(Relation::new("TodoToComment", "Todo", "Comment"))
        .build()
        .unwrap();
    let next = Schema::builder()
        .model(Model::new("Todo").field(Field::id("id")))
        .model(Model::new("Comment").field(Field::id("id")).field(Field::relation(
            "todo",
            "User",
            "TodoToComment",
            RelationSide::B,
        )))
        .model(user().field(
            Field::relation("comments", "Comment", "TodoToComment", RelationSide::A).list(),
        ))
        .relation(Relation::new("TodoToComment", "User", "Comment"))
        .build()
        .unwrap();

    let verdict = check(&previous, &next, &FakeData::default().pairs("TodoToComment")).await;
    assert_eq!(
        verdict,
        Verdict::Warnings(vec![Warning::RelationHasPairs {
            relation: "TodoToComment".to_string()
        }])
    );
}

#[tokio::test]
async fn swapping_relation_sides_drops_its_pairs() {
    let verdict = check(
        &todo_comments(RelationSide::A, true),
        &todo_comments(RelationSide::B, true),
        &FakeData::default().pairs("TodoToComment"),
    )
    .await;

    assert_eq!(
        verdict,
        Verdict::Warnings(vec![Warning::RelationHasPairs {
            relation: "TodoToComment".to_string()
        }])
    );
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn required_field_without_default_on_populated_model() {
    let previous = bare_todo();
    let next = todo([title().required()]);

    let verdict = check(&previous, &next, &FakeData::default().rows("Todo")).await;
    assert_eq!(
        verdict,
        Verdict::Errors(vec![Violation::RequiredFieldOnPopulatedModel {
            model: "Todo".to_string(),
            field: "title".to_string(),
        }])
    );

    // The same change on an empty table is fine.
    let verdict = check(&previous, &next, &FakeData::default()).await;
    assert!(verdict.is_safe());
}

#[tokio::test]
async fn nulls_block_making_a_field_required() {
    let previous = todo([title()]);
    let next = todo([title().required()]);

    let verdict = check(&previous, &next, &FakeData::default().nulls("Todo", "title")).await;
    assert_eq!(
        verdict.errors(),
        [Violation::NullsInRequiredField {
            model: "Todo".to_string(),
            field: "title".to_string(),
        }]
    );

    let verdict = check(&previous, &next, &FakeData::default().rows("Todo")).await;
    assert!(verdict.is_safe());
}

#[tokio::test]
async fn duplicates_block_making_a_field_unique() {
    let previous = todo([title()]);
    let next = todo([title().unique()]);

    let data = FakeData::default().duplicates("Todo", "title");
    let verdict = check(&previous, &next, &data).await;
    assert_eq!(
        verdict.errors(),
        [Violation::DuplicatesInUniqueField {
            model: "Todo".to_string(),
            field: "title".to_string(),
        }]
    );
    assert_eq!(data.asked(), vec!["duplicates Todo.title"]);
}

#[tokio::test]
async fn errors_replace_warnings() {
    // Retyping a required field both loses data and cannot be applied.
    let previous = todo([title().required()]);
    let next = todo([Field::scalar("title", TypeIdentifier::Int).required()]);

    let verdict = check(&previous, &next, &FakeData::default().rows("Todo")).await;
    assert_eq!(
        verdict,
        Verdict::Errors(vec![Violation::TypeChangeOnRequiredField {
            model: "Todo".to_string(),
            field: "title".to_string(),
        }])
    );
    assert!(verdict.warnings().is_empty());
}

#[tokio::test]
async fn removed_enum_value_still_in_use() {
    let previous = todo_with_status(&["OPEN", "DONE"], true);
    let next = todo_with_status(&["OPEN"], true);

    let data = FakeData::default().enum_value("Todo", "status", "DONE");
    let verdict = check(&previous, &next, &data).await;
    assert_eq!(
        verdict,
        Verdict::Errors(vec![Violation::EnumValueInUse {
            enum_name: "Status".to_string(),
            value: "DONE".to_string(),
        }])
    );

    let verdict = check(&previous, &next, &FakeData::default().rows("Todo")).await;
    assert!(verdict.is_safe());
}

#[tokio::test]
async fn removed_enum_value_ignores_deleted_fields() {
    let previous = todo_with_status(&["OPEN", "DONE"], true);
    let next = todo_with_status(&["OPEN"], false);

    let data = FakeData::default().enum_value("Todo", "status", "DONE");
    let verdict = check(&previous, &next, &data).await;
    assert_eq!(
        verdict,
        Verdict::Warnings(vec![Warning::FieldHasData {
            model: "Todo".to_string(),
            field: "status".to_string(),
        }])
    );
}

#[tokio::test]
async fn required_relation_on_populated_model() {
    let verdict = check(
        &todo_and_comment(),
        &todo_with_comments(true),
        &FakeData::default().rows("Comment"),
    )
    .await;

    assert_eq!(
        verdict,
        Verdict::Errors(vec![Violation::RequiredRelationOnPopulatedModel {
            relation: "TodoToComment".to_string(),
            model: "Comment".to_string(),
        }])
    );
}

#[tokio::test]
async fn list_field_becoming_required_scalar_on_populated_model() {
    let previous = todo([Field::scalar("tags", TypeIdentifier::String).list()]);
    let next = todo([Field::scalar("tags", TypeIdentifier::String).required()]);

    let verdict = check(&previous, &next, &FakeData::default().rows("Todo")).await;
    assert_eq!(
        verdict,
        Verdict::Errors(vec![Violation::TypeChangeOnRequiredField {
            model: "Todo".to_string(),
            field: "tags".to_string(),
        }])
    );
}

#[tokio::test]
async fn singular_back_relation_over_duplicate_pairs() {
    for todo_side in RelationSide::ALL {
        let previous = todo_comments(todo_side, false);
        let next = todo_comments(todo_side, true);
        let comment_side = todo_side.opposite();

        let verdict = check(
            &previous,
            &next,
            &FakeData::default().duplicate_pairs("TodoToComment", comment_side),
        )
        .await;
        assert_eq!(
            verdict,
            Verdict::Errors(vec![Violation::DuplicateRelationPairs {
                model: "Comment".to_string(),
                field: "todo".to_string(),
                relation: "TodoToComment".to_string(),
            }]),
            "todo on side {todo_side:?}"
        );

        // A todo linked to many comments is what the relation already allows.
        let verdict = check(
            &previous,
            &next,
            &FakeData::default().duplicate_pairs("TodoToComment", todo_side),
        )
        .await;
        assert!(verdict.is_safe(), "todo on side {todo_side:?}: {verdict:?}");
    }
}

#[test]
fn violations_read_as_sentences() {
    let violation = Violation::NullsInRequiredField {
        model: "Todo".to_string(),
        field: "title".to_string(),
    };
    assert_eq!(
        violation.to_string(),
        "field `Todo.title` becomes required but some records have no value"
    );
}
