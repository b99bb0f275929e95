mod support;
use support::RecordingRunner;

use pretty_assertions::assert_eq;
use strata::SqlDataQueries;
use strata_core::{
    schema::{Field, Model, Relation, RelationSide, TypeIdentifier},
    DataQueries,
};
use strata_sql::Serializer;

fn todo() -> Model {
    Model::new("Todo")
        .field(Field::id("id"))
        .field(Field::scalar("title", TypeIdentifier::String))
        .field(Field::relation("comments", "Comment", "TodoToComment", RelationSide::A).list())
}

#[tokio::test]
async fn probes_run_through_the_runner() {
    let runner = RecordingRunner {
        answer: true,
        ..Default::default()
    };
    let queries = SqlDataQueries::new("blog", Serializer::postgresql(), runner.clone());
    let model = todo();
    let title = model.field_by_name("title").unwrap();
    let relation = Relation::new("TodoToComment", "Todo", "Comment");

    assert!(queries.exists_rows(&model).await.unwrap());
    assert!(queries.exists_null(&model, title).await.unwrap());
    assert!(queries
        .exists_duplicate_relation_pairs(&relation, RelationSide::B)
        .await
        .unwrap());

    assert_eq!(
        runner.queries(),
        vec![
            r#"SELECT EXISTS(SELECT 1 FROM "blog"."Todo");"#,
            r#"SELECT EXISTS(SELECT 1 FROM "blog"."Todo" WHERE "title" IS NULL);"#,
            r#"SELECT EXISTS(SELECT 1 FROM "blog"."_TodoToComment" WHERE "B" IS NOT NULL GROUP BY "B" HAVING COUNT(*) > 1);"#,
        ]
    );
}

#[tokio::test]
async fn fields_without_columns_are_answered_locally() {
    let runner = RecordingRunner {
        answer: true,
        ..Default::default()
    };
    let queries = SqlDataQueries::new("blog", Serializer::mysql(), runner.clone());
    let model = todo();
    let comments = model.field_by_name("comments").unwrap();
    let title = model.field_by_name("title").unwrap();

    assert!(!queries.exists_null(&model, comments).await.unwrap());
    assert!(!queries.exists_duplicates(&model, comments).await.unwrap());
    assert!(!queries
        .exists_enum_value(&model, title, "DONE")
        .await
        .unwrap());
    assert!(runner.queries().is_empty());
}
