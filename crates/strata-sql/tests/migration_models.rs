use pretty_assertions::assert_eq;
use strata_core::{
    driver::Capability,
    schema::{DiffContext, Field, Index, Model, RenameMapping, TypeIdentifier},
    MigrationStepsInferrer, Schema,
};
use strata_sql::{MutationBuilder, Serializer};

fn migrate(
    capability: &Capability,
    serializer: Serializer,
    previous: &Schema,
    next: &Schema,
    mapping: &RenameMapping,
) -> Vec<String> {
    let steps = MigrationStepsInferrer::new(capability)
        .evaluate(previous, next, mapping)
        .unwrap();
    let cx = DiffContext::new(previous, next, mapping);
    let stmts = MutationBuilder::new("blog", capability, &cx)
        .unwrap()
        .build(&steps)
        .unwrap();
    serializer.serialize_all(&stmts).unwrap()
}

fn postgresql(previous: &Schema, next: &Schema, mapping: &RenameMapping) -> Vec<String> {
    migrate(
        &Capability::POSTGRESQL,
        Serializer::postgresql(),
        previous,
        next,
        mapping,
    )
}

fn mysql(previous: &Schema, next: &Schema, mapping: &RenameMapping) -> Vec<String> {
    migrate(&Capability::MYSQL, Serializer::mysql(), previous, next, mapping)
}

fn sqlite(previous: &Schema, next: &Schema, mapping: &RenameMapping) -> Vec<String> {
    migrate(&Capability::SQLITE, Serializer::sqlite(), previous, next, mapping)
}

fn todo(name: &str) -> Model {
    Model::new(name)
        .field(Field::id("id"))
        .field(Field::scalar("title", TypeIdentifier::String).required())
        .field(Field::scalar("slug", TypeIdentifier::String).unique())
        .field(Field::scalar("tags", TypeIdentifier::String).list())
}

fn schema(models: impl IntoIterator<Item = Model>) -> Schema {
    models
        .into_iter()
        .fold(Schema::builder(), |builder, model| builder.model(model))
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Creating models
// ---------------------------------------------------------------------------

#[test]
fn create_model_postgresql() {
    let sql = postgresql(&Schema::default(), &schema([todo("Todo")]), &RenameMapping::new());

    assert_eq!(
        sql,
        vec![
            r#"CREATE TABLE "blog"."Todo" ("id" VARCHAR(25) NOT NULL, "title" TEXT NOT NULL, "slug" TEXT, PRIMARY KEY ("id"));"#,
            r#"CREATE UNIQUE INDEX "Todo.slug._UNIQUE" ON "blog"."Todo" ("slug");"#,
            r#"CREATE TABLE "blog"."Todo_tags" ("nodeId" VARCHAR(25) NOT NULL, "position" INTEGER NOT NULL, "value" TEXT NOT NULL, PRIMARY KEY ("nodeId", "position"));"#,
        ]
    );
}

#[test]
fn create_model_mysql() {
    let sql = mysql(&Schema::default(), &schema([todo("Todo")]), &RenameMapping::new());

    assert_eq!(
        sql,
        vec![
            "CREATE TABLE `blog`.`Todo` (`id` CHAR(25) NOT NULL, `title` VARCHAR(191) NOT NULL, `slug` VARCHAR(191), PRIMARY KEY (`id`));",
            "CREATE UNIQUE INDEX `Todo.slug._UNIQUE` ON `blog`.`Todo` (`slug`);",
            "CREATE TABLE `blog`.`Todo_tags` (`nodeId` CHAR(25) NOT NULL, `position` INT NOT NULL, `value` VARCHAR(191) NOT NULL, PRIMARY KEY (`nodeId`, `position`));",
        ]
    );
}

#[test]
fn create_model_sqlite() {
    let sql = sqlite(&Schema::default(), &schema([todo("Todo")]), &RenameMapping::new());

    assert_eq!(
        sql,
        vec![
            r#"CREATE TABLE "blog"."Todo" ("id" TEXT NOT NULL, "title" TEXT NOT NULL, "slug" TEXT, PRIMARY KEY ("id"));"#,
            r#"CREATE UNIQUE INDEX "blog"."Todo.slug._UNIQUE" ON "Todo" ("slug");"#,
            r#"CREATE TABLE "blog"."Todo_tags" ("nodeId" TEXT NOT NULL, "position" INTEGER NOT NULL, "value" TEXT NOT NULL, PRIMARY KEY ("nodeId", "position"));"#,
        ]
    );
}

#[test]
fn create_model_with_index() {
    let next = schema([Model::new("Todo")
        .field(Field::id("id"))
        .field(Field::scalar("title", TypeIdentifier::String))
        .index(Index::new("Todo_title_idx", ["title"]))]);

    assert_eq!(
        postgresql(&Schema::default(), &next, &RenameMapping::new()),
        vec![
            r#"CREATE TABLE "blog"."Todo" ("id" VARCHAR(25) NOT NULL, "title" TEXT, PRIMARY KEY ("id"));"#,
            r#"CREATE INDEX "Todo_title_idx" ON "blog"."Todo" ("title");"#,
        ]
    );
}

#[test]
fn embedded_model_has_no_table() {
    let next = schema([Model::new("Address")
        .embedded()
        .field(Field::scalar("city", TypeIdentifier::String))]);

    assert!(postgresql(&Schema::default(), &next, &RenameMapping::new()).is_empty());
}

// ---------------------------------------------------------------------------
// Deleting and renaming models
// ---------------------------------------------------------------------------

#[test]
fn delete_model_drops_list_tables_first() {
    let sql = postgresql(&schema([todo("Todo")]), &Schema::default(), &RenameMapping::new());

    assert_eq!(
        sql,
        vec![
            r#"DROP TABLE "blog"."Todo_tags";"#,
            r#"DROP TABLE "blog"."Todo";"#,
        ]
    );
}

#[test]
fn rename_model_moves_through_transient_name_postgresql() {
    let mut mapping = RenameMapping::new();
    mapping.add_model_hint("Todo", "Task");

    let sql = postgresql(&schema([todo("Todo")]), &schema([todo("Task")]), &mapping);

    assert_eq!(
        sql,
        vec![
            r#"ALTER TABLE "blog"."Todo" RENAME TO "__Task";"#,
            r#"ALTER TABLE "blog"."Todo_tags" RENAME TO "__Task_tags";"#,
            r#"ALTER INDEX "blog"."Todo.slug._UNIQUE" RENAME TO "__Task.slug._UNIQUE";"#,
            r#"ALTER TABLE "blog"."__Task" RENAME TO "Task";"#,
            r#"ALTER TABLE "blog"."__Task_tags" RENAME TO "Task_tags";"#,
            r#"ALTER INDEX "blog"."__Task.slug._UNIQUE" RENAME TO "Task.slug._UNIQUE";"#,
        ]
    );
}

#[test]
fn rename_model_mysql() {
    let mut mapping = RenameMapping::new();
    mapping.add_model_hint("Todo", "Task");

    let sql = mysql(&schema([todo("Todo")]), &schema([todo("Task")]), &mapping);

    assert_eq!(
        sql,
        vec![
            "ALTER TABLE `blog`.`Todo` RENAME TO `blog`.`__Task`;",
            "ALTER TABLE `blog`.`Todo_tags` RENAME TO `blog`.`__Task_tags`;",
            "ALTER TABLE `blog`.`__Task` RENAME INDEX `Todo.slug._UNIQUE` TO `__Task.slug._UNIQUE`;",
            "ALTER TABLE `blog`.`__Task` RENAME TO `blog`.`Task`;",
            "ALTER TABLE `blog`.`__Task_tags` RENAME TO `blog`.`Task_tags`;",
            "ALTER TABLE `blog`.`Task` RENAME INDEX `__Task.slug._UNIQUE` TO `Task.slug._UNIQUE`;",
        ]
    );
}

#[test]
fn rename_model_recreates_indexes_sqlite() {
    let mut mapping = RenameMapping::new();
    mapping.add_model_hint("Todo", "Task");

    let sql = sqlite(&schema([todo("Todo")]), &schema([todo("Task")]), &mapping);

    assert_eq!(
        sql,
        vec![
            r#"ALTER TABLE "blog"."Todo" RENAME TO "__Task";"#,
            r#"ALTER TABLE "blog"."Todo_tags" RENAME TO "__Task_tags";"#,
            r#"DROP INDEX "blog"."Todo.slug._UNIQUE";"#,
            r#"CREATE UNIQUE INDEX "blog"."__Task.slug._UNIQUE" ON "__Task" ("slug");"#,
            r#"ALTER TABLE "blog"."__Task" RENAME TO "Task";"#,
            r#"ALTER TABLE "blog"."__Task_tags" RENAME TO "Task_tags";"#,
            r#"DROP INDEX "blog"."__Task.slug._UNIQUE";"#,
            r#"CREATE UNIQUE INDEX "blog"."Task.slug._UNIQUE" ON "Task" ("slug");"#,
        ]
    );
}

#[test]
fn rename_model_with_pinned_table_emits_nothing() {
    let mut mapping = RenameMapping::new();
    mapping.add_model_hint("Todo", "Task");

    let previous = schema([todo("Todo").storage_name("todos")]);
    let next = schema([todo("Task").storage_name("todos")]);

    assert!(postgresql(&previous, &next, &mapping).is_empty());
}

#[test]
fn swapped_models_keep_their_tables_apart() {
    let mut mapping = RenameMapping::new();
    mapping.add_model_hint("A", "B");
    mapping.add_model_hint("B", "A");

    let model = |name: &str| Model::new(name).field(Field::id("id"));
    let previous = schema([model("A"), model("B")]);
    let next = schema([model("A"), model("B")]);

    assert_eq!(
        postgresql(&previous, &next, &mapping),
        vec![
            r#"ALTER TABLE "blog"."B" RENAME TO "__A";"#,
            r#"ALTER TABLE "blog"."A" RENAME TO "__B";"#,
            r#"ALTER TABLE "blog"."__A" RENAME TO "A";"#,
            r#"ALTER TABLE "blog"."__B" RENAME TO "B";"#,
        ]
    );
}

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

#[test]
fn overlong_identifier_is_rejected_postgresql() {
    let next = schema([Model::new("Todo")
        .field(Field::id("id"))
        .field(Field::scalar("x".repeat(64), TypeIdentifier::String))]);
    let previous = Schema::default();
    let mapping = RenameMapping::new();

    let steps = MigrationStepsInferrer::new(&Capability::POSTGRESQL)
        .evaluate(&previous, &next, &mapping)
        .unwrap();
    let cx = DiffContext::new(&previous, &next, &mapping);
    let err = MutationBuilder::new("blog", &Capability::POSTGRESQL, &cx)
        .unwrap()
        .build(&steps)
        .unwrap_err();

    assert!(err.is_invalid_identifier());

    // SQLite has no length limit.
    let cx = DiffContext::new(&previous, &next, &mapping);
    assert!(MutationBuilder::new("blog", &Capability::SQLITE, &cx)
        .unwrap()
        .build(&steps)
        .is_ok());
}

#[test]
fn quoted_namespace_is_rejected() {
    let schema = Schema::default();
    let mapping = RenameMapping::new();
    let cx = DiffContext::new(&schema, &schema, &mapping);

    let err = MutationBuilder::new("blog\"; --", &Capability::POSTGRESQL, &cx).unwrap_err();
    assert!(err.is_invalid_identifier());
}
