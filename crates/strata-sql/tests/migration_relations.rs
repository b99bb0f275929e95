use pretty_assertions::assert_eq;
use strata_core::{
    driver::Capability,
    schema::{DiffContext, Field, Model, Relation, RelationSide, RenameMapping},
    MigrationStepsInferrer, Schema,
};
use strata_sql::{MutationBuilder, Serializer};

fn migrate(
    capability: &Capability,
    serializer: Serializer,
    previous: &Schema,
    next: &Schema,
) -> Vec<String> {
    let mapping = RenameMapping::new();
    let steps = MigrationStepsInferrer::new(capability)
        .evaluate(previous, next, &mapping)
        .unwrap();
    let cx = DiffContext::new(previous, next, &mapping);
    let stmts = MutationBuilder::new("blog", capability, &cx)
        .unwrap()
        .build(&steps)
        .unwrap();
    serializer.serialize_all(&stmts).unwrap()
}

fn unrelated() -> Schema {
    Schema::builder()
        .model(Model::new("Todo").field(Field::id("id")))
        .model(Model::new("Comment").field(Field::id("id")))
        .build()
        .unwrap()
}

/// `Todo` has many `Comment`s through `relation`.
fn todo_with_comments(relation: &str) -> Schema {
    Schema::builder()
        .model(
            Model::new("Todo")
                .field(Field::id("id"))
                .field(Field::relation("comments", "Comment", relation, RelationSide::A).list()),
        )
        .model(
            Model::new("Comment")
                .field(Field::id("id"))
                .field(Field::relation("todo", "Todo", relation, RelationSide::B)),
        )
        .relation(Relation::new(relation, "Todo", "Comment"))
        .build()
        .unwrap()
}

#[test]
fn create_relation_postgresql() {
    let sql = migrate(
        &Capability::POSTGRESQL,
        Serializer::postgresql(),
        &unrelated(),
        &todo_with_comments("TodoToComment"),
    );

    assert_eq!(
        sql,
        vec![
            r#"CREATE TABLE "blog"."_TodoToComment" ("id" VARCHAR(25) NOT NULL, "A" VARCHAR(25) NOT NULL, "B" VARCHAR(25) NOT NULL, PRIMARY KEY ("id"));"#,
            r#"ALTER TABLE "blog"."_TodoToComment" ADD CONSTRAINT "_TodoToComment_A_fkey" FOREIGN KEY ("A") REFERENCES "blog"."Todo" ("id") ON DELETE CASCADE;"#,
            r#"ALTER TABLE "blog"."_TodoToComment" ADD CONSTRAINT "_TodoToComment_B_fkey" FOREIGN KEY ("B") REFERENCES "blog"."Comment" ("id") ON DELETE CASCADE;"#,
            r#"CREATE UNIQUE INDEX "_TodoToComment_AB_unique" ON "blog"."_TodoToComment" ("A", "B");"#,
            r#"CREATE INDEX "_TodoToComment_A_index" ON "blog"."_TodoToComment" ("A");"#,
            r#"CREATE INDEX "_TodoToComment_B_index" ON "blog"."_TodoToComment" ("B");"#,
        ]
    );
}

#[test]
fn create_relation_sqlite_declares_foreign_keys_inline() {
    let sql = migrate(
        &Capability::SQLITE,
        Serializer::sqlite(),
        &unrelated(),
        &todo_with_comments("TodoToComment"),
    );

    assert_eq!(
        sql,
        vec![
            r#"CREATE TABLE "blog"."_TodoToComment" ("id" TEXT NOT NULL, "A" TEXT NOT NULL, "B" TEXT NOT NULL, PRIMARY KEY ("id"), CONSTRAINT "_TodoToComment_A_fkey" FOREIGN KEY ("A") REFERENCES "Todo" ("id") ON DELETE CASCADE, CONSTRAINT "_TodoToComment_B_fkey" FOREIGN KEY ("B") REFERENCES "Comment" ("id") ON DELETE CASCADE);"#,
            r#"CREATE UNIQUE INDEX "blog"."_TodoToComment_AB_unique" ON "_TodoToComment" ("A", "B");"#,
            r#"CREATE INDEX "blog"."_TodoToComment_A_index" ON "_TodoToComment" ("A");"#,
            r#"CREATE INDEX "blog"."_TodoToComment_B_index" ON "_TodoToComment" ("B");"#,
        ]
    );
}

#[test]
fn new_models_with_relation() {
    let sql = migrate(
        &Capability::MYSQL,
        Serializer::mysql(),
        &Schema::default(),
        &todo_with_comments("TodoToComment"),
    );

    assert_eq!(
        sql,
        vec![
            "CREATE TABLE `blog`.`Todo` (`id` CHAR(25) NOT NULL, PRIMARY KEY (`id`));",
            "CREATE TABLE `blog`.`Comment` (`id` CHAR(25) NOT NULL, PRIMARY KEY (`id`));",
            "CREATE TABLE `blog`.`_TodoToComment` (`id` CHAR(25) NOT NULL, `A` CHAR(25) NOT NULL, `B` CHAR(25) NOT NULL, PRIMARY KEY (`id`));",
            "ALTER TABLE `blog`.`_TodoToComment` ADD CONSTRAINT `_TodoToComment_A_fkey` FOREIGN KEY (`A`) REFERENCES `blog`.`Todo` (`id`) ON DELETE CASCADE;",
            "ALTER TABLE `blog`.`_TodoToComment` ADD CONSTRAINT `_TodoToComment_B_fkey` FOREIGN KEY (`B`) REFERENCES `blog`.`Comment` (`id`) ON DELETE CASCADE;",
            "CREATE UNIQUE INDEX `_TodoToComment_AB_unique` ON `blog`.`_TodoToComment` (`A`, `B`);",
            "CREATE INDEX `_TodoToComment_A_index` ON `blog`.`_TodoToComment` (`A`);",
            "CREATE INDEX `_TodoToComment_B_index` ON `blog`.`_TodoToComment` (`B`);",
        ]
    );
}

#[test]
fn delete_relation() {
    let sql = migrate(
        &Capability::POSTGRESQL,
        Serializer::postgresql(),
        &todo_with_comments("TodoToComment"),
        &unrelated(),
    );

    assert_eq!(sql, vec![r#"DROP TABLE "blog"."_TodoToComment";"#]);
}

#[test]
fn rename_relation_postgresql() {
    let sql = migrate(
        &Capability::POSTGRESQL,
        Serializer::postgresql(),
        &todo_with_comments("TodoToComment"),
        &todo_with_comments("TodoComments"),
    );

    assert_eq!(
        sql,
        vec![
            r#"ALTER TABLE "blog"."_TodoToComment" RENAME TO "_TodoComments";"#,
            r#"ALTER INDEX "blog"."_TodoToComment_AB_unique" RENAME TO "_TodoComments_AB_unique";"#,
            r#"ALTER INDEX "blog"."_TodoToComment_A_index" RENAME TO "_TodoComments_A_index";"#,
            r#"ALTER INDEX "blog"."_TodoToComment_B_index" RENAME TO "_TodoComments_B_index";"#,
        ]
    );
}

#[test]
fn rename_relation_sqlite() {
    let sql = migrate(
        &Capability::SQLITE,
        Serializer::sqlite(),
        &todo_with_comments("TodoToComment"),
        &todo_with_comments("TodoComments"),
    );

    assert_eq!(
        sql,
        vec![
            r#"ALTER TABLE "blog"."_TodoToComment" RENAME TO "_TodoComments";"#,
            r#"DROP INDEX "blog"."_TodoToComment_AB_unique";"#,
            r#"CREATE UNIQUE INDEX "blog"."_TodoComments_AB_unique" ON "_TodoComments" ("A", "B");"#,
            r#"DROP INDEX "blog"."_TodoToComment_A_index";"#,
            r#"CREATE INDEX "blog"."_TodoComments_A_index" ON "_TodoComments" ("A");"#,
            r#"DROP INDEX "blog"."_TodoToComment_B_index";"#,
            r#"CREATE INDEX "blog"."_TodoComments_B_index" ON "_TodoComments" ("B");"#,
        ]
    );
}

#[test]
fn renamed_model_keeps_relation_references() {
    let mut mapping = RenameMapping::new();
    mapping.add_model_hint("Todo", "Task");

    let previous = todo_with_comments("TodoToComment");
    let next = Schema::builder()
        .model(
            Model::new("Task")
                .field(Field::id("id"))
                .field(
                    Field::relation("comments", "Comment", "TodoToComment", RelationSide::A)
                        .list(),
                ),
        )
        .model(
            Model::new("Comment")
                .field(Field::id("id"))
                .field(Field::relation("todo", "Task", "TodoToComment", RelationSide::B)),
        )
        .relation(Relation::new("TodoToComment", "Task", "Comment"))
        .build()
        .unwrap();

    let steps = MigrationStepsInferrer::new(&Capability::POSTGRESQL)
        .evaluate(&previous, &next, &mapping)
        .unwrap();
    let cx = DiffContext::new(&previous, &next, &mapping);
    let stmts = MutationBuilder::new("blog", &Capability::POSTGRESQL, &cx)
        .unwrap()
        .build(&steps)
        .unwrap();

    assert_eq!(
        Serializer::postgresql().serialize_all(&stmts).unwrap(),
        vec![
            r#"ALTER TABLE "blog"."Todo" RENAME TO "__Task";"#,
            r#"ALTER TABLE "blog"."__Task" RENAME TO "Task";"#,
        ]
    );
}

#[test]
fn swapped_relation_sides_recreate_the_table() {
    let next = Schema::builder()
        .model(
            Model::new("Todo")
                .field(Field::id("id"))
                .field(
                    Field::relation("comments", "Comment", "TodoToComment", RelationSide::B)
                        .list(),
                ),
        )
        .model(
            Model::new("Comment")
                .field(Field::id("id"))
                .field(Field::relation("todo", "Todo", "TodoToComment", RelationSide::A)),
        )
        .relation(Relation::new("TodoToComment", "Comment", "Todo"))
        .build()
        .unwrap();

    let sql = migrate(
        &Capability::POSTGRESQL,
        Serializer::postgresql(),
        &todo_with_comments("TodoToComment"),
        &next,
    );

    assert_eq!(sql[0], r#"DROP TABLE "blog"."_TodoToComment";"#);
    assert_eq!(
        sql[2],
        r#"ALTER TABLE "blog"."_TodoToComment" ADD CONSTRAINT "_TodoToComment_A_fkey" FOREIGN KEY ("A") REFERENCES "blog"."Comment" ("id") ON DELETE CASCADE;"#
    );
    assert_eq!(sql.len(), 7);
}
