use std::path::PathBuf;

use strata_cli::{Config, Flavor, SchemaFile, StrataCli};
use strata_core::schema::{Field, Model, TypeIdentifier};
use strata_core::Schema;

fn write(name: &str, schema: Schema) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("strata-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    SchemaFile::new(schema).save(&path).unwrap();
    path
}

fn todo(fields: Vec<Field>) -> Schema {
    let model = fields
        .into_iter()
        .fold(Model::new("Todo").field(Field::id("id")), Model::field);
    Schema::builder().model(model).build().unwrap()
}

#[test]
fn plan_and_sql_between_files() {
    let from = write("plan_from.toml", todo(vec![]));
    let to = write(
        "plan_to.toml",
        todo(vec![Field::scalar("title", TypeIdentifier::String)]),
    );

    let cli = StrataCli::with_config(Config::new().namespace("blog").flavor(Flavor::Sqlite));
    assert_eq!(cli.config().flavor, Flavor::Sqlite);

    cli.parse_from([
        "strata",
        "plan",
        "--from",
        from.to_str().unwrap(),
        to.to_str().unwrap(),
    ])
    .unwrap();

    cli.parse_from(["strata", "plan", "--json", to.to_str().unwrap()])
        .unwrap();

    cli.parse_from([
        "strata",
        "sql",
        "--flavor",
        "mysql",
        "--breakpoints",
        "--from",
        from.to_str().unwrap(),
        to.to_str().unwrap(),
    ])
    .unwrap();
}

#[test]
fn missing_schema_file_is_an_error() {
    let cli = StrataCli::new();
    let missing = std::env::temp_dir().join("strata-cli-missing.toml");

    assert!(cli
        .parse_from(["strata", "sql", missing.to_str().unwrap()])
        .is_err());
}
