//! Snapshot tests for rendered templates and SQLite scripts.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use dtomaker_codegen::{Converter, EntityMaker, SqliteGenerator, Template};
use dtomaker_core::{ColumnInfo, IndexInfo, KeyRole, TableInfo};
use dtomaker_manifest::{Application, FormatConfig};

const TYPESCRIPT_TEMPLATE: &str = r#"/**
 * {{class_desc}}
 * @table {{table_name}} ({{engine}})
 */
export class {{class_name}} {
<<<fields_list
  /** {{field_comment}} ({{field_type}}) */
  {{field_name}}: {{field_lang_type}} = {{field_lang_default_value}}
>>>fields_list

  static readonly primaryKeys = [{{primary_ids_sq}}]
}
<<<indexes_list
// index {{index_name}}: {{index_columns}} #{{index_order}} unique={{index_unique}}
>>>indexes_list
"#;

const PHP_TEMPLATE: &str = r#"<?php
/**
 * {{class_desc}}
 */
class {{class_name}}Dto
{
    const PRIMARY = [{{primary_ids_dq}}];
<<<fields_list
    /** @var {{field_lang_type}} {{field_comment}} */
    public ${{field_name}} = {{field_lang_default_value}};
>>>fields_list
}
"#;

const JAVA_TEMPLATE: &str = r#"public class {{class_name}} {
<<<fields_list
    private {{field_lang_type}} {{field_name}} = {{field_lang_default_value}};
>>>fields_list
<<<fields_list
    public static final String {{field_name_uppercase}} = "{{field_name}}";
>>>fields_list
}
"#;

fn table() -> TableInfo {
    TableInfo::new("user_account")
        .engine("InnoDB")
        .comment("User accounts\nOne row per login")
}

fn columns() -> Vec<ColumnInfo> {
    vec![
        ColumnInfo::new("id", "int(11)")
            .key(KeyRole::Primary)
            .extra("auto_increment")
            .comment("Account ID"),
        ColumnInfo::new("email", "varchar(255)")
            .key(KeyRole::Unique)
            .comment("Login e-mail"),
        ColumnInfo::new("score", "decimal(10,2)")
            .nullable(true)
            .comment("Rating"),
        ColumnInfo::new("created_at", "datetime")
            .nullable(true)
            .comment("Created at"),
    ]
}

fn indexes() -> Vec<IndexInfo> {
    vec![
        IndexInfo::new("PRIMARY", "id").unique(true),
        IndexInfo::new("uniq_email", "email").unique(true),
    ]
}

/// Render the fixture table with a template and `[profiles.format]` settings.
fn render(template: &str, format_toml: &str) -> String {
    let format: FormatConfig = toml::from_str(format_toml).expect("Failed to parse format");
    let maker = EntityMaker::new(Template::parse(template), &format, Application::MySql)
        .expect("Failed to create maker");

    let table = table();
    let mut builder = maker.builder(&table);
    for column in &columns() {
        builder.add_field(column);
    }
    for index in &indexes() {
        builder.add_index(index);
    }
    builder.generate_content(Some(format.eol))
}

#[test]
fn test_typescript_entity() {
    let content = render(
        TYPESCRIPT_TEMPLATE,
        r#"
        type = "dto"
        file_extension = "ts"
        "#,
    );
    insta::assert_snapshot!("typescript_entity", content);
}

#[test]
fn test_php_entity() {
    let content = render(
        PHP_TEMPLATE,
        r#"
        type = "dto"
        file_extension = "php"
        "#,
    );
    insta::assert_snapshot!("php_entity", content);
}

#[test]
fn test_java_entity() {
    let content = render(
        JAVA_TEMPLATE,
        r#"
        type = "dto"
        file_extension = "java"
        class_name = "${className}Entity"
        "#,
    );
    insta::assert_snapshot!("java_entity", content);
}

#[test]
fn test_crlf_entity() {
    let content = render(
        JAVA_TEMPLATE,
        r#"
        type = "dto"
        file_extension = "java"
        eol = "crlf"
        "#,
    );
    assert!(content.starts_with("public class UserAccount {\r\n    private int id = 0;\r\n"));
    assert_eq!(content.matches("\r\n").count(), content.matches('\n').count());
}

#[test]
fn test_sqlite_script() {
    let converter = Converter::sqlite().expect("Failed to build converter");
    let mut generator = SqliteGenerator::new(&converter);
    generator.add_table("user_account", columns());

    insta::assert_snapshot!("sqlite_script", generator.build());
}
