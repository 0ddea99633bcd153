//! Rendering of one template per table.

use std::sync::LazyLock;

use dtomaker_core::{ColumnInfo, IndexInfo, TableInfo};
use dtomaker_manifest::{Application, FormatConfig, LineEnding};
use eyre::Result;
use regex::Regex;

use crate::{
    ClassNameFormatter, Dialect, Template, TypeMapper, dialect_for, mapper_for,
    template::{BlockKind, fill_blocks, substitute},
};

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("valid line break pattern"));
static COMMENT_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r\n|\n)").expect("valid comment break pattern"));

/// Shared state for rendering a template against many tables.
pub struct EntityMaker {
    template: Template,
    class_names: ClassNameFormatter,
    dialect: Box<dyn Dialect>,
    mapper: Option<Box<dyn TypeMapper>>,
}

impl EntityMaker {
    /// Set up a maker from a profile's format settings.
    ///
    /// The type mapper is chosen by `format.file_extension`; unknown
    /// extensions render language placeholders empty.
    pub fn new(template: Template, format: &FormatConfig, application: Application) -> Result<Self> {
        let class_names = ClassNameFormatter::new(&format.class_name, &format.ltrim_table_name)?;
        let mapper = mapper_for(&format.file_extension, &format.default_values);
        Ok(Self::from_parts(
            template,
            class_names,
            dialect_for(application),
            mapper,
        ))
    }

    pub fn from_parts(
        template: Template,
        class_names: ClassNameFormatter,
        dialect: Box<dyn Dialect>,
        mapper: Option<Box<dyn TypeMapper>>,
    ) -> Self {
        Self {
            template,
            class_names,
            dialect,
            mapper,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Class name for a table.
    pub fn class_name(&self, table_name: &str) -> String {
        self.class_names.format(table_name)
    }

    /// Start rendering `table`.
    pub fn builder(&self, table: &TableInfo) -> EntityBuilder<'_> {
        EntityBuilder {
            maker: self,
            class_name: self.class_name(&table.name),
            table: table.clone(),
            primary_keys: Vec::new(),
            field_rows: vec![Vec::new(); self.template.field_blocks().len()],
            index_rows: vec![Vec::new(); self.template.index_blocks().len()],
        }
    }
}

/// Accumulates rendered rows for one table.
///
/// Add fields and indexes in the order they should appear, then call
/// [`EntityBuilder::generate_content`] once.
pub struct EntityBuilder<'a> {
    maker: &'a EntityMaker,
    class_name: String,
    table: TableInfo,
    primary_keys: Vec<String>,
    field_rows: Vec<Vec<String>>,
    index_rows: Vec<Vec<String>>,
}

impl EntityBuilder<'_> {
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn primary_keys(&self) -> &[String] {
        &self.primary_keys
    }

    /// Render every field block for `column`.
    pub fn add_field(&mut self, column: &ColumnInfo) {
        if column.is_primary() {
            self.primary_keys.push(column.field.clone());
        }

        let kind = self.maker.dialect.classify(column);
        let info = self.maker.mapper.as_ref().map(|m| m.resolve(column, kind));
        let field_name_uppercase = column.field.to_uppercase();

        let lookup = |name: &str| {
            let value = match name {
                "field_comment" => column.comment.as_str(),
                "field_type" => column.data_type.as_str(),
                "field_lang_type" => info.as_ref().map_or("", |i| i.label.as_str()),
                "field_name" => column.field.as_str(),
                "field_name_uppercase" => field_name_uppercase.as_str(),
                "field_nullable" => column.null_flag(),
                "field_default_value" => column.default.as_deref().unwrap_or("n/a"),
                "field_lang_default_value" => {
                    info.as_ref().map_or("", |i| i.default_value.as_str())
                }
                "field_hungarian" => info.as_ref().map_or("", |i| i.hungarian),
                "field_key" => column.key.as_str(),
                "field_extra" => column.extra.as_str(),
                _ => return None,
            };
            Some(value)
        };

        for (rows, block) in self
            .field_rows
            .iter_mut()
            .zip(self.maker.template.field_blocks())
        {
            rows.push(substitute(block, lookup));
        }
    }

    /// Render every index block for `index`.
    pub fn add_index(&mut self, index: &IndexInfo) {
        let order = index.seq_in_index.to_string();
        let lookup = |name: &str| {
            let value = match name {
                "index_name" => index.key_name.as_str(),
                "index_columns" => index.column_name.as_str(),
                "index_order" => order.as_str(),
                "index_nullable" => yes_no(index.nullable),
                "index_unique" => yes_no(index.unique),
                _ => return None,
            };
            Some(value)
        };

        for (rows, block) in self
            .index_rows
            .iter_mut()
            .zip(self.maker.template.index_blocks())
        {
            rows.push(substitute(block, lookup));
        }
    }

    /// Produce the final document, normalising line breaks to `eol` if given.
    pub fn generate_content(self, eol: Option<LineEnding>) -> String {
        let class_desc = COMMENT_BREAK
            .replace_all(&self.table.comment, "$1 * ")
            .into_owned();
        let primary_id = self.primary_keys.first().map_or("", String::as_str);
        let primary_ids = self.primary_keys.join(",");
        let primary_ids_sq = quoted(&self.primary_keys, '\'');
        let primary_ids_dq = quoted(&self.primary_keys, '"');

        let content = substitute(self.maker.template.content(), |name| {
            let value = match name {
                "class_name" => self.class_name.as_str(),
                "class_desc" => class_desc.as_str(),
                "table_name" => self.table.name.as_str(),
                "table_comment" => self.table.comment.as_str(),
                "engine" => self.table.engine.as_str(),
                "primary_id" => primary_id,
                "primary_ids" => primary_ids.as_str(),
                "primary_ids_sq" => primary_ids_sq.as_str(),
                "primary_ids_dq" => primary_ids_dq.as_str(),
                _ => return None,
            };
            Some(value)
        });

        let content = fill_blocks(&content, |kind, index| {
            let rows = match kind {
                BlockKind::Fields => &self.field_rows,
                BlockKind::Indexes => &self.index_rows,
            };
            rows.get(index).map(|rows| rows.concat())
        });

        match eol {
            Some(eol) => LINE_BREAK.replace_all(&content, eol.as_str()).into_owned(),
            None => content,
        }
    }
}

fn quoted(keys: &[String], quote: char) -> String {
    keys.iter()
        .map(|key| format!("{quote}{key}{quote}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "YES" } else { "NO" }
}
