//! Template documents with repeatable field and index blocks.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

static FIELDS_BLOCK: LazyLock<Regex> = LazyLock::new(|| block_pattern("fields_list"));
static INDEXES_BLOCK: LazyLock<Regex> = LazyLock::new(|| block_pattern("indexes_list"));
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([a-z_]+)\}\}").expect("valid placeholder pattern"));
static BLOCK_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<<(FIELD|INDEX)_LIST_NO_(\d+)>>").expect("valid block marker pattern")
});

fn block_pattern(name: &str) -> Regex {
    let pattern = format!(r"(?ms)^<<<{name}\r?\n(.*?)^>>>{name}(?:\r?\n|\z)");
    Regex::new(&pattern).expect("valid block pattern")
}

/// The two kinds of repeatable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `<<<fields_list` ... `>>>fields_list`, expanded once per column
    Fields,
    /// `<<<indexes_list` ... `>>>indexes_list`, expanded once per index entry
    Indexes,
}

impl BlockKind {
    /// Positional marker left in the document for the `number`-th block
    /// (1-based) of this kind, e.g. `<<FIELD_LIST_NO_1>>`.
    ///
    /// The closing `>>` keeps the number from running into text that follows
    /// the block.
    pub fn marker(&self, number: usize) -> String {
        match self {
            BlockKind::Fields => format!("<<FIELD_LIST_NO_{}>>", number),
            BlockKind::Indexes => format!("<<INDEX_LIST_NO_{}>>", number),
        }
    }
}

/// A parsed template: the document with blocks replaced by markers, and the
/// extracted block bodies in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    content: String,
    field_blocks: Vec<String>,
    index_blocks: Vec<String>,
}

impl Template {
    /// Extract every field and index block from `source`.
    ///
    /// Open and close markers must each start a line and end with a line
    /// break (or the end of input). Text that does not form a complete block
    /// is left as it is.
    pub fn parse(source: &str) -> Self {
        let mut field_blocks = Vec::new();
        let content = extract_blocks(&FIELDS_BLOCK, source, BlockKind::Fields, &mut field_blocks);

        let mut index_blocks = Vec::new();
        let content =
            extract_blocks(&INDEXES_BLOCK, &content, BlockKind::Indexes, &mut index_blocks);

        Self {
            content: content.into_owned(),
            field_blocks,
            index_blocks,
        }
    }

    /// The document with block markers in place of the blocks.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn field_blocks(&self) -> &[String] {
        &self.field_blocks
    }

    pub fn index_blocks(&self) -> &[String] {
        &self.index_blocks
    }

    /// Extracted bodies of one block kind.
    pub fn blocks(&self, kind: BlockKind) -> &[String] {
        match kind {
            BlockKind::Fields => &self.field_blocks,
            BlockKind::Indexes => &self.index_blocks,
        }
    }
}

fn extract_blocks<'a>(
    pattern: &Regex,
    source: &'a str,
    kind: BlockKind,
    blocks: &mut Vec<String>,
) -> Cow<'a, str> {
    pattern.replace_all(source, |caps: &Captures| {
        blocks.push(caps[1].to_string());
        kind.marker(blocks.len())
    })
}

/// Replace every `{{name}}` placeholder for which `lookup` returns a value.
///
/// Unknown placeholders are left verbatim.
pub fn substitute<'a, F>(text: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| match lookup(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Replace every block marker with the rendered text for that block.
///
/// `rendered` receives the block kind and the 0-based block index. Markers
/// it does not know about are left verbatim.
pub fn fill_blocks<F>(content: &str, rendered: F) -> String
where
    F: Fn(BlockKind, usize) -> Option<String>,
{
    BLOCK_MARKER
        .replace_all(content, |caps: &Captures| {
            let kind = if &caps[1] == "FIELD" {
                BlockKind::Fields
            } else {
                BlockKind::Indexes
            };
            caps[2]
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|index| rendered(kind, index))
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
