//! Semantic validation of a parsed manifest.

use std::collections::HashMap;

use miette::SourceSpan;

use super::{Manifest, OutputKind, Profile};
use crate::{Result, error::SourceContext};

/// Validate the manifest after parsing.
pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    if manifest.profiles.is_empty() {
        return Err(ctx.validation_error("no [[profiles]] defined", None));
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for profile in &manifest.profiles {
        if profile.label.is_empty() {
            validate_profile(profile, ctx, None)?;
            continue;
        }

        let spans = find_value_spans(ctx.src(), "label", &profile.label);
        let occurrence = seen.entry(profile.label.as_str()).or_insert(0);
        *occurrence += 1;
        if *occurrence > 1 {
            if let (Some(first), Some(second)) = (spans.first(), spans.get(*occurrence - 1)) {
                return Err(ctx.duplicate_label_error(&profile.label, *first, *second));
            }
            return Err(ctx.validation_error(
                format!("duplicate profile label '{}'", profile.label),
                None,
            ));
        }

        validate_profile(profile, ctx, spans.first().copied())?;
    }
    Ok(())
}

fn validate_profile(profile: &Profile, ctx: &SourceContext, span: Option<SourceSpan>) -> Result<()> {
    let name = if profile.label.is_empty() {
        "unnamed profile".to_string()
    } else {
        format!("profile '{}'", profile.label)
    };

    if profile.database.snapshot.is_none() {
        return Err(ctx.validation_error(
            format!("{} has no database.snapshot to read metadata from", name),
            span,
        ));
    }

    if profile.format.kind == OutputKind::Dto {
        if profile.format.template_path.is_none() {
            return Err(ctx.validation_error(
                format!("{} generates DTOs but has no format.template_path", name),
                span,
            ));
        }
        if profile.format.file_extension.is_empty() {
            return Err(ctx.validation_error(
                format!("{} generates DTOs but has no format.file_extension", name),
                span,
            ));
        }
    }
    Ok(())
}

/// Find every `key = "value"` (or single-quoted) occurrence, returning the
/// spans of the values in source order.
pub(crate) fn find_value_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans = Vec::new();
    for quote in ['"', '\''] {
        let pattern = format!("{} = {}{}{}", key, quote, value, quote);
        let prefix = key.len() + 4;
        spans.extend(
            src.match_indices(&pattern)
                .map(|(pos, _)| SourceSpan::from((pos + prefix, value.len()))),
        );
    }
    spans.sort_by_key(|span| span.offset());
    spans
}
