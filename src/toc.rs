use super::*;

pub(crate) fn is_toc_title(text: &str) -> bool {
  TOC_TITLE.is_match(text.trim())
}

/// Removes the WordPress table of contents block (a "Table of Contents"
/// heading followed by a list) and cleans up editor artifacts: `AAAAA`
/// placeholder paragraphs, runs of `<br>` and empty paragraphs.
///
/// Markup without a table of contents only goes through the cleanup, and the
/// function is idempotent.
pub fn remove_wordpress_toc(html: &str) -> String {
  Pipeline::new(Context::with_default_options(html))
    .stage(RemoveTocStage)
    .stage(CleanArtifactsStage)
    .run_or_log()
    .map_or_else(|| html.to_string(), |context| context.fragment().to_markup())
}
