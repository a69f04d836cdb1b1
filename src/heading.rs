use super::*;

/// One table of contents entry and the anchor id assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingDescriptor {
  pub id: String,
  pub text: String,
  pub level: u8,
}

impl HeadingDescriptor {
  pub fn new(
    id: impl Into<String>,
    text: impl Into<String>,
    level: u8,
  ) -> Self {
    Self {
      id: id.into(),
      text: text.into(),
      level,
    }
  }
}

/// Lowercases `text` and collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen, trimming hyphens at both ends.
pub fn slugify(text: &str) -> String {
  SLUG_SEPARATOR
    .replace_all(&text.to_lowercase(), "-")
    .trim_matches('-')
    .to_string()
}

/// Hands out anchor ids for table of contents entries in order.
pub(crate) struct HeadingIds {
  dedupe: bool,
  issued: HashSet<String>,
}

impl HeadingIds {
  /// Id for the entry at `index`: its slug, `heading-<index>` when the slug
  /// is empty, suffixed with `-2`, `-3`, ... when already issued.
  pub(crate) fn assign(&mut self, text: &str, index: usize) -> String {
    let mut id = slugify(text);

    if id.is_empty() {
      id = format!("heading-{index}");
    }

    if self.dedupe && self.issued.contains(&id) {
      id = (2..)
        .map(|suffix| format!("{id}-{suffix}"))
        .find(|candidate| !self.issued.contains(candidate))
        .unwrap_or(id);
    }

    self.issued.insert(id.clone());

    id
  }

  pub(crate) fn new(dedupe: bool) -> Self {
    Self {
      dedupe,
      issued: HashSet::new(),
    }
  }
}

/// Position in a descriptor list while walking body headings.
///
/// Only a heading whose text equals the descriptor under the cursor consumes
/// it. Anything else leaves the cursor where it is, so body headings missing
/// from the table of contents are skipped over.
#[derive(Debug, Clone)]
pub(crate) struct HeadingCursor<'a> {
  headings: &'a [HeadingDescriptor],
  position: usize,
}

impl<'a> HeadingCursor<'a> {
  pub(crate) fn advance(
    &mut self,
    text: &str,
  ) -> Option<&'a HeadingDescriptor> {
    let current = self.headings.get(self.position)?;

    if current.text != text {
      return None;
    }

    self.position += 1;

    Some(current)
  }

  pub(crate) fn new(headings: &'a [HeadingDescriptor]) -> Self {
    Self {
      headings,
      position: 0,
    }
  }
}

/// Headings that never take a descriptor slot.
pub(crate) fn is_non_content_heading(text: &str) -> bool {
  toc::is_toc_title(text) || faq::is_faq_heading(text)
}

/// Reads the table of contents entries from `html`, which must still contain
/// its table of contents. Returns an empty vector when there is none.
pub fn extract_headings(html: &str) -> Vec<HeadingDescriptor> {
  Pipeline::new(Context::with_default_options(html))
    .stage(ExtractHeadingsStage)
    .run_or_log()
    .map(|mut context| context.take_headings())
    .unwrap_or_default()
}

/// Adds `id` attributes to the `<h2>` and `<h3>` elements matching
/// `headings`, in order. Existing ids are never replaced.
pub fn add_heading_ids(html: &str, headings: &[HeadingDescriptor]) -> String {
  let mut context = Context::with_default_options(html);

  context.set_headings(headings.to_vec());

  Pipeline::new(context)
    .stage(InjectHeadingIdsStage)
    .run_or_log()
    .map_or_else(|| html.to_string(), |context| context.fragment().to_markup())
}
