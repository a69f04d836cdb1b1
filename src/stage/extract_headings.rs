use super::*;

/// Non-whitespace characters an element may hold and still be read as the
/// "Table of Contents" marker.
const MARKER_TEXT_LIMIT: usize = 32;

/// Reads the table of contents into heading descriptors.
///
/// The marker is the outermost element reading "Table of Contents"; its list
/// is the first `<ul>` or `<ol>` after it in document order. Every `<li>` of
/// that list, nested items included, becomes one descriptor.
pub struct ExtractHeadingsStage;

impl Stage for ExtractHeadingsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let headings = Self::extract(
      context.fragment(),
      context.options().dedupe_heading_ids,
    );

    debug!(count = headings.len(), "extracted table of contents entries");

    context.set_headings(headings);

    Ok(())
  }
}

impl ExtractHeadingsStage {
  /// Level of the first body `<h2>`/`<h3>` for each heading text.
  fn body_levels(root: &NodeRef<'_, Node>) -> HashMap<String, u8> {
    let mut levels = HashMap::new();

    for node in root.descendants() {
      let Some(level @ (2 | 3)) = dom::heading_level(&node) else {
        continue;
      };

      let text = dom::text_content(&node);

      if text.is_empty() || toc::is_toc_title(&text) {
        continue;
      }

      levels.entry(text).or_insert(level);
    }

    levels
  }

  fn extract(fragment: &Fragment, dedupe: bool) -> Vec<HeadingDescriptor> {
    let Some(root) = fragment.root() else {
      return Vec::new();
    };

    let Some(list) = Self::toc_list(&root) else {
      return Vec::new();
    };

    let levels = Self::body_levels(&root);

    let mut ids = HeadingIds::new(dedupe);

    list
      .descendants()
      .filter(|node| dom::is_element(node, &["li"]))
      .map(|item| dom::text_content_excluding(&item, dom::LIST_TAGS))
      .filter(|text| !text.is_empty())
      .enumerate()
      .map(|(index, text)| {
        let level = levels.get(&text).copied().unwrap_or(2);
        HeadingDescriptor::new(ids.assign(&text, index), text, level)
      })
      .collect()
  }

  fn toc_list<'a>(root: &NodeRef<'a, Node>) -> Option<NodeRef<'a, Node>> {
    let marker = root
      .descendants()
      .skip(1)
      .filter(|node| node.value().is_element())
      .find(|node| {
        dom::short_text_content(node, MARKER_TEXT_LIMIT)
          .is_some_and(|text| toc::is_toc_title(&text))
      })?;

    root
      .descendants()
      .skip_while(|node| node.id() != marker.id())
      .skip(1)
      .filter(|node| !dom::is_descendant_of(node, marker.id()))
      .find(|node| dom::is_element(node, dom::LIST_TAGS))
  }
}
