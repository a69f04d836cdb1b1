use super::*;

/// Removes table of contents blocks: a heading reading "Table of Contents"
/// immediately followed by a `<ul>` or `<ol>`.
pub struct RemoveTocStage;

impl Stage for RemoveTocStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let blocks = Self::toc_blocks(context.fragment());

    if !blocks.is_empty() {
      debug!(count = blocks.len(), "removing table of contents blocks");
    }

    let fragment = context.fragment_mut();

    for (heading_id, list_id) in blocks {
      fragment.detach(heading_id);
      fragment.detach(list_id);
    }

    Ok(())
  }
}

impl RemoveTocStage {
  fn toc_blocks(fragment: &Fragment) -> Vec<(NodeId, NodeId)> {
    let Some(root) = fragment.root() else {
      return Vec::new();
    };

    root
      .descendants()
      .filter(|node| dom::is_element(node, dom::HEADING_TAGS))
      .filter(|node| toc::is_toc_title(&dom::text_content(node)))
      .filter_map(|heading| {
        dom::next_element_sibling(&heading)
          .filter(|list| dom::is_element(list, dom::LIST_TAGS))
          .map(|list| (heading.id(), list.id()))
      })
      .collect()
  }
}
