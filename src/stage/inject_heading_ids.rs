use super::*;

/// Gives body `<h2>`/`<h3>` elements the ids of the table of contents
/// entries they correspond to.
pub struct InjectHeadingIdsStage;

impl Stage for InjectHeadingIdsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let assignments = Self::assignments(context.fragment(), context.headings());

    trace!(count = assignments.len(), "injecting heading ids");

    let fragment = context.fragment_mut();

    for (node_id, id) in assignments {
      fragment.set_attr(node_id, "id", &id);
    }

    Ok(())
  }
}

impl InjectHeadingIdsStage {
  fn assignments(
    fragment: &Fragment,
    headings: &[HeadingDescriptor],
  ) -> Vec<(NodeId, String)> {
    let Some(root) = fragment.root() else {
      return Vec::new();
    };

    let mut cursor = HeadingCursor::new(headings);

    root
      .descendants()
      .filter(|node| dom::is_element(node, &["h2", "h3"]))
      .filter_map(|node| {
        let text = dom::text_content(&node);

        if heading::is_non_content_heading(&text) {
          return None;
        }

        let descriptor = cursor.advance(&text)?;

        (!dom::has_attr(&node, "id"))
          .then(|| (node.id(), descriptor.id.clone()))
      })
      .collect()
  }
}
