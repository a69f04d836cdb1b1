use super::*;

/// Cleans up markup the block editor leaves behind.
///
/// Runs in order: `AAAAA` placeholder paragraphs are dropped, runs of two or
/// more `<br>` elements are removed, and paragraphs left empty (or holding a
/// single `<br>`) are dropped.
pub struct CleanArtifactsStage;

impl Stage for CleanArtifactsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let fragment = context.fragment_mut();

    let placeholders = Self::placeholder_paragraphs(fragment);
    Self::detach_all(fragment, &placeholders);

    let breaks = Self::break_runs(fragment);
    Self::detach_all(fragment, &breaks);

    let empty = Self::empty_paragraphs(fragment);
    Self::detach_all(fragment, &empty);

    trace!(
      placeholders = placeholders.len(),
      breaks = breaks.len(),
      empty = empty.len(),
      "cleaned editor artifacts"
    );

    Ok(())
  }
}

impl CleanArtifactsStage {
  /// Collects every `<br>` run of length two or more, together with the
  /// whitespace inside and directly after it.
  fn break_runs(fragment: &Fragment) -> Vec<NodeId> {
    let Some(root) = fragment.root() else {
      return Vec::new();
    };

    let mut removals = Vec::new();

    for node in root.descendants() {
      if !Self::is_br(&node) || Self::continues_run(&node) {
        continue;
      }

      let run: Vec<NodeRef<'_, Node>> = iter::once(node)
        .chain(
          node.next_siblings().take_while(|sibling| {
            Self::is_br(sibling) || dom::is_whitespace_text(sibling)
          }),
        )
        .collect();

      if run.iter().filter(|node| Self::is_br(node)).count() >= 2 {
        removals.extend(run.iter().map(|node| node.id()));
      }
    }

    removals
  }

  fn continues_run(node: &NodeRef<'_, Node>) -> bool {
    node
      .prev_siblings()
      .find(|sibling| !dom::is_whitespace_text(sibling))
      .is_some_and(|sibling| Self::is_br(&sibling))
  }

  fn detach_all(fragment: &mut Fragment, node_ids: &[NodeId]) {
    for node_id in node_ids {
      fragment.detach(*node_id);
    }
  }

  fn empty_paragraphs(fragment: &Fragment) -> Vec<NodeId> {
    let Some(root) = fragment.root() else {
      return Vec::new();
    };

    root
      .descendants()
      .filter(|node| dom::is_element(node, &["p"]))
      .filter(|paragraph| {
        let mut breaks = 0;

        paragraph.children().all(|child| {
          if Self::is_br(&child) {
            breaks += 1;
            breaks == 1
          } else {
            dom::is_whitespace_text(&child)
          }
        })
      })
      .map(|paragraph| paragraph.id())
      .collect()
  }

  fn is_br(node: &NodeRef<'_, Node>) -> bool {
    dom::is_element(node, &["br"])
  }

  fn placeholder_paragraphs(fragment: &Fragment) -> Vec<NodeId> {
    let Some(root) = fragment.root() else {
      return Vec::new();
    };

    root
      .descendants()
      .filter(|node| dom::is_element(node, &["p"]))
      .filter(|paragraph| {
        paragraph.children().all(|child| child.value().is_text())
          && ARTIFACT_TEXT.is_match(dom::text_content(paragraph).as_str())
      })
      .map(|paragraph| paragraph.id())
      .collect()
  }
}
