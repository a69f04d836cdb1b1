use super::*;

pub(crate) const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

pub(crate) const LIST_TAGS: &[&str] = &["ul", "ol"];

pub(crate) fn element<'a>(node: &NodeRef<'a, Node>) -> Option<&'a Element> {
  node.value().as_element()
}

pub(crate) fn element_name<'a>(node: &NodeRef<'a, Node>) -> Option<&'a str> {
  element(node).map(Element::name)
}

pub(crate) fn is_element(node: &NodeRef<'_, Node>, names: &[&str]) -> bool {
  element_name(node).is_some_and(|name| names.contains(&name))
}

pub(crate) fn heading_level(node: &NodeRef<'_, Node>) -> Option<u8> {
  match element_name(node)? {
    "h1" => Some(1),
    "h2" => Some(2),
    "h3" => Some(3),
    "h4" => Some(4),
    "h5" => Some(5),
    "h6" => Some(6),
    _ => None,
  }
}

pub(crate) fn has_attr(node: &NodeRef<'_, Node>, name: &str) -> bool {
  element(node).is_some_and(|element| element.attr(name).is_some())
}

pub(crate) fn has_class_containing(element: &Element, needle: &str) -> bool {
  element
    .classes()
    .any(|class| class.to_ascii_lowercase().contains(needle))
}

pub(crate) fn is_whitespace_text(node: &NodeRef<'_, Node>) -> bool {
  matches!(node.value(), Node::Text(text) if text.trim().is_empty())
}

/// Whitespace text and comments do not separate two elements.
pub(crate) fn is_insignificant(node: &NodeRef<'_, Node>) -> bool {
  is_whitespace_text(node) || node.value().is_comment()
}

pub(crate) fn next_element_sibling<'a>(
  node: &NodeRef<'a, Node>,
) -> Option<NodeRef<'a, Node>> {
  node
    .next_siblings()
    .find(|sibling| !is_insignificant(sibling))
    .filter(|sibling| sibling.value().is_element())
}

pub(crate) fn is_descendant_of(
  node: &NodeRef<'_, Node>,
  ancestor: NodeId,
) -> bool {
  node.ancestors().any(|parent| parent.id() == ancestor)
}

pub(crate) fn normalize_whitespace(text: &str) -> String {
  WHITESPACE_RUNS.replace_all(text, " ").trim().to_string()
}

/// Text of `node` with whitespace collapsed. `<br>` counts as a space.
pub(crate) fn text_content(node: &NodeRef<'_, Node>) -> String {
  text_content_excluding(node, &[])
}

/// Like [`text_content`], skipping the subtrees of elements named in
/// `excluded`.
pub(crate) fn text_content_excluding(
  node: &NodeRef<'_, Node>,
  excluded: &[&str],
) -> String {
  let mut buffer = String::new();

  collect_text(node, excluded, &mut buffer);

  normalize_whitespace(&buffer)
}

fn collect_text(
  node: &NodeRef<'_, Node>,
  excluded: &[&str],
  buffer: &mut String,
) {
  for child in node.children() {
    match child.value() {
      Node::Text(text) => buffer.push_str(text),
      Node::Element(element) if element.name() == "br" => buffer.push(' '),
      Node::Element(element) if !excluded.contains(&element.name()) => {
        collect_text(&child, excluded, buffer);
      }
      _ => {}
    }
  }
}

/// Like [`text_content`], but gives up once the subtree holds more than
/// `limit` non-whitespace characters.
pub(crate) fn short_text_content(
  node: &NodeRef<'_, Node>,
  limit: usize,
) -> Option<String> {
  let mut buffer = String::new();

  let mut seen = 0;

  collect_short_text(node, limit, &mut buffer, &mut seen)
    .then(|| normalize_whitespace(&buffer))
}

fn collect_short_text(
  node: &NodeRef<'_, Node>,
  limit: usize,
  buffer: &mut String,
  seen: &mut usize,
) -> bool {
  for child in node.children() {
    match child.value() {
      Node::Text(text) => {
        *seen += text.chars().filter(|c| !c.is_whitespace()).count();

        if *seen > limit {
          return false;
        }

        buffer.push_str(text);
      }
      Node::Element(element) if element.name() == "br" => buffer.push(' '),
      Node::Element(_) => {
        if !collect_short_text(&child, limit, buffer, seen) {
          return false;
        }
      }
      _ => {}
    }
  }

  true
}

/// Reduces a snippet of HTML, such as a rendered post title, to plain text.
pub(crate) fn plain_text(markup: &str) -> String {
  let fragment = Fragment::parse(markup);

  fragment
    .root()
    .map(|root| text_content(&root))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn first<'a>(fragment: &'a Fragment, name: &str) -> NodeRef<'a, Node> {
    fragment
      .root()
      .unwrap()
      .descendants()
      .find(|node| element_name(node) == Some(name))
      .unwrap()
  }

  #[test]
  fn text_content_collapses_whitespace_and_breaks() {
    let fragment =
      Fragment::parse("<p>  Hello<br>world\n <em>again</em>  </p>");

    assert_eq!(text_content(&first(&fragment, "p")), "Hello world again");
  }

  #[test]
  fn text_content_excluding_skips_nested_lists() {
    let fragment = Fragment::parse(
      "<ul><li>Parent <ul><li>Child</li></ul></li></ul>",
    );

    assert_eq!(
      text_content_excluding(&first(&fragment, "li"), LIST_TAGS),
      "Parent"
    );
  }

  #[test]
  fn short_text_content_stops_past_the_limit() {
    let fragment = Fragment::parse(
      "<div><p>Table <em>of</em>\n contents</p><p>and much more</p></div>",
    );

    assert_eq!(
      short_text_content(&first(&fragment, "p"), 16).as_deref(),
      Some("Table of contents")
    );
    assert_eq!(short_text_content(&first(&fragment, "div"), 16), None);
    assert_eq!(short_text_content(&first(&fragment, "p"), 14), None);
  }

  #[test]
  fn heading_levels() {
    let fragment = Fragment::parse("<h3>Three</h3><p>Para</p>");

    assert_eq!(heading_level(&first(&fragment, "h3")), Some(3));
    assert_eq!(heading_level(&first(&fragment, "p")), None);
  }

  #[test]
  fn next_element_sibling_skips_whitespace_and_comments() {
    let fragment = Fragment::parse("<h2>A</h2>\n<!-- toc -->\n<ul></ul>");

    let next = next_element_sibling(&first(&fragment, "h2")).unwrap();

    assert_eq!(element_name(&next), Some("ul"));
  }

  #[test]
  fn next_element_sibling_stops_at_text() {
    let fragment = Fragment::parse("<h2>A</h2> stray text <ul></ul>");

    assert!(next_element_sibling(&first(&fragment, "h2")).is_none());
  }

  #[test]
  fn plain_text_decodes_entities() {
    assert_eq!(plain_text("Tips &amp; <em>Tricks</em>"), "Tips & Tricks");
    assert_eq!(plain_text(""), "");
  }

  #[test]
  fn class_matching_is_case_insensitive() {
    let fragment = Fragment::parse("<div class=\"wp-block-FAQ-item\"></div>");

    let node = first(&fragment, "div");

    assert!(has_class_containing(element(&node).unwrap(), "faq"));
    assert!(!has_class_containing(element(&node).unwrap(), "accordion"));
  }
}
