use {
  super::*,
  html5ever::serialize::{
    Serialize as HtmlSerialize, SerializeOpts, Serializer, TraversalScope,
    serialize,
  },
  scraper::Html,
  std::io,
};

/// A parsed snippet of post content.
///
/// Post bodies are parsed in `<body>` context, so the tree root holds a
/// synthetic `<html>` element whose children are the snippet's top-level
/// nodes. Only those children are ever serialized back.
#[derive(Debug)]
pub(crate) struct Fragment {
  html: Html,
  root_id: NodeId,
}

impl Fragment {
  pub(crate) fn detach(&mut self, node_id: NodeId) {
    if let Some(mut node) = self.html.tree.get_mut(node_id) {
      node.detach();
    }
  }

  pub(crate) fn element_count(&self) -> usize {
    self.root().map_or(0, |root| {
      root
        .descendants()
        .skip(1)
        .filter(|node| node.value().is_element())
        .count()
    })
  }

  pub(crate) fn parse(markup: &str) -> Self {
    let html = Html::parse_fragment(markup);

    let root_id = html
      .tree
      .root()
      .children()
      .find(|node| node.value().is_element())
      .map_or_else(|| html.tree.root().id(), |node| node.id());

    Self { html, root_id }
  }

  pub(crate) fn root(&self) -> Option<NodeRef<'_, Node>> {
    self.html.tree.get(self.root_id)
  }

  /// Sets attribute `name` on an element, keeping the attribute list sorted
  /// so lookups through [`Element::attr`] keep working.
  pub(crate) fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) {
    let Some(mut node) = self.html.tree.get_mut(node_id) else {
      return;
    };

    let Node::Element(element) = node.value() else {
      return;
    };

    let qualified = QualName::new(None, ns!(), LocalName::from(name));

    match element
      .attrs
      .binary_search_by(|(attribute, _)| attribute.cmp(&qualified))
    {
      Ok(index) => element.attrs[index].1 = StrTendril::from(value),
      Err(index) => element
        .attrs
        .insert(index, (qualified, StrTendril::from(value))),
    }
  }

  pub(crate) fn to_markup(&self) -> String {
    let Some(root) = self.root() else {
      return String::new();
    };

    serialize_nodes(&root.children().collect::<Vec<_>>())
  }

  pub(crate) fn top_level_nodes(&self) -> Vec<NodeRef<'_, Node>> {
    self
      .root()
      .map(|root| root.children().collect())
      .unwrap_or_default()
  }
}

/// Serializes a run of sibling nodes, each including its own tags.
pub(crate) fn serialize_nodes(nodes: &[NodeRef<'_, Node>]) -> String {
  let opts = SerializeOpts {
    scripting_enabled: false,
    traversal_scope: TraversalScope::IncludeNode,
    create_missing_parent: true,
  };

  let mut buffer = Vec::new();

  if serialize(&mut buffer, &SerializableNodes { nodes }, opts).is_ok() {
    String::from_utf8(buffer).unwrap_or_default()
  } else {
    String::new()
  }
}

struct SerializableNodes<'a, 'b> {
  nodes: &'b [NodeRef<'a, Node>],
}

impl SerializableNodes<'_, '_> {
  /// The parser discards a newline directly after these start tags, so one
  /// has to be written back for text that begins with a newline.
  fn drops_leading_newline(element: &Element) -> bool {
    matches!(element.name(), "pre" | "textarea" | "listing")
  }
}

impl HtmlSerialize for SerializableNodes<'_, '_> {
  fn serialize<S: Serializer>(
    &self,
    serializer: &mut S,
    _traversal_scope: TraversalScope,
  ) -> io::Result<()> {
    for node in self.nodes {
      for edge in node.traverse() {
        match edge {
          ego_tree::iter::Edge::Open(node) => match node.value() {
            Node::Doctype(doctype) => {
              serializer.write_doctype(doctype.name())?;
            }
            Node::Comment(comment) => serializer.write_comment(comment)?,
            Node::Text(text) => serializer.write_text(text)?,
            Node::Element(element) => {
              serializer.start_elem(
                element.name.clone(),
                element.attrs.iter().map(|(name, value)| (name, &value[..])),
              )?;

              if Self::drops_leading_newline(element)
                && node.first_child().is_some_and(|child| {
                  matches!(
                    child.value(),
                    Node::Text(text) if text.starts_with('\n')
                  )
                })
              {
                serializer.write_text("\n")?;
              }
            }
            _ => {}
          },
          ego_tree::iter::Edge::Close(node) => {
            if let Some(element) = node.value().as_element() {
              serializer.end_elem(element.name.clone())?;
            }
          }
        }
      }
    }

    Ok(())
  }
}
