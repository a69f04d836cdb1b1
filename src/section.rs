use super::*;

/// Layout class of a content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
  HeadingPara,
  HeadingParaList,
  HeadingList,
  Table,
  Faq,
  List,
  Quote,
  Image,
  Intro,
  Sources,
  Other,
}

impl SectionType {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::HeadingPara => "heading-para",
      Self::HeadingParaList => "heading-para-list",
      Self::HeadingList => "heading-list",
      Self::Table => "table",
      Self::Faq => "faq",
      Self::List => "list",
      Self::Quote => "quote",
      Self::Image => "image",
      Self::Intro => "intro",
      Self::Sources => "sources",
      Self::Other => "other",
    }
  }

  /// CSS class used by [`wrap_sections_with_classes`].
  pub fn class_name(self) -> String {
    format!("section-{}", self.as_str())
  }
}

impl Display for SectionType {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSection {
  #[serde(rename = "type")]
  pub kind: SectionType,
  pub html: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub heading: Option<String>,
}

/// What a section contains, gathered in one walk over its nodes.
#[derive(Debug, Default)]
struct Features {
  accordion: bool,
  image: bool,
  list: bool,
  paragraph: bool,
  quote: bool,
  table: bool,
  text: bool,
}

impl Features {
  fn collect(nodes: &[NodeRef<'_, Node>]) -> Self {
    let mut features = Self::default();

    for node in nodes.iter().flat_map(|node| node.descendants()) {
      match node.value() {
        Node::Text(text) => features.text |= !text.trim().is_empty(),
        Node::Element(element) => {
          match element.name() {
            "table" => features.table = true,
            "blockquote" => features.quote = true,
            "img" | "figure" => features.image = true,
            "p" => features.paragraph = true,
            "ul" | "ol" => features.list = true,
            _ => {}
          }

          features.quote |= dom::has_class_containing(element, "wp-block-quote")
            || dom::has_class_containing(element, "wp-block-pullquote");

          features.accordion |= is_accordion(element);
        }
        _ => {}
      }
    }

    features
  }
}

struct Classifier<'a> {
  first: bool,
  heading: Option<String>,
  nodes: Vec<NodeRef<'a, Node>>,
}

impl Classifier<'_> {
  fn classify(self) -> ParsedSection {
    let html = fragment::serialize_nodes(&self.nodes);

    let heading = self.heading.as_deref().unwrap_or_default();

    let features = Features::collect(&self.nodes);

    let kind = if faq::is_faq_heading(heading) || features.accordion {
      SectionType::Faq
    } else if SOURCES_TITLE.is_match(heading) {
      SectionType::Sources
    } else if toc::is_toc_title(heading) {
      return ParsedSection {
        kind: SectionType::Other,
        html: String::new(),
        heading: self.heading,
      };
    } else if features.table {
      SectionType::Table
    } else if features.quote {
      SectionType::Quote
    } else if features.image && !features.paragraph {
      SectionType::Image
    } else {
      Self::layout(self.heading.is_some(), self.first, &features)
    };

    ParsedSection {
      kind,
      html,
      heading: self.heading,
    }
  }

  fn layout(heading: bool, first: bool, features: &Features) -> SectionType {
    match (heading, features.paragraph, features.list) {
      (true, true, true) => SectionType::HeadingParaList,
      (true, false, true) => SectionType::HeadingList,
      (true, true, false) => SectionType::HeadingPara,
      (false, paragraph, list)
        if first && (paragraph || (features.text && !list)) =>
      {
        SectionType::Intro
      }
      (_, _, true) => SectionType::List,
      _ => SectionType::Other,
    }
  }
}

/// Splits the content at its top-level `<h2>` elements and classifies each
/// part.
pub(crate) fn classify(fragment: &Fragment) -> Vec<ParsedSection> {
  let mut sections = Vec::new();

  let mut current = Classifier {
    first: true,
    heading: None,
    nodes: Vec::new(),
  };

  for node in fragment.top_level_nodes() {
    if dom::is_element(&node, &["h2"]) {
      let previous = mem::replace(
        &mut current,
        Classifier {
          first: false,
          heading: Some(dom::text_content(&node)),
          nodes: vec![node],
        },
      );

      if previous.heading.is_some()
        || previous.nodes.iter().any(|node| !dom::is_whitespace_text(node))
      {
        sections.push(previous.classify());
      }
    } else {
      current.nodes.push(node);
    }
  }

  if current.heading.is_some()
    || current.nodes.iter().any(|node| !dom::is_whitespace_text(node))
  {
    sections.push(current.classify());
  }

  trace!(count = sections.len(), "classified content sections");

  sections
}

/// Splits post content into sections at its top-level `<h2>` headings and
/// classifies each one for styling.
pub fn parse_content_into_sections(html: &str) -> Vec<ParsedSection> {
  Pipeline::new(Context::with_default_options(html))
    .stage(ClassifySectionsStage)
    .run_or_log()
    .map(|mut context| context.take_sections())
    .unwrap_or_default()
}

/// Wraps every non-empty section in a `<div>` carrying its layout class.
pub fn wrap_sections_with_classes(sections: &[ParsedSection]) -> String {
  sections
    .iter()
    .filter(|section| !section.html.is_empty())
    .map(|section| {
      format!(
        "<div class=\"content-section {}\">{}</div>",
        section.kind.class_name(),
        section.html
      )
    })
    .collect()
}
