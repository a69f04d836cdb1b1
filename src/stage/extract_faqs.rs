use super::*;

/// Collects FAQ records from the untouched content.
pub struct ExtractFaqsStage;

impl Stage for ExtractFaqsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(root) = context.fragment().root() else {
      return Ok(());
    };

    let faqs = match Self::faq_heading(&root) {
      Some(heading) => Self::from_section(&root, heading),
      None => Self::from_accordions(&root),
    };

    debug!(count = faqs.len(), "extracted faq records");

    context.set_faqs(faqs);

    Ok(())
  }
}

impl ExtractFaqsStage {
  fn faq_heading<'a>(root: &NodeRef<'a, Node>) -> Option<NodeRef<'a, Node>> {
    root.descendants().find(|node| {
      dom::is_element(node, &["h2", "h3"])
        && faq::is_faq_heading(&dom::text_content(node))
    })
  }

  /// Questions are `<h3>`/`<h4>` headings between the FAQ heading and the
  /// next `<h2>`; answers are the paragraphs after each question.
  fn from_section(
    root: &NodeRef<'_, Node>,
    heading: NodeRef<'_, Node>,
  ) -> Vec<FaqRecord> {
    let mut records = Vec::new();
    let mut question: Option<(NodeId, String)> = None;
    let mut answer: Vec<String> = Vec::new();

    let mut flush = |question: &mut Option<(NodeId, String)>,
                     answer: &mut Vec<String>| {
      if let Some((_, text)) = question.take() {
        records.extend(FaqRecord::new(text, answer.join(" ")));
      }
      answer.clear();
    };

    let section = root
      .descendants()
      .skip_while(|node| node.id() != heading.id())
      .skip(1)
      .filter(|node| !dom::is_descendant_of(node, heading.id()));

    for node in section {
      if let Some((question_id, _)) = &question
        && dom::is_descendant_of(&node, *question_id)
      {
        continue;
      }

      match dom::heading_level(&node) {
        Some(2) => break,
        Some(3 | 4) => {
          flush(&mut question, &mut answer);
          question = Some((node.id(), dom::text_content(&node)));
        }
        Some(_) => flush(&mut question, &mut answer),
        None => {
          if question.is_some() && dom::is_element(&node, &["p"]) {
            let text = dom::text_content(&node);

            if !text.is_empty() {
              answer.push(text);
            }
          }
        }
      }
    }

    flush(&mut question, &mut answer);

    records
  }

  fn from_accordions(root: &NodeRef<'_, Node>) -> Vec<FaqRecord> {
    let mut records = Vec::new();

    for node in root.descendants() {
      let Some(element) = dom::element(&node) else {
        continue;
      };

      if element.name() == "details" {
        records.extend(Self::from_details(&node));
      } else if element.has_class(
        "schema-faq-section",
        CaseSensitivity::AsciiCaseInsensitive,
      ) {
        records.extend(Self::from_yoast(&node));
      }
    }

    records
  }

  /// The `<summary>` is the question; the answer is the paragraphs of the
  /// disclosure, or its remaining text when it has none.
  fn from_details(details: &NodeRef<'_, Node>) -> Option<FaqRecord> {
    let summary = details
      .children()
      .find(|child| dom::is_element(child, &["summary"]))?;

    let paragraphs = details
      .descendants()
      .filter(|node| dom::is_element(node, &["p"]))
      .filter(|node| !dom::is_descendant_of(node, summary.id()))
      .map(|node| dom::text_content(&node))
      .filter(|text| !text.is_empty())
      .collect::<Vec<_>>();

    let answer = if paragraphs.is_empty() {
      dom::text_content_excluding(details, &["summary"])
    } else {
      paragraphs.join(" ")
    };

    FaqRecord::new(dom::text_content(&summary), answer)
  }

  fn from_yoast(section: &NodeRef<'_, Node>) -> Option<FaqRecord> {
    let part = |class: &str| {
      section
        .descendants()
        .find(|node| {
          dom::element(node).is_some_and(|element| {
            element
              .has_class(class, CaseSensitivity::AsciiCaseInsensitive)
          })
        })
        .map(|node| dom::text_content(&node))
        .unwrap_or_default()
    };

    FaqRecord::new(part("schema-faq-question"), part("schema-faq-answer"))
  }
}
