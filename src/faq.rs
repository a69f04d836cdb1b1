use super::*;

/// A question and its answer, both as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
  pub question: String,
  pub answer: String,
}

impl FaqRecord {
  /// Returns `None` unless both parts are non-empty.
  pub fn new(
    question: impl Into<String>,
    answer: impl Into<String>,
  ) -> Option<Self> {
    let (question, answer) = (question.into(), answer.into());

    (!question.is_empty() && !answer.is_empty())
      .then_some(Self { question, answer })
  }
}

/// Whether `text` is a "Frequently Asked Questions" section heading.
pub(crate) fn is_faq_heading(text: &str) -> bool {
  FAQ_TITLE.is_match(text.trim())
}

/// Collapsible FAQ markup: `<details>`, or any element with a class
/// mentioning `faq` or `accordion`.
pub(crate) fn is_accordion(element: &Element) -> bool {
  element.name() == "details"
    || dom::has_class_containing(element, "faq")
    || dom::has_class_containing(element, "accordion")
}

/// Collects the question and answer pairs of the post's FAQ section.
///
/// The section starts after the "Frequently Asked Questions" heading and
/// runs to the next `<h2>`. Posts without such a heading fall back to
/// `<details>` accordions and Yoast FAQ blocks.
pub fn extract_faqs(html: &str) -> Vec<FaqRecord> {
  Pipeline::new(Context::with_default_options(html))
    .stage(ExtractFaqsStage)
    .run_or_log()
    .map(|mut context| context.take_faqs())
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn records_need_both_parts() {
    assert!(FaqRecord::new("", "answer").is_none());
    assert!(FaqRecord::new("question", "").is_none());
    assert_eq!(
      FaqRecord::new("q", "a"),
      Some(FaqRecord {
        question: "q".into(),
        answer: "a".into(),
      })
    );
  }

  #[test]
  fn faq_heading_variants() {
    assert!(is_faq_heading("Frequently Asked Questions"));
    assert!(is_faq_heading(" frequently  asked questions? "));
    assert!(is_faq_heading("Frequently Asked Questions:"));
    assert!(!is_faq_heading("More Frequently Asked Questions"));
    assert!(!is_faq_heading("FAQ"));
  }

  #[test]
  fn extracts_heading_section() {
    assert_eq!(
      extract_faqs(
        "<h2>Frequently Asked Questions</h2><h3>Q1?</h3><p>A1.</p><p>More.</p><h3>Q2?</h3><p>A2.</p><h2>Next</h2><h3>Q3?</h3><p>A3.</p>"
      ),
      vec![
        FaqRecord::new("Q1?", "A1. More.").unwrap(),
        FaqRecord::new("Q2?", "A2.").unwrap(),
      ]
    );
  }

  #[test]
  fn no_section_means_no_records() {
    assert!(extract_faqs("<h2>Intro</h2><h3>Q?</h3><p>A.</p>").is_empty());
    assert!(extract_faqs("").is_empty());
  }
}
