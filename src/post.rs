use super::*;

/// A WordPress `{ "rendered": ... }` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
  #[serde(default)]
  pub rendered: String,
}

impl From<&str> for Rendered {
  fn from(rendered: &str) -> Self {
    Self {
      rendered: rendered.to_string(),
    }
  }
}

/// The fields of a WordPress REST API post that content processing reads.
/// Everything else in the post object is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
  pub content: Rendered,
  pub title: Rendered,
  pub date: String,
}

impl Post {
  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn new(content: &str, title: &str, date: &str) -> Self {
    Self {
      content: content.into(),
      title: title.into(),
      date: date.to_string(),
    }
  }
}

/// Everything extracted from one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedPost {
  /// Plain-text title.
  pub title: String,
  pub date: String,
  /// Content with the table of contents stripped and heading ids added.
  pub content: String,
  pub headings: Vec<HeadingDescriptor>,
  pub faqs: Vec<FaqRecord>,
  pub videos: Vec<VideoDescriptor>,
  pub sections: Vec<ParsedSection>,
}

impl ProcessedPost {
  /// JSON-LD objects for the post: an `FAQPage` when it has FAQs, followed by
  /// one `VideoObject` per video.
  pub fn structured_data(&self) -> Vec<serde_json::Value> {
    faq_page_json_ld(&self.faqs)
      .into_iter()
      .chain(video_objects_json_ld(&self.videos))
      .collect()
  }

  pub fn wrapped_content(&self) -> String {
    wrap_sections_with_classes(&self.sections)
  }
}
