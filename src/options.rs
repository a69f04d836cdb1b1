pub(crate) const TITLE_PLACEHOLDER: &str = "{title}";

#[derive(Debug, Clone)]
pub struct ContentOptions {
  /// Append `-2`, `-3`, ... to heading ids that would otherwise collide.
  pub dedupe_heading_ids: bool,
  /// Refuse to process content with more elements than this.
  pub max_elements: Option<usize>,
  /// Template for video descriptions; `{title}` is replaced with the post
  /// title.
  pub video_description: String,
}

impl Default for ContentOptions {
  fn default() -> Self {
    Self {
      dedupe_heading_ids: true,
      max_elements: None,
      video_description: format!("Video from \"{TITLE_PLACEHOLDER}\""),
    }
  }
}

impl ContentOptions {
  #[must_use]
  pub fn builder() -> ContentOptionsBuilder {
    ContentOptionsBuilder::default()
  }

  pub(crate) fn video_description_for(&self, title: &str) -> String {
    self.video_description.replace(TITLE_PLACEHOLDER, title)
  }
}

#[derive(Default)]
pub struct ContentOptionsBuilder {
  inner: ContentOptions,
}

impl ContentOptionsBuilder {
  #[must_use]
  pub fn build(self) -> ContentOptions {
    self.inner
  }

  #[must_use]
  pub fn dedupe_heading_ids(self, dedupe_heading_ids: bool) -> Self {
    Self {
      inner: ContentOptions {
        dedupe_heading_ids,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn max_elements(self, max_elements: Option<usize>) -> Self {
    Self {
      inner: ContentOptions {
        max_elements,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn video_description<S>(self, video_description: S) -> Self
  where
    S: Into<String>,
  {
    Self {
      inner: ContentOptions {
        video_description: video_description.into(),
        ..self.inner
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builder_overrides_defaults() {
    let options = ContentOptions::builder()
      .dedupe_heading_ids(false)
      .max_elements(Some(10))
      .video_description("Clip: {title}")
      .build();

    assert!(!options.dedupe_heading_ids);
    assert_eq!(options.max_elements, Some(10));
    assert_eq!(options.video_description_for("Launch"), "Clip: Launch");
  }

  #[test]
  fn default_description_quotes_title() {
    assert_eq!(
      ContentOptions::default().video_description_for("Pricing 101"),
      "Video from \"Pricing 101\""
    );
  }
}
