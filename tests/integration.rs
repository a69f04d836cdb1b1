use {
  pretty_assertions::assert_eq,
  serde::Deserialize,
  std::{fs, path::PathBuf},
  wp_content::{
    ContentOptions, FaqRecord, HeadingDescriptor, Post, ProcessedPost,
    Processor, SectionType, VideoDescriptor, add_heading_ids, extract_faqs,
    extract_headings, extract_videos, parse_content_into_sections,
    remove_wordpress_toc, wrap_sections_with_classes,
  },
};

macro_rules! test {
  ($name:ident) => {
    paste::paste! {
      #[test]
      fn [<test_ $name>]() {
        TestFixture::load(&stringify!($name).replace('_', "-")).run();
      }
    }
  };
}

#[derive(Debug, Deserialize)]
struct ExpectedSection {
  #[serde(rename = "type")]
  kind: SectionType,
  heading: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExpectedRecords {
  title: String,
  headings: Vec<HeadingDescriptor>,
  faqs: Vec<FaqRecord>,
  videos: Vec<VideoDescriptor>,
  sections: Vec<ExpectedSection>,
}

struct TestFixture {
  expected_html: String,
  expected_records: ExpectedRecords,
  post: Post,
}

impl TestFixture {
  fn load(name: &str) -> Self {
    let base_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
      .join("tests/fixtures")
      .join(name);

    let post = match fs::read_to_string(base_path.join("source.json")) {
      Ok(json) => Post::from_json(&json).expect("Failed to parse source.json"),
      Err(_) => Post::new(
        &fs::read_to_string(base_path.join("source.html"))
          .expect("Failed to read source.html"),
        "",
        "",
      ),
    };

    let expected_html = fs::read_to_string(base_path.join("expected.html"))
      .expect("Failed to read expected.html");

    let expected_records = serde_json::from_str(
      &fs::read_to_string(base_path.join("expected.json"))
        .expect("Failed to read expected.json"),
    )
    .expect("Failed to parse expected.json");

    Self {
      expected_html,
      expected_records,
      post,
    }
  }

  fn run(&self) {
    let processed = Processor::new(self.post.clone(), ContentOptions::default())
      .process()
      .expect("Failed to process post");

    assert_eq!(
      processed.content.trim_end(),
      self.expected_html.trim_end(),
      "Content mismatch"
    );

    let expected = &self.expected_records;

    assert_eq!(processed.title, expected.title, "Title mismatch");
    assert_eq!(processed.headings, expected.headings, "Headings mismatch");
    assert_eq!(processed.faqs, expected.faqs, "FAQ mismatch");
    assert_eq!(processed.videos, expected.videos, "Video mismatch");

    assert_eq!(
      processed
        .sections
        .iter()
        .map(|section| (section.kind, section.heading.clone()))
        .collect::<Vec<_>>(),
      expected
        .sections
        .iter()
        .map(|section| (section.kind, section.heading.clone()))
        .collect::<Vec<_>>(),
      "Section mismatch"
    );

    self.check_composition(&processed);
    self.check_properties(&processed);
  }

  /// The processor agrees with the individual operations run one by one.
  fn check_composition(&self, processed: &ProcessedPost) {
    let source = &self.post.content.rendered;

    let headings = extract_headings(source);

    let content = add_heading_ids(&remove_wordpress_toc(source), &headings);

    assert_eq!(processed.content, content);
    assert_eq!(processed.headings, headings);
    assert_eq!(processed.faqs, extract_faqs(source));
    assert_eq!(
      processed.videos,
      extract_videos(source, &self.post.title.rendered, &self.post.date)
    );
    assert_eq!(processed.sections, parse_content_into_sections(&content));
  }

  fn check_properties(&self, processed: &ProcessedPost) {
    assert_eq!(
      remove_wordpress_toc(&processed.content),
      processed.content,
      "Stripping is not idempotent"
    );

    assert!(
      processed
        .headings
        .iter()
        .all(|heading| !heading.id.is_empty() && !heading.text.is_empty())
    );

    assert!(processed.faqs.iter().all(|faq| {
      !faq.question.is_empty() && !faq.answer.is_empty()
    }));

    let rendered = processed
      .sections
      .iter()
      .map(|section| section.html.as_str())
      .collect::<String>();

    assert_eq!(
      plain_text(&wrap_sections_with_classes(&processed.sections)),
      plain_text(&rendered),
      "Wrapping changed the text"
    );
  }
}

fn plain_text(html: &str) -> String {
  scraper::Html::parse_fragment(html)
    .root_element()
    .text()
    .collect::<String>()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}

test!(accordion_and_videos);
test!(editor_artifacts);
test!(toc_and_faq);

#[test]
fn heading_ids_follow_extracted_toc() {
  let html = "<h2>Table of Content</h2><ul><li>Intro</li><li>Details</li></ul>...<h2>Intro</h2><p>a</p><h2>Details</h2><p>b</p>";

  let headings = extract_headings(html);

  assert_eq!(
    headings,
    vec![
      HeadingDescriptor {
        id: "intro".into(),
        text: "Intro".into(),
        level: 2,
      },
      HeadingDescriptor {
        id: "details".into(),
        text: "Details".into(),
        level: 2,
      },
    ]
  );

  let content = add_heading_ids(&remove_wordpress_toc(html), &headings);

  assert!(content.contains("<h2 id=\"intro\">Intro</h2>"));
  assert!(content.contains("<h2 id=\"details\">Details</h2>"));
}

#[test]
fn operations_fail_open_on_unrelated_markup() {
  let html = "<div><span>nothing to see</span></div>";

  assert_eq!(remove_wordpress_toc(html), html);
  assert_eq!(add_heading_ids(html, &[]), html);
  assert!(extract_headings(html).is_empty());
  assert!(extract_faqs(html).is_empty());
  assert!(extract_videos(html, "t", "d").is_empty());
  assert_eq!(wrap_sections_with_classes(&[]), "");
}
