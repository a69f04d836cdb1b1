//! Normalization of WordPress-rendered post HTML.
//!
//! The crate parses `content.rendered` markup into a DOM and runs a small
//! pipeline of stages over it: the embedded table of contents is extracted
//! and stripped, heading anchors are injected, FAQ and video records are
//! collected for structured data, and the final content is split into
//! classified sections for styling.
//!
//! Every operation fails open. Markup that does not match what a stage looks
//! for is passed through unchanged, and extractors return empty vectors.

use {
  context::Context,
  ego_tree::{NodeId, NodeRef},
  faq::is_accordion,
  fragment::Fragment,
  heading::{HeadingCursor, HeadingIds},
  html5ever::{LocalName, QualName, ns},
  pipeline::Pipeline,
  re::{
    ARTIFACT_TEXT, FAQ_TITLE, SLUG_SEPARATOR, SOURCES_TITLE, TOC_TITLE,
    VIMEO_ID, WHITESPACE_RUNS, YOUTUBE_ID,
  },
  regex::Regex,
  scraper::{CaseSensitivity, Node, StrTendril, node::Element},
  serde::{Deserialize, Serialize},
  stage::{
    ClassifySectionsStage, CleanArtifactsStage, ElementLimitStage,
    ExtractFaqsStage, ExtractHeadingsStage, ExtractVideosStage,
    InjectHeadingIdsStage, RemoveTocStage, Stage,
  },
  std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display, Formatter},
    iter, mem,
    sync::LazyLock,
  },
  tracing::{debug, trace, warn},
  url::Url,
};

pub use crate::{
  error::Error,
  faq::{FaqRecord, extract_faqs},
  heading::{
    HeadingDescriptor, add_heading_ids, extract_headings, slugify,
  },
  options::{ContentOptions, ContentOptionsBuilder},
  post::{Post, ProcessedPost, Rendered},
  processor::Processor,
  section::{
    ParsedSection, SectionType, parse_content_into_sections,
    wrap_sections_with_classes,
  },
  structured_data::{faq_page_json_ld, video_objects_json_ld},
  toc::remove_wordpress_toc,
  video::{VideoDescriptor, VideoProvider, extract_videos},
};

#[cfg(test)]
macro_rules! test {
  (
    name: $name:ident,
    stage: $stage:expr,
    content: $content:expr,
    expected: $expected:expr $(,)?
  ) => {
    #[test]
    fn $name() {
      let options = ContentOptions::default();

      let mut context = Context::new(Fragment::parse($content), &options);

      $stage.run(&mut context).unwrap();

      pretty_assertions::assert_eq!(context.fragment().to_markup(), $expected);
    }
  };
}

mod context;
mod dom;
mod error;
mod faq;
mod fragment;
mod heading;
mod options;
mod pipeline;
mod post;
mod processor;
mod re;
mod section;
mod stage;
mod structured_data;
mod toc;
mod video;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
