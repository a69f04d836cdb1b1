use super::*;

mod classify_sections;
mod clean_artifacts;
mod element_limit;
mod extract_faqs;
mod extract_headings;
mod extract_videos;
mod inject_heading_ids;
mod remove_toc;

pub use {
  classify_sections::ClassifySectionsStage,
  clean_artifacts::CleanArtifactsStage, element_limit::ElementLimitStage,
  extract_faqs::ExtractFaqsStage, extract_headings::ExtractHeadingsStage,
  extract_videos::ExtractVideosStage,
  inject_heading_ids::InjectHeadingIdsStage, remove_toc::RemoveTocStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
