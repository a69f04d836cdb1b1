use super::*;

/// Describes the YouTube and Vimeo iframes of the content.
///
/// Providers are scanned one after the other, so every YouTube embed comes
/// before every Vimeo embed regardless of document order.
pub struct ExtractVideosStage;

impl Stage for ExtractVideosStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let sources = Self::iframe_sources(context.fragment());

    let description = context.options().video_description_for(context.title());

    let videos = [VideoProvider::YouTube, VideoProvider::Vimeo]
      .into_iter()
      .flat_map(|provider| {
        sources
          .iter()
          .filter_map(move |src| provider.video_id(src))
          .map(move |video_id| (provider, video_id))
      })
      .map(|(provider, video_id)| {
        VideoDescriptor::new(
          provider,
          video_id,
          context.title(),
          description.clone(),
          context.date(),
        )
      })
      .collect::<Vec<_>>();

    debug!(count = videos.len(), "extracted embedded videos");

    context.set_videos(videos);

    Ok(())
  }
}

impl ExtractVideosStage {
  /// `src` of every iframe, falling back to `data-src` for lazy embeds.
  fn iframe_sources(fragment: &Fragment) -> Vec<String> {
    let Some(root) = fragment.root() else {
      return Vec::new();
    };

    root
      .descendants()
      .filter_map(|node| dom::element(&node))
      .filter(|element| element.name() == "iframe")
      .filter_map(|element| {
        element
          .attr("src")
          .filter(|src| !src.trim().is_empty())
          .or_else(|| element.attr("data-src"))
          .map(str::to_string)
      })
      .collect()
  }
}
