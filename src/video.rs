use {super::*, chrono::{DateTime, NaiveDateTime}};

const YOUTUBE_HOSTS: &[&str] = &[
  "youtube.com",
  "www.youtube.com",
  "m.youtube.com",
  "youtube-nocookie.com",
  "www.youtube-nocookie.com",
];

const YOUTU_BE: &str = "youtu.be";

const VIMEO_PLAYER: &str = "player.vimeo.com";

/// Playlist embeds use this in place of a video id.
const YOUTUBE_PLAYLIST: &str = "videoseries";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
  YouTube,
  Vimeo,
}

impl VideoProvider {
  /// Reads a provider video id out of an embed `src`.
  pub(crate) fn video_id(self, src: &str) -> Option<String> {
    let url = parse_src(src)?;

    let host = url.host_str()?;

    let mut segments = url.path_segments()?;

    let id = match self {
      Self::YouTube if host == YOUTU_BE => segments.next()?,
      Self::YouTube if YOUTUBE_HOSTS.contains(&host) => {
        (segments.next()? == "embed").then_some(())?;
        segments.next()?
      }
      Self::Vimeo if host == VIMEO_PLAYER => {
        (segments.next()? == "video").then_some(())?;
        segments.next()?
      }
      _ => return None,
    };

    let pattern = match self {
      Self::YouTube => &YOUTUBE_ID,
      Self::Vimeo => &VIMEO_ID,
    };

    if self == Self::YouTube && id == YOUTUBE_PLAYLIST {
      return None;
    }

    pattern.is_match(id).then(|| id.to_string())
  }
}

/// A video embedded in the post, described for `VideoObject` structured
/// data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDescriptor {
  pub provider: VideoProvider,
  pub video_id: String,
  pub url: String,
  pub embed_url: String,
  pub name: String,
  pub description: String,
  pub thumbnail_url: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub upload_date: Option<String>,
}

impl VideoDescriptor {
  pub(crate) fn new(
    provider: VideoProvider,
    video_id: String,
    name: &str,
    description: String,
    date: &str,
  ) -> Self {
    let (url, embed_url, thumbnail_url) = match provider {
      VideoProvider::YouTube => (
        format!("https://www.youtube.com/watch?v={video_id}"),
        format!("https://www.youtube.com/embed/{video_id}"),
        format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg"),
      ),
      VideoProvider::Vimeo => (
        format!("https://vimeo.com/{video_id}"),
        format!("https://player.vimeo.com/video/{video_id}"),
        String::new(),
      ),
    };

    Self {
      provider,
      video_id,
      url,
      embed_url,
      name: name.to_string(),
      description,
      thumbnail_url,
      upload_date: upload_date(date),
    }
  }
}

fn parse_src(src: &str) -> Option<Url> {
  let src = src.trim();

  let absolute = if src.starts_with("//") {
    format!("https:{src}")
  } else {
    src.to_string()
  };

  Url::parse(&absolute).ok()
}

/// The post date, if it is an ISO-8601 date-time with or without offset.
fn upload_date(date: &str) -> Option<String> {
  let date = date.trim();

  let valid = DateTime::parse_from_rfc3339(date).is_ok()
    || NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f").is_ok();

  valid.then(|| date.to_string())
}

/// Describes every YouTube and Vimeo iframe in `html`, YouTube embeds
/// first. `title` may contain markup and is reduced to plain text.
pub fn extract_videos(
  html: &str,
  title: &str,
  date: &str,
) -> Vec<VideoDescriptor> {
  Pipeline::new(
    Context::with_default_options(html)
      .with_post(dom::plain_text(title), date.to_string()),
  )
  .stage(ExtractVideosStage)
  .run_or_log()
  .map(|mut context| context.take_videos())
  .unwrap_or_default()
}
