use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new(concat!("^", $pat, "$")).unwrap())
  };
}

pub(crate) static ARTIFACT_TEXT: LazyLock<Regex> = re!(r"A{5,}");

pub(crate) static FAQ_TITLE: LazyLock<Regex> =
  re!(r"(?i)frequently\s+asked\s+questions\s*[?:]?");

pub(crate) static SLUG_SEPARATOR: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

pub(crate) static SOURCES_TITLE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)\b(?:sources|references)\b").unwrap());

pub(crate) static TOC_TITLE: LazyLock<Regex> =
  re!(r"(?i)table\s+of\s+contents?\s*:?");

pub(crate) static VIMEO_ID: LazyLock<Regex> = re!(r"[0-9]+");

pub(crate) static WHITESPACE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub(crate) static YOUTUBE_ID: LazyLock<Regex> = re!(r"[A-Za-z0-9_-]+");

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn artifact_text_requires_five_capital_a() {
    assert!(ARTIFACT_TEXT.is_match("AAAAA"));
    assert!(ARTIFACT_TEXT.is_match("AAAAAAAAAA"));
    assert!(!ARTIFACT_TEXT.is_match("AAAA"));
    assert!(!ARTIFACT_TEXT.is_match("aaaaa"));
    assert!(!ARTIFACT_TEXT.is_match("AAAAA B"));
  }

  #[test]
  fn faq_title_is_case_insensitive() {
    assert!(FAQ_TITLE.is_match("Frequently Asked Questions"));
    assert!(FAQ_TITLE.is_match("FREQUENTLY ASKED QUESTIONS?"));
    assert!(FAQ_TITLE.is_match("frequently asked questions:"));
    assert!(!FAQ_TITLE.is_match("Frequently Asked Questions about pricing"));
  }

  #[test]
  fn slug_separator_collapses_runs() {
    assert_eq!(
      SLUG_SEPARATOR.replace_all("what's new -- 2024!", "-").as_ref(),
      "what-s-new-2024-"
    );
  }

  #[test]
  fn sources_title_matches_whole_words() {
    assert!(SOURCES_TITLE.is_match("Sources"));
    assert!(SOURCES_TITLE.is_match("References and further reading"));
    assert!(!SOURCES_TITLE.is_match("Resourceful creators"));
  }

  #[test]
  fn toc_title_accepts_singular_and_plural() {
    assert!(TOC_TITLE.is_match("Table of Content"));
    assert!(TOC_TITLE.is_match("Table of Contents"));
    assert!(TOC_TITLE.is_match("table of contents:"));
    assert!(!TOC_TITLE.is_match("The table of contents below"));
  }

  #[test]
  fn video_ids_reject_path_characters() {
    assert!(YOUTUBE_ID.is_match("dQw4w9WgXcQ"));
    assert!(!YOUTUBE_ID.is_match("abc/def"));
    assert!(VIMEO_ID.is_match("76979871"));
    assert!(!VIMEO_ID.is_match("76979871a"));
  }

  #[test]
  fn whitespace_runs_collapse_to_single_space() {
    assert_eq!(
      WHITESPACE_RUNS.replace_all("foo \n\t bar", " ").as_ref(),
      "foo bar"
    );
  }
}
