use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
  /// The processed post as JSON
  #[default]
  Json,
  /// Content wrapped in classified section containers
  Html,
  /// schema.org structured data for FAQs and videos
  JsonLd,
}

#[derive(Debug, Parser)]
#[command(name = "wp-content")]
#[command(
  about = "Normalize WordPress post HTML and extract headings, FAQs and videos",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    value_name = "FILE",
    help = "Post content HTML, or a WordPress REST API post as JSON"
  )]
  input: PathBuf,
  #[arg(long, help = "Treat the input as post JSON (default for .json files)")]
  post: bool,
  #[arg(long, help = "Post title, when the input is plain HTML")]
  title: Option<String>,
  #[arg(long, help = "Post date (ISO-8601), when the input is plain HTML")]
  date: Option<String>,
  #[arg(long, value_name = "N", help = "Refuse content with more elements")]
  max_elements: Option<usize>,
  #[arg(long, help = "Do not suffix duplicate heading ids")]
  keep_duplicate_ids: bool,
  #[arg(long, value_enum, default_value_t = Format::Json)]
  format: Format,
  #[arg(long, help = "Pretty-print JSON output")]
  pretty: bool,
}

impl Arguments {
  fn is_post_json(&self) -> bool {
    self.post
      || self
        .input
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"))
  }

  fn options(&self) -> ContentOptions {
    ContentOptions::builder()
      .dedupe_heading_ids(!self.keep_duplicate_ids)
      .max_elements(self.max_elements)
      .build()
  }

  fn read_post(&self) -> Result<Post> {
    let source = fs::read_to_string(&self.input).with_context(|| {
      format!("failed to read file from `{}`", self.input.display())
    })?;

    let mut post = if self.is_post_json() {
      Post::from_json(&source).with_context(|| {
        format!("failed to decode post from `{}`", self.input.display())
      })?
    } else {
      Post::new(&source, "", "")
    };

    if let Some(title) = &self.title {
      post.title = title.as_str().into();
    }

    if let Some(date) = &self.date {
      post.date.clone_from(date);
    }

    Ok(post)
  }

  fn render(&self, processed: &ProcessedPost) -> Result<String> {
    let value = match self.format {
      Format::Html => return Ok(processed.wrapped_content()),
      Format::Json => serde_json::to_value(processed)?,
      Format::JsonLd => serde_json::Value::from(processed.structured_data()),
    };

    Ok(if self.pretty {
      serde_json::to_string_pretty(&value)?
    } else {
      value.to_string()
    })
  }

  pub(crate) fn run(self) -> Result {
    let post = self.read_post()?;

    let processed = Processor::new(post, self.options())
      .process()
      .context("failed to process post content")?;

    println!("{}", self.render(&processed)?);

    Ok(())
  }
}
