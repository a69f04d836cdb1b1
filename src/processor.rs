use super::*;

/// Runs every content operation over one post with a single parse.
///
/// Headings, FAQs and videos are read from the untouched content before the
/// table of contents is stripped, then heading ids are injected and the final
/// content is split into sections.
pub struct Processor {
  options: ContentOptions,
  post: Post,
}

impl Processor {
  pub fn new(post: Post, options: ContentOptions) -> Self {
    Self { options, post }
  }

  pub fn process(&self) -> Result<ProcessedPost> {
    let title = dom::plain_text(&self.post.title.rendered);

    let context = Context::new(
      Fragment::parse(&self.post.content.rendered),
      &self.options,
    )
    .with_post(title.clone(), self.post.date.clone());

    let mut context = Pipeline::with_default_stages(context).run()?;

    Ok(ProcessedPost {
      title,
      date: self.post.date.clone(),
      content: context.fragment().to_markup(),
      headings: context.take_headings(),
      faqs: context.take_faqs(),
      videos: context.take_videos(),
      sections: context.take_sections(),
    })
  }
}
