use super::*;

static DEFAULT_OPTIONS: LazyLock<ContentOptions> =
  LazyLock::new(ContentOptions::default);

pub(crate) struct Context<'a> {
  date: String,
  faqs: Vec<FaqRecord>,
  fragment: Fragment,
  headings: Vec<HeadingDescriptor>,
  options: &'a ContentOptions,
  sections: Vec<ParsedSection>,
  title: String,
  videos: Vec<VideoDescriptor>,
}

impl<'a> Context<'a> {
  pub(crate) fn date(&self) -> &str {
    &self.date
  }

  pub(crate) fn fragment(&self) -> &Fragment {
    &self.fragment
  }

  pub(crate) fn fragment_mut(&mut self) -> &mut Fragment {
    &mut self.fragment
  }

  pub(crate) fn headings(&self) -> &[HeadingDescriptor] {
    &self.headings
  }

  pub(crate) fn new(fragment: Fragment, options: &'a ContentOptions) -> Self {
    Self {
      date: String::new(),
      faqs: Vec::new(),
      fragment,
      headings: Vec::new(),
      options,
      sections: Vec::new(),
      title: String::new(),
      videos: Vec::new(),
    }
  }

  pub(crate) fn with_default_options(markup: &str) -> Context<'static> {
    Context::new(Fragment::parse(markup), &DEFAULT_OPTIONS)
  }

  pub(crate) fn options(&self) -> &ContentOptions {
    self.options
  }

  pub(crate) fn set_faqs(&mut self, faqs: Vec<FaqRecord>) {
    self.faqs = faqs;
  }

  pub(crate) fn set_headings(&mut self, headings: Vec<HeadingDescriptor>) {
    self.headings = headings;
  }

  pub(crate) fn set_sections(&mut self, sections: Vec<ParsedSection>) {
    self.sections = sections;
  }

  pub(crate) fn set_videos(&mut self, videos: Vec<VideoDescriptor>) {
    self.videos = videos;
  }

  pub(crate) fn take_faqs(&mut self) -> Vec<FaqRecord> {
    mem::take(&mut self.faqs)
  }

  pub(crate) fn take_headings(&mut self) -> Vec<HeadingDescriptor> {
    mem::take(&mut self.headings)
  }

  pub(crate) fn take_sections(&mut self) -> Vec<ParsedSection> {
    mem::take(&mut self.sections)
  }

  pub(crate) fn take_videos(&mut self) -> Vec<VideoDescriptor> {
    mem::take(&mut self.videos)
  }

  pub(crate) fn title(&self) -> &str {
    &self.title
  }

  pub(crate) fn with_post(mut self, title: String, date: String) -> Self {
    self.title = title;
    self.date = date;
    self
  }
}
