use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  pub(crate) fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) -> Result<Context<'a>> {
    for stage in &mut self.stages {
      stage.run(&mut self.context)?;
    }

    Ok(self.context)
  }

  /// Runs the pipeline for one of the crate's free functions.
  ///
  /// Those functions never fail: if a stage does, the error is logged and
  /// `None` is returned so the caller can pass its input through untouched.
  pub(crate) fn run_or_log(self) -> Option<Context<'a>> {
    self
      .run()
      .inspect_err(|error| warn!("content pipeline failed: {error}"))
      .ok()
  }

  pub(crate) fn stage(mut self, stage: impl Stage + 'a) -> Self {
    self.add_stage(Box::new(stage));
    self
  }

  /// The full post pipeline: limits, extraction from the untouched tree,
  /// stripping, id injection and finally section classification.
  pub(crate) fn with_default_stages(context: Context<'a>) -> Self {
    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(ElementLimitStage));
    pipeline.add_stage(Box::new(ExtractHeadingsStage));
    pipeline.add_stage(Box::new(ExtractFaqsStage));
    pipeline.add_stage(Box::new(ExtractVideosStage));
    pipeline.add_stage(Box::new(RemoveTocStage));
    pipeline.add_stage(Box::new(CleanArtifactsStage));
    pipeline.add_stage(Box::new(InjectHeadingIdsStage));
    pipeline.add_stage(Box::new(ClassifySectionsStage));

    pipeline
  }
}
