use super::*;

/// Splits the final content into classified sections.
pub struct ClassifySectionsStage;

impl Stage for ClassifySectionsStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let sections = section::classify(context.fragment());

    context.set_sections(sections);

    Ok(())
  }
}
