use super::*;

pub struct ElementLimitStage;

impl Stage for ElementLimitStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if let Some(limit) = context.options().max_elements {
      let count = context.fragment().element_count();

      if count > limit {
        return Err(Error::ElementLimitExceeded {
          found: count,
          limit,
        });
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn passes_without_limit() {
    let options = ContentOptions::default();

    let mut context =
      Context::new(Fragment::parse("<p>a</p><p>b</p>"), &options);

    assert!(ElementLimitStage.run(&mut context).is_ok());
  }

  #[test]
  fn rejects_content_over_limit() {
    let options = ContentOptions::builder().max_elements(Some(1)).build();

    let mut context =
      Context::new(Fragment::parse("<p>a</p><p>b</p>"), &options);

    assert!(matches!(
      ElementLimitStage.run(&mut context),
      Err(Error::ElementLimitExceeded { found: 2, limit: 1 })
    ));
  }
}
