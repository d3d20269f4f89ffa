use nirvana::assessment::{Catalog, Definition, DefinitionLoader};
use nirvana::error::AppError;
use std::borrow::Cow;
use std::path::Path;

/// A definition file wins over a catalog id when both are given.
pub(crate) fn resolve_definition(
    assessment: Option<&str>,
    definition_path: Option<&Path>,
) -> Result<Cow<'static, Definition>, AppError> {
    if let Some(path) = definition_path {
        let definition = DefinitionLoader::from_path(path)?;
        return Ok(Cow::Owned(definition));
    }

    let id = assessment.unwrap_or_default();
    let definition = Catalog::bundled().require(id)?;
    Ok(Cow::Borrowed(definition))
}

pub(crate) fn scale_legend(definition: &Definition) -> String {
    let scale = definition.scale();
    scale
        .points()
        .map(|value| match scale.label(value) {
            Some(label) => format!("{value}={label}"),
            None => value.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
