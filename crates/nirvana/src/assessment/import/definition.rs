use super::super::domain::{AssessmentError, Definition, DefinitionData};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum DefinitionLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Assessment(AssessmentError),
}

impl std::fmt::Display for DefinitionLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionLoadError::Io(err) => {
                write!(f, "failed to read questionnaire definition: {}", err)
            }
            DefinitionLoadError::Json(err) => {
                write!(f, "malformed questionnaire definition: {}", err)
            }
            DefinitionLoadError::Assessment(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DefinitionLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefinitionLoadError::Io(err) => Some(err),
            DefinitionLoadError::Json(err) => Some(err),
            DefinitionLoadError::Assessment(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DefinitionLoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for DefinitionLoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<AssessmentError> for DefinitionLoadError {
    fn from(err: AssessmentError) -> Self {
        Self::Assessment(err)
    }
}

/// Loads custom questionnaires from JSON. Syntax and shape problems surface as `Json`;
/// a well-formed document describing an unusable questionnaire surfaces as
/// `Assessment(InvalidDefinition)`.
pub struct DefinitionLoader;

impl DefinitionLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Definition, DefinitionLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Definition, DefinitionLoadError> {
        let data: DefinitionData = serde_json::from_reader(reader)?;
        let definition = Definition::try_from(data)?;
        Ok(definition)
    }
}
