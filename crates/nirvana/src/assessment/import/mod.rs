mod definition;
mod parser;

pub use definition::{DefinitionLoadError, DefinitionLoader};

use super::domain::{AssessmentError, Definition};
use super::responses::ResponseSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum ResponseImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    MalformedValue { item_id: String, raw: String },
    MalformedPair(String),
    Assessment(AssessmentError),
}

impl std::fmt::Display for ResponseImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseImportError::Io(err) => write!(f, "failed to read answers: {}", err),
            ResponseImportError::Csv(err) => write!(f, "invalid answers CSV data: {}", err),
            ResponseImportError::MalformedValue { item_id, raw } => write!(
                f,
                "answer '{}' for item '{}' is not a whole number",
                raw, item_id
            ),
            ResponseImportError::MalformedPair(pair) => {
                write!(f, "expected ITEM=VALUE, got '{}'", pair)
            }
            ResponseImportError::Assessment(err) => {
                write!(f, "could not record imported answer: {}", err)
            }
        }
    }
}

impl std::error::Error for ResponseImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResponseImportError::Io(err) => Some(err),
            ResponseImportError::Csv(err) => Some(err),
            ResponseImportError::Assessment(err) => Some(err),
            ResponseImportError::MalformedValue { .. } | ResponseImportError::MalformedPair(_) => {
                None
            }
        }
    }
}

impl From<std::io::Error> for ResponseImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ResponseImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<AssessmentError> for ResponseImportError {
    fn from(err: AssessmentError) -> Self {
        Self::Assessment(err)
    }
}

/// Builds validated response sets from answers collected outside the crate.
pub struct ResponseImporter;

impl ResponseImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        definition: &Definition,
    ) -> Result<ResponseSet, ResponseImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, definition)
    }

    /// Import an `item_id,value` CSV. Blank values are skipped questions; rows for
    /// items outside the definition are ignored. Later rows win over earlier ones.
    pub fn from_reader<R: Read>(
        reader: R,
        definition: &Definition,
    ) -> Result<ResponseSet, ResponseImportError> {
        let mut responses = ResponseSet::new();
        let mut ignored = 0usize;

        for record in parser::parse_records(reader)? {
            let Some(raw) = record.raw_value else {
                continue;
            };
            if !definition.contains_item(&record.item_id) {
                ignored += 1;
                continue;
            }

            let value = parse_value(&record.item_id, &raw)?;
            responses.record(definition, &record.item_id, value)?;
        }

        if ignored > 0 {
            warn!(
                assessment = definition.id(),
                ignored, "answers for unknown items were ignored"
            );
        }
        debug!(
            assessment = definition.id(),
            answered = responses.len(),
            "answers imported"
        );

        Ok(responses)
    }

    /// Import `item=value` pairs. Unlike the CSV path, an unknown item is an error.
    pub fn from_pairs<I, S>(
        pairs: I,
        definition: &Definition,
    ) -> Result<ResponseSet, ResponseImportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut responses = ResponseSet::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (item_id, raw) = parser::split_pair(pair)
                .ok_or_else(|| ResponseImportError::MalformedPair(pair.to_string()))?;
            let value = parse_value(item_id, raw)?;
            responses.record(definition, item_id, value)?;
        }
        Ok(responses)
    }
}

fn parse_value(item_id: &str, raw: &str) -> Result<i32, ResponseImportError> {
    parser::strip_quotes(raw)
        .parse::<i32>()
        .map_err(|_| ResponseImportError::MalformedValue {
            item_id: item_id.to_string(),
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{Item, Scale};
    use std::io::Cursor;

    fn definition() -> Definition {
        Definition::new(
            "sleep",
            "Sleep",
            "",
            Scale::LIKERT_FIVE,
            vec![
                Item::new("s1", "I fall asleep easily."),
                Item::reversed("s2", "I wake up at night."),
                Item::new("s3", "I feel rested."),
            ],
        )
        .expect("valid definition")
    }

    #[test]
    fn csv_rows_become_answers() {
        let csv = "item_id,value\ns1,4\n's2','2'\ns3,\n";
        let responses = ResponseImporter::from_reader(Cursor::new(csv), &definition())
            .expect("import succeeds");

        assert_eq!(responses.get("s1"), Some(4));
        assert_eq!(responses.get("s2"), Some(2));
        assert!(!responses.contains("s3"));
    }

    #[test]
    fn csv_accepts_header_aliases_and_ignores_unknown_items() {
        let csv = "question,answer\ns1,1\nzz,5\ns1,3\n";
        let responses = ResponseImporter::from_reader(Cursor::new(csv), &definition())
            .expect("import succeeds");

        assert_eq!(responses.len(), 1);
        assert_eq!(responses.get("s1"), Some(3));
    }

    #[test]
    fn csv_rejects_off_scale_answers() {
        let csv = "item_id,value\ns1,7\n";
        let error = ResponseImporter::from_reader(Cursor::new(csv), &definition())
            .expect_err("seven is off scale");

        match error {
            ResponseImportError::Assessment(AssessmentError::OutOfRangeAnswer { value, .. }) => {
                assert_eq!(value, 7)
            }
            other => panic!("expected out of range error, got {other:?}"),
        }
    }

    #[test]
    fn csv_rejects_non_numeric_answers() {
        let csv = "item_id,value\ns2,often\n";
        let error = ResponseImporter::from_reader(Cursor::new(csv), &definition())
            .expect_err("text answers rejected");

        match error {
            ResponseImportError::MalformedValue { item_id, raw } => {
                assert_eq!((item_id.as_str(), raw.as_str()), ("s2", "often"));
            }
            other => panic!("expected malformed value error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = ResponseImporter::from_path("./does-not-exist.csv", &definition())
            .expect_err("expected io error");

        match error {
            ResponseImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn pairs_are_parsed_and_validated() {
        let definition = definition();
        let responses = ResponseImporter::from_pairs(["s1=5", " s2 = 1 "], &definition)
            .expect("pairs parse");
        assert_eq!(responses.get("s1"), Some(5));
        assert_eq!(responses.get("s2"), Some(1));

        let error = ResponseImporter::from_pairs(["s1"], &definition).expect_err("no separator");
        assert!(matches!(error, ResponseImportError::MalformedPair(_)));

        let error = ResponseImporter::from_pairs(["s9=2"], &definition).expect_err("unknown item");
        assert!(matches!(
            error,
            ResponseImportError::Assessment(AssessmentError::UnknownItem { .. })
        ));
    }

    #[test]
    fn split_pair_strips_form_quotes() {
        assert_eq!(parser::split_pair("'bp1'=3"), Some(("bp1", "3")));
        assert_eq!(parser::split_pair("=3"), None);
        assert_eq!(parser::split_pair("bp1="), None);
    }
}
