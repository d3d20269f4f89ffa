use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnswerRecord {
    pub(crate) item_id: String,
    pub(crate) raw_value: Option<String>,
}

/// Read `item_id,value` rows. Blank values come back as `None` (a skipped question).
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<AnswerRow>() {
        let row = record?;
        if row.item_id.is_empty() {
            continue;
        }

        records.push(AnswerRecord {
            item_id: strip_quotes(&row.item_id).to_string(),
            raw_value: row.value.filter(|value| !value.is_empty()),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(alias = "id", alias = "question", alias = "Item ID")]
    item_id: String,
    #[serde(default, alias = "answer", alias = "Value")]
    value: Option<String>,
}

/// Exports from the web form wrap ids in single quotes (`'bp1'`).
pub(crate) fn strip_quotes(value: &str) -> &str {
    value.trim().trim_matches('\'')
}

/// Split a single `item=value` pair as typed on the command line.
pub(crate) fn split_pair(pair: &str) -> Option<(&str, &str)> {
    let (item_id, value) = pair.split_once('=')?;
    let item_id = strip_quotes(item_id);
    let value = value.trim();
    if item_id.is_empty() || value.is_empty() {
        return None;
    }
    Some((item_id, value))
}
