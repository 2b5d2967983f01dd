use crate::workflows::assessment::domain::DocumentText;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_documents<R: Read>(reader: R) -> Result<Vec<DocumentText>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut documents = Vec::new();

    for record in csv_reader.deserialize::<RecognizedTextRow>() {
        let row = record?;
        let text = row.recognized_text.unwrap_or_default();
        documents.push(DocumentText::new(row.file_name, text));
    }

    Ok(documents)
}

#[derive(Debug, Deserialize)]
struct RecognizedTextRow {
    #[serde(rename = "File Name")]
    file_name: String,
    #[serde(
        rename = "Recognized Text",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    recognized_text: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
