//! CSV text -> pets, header row first, empty lines skipped.

use csv::{ReaderBuilder, StringRecord};

use crate::pet::Pet;

/// Parses archive text. The first row names the columns; each later non-empty
/// row becomes one [`Pet`] in file order. Ragged rows are accepted and mapped
/// per the [`Pet`] column contract.
pub fn parse_pets(text: &str) -> Result<Vec<Pet>, csv::Error> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut pets = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        if is_empty_line(&record) {
            continue;
        }
        let (pet, dropped) = Pet::from_row(&headers, &record);
        if dropped > 0 {
            tracing::debug!(
                row = idx + 2,
                dropped,
                "row has more cells than header columns"
            );
        }
        pets.push(pet);
    }

    Ok(pets)
}

fn is_empty_line(record: &StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record[0].is_empty())
}
