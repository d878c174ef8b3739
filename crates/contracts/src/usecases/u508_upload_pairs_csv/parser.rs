use std::collections::{HashMap, HashSet};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde_json::Value;

use super::error::UploadError;
use super::row::RowRecord;

/// Разбирает CSV текст в набор строк.
///
/// Первая строка файла — заголовок с именами полей. Пустые строки и строки
/// из одних пробелов пропускаются, значения не приводятся к типам и не
/// обрезаются. Строка с числом полей, отличным от заголовка, считается
/// ошибкой разбора.
pub fn parse_rows(text: &str) -> Result<Vec<RowRecord>, UploadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let headers = unique_headers(reader.headers()?);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        if record.len() != headers.len() {
            return Err(UploadError::Parse {
                line: record.position().map(|pos| pos.line()),
                message: format!(
                    "found record with {} fields, but the header has {} fields",
                    record.len(),
                    headers.len()
                ),
            });
        }
        rows.push(to_row(&headers, &record));
    }
    Ok(rows)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// Повторяющиеся имена колонок получают суффикс: `a, a` -> `a, a_1`.
/// Суффикс подбирается так, чтобы не совпасть с уже существующим именем.
fn unique_headers(headers: &StringRecord) -> Vec<String> {
    let mut used: HashSet<String> = headers.iter().map(str::to_string).collect();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    headers
        .iter()
        .map(|header| match counts.get_mut(header) {
            Some(count) => {
                let mut suffix = *count;
                let mut renamed = format!("{}_{}", header, suffix);
                while used.contains(&renamed) {
                    suffix += 1;
                    renamed = format!("{}_{}", header, suffix);
                }
                *count += 1;
                used.insert(renamed.clone());
                renamed
            }
            None => {
                counts.insert(header, 1);
                header.to_string()
            }
        })
        .collect()
}

fn to_row(headers: &[String], record: &StringRecord) -> RowRecord {
    headers
        .iter()
        .zip(record.iter())
        .map(|(field, value)| (field.clone(), Value::String(value.to_string())))
        .collect()
}
