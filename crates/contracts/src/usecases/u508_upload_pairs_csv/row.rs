use serde_json::{Map, Value};

/// Одна строка CSV: имя колонки из заголовка -> значение ячейки.
/// Значения всегда `Value::String`; порядок ключей совпадает с порядком колонок.
pub type RowRecord = Map<String, Value>;

/// Колонки, которые ожидает сервис подбора пар.
/// Используется только как подсказка в UI, файл по ним не валидируется.
pub const EXPECTED_COLUMNS: &[&str] = &["role", "name", "biography", "hobbies", "class_year"];
