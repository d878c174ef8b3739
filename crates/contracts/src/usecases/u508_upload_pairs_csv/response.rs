use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Превращает тело ответа в значение для хранения.
///
/// JSON сохраняется как есть, прочий текст — строкой, пустое тело — `null`.
pub fn decode_response_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Ответ сервиса подбора пар: группы имён студентов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairsResponse {
    pub pairs: Vec<Vec<String>>,
}

impl PairsResponse {
    /// Пытается распознать ответ сервиса; `None`, если форма другая
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}
