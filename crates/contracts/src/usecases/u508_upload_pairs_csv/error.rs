use thiserror::Error;

/// Ошибки цепочки чтение -> разбор -> отправка
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Файл не удалось прочитать как текст
    #[error("failed to read file as text: {0}")]
    Read(String),

    /// CSV не разобран; `line` — номер строки в файле, если известен
    #[error("CSV parsing error{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse { line: Option<u64>, message: String },

    /// Сетевая ошибка или ошибка сериализации запроса
    #[error("request failed: {0}")]
    Transport(String),

    /// Сервер ответил статусом вне диапазона 2xx; `body` — тело ответа
    #[error("HTTP error: {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

impl UploadError {
    /// Короткий код для группировки в логах
    pub fn kind(&self) -> &'static str {
        match self {
            UploadError::Read(_) => "read",
            UploadError::Parse { .. } => "parse",
            UploadError::Transport(_) => "transport",
            UploadError::Status { .. } => "status",
        }
    }
}

impl From<csv::Error> for UploadError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line());
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!(
                "found record with {} fields, but the header has {} fields",
                len, expected_len
            ),
            _ => err.to_string(),
        };
        UploadError::Parse { line, message }
    }
}
