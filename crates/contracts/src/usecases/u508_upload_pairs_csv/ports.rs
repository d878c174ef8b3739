use async_trait::async_trait;
use serde_json::Value;

use super::error::UploadError;
use super::row::RowRecord;

/// Источник текста: выбранный пользователем файл.
///
/// Futures не `Send`: в браузере всё выполняется в одном потоке.
#[async_trait(?Send)]
pub trait TextSource {
    /// Имя файла для отображения
    fn name(&self) -> String;

    /// Читает содержимое целиком как текст
    async fn read_text(&self) -> Result<String, String>;
}

/// Транспорт для отправки разобранных строк на сервер
#[async_trait(?Send)]
pub trait RowsTransport {
    /// Один POST на `endpoint` с JSON массивом строк в теле.
    /// Возвращает тело успешного ответа без изменений.
    async fn post_rows(&self, endpoint: &str, rows: &[RowRecord]) -> Result<Value, UploadError>;
}
