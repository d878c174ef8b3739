use serde_json::Value;

use super::error::UploadError;
use super::parser::parse_rows;
use super::ports::{RowsTransport, TextSource};

/// Состояние загрузчика: выбранный файл, последний успешный ответ
/// и признак незавершённой отправки.
///
/// Разобранные строки здесь не хранятся: они живут только внутри
/// [`run_upload`] до отправки запроса.
#[derive(Debug, Clone)]
pub struct UploadSession<F> {
    selected: Option<F>,
    last_response: Option<Value>,
    in_flight: bool,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self {
            selected: None,
            last_response: None,
            in_flight: false,
        }
    }
}

impl<F: TextSource + Clone> UploadSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn last_response(&self) -> Option<&Value> {
        self.last_response.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Обработка события выбора файла: запоминается первый файл.
    /// Пустой список (выбор отменён) оставляет прежний файл.
    pub fn on_file_change<I>(&mut self, files: I) -> bool
    where
        I: IntoIterator<Item = F>,
    {
        match files.into_iter().next() {
            Some(file) => {
                log::debug!("File selected: {}", file.name());
                self.selected = Some(file);
                true
            }
            None => false,
        }
    }

    /// Начинает отправку и возвращает файл для чтения.
    ///
    /// `None` без файла (молча) или если предыдущая отправка ещё не завершена.
    pub fn begin_submission(&mut self) -> Option<F> {
        let file = self.selected.as_ref()?;
        if self.in_flight {
            log::warn!(
                "Submission of {} ignored: previous upload is still in progress",
                file.name()
            );
            return None;
        }
        self.in_flight = true;
        Some(file.clone())
    }

    /// Применяет результат цепочки. При ошибке последний ответ не меняется.
    pub fn finish_submission(&mut self, outcome: Result<Value, UploadError>) {
        self.in_flight = false;
        match outcome {
            Ok(response) => {
                log::info!("Data successfully sent to API: {}", response);
                self.last_response = Some(response);
            }
            Err(err @ UploadError::Read(_)) => {
                log::error!("Error reading selected file: {}", err);
            }
            Err(err @ UploadError::Parse { .. }) => {
                log::error!("{}", err);
            }
            Err(err) => {
                log::error!("Error sending data to API ({}): {}", err.kind(), err);
            }
        }
    }

    /// Полная отправка: чтение, разбор, POST и сохранение ответа.
    /// Возвращает `false`, если отправка не начиналась.
    pub async fn submit<T>(&mut self, transport: &T, endpoint: &str) -> bool
    where
        T: RowsTransport + ?Sized,
    {
        let Some(file) = self.begin_submission() else {
            return false;
        };
        let outcome = run_upload(&file, transport, endpoint).await;
        self.finish_submission(outcome);
        true
    }
}

/// Цепочка чтение -> разбор -> отправка для одного файла
pub async fn run_upload<S, T>(
    source: &S,
    transport: &T,
    endpoint: &str,
) -> Result<Value, UploadError>
where
    S: TextSource + ?Sized,
    T: RowsTransport + ?Sized,
{
    let text = source.read_text().await.map_err(UploadError::Read)?;
    let rows = parse_rows(&text)?;
    log::debug!("Parsed {} rows from {}", rows.len(), source.name());
    transport.post_rows(endpoint, &rows).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u508_upload_pairs_csv::RowRecord;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;

    const ENDPOINT: &str = "http://localhost:8000/api/v1/pairs";

    #[derive(Debug, Clone)]
    struct FakeFile {
        name: &'static str,
        contents: Result<String, String>,
    }

    impl FakeFile {
        fn csv(name: &'static str, contents: &str) -> Self {
            Self {
                name,
                contents: Ok(contents.to_string()),
            }
        }

        fn unreadable(name: &'static str) -> Self {
            Self {
                name,
                contents: Err("NotReadableError".to_string()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TextSource for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        async fn read_text(&self) -> Result<String, String> {
            self.contents.clone()
        }
    }

    /// Сервер-заглушка: запоминает запросы и отвечает заданным результатом
    struct MockServer {
        reply: Result<Value, UploadError>,
        requests: RefCell<Vec<(String, Value)>>,
    }

    impl MockServer {
        fn replying(reply: Result<Value, UploadError>) -> Self {
            Self {
                reply,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl RowsTransport for MockServer {
        async fn post_rows(
            &self,
            endpoint: &str,
            rows: &[RowRecord],
        ) -> Result<Value, UploadError> {
            let body = serde_json::to_value(rows).expect("rows serialize");
            self.requests
                .borrow_mut()
                .push((endpoint.to_string(), body));
            self.reply.clone()
        }
    }

    #[test]
    fn test_first_file_of_change_event_is_selected() {
        let mut session = UploadSession::new();
        assert!(session.on_file_change(vec![
            FakeFile::csv("first.csv", "a\n"),
            FakeFile::csv("second.csv", "b\n"),
        ]));
        assert_eq!(session.selected().unwrap().name, "first.csv");

        assert!(session.on_file_change(vec![FakeFile::csv("third.csv", "c\n")]));
        assert_eq!(session.selected().unwrap().name, "third.csv");
    }

    #[test]
    fn test_empty_change_event_keeps_previous_file() {
        let mut session = UploadSession::new();
        assert!(!session.on_file_change(Vec::<FakeFile>::new()));
        assert!(session.selected().is_none());

        session.on_file_change(vec![FakeFile::csv("kept.csv", "a\n")]);
        assert!(!session.on_file_change(Vec::new()));
        assert_eq!(session.selected().unwrap().name, "kept.csv");
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let server = MockServer::replying(Ok(json!({"status": "ok"})));
        let mut session = UploadSession::<FakeFile>::new();

        assert!(!block_on(session.submit(&server, ENDPOINT)));
        assert_eq!(server.request_count(), 0);
        assert!(session.last_response().is_none());
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_end_to_end_upload() {
        let server = MockServer::replying(Ok(json!({"status": "ok"})));
        let mut session = UploadSession::new();
        session.on_file_change(vec![FakeFile::csv(
            "scores.csv",
            "name,score\nAlice,10\nBob,20\n",
        )]);

        assert!(block_on(session.submit(&server, ENDPOINT)));

        let requests = server.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, ENDPOINT);
        assert_eq!(
            requests[0].1,
            json!([
                {"name": "Alice", "score": "10"},
                {"name": "Bob", "score": "20"}
            ])
        );
        assert_eq!(session.last_response(), Some(&json!({"status": "ok"})));
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_header_only_file_still_posts_empty_array() {
        let server = MockServer::replying(Ok(json!({"pairs": []})));
        let mut session = UploadSession::new();
        session.on_file_change(vec![FakeFile::csv("empty.csv", "role,name\n")]);

        block_on(session.submit(&server, ENDPOINT));

        let requests = server.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1, json!([]));
        assert_eq!(session.last_response(), Some(&json!({"pairs": []})));
    }

    #[test]
    fn test_malformed_csv_sends_nothing() {
        let server = MockServer::replying(Ok(json!({"status": "first"})));
        let mut session = UploadSession::new();
        session.on_file_change(vec![FakeFile::csv("good.csv", "a,b\n1,2\n")]);
        block_on(session.submit(&server, ENDPOINT));
        assert_eq!(server.request_count(), 1);

        session.on_file_change(vec![FakeFile::csv("bad.csv", "a,b\n1,2,3\n")]);
        assert!(block_on(session.submit(&server, ENDPOINT)));

        assert_eq!(server.request_count(), 1);
        assert_eq!(session.last_response(), Some(&json!({"status": "first"})));
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_unreadable_file_sends_nothing() {
        let server = MockServer::replying(Ok(json!({"status": "ok"})));
        let mut session = UploadSession::new();
        session.on_file_change(vec![FakeFile::unreadable("locked.csv")]);

        block_on(session.submit(&server, ENDPOINT));

        assert_eq!(server.request_count(), 0);
        assert!(session.last_response().is_none());
    }

    #[test]
    fn test_failed_post_keeps_last_response() {
        let mut session = UploadSession::new();
        session.on_file_change(vec![FakeFile::csv("a.csv", "a\n1\n")]);

        let ok = MockServer::replying(Ok(json!({"status": "ok"})));
        block_on(session.submit(&ok, ENDPOINT));
        assert_eq!(session.last_response(), Some(&json!({"status": "ok"})));

        let unavailable = MockServer::replying(Err(UploadError::Status {
            status: 503,
            body: "maintenance".to_string(),
        }));
        block_on(session.submit(&unavailable, ENDPOINT));
        assert_eq!(unavailable.request_count(), 1);
        assert_eq!(session.last_response(), Some(&json!({"status": "ok"})));

        let offline =
            MockServer::replying(Err(UploadError::Transport("connection refused".to_string())));
        block_on(session.submit(&offline, ENDPOINT));
        assert_eq!(session.last_response(), Some(&json!({"status": "ok"})));
    }

    #[test]
    fn test_next_success_overwrites_last_response() {
        let mut session = UploadSession::new();
        session.on_file_change(vec![FakeFile::csv("a.csv", "a\n1\n")]);

        block_on(session.submit(&MockServer::replying(Ok(json!(1))), ENDPOINT));
        block_on(session.submit(&MockServer::replying(Ok(json!(2))), ENDPOINT));

        assert_eq!(session.last_response(), Some(&json!(2)));
    }

    #[test]
    fn test_second_submission_ignored_while_in_flight() {
        let mut session = UploadSession::new();
        session.on_file_change(vec![FakeFile::csv("a.csv", "a\n1\n")]);

        let first = session.begin_submission();
        assert!(first.is_some());
        assert!(session.is_in_flight());
        assert!(session.begin_submission().is_none());

        let server = MockServer::replying(Ok(json!({"status": "ok"})));
        assert!(!block_on(session.submit(&server, ENDPOINT)));
        assert_eq!(server.request_count(), 0);

        session.finish_submission(Err(UploadError::Transport("timeout".to_string())));
        assert!(!session.is_in_flight());
        assert!(session.begin_submission().is_some());
    }

    #[test]
    fn test_run_upload_returns_parse_error() {
        let server = MockServer::replying(Ok(Value::Null));
        let file = FakeFile::csv("bad.csv", "a,b\n1\n");

        let err = block_on(run_upload(&file, &server, ENDPOINT)).unwrap_err();

        assert_eq!(err.kind(), "parse");
        assert_eq!(server.request_count(), 0);
    }
}
