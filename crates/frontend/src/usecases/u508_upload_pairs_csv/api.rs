use async_trait::async_trait;
use contracts::usecases::u508_upload_pairs_csv::{
    decode_response_body, RowRecord, RowsTransport, UploadError,
};
use gloo_net::http::Request;
use serde_json::Value;

/// API клиент для UseCase u508: отправка строк через fetch
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl RowsTransport for FetchTransport {
    async fn post_rows(&self, endpoint: &str, rows: &[RowRecord]) -> Result<Value, UploadError> {
        let response = Request::post(endpoint)
            .json(rows)
            .map_err(|e| UploadError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| UploadError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(format!("Failed to read response: {}", e)))?;

        if !response.ok() {
            return Err(UploadError::Status { status, body });
        }

        Ok(decode_response_body(&body))
    }
}
