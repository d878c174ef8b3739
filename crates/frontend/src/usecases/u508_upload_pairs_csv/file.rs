use async_trait::async_trait;
use contracts::usecases::u508_upload_pairs_csv::TextSource;
use wasm_bindgen_futures::JsFuture;

/// Файл, выбранный в `<input type="file">`
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(web_sys::File);

impl BrowserFile {
    /// Файлы из события change; пустой список, если файлов нет
    pub fn from_input(input: &web_sys::HtmlInputElement) -> Vec<BrowserFile> {
        let Some(files) = input.files() else {
            return Vec::new();
        };
        (0..files.length())
            .filter_map(|idx| files.get(idx))
            .map(BrowserFile)
            .collect()
    }

    pub fn size(&self) -> f64 {
        self.0.size()
    }
}

#[async_trait(?Send)]
impl TextSource for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    async fn read_text(&self) -> Result<String, String> {
        // Blob.text() декодирует содержимое как UTF-8
        let value = JsFuture::from(self.0.text())
            .await
            .map_err(|e| format!("Ошибка чтения файла: {:?}", e))?;

        value
            .as_string()
            .ok_or_else(|| "Содержимое файла не является текстом".to_string())
    }
}
