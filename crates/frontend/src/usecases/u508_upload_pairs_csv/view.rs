use super::api::FetchTransport;
use super::file::BrowserFile;
use crate::shared::api_utils::pairs_endpoint;
use crate::shared::icons::icon;
use contracts::usecases::u508_upload_pairs_csv::{
    run_upload, PairsResponse, TextSource, UploadSession, EXPECTED_COLUMNS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn PairsUploadWidget(
    /// Endpoint для POST; по умолчанию берётся из конфигурации
    #[prop(optional, into)]
    endpoint: Option<String>,
) -> impl IntoView {
    let endpoint_sv = StoredValue::new(endpoint.unwrap_or_else(pairs_endpoint));

    // web_sys::File не Send, поэтому состояние хранится локально
    let session = RwSignal::new_local(UploadSession::<BrowserFile>::new());

    let handle_file_change = move |ev: web_sys::Event| {
        let files = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| BrowserFile::from_input(&input))
            .unwrap_or_default();
        session.update(|s| {
            s.on_file_change(files);
        });
    };

    let handle_submit = move |_| {
        let Some(file) = session.try_update(|s| s.begin_submission()).flatten() else {
            return;
        };
        let endpoint = endpoint_sv.get_value();

        spawn_local(async move {
            let outcome = run_upload(&file, &FetchTransport, &endpoint).await;
            session.update(|s| s.finish_submission(outcome));
        });
    };

    let is_sending = Signal::derive(move || session.with(|s| s.is_in_flight()));
    let has_file = Signal::derive(move || session.with(|s| s.selected().is_some()));

    view! {
        <div class="pairs-upload">
            <div class="pairs-upload__filebar">
                <label class="button button--secondary pairs-upload__file-btn" for="pairs-file-input">
                    {icon("file")}
                    " Выбрать CSV файл"
                </label>
                <input
                    id="pairs-file-input"
                    type="file"
                    accept=".csv,text/csv"
                    on:change=handle_file_change
                    class="hidden"
                />
                {move || session.with(|s| match s.selected() {
                    Some(file) => view! {
                        <span class="pairs-upload__fileinfo">
                            <strong>{file.name()}</strong>
                            {format!(" ({:.2} KB)", file.size() / 1024.0)}
                        </span>
                    }.into_any(),
                    None => view! {
                        <span class="pairs-upload__filehint">"Файл не выбран"</span>
                    }.into_any(),
                })}
            </div>

            <p class="pairs-upload__columns">
                "Ожидаемые колонки: "
                <code>{EXPECTED_COLUMNS.join(", ")}</code>
            </p>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=handle_submit
                disabled=Signal::derive(move || !has_file.get() || is_sending.get())
            >
                {icon("upload")}
                {move || if is_sending.get() { " Отправка..." } else { " Отправить" }}
            </Button>

            {move || session.with(|s| s.last_response().cloned()).map(|response| {
                view! { <ResponseView response=response /> }
            })}
        </div>
    }
}

/// Последний ответ сервера: группы пар, если ответ распознан, иначе сырой JSON
#[component]
fn ResponseView(response: Value) -> impl IntoView {
    match PairsResponse::from_value(&response) {
        Some(pairs) => view! {
            <div class="pairs-upload__result">
                <h3>{icon("users")} " Пары"</h3>
                <ol class="pairs-upload__pairs">
                    {pairs
                        .pairs
                        .into_iter()
                        .map(|group| view! { <li>{group.join(", ")}</li> })
                        .collect_view()}
                </ol>
            </div>
        }
        .into_any(),
        None => {
            let pretty = serde_json::to_string_pretty(&response)
                .unwrap_or_else(|_| response.to_string());
            view! {
                <div class="pairs-upload__result">
                    <h3>"Ответ сервера"</h3>
                    <pre class="pairs-upload__json">{pretty}</pre>
                </div>
            }
            .into_any()
        }
    }
}
