pub mod footer;

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_upload_pairs_csv::UploadPairsCsv;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C, F>(center: C, footer: F) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
    F: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header class="top-header">
                <h1 class="top-header__title">{UploadPairsCsv::display_name()}</h1>
                <span class="top-header__subtitle">{UploadPairsCsv::description()}</span>
            </header>

            <div class="app-main">
                {center()}
            </div>

            {footer()}
        </div>
    }
}
