use crate::shared::date_utils::{copyright_label, current_year};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_label(current_year());

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__copyright">{format!("© {}", copyright)}</span>
        </footer>
    }
}
