use crate::layout::footer::Footer;
use crate::layout::Shell;
use crate::usecases::u508_upload_pairs_csv::view::PairsUploadWidget;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell
            center=|| view! { <PairsUploadWidget /> }.into_any()
            footer=|| view! { <Footer /> }.into_any()
        />
    }
}
