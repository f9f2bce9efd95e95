use leptos::prelude::*;
use meme_generator_ui::{logging, App};

fn main() {
    logging::init();
    mount_to_body(|| view! { <App /> });
}
