pub mod global_context;
pub mod header;

use crate::shared::notify::ToastStack;
use header::Header;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |  Header (title, EN / עב)     |
/// +------------------------------+
/// |  Content                     |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">{children()}</main>
            <ToastStack />
        </div>
    }
}
