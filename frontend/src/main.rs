//! Link hub frontend: a single page of outbound links with persisted
//! language and theme switches, rendered client-side with Yew.

mod components;
mod config;
mod content;
mod dom;
mod hooks;
mod i18n;
mod pages;
mod platform;

use link_hub_shared::{PreferenceStore, Theme};
use web_sys::StorageEvent;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::content::LoadedContent;

#[derive(Properties, PartialEq)]
struct AppProps {
    /// `None` when there is no browser window; every preference then
    /// renders its fallback.
    store: Option<PreferenceStore>,
    content: LoadedContent,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let AppProps {
        store,
        content,
    } = props;

    // 其他标签页写入 localStorage 时浏览器会派发 storage 事件
    {
        let store = store.clone();
        use_event_with_window(config::NATIVE_STORAGE_EVENT, move |event: StorageEvent| {
            if let Some(store) = store.as_ref() {
                platform::forward_storage_event(store, &event);
            }
        });
    }

    let page = html! { <pages::HomePage content={content.clone()} /> };

    match store {
        Some(store) => html! {
            <ContextProvider<PreferenceStore> context={store.clone()}>
                { page }
            </ContextProvider<PreferenceStore>>
        },
        None => page,
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::LOG_LEVEL);

    let store = platform::browser_store();
    if let Some(store) = store.as_ref() {
        // Mark the root before the first render so the stored theme is
        // painted immediately.
        dom::apply_theme(store.get::<Theme>());
    } else {
        log::warn!("no browser window, preferences fall back to defaults");
    }

    yew::Renderer::<App>::with_props(AppProps {
        store,
        content: content::load(),
    })
    .render();
}
