use link_hub_shared::Language;
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    pub language: Language,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);
    let text = i18n::error_banner(props.language);

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let close_button = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    html! {
        <div
            class="flex items-start gap-3 rounded-2xl px-5 py-4 text-sm border border-current"
            role="alert"
            aria-live="assertive"
        >
            <span class="text-2xl" aria-hidden="true">{"⚠️"}</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ text.title }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="ml-4 inline-flex h-8 w-8 items-center justify-center rounded-full text-lg"
                aria-label={text.close_aria}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
