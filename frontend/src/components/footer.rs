use link_hub_shared::TranslationItem;
use yew::prelude::*;

use crate::i18n;

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub strings: TranslationItem,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let strings = &props.strings;
    let year = use_memo((), |_| current_year());

    // 备案号为空时（内置兜底文案）不渲染链接
    let legal_notice = if strings.icp.trim().is_empty() {
        Html::default()
    } else {
        html! {
            <a
                href={strings.icp_href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="hover:underline"
            >
                { strings.icp.clone() }
            </a>
        }
    };

    html! {
        <footer class="py-10 text-xs font-mono opacity-40">
            <div class="flex flex-col items-center gap-2">
                <span>{ i18n::copyright(*year, &strings.owner) }</span>
                { legal_notice }
            </div>
        </footer>
    }
}
