use link_hub_shared::{Language, Theme};
use yew::prelude::*;

use crate::{
    components::{
        error_banner::ErrorBanner, footer::Footer, header::Header, link_list::LinkList,
    },
    content::LoadedContent,
    dom,
    hooks::use_preference,
};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub content: LoadedContent,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let language = use_preference::<Language>();
    let theme = use_preference::<Theme>();
    let site = props.content.site.clone();
    let strings = site.translations.get(language).clone();

    // 同步根节点的暗色标记
    use_effect_with(theme, |theme| dom::apply_theme(*theme));

    {
        let html_lang = strings.html_lang.clone();
        use_effect_with(html_lang, |lang| dom::set_document_lang(lang));
    }

    let links = use_memo(site.clone(), |site| site.links.clone());

    let main = match props.content.error.clone() {
        Some(message) => html! { <ErrorBanner {message} {language} /> },
        None => html! { <LinkList {links} {language} /> },
    };

    html! {
        <div class="max-w-xl mx-auto px-6 min-h-screen flex flex-col">
            <Header {language} {theme} translations={site.translations.clone()} />
            <main class="grow">
                { main }
            </main>
            <Footer {strings} />
        </div>
    }
}
