use link_hub_shared::{Language, Theme, TranslationTable};
use yew::prelude::*;

use crate::components::{language_switch::LanguageSwitch, theme_switch::ThemeSwitch};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub language: Language,
    pub theme: Theme,
    pub translations: TranslationTable,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps {
        language,
        theme,
        translations,
    } = props;
    let strings = translations.get(*language);

    let nav_classes = classes!(
        "absolute",
        "top-0",
        "right-0",
        "p-6",
        "md:p-10",
        "flex",
        "gap-4",
        "text-sm",
        "font-mono",
        "z-50"
    );

    html! {
        <>
            <nav class={nav_classes}>
                <LanguageSwitch current={*language} translations={translations.clone()} />
                <ThemeSwitch current={*theme} strings={strings.clone()} />
            </nav>

            <header class="mt-32 mb-12">
                <h1 class="text-2xl md:text-3xl font-bold tracking-tight mb-2">
                    { strings.name.clone() }
                </h1>
            </header>
        </>
    }
}
