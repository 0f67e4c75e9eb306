use link_hub_shared::{Language, Preference, TranslationTable};
use yew::prelude::*;

use crate::{
    components::segmented_switch::{SegmentedSwitch, SwitchOption},
    hooks::use_select_preference,
};

/// Each language is labelled in its own script, whatever is active.
fn language_options(table: &TranslationTable, current: Language) -> Vec<SwitchOption> {
    Language::ALL
        .iter()
        .map(|&lang| SwitchOption {
            label: AttrValue::from(table.get(lang).lang_name.clone()),
            active: lang == current,
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct LanguageSwitchProps {
    pub current: Language,
    pub translations: TranslationTable,
}

#[function_component(LanguageSwitch)]
pub fn language_switch(props: &LanguageSwitchProps) -> Html {
    let LanguageSwitchProps {
        current,
        translations,
    } = props;
    let select = use_select_preference::<Language>();

    let on_select = Callback::from(move |index: usize| {
        if let Some(&lang) = Language::ALL.get(index) {
            select.emit(lang);
        }
    });

    html! {
        <SegmentedSwitch
            aria_label={translations.get(*current).language_switch.clone()}
            options={language_options(translations, *current)}
            {on_select}
        />
    }
}
