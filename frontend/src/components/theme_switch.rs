use link_hub_shared::{Preference, Theme, TranslationItem};
use yew::prelude::*;

use crate::{
    components::segmented_switch::{SegmentedSwitch, SwitchOption},
    hooks::use_select_preference,
};

fn theme_options(strings: &TranslationItem, current: Theme) -> Vec<SwitchOption> {
    Theme::ALL
        .iter()
        .map(|&theme| {
            let label = match theme {
                Theme::Light => &strings.theme_light,
                Theme::Dark => &strings.theme_dark,
            };
            SwitchOption {
                label: AttrValue::from(label.clone()),
                active: theme == current,
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ThemeSwitchProps {
    pub current: Theme,
    pub strings: TranslationItem,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitch)]
pub fn theme_switch(props: &ThemeSwitchProps) -> Html {
    let ThemeSwitchProps {
        current,
        strings,
        class,
    } = props;
    let select = use_select_preference::<Theme>();

    let on_select = Callback::from(move |index: usize| {
        if let Some(&theme) = Theme::ALL.get(index) {
            select.emit(theme);
        }
    });

    html! {
        <SegmentedSwitch
            class={class.clone()}
            aria_label={strings.theme_switch.clone()}
            options={theme_options(strings, *current)}
            {on_select}
        />
    }
}
