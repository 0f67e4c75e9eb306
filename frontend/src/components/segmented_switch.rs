use yew::prelude::*;

/// One choice of a [`SegmentedSwitch`].
#[derive(Clone, PartialEq, Debug)]
pub struct SwitchOption {
    pub label: AttrValue,
    pub active: bool,
}

#[derive(Properties, PartialEq)]
pub struct SegmentedSwitchProps {
    pub aria_label: AttrValue,
    pub options: Vec<SwitchOption>,
    /// Fired with the option index; never fired for the active option.
    pub on_select: Callback<usize>,
    #[prop_or_default]
    pub class: Classes,
}

/// Index to emit for a click on `index`, or `None` when that option is
/// already active (or out of range).
fn selection_for(options: &[SwitchOption], index: usize) -> Option<usize> {
    options
        .get(index)
        .filter(|option| !option.active)
        .map(|_| index)
}

/// A row of mutually exclusive buttons, exactly one of them pressed.
#[function_component(SegmentedSwitch)]
pub fn segmented_switch(props: &SegmentedSwitchProps) -> Html {
    let SegmentedSwitchProps {
        aria_label,
        options,
        on_select,
        class,
    } = props;

    let group_class = classes!("inline-flex", "items-center", "gap-1", class.clone());

    html! {
        <div role="group" class={group_class} aria-label={aria_label.clone()}>
            { for options.iter().enumerate().map(|(index, option)| {
                let onclick = {
                    let on_select = on_select.clone();
                    let selection = selection_for(options, index);
                    Callback::from(move |_: MouseEvent| {
                        if let Some(index) = selection {
                            on_select.emit(index);
                        }
                    })
                };
                let button_class = classes!(
                    "px-1",
                    "transition-opacity",
                    if option.active {
                        "opacity-100 underline underline-offset-4"
                    } else {
                        "opacity-60 hover:opacity-100 hover:underline"
                    }
                );
                html! {
                    <button
                        type="button"
                        class={button_class}
                        {onclick}
                        aria-pressed={option.active.to_string()}
                    >
                        { option.label.clone() }
                    </button>
                }
            }) }
        </div>
    }
}
