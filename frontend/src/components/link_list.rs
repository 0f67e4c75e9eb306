use std::rc::Rc;

use link_hub_shared::{Language, LinkItem};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkListProps {
    pub links: Rc<Vec<LinkItem>>,
    pub language: Language,
}

/// Outbound links in their configured order.
#[function_component(LinkList)]
pub fn link_list(props: &LinkListProps) -> Html {
    let LinkListProps {
        links,
        language,
    } = props;

    let anchor_classes = classes!(
        "group",
        "flex",
        "items-baseline",
        "justify-between",
        "border-b",
        "border-gray-200",
        "dark:border-gray-800",
        "pb-2",
        "hover:border-black",
        "dark:hover:border-white",
        "transition-colors"
    );

    html! {
        <ul class="space-y-6">
            { for links.iter().map(|link| html! {
                <li key={link.id.clone()}>
                    <a
                        href={link.href.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={anchor_classes.clone()}
                    >
                        <span class="font-medium">{ link.label(*language).to_string() }</span>
                        <span class="font-mono text-xs opacity-40 group-hover:opacity-100 transition-opacity">
                            { link.display_suffix() }
                        </span>
                    </a>
                </li>
            }) }
        </ul>
    }
}
