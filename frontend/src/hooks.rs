use link_hub_shared::{
    initial_snapshot, Preference, PreferenceSource, PreferenceStore, SnapshotBinding,
};
use yew::prelude::*;

/// Current value of preference `P`, re-rendering the component whenever it
/// changes in this tab or in another one.
///
/// The first render reads the store synchronously, so the stored value is
/// painted right away. Without a [`PreferenceStore`] in context (no
/// browser) the preference's fallback is rendered and never changes.
///
/// # Example
/// ```rust,ignore
/// #[function_component(ThemeBadge)]
/// fn theme_badge() -> Html {
///     let theme = use_preference::<Theme>();
///     html! { <span>{ theme.as_str() }</span> }
/// }
/// ```
#[hook]
pub fn use_preference<P: Preference>() -> P {
    let store = use_context::<PreferenceStore>();
    let snapshot = {
        let store = store.clone();
        use_state(move || initial_snapshot::<P>(store.as_ref()))
    };

    {
        let snapshot = snapshot.clone();
        use_effect_with(store, move |store| {
            let subscription = store.as_ref().map(|store| {
                let binding =
                    SnapshotBinding::new(PreferenceSource::<P>::new(store.clone()), *snapshot);
                binding.connect(move |next| snapshot.set(next))
            });
            move || drop(subscription)
        });
    }

    *snapshot
}

/// Callback selecting a value of `P`. Re-selecting the active value does
/// nothing; outside a browser every selection is ignored.
#[hook]
pub fn use_select_preference<P: Preference>() -> Callback<P> {
    let store = use_context::<PreferenceStore>();
    use_callback(store, |value: P, store| {
        let Some(store) = store else {
            return;
        };
        if store.select(value) {
            log::debug!("{} -> {}", P::KEY, value.as_str());
        }
    })
}
