use leptos::prelude::*;
use std::collections::{BTreeSet, HashSet};
use thaw::{Checkbox, CheckboxGroup};

/// Caption shown next to the label: nothing selected means no constraint
pub fn selection_caption(selected: usize, total: usize) -> String {
    if selected == 0 {
        "All".to_string()
    } else {
        format!("{} of {}", selected, total)
    }
}

/// Sorted copy of a checkbox group's value
pub fn to_sorted(selected: &HashSet<String>) -> BTreeSet<String> {
    selected.iter().cloned().collect()
}

/// Checkbox list over a set of options. An empty selection is "no filter".
#[component]
pub fn MultiSelect(
    label: &'static str,
    /// `data-testid` of the widget root
    test_id: &'static str,
    #[prop(into)] options: Signal<Vec<String>>,
    selected: RwSignal<HashSet<String>>,
) -> impl IntoView {
    let caption = move || {
        selection_caption(selected.with(|s| s.len()), options.with(|o| o.len()))
    };

    view! {
        <div class="multi-select" data-testid=test_id>
            <div class="multi-select__header">
                <span class="multi-select__label">{label}</span>
                <span class="multi-select__caption">{caption}</span>
                <button
                    class="multi-select__clear"
                    on:click=move |_| selected.set(HashSet::new())
                    disabled=move || selected.with(|s| s.is_empty())
                >
                    "Clear"
                </button>
            </div>
            <div class="multi-select__options">
                <CheckboxGroup value=selected>
                    {move || options.get().into_iter().map(|option| {
                        let label = option.clone();
                        view! { <Checkbox value=option label=label /> }
                    }).collect_view()}
                </CheckboxGroup>
            </div>
        </div>
    }
}
