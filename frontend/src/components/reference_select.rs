use common::{NamedRecord, RecordId, ReferenceKind};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    components::select_value::use_select_value,
    view::{option_entries, parse_option_value},
};

#[derive(Properties, PartialEq)]
pub struct ReferenceSelectProps {
    pub kind: ReferenceKind,
    pub items: Vec<NamedRecord>,
    pub selected: Option<RecordId>,
    pub on_change: Callback<Option<RecordId>>,
    /// Clicked on the "+" button next to the dropdown.
    pub on_add: Callback<ReferenceKind>,
}

/// The element ID of the dropdown for `kind`.
pub fn select_id(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::Category => "categoria",
        ReferenceKind::Account => "conta",
    }
}

/// A category or account dropdown with a button for adding a new entry.
#[function_component(ReferenceSelect)]
pub fn reference_select(props: &ReferenceSelectProps) -> Html {
    let kind = props.kind;
    let selected_value = props
        .selected
        .map(|id| id.to_string())
        .unwrap_or_default();
    let select_ref = use_select_value(selected_value.clone());

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            on_change.emit(parse_option_value(&select.value()));
        })
    };

    let onclick = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(kind))
    };

    let entries = option_entries(&props.items, kind.placeholder());
    let id = select_id(kind);

    html! {
        <div class="select-with-add">
            <select id={id} name={id} ref={select_ref} {onchange}>
                {
                    for entries.into_iter().enumerate().map(|(index, entry)| {
                        let selected = if selected_value.is_empty() {
                            index == 0
                        } else {
                            entry.value == selected_value
                        };

                        html! {
                            <option
                                value={entry.value}
                                disabled={entry.disabled}
                                selected={selected}
                            >
                                { entry.label }
                            </option>
                        }
                    })
                }
            </select>
            <button
                type="button"
                class="btn-add"
                data-tipo={kind.noun()}
                title={format!("Add {}", kind.noun())}
                {onclick}
            >
                { "+" }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use common::{NamedRecord, ReferenceKind};
    use scraper::{Html, Selector};
    use yew::{Callback, ServerRenderer};

    use super::{ReferenceSelect, ReferenceSelectProps};

    async fn render(selected: Option<i64>) -> Html {
        let rendered = ServerRenderer::<ReferenceSelect>::with_props(move || ReferenceSelectProps {
            kind: ReferenceKind::Category,
            items: vec![
                NamedRecord {
                    id: 1,
                    name: "Food".to_owned(),
                },
                NamedRecord {
                    id: 2,
                    name: "Rent".to_owned(),
                },
            ],
            selected,
            on_change: Callback::from(|_| ()),
            on_add: Callback::from(|_| ()),
        })
        .render()
        .await;

        Html::parse_document(&rendered)
    }

    fn option_texts(document: &Html) -> Vec<String> {
        let selector = Selector::parse("select#categoria option").unwrap();
        document
            .select(&selector)
            .map(|option| option.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[tokio::test]
    async fn lists_placeholder_items_then_none() {
        let document = render(None).await;

        assert_eq!(
            option_texts(&document),
            vec!["Select a Category", "Food", "Rent", "None"]
        );

        let placeholder = Selector::parse("option[disabled]").unwrap();
        let disabled: Vec<_> = document.select(&placeholder).collect();
        assert_eq!(disabled.len(), 1);
        assert_eq!(disabled[0].value().attr("value"), Some(""));
    }

    #[tokio::test]
    async fn placeholder_is_selected_without_a_reference() {
        let document = render(None).await;
        let selector = Selector::parse("option[selected]").unwrap();

        let selected: Vec<_> = document.select(&selector).collect();

        assert_eq!(selected.len(), 1);
        assert_eq!(
            selected[0].text().collect::<String>().trim(),
            "Select a Category"
        );
    }

    #[tokio::test]
    async fn marks_chosen_reference_selected() {
        let document = render(Some(2)).await;
        let selector = Selector::parse("option[selected]").unwrap();

        let selected: Vec<_> = document.select(&selector).collect();

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value().attr("value"), Some("2"));
    }

    #[tokio::test]
    async fn add_button_names_its_kind() {
        let document = render(None).await;
        let selector = Selector::parse("button.btn-add").unwrap();

        let button = document.select(&selector).next().unwrap();

        assert_eq!(button.value().attr("data-tipo"), Some("category"));
        assert_eq!(button.value().attr("type"), Some("button"));
    }
}
