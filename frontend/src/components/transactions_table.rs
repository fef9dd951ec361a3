use common::{RecordId, Transaction};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::{
    controller::RowAction,
    view::{EMPTY_TABLE_MESSAGE, TransactionRow, transaction_rows},
};

const COLUMNS: [&str; 7] = [
    "Date",
    "Description",
    "Amount",
    "Type",
    "Category",
    "Account",
    "Actions",
];

#[derive(Properties, PartialEq)]
pub struct TransactionsTableProps {
    pub transactions: Vec<Transaction>,
    /// Clicked on a row's edit or delete button.
    pub on_action: Callback<(RowAction, RecordId)>,
}

/// The transaction list.
///
/// Row buttons carry `data-action` and `data-id`; a single listener on the
/// body decodes them, so rebuilding the rows never rebinds handlers.
#[function_component(TransactionsTable)]
pub fn transactions_table(props: &TransactionsTableProps) -> Html {
    let onclick = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(target) = event.target_dyn_into::<HtmlElement>() else {
                return;
            };

            let dataset = target.dataset();
            let action = dataset.get("action").as_deref().and_then(RowAction::parse);
            let id = dataset.get("id").and_then(|id| id.parse::<RecordId>().ok());

            if let (Some(action), Some(id)) = (action, id) {
                on_action.emit((action, id));
            }
        })
    };

    let rows = transaction_rows(&props.transactions);

    html! {
        <table id="transactions-table">
            <thead>
                <tr>
                    { for COLUMNS.iter().map(|column| html! { <th>{ *column }</th> }) }
                </tr>
            </thead>
            <tbody id="transactions-body" {onclick}>
                if rows.is_empty() {
                    <tr>
                        <td colspan={COLUMNS.len().to_string()} style="text-align: center;">
                            { EMPTY_TABLE_MESSAGE }
                        </td>
                    </tr>
                } else {
                    { for rows.into_iter().map(row_view) }
                }
            </tbody>
        </table>
    }
}

fn row_view(row: TransactionRow) -> Html {
    let id = row.id.to_string();

    html! {
        <tr key={row.id}>
            <td>{ row.date }</td>
            <td>{ row.description }</td>
            <td class={row.amount_class}>{ row.amount }</td>
            <td>{ row.kind }</td>
            <td>{ row.category }</td>
            <td>{ row.account }</td>
            <td class="actions">
                <button
                    type="button"
                    class="btn-edit"
                    title="Edit"
                    data-action={RowAction::Edit.as_str()}
                    data-id={id.clone()}
                >
                    { "✏️" }
                </button>
                <button
                    type="button"
                    class="btn-delete"
                    title="Delete"
                    data-action={RowAction::Delete.as_str()}
                    data-id={id}
                >
                    { "🗑️" }
                </button>
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use common::{Transaction, TransactionKind};
    use scraper::{Html, Selector};
    use yew::{Callback, ServerRenderer};

    use crate::test_utils::transaction;

    use super::{TransactionsTable, TransactionsTableProps};

    async fn render(transactions: Vec<Transaction>) -> Html {
        let rendered =
            ServerRenderer::<TransactionsTable>::with_props(move || TransactionsTableProps {
                transactions,
                on_action: Callback::from(|_| ()),
            })
            .render()
            .await;

        Html::parse_document(&rendered)
    }

    fn cell_texts(row: scraper::ElementRef) -> Vec<String> {
        let td = Selector::parse("td").unwrap();
        row.select(&td)
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[tokio::test]
    async fn empty_list_shows_single_message_row() {
        let document = render(vec![]).await;
        let row_selector = Selector::parse("#transactions-body tr").unwrap();

        let rows: Vec<_> = document.select(&row_selector).collect();

        assert_eq!(rows.len(), 1);
        let cell = rows[0]
            .select(&Selector::parse("td").unwrap())
            .next()
            .unwrap();
        assert_eq!(cell.value().attr("colspan"), Some("7"));
        assert_eq!(
            cell.text().collect::<String>().trim(),
            "No transactions found."
        );
    }

    #[tokio::test]
    async fn renders_one_row_per_transaction_in_order() {
        let mut salary = transaction(1, 100.0, TransactionKind::Income);
        salary.description = "Salary".to_owned();
        salary.category_name = Some("Work".to_owned());
        let rent = transaction(2, 40.0, TransactionKind::Expense);

        let document = render(vec![salary, rent]).await;
        let row_selector = Selector::parse("#transactions-body tr").unwrap();
        let rows: Vec<_> = document.select(&row_selector).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            cell_texts(rows[0])[..6],
            ["20/05/2025", "Salary", "+ R$ 100.00", "Income", "Work", "N/A"]
        );
        assert_eq!(cell_texts(rows[1])[2], "- R$ 40.00");
    }

    #[tokio::test]
    async fn amount_cell_is_classed_by_kind() {
        let document = render(vec![
            transaction(1, 10.0, TransactionKind::Income),
            transaction(2, 5.0, TransactionKind::Expense),
        ])
        .await;

        assert_eq!(
            document
                .select(&Selector::parse("td.receita").unwrap())
                .count(),
            1
        );
        assert_eq!(
            document
                .select(&Selector::parse("td.despesa").unwrap())
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn row_buttons_carry_action_and_id() {
        let document = render(vec![transaction(7, 10.0, TransactionKind::Expense)]).await;
        let selector = Selector::parse("button[data-action]").unwrap();

        let buttons: Vec<_> = document
            .select(&selector)
            .map(|button| {
                (
                    button.value().attr("data-action").unwrap().to_owned(),
                    button.value().attr("data-id").unwrap().to_owned(),
                )
            })
            .collect();

        assert_eq!(
            buttons,
            vec![
                ("edit".to_owned(), "7".to_owned()),
                ("delete".to_owned(), "7".to_owned())
            ]
        );
    }
}
