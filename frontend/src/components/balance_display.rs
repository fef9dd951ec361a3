use common::Transaction;
use yew::prelude::*;

use crate::view::balance_view;

#[derive(Properties, PartialEq)]
pub struct BalanceDisplayProps {
    pub transactions: Vec<Transaction>,
}

/// The net of all income minus all expenses, green when not negative.
#[function_component(BalanceDisplay)]
pub fn balance_display(props: &BalanceDisplayProps) -> Html {
    let view = balance_view(&props.transactions);

    html! {
        <span id="saldo-total" style={format!("color: {};", view.color)}>
            { view.label }
        </span>
    }
}
