use common::{NamedRecord, ReferenceKind, TransactionKind};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::{
    components::{reference_select::ReferenceSelect, select_value::use_select_value},
    form::{FormField, TransactionForm},
};

const KINDS: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

#[derive(Properties, PartialEq)]
pub struct TransactionFormViewProps {
    pub form: TransactionForm,
    pub categories: Vec<NamedRecord>,
    pub accounts: Vec<NamedRecord>,
    /// Whether the initial load has finished. Submitting is disabled until then.
    pub ready: bool,
    #[prop_or_default]
    pub description_ref: NodeRef,
    pub on_field: Callback<FormField>,
    pub on_submit: Callback<()>,
    pub on_clear: Callback<()>,
    pub on_add_reference: Callback<ReferenceKind>,
}

fn text_input(on_field: &Callback<FormField>, field: fn(String) -> FormField) -> Callback<InputEvent> {
    let on_field = on_field.clone();
    Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        on_field.emit(field(input.value()));
    })
}

/// The create/edit form for a single transaction.
#[function_component(TransactionFormView)]
pub fn transaction_form_view(props: &TransactionFormViewProps) -> Html {
    let form = &props.form;
    let mode = form.mode();
    let kind_ref = use_select_value(form.kind.as_str().to_owned());

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    let on_kind = {
        let on_field = props.on_field.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            match select.value().parse::<TransactionKind>() {
                Ok(kind) => on_field.emit(FormField::Kind(kind)),
                Err(error) => tracing::warn!("Ignoring kind selection: {error}"),
            }
        })
    };

    let on_category = props.on_field.reform(FormField::Category);
    let on_account = props.on_field.reform(FormField::Account);

    html! {
        <section class="form-container">
            <h2 id="form-title">{ mode.heading() }</h2>
            <form id="transaction-form" {onsubmit}>
                <input
                    type="hidden"
                    id="transaction-id"
                    value={form.id.map(|id| id.to_string()).unwrap_or_default()}
                />

                <div class="form-group">
                    <label for="descricao">{ "Description" }</label>
                    <input
                        type="text"
                        id="descricao"
                        name="descricao"
                        ref={props.description_ref.clone()}
                        value={form.description.clone()}
                        oninput={text_input(&props.on_field, FormField::Description)}
                    />
                </div>

                <div class="form-group">
                    <label for="valor">{ "Amount" }</label>
                    <input
                        type="number"
                        id="valor"
                        name="valor"
                        step="0.01"
                        value={form.amount.clone()}
                        oninput={text_input(&props.on_field, FormField::Amount)}
                    />
                </div>

                <div class="form-group">
                    <label for="data">{ "Date" }</label>
                    <input
                        type="date"
                        id="data"
                        name="data"
                        value={form.date.clone()}
                        oninput={text_input(&props.on_field, FormField::Date)}
                    />
                </div>

                <div class="form-group">
                    <label for="tipo">{ "Type" }</label>
                    <select id="tipo" name="tipo" ref={kind_ref} onchange={on_kind}>
                        {
                            for KINDS.iter().map(|kind| html! {
                                <option value={kind.as_str()} selected={*kind == form.kind}>
                                    { kind.label() }
                                </option>
                            })
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label for="categoria">{ "Category" }</label>
                    <ReferenceSelect
                        kind={ReferenceKind::Category}
                        items={props.categories.clone()}
                        selected={form.category_id}
                        on_change={on_category}
                        on_add={props.on_add_reference.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="conta">{ "Account" }</label>
                    <ReferenceSelect
                        kind={ReferenceKind::Account}
                        items={props.accounts.clone()}
                        selected={form.account_id}
                        on_change={on_account}
                        on_add={props.on_add_reference.clone()}
                    />
                </div>

                <div class="form-actions">
                    <button type="submit" id="btn-save" disabled={!props.ready}>
                        { mode.button_label() }
                    </button>
                    <button type="button" id="btn-clear" onclick={on_clear}>
                        { "Clear" }
                    </button>
                </div>
            </form>
        </section>
    }
}
