use std::rc::Rc;

use common::{RecordId, ReferenceKind};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api::{DataAccess, GlooClient},
    components::{BalanceDisplay, TransactionFormView, TransactionsTable},
    controller::{Controller, Outcome, RowAction, local_today},
    form::FormField,
    notifier::BrowserNotifier,
    state::{Action, ClientState},
};

type BrowserController = Controller<GlooClient, BrowserNotifier>;

/// Scroll to the top of the page and put the cursor in the description box.
fn focus_form(description_ref: &NodeRef) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    if let Some(input) = description_ref.cast::<HtmlInputElement>() {
        if let Err(error) = input.focus() {
            tracing::debug!("Could not focus the description input: {error:?}");
        }
    }
}

/// The whole page: form, balance and transaction table.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(|| ClientState::new(local_today()));
    let controller: Rc<BrowserController> = use_memo((), |_| {
        Controller::new(DataAccess::new(GlooClient, BrowserNotifier))
    });
    let description_ref = use_node_ref();

    {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let dispatch = move |action| dispatcher.dispatch(action);
                controller.load_initial(&dispatch).await;
                tracing::info!("Initial load finished");
            });
        });
    }

    let on_field = {
        let dispatcher = state.dispatcher();
        Callback::from(move |field: FormField| dispatcher.dispatch(Action::UpdateField(field)))
    };

    let on_submit = {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        let form = state.form.clone();
        Callback::from(move |()| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let form = form.clone();
            spawn_local(async move {
                let dispatch = move |action| dispatcher.dispatch(action);
                controller.save(&form, &dispatch).await;
            });
        })
    };

    let on_clear = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| {
            dispatcher.dispatch(Action::ResetForm {
                today: local_today(),
            })
        })
    };

    let on_add_reference = {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |kind: ReferenceKind| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let dispatch = move |action| dispatcher.dispatch(action);
                controller.add_reference(kind, &dispatch).await;
            });
        })
    };

    let on_action = {
        let controller = controller.clone();
        let dispatcher = state.dispatcher();
        let snapshot = state.snapshot.clone();
        let description_ref = description_ref.clone();
        Callback::from(move |(action, id): (RowAction, RecordId)| {
            let controller = controller.clone();
            let dispatcher = dispatcher.clone();
            let snapshot = snapshot.clone();
            let description_ref = description_ref.clone();
            spawn_local(async move {
                let dispatch = move |change| dispatcher.dispatch(change);
                let outcome = controller
                    .handle_row_action(action, id, &snapshot, &dispatch)
                    .await;

                if outcome == Outcome::EditStarted {
                    focus_form(&description_ref);
                }
            });
        })
    };

    html! {
        <main class="container">
            <h1>{ "Finance Tracker" }</h1>

            <TransactionFormView
                form={state.form.clone()}
                categories={state.categories.clone()}
                accounts={state.accounts.clone()}
                ready={state.ready}
                description_ref={description_ref}
                {on_field}
                {on_submit}
                {on_clear}
                {on_add_reference}
            />

            <section class="balance-container">
                <h2>{ "Balance: " }<BalanceDisplay transactions={state.snapshot.clone()} /></h2>
            </section>

            <section class="table-container">
                <h2>{ "Transactions" }</h2>
                <TransactionsTable transactions={state.snapshot.clone()} {on_action} />
            </section>
        </main>
    }
}
