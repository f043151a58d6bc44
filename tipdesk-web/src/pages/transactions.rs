use i18nrs::yew::use_translation;
use tipdesk_shared::models::Transaction;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::ApiClient;
use crate::components::{Loading, PageState, Pagination};
use crate::fetch::FetchGeneration;
use crate::routes::MainRoute;

/// Amounts arrive in the currency's minor unit.
fn format_amount(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let absolute = amount.unsigned_abs();
    format!("{sign}{}.{:02}", absolute / 100, absolute % 100)
}

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let (i18n, ..) = use_translation();
    let items = use_state(Vec::<Transaction>::new);
    let page_state = use_state(PageState::default);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let requested_page = use_state(|| 1u32);
    let fence = use_mut_ref(FetchGeneration::default);

    {
        let items = items.clone();
        let page_state = page_state.clone();
        let loading = loading.clone();
        let error = error.clone();
        let fence = fence.clone();
        use_effect_with(*requested_page, move |page| {
            let page = *page;
            let per_page = (*page_state).page_size;
            loading.set(true);
            error.set(None);
            // Supersede any request still in flight for this view.
            let generation = fence.borrow().begin();
            spawn_local(async move {
                let result = ApiClient::shared().transactions(page, per_page).await;
                if !fence.borrow().is_current(generation) {
                    // A newer page was requested meanwhile; this
                    // response must not overwrite its result.
                    return;
                }
                match result {
                    Ok(envelope) => {
                        if let Some(ref pagination) = envelope.pagination {
                            page_state.set(PageState::from(pagination));
                        }
                        items.set(envelope.data);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_page_change = {
        let requested_page = requested_page.clone();
        Callback::from(move |page: u32| requested_page.set(page))
    };

    let rows = items.iter().map(|transaction| {
        html! {
            <tr key={transaction.id}>
                <td>{ transaction.id }</td>
                <td>{ transaction.display_name.clone() }</td>
                <td class="text-right font-mono">{ format_amount(transaction.amount) }</td>
                <td>{ transaction.created_at.display() }</td>
                <td>
                    <Link<MainRoute>
                        to={MainRoute::TransactionDetail { id: transaction.id }}
                        classes="btn btn-ghost btn-xs"
                    >
                        { i18n.t("transactions.view") }
                    </Link<MainRoute>>
                </td>
            </tr>
        }
    });

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("transactions.title") }</h1>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{ message.clone() }</span>
                </div>
            }
            if *loading && items.is_empty() {
                <Loading />
            } else {
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{ i18n.t("transactions.columns.id") }</th>
                                <th>{ i18n.t("transactions.columns.kind") }</th>
                                <th class="text-right">{ i18n.t("transactions.columns.amount") }</th>
                                <th>{ i18n.t("transactions.columns.date") }</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows }
                        </tbody>
                    </table>
                </div>
                <div class="flex justify-end">
                    <Pagination page={*page_state} on_change={on_page_change} disabled={*loading} />
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_minor_units() {
        assert_eq!(format_amount(500), "5.00");
        assert_eq!(format_amount(57), "0.57");
        assert_eq!(format_amount(120_05), "120.05");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-250), "-2.50");
    }
}
