use i18nrs::yew::use_translation;
use tipdesk_shared::models::TransactionDetail;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::ApiClient;
use crate::components::Loading;
use crate::fetch::FetchGeneration;
use crate::routes::MainRoute;

/// Placeholder for fields the API did not supply.
const EMPTY_FIELD: &str = "—";

#[derive(Properties, PartialEq, Eq)]
pub struct TransactionDetailPageProps {
    pub id: i64,
}

#[function_component(TransactionDetailPage)]
pub fn transaction_detail_page(props: &TransactionDetailPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let detail = use_state(|| None::<TransactionDetail>);
    let error = use_state(|| None::<String>);
    let fence = use_mut_ref(FetchGeneration::default);

    {
        let detail = detail.clone();
        let error = error.clone();
        let fence = fence.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            detail.set(None);
            error.set(None);
            let generation = fence.borrow().begin();
            spawn_local(async move {
                let result = ApiClient::shared().transaction(id).await;
                if !fence.borrow().is_current(generation) {
                    return;
                }
                match result {
                    Ok(record) => detail.set(Some(record)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
            || ()
        });
    }

    let field = |value: Option<&str>| -> Html {
        html! { <span>{ value.unwrap_or(EMPTY_FIELD).to_string() }</span> }
    };

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center gap-4">
                <Link<MainRoute> to={MainRoute::Transactions} classes="btn btn-ghost btn-sm">
                    { "←" }
                </Link<MainRoute>>
                <h1 class="text-2xl font-bold">
                    { format!("{} #{}", i18n.t("transaction.title"), props.id) }
                </h1>
            </div>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{ message.clone() }</span>
                </div>
            }
            {
                match &*detail {
                    None if error.is_none() => html! { <Loading /> },
                    None => html! {},
                    Some(record) => html! {
                        <dl class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <dt class="text-sm text-base-content/70">{ i18n.t("transaction.kind") }</dt>
                                <dd class="font-medium">{ record.display_name.clone() }</dd>
                            </div>
                            <div>
                                <dt class="text-sm text-base-content/70">{ i18n.t("transaction.date") }</dt>
                                <dd class="font-medium">{ record.created_at.display() }</dd>
                            </div>
                            <div>
                                <dt class="text-sm text-base-content/70">{ i18n.t("transaction.donor") }</dt>
                                <dd class="font-medium">
                                    {
                                        if record.anonymous {
                                            html! { <span class="badge">{ i18n.t("transaction.anonymous") }</span> }
                                        } else {
                                            field(record.donor.as_deref())
                                        }
                                    }
                                </dd>
                            </div>
                            <div>
                                <dt class="text-sm text-base-content/70">{ i18n.t("transaction.recipient") }</dt>
                                <dd class="font-medium">{ field(record.recipient.as_deref()) }</dd>
                            </div>
                            <div class="md:col-span-2">
                                <dt class="text-sm text-base-content/70">{ i18n.t("transaction.message") }</dt>
                                <dd class="font-medium">{ field(record.message.as_deref()) }</dd>
                            </div>
                        </dl>
                    },
                }
            }
        </div>
    }
}
