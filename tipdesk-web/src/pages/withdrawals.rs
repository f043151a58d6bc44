use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// Landing page for withdrawal-desk accounts.
#[function_component(WithdrawalsPage)]
pub fn withdrawals_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("withdrawals.title") }</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineBanknotes} class="h-6 w-6" />
                            { i18n.t("withdrawals.pending.title") }
                        </h2>
                        <p>{ i18n.t("withdrawals.pending.description") }</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Transactions} classes="btn btn-primary btn-sm">
                                { i18n.t("withdrawals.pending.action") }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineCog6Tooth} class="h-6 w-6" />
                            { i18n.t("withdrawals.settings.title") }
                        </h2>
                        <p>{ i18n.t("withdrawals.settings.description") }</p>
                        <div class="card-actions justify-end">
                            <Link<MainRoute> to={MainRoute::Settings} classes="btn btn-ghost btn-sm">
                                { i18n.t("withdrawals.settings.action") }
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
