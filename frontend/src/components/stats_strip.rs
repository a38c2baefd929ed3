use shared::{format_amount, DashboardStats};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsStripProps {
    pub stats: DashboardStats,
    pub currency: AttrValue,
    pub balances_hidden: bool,
}

#[function_component(StatsStrip)]
pub fn stats_strip(props: &StatsStripProps) -> Html {
    let number_class = classes!("stat-number", props.balances_hidden.then_some("balance-hidden"));
    let stats = &props.stats;

    let card = |icon: &'static str, label: &'static str, value: String| {
        html! {
            <div class="stat-card">
                <i class={classes!("stat-icon", icon)}></i>
                <div>
                    <div class={number_class.clone()}>{value}</div>
                    <div class="stat-label">{label}</div>
                </div>
            </div>
        }
    };

    html! {
        <section class="stats-grid">
            { card("fas fa-users", "Customers", stats.customers_count.to_string()) }
            { card("fas fa-hand-holding-usd", "Customer debts", format_amount(stats.customers_debt, &props.currency)) }
            { card("fas fa-truck", "Suppliers", stats.suppliers_count.to_string()) }
            { card("fas fa-file-invoice-dollar", "Supplier debts", format_amount(stats.suppliers_debt, &props.currency)) }
            { card("fas fa-cash-register", "Cash balance", format_amount(stats.cash_balance, &props.currency)) }
        </section>
    }
}
