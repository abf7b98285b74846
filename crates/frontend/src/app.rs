use crate::dashboards::FinancialOverviewDashboard;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="app-main">
                <FinancialOverviewDashboard />
            </main>
        </ConfigProvider>
    }
}
