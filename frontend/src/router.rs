use crate::analytics::AnalyticsPage;
use crate::channels::ChannelsPage;
use crate::dashboard::DashboardPage;
use crate::donations::DonationsPage;
use crate::platforms::PlatformsPage;
use crate::users::UsersPage;
use crate::videos::VideosPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/analytics")]
    Analytics,
    #[at("/platforms")]
    Platforms,
    #[at("/users")]
    Users,
    #[at("/channels")]
    Channels,
    #[at("/videos")]
    Videos,
    #[at("/donations")]
    Donations,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Analytics => html! { <AnalyticsPage /> },
        Route::Platforms => html! { <PlatformsPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::Channels => html! { <ChannelsPage /> },
        Route::Videos => html! { <VideosPage /> },
        Route::Donations => html! { <DonationsPage /> },
        Route::NotFound => html! {
            <div class="main-content">
                <div class="hero-section">
                    <h2>{"404 - Page Not Found"}</h2>
                    <Link<Route> to={Route::Dashboard} classes="btn btn-outline">
                        {"Back to the dashboard"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
