use crate::config::get_app_name;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ITEMS: [(Route, &str); 7] = [
    (Route::Dashboard, "Dashboard"),
    (Route::Analytics, "Analytics"),
    (Route::Platforms, "Platforms"),
    (Route::Users, "Users"),
    (Route::Channels, "Channels"),
    (Route::Videos, "Videos"),
    (Route::Donations, "Donations"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let current = use_route::<Route>();

    html! {
        <nav class="navbar">
            <div class="nav-container">
                <div class="logo-section">
                    <div class="logo-icon">{"SD"}</div>
                    <span class="logo-text">{ get_app_name() }</span>
                </div>

                <div class="desktop-menu">
                    {
                        NAV_ITEMS.iter().map(|(route, name)| {
                            let classes = if current.as_ref() == Some(route) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            };
                            html! {
                                <Link<Route> to={route.clone()} classes={classes}>
                                    { *name }
                                </Link<Route>>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </nav>
    }
}
