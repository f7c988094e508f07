use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use riyadah_client::AppRoute;

/// 全屏加载占位
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] message: String,
) -> impl IntoView {
    view! {
        <div class="text-center py-8 text-base-content/60">
            <p class="font-semibold">{title}</p>
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(default = "text-primary")] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {}", accent)>{move || value.get()}</div>
        </div>
    }
}

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

const NAV_LINKS: [(AppRoute, &str); 6] = [
    (AppRoute::Community, "Community"),
    (AppRoute::Tournaments, "Tournaments"),
    (AppRoute::Rewards, "Rewards"),
    (AppRoute::GameTest, "Game Test"),
    (AppRoute::Arena, "Arena"),
    (AppRoute::Faq, "FAQ"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_logout = move |_| {
        let actions = auth.actions();
        spawn_local(async move {
            actions.logout().await;
        });
    };

    let account = move || {
        let session = auth.session.get();
        if session.is_loading {
            return view! { <span class="loading loading-dots loading-sm"></span> }.into_any();
        }
        match (session.user, session.landing()) {
            (Some(user), Some(landing)) => view! {
                <div class="flex items-center gap-3">
                    <span class="badge badge-primary badge-outline">{user.points} " pts"</span>
                    <Link to=landing.to_path() class="btn btn-ghost btn-sm">
                        {user.display_name().to_string()}
                    </Link>
                    <button class="btn btn-outline btn-error btn-sm" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            }
            .into_any(),
            _ => view! {
                <div class="flex items-center gap-2">
                    <Link to=AppRoute::Login.to_path() class="btn btn-ghost btn-sm">
                        "Login"
                    </Link>
                    <Link to=AppRoute::Register.to_path() class="btn btn-primary btn-sm">
                        "Join Now"
                    </Link>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <div class="navbar bg-base-100 shadow-xl sticky top-0 z-40">
            <div class="flex-1 gap-2">
                <Link to=AppRoute::Home.to_path() class="btn btn-ghost text-xl">
                    "Riyadah Elite"
                </Link>
                <ul class="menu menu-horizontal hidden lg:flex">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(route, label)| {
                            let active = move || router.current_route().get() == route;
                            view! {
                                <li class:font-bold=active>
                                    <Link to=route.to_path()>{label}</Link>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="flex-none">{account}</div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-6 bg-base-100 text-base-content/60">
            <nav class="grid grid-flow-col gap-4">
                <Link to=AppRoute::Contact.to_path()>"Contact"</Link>
                <Link to=AppRoute::Faq.to_path()>"FAQ"</Link>
                <Link to=AppRoute::Production.to_path()>"Production"</Link>
            </nav>
            <p>"© Riyadah Elite"</p>
        </footer>
    }
}
