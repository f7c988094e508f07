//! Riyadah Elite 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `riyadah_client`: 路由表、守卫、会话动作与 API（与平台无关）
//! - `web::router`: 路由服务（History API）
//! - `web::toast`: 通知中心
//! - `auth`: 会话信号与动作
//! - `components`: UI 组件层

mod auth;
pub(crate) mod components {
    pub mod dashboard;
    pub mod layout;
    pub mod login;
    pub mod pages;
    pub mod register;
    pub mod rewards;
    pub mod role_dashboard;
    pub mod tournaments;
}

// 浏览器适配层：fetch 传输、History 路由与通知
pub(crate) mod web {
    pub mod http;
    pub mod router;
    pub mod toast;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::layout::{Footer, Navbar};
use crate::components::login::LoginPage;
use crate::components::pages::*;
use crate::components::register::RegisterPage;
use crate::components::rewards::RewardsPage;
use crate::components::role_dashboard::{
    AdminDashboardPage, AdminPanelPage, HostDashboardPage, ModeratorDashboardPage,
};
use crate::components::tournaments::TournamentsPage;

use leptos::prelude::*;
use riyadah_client::{AppRoute, LoginPortal, Session};
use web::router::{Protected, RouterOutlet, provide_router};
use web::toast::{ToastHost, Toaster};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。受保护路由统一包在 `Protected` 中。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Community => view! { <CommunityPage /> }.into_any(),
        AppRoute::GameTest => view! { <GameTestPage /> }.into_any(),
        AppRoute::Production => view! { <ProductionPage /> }.into_any(),
        AppRoute::Arena => view! { <ArenaPage /> }.into_any(),
        AppRoute::Tournaments => view! { <TournamentsPage /> }.into_any(),
        AppRoute::Rewards => view! { <RewardsPage /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::Faq => view! { <FaqPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage portal=LoginPortal::Member /> }.into_any(),
        AppRoute::AdminLogin => view! { <LoginPage portal=LoginPortal::Admin /> }.into_any(),
        AppRoute::HostLogin => view! { <LoginPage portal=LoginPortal::Host /> }.into_any(),
        AppRoute::ModeratorLogin => {
            view! { <LoginPage portal=LoginPortal::Moderator /> }.into_any()
        }
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! {
            <Protected route=route>
                <DashboardPage />
            </Protected>
        }
        .into_any(),
        AppRoute::AdminDashboard => view! {
            <Protected route=route>
                <AdminDashboardPage />
            </Protected>
        }
        .into_any(),
        AppRoute::AdminPanel => view! {
            <Protected route=route>
                <AdminPanelPage />
            </Protected>
        }
        .into_any(),
        AppRoute::HostDashboard => view! {
            <Protected route=route>
                <HostDashboardPage />
            </Protected>
        }
        .into_any(),
        AppRoute::ModeratorDashboard => view! {
            <Protected route=route>
                <ModeratorDashboardPage />
            </Protected>
        }
        .into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话信号：启动时处于加载状态，直到探测完成
    let session = RwSignal::new(Session::starting());

    // 2. 路由服务与通知中心（核心库通过 Navigator / Notifier 使用它们）
    let router = provide_router(session.into());
    let toaster = Toaster::new();
    provide_context(toaster);

    // 3. 认证上下文
    let auth_ctx = AuthContext::new(session, router, toaster);
    provide_context(auth_ctx);

    // 4. 探测后端会话
    init_auth(&auth_ctx);

    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <Navbar />
            <main class="flex-1">
                <RouterOutlet matcher=route_matcher />
            </main>
            <Footer />
            <ToastHost />
        </div>
    }
}
