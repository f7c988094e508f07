//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 访问规则由 `riyadah_client::guard` 决定，这里只负责执行跳转。

use leptos::prelude::*;
use riyadah_client::{AppRoute, GuardDecision, Navigator, Session, guard};
use wasm_bindgen::prelude::*;

use crate::components::layout::LoadingScreen;

const RETURN_PARAM: &str = "from";

/// 获取当前浏览器路径（含查询串）
fn current_location() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// `/login` + `?from=<encoded origin>`
fn with_return(target: &str, from: &str) -> String {
    match riyadah_client::safe_return_path(from) {
        Some(from) => {
            let encoded: String = js_sys::encode_uri_component(from).into();
            format!("{}?{}={}", target, RETURN_PARAM, encoded)
        }
        None => target.to_string(),
    }
}

fn query_param(location: &str, name: &str) -> Option<String> {
    let (_, query) = location.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| js_sys::decode_uri_component(value).ok())
        .and_then(|value| value.as_string())
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 会话信号由外部注入，路由服务只读取它。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由
    current_route: RwSignal<AppRoute>,
    /// 当前 path + query，用于守卫记录来源
    location: RwSignal<String>,
    session: Signal<Session>,
}

impl RouterService {
    fn new(session: Signal<Session>) -> Self {
        let location = current_location();
        let initial_route = AppRoute::from_path(&location);

        Self {
            current_route: RwSignal::new(initial_route),
            location: RwSignal::new(location),
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route.read_only()
    }

    pub fn location(&self) -> ReadSignal<String> {
        self.location.read_only()
    }

    /// The `from` the guard attached to the current URL, if any.
    pub fn return_path(&self) -> Option<String> {
        self.location.with_untracked(|loc| query_param(loc, RETURN_PARAM))
    }

    /// 导航（新增历史记录）
    pub fn navigate(&self, path: &str) {
        self.go(path, true);
    }

    /// 重定向（替换当前历史记录）
    pub fn replace(&self, path: &str) {
        self.go(path, false);
    }

    fn go(&self, path: &str, use_push: bool) {
        if use_push {
            push_history_state(path);
        } else {
            replace_history_state(path);
        }
        self.location.set(path.to_string());
        self.current_route.set(AppRoute::from_path(path));
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let location = current_location();
            router.current_route.set(AppRoute::from_path(&location));
            router.location.set(location);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 已登录用户访问登录/注册页时送回其落地页
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let landing = router.session.with(|s| {
                if s.is_loading {
                    None
                } else {
                    s.landing()
                }
            });
            let route = router.current_route.get();

            if let Some(landing) = landing {
                if route.is_auth_page() {
                    log::info!("[Router] already signed in, leaving {}", route);
                    let target = router
                        .return_path()
                        .filter(|from| riyadah_client::safe_return_path(from).is_some())
                        .unwrap_or_else(|| landing.to_path().to_string());
                    router.replace(&target);
                }
            }
        });
    }

    fn setup_title(&self) {
        let current_route = self.current_route;
        Effect::new(move |_| set_document_title(current_route.get().title()));
    }
}

impl Navigator for RouterService {
    fn navigate(&self, path: &str) {
        RouterService::navigate(self, path);
    }

    /// 401 时的强制跳转，保留来源以便登录后返回
    fn redirect(&self, path: &str) {
        let current = self.current_route.get_untracked();
        if current.is_auth_page() {
            return;
        }
        let from = self.location.get_untracked();
        log::info!("[Router] redirecting {} -> {}", from, path);
        self.replace(&with_return(path, &from));
    }
}

/// 提供路由服务到 Context 并初始化
pub fn provide_router(session: Signal<Session>) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.setup_auth_redirect();
    router.setup_title();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 受保护路由
///
/// 按路由自身的角色列表执行守卫：加载中显示占位，未登录跳转登录页并
/// 记录来源，角色不符跳回首页。
#[component]
pub fn Protected(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let router = use_router();
    let session = router.session;

    let decision = Memo::new(move |_| {
        let location = router.location().get();
        session.with(|s| guard::evaluate_route(s, route, &location))
    });

    Effect::new(move |_| match decision.get() {
        GuardDecision::RedirectToLogin { from } => {
            log::info!("[Router] {} requires sign-in", route);
            router.replace(&with_return(AppRoute::auth_failure_redirect().to_path(), &from));
        }
        GuardDecision::RedirectHome => {
            log::info!("[Router] role not allowed on {}", route);
            router.replace(AppRoute::forbidden_redirect().to_path());
        }
        GuardDecision::Pending | GuardDecision::Render => {}
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        _ => view! { <LoadingScreen /> }.into_any(),
    }
}

/// 站内链接，拦截点击改用 History API
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
