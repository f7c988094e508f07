//! 认证模块
//!
//! 把核心库的会话上下文绑定到一个响应式信号上。页面只读取信号，
//! 所有写入都经过 `AppSession` 的动作函数。

use crate::web::http::FetchHttpClient;
use crate::web::router::RouterService;
use crate::web::toast::Toaster;
use leptos::prelude::*;
use leptos::task::spawn_local;
use riyadah_client::{ApiClient, ClientConfig, Session, SessionContext, SessionStore};
use riyadah_shared::User;
use std::rc::Rc;

pub type AppApi = ApiClient<FetchHttpClient>;
pub type AppSession = SessionContext<FetchHttpClient, SignalSession>;

/// 信号存储：每次写入都会触发所有读取者重新渲染
#[derive(Clone, Copy)]
pub struct SignalSession(RwSignal<Session>);

impl SessionStore for SignalSession {
    fn get(&self) -> Session {
        self.0.get_untracked()
    }

    fn set(&self, session: Session) {
        self.0.set(session);
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        self.0.update(f);
    }
}

/// 认证上下文
///
/// 通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub session: ReadSignal<Session>,
    actions: StoredValue<AppSession, LocalStorage>,
}

impl AuthContext {
    pub fn new(session: RwSignal<Session>, router: RouterService, toaster: Toaster) -> Self {
        let config = ClientConfig::from_env();
        log::info!("API base: {}", config.base_url);

        let api = ApiClient::new(config, FetchHttpClient, Rc::new(toaster), Rc::new(router));
        let actions = SessionContext::new(
            Rc::new(api),
            SignalSession(session),
            Rc::new(toaster),
            Rc::new(router),
        );

        Self {
            session: session.read_only(),
            actions: StoredValue::new_local(actions),
        }
    }

    /// 会话动作（登录、注册、注销、本地更新）
    pub fn actions(&self) -> AppSession {
        self.actions.get_value()
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 启动时探测后端会话
pub fn init_auth(ctx: &AuthContext) {
    let actions = ctx.actions();
    spawn_local(async move {
        actions.restore_session().await;
    });
}
