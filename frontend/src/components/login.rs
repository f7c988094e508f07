use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos::task::spawn_local;
use riyadah_client::{AppRoute, LoginPortal, Notifier};
use riyadah_shared::LoginCredentials;

/// Form checks done before anything is sent.
fn validate(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

fn subtitle(portal: LoginPortal) -> &'static str {
    match portal {
        LoginPortal::Member => "Sign in to track your tournaments and rewards",
        LoginPortal::Admin => "Platform administration",
        LoginPortal::Host => "Manage your tournaments and events",
        LoginPortal::Moderator => "Review games and keep the community safe",
    }
}

#[component]
pub fn LoginPage(portal: LoginPortal) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let is_loading = move || auth.session.with(|s| s.is_loading) && !is_submitting.get();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let creds = LoginCredentials::new(email.get_untracked().trim(), password.get_untracked());
        if let Err(message) = validate(&creds.email, &creds.password) {
            toaster.error(message);
            return;
        }

        set_is_submitting.set(true);
        let actions = auth.actions();
        let return_to = router.return_path();
        spawn_local(async move {
            // 失败时通知已由会话动作发出，这里只需保留表单
            if actions
                .sign_in(portal, &creds, return_to.as_deref())
                .await
                .is_err()
            {
                set_password.set(String::new());
            }
            set_is_submitting.set(false);
        });
    };

    let title = format!("{} Login", portal.label());

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! { <crate::components::layout::LoadingScreen /> }
        >
            <div class="hero min-h-[80vh]">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <h1 class="text-3xl font-bold">{title.clone()}</h1>
                        <p class="text-base-content/70">{subtitle(portal)}</p>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">"Email"</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="you@example.com"
                                    autocomplete="username"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Password"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    autocomplete="current-password"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                    } else {
                                        "Sign In".into_any()
                                    }}
                                </button>
                            </div>
                            <Show when=move || portal == LoginPortal::Member>
                                <p class="text-sm text-center mt-2">
                                    "New here? "
                                    <Link to=AppRoute::Register.to_path() class="link link-primary">
                                        "Create an account"
                                    </Link>
                                </p>
                            </Show>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn empty_fields_are_rejected_before_sending() {
        assert_eq!(validate("", "pw"), Err("Email is required"));
        assert_eq!(validate("   ", "pw"), Err("Email is required"));
        assert_eq!(validate("a@b.c", ""), Err("Password is required"));
        assert_eq!(validate("a@b.c", "pw"), Ok(()));
    }
}
