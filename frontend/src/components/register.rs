use crate::auth::use_auth;
use crate::web::router::Link;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos::task::spawn_local;
use riyadah_client::{AppRoute, Notifier};
use riyadah_shared::RegisterCredentials;

fn validate(creds: &RegisterCredentials) -> Result<(), &'static str> {
    if creds.name.trim().is_empty() {
        return Err("Name is required");
    }
    if creds.email.trim().is_empty() {
        return Err("Email is required");
    }
    if creds.password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let creds = RegisterCredentials {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if let Err(message) = validate(&creds) {
            toaster.error(message);
            return;
        }

        set_is_submitting.set(true);
        let actions = auth.actions();
        spawn_local(async move {
            let _ = actions.register(&creds).await;
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[80vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Join Riyadah Elite"</h1>
                    <p class="text-base-content/70">
                        "Create an account to compete, earn points and claim rewards"
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Your name"
                                autocomplete="name"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                autocomplete="email"
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
                                autocomplete="new-password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                } else {
                                    "Create Account".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Already a member? "
                            <Link to=AppRoute::Login.to_path() class="link link-primary">
                                "Sign in"
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;
    use riyadah_shared::RegisterCredentials;

    fn creds(name: &str, email: &str, password: &str) -> RegisterCredentials {
        RegisterCredentials {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn registration_form_checks() {
        assert_eq!(validate(&creds(" ", "a@b.c", "secret")), Err("Name is required"));
        assert_eq!(validate(&creds("Sara", "", "secret")), Err("Email is required"));
        assert_eq!(validate(&creds("Sara", "a@b.c", "")), Err("Password is required"));
        assert_eq!(validate(&creds("Sara", "a@b.c", "secret")), Ok(()));
    }
}
