use crate::auth::use_auth;
use crate::components::layout::{EmptyState, LoadingScreen, format_date};
use crate::web::router::Link;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos::task::spawn_local;
use riyadah_client::{AppRoute, Notifier};
use riyadah_shared::{Reward, User, UserPatch, UserReward};

/// 领取按钮上的文案
fn claim_label(reward: &Reward, user: Option<&User>) -> &'static str {
    if !reward.is_active || reward.stock <= 0 {
        return "Out of stock";
    }
    match user {
        Some(u) if u.points < reward.points => "Not enough points",
        _ => "Claim",
    }
}

#[component]
pub fn RewardsPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (rewards, set_rewards) = signal(Vec::<Reward>::new());
    let (claimed, set_claimed) = signal(Vec::<UserReward>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (busy, set_busy) = signal(Option::<u64>::None);

    Effect::new(move |_| {
        let signed_in = auth.is_authenticated();
        let actions = auth.actions();
        spawn_local(async move {
            if let Ok(list) = actions.api().rewards().list().await {
                set_rewards.set(list);
            }
            if signed_in {
                if let Ok(mine) = actions.api().rewards().mine().await {
                    set_claimed.set(mine);
                }
            } else {
                set_claimed.set(Vec::new());
            }
            set_is_loading.set(false);
        });
    });

    let claim = move |reward: Reward| {
        if busy.get_untracked().is_some() {
            return;
        }
        let actions = auth.actions();
        set_busy.set(Some(reward.id));
        spawn_local(async move {
            if let Ok(resp) = actions.api().rewards().claim(reward.id).await {
                // 后端已扣分；本地先同步积分，不必重新拉取用户
                if let Some(user) = actions.session().user {
                    actions.update_user(UserPatch::points(user.points - reward.points));
                }
                set_rewards.update(|list| {
                    if let Some(r) = list.iter_mut().find(|r| r.id == reward.id) {
                        r.stock -= 1;
                    }
                });
                if let Ok(mine) = actions.api().rewards().mine().await {
                    set_claimed.set(mine);
                }
                let message = if resp.message.is_empty() {
                    format!("Claimed {}", reward.title)
                } else {
                    resp.message
                };
                toaster.success(&message);
            }
            set_busy.set(None);
        });
    };

    let balance = move || auth.user().map(|u| u.points);

    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto space-y-8">
            <div class="flex flex-wrap items-end justify-between gap-4">
                <div>
                    <h1 class="text-4xl font-bold mb-2">"Rewards"</h1>
                    <p class="text-base-content/70">"Redeem your points for exclusive prizes"</p>
                </div>
                {move || balance().map(|points| view! {
                    <div class="badge badge-lg badge-primary">{points} " points available"</div>
                })}
            </div>

            <Show when=move || !is_loading.get() fallback=|| view! { <LoadingScreen /> }>
                <Show
                    when=move || rewards.with(|r| !r.is_empty())
                    fallback=|| view! { <EmptyState title="No rewards available" /> }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || rewards.get()
                            key=|r| (r.id, r.stock)
                            children=move |reward| {
                                let id = reward.id;
                                let reward = StoredValue::new(reward);
                                let can_claim = move || {
                                    auth.session.with(|s| {
                                        s.user.as_ref().is_some_and(|u| reward.with_value(|r| r.affordable_by(u)))
                                    })
                                };
                                let label = move || {
                                    if busy.get() == Some(id) {
                                        return "Claiming...";
                                    }
                                    auth.session.with(|s| reward.with_value(|r| claim_label(r, s.user.as_ref())))
                                };
                                view! {
                                    <div class="card bg-base-100 shadow-xl">
                                        {reward.with_value(|r| r.image_url.clone()).map(|src| view! {
                                            <figure><img src=src alt="" class="h-40 w-full object-cover" /></figure>
                                        })}
                                        <div class="card-body">
                                            <div class="flex items-start justify-between gap-2">
                                                <h2 class="card-title">{reward.with_value(|r| r.title.clone())}</h2>
                                                <span class="badge badge-accent">{reward.with_value(|r| r.category.clone())}</span>
                                            </div>
                                            {reward.with_value(|r| r.description.clone()).map(|d| view! { <p class="text-sm">{d}</p> })}
                                            <div class="flex justify-between text-sm opacity-70">
                                                <span>{reward.with_value(|r| r.points)} " points"</span>
                                                <span>{reward.with_value(|r| r.stock)} " left"</span>
                                            </div>
                                            <div class="card-actions justify-end mt-2">
                                                <Show
                                                    when=move || auth.is_authenticated()
                                                    fallback=|| view! {
                                                        <Link to=AppRoute::Login.to_path() class="btn btn-outline btn-sm">
                                                            "Sign in to claim"
                                                        </Link>
                                                    }
                                                >
                                                    <button
                                                        class="btn btn-accent btn-sm"
                                                        disabled=move || !can_claim() || busy.get().is_some()
                                                        on:click=move |_| claim(reward.get_value())
                                                    >
                                                        {label}
                                                    </button>
                                                </Show>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || claimed.with(|c| !c.is_empty())>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">"My Claimed Rewards"</h2>
                        <ul class="space-y-2">
                            {move || claimed.get().into_iter().map(|ur| view! {
                                <li class="flex justify-between p-3 rounded-lg bg-base-200">
                                    <span class="font-semibold">{ur.reward.title}</span>
                                    <span class="text-sm opacity-70">
                                        "Claimed: " {format_date(&ur.claimed_at)}
                                    </span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reward(points: i64, stock: i64) -> Reward {
        serde_json::from_value(json!({
            "id": 3,
            "title": "Gaming Mouse",
            "points": points,
            "category": "gear",
            "stock": stock,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn user(points: i64) -> User {
        serde_json::from_value(json!({
            "id": 1,
            "username": "noura",
            "email": "noura@example.com",
            "points": points,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn claim_label_explains_why_a_reward_is_locked() {
        assert_eq!(claim_label(&reward(100, 0), Some(&user(500))), "Out of stock");
        assert_eq!(claim_label(&reward(100, 2), Some(&user(50))), "Not enough points");
        assert_eq!(claim_label(&reward(100, 2), Some(&user(100))), "Claim");
        assert_eq!(claim_label(&reward(100, 2), None), "Claim");
    }
}
