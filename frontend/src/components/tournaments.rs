use crate::auth::use_auth;
use crate::components::layout::{EmptyState, LoadingScreen, format_date};
use crate::web::router::Link;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos::task::spawn_local;
use riyadah_client::{AppRoute, Notifier};
use riyadah_shared::{Tournament, TournamentStatus};
use std::collections::HashSet;

fn status_badge(status: TournamentStatus) -> (&'static str, &'static str) {
    match status {
        TournamentStatus::Upcoming => ("Upcoming", "badge badge-primary"),
        TournamentStatus::Active => ("Live", "badge badge-warning"),
        TournamentStatus::Completed => ("Completed", "badge badge-success"),
        TournamentStatus::Cancelled => ("Cancelled", "badge badge-error"),
    }
}

/// 只有未开始的赛事可以报名或退出
fn is_open(t: &Tournament) -> bool {
    t.status == TournamentStatus::Upcoming
}

#[component]
pub fn TournamentsPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let (tournaments, set_tournaments) = signal(Vec::<Tournament>::new());
    let (joined, set_joined) = signal(HashSet::<u64>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (busy, set_busy) = signal(Option::<u64>::None);

    // 列表对所有人可见；登录后再加载自己已报名的赛事
    Effect::new(move |_| {
        let signed_in = auth.is_authenticated();
        let actions = auth.actions();
        spawn_local(async move {
            if let Ok(list) = actions.api().tournaments().list().await {
                set_tournaments.set(list);
            }
            if signed_in {
                if let Ok(mine) = actions.api().tournaments().mine().await {
                    set_joined.set(mine.into_iter().map(|ut| ut.tournament_id).collect());
                }
            } else {
                set_joined.set(HashSet::new());
            }
            set_is_loading.set(false);
        });
    });

    let toggle = move |id: u64| {
        if busy.get_untracked().is_some() {
            return;
        }
        let leaving = joined.with_untracked(|j| j.contains(&id));
        let actions = auth.actions();
        set_busy.set(Some(id));
        spawn_local(async move {
            let api = actions.api().tournaments();
            let result = if leaving { api.leave(id).await } else { api.join(id).await };
            if let Ok(resp) = result {
                set_joined.update(|j| {
                    if leaving {
                        j.remove(&id);
                    } else {
                        j.insert(id);
                    }
                });
                let fallback = if leaving { "Left tournament" } else { "Joined tournament" };
                toaster.success(if resp.message.is_empty() { fallback } else { &resp.message });

                // 刷新该行（状态可能已变化）
                if let Ok(fresh) = api.get(id).await {
                    set_tournaments.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|t| t.id == id) {
                            *slot = fresh;
                        }
                    });
                }
            }
            set_busy.set(None);
        });
    };

    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto">
            <div class="mb-8">
                <h1 class="text-4xl font-bold mb-2">"Tournaments"</h1>
                <p class="text-base-content/70">"Compete with the best players in the region"</p>
            </div>

            <Show when=move || !is_loading.get() fallback=|| view! { <LoadingScreen /> }>
                <Show
                    when=move || tournaments.with(|t| !t.is_empty())
                    fallback=|| view! {
                        <EmptyState title="No tournaments yet" message="Check back soon" />
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || tournaments.get()
                            key=|t| (t.id, t.status)
                            children=move |t| {
                                let id = t.id;
                                let open = is_open(&t);
                                let (label, badge) = status_badge(t.status);
                                let is_joined = move || joined.with(|j| j.contains(&id));
                                view! {
                                    <div class="card bg-base-100 shadow-xl">
                                        <div class="card-body">
                                            <div class="flex items-start justify-between gap-2">
                                                <h2 class="card-title">{t.title}</h2>
                                                <span class=badge>{label}</span>
                                            </div>
                                            <p class="text-sm opacity-70">{t.game}</p>
                                            {t.description.map(|d| view! { <p class="text-sm">{d}</p> })}
                                            <div class="text-xs opacity-60 space-y-1">
                                                <p>{format_date(&t.start_date)} " – " {format_date(&t.end_date)}</p>
                                                <p>"Up to " {t.max_participants} " players"</p>
                                                {t.prize_pool.map(|p| view! { <p>"Prize pool: " {p}</p> })}
                                                <p>"Hosted by " {t.created_by}</p>
                                            </div>
                                            <div class="card-actions justify-end mt-2">
                                                <Show
                                                    when=move || auth.is_authenticated()
                                                    fallback=|| view! {
                                                        <Link to=AppRoute::Login.to_path() class="btn btn-outline btn-sm">
                                                            "Sign in to join"
                                                        </Link>
                                                    }
                                                >
                                                    <button
                                                        class=move || if is_joined() { "btn btn-outline btn-error btn-sm" } else { "btn btn-secondary btn-sm" }
                                                        disabled=move || !open || busy.get().is_some()
                                                        on:click=move |_| toggle(id)
                                                    >
                                                        {move || if busy.get() == Some(id) {
                                                            "Working..."
                                                        } else if is_joined() {
                                                            "Leave"
                                                        } else {
                                                            "Join"
                                                        }}
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
        </div>
    }
}
