use crate::auth::use_auth;
use crate::components::layout::{EmptyState, LoadingScreen, StatCard, format_date};
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use riyadah_client::AppRoute;
use riyadah_shared::{
    ActivityType, ClaimStatus, DashboardData, ParticipationStatus, UserActivity, UserReward,
    UserTournament,
};

/// 仪表盘每个列表只展示最近几条
const PREVIEW_LEN: usize = 3;

fn participation_badge(status: ParticipationStatus) -> (&'static str, &'static str) {
    match status {
        ParticipationStatus::Registered => ("registered", "badge badge-primary"),
        ParticipationStatus::Active => ("active", "badge badge-warning"),
        ParticipationStatus::Completed => ("completed", "badge badge-success"),
        ParticipationStatus::Disqualified => ("disqualified", "badge badge-error"),
    }
}

fn claim_badge(status: ClaimStatus) -> (&'static str, &'static str) {
    match status {
        ClaimStatus::Claimed => ("claimed", "badge badge-warning"),
        ClaimStatus::Shipped => ("shipped", "badge badge-primary"),
        ClaimStatus::Delivered => ("delivered", "badge badge-success"),
    }
}

fn activity_accent(kind: ActivityType) -> &'static str {
    match kind {
        ActivityType::TournamentJoin | ActivityType::TournamentLeave => "bg-secondary/20 text-secondary",
        ActivityType::RewardClaim => "bg-accent/20 text-accent",
        ActivityType::PointsEarned => "bg-success/20 text-success",
        _ => "bg-primary/20 text-primary",
    }
}

/// "+10 points" / "-5 points"; nothing for zero.
fn points_delta(change: i64) -> Option<String> {
    match change {
        0 => None,
        c if c > 0 => Some(format!("+{} points", c)),
        c => Some(format!("{} points", c)),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let (data, set_data) = signal(Option::<DashboardData>::None);
    let (is_loading, set_is_loading) = signal(true);

    let load = move || {
        let actions = auth.actions();
        set_is_loading.set(true);
        spawn_local(async move {
            let result = actions.api().dashboard().get().await;
            match result {
                Ok(d) => set_data.set(Some(d)),
                Err(e) => {
                    // 后端不可用时用缓存的用户数据兜底
                    log::error!("dashboard load failed: {}", e);
                    set_data.set(actions.session().user.as_ref().map(DashboardData::fallback_for));
                }
            }
            set_is_loading.set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| load());

    let greeting = move || auth.user().map(|u| u.display_name().to_string()).unwrap_or_default();
    // 积分以会话中的用户为准（领取奖励后会先于后端刷新）
    let points = Signal::derive(move || {
        auth.user().map(|u| u.points).unwrap_or_default().to_string()
    });
    let member_since = Signal::derive(move || {
        auth.user()
            .map(|u| u.created_at.format("%b %Y").to_string())
            .unwrap_or_default()
    });
    let stat = move |f: fn(&DashboardData) -> u64| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f).unwrap_or_default()).to_string())
    };

    view! {
        <Show when=move || !is_loading.get() fallback=|| view! { <LoadingScreen /> }>
            <Show
                when=move || data.with(Option::is_some)
                fallback=|| view! {
                    <EmptyState
                        title="Failed to load dashboard"
                        message="Please try refreshing the page"
                    />
                }
            >
                <div class="p-4 md:p-8 max-w-7xl mx-auto space-y-8">
                    <div>
                        <h1 class="text-4xl font-bold mb-2">
                            "Welcome back, " <span class="text-primary">{greeting}</span>
                        </h1>
                        <p class="text-base-content/70">
                            "Here's what's happening in your gaming journey"
                        </p>
                    </div>

                    <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                        <StatCard title="Points Balance" value=points />
                        <StatCard
                            title="Tournaments Joined"
                            value=stat(|d| d.stats.total_tournaments)
                            accent="text-secondary"
                        />
                        <StatCard
                            title="Rewards Claimed"
                            value=stat(|d| d.stats.total_rewards)
                            accent="text-accent"
                        />
                        <StatCard title="Member Since" value=member_since accent="text-success" />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                        <TournamentPreview items=Signal::derive(move || {
                            data.with(|d| d.as_ref().map(|d| d.tournaments.clone()).unwrap_or_default())
                        }) />
                        <RewardPreview items=Signal::derive(move || {
                            data.with(|d| d.as_ref().map(|d| d.rewards.clone()).unwrap_or_default())
                        }) />
                        <ActivityFeed items=Signal::derive(move || {
                            data.with(|d| d.as_ref().map(|d| d.activity.clone()).unwrap_or_default())
                        }) />
                    </div>

                    <QuickActions />
                </div>
            </Show>
        </Show>
    }
}

#[component]
fn TournamentPreview(items: Signal<Vec<UserTournament>>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">"My Tournaments"</h2>
                    <Link to=AppRoute::Tournaments.to_path() class="link link-secondary text-sm">
                        "View All"
                    </Link>
                </div>
                <Show
                    when=move || items.with(|i| !i.is_empty())
                    fallback=|| view! {
                        <EmptyState title="No tournaments joined yet" />
                        <Link to=AppRoute::Tournaments.to_path() class="btn btn-secondary btn-sm">
                            "Browse Tournaments"
                        </Link>
                    }
                >
                    <ul class="space-y-3">
                        {move || items.get().into_iter().take(PREVIEW_LEN).map(|ut| {
                            let (label, class) = participation_badge(ut.status);
                            view! {
                                <li class="flex items-center justify-between p-3 rounded-lg bg-base-200">
                                    <div>
                                        <h3 class="font-semibold">{ut.tournament.title}</h3>
                                        <p class="text-sm opacity-70">{ut.tournament.game}</p>
                                        <p class="text-xs opacity-50">
                                            {format_date(&ut.tournament.start_date)}
                                        </p>
                                    </div>
                                    <span class=class>{label}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn RewardPreview(items: Signal<Vec<UserReward>>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">"My Rewards"</h2>
                    <Link to=AppRoute::Rewards.to_path() class="link link-accent text-sm">
                        "View All"
                    </Link>
                </div>
                <Show
                    when=move || items.with(|i| !i.is_empty())
                    fallback=|| view! {
                        <EmptyState title="No rewards claimed yet" />
                        <Link to=AppRoute::Rewards.to_path() class="btn btn-accent btn-sm">
                            "Browse Rewards"
                        </Link>
                    }
                >
                    <ul class="space-y-3">
                        {move || items.get().into_iter().take(PREVIEW_LEN).map(|ur| {
                            let (label, class) = claim_badge(ur.status);
                            view! {
                                <li class="flex items-center justify-between p-3 rounded-lg bg-base-200">
                                    <div>
                                        <h3 class="font-semibold">{ur.reward.title}</h3>
                                        <p class="text-sm opacity-70">{ur.reward.category}</p>
                                        <p class="text-xs opacity-50">
                                            "Claimed: " {format_date(&ur.claimed_at)}
                                        </p>
                                    </div>
                                    <span class=class>{label}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ActivityFeed(items: Signal<Vec<UserActivity>>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">"Recent Activity"</h2>
                <Show
                    when=move || items.with(|i| !i.is_empty())
                    fallback=|| view! { <EmptyState title="No recent activity" /> }
                >
                    <ul class="space-y-3">
                        {move || items.get().into_iter().map(|a| {
                            let delta = points_delta(a.points_change);
                            let delta_class = if a.points_change > 0 { "text-xs font-semibold text-success" } else { "text-xs font-semibold text-error" };
                            view! {
                                <li class="flex items-start gap-3 p-3 rounded-lg bg-base-200">
                                    <span class=format!("w-3 h-3 mt-1 rounded-full {}", activity_accent(a.activity_type))></span>
                                    <div class="flex-1 min-w-0">
                                        <p class="text-sm">{a.description}</p>
                                        <p class="text-xs opacity-50">{format_date(&a.created_at)}</p>
                                        {delta.map(|d| view! { <p class=delta_class>{d}</p> })}
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn QuickActions() -> impl IntoView {
    let actions = [
        (AppRoute::Tournaments, "Join Tournament", "Compete with others"),
        (AppRoute::Rewards, "Claim Rewards", "Redeem your points"),
        (AppRoute::GameTest, "Test Games", "Try new games"),
        (AppRoute::Community, "Community", "Connect with gamers"),
    ];

    view! {
        <div>
            <h2 class="text-xl font-bold mb-4">"Quick Actions"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {actions.into_iter().map(|(route, title, blurb)| view! {
                    <Link to=route.to_path() class="card bg-base-100 shadow hover:shadow-xl transition-all text-center p-6">
                        <h3 class="font-semibold">{title}</h3>
                        <p class="text-sm opacity-70">{blurb}</p>
                    </Link>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_delta_is_signed() {
        assert_eq!(points_delta(0), None);
        assert_eq!(points_delta(10).as_deref(), Some("+10 points"));
        assert_eq!(points_delta(-5).as_deref(), Some("-5 points"));
    }
}
