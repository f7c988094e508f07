//! 角色仪表盘：管理员、主办方、版主，以及管理员的游戏审核面板

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, LoadingScreen, StatCard, format_date};
use crate::web::router::Link;
use crate::web::toast::use_toaster;
use chrono::{DateTime, NaiveDateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use riyadah_client::{AppRoute, Notifier};
use riyadah_shared::protocol::CreateTournamentRequest;
use riyadah_shared::{Game, GameStatus};

/// `<input type="datetime-local">` 的取值格式
const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";

fn parse_datetime_local(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_LOCAL)
        .ok()
        .map(|d| d.and_utc())
}

fn count_with(games: &[Game], status: GameStatus) -> usize {
    games.iter().filter(|g| g.status == status).count()
}

/// Loads the submitted games once on mount.
fn use_games() -> (ReadSignal<Vec<Game>>, WriteSignal<Vec<Game>>, ReadSignal<bool>) {
    let auth = use_auth();
    let (games, set_games) = signal(Vec::<Game>::new());
    let (is_loading, set_is_loading) = signal(true);

    Effect::new(move |_| {
        let actions = auth.actions();
        spawn_local(async move {
            // 失败已由拦截器通知
            if let Ok(list) = actions.api().games().list().await {
                set_games.set(list);
            }
            set_is_loading.set(false);
        });
    });

    (games, set_games, is_loading)
}

#[component]
fn RoleHeader(role: &'static str, accent: &'static str, blurb: &'static str) -> impl IntoView {
    let auth = use_auth();
    let name = move || auth.user().map(|u| u.display_name().to_string()).unwrap_or_default();

    view! {
        <div class="mb-8">
            <h1 class="text-4xl font-bold mb-2">
                {role} " " <span class=accent>"Dashboard"</span>
            </h1>
            <p class="text-base-content/70">
                "Welcome back, " <span class=format!("{} font-semibold", accent)>{name}</span> ". "
                {blurb}
            </p>
        </div>
    }
}

// =========================================================
// 管理员
// =========================================================

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let (games, _, _) = use_games();
    let count = move |status: GameStatus| {
        Signal::derive(move || games.with(|g| count_with(g, status)).to_string())
    };

    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto">
            <RoleHeader
                role="Admin"
                accent="text-primary"
                blurb="Manage the Riyadah Elite platform from here."
            />
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100 mb-8">
                <StatCard
                    title="Submitted Games"
                    value=Signal::derive(move || games.with(Vec::len).to_string())
                />
                <StatCard
                    title="Pending Review"
                    value=count(GameStatus::Pending)
                    accent="text-warning"
                />
                <StatCard
                    title="In Testing"
                    value=count(GameStatus::Testing)
                    accent="text-secondary"
                />
            </div>
            <Link to=AppRoute::AdminPanel.to_path() class="btn btn-primary">
                "Open Admin Panel"
            </Link>
        </div>
    }
}

#[component]
pub fn AdminPanelPage() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();
    let (games, set_games, is_loading) = use_games();

    let change_status = move |id: u64, value: String| {
        let Some(status) = GameStatus::parse(&value) else {
            return;
        };
        let actions = auth.actions();
        spawn_local(async move {
            match actions.api().games().update_status(id, status).await {
                Ok(resp) => {
                    set_games.update(|list| {
                        if let Some(game) = list.iter_mut().find(|g| g.id == id) {
                            game.status = status;
                        }
                    });
                    let message = if resp.message.is_empty() {
                        format!("Game marked as {}", status.as_str())
                    } else {
                        resp.message
                    };
                    toaster.success(&message);
                }
                Err(e) => log::warn!("status update for game {} failed: {}", id, e),
            }
        });
    };

    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto">
            <h1 class="text-3xl font-bold mb-6">"Admin Panel"</h1>
            <Show when=move || !is_loading.get() fallback=|| view! { <LoadingScreen /> }>
                <Show
                    when=move || games.with(|g| !g.is_empty())
                    fallback=|| view! { <EmptyState title="No games submitted yet" /> }
                >
                    <div class="overflow-x-auto card bg-base-100 shadow-xl">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Developer"</th>
                                    <th class="hidden md:table-cell">"Genre"</th>
                                    <th class="hidden md:table-cell">"Submitted"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || games.get()
                                    key=|g| (g.id, g.status)
                                    children=move |game| {
                                        let id = game.id;
                                        let current = game.status;
                                        view! {
                                            <tr>
                                                <td class="font-semibold">{game.title}</td>
                                                <td>{game.developer}</td>
                                                <td class="hidden md:table-cell">{game.genre}</td>
                                                <td class="hidden md:table-cell">
                                                    {game.submitted_by} " · " {format_date(&game.created_at)}
                                                </td>
                                                <td>
                                                    <select
                                                        class="select select-bordered select-sm"
                                                        on:change=move |ev| change_status(id, event_target_value(&ev))
                                                    >
                                                        {GameStatus::ALL
                                                            .into_iter()
                                                            .map(|s| view! {
                                                                <option value=s.as_str() selected={s == current}>
                                                                    {s.as_str()}
                                                                </option>
                                                            })
                                                            .collect_view()}
                                                    </select>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

// =========================================================
// 主办方
// =========================================================

#[component]
pub fn HostDashboardPage() -> impl IntoView {
    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto">
            <RoleHeader
                role="Host"
                accent="text-secondary"
                blurb="Manage your tournaments and events from here."
            />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                <CreateTournamentForm />
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">"Manage Tournaments"</h2>
                        <p class="opacity-70">
                            "View your existing tournaments and their participants."
                        </p>
                        <div class="card-actions">
                            <Link to=AppRoute::Tournaments.to_path() class="btn btn-primary btn-sm">
                                "View Tournaments"
                            </Link>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CreateTournamentForm() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let title = RwSignal::new(String::new());
    let game = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let prize_pool = RwSignal::new(String::new());
    let max_participants = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let build = move || -> Result<CreateTournamentRequest, &'static str> {
        let title = title.get_untracked().trim().to_string();
        let game = game.get_untracked().trim().to_string();
        if title.is_empty() || game.is_empty() {
            return Err("Title and game are required");
        }
        let start_date = parse_datetime_local(&start.get_untracked()).ok_or("Start date is required")?;
        let end_date = parse_datetime_local(&end.get_untracked()).ok_or("End date is required")?;
        if end_date < start_date {
            return Err("End date must be after the start date");
        }
        let prize = prize_pool.get_untracked().trim().to_string();
        Ok(CreateTournamentRequest {
            title,
            game,
            description: description.get_untracked().trim().to_string(),
            start_date,
            end_date,
            prize_pool: (!prize.is_empty()).then_some(prize),
            max_participants: max_participants.get_untracked().trim().parse().ok(),
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let req = match build() {
            Ok(req) => req,
            Err(message) => {
                toaster.error(message);
                return;
            }
        };

        set_is_submitting.set(true);
        let actions = auth.actions();
        spawn_local(async move {
            if let Ok(created) = actions.api().tournaments().create(&req).await {
                toaster.success(&format!("Tournament \"{}\" created", created.title));
                for input in [title, game, description, start, end, prize_pool, max_participants] {
                    input.set(String::new());
                }
            }
            set_is_submitting.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    type=kind
                    class="input input-bordered input-sm"
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                />
            </div>
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <h2 class="card-title">"Create Tournament"</h2>
                {field("Title", "text", title)}
                {field("Game", "text", game)}
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">"Description"</span>
                    </label>
                    <textarea
                        class="textarea textarea-bordered"
                        on:input=move |ev| description.set(event_target_value(&ev))
                        prop:value=description
                    ></textarea>
                </div>
                <div class="grid grid-cols-2 gap-2">
                    {field("Start", "datetime-local", start)}
                    {field("End", "datetime-local", end)}
                </div>
                <div class="grid grid-cols-2 gap-2">
                    {field("Prize Pool", "text", prize_pool)}
                    {field("Max Participants", "number", max_participants)}
                </div>
                <div class="card-actions mt-4">
                    <button class="btn btn-secondary btn-sm" disabled=move || is_submitting.get()>
                        "Create Tournament"
                    </button>
                </div>
            </form>
        </div>
    }
}

// =========================================================
// 版主
// =========================================================

#[component]
pub fn ModeratorDashboardPage() -> impl IntoView {
    let (games, _, is_loading) = use_games();
    let pending = move || {
        games.with(|g| {
            g.iter()
                .filter(|game| game.status == GameStatus::Pending)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto">
            <RoleHeader
                role="Moderator"
                accent="text-accent"
                blurb="Review games and keep the community safe."
            />
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">"Games Awaiting Review"</h2>
                    <Show when=move || !is_loading.get() fallback=|| view! { <LoadingScreen /> }>
                        <Show
                            when=move || !pending().is_empty()
                            fallback=|| view! { <EmptyState title="Nothing to review" /> }
                        >
                            <ul class="space-y-3">
                                {move || pending().into_iter().map(|game| view! {
                                    <li class="p-3 rounded-lg bg-base-200">
                                        <h3 class="font-semibold">{game.title}</h3>
                                        <p class="text-sm opacity-70">
                                            {game.developer} " · " {game.genre}
                                        </p>
                                        <p class="text-xs opacity-50">
                                            "Submitted by " {game.submitted_by} " on "
                                            {format_date(&game.created_at)}
                                        </p>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn datetime_local_input_parses_as_utc() {
        let at = parse_datetime_local("2025-03-14T18:30").unwrap();
        assert_eq!((at.year(), at.month(), at.day()), (2025, 3, 14));
        assert_eq!((at.hour(), at.minute()), (18, 30));
        assert!(parse_datetime_local("").is_none());
        assert!(parse_datetime_local("14/03/2025").is_none());
    }
}
