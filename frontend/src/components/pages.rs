//! 公开页面（无需登录）

use crate::auth::use_auth;
use crate::components::layout::{EmptyState, LoadingScreen};
use crate::web::router::Link;
use crate::web::toast::use_toaster;
use leptos::prelude::*;
use leptos::task::spawn_local;
use riyadah_client::{AppRoute, Notifier};
use riyadah_shared::protocol::SubmitGameRequest;
use riyadah_shared::{Game, GameStatus};

#[component]
fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h1 class="text-4xl font-bold mb-2">{title}</h1>
            <p class="text-base-content/70">{subtitle}</p>
        </div>
    }
}

#[component]
fn InfoCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title">{title}</h2>
                <p class="opacity-70">{body}</p>
            </div>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let cta = move || {
        auth.session.with(|s| match s.landing() {
            Some(landing) => (landing.to_path(), "Go to Dashboard"),
            None => (AppRoute::Register.to_path(), "Join Now"),
        })
    };

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <h1 class="text-5xl font-bold">"Riyadah Elite"</h1>
                    <p class="py-6 text-lg opacity-80">
                        "The home of competitive gaming in the region. Join tournaments, "
                        "test upcoming games and turn your wins into rewards."
                    </p>
                    <div class="flex justify-center gap-4">
                        {move || {
                            let (to, label) = cta();
                            view! { <Link to=to class="btn btn-primary">{label}</Link> }
                        }}
                        <Link to=AppRoute::Tournaments.to_path() class="btn btn-outline">
                            "Browse Tournaments"
                        </Link>
                    </div>
                </div>
            </div>
        </div>
        <div class="max-w-7xl mx-auto p-4 md:p-8 grid grid-cols-1 md:grid-cols-3 gap-6">
            <InfoCard title="Compete" body="Weekly tournaments across the most played titles." />
            <InfoCard title="Earn" body="Every match, join and win earns points for your account." />
            <InfoCard title="Redeem" body="Spend your points on gear, vouchers and event tickets." />
        </div>
    }
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto">
            <PageHeader title="Community" subtitle="Connect with gamers who share your passion" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <InfoCard title="Teams" body="Find teammates and build a squad for the next tournament." />
                <InfoCard title="Events" body="Meetups, watch parties and LAN nights hosted by the community." />
            </div>
        </div>
    }
}

#[component]
pub fn ProductionPage() -> impl IntoView {
    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto">
            <PageHeader title="Production" subtitle="Broadcast and content production for esports events" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <InfoCard title="Live Streaming" body="Full broadcast crews for online and on-site events." />
                <InfoCard title="Content" body="Highlights, interviews and recaps of every major match." />
            </div>
        </div>
    }
}

#[component]
pub fn ArenaPage() -> impl IntoView {
    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto">
            <PageHeader title="Arena" subtitle="Our venue for on-site tournaments and events" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <InfoCard title="Stations" body="Tournament-grade PCs and consoles ready to play." />
                <InfoCard title="Bookings" body="Reserve the arena for private events and team practice." />
            </div>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="p-4 md:p-8 max-w-3xl mx-auto">
            <PageHeader title="Contact" subtitle="We'd love to hear from you" />
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body space-y-2">
                    <p>"Email: " <a class="link link-primary" href="mailto:info@riyadahelite.com">"info@riyadahelite.com"</a></p>
                    <p>"Location: Riyadh, Saudi Arabia"</p>
                </div>
            </div>
        </div>
    }
}

const FAQ: [(&str, &str); 4] = [
    (
        "How do I earn points?",
        "Points are awarded for joining and placing in tournaments and for testing games.",
    ),
    (
        "How do I claim a reward?",
        "Open the Rewards page while signed in and claim any reward you have enough points for.",
    ),
    (
        "Can I leave a tournament?",
        "Yes, as long as it has not started yet.",
    ),
    (
        "How do I submit a game for testing?",
        "Sign in and use the submission form on the Game Test page. A moderator reviews every submission.",
    ),
];

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <div class="p-4 md:p-8 max-w-3xl mx-auto">
            <PageHeader title="FAQ" subtitle="Answers to the questions we hear most" />
            <div class="space-y-2">
                {FAQ
                    .into_iter()
                    .map(|(q, a)| view! {
                        <div class="collapse collapse-arrow bg-base-100">
                            <input type="checkbox" />
                            <div class="collapse-title font-semibold">{q}</div>
                            <div class="collapse-content"><p>{a}</p></div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-6xl font-bold">"404"</h1>
                    <p class="py-4 opacity-70">"This page doesn't exist."</p>
                    <Link to=AppRoute::Home.to_path() class="btn btn-primary">"Back to Home"</Link>
                </div>
            </div>
        </div>
    }
}

// =========================================================
// 游戏测试
// =========================================================

/// 公开列表只展示审核通过或正在测试的游戏
fn is_public(game: &Game) -> bool {
    matches!(game.status, GameStatus::Approved | GameStatus::Testing)
}

fn optional(s: String) -> Option<String> {
    let s = s.trim().to_string();
    (!s.is_empty()).then_some(s)
}

#[component]
pub fn GameTestPage() -> impl IntoView {
    let auth = use_auth();
    let (games, set_games) = signal(Vec::<Game>::new());
    let (is_loading, set_is_loading) = signal(true);

    Effect::new(move |_| {
        let actions = auth.actions();
        spawn_local(async move {
            if let Ok(list) = actions.api().games().list().await {
                set_games.set(list.into_iter().filter(is_public).collect());
            }
            set_is_loading.set(false);
        });
    });

    view! {
        <div class="p-4 md:p-8 max-w-7xl mx-auto space-y-8">
            <PageHeader title="Game Test" subtitle="Play upcoming games before anyone else" />

            <Show when=move || !is_loading.get() fallback=|| view! { <LoadingScreen /> }>
                <Show
                    when=move || games.with(|g| !g.is_empty())
                    fallback=|| view! { <EmptyState title="No games open for testing" /> }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {move || games.get().into_iter().map(|game| view! {
                            <div class="card bg-base-100 shadow-xl">
                                {game.image_url.map(|src| view! {
                                    <figure><img src=src alt="" class="h-40 w-full object-cover" /></figure>
                                })}
                                <div class="card-body">
                                    <h2 class="card-title">{game.title}</h2>
                                    <p class="text-sm opacity-70">{game.developer} " · " {game.genre}</p>
                                    {game.description.map(|d| view! { <p class="text-sm">{d}</p> })}
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </Show>
            </Show>

            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! {
                    <p class="text-center opacity-70">
                        <Link to=AppRoute::Login.to_path() class="link link-primary">"Sign in"</Link>
                        " to submit your own game for testing."
                    </p>
                }
            >
                <SubmitGameForm />
            </Show>
        </div>
    }
}

#[component]
fn SubmitGameForm() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toaster();

    let title = RwSignal::new(String::new());
    let developer = RwSignal::new(String::new());
    let genre = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let req = SubmitGameRequest {
            title: title.get_untracked().trim().to_string(),
            developer: developer.get_untracked().trim().to_string(),
            genre: genre.get_untracked().trim().to_string(),
            description: optional(description.get_untracked()),
            image_url: optional(image_url.get_untracked()),
        };
        if req.title.is_empty() || req.developer.is_empty() || req.genre.is_empty() {
            toaster.error("Title, developer and genre are required");
            return;
        }

        set_is_submitting.set(true);
        let actions = auth.actions();
        spawn_local(async move {
            if let Ok(game) = actions.api().games().submit(&req).await {
                toaster.success(&format!("\"{}\" submitted for review", game.title));
                for input in [title, developer, genre, description, image_url] {
                    input.set(String::new());
                }
            }
            set_is_submitting.set(false);
        });
    };

    let field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-control">
                <label class="label">
                    <span class="label-text">{label}</span>
                </label>
                <input
                    type="text"
                    class="input input-bordered input-sm"
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                />
            </div>
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
            <form class="card-body" on:submit=on_submit>
                <h2 class="card-title">"Submit a Game"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-2">
                    {field("Title", title)}
                    {field("Developer", developer)}
                    {field("Genre", genre)}
                </div>
                {field("Image URL", image_url)}
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
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary btn-sm" disabled=move || is_submitting.get()>
                        "Submit for Review"
                    </button>
                </div>
            </form>
        </div>
    }
}
