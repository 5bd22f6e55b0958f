// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screen;
mod screens;

use api::live::NewEvents;
use api::nav::DashboardLocation;
use api::prefs::user_prefs::UserPrefs;
use api::RestClient;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::namespace_picker::NamespacePicker;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Container;
use components::snackbar::Snackbar;
use hooks::use_event_watcher::use_event_watcher;
use hooks::use_window_title::use_window_title;
use screen::Screen;
use screen::ALL_SCREENS;
use screens::apis::ApisScreen;
use screens::approvals::ApprovalsScreen;
use screens::balances::BalancesScreen;
use screens::events::EventsScreen;
use screens::pool_details::PoolDetailsScreen;
use screens::pools::PoolsScreen;
use screens::timeline::TimelineScreen;
use screens::transactions::TransactionsScreen;
use screens::transfers::TransfersScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.amber.min.css";

/// The navigation tabs. Switching tab drops the slide and the filters.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();

    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    {
                        let is_active = screen.is_tab_of(&active_screen.read());
                        rsx! {
                            li {
                                a {
                                    href: "#",
                                    class: if is_active { "active-tab" } else { "" },
                                    "aria-current": if is_active { "page" } else { "false" },
                                    onclick: move |event| {
                                        event.prevent_default();
                                        let ns = app_state_mut.namespace.peek().clone();
                                        app_state_mut.location.set(DashboardLocation {
                                            path: screen.path(&ns),
                                            ..Default::default()
                                        });
                                        active_screen.set(screen.clone());
                                    },
                                    "{screen.name()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Refresh button; lights up with the number of events seen since the last
/// refresh.
#[component]
fn RefreshButton() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let pending = app_state_mut.new_events.read().len();
    let label = match pending {
        0 => "Refresh".to_string(),
        n => format!("Refresh ({n} new)"),
    };

    rsx! {
        Button {
            button_type: if pending > 0 { ButtonType::Primary } else { ButtonType::Secondary },
            outline: pending == 0,
            on_click: move |_| app_state_mut.new_events.write().clear(),
            "{label}"
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
    }

    /* --- APP FRAME --- */
    .app-main-container {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        padding: 10px;
        display: flex;
        flex-direction: column;
        overflow: hidden;
    }

    .app-main-container > * {
        flex: 1;
        display: flex !important;
        flex-direction: column;
        height: 100%;
        min-height: 0;
        overflow: hidden;
        margin: 0 !important;
        width: 100% !important;
        max-width: 100% !important;
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0 1rem;
        margin-bottom: 0;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    /* --- NAVIGATION TABS --- */
    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-radius: 10px 10px 0 0;
        border-top: 3px solid color-mix(in srgb, var(--pico-primary), transparent 90%) !important;
        background: linear-gradient(
            to bottom,
            color-mix(in srgb, var(--pico-primary), transparent 97%),
            transparent
        );
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- CONTENT AREA --- */
    .app-main-container .content {
        flex: 1;
        overflow-y: auto;
        min-height: 0;
        padding: 0 1rem;
    }

    /* --- SLIDE PANEL --- */
    .slide-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.25);
        z-index: 900;
    }

    .slide-panel {
        position: fixed;
        top: 0; right: 0; bottom: 0;
        width: min(32rem, 100vw);
        overflow-y: auto;
        padding: 1.5rem;
        background: var(--pico-background-color);
        box-shadow: var(--pico-card-box-shadow);
        z-index: 950;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet { href: PICO_CSS }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let setup = use_hook(|| {
        let prefs = UserPrefs::from_env();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        RestClient::new(&prefs.backend().api_url).map(|client| AppState::new(client, prefs))
    });

    match setup {
        Ok(app_state) => rsx! { LoadedApp { app_state } },
        Err(e) => rsx! {
            Container {
                p { "An error occurred: {e}" }
            }
        },
    }
}

/// This component holds the main app logic and only runs when the client is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let initial = use_hook(|| {
        let location = compat::current_location()
            .map(|href| DashboardLocation::parse(&href))
            .unwrap_or_default();
        let namespace = location
            .namespace()
            .map(str::to_string)
            .unwrap_or_else(|| app_state.prefs.backend().namespace.clone());
        let (screen, slide) = Screen::route(&location).unwrap_or_default();
        let location = DashboardLocation {
            path: screen.path(&namespace),
            slide,
            filters: location.filters,
        };
        (namespace, screen, location)
    });

    let (namespace, screen, location) = initial;
    let namespace = use_signal(|| namespace);
    let new_events = use_signal(NewEvents::new);
    let time_range = use_signal(|| app_state.prefs.time_range());
    let location = use_signal(|| location);
    let snackbar = use_signal(|| None);

    use_context_provider(|| AppStateMut {
        namespace,
        new_events,
        time_range,
        location,
        snackbar,
    });

    let active_screen = use_signal(|| screen);
    use_context_provider(|| active_screen);

    // keep the address bar in step with the view.
    use_effect(move || {
        compat::replace_location(&location.read().to_url());
    });

    use_event_watcher();

    use_window_title(namespace);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Exchange Explorer" }
                            }
                            li { NamespacePicker {} }
                        }
                        ul {
                            li { Tabs { active_screen } }
                            li { RefreshButton {} }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Timeline => rsx! {
                            TimelineScreen {}
                        },
                        Screen::Events => rsx! {
                            EventsScreen {}
                        },
                        Screen::Transactions => rsx! {
                            TransactionsScreen {}
                        },
                        Screen::Apis => rsx! {
                            ApisScreen {}
                        },
                        Screen::Balances => rsx! {
                            BalancesScreen {}
                        },
                        Screen::Approvals => rsx! {
                            ApprovalsScreen {}
                        },
                        Screen::Pools => rsx! {
                            PoolsScreen {}
                        },
                        Screen::PoolDetails(pool_id) => rsx! {
                            PoolDetailsScreen {
                                key: "{pool_id}",
                                pool_id,
                            }
                        },
                        Screen::Transfers => rsx! {
                            TransfersScreen {}
                        },
                    }
                }
            }
            Snackbar {}
        }
    }
}
