use std::sync::Arc;

use dioxus::prelude::*;
use learn_core::model::Catalog;

use crate::context::AppContext;
use crate::shell::{AppShell, Intent, ScreenVm};
use crate::views::{
    AchievementsView, CourseDetailsView, HomeView, ProgressView, ViewError, ViewState,
    view_state_from_resource,
};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Learn" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                AppRoot {}
            }
        }
    }
}

/// Loads the catalog, then hands it to the navigation shell.
#[component]
pub(crate) fn AppRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog_service = ctx.catalog_service();

    let mut resource = use_resource(move || {
        let catalog_service = Arc::clone(&catalog_service);
        async move {
            catalog_service
                .load()
                .await
                .map_err(|_| ViewError::CatalogUnavailable)
        }
    });

    match view_state_from_resource(&resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "page loading", p { "Loading..." } }
        },
        ViewState::Ready(catalog) => rsx! {
            Shell { catalog }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page load-error",
                p { "{err.message()}" }
                button {
                    class: "primary-button",
                    r#type: "button",
                    onclick: move |_| resource.restart(),
                    "Retry"
                }
            }
        },
    }
}

#[component]
fn Shell(catalog: Arc<Catalog>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut shell =
        use_signal(move || AppShell::start(catalog, ctx.analytics(), ctx.start_route()));
    let on_intent = move |intent: Intent| shell.write().dispatch(intent);

    let screen = shell.read().screen();
    match screen {
        ScreenVm::Home(vm) => rsx! {
            HomeView { vm, on_intent }
        },
        ScreenVm::CourseDetails(vm) => rsx! {
            CourseDetailsView { vm, on_intent }
        },
        ScreenVm::Progress(vm) => rsx! {
            ProgressView { vm, on_intent }
        },
        ScreenVm::Achievements(vm) => rsx! {
            AchievementsView { vm, on_intent }
        },
    }
}
