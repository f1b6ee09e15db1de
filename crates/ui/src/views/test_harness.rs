use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Analytics, CatalogService, RecordingAnalytics};
use storage::{CatalogProvider, Storage};

use crate::app::AppRoot;
use crate::context::{UiApp, build_app_context};
use crate::routes::Route;

#[derive(Clone)]
struct TestApp {
    catalog_service: Arc<CatalogService>,
    analytics: Analytics,
    start_route: Route,
}

impl UiApp for TestApp {
    fn catalog_service(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog_service)
    }

    fn analytics(&self) -> Analytics {
        self.analytics.clone()
    }

    fn start_route(&self) -> Route {
        self.start_route
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { AppRoot {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub analytics: RecordingAnalytics,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let the catalog load settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(start_route: Route) -> ViewHarness {
    setup_view_harness_with_provider(start_route, Arc::clone(&Storage::fixtures().catalog))
}

pub fn setup_view_harness_with_provider(
    start_route: Route,
    provider: Arc<dyn CatalogProvider>,
) -> ViewHarness {
    let recorder = RecordingAnalytics::new();
    let app = Arc::new(TestApp {
        catalog_service: Arc::new(CatalogService::new(provider)),
        analytics: Analytics::new(Arc::new(recorder.clone())),
        start_route,
    });

    ViewHarness {
        dom: VirtualDom::new_with_props(HarnessRoot, HarnessProps { app }),
        analytics: recorder,
    }
}
