use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    Analytics, AppServices, CatalogService, Clock, TracingAnalytics, device_label,
};
use storage::Storage;
use ui::{App, Route, UiApp, build_app_context};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AnalyticsMode {
    /// Log events through `tracing` under the `analytics` target.
    Tracing,
    Off,
}

/// Learning-course desktop app.
#[derive(Debug, Parser)]
#[command(name = "learn", version, about)]
struct Args {
    /// JSON catalog to load instead of the built-in sample data.
    #[arg(long, env = "LEARN_FIXTURES", value_parser = existing_file)]
    fixtures: Option<PathBuf>,

    /// Screen to open on, e.g. `progress` or `course_details/2`.
    #[arg(long, env = "LEARN_START_ROUTE", default_value = "home")]
    start: Route,

    #[arg(long, env = "LEARN_ANALYTICS", value_enum, default_value_t = AnalyticsMode::Tracing)]
    analytics: AnalyticsMode,
}

fn existing_file(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("no catalog file at {raw}"))
    }
}

impl Args {
    fn storage(&self) -> Storage {
        match &self.fixtures {
            Some(path) => Storage::json_file(path.clone()),
            None => Storage::fixtures(),
        }
    }

    fn analytics(&self) -> Analytics {
        match self.analytics {
            AnalyticsMode::Tracing => Analytics::new(Arc::new(TracingAnalytics)),
            AnalyticsMode::Off => Analytics::disabled(),
        }
    }
}

struct DesktopApp {
    services: AppServices,
    start_route: Route,
}

impl UiApp for DesktopApp {
    fn catalog_service(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn analytics(&self) -> Analytics {
        self.services.analytics()
    }

    fn start_route(&self) -> Route {
        self.start_route
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) {
    let storage = args.storage();
    let services = AppServices::new(Clock::system(), &storage, args.analytics());

    tracing::info!(
        start = %args.start,
        source = ?args.fixtures,
        analytics = ?args.analytics,
        "launching"
    );
    services.announce_launch(&device_label());

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        start_route: args.start,
    });
    let context = build_app_context(&app);

    // Some dev setups default tao windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Learn")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn main() {
    init_tracing();
    let args = Args::parse();
    run(&args);
}
