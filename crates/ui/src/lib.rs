pub mod app;
pub mod context;
pub mod routes;
pub mod shell;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use routes::{Navigator, Route, RouteParseError};
pub use shell::{AppShell, Intent, ScreenVm};
