#![forbid(unsafe_code)]

pub mod analytics;
pub mod app_services;
pub mod catalog_service;
pub mod error;

pub use learn_core::Clock;

pub use analytics::{
    Analytics, AnalyticsEvent, AnalyticsSink, EventParams, NoopAnalytics, ParamValue,
    RecordingAnalytics, TracingAnalytics, events,
};
pub use app_services::{AppServices, device_label};
pub use catalog_service::CatalogService;
pub use error::{AnalyticsError, CatalogServiceError};
