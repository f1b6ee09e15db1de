use std::sync::Arc;

use async_trait::async_trait;
use learn_core::model::{AchievementDraft, AchievementId, Catalog, CourseId};
use storage::{CatalogProvider, InMemoryCatalog, StorageError};

use super::test_harness::{setup_view_harness, setup_view_harness_with_provider};
use crate::routes::Route;
use crate::vm::test_support::{catalog_with, course};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_greeting_and_sections() {
    let mut harness = setup_view_harness(Route::Home);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Hi, Abel Huallullo Matos!"), "missing greeting in {html}");
    assert!(html.contains("My courses"), "missing section in {html}");
    assert!(html.contains("Popular courses"), "missing section in {html}");
    assert!(html.contains("Kotlin Avanzado"), "missing course in {html}");
    assert!(html.contains("2450"), "missing points in {html}");
    assert_eq!(harness.analytics.names(), vec!["screen_view"]);
}

#[tokio::test(flavor = "current_thread")]
async fn course_details_smoke_renders_outline() {
    let mut harness = setup_view_harness(Route::course_details(CourseId::new(2)));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Jetpack Compose"), "missing title in {html}");
    assert!(html.contains("Conceptos Avanzados"), "missing module in {html}");
    assert!(html.contains("12 lessons"), "missing lesson count in {html}");
    assert!(html.contains("Continue learning"), "missing cta in {html}");
    assert_eq!(harness.analytics.names(), vec!["course_details_viewed"]);
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_course_renders_first_course() {
    let mut harness = setup_view_harness(Route::course_details(CourseId::new(999)));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Kotlin Avanzado"), "missing fallback course in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_smoke_renders_badges_and_certificates() {
    let mut harness = setup_view_harness(Route::Progress);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Active courses"), "missing section in {html}");
    assert!(html.contains("Maestro Android"), "missing badge in {html}");
    assert!(html.contains("Completed: Dic 2024"), "missing certificate in {html}");
    assert!(html.contains("Verified"), "missing verified mark in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn achievements_smoke_renders_summary_and_hints() {
    let mut harness = setup_view_harness(Route::Achievements);
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("4 / 8"), "missing summary in {html}");
    assert!(html.contains("50% complete"), "missing percentage in {html}");
    assert!(html.contains("Próximamente"), "missing locked date in {html}");
    assert!(html.contains("Keep learning to unlock"), "missing hint in {html}");
}

struct FailingProvider;

#[async_trait]
impl CatalogProvider for FailingProvider {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        Err(StorageError::Io(std::io::Error::other("offline")))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failed_load_shows_retry() {
    let mut harness = setup_view_harness_with_provider(Route::Home, Arc::new(FailingProvider));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(harness.analytics.events().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn home_without_matching_courses_renders_empty_sections() {
    let catalog = catalog_with(vec![course(1, 0, false), course(2, 0, false)], Vec::new());
    let mut harness =
        setup_view_harness_with_provider(Route::Home, Arc::new(InMemoryCatalog::new(catalog)));
    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("You have not started any course yet."),
        "missing in-progress empty note in {html}"
    );
    assert!(
        html.contains("No popular courses right now."),
        "missing popular empty note in {html}"
    );
    assert!(!html.contains("Course 1"), "unexpected course card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finished_popular_course_renders_full_progress() {
    let catalog = catalog_with(vec![course(7, 100, true)], Vec::new());
    let mut harness =
        setup_view_harness_with_provider(Route::Home, Arc::new(InMemoryCatalog::new(catalog)));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Course 7"), "missing course card in {html}");
    assert!(html.contains("100%"), "missing full progress label in {html}");
    assert!(html.contains("width: 100%"), "missing full progress bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn achievement_description_renders_when_present() {
    let achievement = AchievementDraft {
        id: AchievementId::new(1),
        title: "Primera Clase".to_string(),
        icon: "🎯".to_string(),
        unlocked: true,
        date: "15 Enero 2025".to_string(),
        description: "Completa tu primera lección".to_string(),
    }
    .validate()
    .unwrap();
    let catalog = catalog_with(Vec::new(), vec![achievement]);
    let mut harness = setup_view_harness_with_provider(
        Route::Achievements,
        Arc::new(InMemoryCatalog::new(catalog)),
    );
    harness.settle().await;
    let html = harness.render();

    assert!(
        html.contains("Completa tu primera lección"),
        "missing description in {html}"
    );
    assert!(html.contains("1 / 1"), "missing summary in {html}");
}
