//! Event names, parameter keys and constructors for everything the app emits.

use chrono::{DateTime, Utc};
use learn_core::model::{Achievement, Course};

use crate::analytics::{AnalyticsEvent, EventParams};

pub const APP_OPENED: &str = "app_opened";
pub const SCREEN_VIEW: &str = "screen_view";
pub const COURSE_SELECTED: &str = "course_selected";
pub const POPULAR_COURSE_CLICKED: &str = "popular_course_clicked";
pub const COURSE_DETAILS_VIEWED: &str = "course_details_viewed";
pub const CONTINUE_LEARNING_CLICKED: &str = "continue_learning_clicked";
pub const ACHIEVEMENT_CLICKED: &str = "achievement_clicked";

pub const HOME_SCREEN: &str = "home_screen";
pub const PROGRESS_SCREEN: &str = "progress_screen";
pub const ACHIEVEMENTS_SCREEN: &str = "achievements_screen";

#[must_use]
pub fn app_opened(at: DateTime<Utc>, device: &str) -> AnalyticsEvent {
    AnalyticsEvent::new(
        APP_OPENED,
        EventParams::new()
            .with("timestamp", at.timestamp_millis())
            .with("device", device),
    )
}

#[must_use]
pub fn screen_view(screen_name: &str) -> AnalyticsEvent {
    AnalyticsEvent::new(
        SCREEN_VIEW,
        EventParams::new().with("screen_name", screen_name),
    )
}

#[must_use]
pub fn course_selected(course: &Course) -> AnalyticsEvent {
    AnalyticsEvent::new(COURSE_SELECTED, course_params(course))
}

#[must_use]
pub fn popular_course_clicked(course: &Course) -> AnalyticsEvent {
    AnalyticsEvent::new(POPULAR_COURSE_CLICKED, course_params(course))
}

#[must_use]
pub fn course_details_viewed(course: &Course) -> AnalyticsEvent {
    AnalyticsEvent::new(COURSE_DETAILS_VIEWED, course_params(course))
}

#[must_use]
pub fn continue_learning_clicked(course: &Course) -> AnalyticsEvent {
    AnalyticsEvent::new(
        CONTINUE_LEARNING_CLICKED,
        EventParams::new().with("course_id", course.id().value()),
    )
}

#[must_use]
pub fn achievement_clicked(achievement: &Achievement) -> AnalyticsEvent {
    AnalyticsEvent::new(
        ACHIEVEMENT_CLICKED,
        EventParams::new()
            .with("achievement_id", achievement.id().value())
            .with("achievement_name", achievement.title()),
    )
}

fn course_params(course: &Course) -> EventParams {
    EventParams::new()
        .with("course_id", course.id().value())
        .with("course_name", course.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::ParamValue;
    use learn_core::model::{AchievementId, CourseDraft, CourseId};
    use learn_core::time::fixed_now;

    fn compose_course() -> Course {
        CourseDraft {
            id: CourseId::new(2),
            title: "Jetpack Compose".to_string(),
            category: "Android".to_string(),
            progress: 40,
            duration: "10 horas".to_string(),
            rating: 4.9,
            students: 12_350,
            is_popular: true,
            description: String::new(),
            modules: 6,
            lessons: 38,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn course_events_carry_id_and_name() {
        let event = course_selected(&compose_course());
        assert_eq!(event.name(), "course_selected");
        assert_eq!(event.param("course_id"), Some(&ParamValue::Int(2)));
        assert_eq!(
            event.param("course_name"),
            Some(&ParamValue::Str("Jetpack Compose".to_string()))
        );
    }

    #[test]
    fn continue_learning_only_carries_id() {
        let event = continue_learning_clicked(&compose_course());
        assert_eq!(event.params().keys().collect::<Vec<_>>(), vec!["course_id"]);
    }

    #[test]
    fn achievement_event_keys() {
        let achievement = Achievement::unlocked(
            AchievementId::new(3),
            "Maratón de Código",
            "💻",
            "5 Febrero 2025",
        )
        .unwrap();
        let event = achievement_clicked(&achievement);
        assert_eq!(event.name(), "achievement_clicked");
        assert_eq!(
            event.params().keys().collect::<Vec<_>>(),
            vec!["achievement_id", "achievement_name"]
        );
    }

    #[test]
    fn app_opened_reports_epoch_millis() {
        let event = app_opened(fixed_now(), "linux-x86_64");
        assert_eq!(
            event.param("timestamp"),
            Some(&ParamValue::Int(1_700_000_000_000))
        );
        assert_eq!(
            event.param("device"),
            Some(&ParamValue::Str("linux-x86_64".to_string()))
        );
    }

    #[test]
    fn screen_view_names_the_screen() {
        let event = screen_view(PROGRESS_SCREEN);
        assert_eq!(
            event.param("screen_name"),
            Some(&ParamValue::Str("progress_screen".to_string()))
        );
    }
}
