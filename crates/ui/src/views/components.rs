//! Pieces shared by more than one screen.

use dioxus::prelude::*;
use learn_core::model::CourseId;

use crate::vm::{AchievementVm, CourseCardVm};

#[component]
pub fn BackHeader(title: String, on_back: EventHandler<()>) -> Element {
    rsx! {
        header { class: "screen-header",
            button {
                class: "back-button",
                r#type: "button",
                aria_label: "Back",
                onclick: move |_| on_back.call(()),
                "←"
            }
            h2 { "{title}" }
        }
    }
}

#[component]
pub fn ProgressBar(percent: u8) -> Element {
    let width = percent.min(100);
    rsx! {
        div { class: "progress-track",
            div { class: "progress-fill", style: "width: {width}%" }
        }
    }
}

#[component]
pub fn StatTile(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-tile",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[component]
pub fn EmptyNote(text: &'static str) -> Element {
    rsx! {
        p { class: "empty-note", "{text}" }
    }
}

#[component]
pub fn CourseCard(card: CourseCardVm, on_select: EventHandler<CourseId>) -> Element {
    let course_id = card.id;
    rsx! {
        button {
            class: "course-card",
            r#type: "button",
            onclick: move |_| on_select.call(course_id),
            div { class: "course-card-head",
                span { class: "course-category", "{card.category}" }
                if card.is_popular {
                    span { class: "badge-popular", "Popular" }
                }
            }
            h3 { "{card.title}" }
            div { class: "course-meta",
                span { "★ {card.rating_label}" }
                span { "{card.students_label}" }
                span { "{card.duration}" }
            }
            ProgressBar { percent: card.progress }
            span { class: "course-progress", "{card.progress_label}" }
        }
    }
}

#[component]
pub fn AchievementTile(achievement: AchievementVm, on_select: EventHandler<()>) -> Element {
    let class = if achievement.unlocked {
        "achievement unlocked"
    } else {
        "achievement locked"
    };
    rsx! {
        button {
            class,
            r#type: "button",
            onclick: move |_| on_select.call(()),
            span { class: "achievement-icon", "{achievement.icon}" }
            span { class: "achievement-title", "{achievement.title}" }
            span { class: "achievement-date", "{achievement.date}" }
            if !achievement.description.is_empty() {
                span { class: "achievement-description", "{achievement.description}" }
            }
            if let Some(hint) = achievement.hint {
                span { class: "achievement-hint", "{hint}" }
            }
        }
    }
}
