use dioxus::prelude::*;

use crate::shell::Intent;
use crate::views::components::{BackHeader, EmptyNote, ProgressBar, StatTile};
use crate::vm::{CourseDetailsVm, ModuleRowVm};

#[component]
pub fn CourseDetailsView(vm: Option<CourseDetailsVm>, on_intent: EventHandler<Intent>) -> Element {
    let on_back = move |()| on_intent.call(Intent::Back);

    let Some(vm) = vm else {
        return rsx! {
            div { class: "page course-details",
                BackHeader { title: "Course".to_string(), on_back }
                EmptyNote { text: "There are no courses to show." }
            }
        };
    };

    rsx! {
        div { class: "page course-details",
            BackHeader { title: vm.course.title.clone(), on_back }

            section { class: "course-hero",
                span { class: "course-category", "{vm.course.category}" }
                h1 { "{vm.course.title}" }
                div { class: "course-meta",
                    span { "★ {vm.course.rating_label}" }
                    span { "{vm.course.students_label}" }
                    span { "{vm.course.duration}" }
                }
            }

            section { class: "course-progress-card",
                div { class: "progress-heading",
                    span { "Your progress" }
                    span { "{vm.course.progress_label}" }
                }
                ProgressBar { percent: vm.course.progress }
            }

            section { class: "stats-row",
                StatTile { label: "Modules", value: vm.declared_modules.to_string() }
                StatTile { label: "Lessons", value: vm.lessons.to_string() }
                StatTile { label: "Duration", value: vm.course.duration.clone() }
            }

            section { class: "course-about",
                h2 { "About this course" }
                p { "{vm.description}" }
            }

            section { class: "course-outline",
                h2 { "Course content" }
                if vm.outline.is_empty() {
                    EmptyNote { text: "The course outline is not available yet." }
                } else {
                    ol {
                        for module in vm.outline {
                            ModuleRow { key: "{module.number}", module }
                        }
                    }
                }
            }

            button {
                class: "primary-button",
                r#type: "button",
                onclick: move |_| on_intent.call(Intent::ContinueLearning),
                "Continue learning"
            }
        }
    }
}

#[component]
fn ModuleRow(module: ModuleRowVm) -> Element {
    let (class, marker) = if module.completed {
        ("module done", "✓")
    } else if module.current {
        ("module current", "▶")
    } else {
        ("module", "")
    };

    rsx! {
        li { class,
            span { class: "module-number", "{module.number}" }
            div { class: "module-body",
                span { class: "module-title", "{module.title}" }
                span { class: "module-lessons", "{module.lessons_label}" }
            }
            span { class: "module-marker", "{marker}" }
        }
    }
}
