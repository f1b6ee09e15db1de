use dioxus::prelude::*;

use crate::shell::Intent;
use crate::views::components::{BackHeader, CourseCard, EmptyNote, StatTile};
use crate::vm::{AchievementVm, CertificateVm, ProgressVm};

#[component]
pub fn ProgressView(vm: ProgressVm, on_intent: EventHandler<Intent>) -> Element {
    let rows = vm.badge_rows();

    rsx! {
        div { class: "page progress",
            BackHeader {
                title: "My progress".to_string(),
                on_back: move |()| on_intent.call(Intent::Back),
            }

            section { class: "stats-row",
                StatTile { label: "Points", value: vm.total_points.to_string() }
                StatTile { label: "Completed", value: vm.completed_courses.to_string() }
                StatTile { label: "In progress", value: vm.courses_in_progress.to_string() }
            }

            section { class: "course-section",
                h2 { "Active courses" }
                if vm.active.is_empty() {
                    EmptyNote { text: "No active courses." }
                } else {
                    div { class: "course-list",
                        for card in vm.active {
                            CourseCard {
                                key: "{card.id}",
                                card,
                                on_select: move |id| on_intent.call(Intent::OpenCourse(id)),
                            }
                        }
                    }
                }
            }

            section { class: "badges",
                h2 { "Badges" }
                if rows.is_empty() {
                    EmptyNote { text: "No badges yet." }
                } else {
                    for (index, row) in rows.into_iter().enumerate() {
                        div { key: "{index}", class: "badge-row",
                            for badge in row {
                                Badge { key: "{badge.id}", badge }
                            }
                        }
                    }
                }
            }

            section { class: "certificates",
                h2 { "Certificates" }
                if vm.certificates.is_empty() {
                    EmptyNote { text: "No certificates yet." }
                } else {
                    for certificate in vm.certificates {
                        CertificateRow { key: "{certificate.id}", certificate }
                    }
                }
            }
        }
    }
}

#[component]
fn Badge(badge: AchievementVm) -> Element {
    let class = if badge.unlocked { "badge" } else { "badge locked" };
    rsx! {
        div { class,
            span { class: "badge-icon", "{badge.icon}" }
            span { class: "badge-title", "{badge.title}" }
        }
    }
}

#[component]
fn CertificateRow(certificate: CertificateVm) -> Element {
    rsx! {
        div { class: "certificate",
            span { class: "certificate-icon", "📜" }
            div { class: "certificate-body",
                span { class: "certificate-course", "{certificate.course}" }
                span { class: "certificate-date", "{certificate.completed_label}" }
            }
            if certificate.verified {
                span { class: "certificate-verified", "Verified" }
            }
        }
    }
}
