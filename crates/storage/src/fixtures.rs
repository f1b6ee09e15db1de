//! Built-in sample catalog: one learner, four courses, eight achievements,
//! three certificates and the shared four-module outline.

use async_trait::async_trait;
use learn_core::error::Error;
use learn_core::model::{
    Achievement, AchievementId, Catalog, CatalogDraft, Certificate, CertificateId, Course,
    CourseDraft, CourseId, CourseModule, User, UserDraft,
};

use crate::repository::{CatalogProvider, StorageError};

/// Provider for the hardcoded sample data.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCatalog;

impl FixtureCatalog {
    /// Assemble the sample catalog.
    ///
    /// # Errors
    ///
    /// Returns `learn_core::error::Error` if a sample record violates a model invariant.
    pub fn build() -> Result<Catalog, Error> {
        let catalog = CatalogDraft {
            user: sample_user()?,
            courses: sample_courses()?,
            achievements: sample_achievements()?,
            certificates: sample_certificates(),
            module_outline: sample_module_outline(),
        }
        .validate()?;
        Ok(catalog)
    }
}

#[async_trait]
impl CatalogProvider for FixtureCatalog {
    async fn load_catalog(&self) -> Result<Catalog, StorageError> {
        Ok(Self::build()?)
    }
}

fn sample_user() -> Result<User, Error> {
    let user = UserDraft {
        name: "Abel Huallullo Matos  ".to_string(),
        photo_url: String::new(),
        courses_in_progress: 3,
        completed_courses: 12,
        total_points: 2450,
    }
    .validate()?;
    Ok(user)
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: u64,
    title: &str,
    category: &str,
    progress: u8,
    duration: &str,
    rating: f32,
    students: u32,
    is_popular: bool,
    description: &str,
    modules: u32,
    lessons: u32,
) -> Result<Course, Error> {
    let course = CourseDraft {
        id: CourseId::new(id),
        title: title.to_owned(),
        category: category.to_owned(),
        progress,
        duration: duration.to_owned(),
        rating,
        students,
        is_popular,
        description: description.to_owned(),
        modules,
        lessons,
    }
    .validate()?;
    Ok(course)
}

#[rustfmt::skip]
fn sample_courses() -> Result<Vec<Course>, Error> {
    Ok(vec![
        course(1, "Kotlin Avanzado", "Programación", 65, "12 horas", 4.8, 15_420, true,
            "Domina Kotlin con patrones avanzados, corrutinas y programación funcional.", 8, 45)?,
        course(2, "Jetpack Compose", "Android", 40, "10 horas", 4.9, 12_350, true,
            "Crea interfaces modernas para Android con el toolkit declarativo de Google.", 6, 38)?,
        course(3, "Firebase & Cloud", "Backend", 20, "15 horas", 4.7, 18_900, true,
            "Implementa servicios en la nube con Firebase y Google Cloud Platform.", 10, 52)?,
        course(4, "Clean Architecture", "Arquitectura", 0, "8 horas", 4.6, 9_800, false,
            "Aprende a estructurar aplicaciones escalables y mantenibles.", 5, 30)?,
    ])
}

fn sample_achievements() -> Result<Vec<Achievement>, Error> {
    let unlocked = |id: u64, title: &str, icon: &str, date: &str| {
        Achievement::unlocked(AchievementId::new(id), title, icon, date)
    };
    let locked =
        |id: u64, title: &str, icon: &str| Achievement::locked(AchievementId::new(id), title, icon);

    Ok(vec![
        unlocked(1, "Primera Clase", "🎯", "15 Enero 2025")?,
        unlocked(2, "Estudiante Dedicado", "📚", "20 Enero 2025")?,
        unlocked(3, "Maratón de Código", "💻", "5 Febrero 2025")?,
        locked(4, "Maestro Android", "🤖")?,
        locked(5, "Experto en Kotlin", "🚀")?,
        unlocked(6, "Completado 10 Cursos", "🎓", "10 Febrero 2025")?,
        locked(7, "Racha de 7 Días", "🔥")?,
        locked(8, "Mentor Comunitario", "🌟")?,
    ])
}

fn sample_certificates() -> Vec<Certificate> {
    vec![
        Certificate::new(CertificateId::new(1), "Kotlin Básico", "Dic 2024", true),
        Certificate::new(CertificateId::new(2), "Android Fundamentals", "Oct 2024", true),
        Certificate::new(CertificateId::new(3), "Java avanzado", "Ene 2025", true),
    ]
}

/// The outline has four entries regardless of each course's declared module count.
fn sample_module_outline() -> Vec<CourseModule> {
    vec![
        CourseModule::new(1, "Introducción", 5, true),
        CourseModule::new(2, "Fundamentos", 8, true),
        CourseModule::new(3, "Conceptos Avanzados", 10, false).current(),
        CourseModule::new(4, "Proyecto Final", 12, false),
    ]
}
