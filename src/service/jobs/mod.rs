//! Job catalog service
//!
//! In-memory catalog of postings with wilaya filtering and text search.
//! There is no persistence layer; the catalog is seeded with demo data at
//! startup and shared read-only across handlers.

use std::sync::Arc;

use crate::entities::{Job, JobCategory, JobType};

/// Provinces offered as a geographic filter on postings.
pub const WILAYAS: &[&str] = &[
    "16-Alger",
    "31-Oran",
    "25-Constantine",
    "09-Blida",
    "19-Sétif",
    "23-Annaba",
    "15-Tizi Ouzou",
    "06-Béjaïa",
    "05-Batna",
    "47-Ghardaïa",
];

#[derive(Clone)]
pub struct JobCatalog {
    jobs: Arc<Vec<Job>>,
    categories: Arc<Vec<JobCategory>>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<Job>, categories: Vec<JobCategory>) -> Self {
        Self { jobs: Arc::new(jobs), categories: Arc::new(categories) }
    }

    /// Catalog seeded with the demo postings shown on the home tab.
    pub fn with_seed_data() -> Self {
        Self::new(seed_jobs(), seed_categories())
    }

    pub fn all(&self) -> &[Job] {
        &self.jobs
    }

    pub fn categories(&self) -> &[JobCategory] {
        &self.categories
    }

    /// Case-insensitive substring search on title and description, with an
    /// optional exact wilaya filter. An empty query matches everything.
    pub fn search(&self, query: &str, wilaya: Option<&str>) -> Vec<Job> {
        let query = query.to_lowercase();
        self.jobs
            .iter()
            .filter(|job| {
                let matches_query = job.title.to_lowercase().contains(&query)
                    || job.description.to_lowercase().contains(&query);
                let matches_wilaya = wilaya.map_or(true, |w| job.wilaya == w);
                matches_query && matches_wilaya
            })
            .cloned()
            .collect()
    }

    pub fn featured(&self) -> Vec<Job> {
        self.jobs.iter().filter(|job| job.is_featured).cloned().collect()
    }
}

fn seed_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "j1".to_string(),
            title: "كهربائي معماري".to_string(),
            employer_id: "e1".to_string(),
            employer_name: "شركة البناء الحديث".to_string(),
            employer_avatar: "https://api.dicebear.com/7.x/shapes/svg?seed=Batimoderne".to_string(),
            wilaya: "16-Alger".to_string(),
            salary: Some("45000 DA".to_string()),
            job_type: JobType::FullTime,
            description: "تركيب وصيانة التمديدات الكهربائية في الورشات السكنية. خبرة سنتين مطلوبة."
                .to_string(),
            category: "construction".to_string(),
            posted_at: "2026-08-20".to_string(),
            is_featured: true,
            requires_experience: true,
        },
        Job {
            id: "j2".to_string(),
            title: "Développeur Web".to_string(),
            employer_id: "e2".to_string(),
            employer_name: "DZ Digital".to_string(),
            employer_avatar: "https://api.dicebear.com/7.x/shapes/svg?seed=DZDigital".to_string(),
            wilaya: "31-Oran".to_string(),
            salary: Some("90000 DA".to_string()),
            job_type: JobType::FullTime,
            description: "Développement d'applications web pour des clients algériens. React et TypeScript souhaités.".to_string(),
            category: "it".to_string(),
            posted_at: "2026-08-22".to_string(),
            is_featured: true,
            requires_experience: true,
        },
        Job {
            id: "j3".to_string(),
            title: "نادل في مقهى".to_string(),
            employer_id: "e3".to_string(),
            employer_name: "قهوة الأصالة".to_string(),
            employer_avatar: "https://api.dicebear.com/7.x/shapes/svg?seed=Assala".to_string(),
            wilaya: "16-Alger".to_string(),
            salary: Some("2000 DA / يوم".to_string()),
            job_type: JobType::Daily,
            description: "عمل يومي في مقهى وسط العاصمة، لا تشترط الخبرة.".to_string(),
            category: "hospitality".to_string(),
            posted_at: "2026-08-24".to_string(),
            is_featured: false,
            requires_experience: false,
        },
        Job {
            id: "j4".to_string(),
            title: "Graphiste Freelance".to_string(),
            employer_id: "e4".to_string(),
            employer_name: "Sahara Prints".to_string(),
            employer_avatar: "https://api.dicebear.com/7.x/shapes/svg?seed=Sahara".to_string(),
            wilaya: "25-Constantine".to_string(),
            salary: None,
            job_type: JobType::Freelance,
            description: "Création d'identités visuelles et de supports publicitaires. Mission à distance.".to_string(),
            category: "design".to_string(),
            posted_at: "2026-08-18".to_string(),
            is_featured: false,
            requires_experience: true,
        },
        Job {
            id: "j5".to_string(),
            title: "بنّاء".to_string(),
            employer_id: "e1".to_string(),
            employer_name: "شركة البناء الحديث".to_string(),
            employer_avatar: "https://api.dicebear.com/7.x/shapes/svg?seed=Batimoderne".to_string(),
            wilaya: "09-Blida".to_string(),
            salary: Some("2500 DA / يوم".to_string()),
            job_type: JobType::Daily,
            description: "أشغال بناء في ورشة سكنية بالبليدة، الدفع أسبوعي.".to_string(),
            category: "construction".to_string(),
            posted_at: "2026-08-25".to_string(),
            is_featured: false,
            requires_experience: false,
        },
        Job {
            id: "j6".to_string(),
            title: "Stagiaire Comptable".to_string(),
            employer_id: "e5".to_string(),
            employer_name: "Cabinet Benali".to_string(),
            employer_avatar: "https://api.dicebear.com/7.x/shapes/svg?seed=Benali".to_string(),
            wilaya: "31-Oran".to_string(),
            salary: None,
            job_type: JobType::Internship,
            description: "Stage de six mois en comptabilité, possibilité d'embauche.".to_string(),
            category: "finance".to_string(),
            posted_at: "2026-08-15".to_string(),
            is_featured: false,
            requires_experience: false,
        },
    ]
}

fn seed_categories() -> Vec<JobCategory> {
    vec![
        JobCategory {
            id: "construction".to_string(),
            icon: "🏗️".to_string(),
            label_ar: "البناء والأشغال".to_string(),
            label_fr: "Construction".to_string(),
        },
        JobCategory {
            id: "it".to_string(),
            icon: "💻".to_string(),
            label_ar: "الإعلام الآلي".to_string(),
            label_fr: "Informatique".to_string(),
        },
        JobCategory {
            id: "hospitality".to_string(),
            icon: "☕".to_string(),
            label_ar: "المطاعم والمقاهي".to_string(),
            label_fr: "Restauration".to_string(),
        },
        JobCategory {
            id: "design".to_string(),
            icon: "🎨".to_string(),
            label_ar: "التصميم".to_string(),
            label_fr: "Design".to_string(),
        },
        JobCategory {
            id: "finance".to_string(),
            icon: "📊".to_string(),
            label_ar: "المالية والمحاسبة".to_string(),
            label_fr: "Finance".to_string(),
        },
        JobCategory {
            id: "transport".to_string(),
            icon: "🚚".to_string(),
            label_ar: "النقل والتوصيل".to_string(),
            label_fr: "Transport".to_string(),
        },
    ]
}
