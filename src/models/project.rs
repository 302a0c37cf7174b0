use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One portfolio work item, the sole persisted entity.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    pub images: Vec<String>,
    pub client: String,
    pub year: i32,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "text", rename_all = "kebab-case")]
pub enum Category {
    WebDesign,
    Branding,
    Illustration,
    Photography,
    UiUx,
    Motion,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::WebDesign,
        Category::Branding,
        Category::Illustration,
        Category::Photography,
        Category::UiUx,
        Category::Motion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::WebDesign => "web-design",
            Category::Branding => "branding",
            Category::Illustration => "illustration",
            Category::Photography => "photography",
            Category::UiUx => "ui-ux",
            Category::Motion => "motion",
        }
    }

    /// Human-readable form for page headings and filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            Category::WebDesign => "Web Design",
            Category::Branding => "Branding",
            Category::Illustration => "Illustration",
            Category::Photography => "Photography",
            Category::UiUx => "UI/UX",
            Category::Motion => "Motion",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully-populated command object produced by create validation.
/// Every optional input field has already been defaulted.
#[derive(Debug, Clone)]
pub struct ProjectDraft {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Category,
    pub images: Vec<String>,
    pub client: String,
    pub year: i32,
    pub tags: Vec<String>,
    pub featured: bool,
    pub published: bool,
}

/// Partial update: `None` means leave the field unchanged.
/// `id` and `created_at` are not representable here and can never be touched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<Category>,
    pub images: Option<Vec<String>>,
    pub client: Option<String>,
    pub year: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}
