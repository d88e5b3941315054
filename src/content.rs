use rust_embed::Embed;
use serde::{
    de::{DeserializeOwned, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::{collections::HashSet, fmt, sync::LazyLock};
use thiserror::Error;

use crate::config::DEFAULT_CONSULTATION_ID;

pub static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

pub const PROFILE_DOC: &str = "profile.json";
pub const EXPERIENCE_DOC: &str = "experience.json";
pub const PROJECTS_DOC: &str = "projects.json";
pub const SKILLS_DOC: &str = "skills.json";
pub const BOOKING_DOC: &str = "booking-options.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content document {document} is missing")]
    Missing { document: &'static str },
    #[error("content document {document} is malformed: {reason}")]
    Malformed {
        document: &'static str,
        reason: String,
    },
    #[error("content document {document} has an empty {field}")]
    EmptyField {
        document: &'static str,
        field: String,
    },
    #[error("content document {document} repeats id {id:?}")]
    DuplicateId { document: &'static str, id: String },
    #[error("free plan requires a bookable option with id {id:?} in booking-options.json")]
    MissingDefaultOption { id: String },
}

/// The loaded, validated site content. Read-only for the life of the page.
pub fn site_content() -> Result<&'static SiteContent, &'static ContentError> {
    SITE_CONTENT.as_ref()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
    #[serde(default)]
    pub career_start_year: Option<i32>,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Whole years since the career start, counted against `current_year`.
    pub fn years_of_experience(&self, current_year: i32) -> Option<i32> {
        self.career_start_year
            .map(|start| (current_year - start).max(0))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub role: String,
    pub company: String,
    pub duration: String,
    pub location: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ExperienceDoc {
    experiences: Vec<ExperienceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: String,
    #[serde(default)]
    pub metrics: Option<Metrics>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectsDoc {
    projects: Vec<Project>,
}

/// Project metrics in document order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Metrics(pub Vec<Metric>);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    pub key: String,
    pub value: MetricValue,
}

impl Metric {
    pub fn kind(&self) -> MetricKind {
        MetricKind::from_key(&self.key)
    }

    pub fn label(&self) -> String {
        humanize_key(&self.key)
    }
}

impl Metrics {
    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Metrics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetricsVisitor;

        impl<'de> Visitor<'de> for MetricsVisitor {
            type Value = Metrics;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of metric names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Metrics, A::Error> {
                let mut metrics = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, MetricValue>()? {
                    metrics.push(Metric { key, value });
                }
                Ok(Metrics(metrics))
            }
        }

        deserializer.deserialize_map(MetricsVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{n}"),
            MetricValue::Text(s) => f.write_str(s),
            MetricValue::Other(v) => write!(f, "{v}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Code,
    People,
    Other,
}

impl MetricKind {
    pub fn from_key(key: &str) -> Self {
        match key {
            "linesOfCode" | "files" => MetricKind::Code,
            "users" | "tenants" => MetricKind::People,
            _ => MetricKind::Other,
        }
    }
}

/// "linesOfCode" -> "lines Of Code"
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub years: MetricValue,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
    Other(String),
}

impl From<String> for SkillLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "expert" => SkillLevel::Expert,
            "advanced" => SkillLevel::Advanced,
            "intermediate" => SkillLevel::Intermediate,
            _ => SkillLevel::Other(value),
        }
    }
}

impl From<SkillLevel> for String {
    fn from(value: SkillLevel) -> Self {
        value.label().to_string()
    }
}

impl SkillLevel {
    pub const MAX_STARS: usize = 5;

    pub fn stars(&self) -> usize {
        match self {
            SkillLevel::Expert => 5,
            SkillLevel::Advanced => 4,
            SkillLevel::Intermediate => 3,
            SkillLevel::Other(_) => 2,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SkillLevel::Expert => "expert",
            SkillLevel::Advanced => "advanced",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub target: String,
    pub status: String,
}

impl Certification {
    pub fn is_in_progress(&self) -> bool {
        self.status == "In Progress"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum PlanMode {
    Free,
    Paid,
}

impl From<String> for PlanMode {
    fn from(value: String) -> Self {
        if value == "free" {
            PlanMode::Free
        } else {
            PlanMode::Paid
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum BookingIcon {
    MessageCircle,
    Search,
    Code2,
    Briefcase,
    Brain,
    Building2,
    Other,
}

impl From<String> for BookingIcon {
    fn from(value: String) -> Self {
        match value.as_str() {
            "MessageCircle" => BookingIcon::MessageCircle,
            "Search" => BookingIcon::Search,
            "Code2" => BookingIcon::Code2,
            "Briefcase" => BookingIcon::Briefcase,
            "Brain" => BookingIcon::Brain,
            "Building2" => BookingIcon::Building2,
            _ => BookingIcon::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingOption {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub icon: BookingIcon,
    #[serde(default)]
    pub calendly_url: Option<String>,
}

impl BookingOption {
    /// Only options carrying a scheduling URL can be booked.
    pub fn booking_url(&self) -> Option<&str> {
        self.calendly_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn is_offerable(&self) -> bool {
        self.booking_url().is_some()
    }
}

fn default_consultation_id() -> String {
    DEFAULT_CONSULTATION_ID.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingCatalog {
    #[serde(rename = "calendlyPlan")]
    pub plan: PlanMode,
    #[serde(default = "default_consultation_id")]
    pub general_consultation_id: String,
    pub booking_options: Vec<BookingOption>,
}

impl BookingCatalog {
    pub fn is_free_plan(&self) -> bool {
        self.plan == PlanMode::Free
    }

    pub fn available_options(&self) -> Vec<BookingOption> {
        self.booking_options
            .iter()
            .filter(|o| o.is_offerable())
            .cloned()
            .collect()
    }

    /// The option free-plan visitors are routed to.
    pub fn general_consultation(&self) -> Option<&BookingOption> {
        self.booking_options
            .iter()
            .find(|o| o.id == self.general_consultation_id && o.is_offerable())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub booking: BookingCatalog,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_source(|name| ContentAssets::get(name).map(|f| f.data.into_owned()))
    }

    pub fn from_source<F>(mut read: F) -> Result<Self, ContentError>
    where
        F: FnMut(&str) -> Option<Vec<u8>>,
    {
        let profile: Profile = parse_doc(&mut read, PROFILE_DOC)?;
        let experience = parse_doc::<ExperienceDoc, _>(&mut read, EXPERIENCE_DOC)?.experiences;
        let projects = parse_doc::<ProjectsDoc, _>(&mut read, PROJECTS_DOC)?.projects;
        let skills: Skills = parse_doc(&mut read, SKILLS_DOC)?;
        let booking: BookingCatalog = parse_doc(&mut read, BOOKING_DOC)?;

        let content = Self {
            profile,
            experience,
            projects,
            skills,
            booking,
        };
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        require(PROFILE_DOC, "name", &self.profile.name)?;
        require(PROFILE_DOC, "email", &self.profile.email)?;
        unique_ids(EXPERIENCE_DOC, self.experience.iter().map(|e| e.id.as_str()))?;
        unique_ids(PROJECTS_DOC, self.projects.iter().map(|p| p.id.as_str()))?;
        for project in &self.projects {
            require(PROJECTS_DOC, "category", &project.category)?;
        }
        unique_ids(
            SKILLS_DOC,
            self.skills.categories.iter().map(|c| c.id.as_str()),
        )?;
        unique_ids(
            BOOKING_DOC,
            self.booking.booking_options.iter().map(|o| o.id.as_str()),
        )?;
        if self.booking.is_free_plan() && self.booking.general_consultation().is_none() {
            return Err(ContentError::MissingDefaultOption {
                id: self.booking.general_consultation_id.clone(),
            });
        }
        Ok(())
    }
}

fn parse_doc<T, F>(read: &mut F, document: &'static str) -> Result<T, ContentError>
where
    T: DeserializeOwned,
    F: FnMut(&str) -> Option<Vec<u8>>,
{
    let bytes = read(document).ok_or(ContentError::Missing { document })?;
    serde_json::from_slice(&bytes).map_err(|e| ContentError::Malformed {
        document,
        reason: e.to_string(),
    })
}

fn require(document: &'static str, field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField {
            document,
            field: field.to_string(),
        });
    }
    Ok(())
}

fn unique_ids<'a>(
    document: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        require(document, "id", id)?;
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                document,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    pub(crate) const PROFILE: &str = r#"{
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "linkedin": "https://linkedin.com/in/ada",
        "github": "https://github.com/ada",
        "location": "London",
        "careerStartYear": 2016
    }"#;

    pub(crate) const EXPERIENCE: &str = r#"{ "experiences": [
        { "id": "a", "role": "Engineer", "company": "Engines Ltd", "duration": "1842 - Present",
          "location": "London", "current": true, "highlights": ["Notes"], "technologies": ["Punch cards"] },
        { "id": "b", "role": "Translator", "company": "Taylor", "duration": "1840 - 1842",
          "location": "London", "highlights": [], "technologies": [] }
    ]}"#;

    pub(crate) const PROJECTS: &str = r#"{ "projects": [
        { "id": "p1", "title": "One", "description": "d", "category": "AI", "status": "Live",
          "metrics": { "linesOfCode": "10K", "users": 5, "uptime": "99%", "extra": true },
          "highlights": [], "technologies": [] },
        { "id": "p2", "title": "Two", "description": "d", "category": "Web", "status": "Live",
          "highlights": [], "technologies": [] },
        { "id": "p3", "title": "Three", "description": "d", "category": "AI", "status": "Beta",
          "highlights": [], "technologies": [] }
    ]}"#;

    pub(crate) const SKILLS: &str = r#"{
        "categories": [
            { "id": "ai-ml", "name": "AI", "skills": [
                { "name": "LLMs", "level": "expert", "years": 3, "details": ["Claude"] },
                { "name": "Vision", "level": "novice", "years": 1 }
            ]},
            { "id": "backend", "name": "Backend", "skills": [] }
        ],
        "languages": ["Rust"],
        "certifications": [ { "name": "Cert", "target": "2026", "status": "In Progress" } ]
    }"#;

    pub(crate) const BOOKING: &str = r#"{
        "calendlyPlan": "free",
        "bookingOptions": [
            { "id": "a", "title": "A", "description": "d", "duration": "30 min", "icon": "Search" },
            { "id": "general-consultation", "title": "General", "description": "d",
              "duration": "30 min", "icon": "Sparkles", "calendlyUrl": "https://x" }
        ]
    }"#;

    pub(crate) fn docs() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (PROFILE_DOC, PROFILE),
            (EXPERIENCE_DOC, EXPERIENCE),
            (PROJECTS_DOC, PROJECTS),
            (SKILLS_DOC, SKILLS),
            (BOOKING_DOC, BOOKING),
        ])
    }

    pub(crate) fn load(
        docs: &HashMap<&'static str, &'static str>,
    ) -> Result<SiteContent, ContentError> {
        SiteContent::from_source(|name| docs.get(name).map(|s| s.as_bytes().to_vec()))
    }

    #[test]
    fn test_bundled_content_is_valid() {
        let content = SiteContent::load().expect("bundled content should load");
        assert!(!content.projects.is_empty());
        assert!(!content.experience.is_empty());
        assert!(!content.skills.categories.is_empty());
    }

    #[test]
    fn test_load_fixture() {
        let content = load(&docs()).unwrap();
        assert_eq!(content.profile.first_name(), "Ada");
        assert_eq!(content.profile.years_of_experience(2025), Some(9));
        assert_eq!(content.experience.len(), 2);
        assert!(content.experience[0].current);
        assert!(!content.experience[1].current);
        assert!(content.projects[1].metrics.is_none());
    }

    #[test]
    fn test_metrics_keep_document_order() {
        let content = load(&docs()).unwrap();
        let metrics = content.projects[0].metrics.as_ref().unwrap();
        let keys = metrics.iter().map(|m| m.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["linesOfCode", "users", "uptime", "extra"]);
        let values = metrics.iter().map(|m| m.value.to_string()).collect::<Vec<_>>();
        assert_eq!(values, vec!["10K", "5", "99%", "true"]);
    }

    #[test]
    fn test_metric_kind_and_label() {
        assert_eq!(MetricKind::from_key("linesOfCode"), MetricKind::Code);
        assert_eq!(MetricKind::from_key("files"), MetricKind::Code);
        assert_eq!(MetricKind::from_key("tenants"), MetricKind::People);
        assert_eq!(MetricKind::from_key("monthlyRevenue"), MetricKind::Other);
        assert_eq!(humanize_key("linesOfCode"), "lines Of Code");
        assert_eq!(humanize_key("users"), "users");
        assert_eq!(humanize_key("APIs"), "A P Is");
    }

    #[test]
    fn test_skill_levels_fall_back() {
        let content = load(&docs()).unwrap();
        let skills = &content.skills.categories[0].skills;
        assert_eq!(skills[0].level, SkillLevel::Expert);
        assert_eq!(skills[0].level.stars(), 5);
        assert_eq!(skills[1].level, SkillLevel::Other("novice".to_string()));
        assert_eq!(skills[1].level.stars(), 2);
        assert_eq!(skills[1].level.label(), "novice");
        assert!(skills[1].details.is_empty());
        assert_eq!(SkillLevel::from("advanced".to_string()).stars(), 4);
        assert_eq!(SkillLevel::from("intermediate".to_string()).stars(), 3);
        assert!(content.skills.certifications[0].is_in_progress());
    }

    #[test]
    fn test_booking_catalog() {
        let content = load(&docs()).unwrap();
        let booking = &content.booking;
        assert!(booking.is_free_plan());
        assert_eq!(booking.general_consultation_id, DEFAULT_CONSULTATION_ID);
        let available = booking.available_options();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "general-consultation");
        assert_eq!(available[0].icon, BookingIcon::Other);
        assert_eq!(booking.booking_options[0].icon, BookingIcon::Search);
        assert_eq!(
            booking.general_consultation().map(|o| o.id.as_str()),
            Some("general-consultation")
        );
    }

    #[test]
    fn test_only_options_with_url_are_offerable() {
        let catalog: BookingCatalog = serde_json::from_str(
            r#"{ "calendlyPlan": "paid", "bookingOptions": [
                { "id": "a", "title": "A", "description": "", "duration": "", "icon": "Brain" },
                { "id": "b", "title": "B", "description": "", "duration": "", "icon": "Brain",
                  "calendlyUrl": "https://x" },
                { "id": "c", "title": "C", "description": "", "duration": "", "icon": "Brain",
                  "calendlyUrl": "" }
            ]}"#,
        )
        .unwrap();
        assert_eq!(catalog.plan, PlanMode::Paid);
        let ids = catalog
            .available_options()
            .into_iter()
            .map(|o| o.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["b".to_string()]);
    }

    #[test]
    fn test_missing_document() {
        let mut docs = docs();
        docs.remove(SKILLS_DOC);
        assert_eq!(
            load(&docs),
            Err(ContentError::Missing {
                document: SKILLS_DOC
            })
        );
    }

    #[test]
    fn test_malformed_document() {
        let mut docs = docs();
        docs.insert(PROJECTS_DOC, r#"{ "projects": [ { "id": "x" } ] }"#);
        match load(&docs) {
            Err(ContentError::Malformed { document, .. }) => assert_eq!(document, PROJECTS_DOC),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut docs = docs();
        docs.insert(
            EXPERIENCE_DOC,
            r#"{ "experiences": [
                { "id": "a", "role": "r", "company": "c", "duration": "d", "location": "l" },
                { "id": "a", "role": "r", "company": "c", "duration": "d", "location": "l" }
            ]}"#,
        );
        assert_eq!(
            load(&docs),
            Err(ContentError::DuplicateId {
                document: EXPERIENCE_DOC,
                id: "a".to_string()
            })
        );
    }

    #[test]
    fn test_empty_profile_name_rejected() {
        let mut docs = docs();
        docs.insert(
            PROFILE_DOC,
            r#"{ "name": " ", "email": "a@b.c", "linkedin": "", "github": "", "location": "" }"#,
        );
        assert!(matches!(
            load(&docs),
            Err(ContentError::EmptyField { field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_free_plan_needs_default_option() {
        let mut docs = docs();
        docs.insert(
            BOOKING_DOC,
            r#"{ "calendlyPlan": "free", "bookingOptions": [
                { "id": "general-consultation", "title": "G", "description": "", "duration": "",
                  "icon": "Brain" }
            ]}"#,
        );
        assert_eq!(
            load(&docs),
            Err(ContentError::MissingDefaultOption {
                id: DEFAULT_CONSULTATION_ID.to_string()
            })
        );
    }
}
