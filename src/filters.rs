use crate::content::Project;

pub const ALL_CATEGORIES: &str = "all";

/// Category filter over the project list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }
}

impl CategoryFilter {
    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(c) => c,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Category(c) => c,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => &project.category == c,
        }
    }

    /// "all" followed by each distinct category in first-seen order.
    pub fn choices(projects: &[Project]) -> Vec<CategoryFilter> {
        let mut choices = vec![CategoryFilter::All];
        for project in projects {
            let choice = CategoryFilter::Category(project.category.clone());
            if !choices.contains(&choice) {
                choices.push(choice);
            }
        }
        choices
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// At most one expanded entry at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<String>,
}

impl Accordion {
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            expanded: initial.map(str::to_string),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }
}

/// Exact path comparison; "/" is only active on the home page.
pub fn is_active(current: &str, path: &str) -> bool {
    current == path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: &str) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            category: category.to_string(),
            status: "Live".to_string(),
            metrics: None,
            highlights: vec![],
            technologies: vec![],
        }
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_choices_are_distinct_and_start_with_all() {
        let projects = vec![project("a", "AI"), project("b", "Web"), project("c", "AI")];
        let keys = CategoryFilter::choices(&projects)
            .iter()
            .map(|c| c.key().to_string())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["all", "AI", "Web"]);
        assert_eq!(CategoryFilter::choices(&[]), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_filter_keeps_matching_subsequence() {
        let projects = vec![project("a", "AI"), project("b", "Web"), project("c", "AI")];
        let ai = CategoryFilter::from("AI").apply(&projects);
        assert_eq!(ids(&ai), vec!["a", "c"]);
        let web = CategoryFilter::from("Web").apply(&projects);
        assert_eq!(ids(&web), vec!["b"]);
        let none = CategoryFilter::from("Mobile").apply(&projects);
        assert!(none.is_empty());
    }

    #[test]
    fn test_all_returns_full_list_in_order() {
        let projects = vec![project("z", "Web"), project("a", "AI"), project("m", "Web")];
        let all = CategoryFilter::from(ALL_CATEGORIES).apply(&projects);
        assert_eq!(ids(&all), vec!["z", "a", "m"]);
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }

    #[test]
    fn test_every_choice_yields_exact_subsequence() {
        let projects = vec![
            project("1", "AI"),
            project("2", "Web"),
            project("3", "Automation"),
            project("4", "AI"),
            project("5", "Web"),
        ];
        for choice in CategoryFilter::choices(&projects) {
            let expected = projects
                .iter()
                .filter(|p| choice == CategoryFilter::All || p.category == choice.key())
                .map(|p| p.id.clone())
                .collect::<Vec<_>>();
            assert_eq!(ids(&choice.apply(&projects)), expected);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(CategoryFilter::All.label(), "All Projects");
        assert_eq!(CategoryFilter::from("AI").label(), "AI");
    }

    #[test]
    fn test_accordion_exclusive() {
        let mut acc = Accordion::new(Some("ai-ml"));
        assert!(acc.is_expanded("ai-ml"));
        acc.toggle("backend");
        assert!(acc.is_expanded("backend"));
        assert!(!acc.is_expanded("ai-ml"));
    }

    #[test]
    fn test_accordion_double_toggle_collapses() {
        let mut acc = Accordion::new(None);
        acc.toggle("frontend");
        acc.toggle("frontend");
        assert_eq!(acc, Accordion::new(None));

        let mut acc = Accordion::new(Some("ai-ml"));
        acc.toggle("ai-ml");
        assert!(!acc.is_expanded("ai-ml"));
        assert_eq!(acc, Accordion::new(None));
    }

    #[test]
    fn test_is_active_exact_match() {
        assert!(is_active("/", "/"));
        assert!(is_active("/projects", "/projects"));
        assert!(!is_active("/projects", "/"));
        assert!(!is_active("/projects/extra", "/projects"));
        assert!(!is_active("/", "/contact"));
    }
}
