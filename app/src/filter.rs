//! Client-side narrowing of already loaded lists.
//!
//! Filtering never mutates the source list and always keeps source order.

use crate::types::{BlogPost, Project};

/// Category buttons on the projects page, in display order.
pub const PROJECT_CATEGORIES: [&str; 5] = ["All", "Web App", "Mobile", "UI/UX", "Graphic Design"];

/// Text a search query is matched against.
pub trait Searchable {
    fn title(&self) -> &str;
    fn excerpt(&self) -> Option<&str>;
    fn tags(&self) -> &[String];
}

impl Searchable for BlogPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn excerpt(&self) -> Option<&str> {
        Some(&self.description)
    }

    fn tags(&self) -> &[String] {
        &self.technologies
    }
}

/// Case-insensitive substring match on title, excerpt or any tag.
/// An empty query matches everything. The query is not trimmed.
pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
    contains(item.title())
        || item.excerpt().is_some_and(contains)
        || item.tags().iter().any(|tag| contains(tag.as_str()))
}

pub fn search<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_query(*item, query))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_label(label: &str) -> Self {
        if label == "All" {
            Self::All
        } else {
            Self::Only(label.to_owned())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(category) => category,
        }
    }

    /// Exact, case-sensitive comparison.
    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for Project {
    fn category(&self) -> &str {
        Project::category(self)
    }
}

pub fn by_category<T: Categorized + Clone>(items: &[T], filter: &CategoryFilter) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.admits(item.category()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, excerpt: Option<&str>, tags: &[&str]) -> BlogPost {
        BlogPost {
            title: title.to_owned(),
            excerpt: excerpt.map(str::to_owned),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            ..Default::default()
        }
    }

    fn project(title: &str, category: Option<&str>) -> Project {
        Project {
            id: title.to_lowercase(),
            title: title.to_owned(),
            category: category.map(str::to_owned),
            ..Default::default()
        }
    }

    fn posts() -> Vec<BlogPost> {
        vec![
            post("Learning Rust", Some("Ownership explained"), &["rust", "systems"]),
            post("CSS Tricks", None, &["design"]),
            post("Deploying apps", Some("From laptop to cloud with RUST"), &[]),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let posts = posts();
        assert_eq!(search(&posts, ""), posts);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let posts = posts();
        let titles: Vec<_> = search(&posts, "rUsT").into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Learning Rust", "Deploying apps"]);

        let by_tag: Vec<_> = search(&posts, "DESIGN").into_iter().map(|p| p.title).collect();
        assert_eq!(by_tag, vec!["CSS Tricks"]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let posts = posts();
        assert!(search(&posts, " rust ").is_empty());
    }

    #[test]
    fn test_search_result_is_subset_of_source() {
        let posts = posts();
        for query in ["", "a", "rust", "zzz", "tricks"] {
            let found = search(&posts, query);
            assert!(found.len() <= posts.len());
            assert!(found.iter().all(|p| posts.contains(p)));
        }
    }

    #[test]
    fn test_projects_are_searchable_by_technology() {
        let mut shop = project("Shop", None);
        shop.technologies = vec!["Flutter".to_owned()];
        let found = search(&[shop.clone(), project("Blog", None)], "flutter");
        assert_eq!(found, vec![shop]);
    }

    #[test]
    fn test_category_filter_matches_exactly() {
        let projects = vec![
            project("A", Some("Mobile")),
            project("B", Some("Web App")),
            project("C", None),
            project("D", Some("mobile")),
            project("E", Some("Mobile")),
        ];

        let mobile = by_category(&projects, &CategoryFilter::from_label("Mobile"));
        let names: Vec<_> = mobile.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(names, vec!["A", "E"]);

        let web = by_category(&projects, &CategoryFilter::from_label("Web App"));
        assert_eq!(web.len(), 2);

        assert_eq!(by_category(&projects, &CategoryFilter::All), projects);
        assert!(by_category(&projects, &CategoryFilter::from_label("UI/UX")).is_empty());
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("Mobile").label(), "Mobile");
        assert_eq!(CategoryFilter::default().label(), "All");
        assert_eq!(PROJECT_CATEGORIES[0], "All");
    }
}
