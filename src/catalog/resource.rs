use crate::filter::{FilterValue, ProjectType, Status, Theme};
use fake::{Dummy, Faker};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Defines the kinds of external links a project may advertise.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Website,
    Github,
    Twitter,
    Discord,
    Telegram,
}

impl LinkKind {
    pub const ALL: [LinkKind; 5] = [
        LinkKind::Website,
        LinkKind::Github,
        LinkKind::Twitter,
        LinkKind::Discord,
        LinkKind::Telegram,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Website => "Website",
            LinkKind::Github => "GitHub",
            LinkKind::Twitter => "Twitter",
            LinkKind::Discord => "Discord",
            LinkKind::Telegram => "Telegram",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LinkKind::Website => "🌐",
            LinkKind::Github => "⌥",
            LinkKind::Twitter => "✦",
            LinkKind::Discord => "☍",
            LinkKind::Telegram => "✈",
        }
    }
}

impl Dummy<Faker> for LinkKind {
    fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
        LinkKind::ALL[rng.gen_range(0..LinkKind::ALL.len())]
    }
}

/// Defines the facet tags attached to a project.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTags {
    #[serde(default)]
    pub themes: Vec<Theme>,
    pub status: Status,
    #[serde(default)]
    pub types: Vec<ProjectType>,
}

/// Defines project data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tldr: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    pub tags: ProjectTags,
    #[serde(default)]
    pub links: BTreeMap<LinkKind, String>,
}

impl Project {
    /// Return true if the project carries the given facet value.
    ///
    pub fn has_tag(&self, value: FilterValue) -> bool {
        match value {
            FilterValue::Theme(theme) => self.tags.themes.contains(&theme),
            FilterValue::Status(status) => self.tags.status == status,
            FilterValue::Type(kind) => self.tags.types.contains(&kind),
        }
    }

    /// Return true if the lowercased term occurs in the name or tldr.
    ///
    pub fn matches_term(&self, term_lower: &str) -> bool {
        term_lower.is_empty()
            || self.name.to_lowercase().contains(term_lower)
            || self.tldr.to_lowercase().contains(term_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    fn project() -> Project {
        Project {
            id: "zkit".to_string(),
            name: "ZKit".to_string(),
            tldr: "Circuits for everyone".to_string(),
            description: None,
            banner: None,
            tags: ProjectTags {
                themes: vec![Theme::Build],
                status: Status::Active,
                types: vec![ProjectType::Devtools],
            },
            links: BTreeMap::new(),
        }
    }

    #[test]
    fn has_tag_checks_each_category() {
        let project = project();
        assert!(project.has_tag(FilterValue::Theme(Theme::Build)));
        assert!(!project.has_tag(FilterValue::Theme(Theme::Play)));
        assert!(project.has_tag(FilterValue::Status(Status::Active)));
        assert!(!project.has_tag(FilterValue::Status(Status::Archived)));
        assert!(project.has_tag(FilterValue::Type(ProjectType::Devtools)));
    }

    #[test]
    fn matches_term_in_name_or_tldr() {
        let project = project();
        assert!(project.matches_term("kit"));
        assert!(project.matches_term("everyone"));
        assert!(project.matches_term(""));
        assert!(!project.matches_term("proof"));
    }

    #[test]
    fn links_deserialize_into_typed_kinds() {
        let yaml = "
id: zkit
name: ZKit
tldr: Circuits
tags:
  status: inactive
links:
  github: https://github.com/example/zkit
  website: https://zkit.example
";
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        let kinds: Vec<LinkKind> = project.links.keys().copied().collect();
        assert_eq!(kinds, vec![LinkKind::Website, LinkKind::Github]);
        assert_eq!(project.tags.status, Status::Inactive);
        assert!(project.tags.themes.is_empty());
        assert!(project.tags.types.is_empty());
    }

    #[test]
    fn status_is_required() {
        let yaml = "
id: zkit
name: ZKit
tldr: Circuits
tags:
  themes: [build]
";
        assert!(serde_yaml::from_str::<Project>(yaml).is_err());
        assert!(serde_yaml::from_str::<Project>("id: a\nname: A\ntldr: a\n").is_err());
    }

    #[test]
    fn fake_project_has_tags() {
        let project: Project = Faker.fake();
        for theme in &project.tags.themes {
            assert!(project.has_tag(FilterValue::Theme(*theme)));
        }
        assert!(project.has_tag(FilterValue::Status(project.tags.status)));
    }
}
