use std::{collections::HashSet, sync::LazyLock};

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::gallery::{Gallery, GalleryItem};

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file missing: {0}")]
    Missing(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("Project {0} has no images")]
    EmptyGallery(String),
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
    #[error("Skill {name} has level {level}, expected 0-100")]
    SkillLevel { name: String, level: u8 },
    #[error("Profile has no roles")]
    NoRoles,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub headline: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub location: String,
    pub roles: Vec<String>,
    pub avatar: String,
    pub resume_url: String,
    pub email: String,
    pub about: About,
    pub socials: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub icon: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceLinks {
    pub frontend: String,
    #[serde(default)]
    pub backend: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub source: SourceLinks,
}

impl Project {
    pub fn gallery_item(&self) -> Option<GalleryItem> {
        GalleryItem::new(self.id.clone(), self.images.clone())
    }
}

#[derive(Debug, Clone)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

impl Portfolio {
    fn load() -> Result<Self, ContentError> {
        let portfolio = Self {
            profile: read_embedded("profile.json")?,
            skills: read_embedded("skills.json")?,
            projects: read_embedded("projects.json")?,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn from_json(profile: &str, skills: &str, projects: &str) -> Result<Self, ContentError> {
        let portfolio = Self {
            profile: parse("profile.json", profile)?,
            skills: parse("skills.json", skills)?,
            projects: parse("projects.json", projects)?,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.profile.roles.is_empty() {
            return Err(ContentError::NoRoles);
        }
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.images.is_empty() {
                return Err(ContentError::EmptyGallery(project.id.clone()));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateId(project.id.clone()));
            }
        }
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// A fresh gallery controller over every project's images.
    pub fn gallery(&self) -> Gallery {
        Gallery::new(
            self.projects
                .iter()
                .filter_map(Project::gallery_item)
                .collect(),
        )
    }
}

/// The embedded portfolio, parsed and validated once per process.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

fn read_embedded<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
    let text = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })?;
    parse(name, text)
}

fn parse<T: DeserializeOwned>(name: &str, text: &str) -> Result<T, ContentError> {
    serde_json::from_str(text).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"{
        "name": "Test Person",
        "greeting": "Hello, I'm",
        "location": "Somewhere",
        "roles": ["Builder"],
        "avatar": "https://img.test/me.png",
        "resume_url": "https://cv.test",
        "email": "me@test.dev",
        "about": { "headline": "h", "paragraphs": ["p"], "highlights": ["x"] },
        "socials": [{ "label": "GitHub", "url": "https://github.com/test" }]
    }"#;

    const SKILLS: &str = r#"[{ "name": "Rust", "level": 90, "icon": "R", "category": "Languages" }]"#;

    fn project(id: &str, images: &str) -> String {
        format!(
            r#"{{ "id": "{id}", "title": "T", "description": "D", "images": {images},
                 "technologies": ["Rust"], "live_url": "https://live.test",
                 "source": {{ "frontend": "https://git.test/fe" }} }}"#
        )
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let portfolio = portfolio().expect("embedded content should be valid");
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.profile.roles.is_empty());
        let gallery = portfolio.gallery();
        assert_eq!(gallery.items().len(), portfolio.projects.len());
    }

    #[test]
    fn test_from_json() {
        let projects = format!("[{}, {}]", project("a", r#"["1", "2"]"#), project("b", r#"["3"]"#));
        let portfolio = Portfolio::from_json(PROFILE, SKILLS, &projects).unwrap();
        assert_eq!(portfolio.projects.len(), 2);
        assert!(portfolio.project("a").unwrap().source.backend.is_none());
        assert_eq!(portfolio.gallery().item("a").unwrap().image_count(), 2);
    }

    #[test]
    fn test_empty_gallery_rejected() {
        let projects = format!("[{}]", project("a", "[]"));
        let err = Portfolio::from_json(PROFILE, SKILLS, &projects).unwrap_err();
        assert_eq!(err, ContentError::EmptyGallery("a".to_string()));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let projects = format!("[{}, {}]", project("a", r#"["1"]"#), project("a", r#"["2"]"#));
        let err = Portfolio::from_json(PROFILE, SKILLS, &projects).unwrap_err();
        assert_eq!(err, ContentError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_bad_skill_level_rejected() {
        let skills = r#"[{ "name": "Rust", "level": 120, "icon": "R", "category": "Languages" }]"#;
        let projects = format!("[{}]", project("a", r#"["1"]"#));
        let err = Portfolio::from_json(PROFILE, skills, &projects).unwrap_err();
        assert!(matches!(err, ContentError::SkillLevel { level: 120, .. }));
    }

    #[test]
    fn test_no_roles_rejected() {
        let profile = PROFILE.replace(r#"["Builder"]"#, "[]");
        let projects = format!("[{}]", project("a", r#"["1"]"#));
        let err = Portfolio::from_json(&profile, SKILLS, &projects).unwrap_err();
        assert_eq!(err, ContentError::NoRoles);
    }

    #[test]
    fn test_malformed_json_names_file() {
        let err = Portfolio::from_json(PROFILE, "[{", "[]").unwrap_err();
        assert!(matches!(err, ContentError::Parse { ref file, .. } if file == "skills.json"));
    }
}
