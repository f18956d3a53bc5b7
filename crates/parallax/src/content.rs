//! Profile content: the read-only records the page displays.
//!
//! The stage never edits content. It only counts skills, projects and
//! contacts to know how many elements each grid animates.

use std::path::Path;

use serde::Deserialize;

use crate::error::{StageError, StageResult};

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Card title.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// "View Project" target.
    pub link: String,
    /// Card background gradient, as `(from, to)` color names.
    #[serde(default)]
    pub accent: Option<(String, String)>,
}

impl Project {
    fn new(title: &str, description: &str, link: &str, accent: (&str, &str)) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            link: link.to_string(),
            accent: Some((accent.0.to_string(), accent.1.to_string())),
        }
    }
}

/// A contact action button.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactLink {
    /// Button label.
    pub label: String,
    /// Link target (`mailto:` or URL).
    pub href: String,
}

impl ContactLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    /// Does the link open outside the page?
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

/// Everything the profile page shows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileContent {
    /// Display name in the header.
    pub name: String,
    /// Header subtitle.
    pub headline: String,
    /// "About Me" paragraph.
    pub about: String,
    /// Skill chips, in display order.
    pub skills: Vec<String>,
    /// Project cards, in display order.
    pub projects: Vec<Project>,
    /// Contact buttons, in display order.
    pub contacts: Vec<ContactLink>,
    /// Footer line.
    pub footer: String,
}

impl ProfileContent {
    /// Parses content from TOML. Missing keys keep the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Parse`] for malformed TOML and
    /// [`StageError::InvalidContent`] if validation fails.
    pub fn from_toml_str(source: &str) -> StageResult<Self> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// Reads and parses a content file.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Io`] if the file can't be read, otherwise as
    /// [`ProfileContent::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> StageResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Rejects entries the page can't render.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::InvalidContent`] naming the first bad entry.
    pub fn validate(&self) -> StageResult<()> {
        if let Some(i) = self.skills.iter().position(|s| s.trim().is_empty()) {
            return Err(StageError::InvalidContent(format!("skill {i} is blank")));
        }
        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(StageError::InvalidContent(format!("project {i} has no title")));
            }
        }
        for contact in &self.contacts {
            if contact.href.trim().is_empty() {
                return Err(StageError::InvalidContent(format!(
                    "contact {:?} has no link",
                    contact.label
                )));
            }
        }
        Ok(())
    }
}

impl Default for ProfileContent {
    fn default() -> Self {
        let skills = [
            "Python",
            "Django",
            "Redis",
            "Django Channels",
            "FastAPI",
            "Django REST Framework",
            "PostgreSQL",
            "Docker",
            "JavaScript",
            "Kafka",
            "GraphQL",
            "React",
            "Node.js",
            "TypeScript",
        ];

        Self {
            name: "Jane Doe".to_string(),
            headline: "Full Stack Software Engineer".to_string(),
            about: "I'm a passionate full stack software engineer with 5+ years of experience \
                    in building web applications and APIs. I specialize in Python-based backends \
                    using Django and FastAPI, with expertise in frontend technologies like React \
                    and JavaScript. I'm skilled in working with databases, message brokers, and \
                    containerization technologies. My goal is to create efficient, scalable, and \
                    user-friendly solutions that solve real-world problems."
                .to_string(),
            skills: skills.iter().map(|s| (*s).to_string()).collect(),
            projects: vec![
                Project::new(
                    "Crypto Wallet App",
                    "A secure and user-friendly cryptocurrency wallet application built with \
                     React Native and blockchain integration.",
                    "https://github.com/janedoe/crypto-wallet-app",
                    ("blue-400", "green-500"),
                ),
                Project::new(
                    "Weather API",
                    "A robust weather API built with FastAPI, providing real-time weather data \
                     and forecasts.",
                    "https://github.com/janedoe/weather-api",
                    ("yellow-400", "red-500"),
                ),
                Project::new(
                    "TaskPay",
                    "A task management and payment platform using Django, Django Channels, and \
                     Stripe integration.",
                    "https://github.com/janedoe/taskpay",
                    ("purple-400", "pink-500"),
                ),
            ],
            contacts: vec![
                ContactLink::new("Email", "mailto:jane.doe@example.com"),
                ContactLink::new("GitHub", "https://github.com/janedoe"),
                ContactLink::new("LinkedIn", "https://linkedin.com/in/janedoe"),
            ],
            footer: "© 2023 Jane Doe. All rights reserved.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let content = ProfileContent::default();
        assert_eq!(content.skills.len(), 14);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.contacts.len(), 3);
        assert!(content.validate().is_ok());
        assert!(!content.contacts[0].is_external());
        assert!(content.contacts[1].is_external());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let content = ProfileContent::from_toml_str(
            r#"
            name = "Sam Roe"
            skills = ["Rust", "WebAssembly"]
            "#,
        )
        .unwrap();
        assert_eq!(content.name, "Sam Roe");
        assert_eq!(content.skills, vec!["Rust", "WebAssembly"]);
        assert_eq!(content.projects.len(), 3);
    }

    #[test]
    fn test_project_tables() {
        let content = ProfileContent::from_toml_str(
            r#"
            [[projects]]
            title = "Parallax"
            description = "Particles and scroll reveals."
            link = "https://example.com/parallax"
            accent = ["teal-400", "blue-500"]
            "#,
        )
        .unwrap();
        assert_eq!(content.projects.len(), 1);
        assert_eq!(
            content.projects[0].accent,
            Some(("teal-400".to_string(), "blue-500".to_string()))
        );
    }

    #[test]
    fn test_blank_skill_rejected() {
        let err = ProfileContent::from_toml_str(r#"skills = ["Rust", " "]"#).unwrap_err();
        assert!(matches!(err, StageError::InvalidContent(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = ProfileContent::from_toml_str("skills = [").unwrap_err();
        assert!(matches!(err, StageError::Parse(_)));
    }
}
