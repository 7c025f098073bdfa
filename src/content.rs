use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::config::{CyclerTiming, TimingError};

static CONTENT: LazyLock<Result<Content, ContentError>> = LazyLock::new(Content::load);

#[derive(Embed)]
#[folder = "content"]
struct ContentFiles;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file {0} is missing")]
    Missing(String),
    #[error("couldn't parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("site has no hero words")]
    NoHeroWords,
    #[error("bad typing timings: {0}")]
    Timing(#[from] TimingError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    pub lead: String,
    pub trail: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub intro: String,
    pub journey: Vec<String>,
    pub approach: Vec<String>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfo {
    pub location: String,
    pub email: String,
    pub phone: String,
    pub phone_href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Social {
    pub label: String,
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    pub brand: Brand,
    pub owner: String,
    pub badge: String,
    pub tagline: String,
    pub hero_words: Vec<String>,
    #[serde(default)]
    pub typing: CyclerTiming,
    pub about: About,
    pub contact: ContactInfo,
    pub socials: Vec<Social>,
    pub github_profile: String,
    pub always_learning: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub github_url: String,
    pub demo_url: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tech {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechCategory {
    pub name: String,
    pub techs: Vec<Tech>,
}

#[derive(Debug, Clone)]
pub struct Content {
    pub site: Site,
    pub projects: Vec<Project>,
    pub certificates: Vec<Certificate>,
    pub tech_stack: Vec<TechCategory>,
}

/// Page content, parsed from the embedded files on first use.
pub fn content() -> Result<&'static Content, ContentError> {
    CONTENT.as_ref().map_err(Clone::clone)
}

fn parse<T: DeserializeOwned>(file: &str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        message: e.to_string(),
    })
}

fn read<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let embedded = ContentFiles::get(file).ok_or_else(|| ContentError::Missing(file.to_string()))?;
    parse(file, &embedded.data)
}

impl Content {
    fn load() -> Result<Self, ContentError> {
        let content = Self {
            site: read("site.json")?,
            projects: read("projects.json")?,
            certificates: read("certificates.json")?,
            tech_stack: read("techstack.json")?,
        };
        content.validate()?;
        log::debug!(
            "loaded content: {} projects, {} certificates, {} tech categories",
            content.projects.len(),
            content.certificates.len(),
            content.tech_stack.len()
        );
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.site.hero_words.is_empty() {
            return Err(ContentError::NoHeroWords);
        }
        self.site.typing.validate()?;
        Ok(())
    }
}
