// ABOUTME: Validated "owner/name" repository identifier.
// ABOUTME: Used for the hosting repository and the dashboard store.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoSlugError {
    #[error("repository cannot be empty")]
    Empty,

    #[error("repository must have the form owner/name: {0}")]
    MissingSeparator(String),

    #[error("repository owner cannot be empty: {0}")]
    EmptyOwner(String),

    #[error("repository name cannot be empty: {0}")]
    EmptyName(String),

    #[error("invalid character in repository '{slug}': '{ch}'")]
    InvalidChar { slug: String, ch: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    pub fn parse(value: &str) -> Result<Self, RepoSlugError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(RepoSlugError::Empty);
        }

        let (owner, name) = value
            .split_once('/')
            .ok_or_else(|| RepoSlugError::MissingSeparator(value.to_string()))?;

        if owner.is_empty() {
            return Err(RepoSlugError::EmptyOwner(value.to_string()));
        }
        if name.is_empty() {
            return Err(RepoSlugError::EmptyName(value.to_string()));
        }

        // GitHub owners and repository names share this alphabet; a second
        // slash lands here too.
        for c in owner.chars().chain(name.chars()) {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' && c != '.' {
                return Err(RepoSlugError::InvalidChar {
                    slug: value.to_string(),
                    ch: c,
                });
            }
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoSlug {
    type Err = RepoSlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
