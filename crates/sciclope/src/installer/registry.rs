//! Ordered set of installer pages.

use std::collections::HashSet;

use thiserror::Error;

use super::page::Page;
use super::pages::{DonePage, WelcomePage};

/// Errors raised while building a page registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("installer page sequence is empty")]
    Empty,

    #[error("installer page listed more than once: {0}")]
    Duplicate(String),

    #[error("unknown installer page: {0:?}")]
    UnknownPage(String),
}

/// Every page the installer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Welcome,
    Done,
}

impl PageKind {
    /// Resolve a page name from configuration.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Welcome" => Some(Self::Welcome),
            "Done" => Some(Self::Done),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Done => "Done",
        }
    }

    /// Construct the page implementation for this kind.
    pub fn instantiate(self) -> Box<dyn Page> {
        match self {
            Self::Welcome => Box::new(WelcomePage),
            Self::Done => Box::new(DonePage),
        }
    }
}

/// The installer's page sequence. Insertion order is wizard order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRegistry {
    pages: Vec<PageKind>,
}

impl PageRegistry {
    /// Build a registry from page names, rejecting empty, duplicate or
    /// unknown entries.
    pub fn from_names<I, S>(names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut pages = Vec::new();

        for name in names {
            let name = name.as_ref();
            let kind = PageKind::from_name(name)
                .ok_or_else(|| RegistryError::UnknownPage(name.to_string()))?;
            if !seen.insert(kind) {
                return Err(RegistryError::Duplicate(name.to_string()));
            }
            pages.push(kind);
        }

        if pages.is_empty() {
            return Err(RegistryError::Empty);
        }

        Ok(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a validated registry.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Position of the named page, if it is part of the sequence.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let kind = PageKind::from_name(name)?;
        self.pages.iter().position(|page| *page == kind)
    }

    pub fn kind(&self, index: usize) -> Option<PageKind> {
        self.pages.get(index).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pages.iter().map(|page| page.name())
    }
}
