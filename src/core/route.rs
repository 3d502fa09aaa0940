//! Route classification for navigation highlighting.
//!
//! Decides whether the current path lies within a nav entry's section.
//! The home entry (`/`) owns every path that is not in the non-catalog
//! route set; every other entry matches by path containment.

use crate::config::{MATCH_STRATEGY, NON_CATALOG_ROUTES};
use crate::models::NavItem;

/// How a path is tested against a section href.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(dead_code)]
pub enum MatchStrategy {
    /// Plain substring / string-prefix tests.
    ///
    /// `/about-us` matches `/about`. Kept for parity with the live site.
    #[default]
    Substring,
    /// Path-segment aware tests: `/about` matches `/about` and `/about/team`,
    /// not `/about-us`.
    Segment,
}

impl MatchStrategy {
    /// Whether `path` lies within the section `href`.
    pub fn contains(self, path: &str, href: &str) -> bool {
        match self {
            Self::Substring => path.contains(href),
            Self::Segment => path
                .match_indices(href)
                .any(|(idx, _)| is_segment_match(path, idx, href.len())),
        }
    }

    /// Whether `path` starts with the section `prefix`.
    pub fn starts_with(self, path: &str, prefix: &str) -> bool {
        match self {
            Self::Substring => path.starts_with(prefix),
            Self::Segment => path.starts_with(prefix) && is_segment_match(path, 0, prefix.len()),
        }
    }
}

/// A match at `path[start..start + len]` is aligned on segment boundaries.
fn is_segment_match(path: &str, start: usize, len: usize) -> bool {
    let before_ok = start == 0 || path[..start].ends_with('/');
    let after_ok = path[start + len..]
        .chars()
        .next()
        .is_none_or(|c| matches!(c, '/' | '?' | '#'));
    before_ok && after_ok
}

/// Classifies paths against a fixed non-catalog route set.
#[derive(Clone, Copy, Debug)]
pub struct RouteClassifier<'a> {
    non_catalog: &'a [&'a str],
    strategy: MatchStrategy,
}

impl RouteClassifier<'static> {
    /// Classifier over the configured route set and strategy.
    pub const fn configured() -> Self {
        Self::new(NON_CATALOG_ROUTES, MATCH_STRATEGY)
    }
}

impl<'a> RouteClassifier<'a> {
    pub const fn new(non_catalog: &'a [&'a str], strategy: MatchStrategy) -> Self {
        Self {
            non_catalog,
            strategy,
        }
    }

    /// Whether `path` is outside the catalog/home section.
    pub fn is_non_catalog(&self, path: &str) -> bool {
        self.non_catalog
            .iter()
            .any(|prefix| path == *prefix || self.strategy.starts_with(path, prefix))
    }

    /// Whether `item` should be highlighted for `path`.
    pub fn is_active(&self, item: &NavItem, path: &str) -> bool {
        if item.is_home() {
            !self.is_non_catalog(path)
        } else {
            self.strategy.contains(path, item.href)
        }
    }
}
