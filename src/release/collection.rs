//! Release collection engine: filtering, sorting and reset

use regex::Regex;

use crate::release::record::Release;

/// Sort direction for [`ReleaseCollection::sort_by_version`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Predicate families a collection can be narrowed by
#[derive(Debug, Clone)]
pub enum ReleaseFilter {
    /// Release title matches the pattern
    Title(Regex),
    /// Any download's media type matches the pattern
    MediaType(Regex),
    /// Any download's URL matches the pattern
    Url(Regex),
    /// Release is a pre-release
    Prerelease,
}

impl ReleaseFilter {
    pub fn title(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(ReleaseFilter::Title)
    }

    pub fn media_type(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(ReleaseFilter::MediaType)
    }

    pub fn url(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(ReleaseFilter::Url)
    }

    /// Check whether a release satisfies this filter
    pub fn matches(&self, release: &Release) -> bool {
        match self {
            ReleaseFilter::Title(re) => re.is_match(release.title()),
            ReleaseFilter::MediaType(re) => release
                .downloads()
                .iter()
                .any(|d| re.is_match(d.media_type())),
            ReleaseFilter::Url(re) => release.downloads().iter().any(|d| re.is_match(d.url())),
            ReleaseFilter::Prerelease => release.is_prerelease(),
        }
    }
}

/// Releases of a feed: the snapshot taken at unmarshal time and a working view
///
/// Both sequences are owned independently. Filters and sorts only touch the
/// working view, so it always holds a subset of the original releases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseCollection {
    original: Vec<Release>,
    working: Vec<Release>,
}

impl ReleaseCollection {
    pub fn new(releases: Vec<Release>) -> Self {
        Self {
            working: releases.clone(),
            original: releases,
        }
    }

    /// Releases in the working view
    pub fn releases(&self) -> &[Release] {
        &self.working
    }

    /// Releases as they were unmarshaled, before any filter or sort
    pub fn original(&self) -> &[Release] {
        &self.original
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// First release of the working view, `None` when it is empty
    pub fn first_release(&self) -> Option<&Release> {
        self.working.first()
    }

    /// Keep only the working releases satisfying the predicate
    ///
    /// Successive calls compose: each one narrows the current working view.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&Release) -> bool,
    {
        self.working.retain(predicate);
    }

    /// Keep the working releases that match the filter
    pub fn keep_matching(&mut self, filter: &ReleaseFilter) {
        self.retain(|r| filter.matches(r));
    }

    /// Keep the working releases that don't match the filter
    pub fn keep_not_matching(&mut self, filter: &ReleaseFilter) {
        self.retain(|r| !filter.matches(r));
    }

    /// Stable sort of the working view by semantic version precedence
    ///
    /// Build metadata is ignored, so `1.0.0+a` and `1.0.0+b` are equal.
    /// Releases with equal versions keep their relative order in both
    /// directions.
    pub fn sort_by_version(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self
                .working
                .sort_by(|a, b| a.version().cmp_precedence(b.version())),
            SortOrder::Descending => self
                .working
                .sort_by(|a, b| b.version().cmp_precedence(a.version())),
        }
    }

    /// Restore the working view to a copy of the original releases
    pub fn reset(&mut self) {
        self.working = self.original.clone();
    }
}
