use crate::ci_graph::domain::ConfigurationItem;

/// CiFilter narrows a CI list by free-text search, type and tags
///
/// Empty criteria match everything. All criteria must hold for a CI to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiFilter {
    search: Option<String>,
    ci_type: Option<String>,
    tags: Vec<String>,
}

impl CiFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on name, description or any tag
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());
        self
    }

    /// Exact type match
    pub fn with_type(mut self, ci_type: Option<String>) -> Self {
        self.ci_type = ci_type.filter(|t| !t.is_empty());
        self
    }

    /// CI must carry every listed tag
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags.into_iter().filter(|t| !t.is_empty()).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.ci_type.is_none() && self.tags.is_empty()
    }

    pub fn matches(&self, ci: &ConfigurationItem) -> bool {
        if let Some(search) = &self.search {
            let hit = ci.name().to_lowercase().contains(search)
                || ci.description().to_lowercase().contains(search)
                || ci.tags().iter().any(|tag| tag.to_lowercase().contains(search));
            if !hit {
                return false;
            }
        }

        if let Some(ci_type) = &self.ci_type {
            if ci.ci_type() != ci_type {
                return false;
            }
        }

        self.tags.iter().all(|wanted| ci.tags().contains(wanted))
    }

    /// Keeps matching CIs in input order
    pub fn apply<'a>(&self, cis: &'a [ConfigurationItem]) -> Vec<&'a ConfigurationItem> {
        cis.iter().filter(|ci| self.matches(ci)).collect()
    }
}

/// One page of a filtered CI list
#[derive(Debug, Clone, PartialEq)]
pub struct CiPage<'a> {
    pub items: Vec<&'a ConfigurationItem>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Paginator slicing a list into 1-based pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    limit: usize,
}

impl Paginator {
    pub const DEFAULT_LIMIT: usize = 10;

    /// Page numbers below 1 are treated as 1, a zero limit as the default
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: if limit == 0 { Self::DEFAULT_LIMIT } else { limit },
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn paginate<'a>(&self, items: Vec<&'a ConfigurationItem>) -> CiPage<'a> {
        let total = items.len();
        let total_pages = total.div_ceil(self.limit);
        let start = (self.page - 1).saturating_mul(self.limit);

        let items = items.into_iter().skip(start).take(self.limit).collect();

        CiPage {
            items,
            page: self.page,
            limit: self.limit,
            total,
            total_pages,
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}
