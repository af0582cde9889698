// src/query/listings.rs
//
// Criteria for the simpler listing pages: projects, blog, areas,
// transactions and careers. None of them sort; results keep fixture order.

use super::engine::{text_matches, Criteria, TextQuery};
use crate::domain::{Area, Blog, Job, PriceType, Project, Transaction};
use crate::params::Params;

/// Selector value meaning "no filter" on the blog and careers pages.
pub const ALL_LABEL: &str = "All";

fn selector(params: &Params, key: &str, all: &str) -> Option<String> {
    params
        .get(key)
        .filter(|v| !v.eq_ignore_ascii_case(all))
        .map(str::to_string)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCriteria {
    /// Matches project name, developer name, or location area.
    pub query: Option<TextQuery>,
    pub status: Option<String>,
}

impl ProjectCriteria {
    pub fn from_params(params: &Params) -> Self {
        Self {
            query: params.get("q").and_then(TextQuery::new),
            status: selector(params, "status", "all"),
        }
    }
}

impl Criteria<Project> for ProjectCriteria {
    fn matches(&self, p: &Project) -> bool {
        if let Some(s) = &self.status {
            if p.status.as_str() != s {
                return false;
            }
        }
        self.query.as_ref().map_or(true, |q| {
            q.matches_any([
                p.name.as_str(),
                p.developer.name.as_str(),
                p.location.area.as_str(),
            ])
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogCriteria {
    /// Matches title or excerpt.
    pub query: Option<TextQuery>,
    pub category: Option<String>,
}

impl BlogCriteria {
    pub fn from_params(params: &Params) -> Self {
        Self {
            query: params.get("q").and_then(TextQuery::new),
            category: selector(params, "category", ALL_LABEL),
        }
    }

    /// The featured post is pulled out above the grid only on the unfiltered view.
    pub fn shows_featured(&self) -> bool {
        self.query.is_none() && self.category.is_none()
    }
}

impl Criteria<Blog> for BlogCriteria {
    fn matches(&self, b: &Blog) -> bool {
        if let Some(c) = &self.category {
            if &b.category != c {
                return false;
            }
        }
        self.query
            .as_ref()
            .map_or(true, |q| q.matches_any([b.title.as_str(), b.excerpt.as_str()]))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaCriteria {
    /// Matches area name or city.
    pub query: Option<TextQuery>,
}

impl AreaCriteria {
    pub fn from_params(params: &Params) -> Self {
        Self {
            query: params.get("q").and_then(TextQuery::new),
        }
    }
}

impl Criteria<Area> for AreaCriteria {
    fn matches(&self, a: &Area) -> bool {
        self.query
            .as_ref()
            .map_or(true, |q| q.matches_any([a.name.as_str(), a.city.as_str()]))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionCriteria {
    /// Matches the area name.
    pub query: Option<TextQuery>,
    pub kind: Option<PriceType>,
}

impl TransactionCriteria {
    pub fn from_params(params: &Params) -> Self {
        Self {
            query: params.get("q").and_then(TextQuery::new),
            kind: params.get("kind").and_then(PriceType::parse),
        }
    }
}

impl Criteria<Transaction> for TransactionCriteria {
    fn matches(&self, t: &Transaction) -> bool {
        if self.kind.is_some_and(|k| t.transaction_type != k) {
            return false;
        }
        text_matches(&self.query, &t.area)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCriteria {
    /// Matches the job title.
    pub query: Option<TextQuery>,
    pub department: Option<String>,
}

impl JobCriteria {
    pub fn from_params(params: &Params) -> Self {
        Self {
            query: params.get("q").and_then(TextQuery::new),
            department: selector(params, "department", ALL_LABEL),
        }
    }
}

impl Criteria<Job> for JobCriteria {
    fn matches(&self, j: &Job) -> bool {
        if let Some(d) = &self.department {
            if &j.department != d {
                return false;
            }
        }
        text_matches(&self.query, &j.title)
    }
}
