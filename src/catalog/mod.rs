// src/catalog/mod.rs

mod fixtures;

use crate::domain::{Agency, Agent, Area, Blog, Developer, Job, Project, Property, Transaction};
use crate::errors::ServerError;
use fixtures::{index_by_id, AgentFixture, ProjectFixture, PropertyFixture};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

/// Raw JSON for every collection.
#[derive(Debug, Clone, Copy)]
pub struct FixtureSources<'a> {
    pub agencies: &'a str,
    pub developers: &'a str,
    pub agents: &'a str,
    pub properties: &'a str,
    pub projects: &'a str,
    pub blogs: &'a str,
    pub areas: &'a str,
    pub transactions: &'a str,
    pub jobs: &'a str,
}

impl FixtureSources<'static> {
    /// The data compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            agencies: include_str!("../../data/agencies.json"),
            developers: include_str!("../../data/developers.json"),
            agents: include_str!("../../data/agents.json"),
            properties: include_str!("../../data/properties.json"),
            projects: include_str!("../../data/projects.json"),
            blogs: include_str!("../../data/blogs.json"),
            areas: include_str!("../../data/areas.json"),
            transactions: include_str!("../../data/transactions.json"),
            jobs: include_str!("../../data/jobs.json"),
        }
    }
}

/// Every record collection, loaded once and never mutated afterwards.
/// Shared across workers behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub agencies: Vec<Agency>,
    pub developers: Vec<Developer>,
    pub agents: Vec<Agent>,
    pub properties: Vec<Property>,
    pub projects: Vec<Project>,
    pub blogs: Vec<Blog>,
    pub areas: Vec<Area>,
    pub transactions: Vec<Transaction>,
    pub jobs: Vec<Job>,
}

fn parse<T: DeserializeOwned>(kind: &str, raw: &str) -> Result<Vec<T>, ServerError> {
    serde_json::from_str(raw)
        .map_err(|e| ServerError::FixtureError(format!("Failed to parse {kind}: {e}")))
}

/// Fails on the first repeated value.
fn ensure_unique<'a, I>(kind: &str, field: &str, values: I) -> Result<(), ServerError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for v in values {
        if !seen.insert(v) {
            return Err(ServerError::FixtureError(format!(
                "duplicate {kind} {field} '{v}'"
            )));
        }
    }
    Ok(())
}

macro_rules! ensure_unique_fields {
    ($kind:expr, $items:expr, $($field:ident),+) => {
        $( ensure_unique($kind, stringify!($field), $items.iter().map(|x| x.$field.as_str()))?; )+
    };
}

impl Catalog {
    pub fn load() -> Result<Self, ServerError> {
        Self::from_sources(&FixtureSources::embedded())
    }

    pub fn from_sources(src: &FixtureSources<'_>) -> Result<Self, ServerError> {
        let agencies: Vec<Agency> = parse("agencies", src.agencies)?;
        let developers: Vec<Developer> = parse("developers", src.developers)?;

        let agency_index = index_by_id(&agencies, |a| a.id.as_str());
        let agents = parse::<AgentFixture>("agents", src.agents)?
            .into_iter()
            .map(|a| a.resolve(&agency_index))
            .collect::<Result<Vec<_>, _>>()?;

        let agent_index = index_by_id(&agents, |a| a.id.as_str());
        let developer_index = index_by_id(&developers, |d| d.id.as_str());

        let properties = parse::<PropertyFixture>("properties", src.properties)?
            .into_iter()
            .map(|p| p.resolve(&agent_index, &developer_index))
            .collect::<Result<Vec<_>, _>>()?;

        let projects = parse::<ProjectFixture>("projects", src.projects)?
            .into_iter()
            .map(|p| p.resolve(&developer_index))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Catalog {
            blogs: parse("blogs", src.blogs)?,
            areas: parse("areas", src.areas)?,
            transactions: parse("transactions", src.transactions)?,
            jobs: parse("jobs", src.jobs)?,
            agencies,
            developers,
            agents,
            properties,
            projects,
        };
        catalog.validate()?;

        tracing::info!(
            properties = catalog.properties.len(),
            agents = catalog.agents.len(),
            projects = catalog.projects.len(),
            blogs = catalog.blogs.len(),
            areas = catalog.areas.len(),
            transactions = catalog.transactions.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Ids and slugs are unique per collection.
    fn validate(&self) -> Result<(), ServerError> {
        ensure_unique_fields!("agency", self.agencies, id, slug);
        ensure_unique_fields!("developer", self.developers, id, slug);
        ensure_unique_fields!("agent", self.agents, id, slug);
        ensure_unique_fields!("property", self.properties, id, slug);
        ensure_unique_fields!("project", self.projects, id, slug);
        ensure_unique_fields!("blog", self.blogs, id, slug);
        ensure_unique_fields!("area", self.areas, id, slug);
        ensure_unique_fields!("transaction", self.transactions, id);
        ensure_unique_fields!("job", self.jobs, id);
        Ok(())
    }

    pub fn property_by_slug(&self, slug: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.slug == slug)
    }
}
