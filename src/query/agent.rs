use super::engine::{Criteria, TextQuery};
use crate::domain::Agent;
use crate::params::Params;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSort {
    Rating,
    Properties,
    Experience,
}

impl AgentSort {
    pub const ALL: [AgentSort; 3] = [AgentSort::Rating, AgentSort::Properties, AgentSort::Experience];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "rating" => Some(AgentSort::Rating),
            "properties" => Some(AgentSort::Properties),
            "experience" => Some(AgentSort::Experience),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgentSort::Rating => "rating",
            AgentSort::Properties => "properties",
            AgentSort::Experience => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgentSort::Rating => "Top Rated",
            AgentSort::Properties => "Most Properties",
            AgentSort::Experience => "Most Experience",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentCriteria {
    /// Matches name, agency name, or any specialization.
    pub query: Option<TextQuery>,
    pub super_agents_only: bool,
    pub sort: Option<AgentSort>,
}

impl AgentCriteria {
    pub fn from_params(params: &Params) -> Self {
        Self {
            query: params.get("q").and_then(TextQuery::new),
            super_agents_only: params.flag("superAgent"),
            sort: params.get("sort").and_then(AgentSort::parse),
        }
    }
}

impl Criteria<Agent> for AgentCriteria {
    fn matches(&self, agent: &Agent) -> bool {
        if self.super_agents_only && !agent.super_agent {
            return false;
        }
        let Some(q) = &self.query else {
            return true;
        };
        q.matches(&agent.name)
            || agent.agency_name().is_some_and(|name| q.matches(name))
            || q.matches_any(agent.specializations.iter().map(String::as_str))
    }

    fn compare(&self, a: &Agent, b: &Agent) -> Ordering {
        match self.sort {
            Some(AgentSort::Rating) => b.rating.total_cmp(&a.rating),
            Some(AgentSort::Properties) => b.properties_count.cmp(&a.properties_count),
            Some(AgentSort::Experience) => b.experience.cmp(&a.experience),
            None => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::run;
    use crate::tests::utils::{agency, agent};

    fn sample() -> Vec<Agent> {
        let mut a = agent("a1", "Sarah Mitchell");
        a.rating = 4.9;
        a.experience = 8;
        a.properties_count = 40;
        a.super_agent = true;
        a.specializations = vec!["Luxury Villas".into(), "Off-Plan".into()];

        let mut b = agent("a2", "Omar Haddad");
        b.rating = 4.5;
        b.experience = 12;
        b.properties_count = 90;
        b.agency = Some(agency("ag1", "Palm Realty"));

        let mut c = agent("a3", "Lena Novak");
        c.rating = 4.9;
        c.experience = 3;
        c.properties_count = 15;
        c.specializations = vec!["Commercial".into()];
        vec![a, b, c]
    }

    fn ids(out: &[&Agent]) -> Vec<String> {
        out.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn query_hits_name_agency_and_specialization() {
        let data = sample();
        let by = |q: &str| AgentCriteria {
            query: TextQuery::new(q),
            ..Default::default()
        };
        assert_eq!(ids(&run(&data, &by("omar"))), vec!["a2"]);
        assert_eq!(ids(&run(&data, &by("PALM"))), vec!["a2"]);
        assert_eq!(ids(&run(&data, &by("villas"))), vec!["a1"]);
        assert!(run(&data, &by("nobody")).is_empty());
    }

    #[test]
    fn super_agent_toggle() {
        let data = sample();
        let on = AgentCriteria {
            super_agents_only: true,
            ..Default::default()
        };
        assert_eq!(ids(&run(&data, &on)), vec!["a1"]);
        assert_eq!(run(&data, &AgentCriteria::default()).len(), 3);
    }

    #[test]
    fn sorts_descending_with_stable_ties() {
        let data = sample();
        let sort = |s| AgentCriteria {
            sort: Some(s),
            ..Default::default()
        };
        assert_eq!(ids(&run(&data, &sort(AgentSort::Rating))), vec!["a1", "a3", "a2"]);
        assert_eq!(ids(&run(&data, &sort(AgentSort::Properties))), vec!["a2", "a1", "a3"]);
        assert_eq!(ids(&run(&data, &sort(AgentSort::Experience))), vec!["a2", "a1", "a3"]);
    }

    #[test]
    fn from_params() {
        let c = AgentCriteria::from_params(&Params::parse("q=Luxury&superAgent=on&sort=experience"));
        assert!(c.super_agents_only);
        assert_eq!(c.sort, Some(AgentSort::Experience));
        assert_eq!(c.query.as_ref().map(TextQuery::as_str), Some("luxury"));
    }
}
