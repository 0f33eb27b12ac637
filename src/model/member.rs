//! Member — a person in the family graph.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::relation::RelationshipEdge;

/// Opaque member identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(pub u64);

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Member gender, as recorded by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// A person, together with the relationship edges declared on their
/// row. Snapshots arrive from the persistence layer already scoped to
/// one family; the graph treats each member as an immutable snapshot
/// for the duration of one build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub gender: Gender,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default = "default_alive")]
    pub alive: bool,
    #[serde(default)]
    pub edges: SmallVec<[RelationshipEdge; 4]>,
}

fn default_alive() -> bool {
    true
}

impl Member {
    pub fn new(id: MemberId, first_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: None,
            gender,
            birth_date: None,
            alive: true,
            edges: SmallVec::new(),
        }
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn with_edge(mut self, edge: RelationshipEdge) -> Self {
        self.edges.push(edge);
        self
    }

    pub fn deceased(mut self) -> Self {
        self.alive = false;
        self
    }

    /// "First Last", or just the first name when no last name is recorded.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }

    /// Birth year used by generation bucketing and root selection.
    /// Undated members default to 2000.
    pub fn birth_year_or_default(&self) -> i32 {
        use chrono::Datelike;
        self.birth_date.map(|d| d.year()).unwrap_or(2000)
    }
}
