//! Team member schema

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};

/// Collection name for team members
pub const TEAM_COLLECTION: &str = "team";

/// Team member document, drag-ordered on the about page
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TeamMember {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub name: String,

    pub role: String,

    #[serde(default)]
    pub photo: String,

    #[serde(default)]
    pub bio: String,

    /// Manual display position, ascending
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamMemberInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub order: i64,
}

impl TeamMember {
    pub fn new(input: TeamMemberInput) -> Self {
        Self {
            id: String::new(),
            metadata: Metadata::default(),
            name: input.name,
            role: input.role,
            photo: input.photo,
            bio: input.bio,
            order: input.order,
        }
    }
}

impl Record for TeamMember {
    const COLLECTION: &'static str = TEAM_COLLECTION;
    const ENTITY: &'static str = "Team member";
    const ORDER_FIELD: &'static str = "order";
    const ORDER_ASC: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}
