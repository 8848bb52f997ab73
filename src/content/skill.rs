//! Skill category schema
//!
//! The admin editor manages skill rows client-side and submits them as one
//! JSON-encoded field, so the input carries them as a string.

use serde::{Deserialize, Serialize};

use crate::content::record::{Metadata, Record};
use crate::content::validate;

/// Collection name for skill categories
pub const SKILL_COLLECTION: &str = "skills";

/// One skill row inside a category
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SkillItem {
    pub name: String,

    /// Proficiency percentage, 0..=100 (clamped on input, not enforced by the store)
    #[serde(default)]
    pub proficiency: i64,
}

/// Skill category document, drag-ordered on the about page
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SkillCategory {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default)]
    pub metadata: Metadata,

    pub name: String,

    /// Icon name from the site's icon set
    #[serde(default)]
    pub icon: String,

    /// Manual display position, ascending
    #[serde(default)]
    pub order: i64,

    #[serde(default)]
    pub skills: Vec<SkillItem>,
}

/// Fields accepted from the skill category editor. `skills` is a JSON array
/// of `{name, proficiency}` rows serialized by the editor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillCategoryInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub skills: String,
}

impl SkillCategory {
    /// Build a new category. Malformed skill rows resolve to an empty list
    /// rather than erroring; proficiency is clamped into range.
    pub fn new(input: SkillCategoryInput) -> Self {
        let mut skills: Vec<SkillItem> =
            serde_json::from_str(&input.skills).unwrap_or_default();
        for skill in &mut skills {
            skill.proficiency = validate::clamp_proficiency(skill.proficiency);
        }

        Self {
            id: String::new(),
            metadata: Metadata::default(),
            name: input.name,
            icon: input.icon,
            order: input.order,
            skills,
        }
    }
}

impl Record for SkillCategory {
    const COLLECTION: &'static str = SKILL_COLLECTION;
    const ENTITY: &'static str = "Skill category";
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
