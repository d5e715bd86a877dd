//! Operator skills and the requirements that gate servicing
//!
//! A part may require qualified hands: every attached requirement must
//! be met by at least one of the operator's skills, where a skill
//! meets a requirement when the specialty matches and the level is at
//! least the required one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Trade specialties an operator can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    Mechanic,
    Electrician,
}

impl Specialty {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Specialty::Mechanic => "Mechanic",
            Specialty::Electrician => "Electrician",
        }
    }
}

/// Competence rungs within a specialty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    None = 0,
    Unskilled = 1,
    Normal = 2,
    Skilled = 3,
}

/// One (specialty, level) pair; used both as a held skill and as a
/// requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub specialty: Specialty,
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(specialty: Specialty, level: SkillLevel) -> Self {
        Self { specialty, level }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.specialty.name(), self.level)
    }
}

impl FromStr for Skill {
    type Err = String;

    /// Parse the `Specialty:Level` spelling used in part data files,
    /// e.g. `Electrician:Skilled`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (specialty, level) = text
            .split_once(':')
            .ok_or_else(|| format!("expected Specialty:Level, got '{}'", text))?;

        let specialty = match specialty.trim() {
            "Mechanic" => Specialty::Mechanic,
            "Electrician" => Specialty::Electrician,
            other => return Err(format!("unknown specialty '{}'", other)),
        };
        let level = match level.trim() {
            "None" => SkillLevel::None,
            "Unskilled" => SkillLevel::Unskilled,
            "Normal" => SkillLevel::Normal,
            "Skilled" => SkillLevel::Skilled,
            other => return Err(format!("unknown skill level '{}'", other)),
        };

        Ok(Skill::new(specialty, level))
    }
}

/// Whether any held skill satisfies one requirement
pub fn meets_requirement(requirement: &Skill, held: &[Skill]) -> bool {
    held.iter()
        .any(|s| s.specialty == requirement.specialty && s.level >= requirement.level)
}

/// Whether every requirement is satisfied
pub fn meets_all(requirements: &[Skill], held: &[Skill]) -> bool {
    requirements.iter().all(|r| meets_requirement(r, held))
}

/// The person doing the servicing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    /// Repair-discount aptitude in [0, 1]; scales the random cost
    /// discount rolled on a successful repair
    pub proficiency: f64,
    pub skills: Vec<Skill>,
}

impl Operator {
    pub fn new(name: impl Into<String>, proficiency: f64) -> Self {
        Self {
            name: name.into(),
            proficiency,
            skills: Vec::new(),
        }
    }

    pub fn with_skill(mut self, specialty: Specialty, level: SkillLevel) -> Self {
        self.skills.push(Skill::new(specialty, level));
        self
    }
}
