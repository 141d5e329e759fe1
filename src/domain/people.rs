//! People attached to records: actors (on movies) and researchers (on
//! documentaries). Both exist independently of any record and may be shared.

use std::str::FromStr;

use super::fields::{at_most, canonical, required_text};
use crate::error::ValidationError;

const MAX_ACTOR_AGE: u32 = 120;
const MAX_YEARS_EXPERIENCE: u32 = 60;

/// Billing of an actor in a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorRole {
    Principal,
    Secondary,
    Extra,
}

impl ActorRole {
    const CHOICES: [(&'static str, ActorRole); 3] = [
        ("Principal", ActorRole::Principal),
        ("Secondary", ActorRole::Secondary),
        ("Extra", ActorRole::Extra),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActorRole::Principal => "Principal",
            ActorRole::Secondary => "Secondary",
            ActorRole::Extra => "Extra",
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical("role", s, &Self::CHOICES)
    }
}

/// An actor. Two actors are the same person when name and age match.
#[derive(Debug, Clone)]
pub struct Actor {
    name: String,
    age: u32,
    nationality: String,
    role: ActorRole,
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.age == other.age
    }
}

impl Eq for Actor {}

impl Actor {
    pub fn new(name: &str, age: u32, nationality: &str, role: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", name)?,
            age: at_most("age", age, MAX_ACTOR_AGE)?,
            nationality: required_text("nationality", nationality)?,
            role: role.parse()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn role(&self) -> ActorRole {
        self.role
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = required_text("name", name)?;
        Ok(())
    }

    pub fn set_age(&mut self, age: u32) -> Result<(), ValidationError> {
        self.age = at_most("age", age, MAX_ACTOR_AGE)?;
        Ok(())
    }

    pub fn set_nationality(&mut self, nationality: &str) -> Result<(), ValidationError> {
        self.nationality = required_text("nationality", nationality)?;
        Ok(())
    }

    pub fn set_role(&mut self, role: &str) -> Result<(), ValidationError> {
        self.role = role.parse()?;
        Ok(())
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {} years) - {}",
            self.name, self.nationality, self.age, self.role
        )
    }
}

/// Highest academic degree of a researcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcademicDegree {
    Licentiate,
    Master,
    Doctor,
    PhD,
    Engineer,
}

impl AcademicDegree {
    const CHOICES: [(&'static str, AcademicDegree); 5] = [
        ("Lic.", AcademicDegree::Licentiate),
        ("Msc.", AcademicDegree::Master),
        ("Dr.", AcademicDegree::Doctor),
        ("Ph.D.", AcademicDegree::PhD),
        ("Ing.", AcademicDegree::Engineer),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AcademicDegree::Licentiate => "Lic.",
            AcademicDegree::Master => "Msc.",
            AcademicDegree::Doctor => "Dr.",
            AcademicDegree::PhD => "Ph.D.",
            AcademicDegree::Engineer => "Ing.",
        }
    }
}

impl std::fmt::Display for AcademicDegree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcademicDegree {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        canonical("academic degree", s, &Self::CHOICES)
    }
}

/// A researcher contributing to documentaries.
/// Identity is name + specialty.
#[derive(Debug, Clone)]
pub struct Researcher {
    name: String,
    specialty: String,
    institution: String,
    years_experience: u32,
    degree: AcademicDegree,
}

impl PartialEq for Researcher {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.specialty == other.specialty
    }
}

impl Eq for Researcher {}

impl Researcher {
    pub fn new(
        name: &str,
        specialty: &str,
        institution: &str,
        years_experience: u32,
        degree: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", name)?,
            specialty: required_text("specialty", specialty)?,
            institution: required_text("institution", institution)?,
            years_experience: at_most("years of experience", years_experience, MAX_YEARS_EXPERIENCE)?,
            degree: degree.parse()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialty(&self) -> &str {
        &self.specialty
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn years_experience(&self) -> u32 {
        self.years_experience
    }

    pub fn degree(&self) -> AcademicDegree {
        self.degree
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = required_text("name", name)?;
        Ok(())
    }

    pub fn set_specialty(&mut self, specialty: &str) -> Result<(), ValidationError> {
        self.specialty = required_text("specialty", specialty)?;
        Ok(())
    }

    pub fn set_institution(&mut self, institution: &str) -> Result<(), ValidationError> {
        self.institution = required_text("institution", institution)?;
        Ok(())
    }

    pub fn set_years_experience(&mut self, years: u32) -> Result<(), ValidationError> {
        self.years_experience = at_most("years of experience", years, MAX_YEARS_EXPERIENCE)?;
        Ok(())
    }

    pub fn set_degree(&mut self, degree: &str) -> Result<(), ValidationError> {
        self.degree = degree.parse()?;
        Ok(())
    }
}

impl std::fmt::Display for Researcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} - {} ({})",
            self.degree, self.name, self.specialty, self.institution
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_role_is_normalized() {
        let actor = Actor::new("Sam Worthington", 47, "Australian", "principal").unwrap();
        assert_eq!(actor.role(), ActorRole::Principal);
        assert_eq!(actor.role().to_string(), "Principal");
    }

    #[test]
    fn test_actor_rejects_unknown_role() {
        let err = Actor::new("A", 30, "B", "Lead").unwrap_err();
        assert_eq!(err.field, "role");
    }

    #[test]
    fn test_actor_age_bounds() {
        assert!(Actor::new("A", 0, "B", "Extra").is_ok());
        assert!(Actor::new("A", 120, "B", "Extra").is_ok());
        let err = Actor::new("A", 121, "B", "Extra").unwrap_err();
        assert_eq!(err.field, "age");
    }

    #[test]
    fn test_actor_equality_is_name_and_age() {
        let a = Actor::new("Zoe Saldana", 46, "American", "Principal").unwrap();
        let b = Actor::new("Zoe Saldana", 46, "Dominican", "Extra").unwrap();
        let c = Actor::new("zoe saldana", 46, "American", "Principal").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_actor_setter_revalidates() {
        let mut actor = Actor::new("A", 30, "B", "Extra").unwrap();
        assert!(actor.set_name("  ").is_err());
        assert_eq!(actor.name(), "A");
        actor.set_role("SECONDARY").unwrap();
        assert_eq!(actor.role(), ActorRole::Secondary);
    }

    #[test]
    fn test_researcher_degree_is_normalized() {
        let r = Researcher::new("Carl Sagan", "Astronomy", "Cornell", 30, "ph.d.").unwrap();
        assert_eq!(r.degree().as_str(), "Ph.D.");
        assert_eq!(r.to_string(), "Ph.D. Carl Sagan - Astronomy (Cornell)");
    }

    #[test]
    fn test_researcher_experience_bounds() {
        assert!(Researcher::new("A", "B", "C", 60, "Dr.").is_ok());
        let err = Researcher::new("A", "B", "C", 61, "Dr.").unwrap_err();
        assert_eq!(err.field, "years of experience");
    }

    #[test]
    fn test_researcher_equality_is_name_and_specialty() {
        let a = Researcher::new("Ann", "Biology", "MIT", 5, "Msc.").unwrap();
        let b = Researcher::new("Ann", "Biology", "Oxford", 20, "Dr.").unwrap();
        let c = Researcher::new("Ann", "Physics", "MIT", 5, "Msc.").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
