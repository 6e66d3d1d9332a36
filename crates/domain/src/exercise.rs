use std::{collections::HashSet, slice::Iter};

use derive_more::{AsRef, Display};

use crate::Name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseId,
    pub muscle_group: Name,
    pub name: Name,
    pub equipment: Name,
    pub video_links: Vec<String>,
    pub difficulty: Difficulty,
    pub force: Option<Force>,
    pub grip: Option<Grip>,
    pub mechanic: Option<Mechanic>,
    pub instructions: Vec<String>,
    pub search_keywords: HashSet<String>,
}

#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseId(String);

impl ExerciseId {
    #[must_use]
    pub fn from_parts(muscle_group: &str, name: &str) -> Self {
        Self(format!("{}-{}", slug(muscle_group), slug(name)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExerciseId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

fn slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub trait Property: Clone + Copy + PartialEq + Sized + 'static {
    fn iter() -> Iter<'static, Self>;

    fn name(self) -> &'static str;

    #[must_use]
    fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|p| p.name() == label).copied()
    }
}

#[derive(Clone, Copy, Default, Debug, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Novice,
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 5] = [
            Difficulty::Novice,
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
            Difficulty::Expert,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Novice => "Novice",
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Force {
    Push,
    Pull,
    Hold,
    Static,
}

impl Property for Force {
    fn iter() -> Iter<'static, Force> {
        static FORCE: [Force; 4] = [Force::Push, Force::Pull, Force::Hold, Force::Static];
        FORCE.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Force::Push => "Push",
            Force::Pull => "Pull",
            Force::Hold => "Hold",
            Force::Static => "Static",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Grip {
    OverhandPronated,
    UnderhandSupinated,
    Neutral,
    Mixed,
    Hook,
    Wide,
    Narrow,
}

impl Property for Grip {
    fn iter() -> Iter<'static, Grip> {
        static GRIP: [Grip; 7] = [
            Grip::OverhandPronated,
            Grip::UnderhandSupinated,
            Grip::Neutral,
            Grip::Mixed,
            Grip::Hook,
            Grip::Wide,
            Grip::Narrow,
        ];
        GRIP.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Grip::OverhandPronated => "Overhand: Pronated",
            Grip::UnderhandSupinated => "Underhand: Supinated",
            Grip::Neutral => "Neutral",
            Grip::Mixed => "Mixed",
            Grip::Hook => "Hook",
            Grip::Wide => "Wide",
            Grip::Narrow => "Narrow",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mechanic {
    Isolation,
    Compound,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Isolation, Mechanic::Compound];
        MECHANIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Mechanic::Isolation => "Isolation",
            Mechanic::Compound => "Compound",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Biceps", "Barbell Curl", "biceps-barbell-curl")]
    #[case("Chest", "Dumbbell Incline Bench Press", "chest-dumbbell-incline-bench-press")]
    #[case("Back", "Stiff-Legged Deadlift", "back-stifflegged-deadlift")]
    #[case("  Legs  ", "90/90 Hip  Stretch!", "legs-9090-hip-stretch")]
    #[case("SHOULDERS", "Arnold Press", "shoulders-arnold-press")]
    fn test_exercise_id_from_parts(
        #[case] muscle_group: &str,
        #[case] name: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            ExerciseId::from_parts(muscle_group, name),
            ExerciseId::from(expected)
        );
    }

    #[test]
    fn test_exercise_id_deterministic() {
        assert_eq!(
            ExerciseId::from_parts("Biceps", "Barbell Curl"),
            ExerciseId::from_parts("Biceps", "Barbell Curl")
        );
    }

    #[rstest]
    #[case("Novice", Some(Difficulty::Novice))]
    #[case("Beginner", Some(Difficulty::Beginner))]
    #[case("Expert", Some(Difficulty::Expert))]
    #[case("expert", None)]
    #[case("Elite", None)]
    fn test_difficulty_from_label(#[case] label: &str, #[case] expected: Option<Difficulty>) {
        assert_eq!(Difficulty::from_label(label), expected);
    }

    #[rstest]
    #[case("Overhand: Pronated", Some(Grip::OverhandPronated))]
    #[case("Underhand: Supinated", Some(Grip::UnderhandSupinated))]
    #[case("Neutral", Some(Grip::Neutral))]
    #[case("Underhand", None)]
    fn test_grip_from_label(#[case] label: &str, #[case] expected: Option<Grip>) {
        assert_eq!(Grip::from_label(label), expected);
    }

    #[test]
    fn test_difficulty_default() {
        assert_eq!(Difficulty::default(), Difficulty::Beginner);
    }

    #[test]
    fn test_force_name() {
        let mut names = HashSet::new();

        for force in Force::iter() {
            let name = force.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_grip_name() {
        let mut names = HashSet::new();

        for grip in Grip::iter() {
            let name = grip.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_mechanic_name() {
        let mut names = HashSet::new();

        for mechanic in Mechanic::iter() {
            let name = mechanic.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }
}
