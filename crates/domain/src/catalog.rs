use std::collections::{HashMap, hash_map::Entry};

use log::warn;

use crate::{
    DatasetError, Difficulty, Exercise, ExerciseId, Force, Grip, Mechanic, Name,
    dataset::{self, Header, columns},
    keywords,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    index: HashMap<ExerciseId, usize>,
    collisions: usize,
}

impl Catalog {
    pub fn from_dataset(text: &str) -> Result<Self, DatasetError> {
        let mut lines = text.lines();
        let header = Header::parse(lines.next().ok_or(DatasetError::Empty)?)?;

        let mut exercises: Vec<Exercise> = Vec::new();
        let mut index = HashMap::new();
        let mut collisions = 0;

        for (number, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let fields = dataset::split_row(line, dataset::DELIMITER);
            if fields.len() != header.len() {
                warn!(
                    "skipping row {}: expected {} fields, found {}",
                    number + 2,
                    header.len(),
                    fields.len()
                );
                continue;
            }

            let Some(exercise) = exercise_from_row(&header, &fields) else {
                warn!("skipping row {}: required field is empty", number + 2);
                continue;
            };

            match index.entry(exercise.id.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(exercises.len());
                }
                Entry::Occupied(entry) => {
                    warn!(
                        "id collision between \"{}\" and \"{}\" ({})",
                        exercises[*entry.get()].name,
                        exercise.name,
                        exercise.id
                    );
                    collisions += 1;
                }
            }

            exercises.push(exercise);
        }

        Ok(Self {
            exercises,
            index,
            collisions,
        })
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseId) -> Option<&Exercise> {
        self.index.get(id).map(|position| &self.exercises[*position])
    }

    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Exercise> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn collision_count(&self) -> usize {
        self.collisions
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Exercise;
    type IntoIter = std::slice::Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn exercise_from_row(header: &Header, fields: &[String]) -> Option<Exercise> {
    let muscle_group = Name::new(header.field(fields, columns::MUSCLE_GROUP)).ok()?;
    let name = Name::new(header.field(fields, columns::EXERCISE_NAME)).ok()?;
    let equipment = Name::new(header.field(fields, columns::EQUIPMENT)).ok()?;

    let difficulty = dataset::enum_or_default::<Difficulty>(
        header.field(fields, columns::DIFFICULTY),
        columns::DIFFICULTY,
    );
    let force = dataset::optional_enum::<Force>(header.field(fields, columns::FORCE), columns::FORCE);
    let grip = dataset::optional_enum::<Grip>(header.field(fields, columns::GRIPS), columns::GRIPS);
    let mechanic = dataset::optional_enum::<Mechanic>(
        header.field(fields, columns::MECHANIC),
        columns::MECHANIC,
    );

    let id = ExerciseId::from_parts(muscle_group.as_str(), name.as_str());
    let search_keywords =
        keywords::search_keywords(&name, &muscle_group, &equipment, difficulty, force);

    Some(Exercise {
        id,
        muscle_group,
        name,
        equipment,
        video_links: dataset::split_list(header.field(fields, columns::VIDEO_LINKS), ','),
        difficulty,
        force,
        grip,
        mechanic,
        instructions: dataset::split_list(header.field(fields, columns::INSTRUCTIONS), '|'),
        search_keywords,
    })
}
