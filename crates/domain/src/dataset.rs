use std::collections::HashMap;

use log::debug;

use crate::{DatasetError, Property};

pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';

const NO_VALUE: &str = "-";

pub mod columns {
    pub const MUSCLE_GROUP: &str = "Muscle Group";
    pub const EXERCISE_NAME: &str = "Exercise Name";
    pub const EQUIPMENT: &str = "Equipment";
    pub const VIDEO_LINKS: &str = "Video Links";
    pub const DIFFICULTY: &str = "Difficulty";
    pub const FORCE: &str = "Force";
    pub const GRIPS: &str = "Grips";
    pub const MECHANIC: &str = "Mechanic";
    pub const INSTRUCTIONS: &str = "Instructions";

    pub const ALL: [&str; 9] = [
        MUSCLE_GROUP,
        EXERCISE_NAME,
        EQUIPMENT,
        VIDEO_LINKS,
        DIFFICULTY,
        FORCE,
        GRIPS,
        MECHANIC,
        INSTRUCTIONS,
    ];
}

#[must_use]
pub fn split_row(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;

    for c in line.chars() {
        if c == QUOTE {
            quoted = !quoted;
        } else if c == delimiter && !quoted {
            fields.push(field.trim().to_string());
            field.clear();
        } else {
            field.push(c);
        }
    }
    fields.push(field.trim().to_string());

    fields
}

#[must_use]
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub(crate) fn optional_enum<P: Property>(raw: &str, column: &str) -> Option<P> {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed == NO_VALUE {
        return None;
    }

    let value = P::from_label(trimmed);
    if value.is_none() {
        debug!("unrecognized {column} value \"{trimmed}\"");
    }
    value
}

pub(crate) fn enum_or_default<P: Property + Default>(raw: &str, column: &str) -> P {
    optional_enum(raw, column).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    positions: HashMap<String, usize>,
    len: usize,
}

impl Header {
    pub fn parse(line: &str) -> Result<Self, DatasetError> {
        let fields = split_row(line, DELIMITER);
        let positions = fields
            .iter()
            .enumerate()
            .map(|(position, field)| (field.clone(), position))
            .collect::<HashMap<_, _>>();

        for column in columns::ALL {
            if !positions.contains_key(column) {
                return Err(DatasetError::MissingColumn(column.to_string()));
            }
        }

        Ok(Self {
            positions,
            len: fields.len(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn field<'a>(&self, fields: &'a [String], column: &str) -> &'a str {
        self.positions
            .get(column)
            .and_then(|position| fields.get(*position))
            .map_or("", String::as_str)
    }
}
