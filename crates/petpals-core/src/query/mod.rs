//! Composable search predicate for pet listings.
//!
//! [`Predicate::build`] turns a [`PetFilter`] into an AND of typed clauses,
//! one per present criterion. The clause AST has two consumers: in-memory
//! evaluation via [`Predicate::matches`], and translation to a parameterized
//! SQLite `WHERE` fragment via [`Predicate::to_sql`]. The builder itself is
//! pure and performs no validation; malformed ranges simply select nothing.

use petpals_types::{Pet, PetFilter};
use rusqlite::types::Value;


/// A pet column a clause can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Species,
    Breed,
    Gender,
    Size,
    CategoryId,
    Description,
}

impl Field {
    /// SQL column name in the `pets` table.
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Species => "species",
            Self::Breed => "breed",
            Self::Gender => "gender",
            Self::Size => "size",
            Self::CategoryId => "category_id",
            Self::Description => "description",
        }
    }

    fn get(self, pet: &Pet) -> &str {
        match self {
            Self::Name => &pet.name,
            Self::Species => &pet.species,
            Self::Breed => &pet.breed,
            Self::Gender => &pet.gender,
            Self::Size => &pet.size,
            Self::CategoryId => &pet.category_id,
            Self::Description => &pet.description,
        }
    }
}

/// One atomic test derived from one filter criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Exact match on a scalar field.
    Equals { field: Field, value: String },
    /// Case-insensitive substring containment on one field.
    Contains { field: Field, value: String },
    /// Inclusive age range; an absent bound is unbounded on that side.
    AgeRange { min: Option<u32>, max: Option<u32> },
    /// True when ANY of the fields contains the value, case-insensitively.
    AnyContains { fields: Vec<Field>, value: String },
}

impl Clause {
    fn matches(&self, pet: &Pet) -> bool {
        match self {
            Self::Equals { field, value } => field.get(pet) == value,
            Self::Contains { field, value } => contains_ci(field.get(pet), value),
            Self::AgeRange { min, max } => {
                min.is_none_or(|lo| pet.age >= lo) && max.is_none_or(|hi| pet.age <= hi)
            }
            Self::AnyContains { fields, value } => {
                fields.iter().any(|field| contains_ci(field.get(pet), value))
            }
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Conjunction of [`Clause`]s; zero clauses accepts every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Build a predicate from optional filter criteria.
    ///
    /// Absent fields contribute no clause. `search` is trimmed first and
    /// treated as absent when empty; otherwise it expands to a single
    /// [`Clause::AnyContains`] over name, breed, and description that
    /// narrows (ANDs with) the other clauses.
    pub fn build(filter: &PetFilter) -> Self {
        let mut clauses = Vec::new();

        if let Some(species) = &filter.species {
            clauses.push(Clause::Equals { field: Field::Species, value: species.clone() });
        }
        if let Some(breed) = &filter.breed {
            clauses.push(Clause::Contains { field: Field::Breed, value: breed.clone() });
        }
        if filter.min_age.is_some() || filter.max_age.is_some() {
            clauses.push(Clause::AgeRange { min: filter.min_age, max: filter.max_age });
        }
        if let Some(gender) = &filter.gender {
            clauses.push(Clause::Equals { field: Field::Gender, value: gender.clone() });
        }
        if let Some(size) = &filter.size {
            clauses.push(Clause::Equals { field: Field::Size, value: size.clone() });
        }
        if let Some(category_id) = &filter.category_id {
            clauses.push(Clause::Equals { field: Field::CategoryId, value: category_id.clone() });
        }
        if let Some(search) = &filter.search {
            let needle = search.trim();
            if !needle.is_empty() {
                clauses.push(Clause::AnyContains {
                    fields: vec![Field::Name, Field::Breed, Field::Description],
                    value: needle.to_string(),
                });
            }
        }

        Self { clauses }
    }

    /// The composed clauses, for executors that pattern-match directly.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// True when no criterion produced a clause (identity TRUE).
    pub fn is_trivial(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluate against a single record in memory.
    pub fn matches(&self, pet: &Pet) -> bool {
        self.clauses.iter().all(|clause| clause.matches(pet))
    }

    /// Translate to a SQLite `WHERE` fragment plus bound parameters.
    ///
    /// The trivial predicate yields `"1"` so callers can always interpolate
    /// the fragment after `WHERE`. Needles bound to `LIKE` placeholders have
    /// `%`, `_`, and `\` escaped, keeping SQL evaluation in agreement with
    /// [`Predicate::matches`].
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        if self.clauses.is_empty() {
            return ("1".to_string(), Vec::new());
        }

        let mut fragments = Vec::with_capacity(self.clauses.len());
        let mut params = Vec::new();

        for clause in &self.clauses {
            match clause {
                Clause::Equals { field, value } => {
                    fragments.push(format!("p.{} = ?", field.column()));
                    params.push(Value::Text(value.clone()));
                }
                Clause::Contains { field, value } => {
                    fragments.push(like_fragment(*field));
                    params.push(Value::Text(escape_like(value)));
                }
                Clause::AgeRange { min, max } => {
                    if let Some(lo) = min {
                        fragments.push("p.age >= ?".to_string());
                        params.push(Value::Integer(i64::from(*lo)));
                    }
                    if let Some(hi) = max {
                        fragments.push("p.age <= ?".to_string());
                        params.push(Value::Integer(i64::from(*hi)));
                    }
                }
                Clause::AnyContains { fields, value } => {
                    let alternatives: Vec<String> =
                        fields.iter().map(|field| like_fragment(*field)).collect();
                    fragments.push(format!("({})", alternatives.join(" OR ")));
                    let escaped = escape_like(value);
                    for _ in fields {
                        params.push(Value::Text(escaped.clone()));
                    }
                }
            }
        }

        (fragments.join(" AND "), params)
    }
}

fn like_fragment(field: Field) -> String {
    format!("LOWER(p.{}) LIKE '%' || LOWER(?) || '%' ESCAPE '\\'", field.column())
}

/// Containment needles are literal substrings, never LIKE patterns.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
