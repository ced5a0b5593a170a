//! Demo data for local development.

use chrono::{Duration, Utc};
use petpals_types::RegisterRequest;
use rusqlite::params;

use crate::error::AppResult;

use super::Database;

struct SeedPet {
    name: &'static str,
    species: &'static str,
    breed: &'static str,
    age: u32,
    gender: &'static str,
    size: &'static str,
    distance: f64,
    price: u32,
    description: &'static str,
    shelter: &'static str,
    tags: &'static [&'static str],
    category: &'static str,
}

const SEED_PETS: &[SeedPet] = &[
    SeedPet {
        name: "Luna",
        species: "Dog",
        breed: "Siberian Husky",
        age: 36,
        gender: "Female",
        size: "Large",
        distance: 0.9,
        price: 820,
        description: "Luna is a majestic Husky who adores quiet walks and cuddles. \
            Family-friendly with kids and dreams of a loving home that loves adventures.",
        shelter: "Happy Paws Shelter",
        tags: &["friendly", "trained"],
        category: "Dog",
    },
    SeedPet {
        name: "Milo",
        species: "Cat",
        breed: "Orange Tabby",
        age: 20,
        gender: "Male",
        size: "Small",
        distance: 2.3,
        price: 150,
        description: "Milo is a curious tabby who naps in sunbeams and chases bottle caps.",
        shelter: "Whisker Haven",
        tags: &["playful", "indoor"],
        category: "Cat",
    },
    SeedPet {
        name: "Shadow",
        species: "Cat",
        breed: "Bombay",
        age: 15,
        gender: "Female",
        size: "Small",
        distance: 4.1,
        price: 200,
        description: "Shadow is a sleek black cat, shy at first but endlessly affectionate.",
        shelter: "Whisker Haven",
        tags: &["calm", "affectionate"],
        category: "Cat",
    },
    SeedPet {
        name: "Rex",
        species: "Dog",
        breed: "German Shepherd",
        age: 48,
        gender: "Male",
        size: "Large",
        distance: 6.7,
        price: 650,
        description: "Rex is a loyal shepherd, great with older kids and long hikes.",
        shelter: "Happy Paws Shelter",
        tags: &["loyal", "active"],
        category: "Dog",
    },
    SeedPet {
        name: "Kiwi",
        species: "Bird",
        breed: "Budgerigar",
        age: 8,
        gender: "Female",
        size: "Small",
        distance: 1.5,
        price: 60,
        description: "Kiwi is a chatty budgie who loves millet and mirrors.",
        shelter: "Feather Friends",
        tags: &["vocal"],
        category: "Birds",
    },
];

const SEED_CATEGORIES: &[(&str, &str)] = &[
    ("Dog", "\u{1F415}"),
    ("Cat", "\u{1F431}"),
    ("Birds", "\u{1F99C}"),
    ("Fish", "\u{1F420}"),
    ("Rabbit", "\u{1F430}"),
];

impl Database {
    /// Populate demo data: one demo user, the category set, and sample pets.
    ///
    /// Idempotent: a database that already has categories is left untouched.
    pub fn seed(&self) -> AppResult<()> {
        let existing: u32 =
            self.conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        if existing > 0 {
            tracing::debug!("Seed skipped: database already populated");
            return Ok(());
        }

        self.create_user(&RegisterRequest {
            email: "demo@petpals.com".to_string(),
            password: "password123".to_string(),
            name: "Justine Demo".to_string(),
        })?;

        for (index, (name, icon)) in SEED_CATEGORIES.iter().enumerate() {
            self.conn.execute(
                "INSERT INTO categories (id, name, icon) VALUES (?1, ?2, ?3)",
                params![format!("cat-{}", index + 1), name, icon],
            )?;
        }

        // Staggered timestamps so the newest-first ordering is deterministic.
        let base = Utc::now() - Duration::hours(SEED_PETS.len() as i64);
        for (index, pet) in SEED_PETS.iter().enumerate() {
            let category_id = SEED_CATEGORIES
                .iter()
                .position(|(name, _)| *name == pet.category)
                .map(|pos| format!("cat-{}", pos + 1))
                .unwrap_or_else(|| "cat-1".to_string());
            self.conn.execute(
                "INSERT INTO pets (id, name, species, breed, age, gender, size, distance, \
                 price, description, images, shelter, tags, category_id, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
                params![
                    format!("pet-{}", index + 1),
                    pet.name,
                    pet.species,
                    pet.breed,
                    pet.age,
                    pet.gender,
                    pet.size,
                    pet.distance,
                    pet.price,
                    pet.description,
                    "[]",
                    pet.shelter,
                    serde_json::to_string(pet.tags)?,
                    category_id,
                    (base + Duration::hours(index as i64)).to_rfc3339(),
                ],
            )?;
        }

        tracing::info!(
            "Seeded demo data: {} categories, {} pets",
            SEED_CATEGORIES.len(),
            SEED_PETS.len()
        );
        Ok(())
    }
}
