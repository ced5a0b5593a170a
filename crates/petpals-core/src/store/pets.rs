//! Pet listing queries and CRUD.

use chrono::{DateTime, Utc};
use petpals_types::{Category, CreatePetRequest, Pet, PetFilter, UpdatePetRequest};
use rusqlite::{params, params_from_iter, Row};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::query::Predicate;

use super::Database;

/// Columns for a pet row joined with its category, in mapping order.
pub(super) const PET_COLUMNS: &str = "p.id, p.name, p.species, p.breed, p.age, p.gender, \
     p.size, p.distance, p.price, p.description, p.images, p.shelter, p.tags, \
     p.category_id, p.created_at, c.name, c.icon";

pub(super) fn pet_from_row(row: &Row<'_>) -> rusqlite::Result<Pet> {
    let images: String = row.get(10)?;
    let tags: String = row.get(12)?;
    let created_at: String = row.get(14)?;
    let category_id: String = row.get(13)?;

    Ok(Pet {
        id: row.get(0)?,
        name: row.get(1)?,
        species: row.get(2)?,
        breed: row.get(3)?,
        age: row.get(4)?,
        gender: row.get(5)?,
        size: row.get(6)?,
        distance: row.get(7)?,
        price: row.get(8)?,
        description: row.get(9)?,
        images: serde_json::from_str(&images).unwrap_or_default(),
        shelter: row.get(11)?,
        tags: serde_json::from_str(&tags).unwrap_or_default(),
        category: Some(Category {
            id: category_id.clone(),
            name: row.get(15)?,
            icon: row.get(16)?,
        }),
        category_id,
        created_at: parse_timestamp(&created_at),
    })
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc)).unwrap_or_default()
}

impl Database {
    /// List pets matching the filter, newest first.
    ///
    /// The filter is compiled to a [`Predicate`] and translated to SQL; the
    /// same criteria always produce the same statement, so the result order
    /// (`created_at DESC`, id as stable tie-break) is reproducible.
    pub fn list_pets(&self, filter: &PetFilter) -> AppResult<Vec<Pet>> {
        let (fragment, bound) = Predicate::build(filter).to_sql();
        let sql = format!(
            "SELECT {PET_COLUMNS} FROM pets p \
             JOIN categories c ON c.id = p.category_id \
             WHERE {fragment} \
             ORDER BY p.created_at DESC, p.id ASC"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(bound), pet_from_row)?;
        let pets = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!("Listed {} pets", pets.len());
        Ok(pets)
    }

    /// Fetch one pet with its category, or `NotFound`.
    pub fn get_pet(&self, id: &str) -> AppResult<Pet> {
        let sql = format!(
            "SELECT {PET_COLUMNS} FROM pets p \
             JOIN categories c ON c.id = p.category_id \
             WHERE p.id = ?"
        );
        self.conn
            .query_row(&sql, params![id], pet_from_row)
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => AppError::not_found("Pet"),
                other => other.into(),
            })
    }

    /// Insert a new pet and return it with its category joined.
    pub fn create_pet(&self, req: &CreatePetRequest) -> AppResult<Pet> {
        if !self.category_exists(&req.category_id)? {
            return Err(AppError::not_found("Category"));
        }

        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO pets (id, name, species, breed, age, gender, size, distance, \
             price, description, images, shelter, tags, category_id, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                id,
                req.name,
                req.species,
                req.breed,
                req.age,
                req.gender,
                req.size,
                req.distance,
                req.price,
                req.description,
                serde_json::to_string(&req.images)?,
                req.shelter,
                serde_json::to_string(&req.tags)?,
                req.category_id,
                now.to_rfc3339(),
            ],
        )?;
        tracing::info!("Created pet {} ({})", req.name, id);
        self.get_pet(&id)
    }

    /// Partial update; absent fields keep their stored value.
    pub fn update_pet(&self, id: &str, req: &UpdatePetRequest) -> AppResult<Pet> {
        let mut pet = self.get_pet(id)?;

        if let Some(name) = &req.name {
            pet.name = name.clone();
        }
        if let Some(species) = &req.species {
            pet.species = species.clone();
        }
        if let Some(breed) = &req.breed {
            pet.breed = breed.clone();
        }
        if let Some(age) = req.age {
            pet.age = age;
        }
        if let Some(gender) = &req.gender {
            pet.gender = gender.clone();
        }
        if let Some(size) = &req.size {
            pet.size = size.clone();
        }
        if let Some(distance) = req.distance {
            pet.distance = distance;
        }
        if let Some(price) = req.price {
            pet.price = price;
        }
        if let Some(description) = &req.description {
            pet.description = description.clone();
        }
        if let Some(images) = &req.images {
            pet.images = images.clone();
        }
        if let Some(shelter) = &req.shelter {
            pet.shelter = shelter.clone();
        }
        if let Some(tags) = &req.tags {
            pet.tags = tags.clone();
        }
        if let Some(category_id) = &req.category_id {
            if !self.category_exists(category_id)? {
                return Err(AppError::not_found("Category"));
            }
            pet.category_id = category_id.clone();
        }

        self.conn.execute(
            "UPDATE pets SET name = ?1, species = ?2, breed = ?3, age = ?4, gender = ?5, \
             size = ?6, distance = ?7, price = ?8, description = ?9, images = ?10, \
             shelter = ?11, tags = ?12, category_id = ?13 WHERE id = ?14",
            params![
                pet.name,
                pet.species,
                pet.breed,
                pet.age,
                pet.gender,
                pet.size,
                pet.distance,
                pet.price,
                pet.description,
                serde_json::to_string(&pet.images)?,
                pet.shelter,
                serde_json::to_string(&pet.tags)?,
                pet.category_id,
                id,
            ],
        )?;
        self.get_pet(id)
    }

    /// Delete a pet; favorites referencing it cascade away.
    pub fn delete_pet(&self, id: &str) -> AppResult<()> {
        let affected = self.conn.execute("DELETE FROM pets WHERE id = ?", params![id])?;
        if affected == 0 {
            return Err(AppError::not_found("Pet"));
        }
        tracing::info!("Deleted pet {}", id);
        Ok(())
    }
}
