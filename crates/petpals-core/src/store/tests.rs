use petpals_types::{CreatePetRequest, PetFilter, RegisterRequest, UpdatePetRequest};

use super::*;
use crate::error::AppError;
use crate::query::Predicate;
use crate::store::FavoriteAdd;

fn seeded() -> Database {
    let db = Database::open_in_memory().expect("open in-memory db");
    db.seed().expect("seed");
    db
}

fn register(db: &Database, email: &str) -> String {
    db.create_user(&RegisterRequest {
        email: email.to_string(),
        password: "password123".to_string(),
        name: "Test User".to_string(),
    })
    .expect("create user")
    .id
}

#[test]
fn test_seed_is_idempotent() {
    let db = seeded();
    db.seed().expect("second seed");
    let categories = db.list_categories().expect("list categories");
    assert_eq!(categories.len(), 5);
}

#[test]
fn test_list_pets_newest_first() {
    let db = seeded();
    let pets = db.list_pets(&PetFilter::any()).expect("list");
    assert!(!pets.is_empty());
    for pair in pets.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn test_list_pets_joins_category() {
    let db = seeded();
    let pets = db.list_pets(&PetFilter::any()).expect("list");
    assert!(pets.iter().all(|p| p.category.is_some()));
}

#[test]
fn test_filter_by_species_via_sql() {
    let db = seeded();
    let filter = PetFilter { species: Some("Cat".to_string()), ..Default::default() };
    let pets = db.list_pets(&filter).expect("list");
    assert!(!pets.is_empty());
    assert!(pets.iter().all(|p| p.species == "Cat"));
}

#[test]
fn test_cat_age_window_via_sql() {
    let db = seeded();
    let filter = PetFilter {
        species: Some("Cat".to_string()),
        min_age: Some(12),
        max_age: Some(24),
        ..Default::default()
    };
    let mut names: Vec<String> =
        db.list_pets(&filter).expect("list").into_iter().map(|p| p.name).collect();
    names.sort();
    assert_eq!(names, vec!["Milo", "Shadow"]);
}

#[test]
fn test_search_via_sql_is_case_insensitive() {
    let db = seeded();
    let filter = PetFilter { search: Some("LUNA".to_string()), ..Default::default() };
    let pets = db.list_pets(&filter).expect("list");
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].name, "Luna");
}

#[test]
fn test_search_and_species_compose_via_sql() {
    let db = seeded();
    let filter = PetFilter {
        species: Some("Cat".to_string()),
        search: Some("luna".to_string()),
        ..Default::default()
    };
    // Luna is a Dog; AND composition must exclude her.
    assert!(db.list_pets(&filter).expect("list").is_empty());
}

#[test]
fn test_wildcard_search_matches_literally_via_sql() {
    let db = seeded();

    // No seeded pet contains a literal '%' or '_', so neither may match.
    let percent = PetFilter { search: Some("%".to_string()), ..Default::default() };
    assert!(db.list_pets(&percent).expect("list").is_empty());
    let underscore = PetFilter { search: Some("_".to_string()), ..Default::default() };
    assert!(db.list_pets(&underscore).expect("list").is_empty());

    let created = db
        .create_pet(&CreatePetRequest {
            name: "Domino".to_string(),
            species: "Dog".to_string(),
            breed: "Dalmatian".to_string(),
            age: 30,
            gender: "Male".to_string(),
            size: "Large".to_string(),
            distance: 2.0,
            price: 150,
            description: "50% deaf, all heart".to_string(),
            images: vec![],
            shelter: "Happy Paws".to_string(),
            tags: vec![],
            category_id: "cat-1".to_string(),
        })
        .expect("create");

    let filter = PetFilter { search: Some("50%".to_string()), ..Default::default() };
    let pets = db.list_pets(&filter).expect("list");
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].id, created.id);

    // Both evaluation paths agree on the same needle.
    let predicate = Predicate::build(&filter);
    assert!(pets.iter().all(|p| predicate.matches(p)));
}

#[test]
fn test_get_pet_not_found() {
    let db = seeded();
    let err = db.get_pet("missing").expect_err("should fail");
    assert!(err.is_not_found());
}

#[test]
fn test_create_update_delete_pet() {
    let db = seeded();
    let created = db
        .create_pet(&CreatePetRequest {
            name: "Nori".to_string(),
            species: "Rabbit".to_string(),
            breed: "Holland Lop".to_string(),
            age: 10,
            gender: "Female".to_string(),
            size: "Small".to_string(),
            distance: 3.0,
            price: 90,
            description: "Gentle lop".to_string(),
            images: vec!["https://example.com/nori.jpg".to_string()],
            shelter: "Burrow House".to_string(),
            tags: vec!["quiet".to_string()],
            category_id: "cat-5".to_string(),
        })
        .expect("create");
    assert_eq!(created.category.as_ref().map(|c| c.name.as_str()), Some("Rabbit"));

    let updated = db
        .update_pet(&created.id, &UpdatePetRequest { age: Some(11), ..Default::default() })
        .expect("update");
    assert_eq!(updated.age, 11);
    // Untouched fields survive a partial update.
    assert_eq!(updated.name, "Nori");
    assert_eq!(updated.images, created.images);

    db.delete_pet(&created.id).expect("delete");
    assert!(db.get_pet(&created.id).expect_err("gone").is_not_found());
}

#[test]
fn test_create_pet_unknown_category() {
    let db = seeded();
    let err = db
        .create_pet(&CreatePetRequest {
            name: "Ghost".to_string(),
            species: "Dog".to_string(),
            breed: "Mix".to_string(),
            age: 12,
            gender: "Male".to_string(),
            size: "Medium".to_string(),
            distance: 1.0,
            price: 100,
            description: "x".to_string(),
            images: vec![],
            shelter: "x".to_string(),
            tags: vec![],
            category_id: "no-such-category".to_string(),
        })
        .expect_err("should fail");
    assert!(err.is_not_found());
}

#[test]
fn test_login_round_trip() {
    let db = seeded();
    let user = db.verify_login("demo@petpals.com", "password123").expect("login");
    assert_eq!(user.name, "Justine Demo");

    let err = db.verify_login("demo@petpals.com", "wrong").expect_err("bad password");
    assert!(matches!(err, AppError::InvalidCredentials));
    let err = db.verify_login("nobody@petpals.com", "password123").expect_err("bad email");
    assert!(matches!(err, AppError::InvalidCredentials));
}

#[test]
fn test_duplicate_email_rejected() {
    let db = seeded();
    let err = db
        .create_user(&RegisterRequest {
            email: "demo@petpals.com".to_string(),
            password: "another123".to_string(),
            name: "Other".to_string(),
        })
        .expect_err("should fail");
    assert!(matches!(err, AppError::EmailTaken));
}

#[test]
fn test_favorite_add_remove_check() {
    let db = seeded();
    let user_id = register(&db, "fan@petpals.com");

    assert!(!db.is_favorite(&user_id, "pet-1").expect("check"));
    assert_eq!(db.add_favorite(&user_id, "pet-1").expect("add"), FavoriteAdd::Added);
    assert!(db.is_favorite(&user_id, "pet-1").expect("check"));

    db.remove_favorite(&user_id, "pet-1").expect("remove");
    assert!(!db.is_favorite(&user_id, "pet-1").expect("check"));
}

#[test]
fn test_duplicate_add_is_idempotent() {
    let db = seeded();
    let user_id = register(&db, "fan@petpals.com");

    assert_eq!(db.add_favorite(&user_id, "pet-2").expect("add"), FavoriteAdd::Added);
    assert_eq!(db.add_favorite(&user_id, "pet-2").expect("re-add"), FavoriteAdd::AlreadyPresent);
    assert_eq!(db.list_favorites(&user_id).expect("list").len(), 1);
}

#[test]
fn test_add_favorite_unknown_pet() {
    let db = seeded();
    let user_id = register(&db, "fan@petpals.com");
    let err = db.add_favorite(&user_id, "missing").expect_err("should fail");
    assert!(err.is_not_found());
}

#[test]
fn test_remove_missing_favorite() {
    let db = seeded();
    let user_id = register(&db, "fan@petpals.com");
    let err = db.remove_favorite(&user_id, "pet-1").expect_err("should fail");
    assert!(err.is_not_found());
}

#[test]
fn test_favorites_newest_first_with_full_pets() {
    let db = seeded();
    let user_id = register(&db, "fan@petpals.com");
    db.add_favorite(&user_id, "pet-1").expect("add");
    db.add_favorite(&user_id, "pet-3").expect("add");

    let favorites = db.list_favorites(&user_id).expect("list");
    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|p| p.category.is_some()));
}

#[test]
fn test_get_category_with_pets() {
    let db = seeded();
    let cats = db.get_category("cat-2").expect("get");
    assert_eq!(cats.category.name, "Cat");
    assert!(cats.pets.iter().all(|p| p.category_id == "cat-2"));
    assert!(!cats.pets.is_empty());

    assert!(db.get_category("missing").expect_err("gone").is_not_found());
}
