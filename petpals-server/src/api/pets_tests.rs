use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

use petpals_types::{CreatePetRequest, PetFilter, UpdatePetRequest};

use super::pets::{create, get_one, list, remove, update};
use crate::test_helpers::test_app_state;

fn new_pet() -> CreatePetRequest {
    CreatePetRequest {
        name: "Nori".to_string(),
        species: "Rabbit".to_string(),
        breed: "Holland Lop".to_string(),
        age: 10,
        gender: "Female".to_string(),
        size: "Small".to_string(),
        distance: 3.0,
        price: 90,
        description: "Gentle lop".to_string(),
        images: vec![],
        shelter: "Burrow House".to_string(),
        tags: vec![],
        category_id: "cat-5".to_string(),
    }
}

#[tokio::test]
async fn test_list_unfiltered_returns_seeded_pets() {
    let state = test_app_state();
    let Json(pets) = list(State(state), Query(PetFilter::any())).await.expect("list");
    assert_eq!(pets.len(), 5);
    for pair in pets.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_list_applies_filter() {
    let state = test_app_state();
    let filter = PetFilter {
        species: Some("Cat".to_string()),
        min_age: Some(12),
        max_age: Some(24),
        ..Default::default()
    };
    let Json(pets) = list(State(state), Query(filter)).await.expect("list");
    let mut names: Vec<_> = pets.into_iter().map(|p| p.name).collect();
    names.sort();
    assert_eq!(names, vec!["Milo", "Shadow"]);
}

#[tokio::test]
async fn test_get_missing_pet_is_404() {
    let state = test_app_state();
    let err = get_one(State(state), Path("missing".to_string())).await.expect_err("404");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.message(), "Pet not found");
}

#[tokio::test]
async fn test_create_and_fetch_pet() {
    let state = test_app_state();
    let Json(created) = create(State(state.clone()), Json(new_pet())).await.expect("create");
    assert_eq!(created.name, "Nori");
    assert!(created.category.is_some());

    let Json(fetched) =
        get_one(State(state), Path(created.id.clone())).await.expect("fetch");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let state = test_app_state();
    let mut payload = new_pet();
    payload.name = String::new();
    let err = create(State(state), Json(payload)).await.expect_err("validation");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update() {
    let state = test_app_state();
    let Json(created) = create(State(state.clone()), Json(new_pet())).await.expect("create");

    let patch = UpdatePetRequest { price: Some(120), ..Default::default() };
    let Json(updated) =
        update(State(state), Path(created.id), Json(patch)).await.expect("update");
    assert_eq!(updated.price, 120);
    assert_eq!(updated.name, "Nori");
}

#[tokio::test]
async fn test_delete_pet() {
    let state = test_app_state();
    let Json(created) = create(State(state.clone()), Json(new_pet())).await.expect("create");

    let Json(ack) =
        remove(State(state.clone()), Path(created.id.clone())).await.expect("delete");
    assert_eq!(ack.message, "Pet deleted successfully");

    let err = get_one(State(state), Path(created.id)).await.expect_err("gone");
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}
