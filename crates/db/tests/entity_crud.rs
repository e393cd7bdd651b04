//! Integration tests for catalog entity CRUD.
//!
//! Exercises the repository layer against a real database:
//! - Create and list round trips
//! - Full-record update and update of a missing row
//! - Delete of existing and missing rows
//! - Join display fields on artwork and collection listings
//! - Store-side delete semantics (SET NULL / CASCADE)

use assert_matches::assert_matches;
use rust_decimal::Decimal;
use sqlx::PgPool;

use museum_core::forms::artist::{ArtistForm, ArtistInput};
use museum_core::forms::artwork::ArtworkInput;
use museum_core::forms::collection::CollectionInput;
use museum_core::forms::museum::MuseumInput;
use museum_db::repositories::{ArtistRepo, ArtworkRepo, CollectionRepo, MuseumRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_artist(name: &str) -> ArtistInput {
    ArtistInput {
        name: name.to_string(),
        birth_date: None,
        death_date: None,
        is_living: false,
        birth_place: None,
        death_place: None,
        nationality: None,
        art_movement: None,
        primary_medium: None,
        bio: None,
        website: None,
        image_url: None,
        instagram: None,
    }
}

fn new_artwork(artist_id: i64, title: &str) -> ArtworkInput {
    ArtworkInput {
        title: title.to_string(),
        artist_id,
        medium: None,
        art_movement: None,
        subject: None,
        creation_date: None,
        dimension_h: None,
        dimension_w: None,
        dimension_d: None,
        dimension_unit: "inches".to_string(),
        weight: None,
        weight_unit: "lbs".to_string(),
        estimated_value: None,
        description: None,
        image_url: None,
        is_signed: false,
        signature_location: None,
    }
}

fn new_museum(name: &str) -> MuseumInput {
    MuseumInput {
        name: name.to_string(),
        museum_type: None,
        address: None,
        city: "Paris".to_string(),
        state_province: None,
        country: "France".to_string(),
        postal_code: None,
        established_date: None,
        website: None,
        phone: None,
        email: None,
        description: None,
        annual_visitors: None,
        admission_fee: None,
    }
}

fn new_collection(museum_id: i64, artwork_id: i64) -> CollectionInput {
    CollectionInput {
        museum_id,
        artwork_id,
        accession_number: None,
        acquisition_date: None,
        acquisition_method: "Purchase".to_string(),
        acquisition_cost: None,
        acquisition_details: None,
        donor_name: None,
        status: "Active".to_string(),
        gallery_location: None,
        on_display: false,
        current_value: None,
    }
}

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn validated_artist_round_trips_through_list(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let form = ArtistForm {
        name: "Claude Monet".into(),
        birth_date: "1840-11-14".into(),
        nationality: "French".into(),
        art_movement: "Impressionism".into(),
        website: "monet.example.org".into(),
        ..Default::default()
    };
    let input = form.validate().unwrap();
    let created = ArtistRepo::create(&mut conn, &input).await.unwrap();

    let listed = ArtistRepo::list(&mut conn).await.unwrap();
    assert_eq!(listed.len(), 1);
    let artist = &listed[0];
    assert_eq!(artist.id, created.id);
    assert_eq!(artist.name, "Claude Monet");
    assert_eq!(artist.nationality.as_deref(), Some("French"));
    assert_eq!(artist.art_movement.as_deref(), Some("Impressionism"));
    assert_eq!(artist.website.as_deref(), Some("https://monet.example.org"));
    assert!(artist.image_url.is_none());
    assert!(!artist.is_living);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn artists_listed_by_name(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    for name in ["Vermeer", "Caravaggio", "Klimt"] {
        ArtistRepo::create(&mut conn, &new_artist(name)).await.unwrap();
    }

    let names: Vec<String> = ArtistRepo::list(&mut conn)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, ["Caravaggio", "Klimt", "Vermeer"]);

    let choices = ArtistRepo::choices(&mut conn).await.unwrap();
    let labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
    assert_eq!(labels, ["Caravaggio", "Klimt", "Vermeer"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_replaces_every_field(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let mut input = new_artist("Frida");
    input.nationality = Some("Mexican".into());
    let created = ArtistRepo::create(&mut conn, &input).await.unwrap();

    let replacement = new_artist("Frida Kahlo");
    let updated = ArtistRepo::update(&mut conn, created.id, &replacement)
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(updated.name, "Frida Kahlo");
    assert!(updated.nationality.is_none());
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_artist_returns_none(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let existing = ArtistRepo::create(&mut conn, &new_artist("Goya")).await.unwrap();

    let result = ArtistRepo::update(&mut conn, existing.id + 1000, &new_artist("Ghost"))
        .await
        .unwrap();
    assert_matches!(result, None);

    let listed = ArtistRepo::list(&mut conn).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Goya");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_exactly_one_row(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let keep = ArtistRepo::create(&mut conn, &new_artist("Keep")).await.unwrap();
    let gone = ArtistRepo::create(&mut conn, &new_artist("Gone")).await.unwrap();

    assert!(ArtistRepo::delete(&mut conn, gone.id).await.unwrap());

    let listed = ArtistRepo::list(&mut conn).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
    assert!(ArtistRepo::find_by_id(&mut conn, gone.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_missing_row_is_not_an_error(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    ArtistRepo::create(&mut conn, &new_artist("Only")).await.unwrap();

    let deleted = ArtistRepo::delete(&mut conn, 999_999).await.unwrap();
    assert!(!deleted);
    assert_eq!(ArtistRepo::list(&mut conn).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_store_has_no_choices(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    assert!(ArtistRepo::choices(&mut conn).await.unwrap().is_empty());
    assert!(MuseumRepo::choices(&mut conn).await.unwrap().is_empty());
    assert!(ArtworkRepo::choices(&mut conn).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Artworks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn artwork_listing_carries_artist_name(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let artist = ArtistRepo::create(&mut conn, &new_artist("Hokusai")).await.unwrap();

    let mut input = new_artwork(artist.id, "The Great Wave");
    input.dimension_h = Some(Decimal::new(2570, 2));
    input.estimated_value = Some(Decimal::new(150000000, 2));
    ArtworkRepo::create(&mut conn, &input).await.unwrap();

    let listed = ArtworkRepo::list(&mut conn).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].artwork.title, "The Great Wave");
    assert_eq!(listed[0].artist_name.as_deref(), Some("Hokusai"));
    assert_eq!(listed[0].artwork.dimension_h, Some(Decimal::new(2570, 2)));
    assert_eq!(listed[0].artwork.dimension_unit, "inches");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_artist_detaches_artworks(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let artist = ArtistRepo::create(&mut conn, &new_artist("Anonymous")).await.unwrap();
    let artwork = ArtworkRepo::create(&mut conn, &new_artwork(artist.id, "Untitled"))
        .await
        .unwrap();

    ArtistRepo::delete(&mut conn, artist.id).await.unwrap();

    let reloaded = ArtworkRepo::find_by_id(&mut conn, artwork.id)
        .await
        .unwrap()
        .expect("artwork survives");
    assert!(reloaded.artist_id.is_none());

    let listed = ArtworkRepo::list(&mut conn).await.unwrap();
    assert!(listed[0].artist_name.is_none());
}

// ---------------------------------------------------------------------------
// Museums and collections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn collection_listing_joins_museum_artwork_and_artist(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let artist = ArtistRepo::create(&mut conn, &new_artist("Leonardo")).await.unwrap();
    let artwork = ArtworkRepo::create(&mut conn, &new_artwork(artist.id, "Mona Lisa"))
        .await
        .unwrap();
    let museum = MuseumRepo::create(&mut conn, &new_museum("Louvre")).await.unwrap();

    let first = CollectionRepo::create(&mut conn, &new_collection(museum.id, artwork.id))
        .await
        .unwrap();
    let second = CollectionRepo::create(&mut conn, &new_collection(museum.id, artwork.id))
        .await
        .unwrap();

    let listed = CollectionRepo::list(&mut conn).await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|c| c.collection.id).collect();
    assert_eq!(ids, [second.id, first.id]);
    assert_eq!(listed[0].museum_name.as_deref(), Some("Louvre"));
    assert_eq!(listed[0].artwork_title.as_deref(), Some("Mona Lisa"));
    assert_eq!(listed[0].artist_name.as_deref(), Some("Leonardo"));
    assert_eq!(listed[0].collection.status, "Active");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_museum_cascades_to_collections(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let artist = ArtistRepo::create(&mut conn, &new_artist("Rembrandt")).await.unwrap();
    let artwork = ArtworkRepo::create(&mut conn, &new_artwork(artist.id, "Night Watch"))
        .await
        .unwrap();
    let museum = MuseumRepo::create(&mut conn, &new_museum("Rijksmuseum")).await.unwrap();
    CollectionRepo::create(&mut conn, &new_collection(museum.id, artwork.id))
        .await
        .unwrap();

    MuseumRepo::delete(&mut conn, museum.id).await.unwrap();

    assert!(CollectionRepo::list(&mut conn).await.unwrap().is_empty());
    assert!(ArtworkRepo::find_by_id(&mut conn, artwork.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_accession_number_is_a_store_error(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let artist = ArtistRepo::create(&mut conn, &new_artist("Turner")).await.unwrap();
    let artwork = ArtworkRepo::create(&mut conn, &new_artwork(artist.id, "Rain, Steam"))
        .await
        .unwrap();
    let museum = MuseumRepo::create(&mut conn, &new_museum("National Gallery"))
        .await
        .unwrap();

    let mut input = new_collection(museum.id, artwork.id);
    input.accession_number = Some("NG538".into());
    CollectionRepo::create(&mut conn, &input).await.unwrap();

    let err = CollectionRepo::create(&mut conn, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23505"));
    assert_eq!(CollectionRepo::list(&mut conn).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn museum_update_round_trips_amounts(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let museum = MuseumRepo::create(&mut conn, &new_museum("Orsay")).await.unwrap();

    let mut input = new_museum("Musée d'Orsay");
    input.annual_visitors = Some(3_200_000);
    input.admission_fee = Some(Decimal::new(1600, 2));
    let updated = MuseumRepo::update(&mut conn, museum.id, &input)
        .await
        .unwrap()
        .expect("row exists");

    assert_eq!(updated.name, "Musée d'Orsay");
    assert_eq!(updated.annual_visitors, Some(3_200_000));
    assert_eq!(updated.admission_fee, Some(Decimal::new(1600, 2)));
}
