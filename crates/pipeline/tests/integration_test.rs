//! Integration tests for the pipeline.
//!
//! These run CSV text through the loader, the scorer, the filters and the
//! ranking together.

use data_loader::{FoodItem, parse_food_items};
use pipeline::filters::MAX_FAT_GRAMS;
use pipeline::{Preferences, calculate_scores, recommend};

const DATASET: &str = "\
ID,Nama Makanan,Kalori,Lemak,Mengandung Hewani,Penyakit,Rasa,Usia
1,Tempe goreng,150,4.0,Tidak,Kolesterol,Gurih,Dewasa
2,Ayam bakar,260,9.5,Ya,Hipertensi,Manis,Semua
3,Sayur bayam,35,0.4,tidak,-,Tawar,Semua
4,Telur rebus,78,5.0,Ya,Kolesterol,Gurih,Anak
5,Nasi putih,204,0.4,TIDAK,Diabetes,Tawar,Semua
6,Rendang,468,21.0,Ya,Hipertensi,Pedas,Dewasa
7,Pisang,105,0.3,Tidak,-,Manis,Anak
";

fn load() -> Vec<FoodItem> {
    parse_food_items(DATASET.as_bytes(), "data.csv").unwrap()
}

#[test]
fn test_full_pipeline_without_vegan_preference() {
    let mut items = load();
    let prefs = Preferences::new(200, 10, false);

    let recs = recommend(&mut items, &prefs).unwrap();

    let mut ids: Vec<_> = recs.items.iter().map(|i| i.id).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 3, 4, 7]);

    for item in &recs.items {
        assert!(item.calories <= prefs.max_calories);
        assert!(item.fat <= MAX_FAT_GRAMS);
    }
    for pair in recs.items.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Lowest calories and fat wins
    assert_eq!(recs.items[0].id, 3);
}

#[test]
fn test_full_pipeline_with_vegan_preference() {
    let mut items = load();
    let prefs = Preferences::new(250, 0, true);

    let recs = recommend(&mut items, &prefs).unwrap();

    let ids: Vec<_> = recs.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3, 7, 5, 1]);
    assert!(recs.items.iter().all(|i| i.is_vegan_friendly));
}

#[test]
fn test_score_range_with_bonus() {
    let mut items = load();
    calculate_scores(&mut items, &Preferences::new(0, 0, true));

    for item in &items {
        let bonus = if item.is_vegan_friendly { 1.0 } else { 0.0 };
        assert!(item.score >= 0.0);
        assert!(item.score <= 2.0 + bonus);
    }
    // Rendang holds both maxima: no nutrient contribution, no bonus
    let rendang = items.iter().find(|i| i.id == 6).unwrap();
    assert_eq!(rendang.score, 0.0);
}

#[test]
fn test_item_with_zero_calories_and_fat_scores_two() {
    let mut items = vec![
        FoodItem::new(1, "air putih", 0, 0.0, true),
        FoodItem::new(2, "martabak", 500, 20.0, false),
    ];
    calculate_scores(&mut items, &Preferences::new(1000, 0, false));

    assert!((items[0].score - 2.0).abs() < 1e-9);
    assert_eq!(items[1].score, 0.0);
}

#[test]
fn test_tie_with_non_vegan_item_excluded() {
    let mut items = vec![
        FoodItem::new(1, "item1", 100, 2.0, true),
        FoodItem::new(2, "item2", 50, 1.0, false),
    ];

    let recs = recommend(&mut items, &Preferences::new(150, 0, true)).unwrap();

    // Both score 1.0 but only the vegan-friendly item survives
    assert!((items[0].score - 1.0).abs() < 1e-9);
    assert!((items[1].score - 1.0).abs() < 1e-9);
    assert_eq!(recs.items.len(), 1);
    assert_eq!(recs.items[0].id, 1);
}

#[test]
fn test_all_zero_calorie_dataset() {
    let mut items = vec![
        FoodItem::new(1, "teh tawar", 0, 0.0, true),
        FoodItem::new(2, "kopi hitam", 0, 0.2, true),
    ];
    let recs = recommend(&mut items, &Preferences::new(0, 0, false)).unwrap();

    assert_eq!(recs.scorer.maxima().calories, 0.0);
    // Fat term only: the calorie term adds nothing even for zero calories
    assert!((items[0].score - 1.0).abs() < 1e-9);
    assert_eq!(items[1].score, 0.0);
    assert_eq!(recs.items.len(), 2);
}

#[test]
fn test_empty_dataset() {
    let header = "ID,Nama,Kalori,Lemak,Vegan,Penyakit,Rasa,Usia\n";
    let mut items = parse_food_items(header.as_bytes(), "data.csv").unwrap();
    assert!(items.is_empty());

    let recs = recommend(&mut items, &Preferences::new(500, 0, true)).unwrap();
    assert!(recs.items.is_empty());
}

#[test]
fn test_min_protein_has_no_effect() {
    let mut low = load();
    let mut high = load();

    let a = recommend(&mut low, &Preferences::new(300, 0, false)).unwrap();
    let b = recommend(&mut high, &Preferences::new(300, 9999, false)).unwrap();

    assert_eq!(a.items, b.items);
}
