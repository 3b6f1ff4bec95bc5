//! COCO class to ingredient name mapping

/// Detector classes that stand for an ingredient or a kitchen tool, with the
/// name used in the recipe catalog.
pub const OBJECT_TO_INGREDIENT: [(&str, &str); 10] = [
    ("apple", "Äpfel"),
    ("banana", "Bananen"),
    ("orange", "Orangen"),
    ("broccoli", "Brokkoli"),
    ("carrot", "Karotten"),
    ("bottle", "Öl"),
    ("bowl", "Schüssel"),
    ("spoon", "Löffel"),
    ("cup", "Tasse"),
    ("knife", "Messer"),
];

pub fn mapped_ingredient(class: &str) -> Option<&'static str> {
    OBJECT_TO_INGREDIENT
        .iter()
        .find(|(object, _)| object.eq_ignore_ascii_case(class))
        .map(|&(_, ingredient)| ingredient)
}

/// Does a detected class stand for the named ingredient?
///
/// Mapped classes match when the mapped name appears in the ingredient name
/// ("Öl" matches "geschmacksneutrales Öl"); unmapped classes must equal it.
pub fn matches(class: &str, ingredient_name: &str) -> bool {
    let ingredient = ingredient_name.to_lowercase();
    match mapped_ingredient(class) {
        Some(mapped) => ingredient.contains(&mapped.to_lowercase()),
        None => class.to_lowercase() == ingredient,
    }
}
