use std::sync::LazyLock;

use crate::domain::localization::entities::Locale;
use crate::domain::menu::entities::{MenuItem, MenuSection};

fn section(id: &str, name: &str, items: Vec<MenuItem>) -> MenuSection {
    MenuSection {
        id: id.to_string(),
        name: name.to_string(),
        items,
    }
}

fn item(id: &str, name: &str, price_cents: u32) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price_cents,
    }
}

static MENU_FR: LazyLock<Vec<MenuSection>> = LazyLock::new(|| {
    vec![
        section(
            "burgers",
            "Burgers",
            vec![
                item("burger_classic", "Burger Classique", 500),
                item("burger_cheese", "Burger au Fromage", 550),
                item("burger_double", "Double Burger", 750),
            ],
        ),
        section(
            "sides",
            "Accompagnements",
            vec![
                item("fries_small", "Frites (Petites)", 200),
                item("fries_large", "Frites (Grandes)", 300),
                item("nuggets_6", "Nuggets (6)", 450),
            ],
        ),
        section(
            "drinks",
            "Boissons",
            vec![
                item("coke_small", "Coca-Cola (25cl)", 200),
                item("coke_large", "Coca-Cola (50cl)", 300),
                item("water", "Eau", 150),
            ],
        ),
        section(
            "desserts",
            "Desserts",
            vec![
                item("mcflurry_oreo", "Glace Oreo", 450),
                item("apple_pie", "Chausson aux pommes", 250),
            ],
        ),
    ]
});

static MENU_EN: LazyLock<Vec<MenuSection>> = LazyLock::new(|| {
    vec![
        section(
            "burgers",
            "Burgers",
            vec![
                item("burger_classic", "Classic Burger", 500),
                item("burger_cheese", "Cheese Burger", 550),
                item("burger_double", "Double Burger", 750),
            ],
        ),
        section(
            "sides",
            "Sides",
            vec![
                item("fries_small", "Small Fries", 200),
                item("fries_large", "Large Fries", 300),
                item("nuggets_6", "Nuggets (6)", 450),
            ],
        ),
        section(
            "drinks",
            "Drinks",
            vec![
                item("coke_small", "Coca-Cola (25cl)", 200),
                item("coke_large", "Coca-Cola (50cl)", 300),
                item("water", "Water", 150),
            ],
        ),
        section(
            "desserts",
            "Desserts",
            vec![
                item("mcflurry_oreo", "Oreo Ice Cream", 450),
                item("apple_pie", "Apple Pie", 250),
            ],
        ),
    ]
});

/// Ordered menu sections for a locale. Sole source of truth for item
/// names and prices; whatever the model claims is advisory only.
pub fn get_menu(locale: Locale) -> &'static [MenuSection] {
    match locale {
        Locale::Fr => MENU_FR.as_slice(),
        Locale::En => MENU_EN.as_slice(),
    }
}

pub fn all_menu_items(locale: Locale) -> impl Iterator<Item = &'static MenuItem> {
    get_menu(locale).iter().flat_map(|s| s.items.iter())
}

pub fn find_menu_item_by_id(id: &str, locale: Locale) -> Option<&'static MenuItem> {
    all_menu_items(locale).find(|it| it.id == id)
}

pub fn allowed_item_ids(locale: Locale) -> Vec<&'static str> {
    all_menu_items(locale).map(|it| it.id.as_str()).collect()
}

pub fn allowed_item_names(locale: Locale) -> Vec<&'static str> {
    all_menu_items(locale).map(|it| it.name.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_ids_are_stable_across_locales() {
        let fr: Vec<_> = allowed_item_ids(Locale::Fr);
        let en: Vec<_> = allowed_item_ids(Locale::En);
        assert_eq!(fr, en);
        assert!(!fr.is_empty());
    }

    #[test]
    fn lookup_returns_locale_specific_entry() {
        let fr = find_menu_item_by_id("burger_classic", Locale::Fr).unwrap();
        assert_eq!(fr.name, "Burger Classique");
        assert_eq!(fr.price_cents, 500);

        let en = find_menu_item_by_id("burger_classic", Locale::En).unwrap();
        assert_eq!(en.name, "Classic Burger");
        assert_eq!(en.price_cents, 500);
    }

    #[test]
    fn lookup_misses_unknown_ids() {
        assert!(find_menu_item_by_id("pizza_hawaii", Locale::Fr).is_none());
        assert!(find_menu_item_by_id("", Locale::En).is_none());
    }

    #[test]
    fn sections_keep_display_order() {
        let ids: Vec<_> = get_menu(Locale::Fr).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["burgers", "sides", "drinks", "desserts"]);
    }
}
