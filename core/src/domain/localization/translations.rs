use std::sync::LazyLock;

use crate::domain::localization::entities::{Locale, UiStrings};

static UI_FR: LazyLock<UiStrings> = LazyLock::new(|| UiStrings {
    app_title: "Drive-Through IA".to_string(),
    app_subtitle: "Commandez avec notre assistant intelligent".to_string(),
    choose_language: "Choisissez votre langue".to_string(),
    french: "Français".to_string(),
    english: "Anglais".to_string(),
    menu: "Menu".to_string(),
    type_placeholder: "Tapez votre message...".to_string(),
    send: "Envoyer".to_string(),
    assistant_writing: "Assistant écrit...".to_string(),
    order: "Commande".to_string(),
    no_order: "Aucune commande".to_string(),
    quantity: "Quantité".to_string(),
    total: "Total".to_string(),
    confirmed: "Confirmée".to_string(),
    building: "En cours".to_string(),
    order_confirmed: "Commande confirmée !".to_string(),
    payment_message: "RDV à la prochaine borne pour le paiement".to_string(),
    error_occurred: "Désolé, une erreur est survenue.".to_string(),
});

static UI_EN: LazyLock<UiStrings> = LazyLock::new(|| UiStrings {
    app_title: "AI Drive-Through".to_string(),
    app_subtitle: "Order with our intelligent assistant".to_string(),
    choose_language: "Choose your language".to_string(),
    french: "French".to_string(),
    english: "English".to_string(),
    menu: "Menu".to_string(),
    type_placeholder: "Type your message...".to_string(),
    send: "Send".to_string(),
    assistant_writing: "Assistant writing...".to_string(),
    order: "Order".to_string(),
    no_order: "No order".to_string(),
    quantity: "Quantity".to_string(),
    total: "Total".to_string(),
    confirmed: "Confirmed".to_string(),
    building: "Building".to_string(),
    order_confirmed: "Order confirmed!".to_string(),
    payment_message: "Go to the next terminal for payment".to_string(),
    error_occurred: "Sorry, an error occurred.".to_string(),
});

pub fn get_translations(locale: Locale) -> &'static UiStrings {
    match locale {
        Locale::Fr => &UI_FR,
        Locale::En => &UI_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_have_a_bundle() {
        assert_eq!(get_translations(Locale::Fr).app_title, "Drive-Through IA");
        assert_eq!(get_translations(Locale::En).app_title, "AI Drive-Through");
    }
}
