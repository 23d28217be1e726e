use crate::domain::localization::entities::Locale;
use crate::domain::menu::catalog::get_menu;
use crate::domain::ordering::entities::Order;

const SYSTEM_PROMPT_FR: &str = "\
Tu es un agent de prise de commande pour un drive-through.
Règles importantes:
- Tu dois toujours répondre en français.
- N'utilise que les articles du menu fourni. Aucune hallucination.
- Retourne STRICTEMENT un JSON conforme au schéma.
- La réponse JSON doit contenir (1) assistant_text (ton message à l'utilisateur), (2) order (commande actuelle complète).
- L'objet order.items contient uniquement des articles avec des id et des name exactement égaux à ceux du menu.
- Limite les notes à des résumés concis.
- Fixe updatedAt/timestamp au format ISO.
- Utilise order.completed (booléen) et mets-le à true UNIQUEMENT si le client indique qu'il a terminé et ne veut rien d'autre. Si completed=true, ne propose plus d'ajouter d'autres articles; confirme la commande et indique d'aller au paiement.
Menu (id :: name :: prix €):
{menu}";

const SYSTEM_PROMPT_EN: &str = "\
You are a drive-through order-taking agent.
Important rules:
- You must always respond in English.
- Only use items from the provided menu. No hallucination.
- Return STRICTLY a JSON conforming to the schema.
- The JSON response must contain (1) assistant_text (your message to the user), (2) order (complete current order).
- The order.items object contains only items with id and name exactly matching those in the menu.
- Keep notes to concise summaries.
- Set updatedAt/timestamp in ISO format.
- Use order.completed (boolean) and set it to true ONLY if the customer indicates they are finished and want nothing else. If completed=true, don't suggest adding more items; confirm the order and indicate to go to payment.
Menu (id :: name :: price €):
{menu}";

/// Locale-specific system prompt with the menu listing embedded, so the
/// model's notion of the catalog always matches the reconciler's.
pub fn system_prompt(locale: Locale) -> String {
    let template = match locale {
        Locale::Fr => SYSTEM_PROMPT_FR,
        Locale::En => SYSTEM_PROMPT_EN,
    };
    template.replace("{menu}", &render_menu_listing(locale))
}

fn render_menu_listing(locale: Locale) -> String {
    let mut listing = String::new();
    for (index, section) in get_menu(locale).iter().enumerate() {
        if index > 0 {
            listing.push('\n');
        }
        listing.push_str(&format!("- {}:", section.name));
        for item in &section.items {
            let price = item.price_cents as f64 / 100.0;
            let line = match locale {
                Locale::Fr => format!("\n  • {} :: {} :: {:.2}€", item.id, item.name, price),
                Locale::En => format!("\n  • {} :: {} :: €{:.2}", item.id, item.name, price),
            };
            listing.push_str(&line);
        }
    }
    listing
}

/// The prior order serialized as an auxiliary context message. The client
/// resends its order snapshot each turn; the server keeps no session state.
pub fn prior_order_note(locale: Locale, order: Option<&Order>) -> String {
    match order {
        Some(order) => {
            let snapshot = serde_json::to_string(order).unwrap_or_default();
            match locale {
                Locale::Fr => format!("Commande actuelle (côté client): {snapshot}"),
                Locale::En => format!("Current order (client-side): {snapshot}"),
            }
        }
        None => match locale {
            Locale::Fr => "Aucune commande encore.".to_string(),
            Locale::En => "No order yet.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_embeds_every_menu_item() {
        let prompt = system_prompt(Locale::Fr);
        assert!(prompt.contains("burger_classic :: Burger Classique :: 5.00€"));
        assert!(prompt.contains("- Boissons:"));
        assert!(prompt.contains("toujours répondre en français"));

        let prompt = system_prompt(Locale::En);
        assert!(prompt.contains("burger_classic :: Classic Burger :: €5.00"));
        assert!(prompt.contains("always respond in English"));
    }

    #[test]
    fn prior_order_note_without_order() {
        assert_eq!(prior_order_note(Locale::Fr, None), "Aucune commande encore.");
        assert_eq!(prior_order_note(Locale::En, None), "No order yet.");
    }

    #[test]
    fn prior_order_note_serializes_snapshot() {
        use crate::domain::localization::entities::Locale;
        use crate::domain::ordering::reconciler::ensure_order_consistency;
        use crate::domain::ordering::value_objects::ProposedOrder;

        let order = ensure_order_consistency(&ProposedOrder::default(), Locale::En);
        let note = prior_order_note(Locale::En, Some(&order));
        assert!(note.starts_with("Current order (client-side): {"));
        assert!(note.contains("\"orderId\""));
        assert!(note.contains("\"totalCents\":0"));
    }
}
