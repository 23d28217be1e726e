use serde_json::json;

use crate::domain::localization::entities::Locale;
use crate::domain::menu::catalog::{allowed_item_ids, allowed_item_names};

/// Builds the strict response schema handed to the LLM provider as a
/// structured-output constraint. Item ids and names are enumerated from the
/// menu catalog for the locale, so the model cannot even emit an unknown
/// product at the grammar level. The constraint is structural only — the
/// reconciler re-validates every cross-field rule regardless.
pub fn build_response_schema(locale: Locale) -> serde_json::Value {
    let item_ids = allowed_item_ids(locale);
    let item_names = allowed_item_names(locale);

    let text_description = match locale {
        Locale::En => "Text response to the user (English)",
        Locale::Fr => "Réponse texte adressée à l'utilisateur (français)",
    };
    let completed_description = match locale {
        Locale::En => "True only if the customer has finished their order",
        Locale::Fr => "True uniquement si le client a fini la commande",
    };

    json!({
        "name": "DriveResponse",
        "schema": {
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "assistant_text": { "type": "string", "description": text_description },
                "order": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "orderId": { "type": "string" },
                        "status": {
                            "type": "string",
                            "enum": ["building", "confirmed", "paid", "cancelled"]
                        },
                        "currency": { "type": "string", "enum": ["EUR"] },
                        "completed": { "type": "boolean", "description": completed_description },
                        "items": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "additionalProperties": false,
                                "properties": {
                                    "id": { "type": "string", "enum": item_ids },
                                    "name": { "type": "string", "enum": item_names },
                                    "quantity": { "type": "integer", "minimum": 1, "maximum": 50 },
                                    "notes": { "type": "string", "maxLength": 120 }
                                },
                                // strict mode requires `required` to list every property key
                                "required": ["id", "name", "quantity", "notes"]
                            },
                            "maxItems": 100
                        },
                        "subtotalCents": { "type": "integer", "minimum": 0 },
                        "taxCents": { "type": "integer", "minimum": 0 },
                        "totalCents": { "type": "integer", "minimum": 0 },
                        "updatedAt": { "type": "string" }
                    },
                    "required": [
                        "orderId", "items", "currency", "subtotalCents", "taxCents",
                        "totalCents", "status", "updatedAt", "completed"
                    ]
                },
                "timestamp": { "type": "string" }
            },
            "required": ["assistant_text", "order", "timestamp"]
        },
        "strict": true
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::catalog::all_menu_items;

    #[test]
    fn schema_enumerates_catalog_ids_and_locale_names() {
        let schema = build_response_schema(Locale::En);
        let item_schema = &schema["schema"]["properties"]["order"]["properties"]["items"]["items"];

        let ids: Vec<&str> = item_schema["properties"]["id"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        for menu_item in all_menu_items(Locale::En) {
            assert!(ids.contains(&menu_item.id.as_str()));
        }

        let names = item_schema["properties"]["name"]["enum"].as_array().unwrap();
        assert!(names.iter().any(|v| v == "Classic Burger"));
        assert!(!names.iter().any(|v| v == "Burger Classique"));
    }

    #[test]
    fn schema_is_strict_everywhere() {
        let schema = build_response_schema(Locale::Fr);
        assert_eq!(schema["strict"], true);
        assert_eq!(schema["schema"]["additionalProperties"], false);
        assert_eq!(
            schema["schema"]["properties"]["order"]["additionalProperties"],
            false
        );

        let required = schema["schema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 3);

        let order_required = schema["schema"]["properties"]["order"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(order_required.len(), 9);
    }

    #[test]
    fn item_bounds_match_the_contract() {
        let schema = build_response_schema(Locale::Fr);
        let item_schema = &schema["schema"]["properties"]["order"]["properties"]["items"]["items"];
        assert_eq!(item_schema["properties"]["quantity"]["minimum"], 1);
        assert_eq!(item_schema["properties"]["quantity"]["maximum"], 50);
        assert_eq!(item_schema["properties"]["notes"]["maxLength"], 120);
    }
}
