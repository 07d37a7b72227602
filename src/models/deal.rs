use serde::{Deserialize, Deserializer, Serialize};

/// Oferta tal y como la devuelve `GET /deals`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    // Paquetes y bundles llegan con `steamAppID: null`
    #[serde(rename = "steamAppID", default, deserialize_with = "null_as_empty")]
    pub steam_app_id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
    pub normal_price: String,
    pub sale_price: String,
    pub discount: String,
    #[serde(rename = "dealURL")]
    pub deal_url: String,
}

impl Deal {
    /// "75%" -> 75. Lo que no empiece por un entero cuenta como 0.
    pub fn discount_percent(&self) -> i64 {
        parse_leading_int(&self.discount).unwrap_or(0)
    }

    /// Precio rebajado numérico; 0.0 si no se puede leer
    pub fn sale_price_value(&self) -> f64 {
        self.sale_price.trim().parse().unwrap_or(0.0)
    }
}

/// Favorito persistido en el servidor: la oferta más el `_id` asignado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Favorite {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub deal: Deal,
}

impl Favorite {
    pub fn matches(&self, deal_url: &str) -> bool {
        self.deal.deal_url == deal_url
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DealsPage {
    pub deals: Vec<Deal>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entero al principio del texto, con signo opcional
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn deal_with_discount(discount: &str) -> Deal {
        Deal {
            steam_app_id: "1".to_string(),
            title: "Portal".to_string(),
            thumbnail: String::new(),
            normal_price: "9.99".to_string(),
            sale_price: "0.99".to_string(),
            discount: discount.to_string(),
            deal_url: "u1".to_string(),
        }
    }

    #[rstest]
    #[case("75%", 75)]
    #[case("100%", 100)]
    #[case(" 5%", 5)]
    #[case("90", 90)]
    #[case("%", 0)]
    #[case("", 0)]
    #[case("-10%", -10)]
    fn discount_is_read_as_leading_integer(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(deal_with_discount(raw).discount_percent(), expected);
    }

    #[test]
    fn deal_uses_backend_field_names() {
        let json = r#"{
            "steamAppID": "620",
            "title": "Portal 2",
            "thumbnail": "https://img/620.jpg",
            "normalPrice": "19.99",
            "salePrice": "1.99",
            "discount": "90%",
            "dealURL": "https://deal/620"
        }"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.steam_app_id, "620");
        assert_eq!(deal.deal_url, "https://deal/620");
        assert_eq!(deal.discount_percent(), 90);
        assert!((deal.sale_price_value() - 1.99).abs() < f64::EPSILON);

        let back = serde_json::to_value(&deal).unwrap();
        assert_eq!(back["salePrice"], "1.99");
        assert_eq!(back["dealURL"], "https://deal/620");
    }

    #[test]
    fn page_with_null_app_id_and_thumbnail_still_parses() {
        let json = r#"{"deals": [
            {"steamAppID": "620", "title": "Portal 2", "thumbnail": "t", "normalPrice": "19.99",
             "salePrice": "1.99", "discount": "90%", "dealURL": "u620"},
            {"steamAppID": null, "title": "Valve Complete Pack", "thumbnail": null,
             "normalPrice": "99.99", "salePrice": "24.99", "discount": "75%", "dealURL": "upack"}
        ]}"#;
        let page: DealsPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.deals.len(), 2);
        assert_eq!(page.deals[1].steam_app_id, "");
        assert_eq!(page.deals[1].thumbnail, "");
        assert_eq!(page.deals[1].discount_percent(), 75);
    }

    #[test]
    fn favorite_flattens_deal_and_ignores_server_extras() {
        let json = r#"{
            "_id": "abc123",
            "userId": "u-9",
            "__v": 0,
            "steamAppID": "620",
            "title": "Portal 2",
            "thumbnail": "t",
            "normalPrice": "19.99",
            "salePrice": "1.99",
            "discount": "90%",
            "dealURL": "https://deal/620"
        }"#;
        let favorite: Favorite = serde_json::from_str(json).unwrap();
        assert_eq!(favorite.id, "abc123");
        assert!(favorite.matches("https://deal/620"));
        assert!(!favorite.matches("https://deal/other"));
    }
}
