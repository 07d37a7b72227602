//! Pipeline de filtrado y orden, recalculado en cada render.

use std::cmp::Ordering;

use crate::models::{Deal, DealFilters, Favorite, SortBy};

/// Ofertas con descuento >= `min_discount`
pub fn filter_by_discount(deals: &[Deal], min_discount: i64) -> Vec<Deal> {
    deals
        .iter()
        .filter(|deal| deal.discount_percent() >= min_discount)
        .cloned()
        .collect()
}

/// Orden estable: descuento descendente o precio ascendente
pub fn sort_deals(deals: &mut [Deal], sort_by: SortBy) {
    match sort_by {
        SortBy::Discount => {
            deals.sort_by(|a, b| b.discount_percent().cmp(&a.discount_percent()));
        }
        SortBy::Price => {
            deals.sort_by(|a, b| {
                a.sale_price_value()
                    .partial_cmp(&b.sale_price_value())
                    .unwrap_or(Ordering::Equal)
            });
        }
    }
}

/// Lo que pinta el grid: favoritos tal cual o la página filtrada y ordenada
pub fn visible_deals(deals: &[Deal], favorites: &[Favorite], filters: &DealFilters) -> Vec<Deal> {
    if filters.show_favorites {
        return favorites.iter().map(|favorite| favorite.deal.clone()).collect();
    }
    let mut visible = filter_by_discount(deals, filters.min_discount);
    sort_deals(&mut visible, filters.sort_by);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fake_api::deal;
    use rstest::rstest;

    fn sample() -> Vec<Deal> {
        vec![
            deal("1", "50%", "4.99"),
            deal("2", "90%", "0.99"),
            deal("3", "100%", "0.00"),
            deal("4", "75%", "12.50"),
            deal("5", "0%", "29.99"),
        ]
    }

    fn ids(deals: &[Deal]) -> Vec<&str> {
        deals.iter().map(|d| d.steam_app_id.as_str()).collect()
    }

    #[test]
    fn zero_threshold_keeps_everything() {
        assert_eq!(filter_by_discount(&sample(), 0).len(), 5);
    }

    #[rstest]
    #[case(50, vec!["1", "2", "3", "4"])]
    #[case(75, vec!["2", "3", "4"])]
    #[case(90, vec!["2", "3"])]
    #[case(100, vec!["3"])]
    fn threshold_is_inclusive(#[case] min: i64, #[case] expected: Vec<&str>) {
        assert_eq!(ids(&filter_by_discount(&sample(), min)), expected);
    }

    #[test]
    fn full_discount_threshold_can_be_empty() {
        let deals = vec![deal("1", "99%", "0.10")];
        assert!(filter_by_discount(&deals, 100).is_empty());
    }

    #[test]
    fn discount_sort_is_non_increasing() {
        let mut deals = sample();
        sort_deals(&mut deals, SortBy::Discount);
        let discounts: Vec<i64> = deals.iter().map(Deal::discount_percent).collect();
        assert!(discounts.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn price_sort_is_non_decreasing() {
        let mut deals = sample();
        sort_deals(&mut deals, SortBy::Price);
        let prices: Vec<f64> = deals.iter().map(Deal::sale_price_value).collect();
        assert!(prices.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(ids(&deals), vec!["3", "2", "1", "4", "5"]);
    }

    #[test]
    fn sorting_is_stable_for_ties() {
        let mut deals = vec![
            deal("a", "50%", "1.00"),
            deal("b", "50%", "1.00"),
            deal("c", "50%", "1.00"),
        ];
        sort_deals(&mut deals, SortBy::Discount);
        assert_eq!(ids(&deals), vec!["a", "b", "c"]);
        sort_deals(&mut deals, SortBy::Price);
        assert_eq!(ids(&deals), vec!["a", "b", "c"]);
    }

    #[test]
    fn favorites_view_bypasses_filters_and_sort() {
        let favorites = vec![
            Favorite { id: "f1".to_string(), deal: deal("9", "5%", "50.00") },
            Favorite { id: "f2".to_string(), deal: deal("8", "95%", "0.50") },
        ];
        let filters = DealFilters {
            min_discount: 90,
            sort_by: SortBy::Discount,
            show_favorites: true,
        };
        assert_eq!(ids(&visible_deals(&sample(), &favorites, &filters)), vec!["9", "8"]);

        let filters = DealFilters { show_favorites: false, ..filters };
        assert_eq!(ids(&visible_deals(&sample(), &favorites, &filters)), vec!["3", "2"]);
    }
}
