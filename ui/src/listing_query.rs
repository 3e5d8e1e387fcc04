//! The listing query engine.
//!
//! Derives the filtered, sorted view of the catalog from the two
//! user-controlled inputs on the listing screen: the free-text search term
//! and the sort key. The catalog itself is read-only input; the engine
//! always hands back a fresh sequence.

use api::product::Product;

/// How the listing is ordered. `None` keeps the catalog's own order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::Display, strum::EnumString)]
pub enum SortKey {
    #[default]
    #[strum(serialize = "")]
    None,
    #[strum(serialize = "popularity")]
    Popularity,
    #[strum(serialize = "price-low")]
    PriceLowToHigh,
    #[strum(serialize = "price-high")]
    PriceHighToLow,
}

impl SortKey {
    /// The selectable options, in the order the dropdown offers them.
    pub const OPTIONS: [SortKey; 3] = [
        SortKey::Popularity,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
    ];

    /// Human label for the dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "Unsorted",
            SortKey::Popularity => "Most Popular",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
        }
    }
}

/// Derives the displayed subsequence of `catalog` for one query state.
///
/// Filtering happens before sorting. A trimmed-empty search term excludes
/// nothing; otherwise a product is kept iff the lowercased term is a
/// substring of its lowercased name or description. `slice::sort_by` is
/// stable, so products with equal sort keys keep their catalog order.
///
/// Pure: the catalog is never mutated and equal inputs always produce the
/// same output.
pub fn filter_and_sort(catalog: &[Product], search_term: &str, sort_key: SortKey) -> Vec<Product> {
    let needle = search_term.trim().to_lowercase();

    let mut result: Vec<Product> = if needle.is_empty() {
        catalog.to_vec()
    } else {
        catalog
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    };

    match sort_key {
        SortKey::None => {}
        SortKey::PriceLowToHigh => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHighToLow => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Popularity => result.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(product_id: u32, name: &str, price: f64, popularity: u32) -> Product {
        Product {
            product_id,
            name: name.to_string(),
            description: format!("A {} for your laptop.", name.to_lowercase()),
            price,
            popularity,
            image_url: String::new(),
        }
    }

    /// The three-record catalog from the listing contract.
    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Cat Sticker", 5.0, 10),
            product(2, "Dog Sticker", 3.0, 20),
            product(3, "Fish Decal", 3.0, 5),
        ]
    }

    fn ids(result: &[Product]) -> Vec<u32> {
        result.iter().map(|p| p.product_id).collect()
    }

    #[test]
    fn empty_query_preserves_catalog_order() {
        let result = filter_and_sort(&catalog(), "", SortKey::None);
        assert_eq!(ids(&result), [1, 2, 3]);
    }

    #[test]
    fn search_filters_by_name() {
        let result = filter_and_sort(&catalog(), "sticker", SortKey::None);
        assert_eq!(ids(&result), [1, 2]);
    }

    #[test]
    fn search_filters_by_description() {
        let result = filter_and_sort(&catalog(), "laptop", SortKey::None);
        assert_eq!(ids(&result), [1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let result = filter_and_sort(&catalog(), "STICKER", SortKey::None);
        assert_eq!(ids(&result), [1, 2]);
    }

    #[test]
    fn whitespace_only_term_is_no_filter() {
        let result = filter_and_sort(&catalog(), "   \t", SortKey::Popularity);
        assert_eq!(result.len(), catalog().len());
    }

    #[test]
    fn price_ascending_is_stable_for_ties() {
        // ids 2 and 3 both cost 3.0; their catalog order must survive.
        let result = filter_and_sort(&catalog(), "", SortKey::PriceLowToHigh);
        assert_eq!(ids(&result), [2, 3, 1]);
    }

    #[test]
    fn price_descending() {
        let result = filter_and_sort(&catalog(), "", SortKey::PriceHighToLow);
        assert_eq!(ids(&result), [1, 2, 3]);
    }

    #[test]
    fn popularity_sorts_most_popular_first() {
        let result = filter_and_sort(&catalog(), "", SortKey::Popularity);
        assert_eq!(ids(&result), [2, 1, 3]);
    }

    #[test]
    fn no_match_yields_empty_result() {
        let result = filter_and_sort(&catalog(), "xyz", SortKey::None);
        assert!(result.is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(filter_and_sort(&[], "sticker", SortKey::Popularity).is_empty());
    }

    #[test]
    fn filter_composes_with_sort() {
        let result = filter_and_sort(&catalog(), "sticker", SortKey::PriceLowToHigh);
        assert_eq!(ids(&result), [2, 1]);
    }

    #[test]
    fn input_is_never_mutated() {
        let before = catalog();
        let _ = filter_and_sort(&before, "dog", SortKey::PriceHighToLow);
        assert_eq!(before, catalog());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let catalog = catalog();
        let a = filter_and_sort(&catalog, "sticker", SortKey::Popularity);
        let b = filter_and_sort(&catalog, "sticker", SortKey::Popularity);
        assert_eq!(a, b);
    }

    #[test]
    fn every_result_item_comes_from_the_catalog() {
        let catalog = catalog();
        for key in [SortKey::None, SortKey::Popularity, SortKey::PriceLowToHigh] {
            for term in ["", "sticker", "decal", "xyz"] {
                for item in filter_and_sort(&catalog, term, key) {
                    assert!(catalog.contains(&item));
                }
            }
        }
    }

    #[test]
    fn unknown_sort_value_falls_back_to_none() {
        use std::str::FromStr;

        fn parse(value: &str) -> SortKey {
            SortKey::from_str(value).unwrap_or_default()
        }

        assert_eq!(parse("price-low"), SortKey::PriceLowToHigh);
        assert_eq!(parse("price-high"), SortKey::PriceHighToLow);
        assert_eq!(parse("popularity"), SortKey::Popularity);
        assert_eq!(parse(""), SortKey::None);
        assert_eq!(parse("alphabetical"), SortKey::None);
    }
}
