//! The sticker catalog.
//!
//! The storefront has no product database; the catalog ships with the binary
//! and everything downstream treats it as a read-only, ordered collection.

use crate::product::Product;

fn product(
    product_id: u32,
    name: &str,
    description: &str,
    price: f64,
    popularity: u32,
    image: &str,
) -> Product {
    Product {
        product_id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        popularity,
        image_url: format!("/stickers/{image}"),
    }
}

/// The full catalog in canonical order.
pub fn products() -> Vec<Product> {
    vec![
        product(
            1,
            "Cosmic Cat",
            "A curious cat drifting through a pastel galaxy.",
            4.99,
            87,
            "cosmic-cat.png",
        ),
        product(
            2,
            "Happy Avocado",
            "A grinning avocado half for the brunch enthusiast.",
            3.49,
            95,
            "happy-avocado.png",
        ),
        product(
            3,
            "Retro Boombox",
            "An eighties boombox blasting pixelated sound waves.",
            5.99,
            61,
            "retro-boombox.png",
        ),
        product(
            4,
            "Rainbow Doodle",
            "A hand-drawn rainbow arcing over tiny clouds.",
            2.99,
            74,
            "rainbow-doodle.png",
        ),
        product(
            5,
            "Pixel Ghost",
            "A shy 8-bit ghost that haunts laptop lids.",
            3.99,
            52,
            "pixel-ghost.png",
        ),
        product(
            6,
            "Coffee First",
            "A steaming mug with a firm morning rule.",
            4.49,
            91,
            "coffee-first.png",
        ),
        product(
            7,
            "Mountain Sunrise",
            "Layered peaks under a rising minimalist sun.",
            5.49,
            43,
            "mountain-sunrise.png",
        ),
        product(
            8,
            "Lazy Sloth",
            "A sloth hanging from a branch, in no hurry at all.",
            3.49,
            68,
            "lazy-sloth.png",
        ),
        product(
            9,
            "Synthwave Sunset",
            "A neon grid racing toward a striped retro sun.",
            6.49,
            57,
            "synthwave-sunset.png",
        ),
        product(
            10,
            "Tiny Dinosaur",
            "A pocket-sized T-rex with big ambitions.",
            2.49,
            80,
            "tiny-dinosaur.png",
        ),
        product(
            11,
            "Bookworm Club",
            "A worm in reading glasses working through a stack of books.",
            4.99,
            38,
            "bookworm-club.png",
        ),
        product(
            12,
            "Ocean Wave Decal",
            "A rolling wave decal in deep blues and foam white.",
            3.99,
            29,
            "ocean-wave.png",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn product_ids_are_unique() {
        let catalog = products();
        let ids: HashSet<u32> = catalog.iter().map(|p| p.product_id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn prices_are_non_negative() {
        assert!(products().iter().all(|p| p.price >= 0.0));
    }

    #[test]
    fn names_and_descriptions_are_non_empty() {
        for p in products() {
            assert!(!p.name.trim().is_empty(), "product {} has no name", p.product_id);
            assert!(
                !p.description.trim().is_empty(),
                "product {} has no description",
                p.product_id
            );
        }
    }

    #[test]
    fn order_is_deterministic() {
        assert_eq!(products(), products());
    }
}
