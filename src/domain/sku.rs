//! Stock keeping unit codes.
//!
//! A SKU is the upper-cased two-character prefixes of the product name, its
//! category and its product type followed by a random four digit number,
//! e.g. `WIELGA4821` for a "Widget" in "Electronics" of type "Gadget".
//! Codes are not checked for uniqueness.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::domain::reference::ReferenceData;
use crate::domain::types::{CategoryId, ProductSku, ProductTypeId, TypeConstraintError};

/// Prefix used when a category or product type is missing from the reference data.
pub const FALLBACK_PREFIX: &str = "XX";

/// Range of the numeric suffix.
pub const SUFFIX_RANGE: RangeInclusive<u16> = 1000..=9999;

const PREFIX_LEN: usize = 2;

fn prefix(value: &str) -> String {
    value
        .chars()
        .take(PREFIX_LEN)
        .collect::<String>()
        .to_uppercase()
}

/// Derive a SKU for a product named `name`.
///
/// The category and product type names are looked up by id in `reference`.
pub fn generate_sku<R>(
    name: &str,
    category_id: CategoryId,
    product_type_id: ProductTypeId,
    reference: &ReferenceData,
    rng: &mut R,
) -> Result<ProductSku, TypeConstraintError>
where
    R: Rng + ?Sized,
{
    let name_prefix = prefix(name);
    let category_prefix = reference
        .category_name(category_id)
        .map(|name| prefix(name))
        .unwrap_or_else(|| FALLBACK_PREFIX.to_string());
    let type_prefix = reference
        .product_type_name(product_type_id)
        .map(|name| prefix(name))
        .unwrap_or_else(|| FALLBACK_PREFIX.to_string());
    let suffix = rng.gen_range(SUFFIX_RANGE);

    ProductSku::new(format!(
        "{name_prefix}{category_prefix}{type_prefix}{suffix}"
    ))
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::category::Category;
    use crate::domain::product_type::ProductType;
    use crate::domain::types::{CategoryName, ProductTypeName};

    fn reference() -> ReferenceData {
        let epoch = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        ReferenceData::new(
            vec![Category {
                id: CategoryId::new(1).unwrap(),
                name: CategoryName::new("Electronics").unwrap(),
                created_at: epoch,
                updated_at: epoch,
            }],
            vec![ProductType {
                id: ProductTypeId::new(2).unwrap(),
                name: ProductTypeName::new("Gadget").unwrap(),
                description: None,
                created_at: epoch,
                updated_at: epoch,
            }],
        )
    }

    fn split(sku: &ProductSku) -> (String, u16) {
        let chars: Vec<char> = sku.chars().collect();
        let (head, tail) = chars.split_at(chars.len() - 4);
        let suffix: String = tail.iter().collect();
        (head.iter().collect(), suffix.parse().unwrap())
    }

    #[test]
    fn builds_prefix_from_name_category_and_type() {
        let mut rng = StdRng::seed_from_u64(7);
        let sku = generate_sku(
            "Widget",
            CategoryId::new(1).unwrap(),
            ProductTypeId::new(2).unwrap(),
            &reference(),
            &mut rng,
        )
        .unwrap();

        let (prefix, suffix) = split(&sku);
        assert_eq!(prefix, "WIELGA");
        assert!(SUFFIX_RANGE.contains(&suffix));
        assert_eq!(sku.len(), 10);
    }

    #[test]
    fn unknown_ids_fall_back_to_placeholder() {
        let mut rng = StdRng::seed_from_u64(7);
        let sku = generate_sku(
            "widget",
            CategoryId::new(99).unwrap(),
            ProductTypeId::new(98).unwrap(),
            &reference(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(split(&sku).0, "WIXXXX");
    }

    #[test]
    fn same_seed_gives_same_sku() {
        let generate = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_sku(
                "Widget",
                CategoryId::new(1).unwrap(),
                ProductTypeId::new(2).unwrap(),
                &reference(),
                &mut rng,
            )
            .unwrap()
        };

        assert_eq!(generate(42), generate(42));
    }

    #[test]
    fn suffix_stays_within_four_digits() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let sku = generate_sku(
                "Widget",
                CategoryId::new(1).unwrap(),
                ProductTypeId::new(2).unwrap(),
                &ReferenceData::default(),
                &mut rng,
            )
            .unwrap();
            let (_, suffix) = split(&sku);
            assert!((1000..=9999).contains(&suffix));
        }
    }

    #[test]
    fn prefix_counts_characters_not_bytes() {
        let mut rng = StdRng::seed_from_u64(3);
        let sku = generate_sku(
            "هاتف ذكي",
            CategoryId::new(1).unwrap(),
            ProductTypeId::new(2).unwrap(),
            &reference(),
            &mut rng,
        )
        .unwrap();

        assert!(sku.starts_with("هاELGA"));
    }
}
