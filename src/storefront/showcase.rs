use crate::api::response::ProductResponse;

/// With no featured products at all, the landing page shows the head of
/// the catalog instead, capped here.
pub const FALLBACK_LIMIT: usize = 12;

/// The landing grid looks sparse under three items, so short featured
/// lists are padded up to this many.
pub const MIN_FEATURED: usize = 3;

/// Selects the landing-page products.
///
/// All featured products when there are at least three; fewer get padded
/// with the first non-featured catalog entries up to three; none at all
/// falls back to the first twelve of the catalog.
pub fn featured_products(products: &[ProductResponse]) -> Vec<&ProductResponse> {
    let featured: Vec<&ProductResponse> = products.iter().filter(|p| p.featured).collect();

    if featured.is_empty() {
        return products.iter().take(FALLBACK_LIMIT).collect();
    }

    if featured.len() < MIN_FEATURED && products.len() > featured.len() {
        let need = MIN_FEATURED - featured.len();
        let mut padded = featured;
        padded.extend(products.iter().filter(|p| !p.featured).take(need));
        return padded;
    }

    featured
}

pub fn find_product(products: &[ProductResponse], id: i64) -> Option<&ProductResponse> {
    products.iter().find(|p| p.id == id)
}

pub fn products_in_category<'a>(
    products: &'a [ProductResponse],
    category: &str,
) -> Vec<&'a ProductResponse> {
    products.iter().filter(|p| p.category == category).collect()
}

/// Case-insensitive substring search over name, description and material.
/// An empty query matches everything.
pub fn search_products<'a>(
    products: &'a [ProductResponse],
    query: &str,
) -> Vec<&'a ProductResponse> {
    if query.is_empty() {
        return products.iter().collect();
    }

    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.material.to_lowercase().contains(&needle)
        })
        .collect()
}
