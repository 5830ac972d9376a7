use crate::domain::models::{ProductData, ProductPage};

pub fn marketing_slug(product: &ProductData) -> String {
    match product.concentration.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => {
            format!("The best {} solution for {} skin.", c, product.skin_type)
        }
        _ => format!("The best solution for {} skin.", product.skin_type),
    }
}

/// Product page is templated straight from the input; no model call.
pub fn assemble_product_page(product: &ProductData) -> ProductPage {
    ProductPage {
        title: product.product_name.clone(),
        specs: product.clone(),
        marketing_slug: marketing_slug(product),
    }
}
