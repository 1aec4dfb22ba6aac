// web_app/routes.rs - Navigation targets shared by components and the router

/// Storefront root, also the breadcrumb "Home" target
pub const HOME_ROUTE: &str = "/";

pub const SHOP_ROUTE: &str = "/shop";

/// Prefix of the single-product route; the full path is `/product/{id}`
pub const PRODUCT_ROUTE_PREFIX: &str = "/product";

/// Static assets resolved from the site root
pub const LOGO_IMAGE: &str = "/images/minilogo.png";
pub const HERO_IMAGE: &str = "/images/heroShop.png";

/// Link target for one product's detail page.
pub fn product_route(id: &str) -> String {
    format!("{}/{}", PRODUCT_ROUTE_PREFIX, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_route_carries_id() {
        assert_eq!(product_route("p1"), "/product/p1");
        assert_ne!(product_route("p1"), product_route("p2"));
    }

    #[test]
    fn test_product_route_encodes_reserved_characters() {
        assert_eq!(product_route("drafts.a/b c"), "/product/drafts.a%2Fb%20c");
    }

    #[test]
    fn test_asset_paths_are_rooted() {
        for path in [LOGO_IMAGE, HERO_IMAGE] {
            assert!(path.starts_with("/images/"));
            assert!(path.ends_with(".png"));
        }
    }
}
