// fixtures/products.rs - Sample product documents
//
// Shaped like raw Sanity documents (`_id`, `_type`, camelCase fields) with
// a few deliberately incomplete records.

use serde_json::{json, Value};

use crate::web_app::model::Product;

/// Raw query result for `*[_type == "product"]`
pub fn sample_catalog() -> Value {
    json!([
        {
            "_id": "p1",
            "_type": "product",
            "id": "p1",
            "name": "Mug",
            "imagePath": "/images/products/mug.png",
            "price": 12,
            "description": "Red Mug",
            "discountPercentage": 0,
            "isFeaturedProduct": true,
            "stockLevel": 40,
            "category": "Kitchen"
        },
        {
            "_id": "p2",
            "_type": "product",
            "name": "Granite Dining Table",
            "imagePath": "/images/products/table.png",
            "price": 250.5,
            "description": "Granite dining table with dining chair",
            "discountPercentage": 10,
            "isFeaturedProduct": false,
            "stockLevel": 3,
            "category": "Dining"
        },
        {
            "_id": "p3",
            "_type": "product",
            "name": "Outdoor Sofa Set",
            "price": "499",
            "description": "Outdoor sofa set"
        }
    ])
}

pub fn sample_products() -> Vec<Product> {
    serde_json::from_value(sample_catalog()).unwrap_or_default()
}
