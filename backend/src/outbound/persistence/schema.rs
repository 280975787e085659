//! Diesel table definitions mirroring `migrations/`.

diesel::table! {
    products (id) {
        id -> Integer,
        name -> Text,
        price -> Double,
    }
}

diesel::table! {
    cart (id) {
        id -> Integer,
        product_id -> Integer,
        qty -> BigInt,
    }
}

diesel::joinable!(cart -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(cart, products);
