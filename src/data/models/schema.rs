diesel::table! {
    products (id) {
        id -> BigInt,
        name -> Text,
        category -> Text,
        price -> Double,
        original_price -> Nullable<Double>,
        image -> Text,
        images -> Nullable<Text>,
        description -> Text,
        material -> Text,
        stone -> Text,
        size -> Text,
        in_stock -> Bool,
        featured -> Bool,
    }
}

diesel::table! {
    categories (id) {
        id -> BigInt,
        name -> Text,
        icon -> Text,
    }
}

diesel::table! {
    orders (id) {
        id -> BigInt,
        total -> Double,
        customer_name -> Nullable<Text>,
        customer_phone -> Nullable<Text>,
        customer_address -> Nullable<Text>,
        customer_email -> Nullable<Text>,
        status -> Text,
        created_at -> Timestamp,
        updated_at -> Nullable<Timestamp>,
    }
}

diesel::table! {
    order_items (id) {
        id -> BigInt,
        order_id -> BigInt,
        product_id -> BigInt,
        product_name -> Text,
        price -> Double,
        quantity -> BigInt,
        subtotal -> Double,
    }
}

diesel::table! {
    admin_users (id) {
        id -> BigInt,
        username -> Text,
        password_hash -> Text,
        role -> Text,
        is_active -> Bool,
        last_login -> Nullable<Timestamp>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    admin_sessions (id) {
        id -> BigInt,
        admin_id -> BigInt,
        token -> Text,
        expires_at -> Timestamp,
        created_at -> Timestamp,
    }
}

diesel::joinable!(order_items -> orders (order_id));
diesel::joinable!(admin_sessions -> admin_users (admin_id));

diesel::allow_tables_to_appear_in_same_query!(
    admin_sessions,
    admin_users,
    categories,
    order_items,
    orders,
    products,
);
