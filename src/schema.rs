table! {
    comments (id) {
        id -> BigInt,
        author -> Text,
        content -> Text,
        timestamp -> Timestamp,
    }
}
