diesel::table! {
    recipes (id) {
        id -> Uuid,
        owner -> Uuid,
        #[max_length = 100]
        title -> Varchar,
        ingredients -> Array<Text>,
        steps -> Array<Text>,
        category -> Varchar,
        likes -> Int4,
        views -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
