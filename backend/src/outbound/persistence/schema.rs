//! Diesel table definitions for the PostgreSQL schema.

diesel::table! {
    profiles (profile_id) {
        profile_id -> Uuid,
        user_id -> Uuid,
        name -> Varchar,
        studiengang -> Nullable<Varchar>,
        university -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    friendships (friendship_id) {
        friendship_id -> Uuid,
        user1_id -> Uuid,
        user2_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    places (place_id) {
        place_id -> Uuid,
        name -> Varchar,
        location -> Nullable<Varchar>,
    }
}

diesel::table! {
    activities (activity_id) {
        activity_id -> Uuid,
        user_id -> Uuid,
        place_id -> Uuid,
        time -> Timestamptz,
        picture -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(activities -> places (place_id));

diesel::allow_tables_to_appear_in_same_query!(activities, places);
diesel::allow_tables_to_appear_in_same_query!(friendships, profiles);
