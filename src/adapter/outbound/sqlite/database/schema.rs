// Diesel table definitions matching `migrations/`.

diesel::table! {
    countries (code) {
        code -> Text,
        name -> Text,
        currency -> Text,
        active -> Bool,
    }
}

diesel::table! {
    indicators (id) {
        id -> BigInt,
        country_code -> Text,
        kind -> Text,
        year -> Integer,
        value -> Double,
        unit -> Text,
        source -> Text,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    exchange_rates (id) {
        id -> BigInt,
        origin -> Text,
        destination -> Text,
        rate_date -> Date,
        rate -> Double,
        variation -> Nullable<Double>,
        source -> Text,
    }
}

diesel::table! {
    risk_snapshots (id) {
        id -> BigInt,
        country_code -> Text,
        calculation_date -> Date,
        economic -> Double,
        exchange -> Double,
        stability -> Double,
        composite -> Double,
        tier -> Text,
        detail -> Text,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    alerts (id) {
        id -> BigInt,
        country_code -> Nullable<Text>,
        kind -> Text,
        severity -> Text,
        title -> Text,
        message -> Text,
        read -> Bool,
        event_date -> Date,
        created_at -> Timestamp,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    countries,
    indicators,
    exchange_rates,
    risk_snapshots,
    alerts,
);
