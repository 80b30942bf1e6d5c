// Mirrors the externally owned delivery service schema; not managed by migrations.

diesel::table! {
    #[sql_name = "Restaurants"]
    restaurants (restaurant_id) {
        #[sql_name = "RestaurantID"]
        restaurant_id -> Text,
        #[sql_name = "RestaurantName"]
        restaurant_name -> Nullable<Text>,
        #[sql_name = "Manager"]
        manager -> Nullable<Text>,
        #[sql_name = "Email"]
        email -> Nullable<Text>,
        #[sql_name = "Years_as_manager"]
        years_as_manager -> Nullable<Integer>,
    }
}
