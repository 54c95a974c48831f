//! Tests for the record validator

use serde_json::{Value, json};

use larder::core::services::validate_food_item;

use super::common::{item_missing, item_with, valid_item};

mod shape {
    use super::*;

    #[test]
    fn null_is_not_a_dictionary() {
        let result = validate_food_item(&Value::Null);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Food item must be a dictionary");
    }

    #[test]
    fn string_is_not_a_dictionary() {
        let result = validate_food_item(&json!("F001"));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Food item must be a dictionary");
    }

    #[test]
    fn array_is_not_a_dictionary() {
        let result = validate_food_item(&json!([valid_item()]));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Food item must be a dictionary");
    }

    #[test]
    fn number_is_not_a_dictionary() {
        let result = validate_food_item(&json!(42));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Food item must be a dictionary");
    }
}

mod required_fields {
    use super::*;

    #[test]
    fn each_missing_field_is_named() {
        for field in [
            "id",
            "name",
            "category",
            "quantity",
            "unit",
            "expiration_date",
            "storage_location",
        ] {
            let result = validate_food_item(&item_missing(field));
            assert!(!result.is_valid, "missing {field} should invalidate");
            assert_eq!(result.message, format!("Missing required field: {field}"));
        }
    }

    #[test]
    fn first_missing_field_in_canonical_order_wins() {
        let mut item = item_missing("unit");
        item.as_object_mut().unwrap().remove("id");
        let result = validate_food_item(&item);
        assert_eq!(result.message, "Missing required field: id");
    }

    #[test]
    fn empty_object_reports_id_first() {
        let result = validate_food_item(&json!({}));
        assert_eq!(result.message, "Missing required field: id");
    }
}

mod field_types {
    use super::*;

    #[test]
    fn id_must_be_a_string() {
        let result = validate_food_item(&item_with("id", json!(1)));
        assert!(!result.is_valid);
        assert_eq!(result.message, "ID must be a string");
    }

    #[test]
    fn name_must_be_a_string() {
        let result = validate_food_item(&item_with("name", json!(["Apples"])));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Name must be a string");
    }

    #[test]
    fn quantity_rejects_strings() {
        let result = validate_food_item(&item_with("quantity", json!("25")));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Quantity must be a positive number");
    }

    #[test]
    fn quantity_rejects_negative() {
        let result = validate_food_item(&item_with("quantity", json!(-5)));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Quantity must be a positive number");
    }

    #[test]
    fn quantity_rejects_bool() {
        let result = validate_food_item(&item_with("quantity", json!(true)));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Quantity must be a positive number");
    }

    // The message says "positive" but the documented check is non-negativity.
    #[test]
    fn quantity_accepts_zero() {
        assert!(validate_food_item(&item_with("quantity", json!(0))).is_valid);
    }

    #[test]
    fn quantity_accepts_fractional() {
        assert!(validate_food_item(&item_with("quantity", json!(2.5))).is_valid);
    }

    #[test]
    fn category_must_be_a_string() {
        let result = validate_food_item(&item_with("category", json!(7)));
        assert!(!result.is_valid);
        assert_eq!(result.message, "Category must be a string");
    }

    #[test]
    fn unknown_category_lists_the_valid_set() {
        let result = validate_food_item(&item_with("category", json!("Electronics")));
        assert!(!result.is_valid);
        assert_eq!(
            result.message,
            "Invalid category. Must be one of: Produce, Dairy, Bakery, Meat, Frozen, Canned, Dry Goods, Prepared"
        );
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let result = validate_food_item(&item_with("category", json!("produce")));
        assert!(!result.is_valid);
    }
}

mod valid_records {
    use larder::core::models::Category;

    use super::*;

    #[test]
    fn fully_populated_record_is_valid() {
        let result = validate_food_item(&valid_item());
        assert!(result.is_valid);
        assert_eq!(result.message, "Food item data is valid");
    }

    #[test]
    fn every_category_in_the_fixed_set_is_valid() {
        for category in Category::ALL {
            let result = validate_food_item(&item_with("category", json!(category.name())));
            assert!(result.is_valid, "category {category} should validate");
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let result = validate_food_item(&item_with("note", json!("donated last week")));
        assert!(result.is_valid);
    }

    // Date format is the expiration arithmetic's concern, not the validator's.
    #[test]
    fn expiration_date_format_is_not_checked() {
        let result = validate_food_item(&item_with("expiration_date", json!("not-a-date")));
        assert!(result.is_valid);
    }

    #[test]
    fn validation_is_pure_and_repeatable() {
        let item = valid_item();
        let before = item.clone();
        let first = validate_food_item(&item);
        let second = validate_food_item(&item);
        assert_eq!(first, second);
        assert_eq!(item, before);
    }
}
