//! Run the full pipeline against an illustrative inventory
//!
//! Exercises all six operations and prints six labeled sections. Expiration
//! dates are generated relative to the current date so the urgency sections
//! are meaningful on any run day.

use chrono::{Duration, Local, NaiveDate};
use serde_json::Value;

use larder::core::models::{Category, FoodItem, Recipient};
use larder::core::services::expiration::{DATE_FORMAT, DEFAULT_THRESHOLD};
use larder::core::services::{
    days_until_expiration, format_food_item, identify_expiring_items, match_donations,
    sort_items_by_expiration, validate_food_item,
};
use larder::output::{
    DemoReport, ExpirationLine, MatchLine, OutputMode, SortedLine, ValidationLine,
};

/// Run the demo pipeline and render the report
pub fn demo(days: Option<i64>, mode: OutputMode) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let threshold = days.unwrap_or(DEFAULT_THRESHOLD);
    log::debug!("running demo with threshold {threshold} (today: {today})");

    let inventory = sample_inventory(today);
    let recipients = sample_recipients();

    let records: Vec<Value> = inventory.iter().map(FoodItem::to_value).collect();
    let inventory_value = Value::Array(records.clone());
    let recipients_value = Value::Array(recipients.iter().map(Recipient::to_value).collect());

    let validation = records
        .iter()
        .map(|record| {
            let result = validate_food_item(record);
            ValidationLine {
                name: name_of(record),
                is_valid: result.is_valid,
                message: result.message,
            }
        })
        .collect();

    let expiration = inventory
        .iter()
        .map(|item| ExpirationLine {
            name: item.name.clone(),
            days: days_until_expiration(Some(&item.expiration_date)),
        })
        .collect();

    let expiring_soon = identify_expiring_items(&inventory_value, days)
        .iter()
        .map(name_of)
        .collect();

    let sorted_by_expiration = sort_items_by_expiration(&inventory_value)
        .iter()
        .map(|record| SortedLine {
            name: name_of(record),
            expiration_date: record
                .get("expiration_date")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .collect();

    let matches = match_donations(&inventory_value, &recipients_value)
        .iter()
        .map(|m| MatchLine {
            item: name_of(&m.item),
            recipient: name_of(&m.recipient),
        })
        .collect();

    let formatted = records.iter().map(format_food_item).collect();

    let report = DemoReport {
        threshold,
        validation,
        expiration,
        expiring_soon,
        sorted_by_expiration,
        matches,
        formatted,
    };
    report.render(mode);

    Ok(())
}

fn name_of(record: &Value) -> String {
    record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("(unnamed)")
        .to_string()
}

fn date_offset(today: NaiveDate, days: i64) -> String {
    (today + Duration::days(days)).format(DATE_FORMAT).to_string()
}

fn sample_inventory(today: NaiveDate) -> Vec<FoodItem> {
    vec![
        FoodItem::new(
            "F001",
            "Apples",
            Category::Produce,
            25.0,
            "kg",
            &date_offset(today, 5),
            "Cooler 3",
        ),
        FoodItem::new(
            "F002",
            "Milk",
            Category::Dairy,
            15.0,
            "liter",
            &date_offset(today, 1),
            "Refrigerator 1",
        ),
        FoodItem::new(
            "F003",
            "Bread",
            Category::Bakery,
            8.0,
            "loaf",
            &date_offset(today, -2),
            "Shelf 2",
        ),
        FoodItem::new(
            "F004",
            "Canned Beans",
            Category::Canned,
            40.0,
            "can",
            &date_offset(today, 30),
            "Pantry 1",
        ),
    ]
}

fn sample_recipients() -> Vec<Recipient> {
    vec![
        Recipient::new(
            "R001",
            "City Food Bank",
            vec![Category::Produce, Category::Canned, Category::Bakery],
        ),
        Recipient::new(
            "R002",
            "Community Shelter",
            vec![Category::Dairy, Category::Bakery, Category::Prepared],
        ),
    ]
}
