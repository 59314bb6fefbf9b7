use crate::domain::model::OrderSubmission;

/// Item name shown on the board for a new order row.
pub fn item_name(submission: &OrderSubmission) -> String {
    format!(
        "New Order for {} {}",
        submission.first_name, submission.last_name
    )
}

/// Column-values payload for the create_item mutation. The board expects a
/// JSON object serialized as a string: status column fixed to "New Order",
/// quantity as a string in the numbers column, the joined fragrance list in
/// the dropdown column, and the order date as YYYY-MM-DD.
pub fn column_values(submission: &OrderSubmission) -> String {
    format!(
        r#"{{"status":"New Order", "numbers":"{}", "dropdown": "{}", "date_1":"{}"}}"#,
        submission.quantity,
        submission.fragrances,
        submission.date.format("%Y-%m-%d"),
    )
}

/// Builds the full create_item mutation. Field values are interpolated into
/// the query text rather than passed as GraphQL variables, matching the wire
/// format the board integration was built against.
pub fn build_create_item_mutation(
    board_id: u64,
    group_id: &str,
    submission: &OrderSubmission,
) -> String {
    let columns = escape_graphql_string(&column_values(submission));

    format!(
        "mutation {{\n  create_item(\n    board_id: {board_id},\n    group_id: \"{group_id}\",\n    item_name: \"{item}\",\n    column_values: \"{columns}\") {{\n      id\n  }}\n}}",
        item = item_name(submission),
    )
}

// The column payload is itself a quoted GraphQL string, so its quotes and
// backslashes need escaping before it is embedded in the query.
fn escape_graphql_string(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn submission() -> OrderSubmission {
        OrderSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            quantity: 5,
            fragrances: "Vanilla, Rose".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        }
    }

    #[test]
    fn test_item_name() {
        assert_eq!(item_name(&submission()), "New Order for Jane Doe");
    }

    #[test]
    fn test_column_values_payload() {
        let payload = column_values(&submission());

        assert!(payload.contains(r#""status":"New Order""#));
        assert!(payload.contains(r#""numbers":"5""#));
        assert!(payload.contains(r#""dropdown": "Vanilla, Rose""#));
        assert!(payload.contains(r#""date_1":"2024-07-15""#));
    }

    #[test]
    fn test_column_values_uses_current_date_format() {
        let today = chrono::Local::now().date_naive();
        let mut sub = submission();
        sub.date = today;

        let payload = column_values(&sub);
        assert!(payload.contains(&format!(r#""date_1":"{}""#, today.format("%Y-%m-%d"))));
    }

    #[test]
    fn test_mutation_embeds_board_and_item() {
        let mutation = build_create_item_mutation(7302640219, "topics", &submission());

        assert!(mutation.contains("create_item"));
        assert!(mutation.contains("board_id: 7302640219"));
        assert!(mutation.contains(r#"group_id: "topics""#));
        assert!(mutation.contains(r#"item_name: "New Order for Jane Doe""#));
    }

    #[test]
    fn test_mutation_escapes_column_payload() {
        let mutation = build_create_item_mutation(7302640219, "topics", &submission());

        // the embedded payload carries escaped quotes, never raw ones
        assert!(mutation.contains(r#"\"numbers\":\"5\""#));
        assert!(mutation.contains(r#"\"dropdown\": \"Vanilla, Rose\""#));
        assert!(!mutation.contains(r#"column_values: "{""#));
    }
}
