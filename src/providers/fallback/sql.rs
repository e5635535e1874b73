const KNOWN_TABLES: &[(&str, &str)] = &[
    ("user", "users"),
    ("order", "orders"),
    ("product", "products"),
    ("post", "posts"),
    ("project", "projects"),
];

const DEFAULT_TABLE: &str = "records";

/// First known table noun in the prompt, else `records`.
pub fn guess_table(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();
    KNOWN_TABLES
        .iter()
        .filter_map(|(stem, table)| lower.find(stem).map(|at| (at, *table)))
        .min_by_key(|(at, _)| *at)
        .map_or(DEFAULT_TABLE, |(_, table)| table)
}

/// Canned SQL for a natural language prompt.
pub fn sql_for(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    let table = guess_table(prompt);

    if lower.contains("create") || lower.contains("table") {
        format!(
            "CREATE TABLE {table} (\n  id BIGSERIAL PRIMARY KEY,\n  name TEXT NOT NULL,\n  \
             created_at TIMESTAMPTZ NOT NULL DEFAULT now()\n);"
        )
    } else if lower.contains("count") || lower.contains("how many") {
        format!("SELECT COUNT(*) AS total FROM {table};")
    } else if lower.contains("join") {
        let other = if table == "users" { "orders" } else { "users" };
        format!(
            "SELECT a.*, b.*\nFROM {table} a\nJOIN {other} b ON b.id = a.{}_id\nLIMIT 10;",
            other.trim_end_matches('s')
        )
    } else {
        format!("SELECT * FROM {table}\nORDER BY id DESC\nLIMIT 10;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_guess_prefers_earliest_known_noun() {
        assert_eq!(guess_table("list orders for each user"), "orders");
        assert_eq!(guess_table("Show all Products"), "products");
        assert_eq!(guess_table("anything at all"), "records");
    }

    #[test]
    fn prompt_keywords_pick_statement_shape() {
        assert!(sql_for("create a table for posts").starts_with("CREATE TABLE posts"));
        assert_eq!(sql_for("count users"), "SELECT COUNT(*) AS total FROM users;");
        assert!(sql_for("join orders with users").contains("JOIN users b ON b.id = a.user_id"));
        assert!(sql_for("latest projects").ends_with("LIMIT 10;"));
    }
}
