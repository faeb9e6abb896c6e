//! Helper functions for building consumer API queries

use crate::config::api;

/// Quote a value as an OData string literal (single quotes doubled)
pub fn odata_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Build the `limit=..&$filter=(field eq 'value')` query used by list endpoints
///
/// The filter expression is percent-encoded so names containing spaces,
/// ampersands or quotes survive the trip to the server.
pub fn eq_filter_query(field: &str, value: &str) -> String {
    let filter = format!("({} eq {})", field, odata_literal(value));
    format!(
        "limit={}&$filter={}",
        api::PAGE_LIMIT,
        urlencoding::encode(&filter)
    )
}
