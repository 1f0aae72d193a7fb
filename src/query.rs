use crate::form::FormData;

/// Builds the search query string from the current form state
///
/// Parameters are appended in a fixed order (`name`, `reason`, `activated`)
/// and joined with `&` only between included entries. `name` and `reason` are
/// included when non-empty; `activated` only when the form flag coerces to
/// true, so `activated=false` can never be sent through this path. Values are
/// inserted verbatim, without percent encoding, matching what the server
/// expects from this form.
pub fn build_search_query(form: &FormData) -> String {
    let params: [(&str, &str, bool); 3] = [
        ("name", form.name.as_str(), !form.name.is_empty()),
        ("reason", form.reason.as_str(), !form.reason.is_empty()),
        ("activated", "true", form.activated),
    ];

    let mut query = String::new();
    for (key, value, include) in params {
        if !include {
            continue;
        }
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.push_str(value);
    }
    query
}
