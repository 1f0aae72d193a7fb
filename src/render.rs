use crate::models::Recommendation;

const COLUMNS: [&str; 7] = [
    "ID",
    "Name",
    "Original Product ID",
    "Recommendation Name",
    "Recommendation ID",
    "Reason",
    "Activated",
];

/// Renders search results as the table markup the results container expects
///
/// Column order is fixed: ID, Name, Original Product ID, Recommendation Name,
/// Recommendation ID, Reason, Activated. Note that the recommendation product
/// name precedes the product id, matching the column headers. One `row_{i}`
/// row per record; values are inserted verbatim.
pub fn render_results_table(recs: &[Recommendation]) -> String {
    let mut table = String::from(r#"<table class="table table-striped" cellpadding="10">"#);

    table.push_str("<thead><tr>");
    for column in COLUMNS {
        table.push_str(&format!(r#"<th class="col-md-2">{}</th>"#, column));
    }
    table.push_str("</tr></thead><tbody>");

    for (i, rec) in recs.iter().enumerate() {
        let id = rec.id.map(|v| v.to_string()).unwrap_or_default();
        table.push_str(&format!(
            r#"<tr id="row_{}"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            i,
            id,
            rec.name,
            rec.original_product_id,
            rec.recommendation_product_name,
            rec.recommendation_product_id,
            rec.reason,
            rec.activated,
        ));
    }

    table.push_str("</tbody></table>");
    table
}
