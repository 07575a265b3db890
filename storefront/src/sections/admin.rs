//! Admin panel sections: package/agency lists, CRUD forms, mutation
//! notices.

use roam_data::{AgencyRecord, PackageRecord};

use crate::sections::escape_html;

/// Transient notice banner for mutation outcomes. A failed mutation
/// surfaces here; the list below simply shows the unchanged rows.
pub fn render_notice(notice: Option<&str>) -> String {
    match notice {
        Some(text) => format!(r#"<div class="notice">{}</div>"#, escape_html(text)),
        None => String::new(),
    }
}

/// Sign-in form shown to anyone without an admin session.
pub fn render_admin_signin(error: Option<&str>) -> String {
    format!(
        r#"{notice}<form class="admin-form" method="POST" action="/admin/signin">
    <h2>Admin sign in</h2>
    <label>Email <input name="email" type="email" required></label>
    <label>Password <input name="password" type="password" required></label>
    <button class="btn" type="submit">Sign in</button>
</form>"#,
        notice = render_notice(error),
    )
}

/// The admin panel: package list with delete actions, plus create
/// forms for packages and agencies.
pub fn render_admin(
    packages: &[PackageRecord],
    agencies: &[AgencyRecord],
    notice: Option<&str>,
) -> String {
    let rows: Vec<String> = packages.iter().map(render_package_row).collect();
    let agency_options: Vec<String> = agencies
        .iter()
        .map(|agency| {
            format!(
                r#"<option value="{}">{}</option>"#,
                escape_html(agency.id.as_deref().unwrap_or("")),
                escape_html(agency.name.as_deref().unwrap_or("(unnamed)")),
            )
        })
        .collect();

    format!(
        r#"{notice}<h2>Packages</h2>
<table class="admin-table">
<tr><th>Title</th><th>Price</th><th>Status</th><th>Ranking</th><th></th></tr>
{rows}
</table>
<form class="admin-form" method="POST" action="/admin/packages">
    <h3>New package</h3>
    <label>Title <input name="title" required></label>
    <label>Price (whole units) <input name="price" type="number" min="0" required></label>
    <label>Advance (whole units) <input name="advance" type="number" min="0"></label>
    <label>Duration (days) <input name="duration_days" type="number" min="1" value="1"></label>
    <label>Group size <input name="group_size" type="number" min="1" value="1"></label>
    <label>Ranking <input name="ranking" type="number" value="0"></label>
    <label>Status <select name="status"><option value="open">open</option><option value="closed">closed</option></select></label>
    <label>Tags (comma separated) <input name="tags"></label>
    <label>Agency <select name="agency_id"><option value=""></option>{agency_options}</select></label>
    <label>Description <input name="description"></label>
    <label>Itinerary <input name="itinerary"></label>
    <label>Cover image URL <input name="image_url" type="url" placeholder="from the uploads bucket"></label>
    <button class="btn" type="submit">Create package</button>
</form>
<form class="admin-form" method="POST" action="/admin/agencies">
    <h3>New agency</h3>
    <label>Name <input name="name" required></label>
    <label>Rating <input name="rating" type="number" step="0.1" min="0" max="5"></label>
    <button class="btn" type="submit">Create agency</button>
</form>
<form class="admin-form" method="POST" action="/admin/signout">
    <button class="btn" type="submit">Sign out</button>
</form>"#,
        notice = render_notice(notice),
        rows = rows.join("\n"),
        agency_options = agency_options.join(""),
    )
}

fn render_package_row(record: &PackageRecord) -> String {
    let id = record.id.as_deref().unwrap_or("");
    format!(
        r#"<tr><td>{title}</td><td>{price}</td><td>{status}</td><td>{ranking}</td>
<td><form method="POST" action="/admin/packages/{id}/delete"><button class="btn" type="submit">Delete</button></form></td></tr>"#,
        title = escape_html(record.title.as_deref().unwrap_or("(untitled)")),
        price = record.price.unwrap_or(0) / 100,
        status = escape_html(record.status.as_deref().unwrap_or("open")),
        ranking = record.ranking.unwrap_or(0),
        id = escape_html(id),
    )
}

/// Build a package row from submitted form fields. Prices arrive in
/// whole currency units and are stored in minor units.
pub fn package_record_from_form(form: &[(String, String)]) -> PackageRecord {
    let field = |name: &str| {
        form.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    PackageRecord {
        title: field("title"),
        description: field("description"),
        price: field("price").and_then(|v| v.parse::<i64>().ok()).map(|p| p * 100),
        advance: field("advance").and_then(|v| v.parse::<i64>().ok()).map(|a| a * 100),
        duration_days: field("duration_days").and_then(|v| v.parse().ok()),
        group_size: field("group_size").and_then(|v| v.parse().ok()),
        status: field("status"),
        ranking: field("ranking").and_then(|v| v.parse().ok()),
        tags: field("tags")
            .map(|tags| {
                tags.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default(),
        itinerary: field("itinerary"),
        agency_id: field("agency_id"),
        image_url: field("image_url"),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_record_from_form() {
        let record = package_record_from_form(&form(&[
            ("title", "Spiti Valley Circuit"),
            ("price", "18999"),
            ("advance", "2000"),
            ("tags", "trekking, camping, "),
            ("status", "open"),
            ("agency_id", ""),
        ]));
        assert_eq!(record.title.as_deref(), Some("Spiti Valley Circuit"));
        assert_eq!(record.price, Some(1_899_900));
        assert_eq!(record.advance, Some(200_000));
        assert_eq!(record.tags, vec!["trekking", "camping"]);
        assert!(record.agency_id.is_none());
    }

    #[test]
    fn test_bad_numbers_become_absent() {
        let record = package_record_from_form(&form(&[("price", "cheap"), ("ranking", "top")]));
        assert!(record.price.is_none());
        assert!(record.ranking.is_none());
    }

    #[test]
    fn test_notice_rendering() {
        assert!(render_notice(None).is_empty());
        let html = render_notice(Some("Couldn't save package"));
        assert!(html.contains("notice"));
        assert!(html.contains("Couldn&#39;t save package"));
    }

    #[test]
    fn test_admin_lists_packages() {
        let record = PackageRecord {
            id: Some("pkg-1".to_string()),
            title: Some("Spiti".to_string()),
            price: Some(1_899_900),
            ..Default::default()
        };
        let html = render_admin(&[record], &[], None);
        assert!(html.contains("Spiti"));
        assert!(html.contains("/admin/packages/pkg-1/delete"));
    }
}
