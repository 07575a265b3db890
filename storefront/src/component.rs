//! Spin HTTP component: routing and request handling.
//!
//! One-shot fetches per request; a failed fetch renders the static
//! error page whose "Try again" link simply re-requests the same URL.

use spin_sdk::http::{Method, Request, Response};
use spin_sdk::http_component;

use roam_auth::AuthClient;
use roam_data::StoreClient;

use crate::data::load_catalog;
use crate::pages;
use crate::query::{parse_form, BrowseParams};
use crate::sections::package_record_from_form;

const SESSION_COOKIE: &str = "roam_session";

#[http_component]
fn handle_storefront(req: Request) -> anyhow::Result<Response> {
    let path = req.path().to_string();
    let method = req.method().clone();

    match (method, path.as_str()) {
        (Method::Get, "/") | (Method::Get, "/packages") => catalog(req.query()),
        (Method::Get, p) if p.starts_with("/package/") => {
            detail(p.trim_start_matches("/package/"))
        }
        (Method::Get, "/admin") => admin(&req, None),
        (Method::Post, "/admin/signin") => admin_signin(&req),
        (Method::Post, "/admin/signout") => admin_signout(&req),
        (Method::Post, "/admin/packages") => admin_create_package(&req),
        (Method::Post, p)
            if p.starts_with("/admin/packages/") && p.ends_with("/delete") =>
        {
            let id = p
                .trim_start_matches("/admin/packages/")
                .trim_end_matches("/delete");
            admin_delete_package(&req, id)
        }
        (Method::Post, "/admin/agencies") => admin_create_agency(&req),
        _ => not_found(),
    }
}

fn store_client() -> StoreClient {
    StoreClient::new(variable("store_url"), variable("store_anon_key"))
}

fn auth_client() -> AuthClient {
    AuthClient::new(variable("store_url"), variable("store_anon_key"))
}

fn variable(name: &str) -> String {
    spin_sdk::variables::get(name).unwrap_or_default()
}

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

fn catalog(query: &str) -> anyhow::Result<Response> {
    let params = BrowseParams::from_query_string(query);
    match load_catalog(&store_client()) {
        Ok(snapshot) => html(pages::catalog_page(&snapshot, &params, today())),
        Err(err) => {
            let href = if query.is_empty() {
                "/packages".to_string()
            } else {
                format!("/packages?{}", query)
            };
            html(pages::error_page(&err.to_string(), &href))
        }
    }
}

fn detail(id: &str) -> anyhow::Result<Response> {
    match load_catalog(&store_client()) {
        Ok(snapshot) => match pages::detail_page(&snapshot, id, today()) {
            Some(page) => html(page),
            None => {
                html_status(404, pages::not_found_page(&snapshot.config))
            }
        },
        Err(err) => html(pages::error_page(&err.to_string(), &format!("/package/{}", id))),
    }
}

/// The admin panel: verify the session cookie, then render the full
/// package/agency lists.
fn admin(req: &Request, notice: Option<&str>) -> anyhow::Result<Response> {
    let client = store_client();
    let config = client.fetch_config().unwrap_or_default();

    let Some(token) = session_token(req) else {
        return html(pages::admin_signin_page(&config, notice));
    };
    match auth_client().verify(&token) {
        Ok(user) if user.is_admin() => {}
        _ => return html(pages::admin_signin_page(&config, notice)),
    }

    match (
        client.fetch_all_package_records(),
        client.fetch_agency_records(),
    ) {
        (Ok(packages), Ok(agencies)) => {
            html(pages::admin_page(&packages, &agencies, &config, notice))
        }
        (Err(err), _) | (_, Err(err)) => html(pages::error_page(&err.to_string(), "/admin")),
    }
}

fn admin_signin(req: &Request) -> anyhow::Result<Response> {
    let form = parse_form(std::str::from_utf8(req.body()).unwrap_or(""));
    let field = |name: &str| {
        form.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };

    match auth_client().sign_in(&field("email"), &field("password")) {
        Ok(session) if session.user.is_admin() => Ok(Response::builder()
            .status(303)
            .header("location", "/admin")
            .header(
                "set-cookie",
                format!(
                    "{}={}; Path=/; HttpOnly; SameSite=Lax",
                    SESSION_COOKIE, session.access_token
                ),
            )
            .build()),
        Ok(_) => {
            let config = store_client().fetch_config().unwrap_or_default();
            html(pages::admin_signin_page(
                &config,
                Some("This account does not have admin access"),
            ))
        }
        Err(err) => {
            let config = store_client().fetch_config().unwrap_or_default();
            html(pages::admin_signin_page(&config, Some(&err.to_string())))
        }
    }
}

fn admin_signout(req: &Request) -> anyhow::Result<Response> {
    if let Some(token) = session_token(req) {
        // Best effort; the cookie is cleared regardless.
        let _ = auth_client().sign_out(&token);
    }
    Ok(Response::builder()
        .status(303)
        .header("location", "/admin")
        .header(
            "set-cookie",
            format!("{}=; Path=/; Max-Age=0", SESSION_COOKIE),
        )
        .build())
}

fn admin_create_package(req: &Request) -> anyhow::Result<Response> {
    with_admin_store(req, |store| {
        let form = parse_form(std::str::from_utf8(req.body()).unwrap_or(""));
        let record = package_record_from_form(&form);
        store.insert_package(&record).map(|_| ())
    })
}

fn admin_delete_package(req: &Request, id: &str) -> anyhow::Result<Response> {
    let id = roam_travel::ids::PackageId::new(id);
    with_admin_store(req, |store| store.delete_package(&id))
}

fn admin_create_agency(req: &Request) -> anyhow::Result<Response> {
    with_admin_store(req, |store| {
        let form = parse_form(std::str::from_utf8(req.body()).unwrap_or(""));
        let field = |name: &str| {
            form.iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let record = roam_data::AgencyRecord {
            name: field("name"),
            rating: field("rating").and_then(|v| v.parse().ok()),
            ..Default::default()
        };
        store.insert_agency(&record).map(|_| ())
    })
}

/// Run an admin mutation under the session's token. Failures come back
/// as a transient notice on the panel; the list is re-fetched as-is,
/// so nothing is optimistically applied.
fn with_admin_store<F>(req: &Request, mutate: F) -> anyhow::Result<Response>
where
    F: FnOnce(&StoreClient) -> Result<(), roam_data::StoreError>,
{
    let Some(token) = session_token(req) else {
        return admin(req, None);
    };
    let store = StoreClient::new(variable("store_url"), variable("store_anon_key"))
        .with_bearer(token);

    match mutate(&store) {
        Ok(()) => Ok(Response::builder()
            .status(303)
            .header("location", "/admin")
            .build()),
        Err(err) => admin(req, Some(&format!("Change not saved: {}", err))),
    }
}

fn session_token(req: &Request) -> Option<String> {
    let cookies = req.header("cookie")?.as_str()?;
    cookies.split(';').find_map(|cookie| {
        let (name, value) = cookie.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

fn html(page: String) -> anyhow::Result<Response> {
    html_status(200, page)
}

fn html_status(status: u16, page: String) -> anyhow::Result<Response> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "text/html; charset=utf-8")
        .body(page)
        .build())
}

fn not_found() -> anyhow::Result<Response> {
    let config = store_client().fetch_config().unwrap_or_default();
    html_status(404, pages::not_found_page(&config))
}
