use crate::catalog::Catalog;
use crate::config::Config;
use crate::errors::ServerError;
use crate::params::Params;
use crate::query::{
    run, similar_properties, AgentCriteria, AgentSort, AreaCriteria, BlogCriteria, JobCriteria,
    ProjectCriteria, PropertyCriteria, PropertySort, Purpose, TransactionCriteria,
    TransactionStats, ALL_LABEL,
};
use crate::responses::{html_response, text_response, xlsx_response, ResultResp};
use crate::services::{assistant, estimate, EstimateInput};
use crate::spreadsheets::transactions_workbook;
use crate::templates::components::chat_exchange;
use crate::templates::pages::{self, SearchVm};
use crate::templates::notice;
use astra::Request;
use chrono::Utc;
use std::io::Read;
use std::sync::Arc;

/// Form bodies beyond this are cut off.
const MAX_FORM_BYTES: u64 = 64 * 1024;
const SIMILAR_LIMIT: usize = 4;

/// Shared by every worker. The catalog is never mutated; a reload would
/// swap the whole `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Config,
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let params = Params::from_request(&req);
    let catalog = &state.catalog;

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(catalog)),
        ("GET", "/search") => search(&params, state),
        ("GET", p) if p.starts_with("/property/") => {
            property_detail(&p["/property/".len()..], catalog)
        }
        ("GET", "/agents") => {
            let mut criteria = AgentCriteria::from_params(&params);
            criteria.sort.get_or_insert(AgentSort::Rating);
            let agents = run(&catalog.agents, &criteria);
            html_response(pages::agents_page(&criteria, &agents))
        }
        ("GET", "/areas") => {
            let criteria = AreaCriteria::from_params(&params);
            html_response(pages::areas_page(&criteria, &run(&catalog.areas, &criteria)))
        }
        ("GET", "/blog") => blog(&params, catalog),
        ("GET", "/projects") => {
            let criteria = ProjectCriteria::from_params(&params);
            html_response(pages::projects_page(&criteria, &run(&catalog.projects, &criteria)))
        }
        ("GET", "/transactions") => {
            let criteria = TransactionCriteria::from_params(&params);
            let rows = run(&catalog.transactions, &criteria);
            let stats = TransactionStats::compute(&rows, &catalog.transactions);
            html_response(pages::transactions_page(&criteria, &rows, &stats, &params))
        }
        ("GET", "/transactions/export") => {
            let criteria = TransactionCriteria::from_params(&params);
            let rows = run(&catalog.transactions, &criteria);
            let buffer = transactions_workbook(&rows)?;
            tracing::info!(rows = rows.len(), "transactions exported");
            xlsx_response(buffer, "atog_transactions.xlsx")
        }
        ("GET", "/careers") => careers(&params, catalog),
        ("POST", "/careers/apply") => apply(&read_form(&mut req)?),
        ("GET", "/contact") => html_response(pages::contact_page()),
        ("POST", "/contact") => contact(&read_form(&mut req)?),
        ("GET", "/sell") => html_response(pages::sell_page()),
        ("POST", "/sell") => sell(&read_form(&mut req)?),
        ("GET", "/estimate") => html_response(pages::estimate_page()),
        ("POST", "/estimate") => {
            let input = EstimateInput::from_params(&read_form(&mut req)?);
            let est = estimate(&input, &mut rand::thread_rng());
            tracing::info!(
                location = input.location.as_deref().unwrap_or("-"),
                value = est.value,
                "estimate requested"
            );
            html_response(pages::estimate_result(&input, &est))
        }
        ("POST", "/assistant") => {
            let form = read_form(&mut req)?;
            let message = form.get("message").unwrap_or("");
            html_response(chat_exchange(message, assistant::reply(message)))
        }
        ("GET", "/about") => html_response(pages::about_page(catalog)),
        ("GET", "/login") => html_response(pages::login_page(params.get("mode") == Some("signup"))),
        ("POST", "/login") => login(&read_form(&mut req)?),
        ("GET", "/health") => text_response("ok"),
        _ => Err(ServerError::NotFound),
    }
}

fn search(params: &Params, state: &AppState) -> ResultResp {
    let mut criteria = PropertyCriteria::from_params(params);
    criteria.purpose.get_or_insert(Purpose::Buy);
    criteria.sort.get_or_insert(PropertySort::Newest);

    let results = run(&state.catalog.properties, &criteria);
    let limit = params
        .parse_as::<usize>("limit")
        .filter(|n| *n > 0)
        .unwrap_or(state.config.page_size);
    tracing::debug!(matches = results.len(), limit, "property search");

    html_response(pages::search_page(&SearchVm {
        criteria: &criteria,
        results: &results,
        limit,
        page_size: state.config.page_size,
        view: params.get("view"),
        params,
    }))
}

fn property_detail(slug: &str, catalog: &Catalog) -> ResultResp {
    let property = catalog.property_by_slug(slug).ok_or(ServerError::NotFound)?;
    let similar = similar_properties(&catalog.properties, property, SIMILAR_LIMIT);
    html_response(pages::property_page(property, &similar, Utc::now()))
}

/// "All" followed by each distinct value, in fixture order.
fn selector_values<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = vec![ALL_LABEL];
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

fn blog(params: &Params, catalog: &Catalog) -> ResultResp {
    let criteria = BlogCriteria::from_params(params);
    let categories = selector_values(catalog.blogs.iter().map(|b| b.category.as_str()));

    let featured = criteria
        .shows_featured()
        .then(|| catalog.blogs.iter().find(|b| b.featured))
        .flatten();
    let posts: Vec<_> = run(&catalog.blogs, &criteria)
        .into_iter()
        .filter(|b| featured.map_or(true, |f| f.id != b.id))
        .collect();

    html_response(pages::blog_page(&criteria, featured, &posts, &categories))
}

fn careers(params: &Params, catalog: &Catalog) -> ResultResp {
    let criteria = JobCriteria::from_params(params);
    let departments = selector_values(catalog.jobs.iter().map(|j| j.department.as_str()));
    let jobs = run(&catalog.jobs, &criteria);
    html_response(pages::careers_page(&criteria, &jobs, &departments))
}

fn read_form(req: &mut Request) -> Result<Params, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }
    let raw = String::from_utf8(raw)
        .map_err(|_| ServerError::BadRequest("form body is not valid UTF-8".into()))?;
    Ok(Params::parse(&raw))
}

fn require_email(form: &Params) -> Result<&str, ServerError> {
    let email = form.require("email")?;
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(ServerError::BadRequest(format!("invalid email '{email}'")));
    }
    Ok(email)
}

fn contact(form: &Params) -> ResultResp {
    let name = form.require("name")?;
    let email = require_email(form)?;
    let message = form.require("message")?;

    tracing::info!(
        name,
        email,
        subject = form.get("subject").unwrap_or("other"),
        chars = message.chars().count(),
        "contact message received"
    );
    html_response(notice(&format!(
        "Thank you, {name}! Your message has been sent. We'll get back to you within 24 hours."
    )))
}

fn sell(form: &Params) -> ResultResp {
    let name = form.require("name")?;
    let email = require_email(form)?;
    let phone = form.require("phone")?;

    tracing::info!(
        name,
        email,
        phone,
        location = form.get("location").unwrap_or("-"),
        property_type = form.get("propertyType").unwrap_or("-"),
        "sell request received"
    );
    html_response(notice(&format!(
        "Thanks, {name}! A specialist agent will call you shortly to discuss your property."
    )))
}

fn apply(form: &Params) -> ResultResp {
    let name = form.require("name")?;
    let email = require_email(form)?;
    let position = form.require("position")?;

    tracing::info!(name, email, position, "job application received");
    html_response(notice(&format!(
        "Thank you for applying for {position}, {name}. Our recruitment team will be in touch."
    )))
}

fn login(form: &Params) -> ResultResp {
    let email = require_email(form)?;
    form.require("password")?;

    if form.get("mode") == Some("signup") {
        let name = form.require("name")?;
        if form.get("password") != form.get("confirmPassword") {
            return Err(ServerError::BadRequest("passwords do not match".into()));
        }
        tracing::info!(name, email, "sign-up submitted");
        return html_response(notice(&format!(
            "Welcome to Atog, {name}! Accounts are coming soon; we'll email {email} when yours is ready."
        )));
    }

    tracing::info!(email, "sign-in submitted");
    html_response(notice(
        "Sign-in is not available yet. We'll let you know as soon as accounts open.",
    ))
}
