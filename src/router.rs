use crate::dashboard::{Dashboard, FilterInput, Session};
use crate::domain::{DistrictStat, Record, Summary};
use crate::errors::ServerError;
use crate::responses::{file_response, html_response, json_response, redirect, ResultResp};
use crate::spreadsheets::export_properties_xlsx;
use crate::state::AppState;
use crate::templates::components::props_count;
use crate::templates::pages::{self, DashboardVm, DASHBOARD_CAP};
use astra::Request;
use maud::html;
use serde::Serialize;
use tracing::info;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");

    match (method, path) {
        ("GET", "/") => dashboard_view(state, query, false),
        ("GET", "/reset") => dashboard_view(state, "", true),
        ("GET", "/properties") => properties_partial(state, query),
        ("GET", "/simple") => {
            let dashboard = state.dashboard()?;
            html_response(pages::simple_page(dashboard.records()))
        }
        ("GET", "/export") => {
            let dashboard = state.dashboard()?;
            let session = session_from_query(&dashboard, query);
            export_properties_xlsx(session.results())
        }
        ("GET", "/api/properties") => {
            let dashboard = state.dashboard()?;
            let session = session_from_query(&dashboard, query);
            json_response(&PropertiesJson {
                total: session.count(),
                shown: session.results().len().min(DASHBOARD_CAP),
                properties: session.results().iter().take(DASHBOARD_CAP).copied().collect(),
            })
        }
        ("GET", "/api/summary") => {
            let dashboard = state.dashboard()?;
            json_response(&SummaryJson {
                summary: dashboard.summary(),
                top_districts: dashboard.top_districts(),
                districts: dashboard.district_options(),
                price_ceiling: dashboard.price_ceiling(),
            })
        }
        ("POST", "/retry") => {
            let count = state.reload()?;
            info!(count, "dataset reloaded on request");
            redirect("/")
        }
        ("GET", p) if p.starts_with("/assets/img/") => {
            file_response(state.images.dir(), &p["/assets/img/".len()..])
        }
        ("GET", p) if p.starts_with("/static/") => {
            file_response(&state.config.static_dir, &p["/static/".len()..])
        }
        (_, "/" | "/reset" | "/properties" | "/simple" | "/export" | "/retry") => Err(
            ServerError::BadRequest(format!("Method {method} not allowed on {path}")),
        ),
        _ => Err(ServerError::NotFound),
    }
}

fn session_from_query<'a>(dashboard: &'a Dashboard, query: &str) -> Session<'a> {
    let mut session = Session::new(dashboard);
    session.update(FilterInput::from_query(query));
    session
}

fn dashboard_view(state: &AppState, query: &str, reset: bool) -> ResultResp {
    let dashboard = state.dashboard()?;
    let mut session = session_from_query(&dashboard, query);
    let notice = reset.then(|| session.reset());

    html_response(pages::dashboard_page(&DashboardVm {
        session: &session,
        images: &state.images,
        notice,
    }))
}

fn properties_partial(state: &AppState, query: &str) -> ResultResp {
    let dashboard = state.dashboard()?;
    let session = session_from_query(&dashboard, query);

    html_response(html! {
        (pages::property_results(&session, &state.images))
        (props_count(session.count(), true))
    })
}

#[derive(Serialize)]
struct PropertiesJson<'a> {
    total: usize,
    shown: usize,
    properties: Vec<&'a Record>,
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    summary: &'a Summary,
    top_districts: &'a [DistrictStat],
    districts: &'a [String],
    price_ceiling: f64,
}
