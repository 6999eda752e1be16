use crate::errors::AppError;
use crate::models::{DayCountResponse, DayCounts, DayLink, WelcomeResponse};
use crate::state::AppState;
use crate::stats::{count_all_days, count_for_day};
use crate::vocabulary::{DayKey, normalize};
use axum::{
    Json,
    extract::{Host, Query, State},
    http::HeaderMap,
};
use tracing::debug;

pub async fn index(
    State(state): State<AppState>,
    host: Option<Host>,
    headers: HeaderMap,
) -> Json<WelcomeResponse> {
    let host = host.map_or_else(|| state.default_host.to_string(), |Host(host)| host);
    let base_url = base_url(&host, &headers);
    let links = DayKey::all()
        .map(|dia| DayLink {
            url: format!("{base_url}/peliculas/?dia={dia}"),
            dia,
        })
        .collect();

    Json(WelcomeResponse {
        message: "Bienvenido a la API de películas.",
        instructions: "Usa el endpoint /peliculas/?dia=nombre_del_dia para obtener datos.",
        links,
    })
}

pub async fn get_movies_by_day(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DayCountResponse>, AppError> {
    // A repeated `dia` resolves to its last value.
    let token = params
        .into_iter()
        .filter(|(name, _)| name == "dia")
        .map(|(_, value)| value)
        .last()
        .ok_or_else(|| AppError::bad_request("Falta el parámetro 'dia'."))?;
    let dia = normalize(&token).inspect_err(|err| debug!("rejected day token {:?}", err.token))?;

    let cantidad = count_for_day(&state.table, dia);
    debug!("{cantidad} movies released on {}", dia.table_name());

    Ok(Json(DayCountResponse { dia, cantidad }))
}

pub async fn get_counts_by_day(State(state): State<AppState>) -> Json<DayCounts> {
    Json(count_all_days(&state.table))
}

fn base_url(host: &str, headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");
    format!("{scheme}://{host}")
}
