use crate::config::API_BASE_URL;
use crate::models::{
    ApiStatus, Channel, ChannelDetail, ChannelPayload, Company, Country, Donation,
    DonationPayload, Page, PerformanceRow, Platform, PlatformDetail, PlatformPayload,
    ReportFilters, RevenuePoint, RevenueRankRow, StreamerPerfRow, ThemeSlice, TopViewerRow,
    User, UserDetail, UserPayload, Video, VideoDetail, VideoPayload, ViralVideoRow,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error body shape used by the backend for non-ok statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Serializes `(key, value)` pairs into a `?k=v&...` suffix. Pairs with an
/// empty value are dropped; values are percent-encoded. Returns the empty
/// string when nothing survives.
pub fn query_string(params: &[(&str, String)]) -> String {
    let parts: Vec<String> = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

pub fn video_path(id_canal: i64, id_video: i64) -> String {
    format!("/videos/{id_canal}/{id_video}")
}

pub fn donation_path(
    id_video: i64,
    id_canal: i64,
    id_usuario: i64,
    seq_comentario: i64,
    seq_pg: i64,
) -> String {
    format!("/donations/{id_video}/{id_canal}/{id_usuario}/{seq_comentario}/{seq_pg}")
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| format!("JSON parse error: {e}"))
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(error) => Err(error.detail),
            Err(_) => Err(format!("HTTP error: {status} - {text}")),
        }
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{}{path}", &*API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    parse_response(response).await
}

async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = format!("{}{path}", &*API_BASE_URL);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Request error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = format!("{}{path}", &*API_BASE_URL);
    let response = Request::put(&url)
        .json(body)
        .map_err(|e| format!("Request error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

async fn delete(path: &str) -> Result<(), String> {
    let url = format!("{}{path}", &*API_BASE_URL);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

pub async fn fetch_status() -> Result<ApiStatus, String> {
    get_json("/").await
}

// Platforms

pub async fn list_platforms(q: &str, page: usize) -> Result<Page<Platform>, String> {
    let query = query_string(&[("q", q.to_string()), ("page", page.to_string())]);
    get_json(&format!("/platforms{query}")).await
}

pub async fn get_platform(nro: i64) -> Result<PlatformDetail, String> {
    get_json(&format!("/platforms/{nro}")).await
}

pub async fn create_platform(payload: &PlatformPayload) -> Result<(), String> {
    post_json("/platforms", payload).await
}

pub async fn update_platform(nro: i64, payload: &PlatformPayload) -> Result<(), String> {
    put_json(&format!("/platforms/{nro}"), payload).await
}

pub async fn delete_platform(nro: i64) -> Result<(), String> {
    delete(&format!("/platforms/{nro}")).await
}

// Users

pub async fn list_users(q: &str, page: usize) -> Result<Page<User>, String> {
    let query = query_string(&[("q", q.to_string()), ("page", page.to_string())]);
    get_json(&format!("/users{query}")).await
}

pub async fn get_user(id: i64) -> Result<UserDetail, String> {
    get_json(&format!("/users/{id}")).await
}

pub async fn create_user(payload: &UserPayload) -> Result<(), String> {
    post_json("/users", payload).await
}

pub async fn update_user(id: i64, payload: &UserPayload) -> Result<(), String> {
    put_json(&format!("/users/{id}"), payload).await
}

pub async fn delete_user(id: i64) -> Result<(), String> {
    delete(&format!("/users/{id}")).await
}

// Channels

pub async fn list_channels(q: &str, page: usize) -> Result<Page<Channel>, String> {
    let query = query_string(&[("q", q.to_string()), ("page", page.to_string())]);
    get_json(&format!("/channels{query}")).await
}

pub async fn get_channel(id: i64) -> Result<ChannelDetail, String> {
    get_json(&format!("/channels/{id}")).await
}

pub async fn create_channel(payload: &ChannelPayload) -> Result<(), String> {
    post_json("/channels", payload).await
}

pub async fn update_channel(id: i64, payload: &ChannelPayload) -> Result<(), String> {
    put_json(&format!("/channels/{id}"), payload).await
}

pub async fn delete_channel(id: i64) -> Result<(), String> {
    delete(&format!("/channels/{id}")).await
}

// Videos

pub async fn list_videos(q: &str, channel_id: &str, page: usize) -> Result<Page<Video>, String> {
    let query = query_string(&[
        ("q", q.to_string()),
        ("channel_id", channel_id.to_string()),
        ("page", page.to_string()),
    ]);
    get_json(&format!("/videos{query}")).await
}

pub async fn get_video(id_canal: i64, id_video: i64) -> Result<VideoDetail, String> {
    get_json(&video_path(id_canal, id_video)).await
}

pub async fn create_video(payload: &VideoPayload) -> Result<(), String> {
    post_json("/videos", payload).await
}

pub async fn update_video(
    id_canal: i64,
    id_video: i64,
    payload: &VideoPayload,
) -> Result<(), String> {
    put_json(&video_path(id_canal, id_video), payload).await
}

pub async fn delete_video(id_canal: i64, id_video: i64) -> Result<(), String> {
    delete(&video_path(id_canal, id_video)).await
}

// Donations

pub async fn list_donations(q: &str, page: usize) -> Result<Page<Donation>, String> {
    let query = query_string(&[("q", q.to_string()), ("page", page.to_string())]);
    get_json(&format!("/donations{query}")).await
}

pub async fn create_donation(payload: &DonationPayload) -> Result<(), String> {
    post_json("/donations", payload).await
}

pub async fn update_donation(
    id_video: i64,
    id_canal: i64,
    id_usuario: i64,
    seq_comentario: i64,
    seq_pg: i64,
    payload: &DonationPayload,
) -> Result<(), String> {
    let path = donation_path(id_video, id_canal, id_usuario, seq_comentario, seq_pg);
    put_json(&path, payload).await
}

pub async fn delete_donation(donation: &Donation) -> Result<(), String> {
    let path = donation_path(
        donation.id_video,
        donation.id_canal,
        donation.id_usuario,
        donation.seq_comentario,
        donation.seq_pg,
    );
    delete(&path).await
}

// Lookups

pub async fn list_companies() -> Result<Vec<Company>, String> {
    get_json("/companies").await
}

pub async fn list_countries() -> Result<Vec<Country>, String> {
    get_json("/countries").await
}

// Rankings

fn ranking_params(limit: usize, filters: &ReportFilters) -> Vec<(&'static str, String)> {
    let mut params = vec![("limit", limit.to_string())];
    params.extend(filters.to_params());
    params
}

pub async fn ranking_revenue(
    limit: usize,
    filters: &ReportFilters,
) -> Result<Vec<RevenueRankRow>, String> {
    let query = query_string(&ranking_params(limit, filters));
    get_json(&format!("/ranking/faturamento{query}")).await
}

pub async fn ranking_viral_videos(
    limit: usize,
    filters: &ReportFilters,
) -> Result<Vec<ViralVideoRow>, String> {
    let query = query_string(&ranking_params(limit, filters));
    get_json(&format!("/ranking/videos-virais{query}")).await
}

/// The streamer ranking is not channel-scoped; only the limit and date
/// bounds apply.
pub async fn ranking_streamers(
    limit: usize,
    filters: &ReportFilters,
) -> Result<Vec<StreamerPerfRow>, String> {
    let query = query_string(&[
        ("limit", limit.to_string()),
        ("start_date", filters.start_date.clone()),
        ("end_date", filters.end_date.clone()),
    ]);
    get_json(&format!("/ranking/streamers{query}")).await
}

pub async fn ranking_top_viewers(
    limit: usize,
    filters: &ReportFilters,
) -> Result<Vec<TopViewerRow>, String> {
    let query = query_string(&ranking_params(limit, filters));
    get_json(&format!("/ranking/top-viewers{query}")).await
}

// Reports

pub async fn report_revenue_over_time(
    filters: &ReportFilters,
) -> Result<Vec<RevenuePoint>, String> {
    let query = query_string(&filters.to_params());
    get_json(&format!("/reports/revenue-over-time{query}")).await
}

pub async fn report_distribution_by_theme(
    filters: &ReportFilters,
) -> Result<Vec<ThemeSlice>, String> {
    let query = query_string(&filters.to_params());
    get_json(&format!("/reports/distribution-by-theme{query}")).await
}

pub async fn report_drilldown_performance(
    filters: &ReportFilters,
) -> Result<Vec<PerformanceRow>, String> {
    let query = query_string(&filters.to_params());
    get_json(&format!("/reports/drilldown-performance{query}")).await
}

pub async fn refresh_reports() -> Result<(), String> {
    let url = format!("{}/reports/refresh", &*API_BASE_URL);
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_drops_empty_values() {
        let query = query_string(&[
            ("q", String::new()),
            ("page", "3".to_string()),
            ("channel_id", String::new()),
        ]);
        assert_eq!(query, "?page=3");
    }

    #[test]
    fn query_string_is_empty_when_no_values_survive() {
        assert_eq!(query_string(&[("q", String::new())]), "");
        assert_eq!(query_string(&[]), "");
    }

    #[test]
    fn query_string_percent_encodes() {
        let query = query_string(&[("q", "league & friends".to_string())]);
        assert_eq!(query, "?q=league%20%26%20friends");
    }

    #[test]
    fn collection_query_carries_the_current_pair() {
        let query = query_string(&[("q", "retro".to_string()), ("page", "2".to_string())]);
        assert_eq!(query, "?q=retro&page=2");
    }

    #[test]
    fn composite_paths_carry_every_key_part() {
        assert_eq!(video_path(7, 42), "/videos/7/42");
        assert_eq!(
            donation_path(42, 7, 11, 3, 9),
            "/donations/42/7/11/3/9"
        );
    }

    #[test]
    fn report_filters_serialize_only_set_fields() {
        let filters = ReportFilters {
            channel_id: "5".to_string(),
            start_date: "2024-01-01".to_string(),
            ..Default::default()
        };
        let query = query_string(&filters.to_params());
        assert_eq!(query, "?channel_id=5&start_date=2024-01-01");
    }
}
