use serde::{Deserialize, Serialize};

/// Collection envelope returned by every paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub nro: i64,
    pub nome: String,
    pub empresa_fund: i64,
    pub empresa_respo: i64,
    pub data_fund: String,
    #[serde(default)]
    pub qtd_users: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformDetail {
    #[serde(flatten)]
    pub platform: Platform,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nick: String,
    pub email: String,
    pub data_nasc: String,
    pub telefone: String,
    pub end_postal: String,
    pub id_pais: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub donations: Vec<Donation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub nome: String,
    pub tipo: String,
    pub data: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub id_streamer: i64,
    pub nro_plataforma: i64,
    #[serde(default)]
    pub qtd_visualizacoes: Option<i64>,
    // Joined columns, present on list rows and detail but not on nested copies.
    #[serde(default)]
    pub streamer_nick: Option<String>,
    #[serde(default)]
    pub platform_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDetail {
    #[serde(flatten)]
    pub channel: Channel,
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id_video: i64,
    pub id_canal: i64,
    pub titulo: String,
    pub datah: String,
    #[serde(default)]
    pub tema: Option<String>,
    pub duracao: i64,
    #[serde(default)]
    pub visu_simul: Option<i64>,
    #[serde(default)]
    pub visu_total: Option<i64>,
    #[serde(default)]
    pub canal_nome: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetail {
    #[serde(flatten)]
    pub video: Video,
    #[serde(default)]
    pub donations: Vec<Donation>,
}

/// Identified by the five-part key; `nick` and `video_titulo` are joined in
/// by the list endpoint only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub id_video: i64,
    pub id_canal: i64,
    pub id_usuario: i64,
    pub seq_comentario: i64,
    pub seq_pg: i64,
    pub valor: f64,
    pub status: String,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub video_titulo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub nro: i64,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub message: String,
    pub db_status: String,
}

impl Default for ApiStatus {
    fn default() -> Self {
        Self {
            message: "Connecting...".to_string(),
            db_status: "unknown".to_string(),
        }
    }
}

// Ranking rows (dashboard).

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRankRow {
    pub rank: i64,
    pub id_canal: i64,
    pub nome_canal: String,
    #[serde(default)]
    pub faturamento: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViralVideoRow {
    pub titulo: String,
    pub taxa_engajamento: f64,
    #[serde(default)]
    pub visu_total: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamerPerfRow {
    pub nick: String,
    pub canais: i64,
    pub videos: i64,
    #[serde(default)]
    pub audiencia: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopViewerRow {
    pub nick: String,
    pub videos_apoiados: i64,
    #[serde(default)]
    pub total_doado: Option<f64>,
}

// Report rows (analytics).

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSlice {
    pub tema: String,
    pub count: i64,
    #[serde(default)]
    pub total_views: Option<i64>,
}

/// One drilldown row: channel-level when no channel filter is active
/// (`total_items` populated), video-level otherwise (`peak_views` populated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRow {
    pub entity_name: String,
    #[serde(default)]
    pub total_items: Option<i64>,
    #[serde(default)]
    pub peak_views: Option<i64>,
    #[serde(default)]
    pub total_views: Option<i64>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
}

/// Cross-cutting filter set emitted by the filter bar. Empty strings mean
/// "not filtered" and are dropped before query-string serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportFilters {
    pub channel_id: String,
    pub video_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl ReportFilters {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("channel_id", self.channel_id.clone()),
            ("video_id", self.video_id.clone()),
            ("start_date", self.start_date.clone()),
            ("end_date", self.end_date.clone()),
        ]
    }
}

// Request payloads for create/update calls.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformPayload {
    pub nome: String,
    pub empresa_fund: i64,
    pub empresa_respo: i64,
    pub data_fund: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPayload {
    pub nick: String,
    pub email: String,
    pub data_nasc: String,
    pub telefone: String,
    pub end_postal: String,
    pub id_pais: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelPayload {
    pub nome: String,
    pub tipo: String,
    pub data: String,
    pub descricao: String,
    pub id_streamer: i64,
    pub nro_plataforma: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPayload {
    pub id_canal: i64,
    pub titulo: String,
    pub datah: String,
    pub tema: String,
    pub duracao: i64,
    pub visu_simul: i64,
    pub visu_total: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationPayload {
    pub id_video: i64,
    pub id_canal: i64,
    pub id_usuario: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq_comentario: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq_pg: Option<i64>,
    pub valor: f64,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_envelope_deserializes() {
        let body = r#"{
            "items": [
                {"id": 3, "nome": "Master League", "tipo": "publico",
                 "data": "2020-01-05T00:00:00", "descricao": null,
                 "id_streamer": 7, "nro_plataforma": 1,
                 "qtd_visualizacoes": 120000,
                 "streamer_nick": "ana", "platform_name": "Twitch"}
            ],
            "total": 41, "page": 2, "limit": 10
        }"#;
        let page: Page<Channel> = serde_json::from_str(body).unwrap();
        assert_eq!(page.total, 41);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].streamer_nick.as_deref(), Some("ana"));
    }

    #[test]
    fn empty_envelope_deserializes() {
        let page: Page<Donation> =
            serde_json::from_str(r#"{"items": [], "total": 0}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn detail_flattens_base_fields() {
        let body = r#"{
            "id": 1, "nome": "Retro Zone", "tipo": "misto",
            "data": "2019-06-01T00:00:00", "descricao": "vod archive",
            "id_streamer": 2, "nro_plataforma": 1, "qtd_visualizacoes": null,
            "streamer_nick": "bo", "platform_name": "Twitch",
            "videos": [
                {"id_video": 9, "id_canal": 1, "titulo": "Finals",
                 "datah": "2024-03-01T20:00:00", "tema": "Gaming",
                 "duracao": 95, "visu_simul": 300, "visu_total": 9000}
            ]
        }"#;
        let detail: ChannelDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.channel.nome, "Retro Zone");
        assert_eq!(detail.channel.qtd_visualizacoes, None);
        assert_eq!(detail.videos[0].id_video, 9);
    }

    #[test]
    fn donation_payload_omits_absent_sequence_numbers() {
        let payload = DonationPayload {
            id_video: 4,
            id_canal: 2,
            id_usuario: 11,
            seq_comentario: None,
            seq_pg: None,
            valor: 25.5,
            status: "recebido".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("seq_comentario"));
        assert!(!json.contains("seq_pg"));
    }
}
