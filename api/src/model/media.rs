use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::http::{QueryParams, ToQuery};

backend_enum! {
    pub enum MediaType {
        Image => ("IMAGE", "Image"),
        Video => ("VIDEO", "Video"),
        Document => ("DOCUMENT", "Document"),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaDto {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub media_type: Option<MediaType>,
    pub uploader_id: Option<i64>,
    pub uploader_name: Option<String>,
    pub uploader_role: Option<String>,
    pub competition_id: Option<i64>,
    pub competition_name: Option<String>,
    pub match_id: Option<i64>,
    pub match_title: Option<String>,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
    pub uploaded_at: Option<NaiveDateTime>,
    pub view_count: Option<i32>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MediaReport {
    pub reason: String,
}

/// Query of `GET /media`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaFilter {
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
    pub competition_name: Option<String>,
    pub team_name: Option<String>,
    pub match_title: Option<String>,
    pub uploader_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ToQuery for MediaFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("title", self.title.as_ref())
            .with_opt(
                "mediaType",
                self.media_type.as_ref().map(|t| t.as_str().to_string()),
            )
            .with_opt("competitionName", self.competition_name.as_ref())
            .with_opt("teamName", self.team_name.as_ref())
            .with_opt("matchTitle", self.match_title.as_ref())
            .with_opt("uploaderName", self.uploader_name.as_ref())
            .with_opt("startDate", self.start_date)
            .with_opt("endDate", self.end_date)
    }
}
