use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::alumni::slugify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    #[serde(rename = "College Event")]
    CollegeEvent,
    #[serde(rename = "Alumni Meetup")]
    AlumniMeetup,
    Webinar,
    Workshop,
    #[serde(rename = "Career Fair")]
    CareerFair,
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::CollegeEvent => "College Event",
            EventCategory::AlumniMeetup => "Alumni Meetup",
            EventCategory::Webinar => "Webinar",
            EventCategory::Workshop => "Workshop",
            EventCategory::CareerFair => "Career Fair",
        }
    }

    /// `career_fair` and `Career Fair` both select `CareerFair`.
    pub fn matches_slug(self, slug: &str) -> bool {
        slugify(self.label()) == slugify(slug)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
}
