//! Illustrative events listed when no calendar source is configured.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::event::{Event, EventCategory};

struct Seed {
    id: &'static str,
    title: &'static str,
    /// (year, month, day, hour) in UTC.
    at: (i32, u32, u32, u32),
    description: &'static str,
    category: EventCategory,
    location: &'static str,
    image_seed: &'static str,
    registration: bool,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "evt-homecoming-gala",
        title: "Annual Alumni Homecoming Gala",
        at: (2026, 10, 15, 18),
        description: "Join us for an evening of celebration, networking, and reminiscing. Keynote speech by a distinguished alumnus.",
        category: EventCategory::AlumniMeetup,
        location: "Grand Ballroom, University Campus",
        image_seed: "gala",
        registration: true,
    },
    Seed {
        id: "evt-tech-innovators-summit",
        title: "Tech Innovators Summit",
        at: (2026, 11, 5, 9),
        description: "A full-day summit featuring talks and workshops by alumni leaders in the tech industry. Explore the latest trends and network with peers.",
        category: EventCategory::CollegeEvent,
        location: "Science & Engineering Hall Auditorium",
        image_seed: "techsummit",
        registration: true,
    },
    Seed {
        id: "evt-career-pivoting-webinar",
        title: "Webinar: Career Pivoting Strategies",
        at: (2026, 11, 10, 14),
        description: "Learn effective strategies for navigating career changes from alumni who have successfully pivoted their careers.",
        category: EventCategory::Webinar,
        location: "Online",
        image_seed: "webinar",
        registration: true,
    },
    Seed {
        id: "evt-idea-to-launch-workshop",
        title: "Entrepreneurship Workshop: Idea to Launch",
        at: (2026, 11, 22, 10),
        description: "A hands-on workshop for aspiring entrepreneurs, led by successful alumni founders. Covers business planning, funding, and more.",
        category: EventCategory::Workshop,
        location: "Innovation Hub, Room 201",
        image_seed: "workshop",
        registration: false,
    },
    Seed {
        id: "evt-alumni-career-fair",
        title: "Alumni Career Fair",
        at: (2027, 3, 1, 13),
        description: "Connect with companies founded or led by alumni. Explore job opportunities and internships.",
        category: EventCategory::CareerFair,
        location: "University Gymnasium",
        image_seed: "careerfair",
        registration: true,
    },
];

fn utc(year: i32, month: u32, day: u32, hour: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).single()
}

pub fn seed_events() -> Vec<Event> {
    SEEDS
        .iter()
        .filter_map(|s| {
            let (year, month, day, hour) = s.at;
            Some(Event {
                id: s.id.to_string(),
                title: s.title.to_string(),
                date: utc(year, month, day, hour)?,
                description: s.description.to_string(),
                category: s.category,
                location: Some(s.location.to_string()),
                image_url: Some(format!("https://picsum.photos/seed/{}/400/250", s.image_seed)),
                registration_link: s.registration.then(|| format!("/events/{}/register", s.id)),
            })
        })
        .collect()
}
