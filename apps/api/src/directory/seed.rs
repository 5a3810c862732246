//! Illustrative alumni used when no directory file is configured.

use crate::models::alumni::AlumniRecord;

struct Seed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    graduation_year: u16,
    major: &'static str,
    current_role: &'static str,
    company: &'static str,
    industry: &'static str,
    skills: &'static [&'static str],
    interests: &'static [&'static str],
    background: &'static str,
    achievements: Option<&'static str>,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "alum-eleanor-vance",
        name: "Dr. Eleanor Vance",
        email: "eleanor.vance@example.com",
        graduation_year: 2008,
        major: "Philosophy",
        current_role: "Lead AI Ethicist",
        company: "FutureForward AI",
        industry: "Technology",
        skills: &["AI Ethics", "Machine Learning", "Public Speaking"],
        interests: &["Responsible AI", "Policy"],
        background: "Lead AI Ethicist at FutureForward AI, PhD in Philosophy specializing in machine learning ethics. Keynote speaker on responsible AI development.",
        achievements: Some("Keynote speaker on responsible AI development; advisor to national AI policy panels."),
    },
    Seed {
        id: "alum-marcus-chen",
        name: "Marcus Chen",
        email: "marcus.chen@example.com",
        graduation_year: 2014,
        major: "Statistics",
        current_role: "Senior Data Scientist",
        company: "QuantumLeap Analytics",
        industry: "Technology",
        skills: &["Predictive Modeling", "Spark", "Hadoop", "Python"],
        interests: &["Sustainable Tech", "Big Data"],
        background: "Senior Data Scientist at QuantumLeap Analytics, expert in predictive modeling and big data infrastructure (Spark, Hadoop). Passionate about sustainable tech.",
        achievements: None,
    },
    Seed {
        id: "alum-aisha-khan",
        name: "Aisha Khan",
        email: "aisha.khan@example.com",
        graduation_year: 2012,
        major: "Computer Science",
        current_role: "Founder & CTO",
        company: "ConnectSphere",
        industry: "Non-profit",
        skills: &["Mobile Development", "UI/UX", "Accessibility"],
        interests: &["Social Impact", "Entrepreneurship"],
        background: "Founder & CTO of 'ConnectSphere', a social impact tech startup. Expertise in mobile app development, UI/UX for accessibility, and non-profit tech.",
        achievements: Some("Founded ConnectSphere, an accessibility-first mobile platform used by non-profits worldwide."),
    },
    Seed {
        id: "alum-ben-carter",
        name: "Dr. Ben Carter",
        email: "ben.carter@example.com",
        graduation_year: 2010,
        major: "Molecular Biology",
        current_role: "Biotechnology Researcher",
        company: "GenLife Institute",
        industry: "Healthcare",
        skills: &["CRISPR", "Gene Editing", "Research"],
        interests: &["Genomics", "Academic Publishing"],
        background: "Biotechnology Researcher at GenLife Institute, focused on gene editing technologies (CRISPR). Published in Nature and Science journals.",
        achievements: Some("Published CRISPR research in Nature and Science."),
    },
    Seed {
        id: "alum-sofia-ramirez",
        name: "Sofia Ramirez",
        email: "sofia.ramirez@example.com",
        graduation_year: 2006,
        major: "Business Administration",
        current_role: "Chief Marketing Officer",
        company: "EcoBrand",
        industry: "Marketing",
        skills: &["Digital Marketing", "Brand Strategy", "CSR"],
        interests: &["Sustainability", "Leadership"],
        background: "Chief Marketing Officer at EcoBrand, a global sustainable goods company. Expertise in digital marketing, brand strategy, and corporate social responsibility.",
        achievements: None,
    },
    Seed {
        id: "alum-james-lee",
        name: "James Lee",
        email: "james.lee@example.com",
        graduation_year: 2011,
        major: "Architecture",
        current_role: "Principal Architect",
        company: "UrbanScape Designs",
        industry: "Engineering",
        skills: &["Urban Planning", "Green Building", "LEED"],
        interests: &["Sustainable Cities"],
        background: "Principal Architect at UrbanScape Designs, specializing in sustainable urban planning and green building technologies. LEED AP certified.",
        achievements: None,
    },
    Seed {
        id: "alum-priya-sharma",
        name: "Priya Sharma",
        email: "priya.sharma@example.com",
        graduation_year: 2017,
        major: "Information Security",
        current_role: "Cybersecurity Analyst",
        company: "SecureNet Solutions",
        industry: "Technology",
        skills: &["Threat Detection", "Incident Response", "CISSP"],
        interests: &["Cybersecurity", "Women in Tech"],
        background: "Cybersecurity Analyst at SecureNet Solutions, expert in threat detection and incident response. Holds CISSP and CISM certifications.",
        achievements: None,
    },
];

pub fn seed_records() -> Vec<AlumniRecord> {
    SEEDS
        .iter()
        .map(|s| AlumniRecord {
            id: s.id.to_string(),
            name: s.name.to_string(),
            email: s.email.to_string(),
            graduation_year: s.graduation_year,
            major: s.major.to_string(),
            current_role: Some(s.current_role.to_string()),
            company: Some(s.company.to_string()),
            industry: Some(s.industry.to_string()),
            skills: s.skills.iter().map(|v| v.to_string()).collect(),
            interests: s.interests.iter().map(|v| v.to_string()).collect(),
            bio: None,
            achievements: s.achievements.map(str::to_string),
            background: Some(s.background.to_string()),
            contact_info: Some(s.email.to_string()),
            linkedin_profile: None,
            is_notable: s.achievements.is_some(),
            willing_to_mentor: true,
        })
        .collect()
}
