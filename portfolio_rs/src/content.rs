//! Static page content.
//!
//! Plain `'static` tables; the landing sections render them in order.

/// One card of the expertise grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpertiseArea {
    /// Card heading.
    pub title: &'static str,
    /// Glyph shown above the heading.
    pub icon: &'static str,
    /// Paragraph under the heading.
    pub description: &'static str,
    /// Technology chips, in display order.
    pub tech_stack: &'static [&'static str],
}

/// One entry of the history timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerEntry {
    /// Role title.
    pub title: &'static str,
    /// City, region.
    pub location: &'static str,
    /// Free-form period label, e.g. `2020 - 2022`.
    pub period: &'static str,
    /// Comma separated focus areas.
    pub description: &'static str,
}

/// One card of the project grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Project name.
    pub title: &'static str,
    /// Short pitch.
    pub description: &'static str,
    /// Glyph shown on the gradient banner.
    pub icon: &'static str,
    /// Destination of the card; `#` while unpublished.
    pub link: &'static str,
}

impl Project {
    /// Where the card leads, or `None` while the link is a placeholder.
    pub fn destination(&self) -> Option<&'static str> {
        live_link(self.link)
    }
}

/// `link` unless it is empty or the bare `#` placeholder, which would only
/// reload the page (or open it again in a new tab).
pub fn live_link(link: &str) -> Option<&str> {
    let link = link.trim();
    (!link.is_empty() && link != "#").then_some(link)
}

/// Heading of the history section.
pub const HISTORY_HEADING: &str = "Educational Background";

/// Heading of the project section.
pub const PROJECTS_HEADING: &str = "Personal Projects";

/// Line under the contact heading.
pub const CONTACT_BLURB: &str =
    "Got a project waiting to be realized? Let's collaborate and make it happen!";

/// Expertise grid cards.
pub const EXPERTISE: &[ExpertiseArea] = &[
    ExpertiseArea {
        title: "Front End Web Development",
        icon: "⚛️",
        description: "I have built diverse web applications using modern frontend technologies such as React, HTML, CSS, and JavaScript. I have a strong proficiency in creating responsive, user-friendly interfaces with excellent user experience.",
        tech_stack: &[
            "React",
            "TypeScript",
            "JavaScript",
            "HTML5",
            "CSS3",
            "SASS",
            "Tailwind CSS",
            "Bootstrap",
            "Redux",
        ],
    },
    ExpertiseArea {
        title: "DevOps & Automation",
        icon: "🐳",
        description: "Once the application is built, I help clients set up DevOps testing, CI/CD pipelines, and deployment automation to support the successful Go-Live.",
        tech_stack: &[
            "Git",
            "GitHub Actions",
            "Docker",
            "AWS",
            "Azure",
            "Linux",
            "Snowflake",
            "Pandas",
            "Selenium",
        ],
    },
    ExpertiseArea {
        title: "GenAI & LLM",
        icon: "🐍",
        description: "Stay relevant in the market by leveraging the latest AI models in your projects. I have professional experience building enterprise grade GenAI-enabled solutions to empower intelligent decision making.",
        tech_stack: &[
            "OpenAI",
            "Groq",
            "LangChain",
            "Qdrant",
            "Hugging Face",
            "LlamaIndex",
            "Streamlit",
        ],
    },
];

/// History timeline, most recent first.
pub const CAREER_HISTORY: &[CareerEntry] = &[
    CareerEntry {
        title: "Technology Consultant",
        location: "Dallas, TX",
        period: "2022 - present",
        description: "Full-stack Web Development, GenAI/LLM, Project Management, Business Development",
    },
    CareerEntry {
        title: "Full Stack Engineer",
        location: "Laie, HI",
        period: "2020 - 2022",
        description: "Frontend Development, Backend Development, User Experience, Team Leading",
    },
    CareerEntry {
        title: "Staff Engineer Intern",
        location: "Laie, HI",
        period: "2021 - 2021",
        description: "Full-stack Development, API Development, User Experience",
    },
];

/// Project grid cards.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Filmate AI",
        description: "Developed movie finder app with semantic search and sentiment analysis using OpenAI GPT-3.5 Turbo, Qdrant, React, and Flask.",
        icon: "🎬",
        link: "#",
    },
    Project {
        title: "StayFit",
        description: "Developed exercise task based website for users to keep track of their daily exercise count with interactive features.",
        icon: "💪",
        link: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_expected_shape() {
        assert_eq!(EXPERTISE.len(), 3);
        assert_eq!(CAREER_HISTORY.len(), 3);
        assert_eq!(PROJECTS.len(), 2);
    }

    #[test]
    fn tech_stack_keeps_display_order() {
        let frontend = &EXPERTISE[0];
        assert_eq!(frontend.tech_stack.first(), Some(&"React"));
        assert_eq!(frontend.tech_stack.last(), Some(&"Redux"));
    }

    #[test]
    fn no_blank_entries() {
        assert!(EXPERTISE.iter().all(|e| !e.title.is_empty() && !e.tech_stack.is_empty()));
        assert!(CAREER_HISTORY.iter().all(|c| !c.title.is_empty() && !c.period.is_empty()));
        assert!(PROJECTS.iter().all(|p| !p.title.is_empty() && !p.link.is_empty()));
    }

    #[test]
    fn placeholder_links_have_no_destination() {
        assert_eq!(live_link("#"), None);
        assert_eq!(live_link(""), None);
        assert_eq!(live_link("  # "), None);
        assert_eq!(live_link("#projects"), Some("#projects"));
        assert_eq!(live_link("https://github.com/ada"), Some("https://github.com/ada"));
        // unpublished cards render without navigating anywhere
        assert!(PROJECTS.iter().all(|p| p.destination().is_none()));
    }
}
