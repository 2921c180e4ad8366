//! Static page copy. Every list is defined once and never changes at runtime; each entry
//! carries a key that stays stable across renders.

pub const BRAND: &str = "DAMIAN ACRI";
pub const LOCATION: &str = "Chicago, IL";

/// In-page anchors, in page order.
pub const SECTION_ANCHORS: [&str; 7] = [
    "home", "about", "projects", "work", "tech", "info", "contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "ABOUT",
        href: "#about",
    },
    NavLink {
        label: "PROJECTS",
        href: "#projects",
    },
    NavLink {
        label: "TECH",
        href: "#tech",
    },
    NavLink {
        label: "CONTACT",
        href: "#contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroCopy {
    pub prefix: &'static str,
    pub text: &'static str,
    pub highlight: &'static str,
    pub rest: &'static str,
    pub highlight2: &'static str,
    pub rest2: &'static str,
}

pub static HERO_COPY: HeroCopy = HeroCopy {
    prefix: "Engineering",
    text: " student from ",
    highlight: "Palma",
    rest: " building production-ready applications. ",
    highlight2: "Full-stack development",
    rest2: " with attention to detail.",
};

pub const HERO_SUBTEXT: &str = "Computer Engineering student at UIB specializing in full-stack development and data engineering. I build complete products from scratch handling infrastructure, APIs, data pipelines, and user interfaces. Currently seeking summer 2026 internship opportunities.";

pub const CTA_LABEL: &str = "SEE PROJECTS ↓";
pub const CTA_HREF: &str = "#projects";

pub static ABOUT: &[&str] = &[
    "I like owning a product end to end: the schema, the service that serves it, and the screen someone actually touches.",
    "Most of my week goes to coursework at the University of the Balearic Islands; the rest goes to side projects that usually start as a tool I wanted for myself.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tag: &'static str,
}

pub static TILES: &[Tile] = &[
    Tile {
        id: "tile-1",
        title: "For the Struggle",
        subtitle: "Visualizing a Bold, New Direction for a Nonprofit Combatting Social Injustice in Charlotte",
        tag: "IDENTITY",
    },
    Tile {
        id: "tile-2",
        title: "Amplify",
        subtitle: "Harnessing Social Media Behaviors to Redefine the Landscape of Digital Activism",
        tag: "UI/UX",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub year: &'static str,
    pub tech: &'static [&'static str],
    pub href: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "transit-pulse",
        name: "Transit Pulse",
        summary: "Live bus arrival board for Palma built on the public EMT feed, with a small ingestion pipeline and a cached API in front of it.",
        year: "2025",
        tech: &["Rust", "PostgreSQL", "Docker"],
        href: "https://github.com/damianacri/transit-pulse",
    },
    Project {
        id: "campus-market",
        name: "Campus Market",
        summary: "Second-hand marketplace for university students with listings, chat and moderation tools.",
        year: "2024",
        tech: &["TypeScript", "React", "Node.js"],
        href: "https://github.com/damianacri/campus-market",
    },
    Project {
        id: "energy-lens",
        name: "Energy Lens",
        summary: "Data pipeline and dashboard turning smart-meter exports into weekly consumption reports.",
        year: "2024",
        tech: &["Python", "Airflow", "DuckDB"],
        href: "https://github.com/damianacri/energy-lens",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechGroup {
    pub id: &'static str,
    pub name: &'static str,
    pub tokens: &'static [&'static str],
}

pub static TECH_GROUPS: &[TechGroup] = &[
    TechGroup {
        id: "languages",
        name: "LANGUAGES",
        tokens: &["Rust", "TypeScript", "Python", "SQL", "C"],
    },
    TechGroup {
        id: "frontend",
        name: "FRONTEND",
        tokens: &["React", "Next.js", "Leptos", "Tailwind CSS"],
    },
    TechGroup {
        id: "backend",
        name: "BACKEND",
        tokens: &["Axum", "Node.js", "PostgreSQL", "Redis"],
    },
    TechGroup {
        id: "data",
        name: "DATA & INFRA",
        tokens: &["Airflow", "DuckDB", "Docker", "Linux", "AWS"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub detail: &'static str,
}

pub static EDUCATION: &[ProfileEntry] = &[
    ProfileEntry {
        id: "edu-uib",
        title: "B.Sc. Computer Engineering",
        organization: "Universitat de les Illes Balears",
        period: "2022 - 2026",
        detail: "Focus on software engineering, databases and distributed systems.",
    },
    ProfileEntry {
        id: "edu-exchange",
        title: "Exchange semester",
        organization: "Illinois Institute of Technology",
        period: "2024",
        detail: "Data engineering and cloud computing coursework in Chicago.",
    },
];

pub static EXPERIENCE: &[ProfileEntry] = &[
    ProfileEntry {
        id: "exp-freelance",
        title: "Freelance Full-stack Developer",
        organization: "Self-employed",
        period: "2023 - Present",
        detail: "Websites and internal tools for small businesses in Mallorca, from design to deployment.",
    },
    ProfileEntry {
        id: "exp-lab",
        title: "Research Assistant",
        organization: "UIB Systems Lab",
        period: "2024 - 2025",
        detail: "Built ingestion jobs and dashboards for sensor data collected across the campus.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT_EMAIL: &str = "hello@damianacri.com";

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/damianacri",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/damianacri",
    },
];

pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

/// What a single rendered card shows. Produced in source order by [`cards`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub key: &'static str,
    pub index: usize,
    pub tag: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub detail: Option<&'static str>,
    pub href: Option<&'static str>,
    pub tokens: &'static [&'static str],
}

pub trait Card {
    fn key(&self) -> &'static str;
    fn tag(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn subtitle(&self) -> &'static str;

    fn detail(&self) -> Option<&'static str> {
        None
    }

    fn href(&self) -> Option<&'static str> {
        None
    }

    fn tokens(&self) -> &'static [&'static str] {
        &[]
    }
}

impl Card for Tile {
    fn key(&self) -> &'static str {
        self.id
    }

    fn tag(&self) -> &'static str {
        self.tag
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn subtitle(&self) -> &'static str {
        self.subtitle
    }
}

impl Card for Project {
    fn key(&self) -> &'static str {
        self.id
    }

    fn tag(&self) -> &'static str {
        self.year
    }

    fn title(&self) -> &'static str {
        self.name
    }

    fn subtitle(&self) -> &'static str {
        self.summary
    }

    fn href(&self) -> Option<&'static str> {
        Some(self.href)
    }

    fn tokens(&self) -> &'static [&'static str] {
        self.tech
    }
}

impl Card for ProfileEntry {
    fn key(&self) -> &'static str {
        self.id
    }

    fn tag(&self) -> &'static str {
        self.period
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn subtitle(&self) -> &'static str {
        self.organization
    }

    fn detail(&self) -> Option<&'static str> {
        Some(self.detail)
    }
}

pub fn cards<T: Card>(items: &[T]) -> Vec<CardView> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CardView {
            key: item.key(),
            index,
            tag: item.tag(),
            title: item.title(),
            subtitle: item.subtitle(),
            detail: item.detail(),
            href: item.href(),
            tokens: item.tokens(),
        })
        .collect()
}
