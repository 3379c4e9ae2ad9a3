//! Static copy rendered by the page.

pub const OWNER_NAME: &str = "Gulshan Kumar";

pub const HERO_DESCRIPTION: &str = "Computer Science student who enjoys building fast, \
accessible web applications from the database up to the UI.";

pub const ABOUT_TEXT: &str = "I like turning ideas into working software and learning \
whatever the problem needs along the way.";

pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ENTRIES: [NavEntry; 7] = [
    NavEntry { id: "home", label: "Home" },
    NavEntry { id: "about", label: "About" },
    NavEntry { id: "skills", label: "Skills" },
    NavEntry { id: "projects", label: "Projects" },
    NavEntry { id: "education", label: "Education" },
    NavEntry { id: "certifications", label: "Certifications" },
    NavEntry { id: "contact", label: "Contact" },
];

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend",
        skills: &["HTML", "CSS", "JavaScript", "React"],
    },
    SkillCategory {
        title: "Backend",
        skills: &["Node.js", "Express", "Python", "SQL"],
    },
    SkillCategory {
        title: "Tools",
        skills: &["Git", "Linux", "Docker", "VS Code"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Portfolio Website",
        summary: "Responsive personal site with light and dark themes.",
        image: "./assets/projects/portfolio.png",
        tags: &["HTML", "CSS", "JavaScript"],
    },
    Project {
        title: "Task Manager",
        summary: "Full stack to-do application with authentication.",
        image: "./assets/projects/tasks.png",
        tags: &["React", "Node.js", "MongoDB"],
    },
    Project {
        title: "Weather Dashboard",
        summary: "City forecasts rendered from a public weather API.",
        image: "./assets/projects/weather.png",
        tags: &["JavaScript", "REST"],
    },
];

pub struct Credential {
    pub title: &'static str,
    pub issuer: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: [Credential; 1] = [Credential {
    title: "B.Tech in Computer Science and Engineering",
    issuer: "KIIT University",
    period: "Present",
}];

pub const CERTIFICATIONS: [Credential; 2] = [
    Credential {
        title: "Responsive Web Design",
        issuer: "freeCodeCamp",
        period: "",
    },
    Credential {
        title: "Python for Everybody",
        issuer: "Coursera",
        period: "",
    },
];
