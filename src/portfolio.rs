//! Static content rendered by the home page.

pub struct Stat {
    pub name: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        name: "Years Experience",
        value: "4+",
    },
    Stat {
        name: "Projects Completed",
        value: "37+",
    },
    Stat {
        name: "Happy Clients",
        value: "30+",
    },
    Stat {
        name: "Bugs Squashed",
        value: "∞",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Personal Portfolio Website",
        description: "This site: server-rendered with Leptos and axum, hydrated to WASM, styled with Tailwind CSS.",
        tags: &["Rust", "Leptos", "Tailwind CSS"],
    },
    Project {
        title: "Student Portal",
        description: "A student portal with authentication, course management and results tracking.",
        tags: &["Laravel", "PHP", "MySQL"],
    },
    Project {
        title: "Solar Company Storefront",
        description: "An e-commerce platform with product listings, a shopping cart and secure checkout.",
        tags: &["React", "Laravel", "E-commerce"],
    },
];

/// Flips the expanded project card: clicking the open card closes it,
/// clicking another card opens that one instead.
pub fn toggle_expanded(current: Option<usize>, index: usize) -> Option<usize> {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "Next.js", level: 85 },
            Skill { name: "TypeScript", level: 80 },
            Skill { name: "JavaScript", level: 88 },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 82 },
            Skill { name: "Express", level: 78 },
            Skill { name: "GraphQL", level: 75 },
            Skill { name: "REST API", level: 85 },
        ],
    },
    SkillCategory {
        title: "Database",
        skills: &[
            Skill { name: "MongoDB", level: 78 },
            Skill { name: "PostgreSQL", level: 75 },
            Skill { name: "Firebase", level: 70 },
        ],
    },
    SkillCategory {
        title: "Styling",
        skills: &[
            Skill { name: "Tailwind CSS", level: 90 },
            Skill { name: "CSS3", level: 85 },
            Skill { name: "Sass", level: 75 },
        ],
    },
    SkillCategory {
        title: "Tools",
        skills: &[
            Skill { name: "Git", level: 85 },
            Skill { name: "Docker", level: 70 },
            Skill { name: "Figma", level: 70 },
        ],
    },
];

/// Section anchors shown in the header, in page order.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, 1), Some(1));
        assert_eq!(toggle_expanded(Some(1), 1), None);
        assert_eq!(toggle_expanded(Some(0), 2), Some(2));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES.iter() {
            assert!(!category.skills.is_empty(), "{} has no skills", category.title);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} is over 100%", skill.name);
            }
        }
    }

    #[test]
    fn test_nav_covers_every_section() {
        let anchors: Vec<_> = NAV_ITEMS.iter().map(|(href, _)| *href).collect();
        assert_eq!(
            anchors,
            ["#home", "#about", "#skills", "#projects", "#contact"]
        );
    }
}
