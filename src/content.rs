//! Copy shown on the page.

pub const OWNER_NAME: &str = "Mai Vủ";
pub const ROLE: &str = "Frontend Developer passionate about UI/UX";
pub const EMAIL: &str = "maivananhvu.dev@gmail.com";
pub const LOCATION: &str = "Da Nang, Viet Nam";
pub const GITHUB_URL: &str = "https://github.com/BoyKa74";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/mai-văn-anh-vủ-8793512bb";
pub const TWITTER_URL: &str = "https://twitter.com/yourusername";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const AVATAR_PLACEHOLDER: &str = "/avatar-placeholder.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        self.kind != SocialKind::Email
    }
}

pub static SOCIALS: [SocialLink; 4] = [
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: GITHUB_URL,
        icon: "devicon-github-plain",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: LINKEDIN_URL,
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        kind: SocialKind::Twitter,
        label: "Twitter",
        href: TWITTER_URL,
        icon: "devicon-twitter-original",
    },
    SocialLink {
        kind: SocialKind::Email,
        label: "Email",
        href: "mailto:maivananhvu.dev@gmail.com",
        icon: "",
    },
];

#[derive(Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_url: &'static str,
    pub github_url: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "E-commerce Website",
        description: "A full-featured e-commerce platform with product listings, cart functionality, and secure checkout.",
        image: "/projects/ecommerce.jpg",
        technologies: &["React", "Node.js", "MongoDB", "Stripe API"],
        demo_url: "https://demo-ecommerce.example.com",
        github_url: "https://github.com/yourusername/ecommerce-project",
    },
    Project {
        title: "Task Management App",
        description: "A productivity app allowing users to create, organize, and track tasks with drag-and-drop functionality.",
        image: "/projects/task-app.jpg",
        technologies: &["Vue.js", "Firebase", "Tailwind CSS"],
        demo_url: "https://task-app.example.com",
        github_url: "https://github.com/yourusername/task-app",
    },
    Project {
        title: "Weather Dashboard",
        description: "A real-time weather application displaying forecast data and interactive maps.",
        image: "/projects/weather-app.jpg",
        technologies: &["JavaScript", "OpenWeather API", "Chart.js", "CSS3"],
        demo_url: "https://weather-dashboard.example.com",
        github_url: "https://github.com/yourusername/weather-dashboard",
    },
    Project {
        title: "Portfolio Website",
        description: "A personal portfolio website built with modern web technologies and responsive design.",
        image: "/projects/portfolio.jpg",
        technologies: &["Rust", "Leptos", "Tailwind CSS"],
        demo_url: "https://yourname.example.com",
        github_url: "https://github.com/yourusername/portfolio",
    },
];

/// Self-assessed proficiency, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const fn new(level: u8) -> Self {
        let level = if level < 1 {
            1
        } else if level > 5 {
            5
        } else {
            level
        };
        Self(level)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Beginner",
            2 => "Elementary",
            3 => "Intermediate",
            4 => "Advanced",
            _ => "Expert",
        }
    }

    /// Width of the skill bar.
    pub fn percent(self) -> u8 {
        self.0 * 20
    }
}

#[derive(Debug)]
pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

#[derive(Debug)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill {
        name,
        level: SkillLevel::new(level),
    }
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        name: "Frontend",
        skills: &[
            skill("HTML5", 5),
            skill("CSS3/SCSS", 5),
            skill("JavaScript", 5),
            skill("TypeScript", 4),
            skill("React", 5),
            skill("Next.js", 4),
            skill("Tailwind CSS", 5),
            skill("Material UI", 4),
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            skill("Node.js", 4),
            skill("Express.js", 4),
            skill("MongoDB", 3),
            skill("PostgreSQL", 3),
            skill("API Development", 4),
            skill("GraphQL", 3),
        ],
    },
    SkillCategory {
        name: "Tools & Others",
        skills: &[
            skill("Git/GitHub", 5),
            skill("Figma", 4),
            skill("VS Code", 5),
            skill("Webpack", 3),
            skill("Jest", 3),
            skill("CI/CD", 3),
            skill("Docker", 2),
        ],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &[
            skill("Problem Solving", 5),
            skill("Communication", 4),
            skill("Teamwork", 5),
            skill("Time Management", 4),
            skill("Adaptability", 5),
        ],
    },
];

pub static CURRENTLY_LEARNING: [&str; 4] = ["AWS", "Three.js", "React Native", "Python"];

#[derive(Debug)]
pub struct Milestone {
    pub title: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EDUCATION: [Milestone; 2] = [
    Milestone {
        title: "Bachelor of Science in Computer Science",
        place: "Your University Name",
        period: "2018 - 2022",
        highlights: &[],
    },
    Milestone {
        title: "Web Development Bootcamp",
        place: "Coding Academy",
        period: "2022",
        highlights: &[],
    },
];

pub static EXPERIENCE: [Milestone; 2] = [
    Milestone {
        title: "Frontend Developer",
        place: "Company Name",
        period: "2022 - Present",
        highlights: &[
            "Developed responsive web applications using React and Next.js",
            "Implemented UI components with Tailwind CSS",
            "Collaborated with backend developers to integrate RESTful APIs",
        ],
    },
    Milestone {
        title: "Web Development Intern",
        place: "Internship Company",
        period: "Summer 2021",
        highlights: &[
            "Assisted in building website features using JavaScript and CSS",
            "Participated in UI/UX design meetings and implemented design mockups",
            "Optimized website performance through code refactoring",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels() {
        assert_eq!(SkillLevel::new(1).label(), "Beginner");
        assert_eq!(SkillLevel::new(3).label(), "Intermediate");
        assert_eq!(SkillLevel::new(5).label(), "Expert");
        assert_eq!(SkillLevel::new(4).percent(), 80);

        // out of range values are pinned
        assert_eq!(SkillLevel::new(0).value(), 1);
        assert_eq!(SkillLevel::new(9).value(), 5);
    }

    #[test]
    fn test_skill_data_in_range() {
        for category in &SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!((1..=5).contains(&skill.level.value()), "{}", skill.name);
            }
        }
    }

    #[test]
    fn test_only_email_is_internal() {
        let internal: Vec<_> = SOCIALS.iter().filter(|s| !s.is_external()).collect();
        assert_eq!(internal.len(), 1);
        assert!(internal[0].href.starts_with("mailto:"));
    }
}
