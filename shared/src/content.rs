//! Static copy and lists rendered by the site sections.

/// Page sections in scroll order; ids double as anchor targets
pub const NAV_SECTIONS: [&str; 6] = ["home", "about", "skills", "projects", "booking", "contact"];

/// Sections linked from the footer
pub const FOOTER_LINKS: [&str; 5] = ["About", "Skills", "Projects", "Booking", "Contact"];

pub const OWNER_NAME: &str = "UMUHIRE Germiane";
pub const BRAND: &str = "Germiane";
pub const TAGLINE: &str = "Front-End Developer crafting beautiful, responsive web experiences with modern technologies";
pub const PROFILE_IMAGE: &str = "/image/12.jpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { label: "GitHub", href: "https://github.com" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { label: "Email", href: "mailto:umuhiregermaine12@gmail.com" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: "umuhiregermaine12@gmail.com",
    phone: "+250 791 593 529",
    location: "Kigali, Rwanda",
};

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a passionate front-end developer with a keen eye for design and a love for creating exceptional user experiences.",
    "With a strong foundation in modern web technologies, I specialize in building responsive, accessible, and performant web applications. I believe in writing clean, maintainable code and staying up-to-date with the latest industry trends and best practices.",
    "When I'm not coding, you'll find me exploring new design patterns, contributing to open-source projects, or learning about emerging technologies that can enhance user experiences.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    /// CSS accent class (emerald, teal, cyan)
    pub accent: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Clean Code",
        description: "Writing maintainable, scalable code following industry best practices and modern standards.",
        accent: "emerald",
    },
    Highlight {
        title: "UI/UX Focus",
        description: "Creating intuitive and visually appealing interfaces that provide excellent user experiences.",
        accent: "teal",
    },
    Highlight {
        title: "Performance",
        description: "Optimizing applications for speed and efficiency to ensure the best possible user experience.",
        accent: "cyan",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 2] = [
    SkillCategory {
        title: "Frontend Technologies",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "JavaScript", level: 95 },
            Skill { name: "HTML5/CSS3", level: 95 },
            Skill { name: "Tailwind CSS", level: 90 },
            Skill { name: "Next.js", level: 80 },
        ],
    },
    SkillCategory {
        title: "Tools & Workflow",
        skills: &[
            Skill { name: "Git/GitHub", level: 90 },
            Skill { name: "Vite", level: 85 },
            Skill { name: "npm/yarn", level: 90 },
            Skill { name: "Figma", level: 85 },
            Skill { name: "VS Code", level: 95 },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    /// `None` when there is no public deployment
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "E-Commerce Platform",
        description: "A modern e-commerce platform built with React and TypeScript, featuring user authentication, product catalog, shopping cart, and payment integration.",
        image: "https://images.pexels.com/photos/4482900/pexels-photo-4482900.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["React", "TypeScript", "Tailwind CSS", "Stripe API"],
        live_url: None,
        source_url: None,
    },
    Project {
        title: "Personal Journal App",
        description: "The Personal Journal App lets users securely write, edit, and organize daily thoughts, goals, and reflections with a clean interface.",
        image: "https://images.pexels.com/photos/7947699/pexels-photo-7947699.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["React", "Node.js", "Socket.io", "MongoDB"],
        live_url: Some("https://journel-o6zl.vercel.app/"),
        source_url: Some("https://github.com/Germaine144/journel"),
    },
    Project {
        title: "Construction Site App",
        description: "The Construction Site App helps manage tasks, track progress, and improve team communication, ensuring efficient construction workflows through real-time updates and a mobile-friendly interface.",
        image: "/image/construction.jpg",
        tech: &["React", "Next.js", "Tailwind CSS"],
        live_url: Some("https://construction-site-ten.vercel.app/"),
        source_url: None,
    },
    Project {
        title: "Recipe Review",
        description: "The Recipe Review App lets users explore, review, and share recipes. It features ratings, comments, and personalized collections for easier cooking and discovery.",
        image: "/image/rev.jpg",
        tech: &["React", "TypeScript", "Tailwind CSS", "Framer Motion"],
        live_url: None,
        source_url: None,
    },
];

/// Title-cased nav label ("booking" -> "Booking")
pub fn section_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
