use serde::Serialize;

pub const OWNER: &str = "Afrizz";
pub const TAGLINE: &str = "Full Stack Web Developer";

pub const ABOUT: &str = "I am a student and I created this project just for fun, because why not? \
I am still enjoying this long holiday. This portfolio was built by someone who is figuring it out \
as he goes, learning a little more with every section. If you found your way here, thanks for \
stopping by and enjoy the scroll.";

pub const CONTACT_NOTE: &str = "Feel free to reach out to me through any of the platforms above. \
I'm always open to new opportunities and collaborations!";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Tech,
    Projects,
    Certificates,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Home,
        Self::About,
        Self::Tech,
        Self::Projects,
        Self::Certificates,
        Self::Contact,
    ];

    /// Element id used as the scroll target for this section.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Tech => "tech",
            Self::Projects => "projects",
            Self::Certificates => "certificates",
            Self::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Question,
    Code,
    Certificate,
    Contact,
    Github,
    ExternalLink,
    Email,
    Instagram,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Question => "?",
            Self::Code => "</>",
            Self::Certificate => "✦",
            Self::Contact => "☺",
            Self::Github => "⌥",
            Self::ExternalLink => "↗",
            Self::Email => "✉",
            Self::Instagram => "◎",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Green,
    Yellow,
    Pink,
    Orange,
    Cyan,
    Purple,
    Red,
    Gray,
    White,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "tone-blue",
            Self::Green => "tone-green",
            Self::Yellow => "tone-yellow",
            Self::Pink => "tone-pink",
            Self::Orange => "tone-orange",
            Self::Cyan => "tone-cyan",
            Self::Purple => "tone-purple",
            Self::Red => "tone-red",
            Self::Gray => "tone-gray",
            Self::White => "tone-white",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct NavItem {
    pub section: SectionId,
    pub icon: Icon,
    pub label: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct GreetingEntry {
    pub text: &'static str,
    pub tone: Tone,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct TechEntry {
    pub name: &'static str,
    pub monogram: &'static str,
    pub tone: Tone,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub repository_url: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct CertificateEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct ContactEntry {
    pub platform: &'static str,
    pub value: &'static str,
    pub link: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { section: SectionId::Home, icon: Icon::Home, label: "Home" },
    NavItem { section: SectionId::About, icon: Icon::Question, label: "About Me" },
    NavItem { section: SectionId::Tech, icon: Icon::Code, label: "Tech Stack" },
    NavItem { section: SectionId::Projects, icon: Icon::Code, label: "My Projects" },
    NavItem { section: SectionId::Certificates, icon: Icon::Certificate, label: "Certificates" },
    NavItem { section: SectionId::Contact, icon: Icon::Contact, label: "Contact" },
];

pub const GREETINGS: &[GreetingEntry] = &[
    GreetingEntry { text: "Hello", tone: Tone::Blue },
    GreetingEntry { text: "Hi", tone: Tone::Green },
    GreetingEntry { text: "Ola", tone: Tone::Yellow },
    GreetingEntry { text: "Hola", tone: Tone::Pink },
];

pub const TECH_STACK: &[TechEntry] = &[
    TechEntry { name: "HTML", monogram: "H5", tone: Tone::Orange },
    TechEntry { name: "CSS", monogram: "C3", tone: Tone::Blue },
    TechEntry { name: "JAVASCRIPT", monogram: "JS", tone: Tone::Yellow },
    TechEntry { name: "TYPESCRIPT", monogram: "TS", tone: Tone::Blue },
    TechEntry { name: "REACT", monogram: "Re", tone: Tone::Cyan },
    TechEntry { name: "VITE", monogram: "Vi", tone: Tone::Purple },
    TechEntry { name: "NEXT JS", monogram: "Nx", tone: Tone::White },
    TechEntry { name: "TAILWIND CSS", monogram: "Tw", tone: Tone::Cyan },
    TechEntry { name: "PYTHON", monogram: "Py", tone: Tone::Blue },
    TechEntry { name: "MYSQL", monogram: "My", tone: Tone::Blue },
    TechEntry { name: "NODE JS", monogram: "No", tone: Tone::Green },
    TechEntry { name: "APACHE", monogram: "Ap", tone: Tone::Red },
    TechEntry { name: "NGINX", monogram: "Ng", tone: Tone::Green },
    TechEntry { name: "DOCKER", monogram: "Dk", tone: Tone::Blue },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Lyrics Visualizer",
        description: "A web application that visualizes song lyrics with dynamic animations and effects. Built with modern web technologies to create an immersive music experience.",
        repository_url: "https://github.com/ucupp19/lyrics-visualizer",
        image: "/projects/LyricsVisualizer.png",
    },
    ProjectEntry {
        title: "Lyrics Music AM",
        description: "A comprehensive music application that displays synchronized lyrics with music playback. Features include real-time lyrics display and music controls.",
        repository_url: "https://github.com/ucupp19/LyricsMusicAM",
        image: "/projects/LyricsAM.png",
    },
    ProjectEntry {
        title: "Discord Bot",
        description: "A feature-rich Discord bot with various utilities and entertainment features. Includes moderation tools, music playback, and interactive commands.",
        repository_url: "https://github.com/ucupp19/MALAZ-BOTT",
        image: "/projects/DiscordBot.png",
    },
];

pub const CERTIFICATES: &[CertificateEntry] = &[
    CertificateEntry {
        name: "Dicoding Python",
        description: "Python Programming Certification",
        image: "/certificates/python.png",
    },
    CertificateEntry {
        name: "JavaScript freeCodeCamp",
        description: "JavaScript Algorithms and Data Structures",
        image: "/certificates/javascripts.png",
    },
    CertificateEntry {
        name: "Responsive Web Design freeCodeCamp",
        description: "Responsive Web Design Certification",
        image: "/certificates/freecodecamp.png",
    },
    CertificateEntry {
        name: "Networking Basic Cisco",
        description: "Cisco Networking Fundamentals",
        image: "/certificates/networkbasic.png",
    },
    CertificateEntry {
        name: "Networking Device Cisco",
        description: "Cisco Device Configuration",
        image: "/certificates/networkdevice.png",
    },
];

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        platform: "Email",
        value: "yusufafaris@gmail.com",
        link: "mailto:yusufafaris@gmail.com",
        icon: Icon::Email,
        tone: Tone::Red,
    },
    ContactEntry {
        platform: "GitHub",
        value: "github.com/ucupp19",
        link: "https://github.com/ucupp19",
        icon: Icon::Github,
        tone: Tone::Gray,
    },
    ContactEntry {
        platform: "Instagram",
        value: "@afrizzz19",
        link: "https://www.instagram.com/afrizzz19/",
        icon: Icon::Instagram,
        tone: Tone::Pink,
    },
];

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub owner: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub sections: [SectionId; 6],
    pub navigation: &'static [NavItem],
    pub greetings: &'static [GreetingEntry],
    pub tech_stack: &'static [TechEntry],
    pub projects: &'static [ProjectEntry],
    pub certificates: &'static [CertificateEntry],
    pub contacts: &'static [ContactEntry],
}

pub const SITE: SiteContent = SiteContent {
    owner: OWNER,
    tagline: TAGLINE,
    about: ABOUT,
    sections: SectionId::ALL,
    navigation: NAV_ITEMS,
    greetings: GREETINGS,
    tech_stack: TECH_STACK,
    projects: PROJECTS,
    certificates: CERTIFICATES,
    contacts: CONTACTS,
};

impl SiteContent {
    /// Every outbound URL the page renders as a link.
    pub fn outbound_links(&self) -> impl Iterator<Item = &'static str> {
        self.projects
            .iter()
            .map(|project| project.repository_url)
            .chain(self.contacts.iter().map(|contact| contact.link))
    }
}

/// Web links open in a new tab; `mailto:` and same-site paths do not.
pub fn opens_new_tab(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_exactly_one_nav_item_in_page_order() {
        let sections: Vec<SectionId> = NAV_ITEMS.iter().map(|item| item.section).collect();
        assert_eq!(sections, SectionId::ALL.to_vec());
    }

    #[test]
    fn anchors_match_page_element_ids() {
        let anchors: Vec<&str> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
        assert_eq!(
            anchors,
            ["home", "about", "tech", "projects", "certificates", "contact"]
        );
    }

    #[test]
    fn outbound_links_cover_projects_and_contacts() {
        let links: Vec<&str> = SITE.outbound_links().collect();
        assert_eq!(links.len(), PROJECTS.len() + CONTACTS.len());
        assert!(links.contains(&"mailto:yusufafaris@gmail.com"));
        assert!(links.contains(&"https://github.com/ucupp19/MALAZ-BOTT"));
    }

    #[test]
    fn asset_paths_are_rooted() {
        assert!(PROJECTS.iter().all(|project| project.image.starts_with("/projects/")));
        assert!(CERTIFICATES
            .iter()
            .all(|certificate| certificate.image.starts_with("/certificates/")));
    }

    #[test]
    fn only_web_links_open_a_new_tab() {
        assert!(opens_new_tab("https://github.com/ucupp19"));
        assert!(!opens_new_tab("mailto:yusufafaris@gmail.com"));
        assert!(!opens_new_tab("/resume.pdf"));
    }
}
