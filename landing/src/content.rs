//! Hand-authored page content.
//!
//! Every table here is a `static`: it is compiled into the binary once and
//! never rebuilt per render.

/// Sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Features,
    Origin,
    Team,
    Contact,
}

impl SectionId {
    /// Fragment identifier the section is rendered with.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Features => "features",
            SectionId::Origin => "origin",
            SectionId::Team => "team",
            SectionId::Contact => "contact",
        }
    }

    /// In-page link target, e.g. `#team`.
    pub const fn href(self) -> &'static str {
        match self {
            SectionId::Features => "#features",
            SectionId::Origin => "#origin",
            SectionId::Team => "#team",
            SectionId::Contact => "#contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub section: SectionId,
    pub label: &'static str,
    /// Rendered as the highlighted call-to-action button.
    pub is_cta: bool,
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        section: SectionId::Features,
        label: "Featured",
        is_cta: false,
    },
    NavLink {
        section: SectionId::Origin,
        label: "About",
        is_cta: false,
    },
    NavLink {
        section: SectionId::Team,
        label: "Team",
        is_cta: false,
    },
    NavLink {
        section: SectionId::Contact,
        label: "Contact",
        is_cta: true,
    },
];

/// A card in the team grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub image_path: &'static str,
}

pub static TEAM: [TeamMember; 7] = [
    TeamMember {
        name: "Shaik Hatim",
        title: "Team Lead",
        image_path: "/hatim.png",
    },
    TeamMember {
        name: "Sahishnu Sagiraju",
        title: "Lead Full-Stack Developer",
        image_path: "/sahi.png",
    },
    TeamMember {
        name: "Sherwin Thirumavalan",
        title: "Back-End Developer",
        image_path: "/sherwin.png",
    },
    TeamMember {
        name: "Hari Prasath Ramalingam",
        title: "Front-End Developer",
        image_path: "/hari.png",
    },
    TeamMember {
        name: "Adit Pathania",
        title: "Front-End Developer",
        image_path: "/adit.png",
    },
    TeamMember {
        name: "Harkanwarveer Singh Kang",
        title: "Mechanical Systems Engineer",
        image_path: "/hark.png",
    },
    TeamMember {
        name: "Ameer Rehman",
        title: "Mechanical Systems Engineer",
        image_path: "/ameer.png",
    },
];

/// One page of the origin-story carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
    pub image_path: &'static str,
}

pub static SLIDES: [Slide; 3] = [
    Slide {
        title: "The Idea",
        description: "The idea for SafeLine was born during HackUTA, where our team tackled the challenge of \
            creating a safer and more efficient school pick-up system. With a shared passion for technology \
            and problem-solving, we brainstormed a solution to streamline student pick-ups while ensuring \
            security. The concept was simple: leverage license plate recognition and modern web tools to \
            simplify the process for parents and educators alike. Fueled by the energy of the hackathon, \
            SafeLines foundation was laid, and the journey began.",
        image_path: "/team.png",
    },
    Slide {
        title: "The Vision",
        description: "Our vision for SafeLine extends far beyond its initial concept. We aim to redefine \
            school pick-ups by creating a system that is not only efficient but also scalable and secure. \
            Imagine a world where every school, big or small, can adopt an automated system to reduce \
            traffic congestion, enhance student safety, and eliminate manual errors. SafeLine strives to \
            bring peace of mind to parents, teachers, and administrators by blending cutting-edge \
            technology with user-friendly design.",
        image_path: "/vision.png",
    },
    Slide {
        title: "The Journey",
        description: "After HackUTA, we set out to make SafeLine a reality. We began gathering the tools and \
            skills needed to build the project. From integrating Raspberry Pi for camera systems to \
            developing a Firebase-backed database and crafting an intuitive ReactJS interface, every step \
            brought us closer to our goal. Along the way, we faced challenges, refined our approach, and \
            grew as a team. Today, SafeLine stands as a testament to our perseverance and commitment to \
            innovation, with a fully functional system ready to make an impact in select DFW schools.",
        image_path: "/journey.png",
    },
];

/// Permissions granted to the embedded demo video frame.
pub const VIDEO_PERMISSIONS: [&str; 6] = [
    "accelerometer",
    "autoplay",
    "clipboard-write",
    "encrypted-media",
    "gyroscope",
    "picture-in-picture",
];

/// Value for the iframe `allow` attribute.
pub fn video_allow_attr() -> String {
    VIDEO_PERMISSIONS.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn team_has_seven_members_in_authored_order() {
        let names: Vec<_> = TEAM.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "Shaik Hatim",
                "Sahishnu Sagiraju",
                "Sherwin Thirumavalan",
                "Hari Prasath Ramalingam",
                "Adit Pathania",
                "Harkanwarveer Singh Kang",
                "Ameer Rehman",
            ]
        );
    }

    #[test]
    fn team_entries_are_complete() {
        for member in TEAM.iter() {
            assert!(!member.name.is_empty());
            assert!(!member.title.is_empty());
            assert!(member.image_path.starts_with('/'), "{}", member.image_path);
        }
    }

    #[test]
    fn slides_keep_their_order() {
        let titles: Vec<_> = SLIDES.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["The Idea", "The Vision", "The Journey"]);
    }

    #[test]
    fn slide_descriptions_join_lines_with_single_spaces() {
        for slide in SLIDES.iter() {
            assert!(!slide.description.contains("  "), "{}", slide.title);
            assert!(!slide.description.contains('\n'), "{}", slide.title);
        }
    }

    #[test]
    fn href_is_anchor_with_hash() {
        for link in NAV_LINKS.iter() {
            assert_eq!(link.section.href(), format!("#{}", link.section.anchor()));
        }
    }

    #[test]
    fn only_contact_is_call_to_action() {
        let ctas: Vec<_> = NAV_LINKS.iter().filter(|l| l.is_cta).map(|l| l.section).collect();
        assert_eq!(ctas, vec![SectionId::Contact]);
    }

    #[test]
    fn video_allow_attr_lists_all_permissions() {
        assert_eq!(
            video_allow_attr(),
            "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
        );
    }
}
