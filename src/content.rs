//! Static page content. Everything here is literal data compiled into the binary.

/// Icon references used across the page, rendered as glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Award,
    TrendingUp,
    Zap,
    Heart,
    Sparkles,
    Users,
    Phone,
    Mail,
    MapPin,
    Instagram,
    Facebook,
    Youtube,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Award => "🏆",
            Icon::TrendingUp => "📈",
            Icon::Zap => "⚡",
            Icon::Heart => "❤️",
            Icon::Sparkles => "✨",
            Icon::Users => "👥",
            Icon::Phone => "📞",
            Icon::Mail => "✉️",
            Icon::MapPin => "📍",
            Icon::Instagram => "📸",
            Icon::Facebook => "📘",
            Icon::Youtube => "▶️",
        }
    }
}

/// Two-stop gradient tags shared by cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gradient {
    VioletPurple,
    PinkRose,
    CyanBlue,
    VioletPink,
    PinkRoseSoft,
    PinkRoseDeep,
    BlueIndigo,
    RedRose,
}

impl Gradient {
    pub fn stops(self) -> (&'static str, &'static str) {
        match self {
            Gradient::VioletPurple => ("#a78bfa", "#c084fc"),
            Gradient::PinkRose => ("#f472b6", "#fb7185"),
            Gradient::CyanBlue => ("#22d3ee", "#60a5fa"),
            Gradient::VioletPink => ("#a78bfa", "#f9a8d4"),
            Gradient::PinkRoseSoft => ("#f9a8d4", "#fda4af"),
            Gradient::PinkRoseDeep => ("#ec4899", "#f43f5e"),
            Gradient::BlueIndigo => ("#3b82f6", "#6366f1"),
            Gradient::RedRose => ("#ef4444", "#f43f5e"),
        }
    }

    /// CSS `background` value running left to right.
    pub fn css(self) -> String {
        let (from, to) = self.stops();
        format!("linear-gradient(90deg, {}, {})", from, to)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub gradient: Gradient,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorkItem {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub instagram: Option<&'static str>,
    pub image: &'static str,
    pub gradient: Gradient,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub gradient: Gradient,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub gradient: Gradient,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactCard {
    pub heading: &'static str,
    pub value: &'static str,
    pub icon: Icon,
}

/// In-page anchors reachable from the navigation bar, in display order.
pub const NAV_ANCHORS: [&str; 5] = ["About", "Services", "Team", "Work", "Contact"];

/// `"Services"` -> `"#services"`
pub fn anchor_href(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

pub const STATS: [Stat; 3] = [
    Stat {
        label: "Client Satisfaction",
        value: 95,
        suffix: "%",
        icon: Icon::Award,
    },
    Stat {
        label: "Average ROI Increase",
        value: 300,
        suffix: "%",
        icon: Icon::TrendingUp,
    },
    Stat {
        label: "Successful Campaigns",
        value: 99,
        suffix: "%",
        icon: Icon::Zap,
    },
];

pub const SERVICES: [Service; 4] = [
    Service {
        title: "Brand Identity",
        description: "We craft brand stories that resonate emotionally with your audience, making your brand unforgettable.",
        icon: Icon::Heart,
        gradient: Gradient::PinkRose,
    },
    Service {
        title: "Content Creation",
        description: "Content so engaging, your audience won't be able to stop scrolling - even at 2 AM.",
        icon: Icon::Sparkles,
        gradient: Gradient::VioletPurple,
    },
    Service {
        title: "Digital Marketing",
        description: "300% average ROI increase. We don't just run campaigns, we create movements.",
        icon: Icon::TrendingUp,
        gradient: Gradient::CyanBlue,
    },
    Service {
        title: "Social Media",
        description: "Turn your social presence into a conversation your audience craves to be part of.",
        icon: Icon::Users,
        gradient: Gradient::VioletPink,
    },
];

pub const WORKS: [WorkItem; 3] = [
    WorkItem {
        title: "House of Bliss",
        subtitle: "From Unknown to Unmissable",
        description: "Every photographer thinks they're the next big thing, but House of Bliss actually became it.",
        link: "https://houseofbliss.co.in/",
        instagram: Some("https://www.instagram.com/houseofbliss.in/"),
        image: "https://images.unsplash.com/photo-1606216794074-735e91aa2c92?w=800&q=80",
        gradient: Gradient::VioletPurple,
    },
    WorkItem {
        title: "Collaborative Senior Care",
        subtitle: "Rewriting Healthcare's Story",
        description: "Healthcare marketing transformed into something people actually want to engage with.",
        link: "https://collaborativeseniorcare.com/",
        instagram: None,
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800&q=80",
        gradient: Gradient::PinkRose,
    },
    WorkItem {
        title: "Classy Captures",
        subtitle: "The Art of Timeless Wedding Photography",
        description: "Wedding photography transformed into preserving emotions that deserve to live forever.",
        link: "https://classycaptures.com/",
        instagram: Some("https://www.instagram.com/classycaptures_official"),
        image: "https://images.unsplash.com/photo-1519741497674-611481863552?w=800&q=80",
        gradient: Gradient::CyanBlue,
    },
];

pub const ALL_WORK_URL: &str = "https://winxmarketingmedia.in/our-work/";

pub const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Sangeetha Singh",
        role: "Co-Founder",
        description: "Visionary leader driving brand excellence and creative innovation.",
        image: "https://winxmarketingmedia.in/wp-content/uploads/2025/06/Untitled-design-29.png",
        gradient: Gradient::VioletPurple,
    },
    TeamMember {
        name: "M N K Khajukathara",
        role: "Co-Founder",
        description: "Strategic mind behind transformative marketing solutions.",
        image: "https://winxmarketingmedia.in/wp-content/uploads/2025/06/2-1.png",
        gradient: Gradient::PinkRoseSoft,
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "V. Preetham Raju",
        role: "CEO",
        company: "IT'S FOREVER",
        text: "We thought we were just getting help with marketing. Instead, we found our brand voice. The WinX team truly understands what we stand for.",
        rating: 5,
    },
    Testimonial {
        name: "Santhosh Sridhar",
        role: "Founder",
        company: "SSSS CATERING",
        text: "Our food has always spoken for itself, but online it needed a voice. WinX made our visuals and brand look as rich and authentic as the experience we serve.",
        rating: 5,
    },
    Testimonial {
        name: "Jordan",
        role: "Founder",
        company: "COLLABORATIVE SENIOR CARE",
        text: "In elder care, communication needs to be handled with empathy and trust. WinX helped us express that with true professionalism.",
        rating: 5,
    },
];

pub const CONTACT_CARDS: [ContactCard; 3] = [
    ContactCard {
        heading: "Call Us",
        value: "+91 8197519556",
        icon: Icon::Phone,
    },
    ContactCard {
        heading: "Email Us",
        value: "winxmedia23@gmail.com",
        icon: Icon::Mail,
    },
    ContactCard {
        heading: "Visit Us",
        value: "WeWork Galaxy, Bengaluru",
        icon: Icon::MapPin,
    },
];

pub const FOOTER_CONTACT: [ContactCard; 3] = [
    ContactCard {
        heading: "Phone",
        value: "+91 8197519556",
        icon: Icon::Phone,
    },
    ContactCard {
        heading: "Email",
        value: "winxmedia23@gmail.com",
        icon: Icon::Mail,
    },
    ContactCard {
        heading: "Location",
        value: "Bengaluru, Karnataka",
        icon: Icon::MapPin,
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com/winxmedia.in",
        icon: Icon::Instagram,
        gradient: Gradient::PinkRoseDeep,
    },
    SocialLink {
        label: "Facebook",
        href: "#",
        icon: Icon::Facebook,
        gradient: Gradient::BlueIndigo,
    },
    SocialLink {
        label: "Youtube",
        href: "#",
        icon: Icon::Youtube,
        gradient: Gradient::RedRose,
    },
];

pub const FOOTER_QUICK_LINKS: [&str; 4] = ["About", "Services", "Team", "Work"];
pub const LEGAL_LINKS: [&str; 2] = ["Privacy Policy", "Terms of Service"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_href() {
        assert_eq!(anchor_href("About"), "#about");
        assert_eq!(anchor_href("Contact"), "#contact");
    }

    #[test]
    fn test_nav_anchors_cover_page_targets() {
        let hrefs: Vec<String> = NAV_ANCHORS.iter().map(|a| anchor_href(a)).collect();
        assert_eq!(hrefs, vec!["#about", "#services", "#team", "#work", "#contact"]);
    }

    #[test]
    fn test_footer_services_match_service_cards() {
        let titles: Vec<&str> = SERVICES.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Brand Identity", "Content Creation", "Digital Marketing", "Social Media"]
        );
    }

    #[test]
    fn test_testimonials_are_five_star() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn test_gradient_css() {
        assert_eq!(
            Gradient::CyanBlue.css(),
            "linear-gradient(90deg, #22d3ee, #60a5fa)"
        );
    }
}
