//! Page content for every view of the site.
//!
//! Each view is a pure function returning a [`Page`], the render model the
//! presentation layer turns into terminal lines. All copy is hard-coded.

use super::routes::Route;

/// Pictograms used next to headings and contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Shield,
    Globe,
    Cpu,
    Server,
    Network,
    Headphones,
    Monitor,
    Phone,
    Mail,
    MapPin,
    Search,
    Menu,
    Close,
}

impl Icon {
    /// Single-column glyph drawn in place of the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Shield => "◆",
            Icon::Globe => "◎",
            Icon::Cpu => "▣",
            Icon::Server => "▤",
            Icon::Network => "⋈",
            Icon::Headphones => "♫",
            Icon::Monitor => "▭",
            Icon::Phone => "☎",
            Icon::Mail => "✉",
            Icon::MapPin => "⌖",
            Icon::Search => "⌕",
            Icon::Menu => "≡",
            Icon::Close => "×",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Filled emerald button.
    Solid,
    /// Bordered button.
    Outline,
}

/// An in-page link to another path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub to: String,
    pub style: LinkStyle,
}

impl Link {
    pub fn solid(label: &str, to: &str) -> Self {
        Self { label: label.to_string(), to: to.to_string(), style: LinkStyle::Solid }
    }

    pub fn outline(label: &str, to: &str) -> Self {
        Self { label: label.to_string(), to: to.to_string(), style: LinkStyle::Outline }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    Text(String),
    Bullets(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub icon: Option<Icon>,
    pub title: String,
    pub body: CardBody,
}

impl Card {
    fn text(icon: Option<Icon>, title: &str, text: &str) -> Self {
        Self { icon, title: title.to_string(), body: CardBody::Text(text.to_string()) }
    }

    fn bullets(title: &str, items: &[&str]) -> Self {
        Self {
            icon: None,
            title: title.to_string(),
            body: CardBody::Bullets(items.iter().map(|item| item.to_string()).collect()),
        }
    }
}

/// The banner at the top of the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub lead: String,
    pub highlight: String,
    /// Second headline line; the first ends with the highlight and a comma
    pub trail: String,
    pub lede: String,
    pub actions: Vec<Link>,
    pub chip: String,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Cards(Vec<Card>),
    /// Short bordered labels, e.g. client names.
    Tiles(Vec<String>),
    Paragraph(String),
    Links(Vec<Link>),
    /// The contact form. Field values live in application state.
    ContactForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub subtitle: Option<String>,
    pub blocks: Vec<Block>,
}

impl Section {
    fn new(title: &str, subtitle: &str, blocks: Vec<Block>) -> Self {
        Self {
            title: title.to_string(),
            subtitle: Some(subtitle.to_string()),
            blocks,
        }
    }
}

/// Render model of one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The route this page was built for; `None` for the not-found view.
    pub route: Option<Route>,
    pub hero: Option<Hero>,
    pub sections: Vec<Section>,
}

impl Page {
    /// Title shown in the status bar.
    pub fn title(&self) -> &str {
        match (&self.hero, self.sections.first()) {
            (Some(_), _) => "Home",
            (None, Some(section)) => section.title.as_str(),
            (None, None) => "",
        }
    }

    /// Every link on the page, hero actions first, in reading order.
    pub fn links(&self) -> Vec<&Link> {
        let hero = self.hero.iter().flat_map(|hero| hero.actions.iter());
        let blocks = self
            .sections
            .iter()
            .flat_map(|section| section.blocks.iter())
            .filter_map(|block| match block {
                Block::Links(links) => Some(links.iter()),
                _ => None,
            })
            .flatten();
        hero.chain(blocks).collect()
    }

    pub fn has_contact_form(&self) -> bool {
        self.sections
            .iter()
            .flat_map(|section| section.blocks.iter())
            .any(|block| matches!(block, Block::ContactForm))
    }

    /// All human-readable text of the page, used by site search.
    pub fn searchable_text(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        if let Some(hero) = &self.hero {
            texts.extend([
                hero.lead.as_str(),
                hero.highlight.as_str(),
                hero.trail.as_str(),
                hero.lede.as_str(),
                hero.chip.as_str(),
                hero.badge.as_str(),
            ]);
        }
        for section in &self.sections {
            texts.push(section.title.as_str());
            if let Some(subtitle) = &section.subtitle {
                texts.push(subtitle.as_str());
            }
            for block in &section.blocks {
                match block {
                    Block::Cards(cards) => {
                        for card in cards {
                            texts.push(card.title.as_str());
                            match &card.body {
                                CardBody::Text(text) => texts.push(text.as_str()),
                                CardBody::Bullets(items) => {
                                    texts.extend(items.iter().map(String::as_str))
                                }
                            }
                        }
                    }
                    Block::Tiles(tiles) => texts.extend(tiles.iter().map(String::as_str)),
                    Block::Paragraph(text) => texts.push(text.as_str()),
                    Block::Links(_) | Block::ContactForm => {}
                }
            }
        }
        texts
    }
}

pub const COMPANY: &str = "EHIGHWAY";
pub const TAGLINE: &str =
    "Your trusted digital partner — websites, software, networking, CCTV, and full support.";
pub const HELPLINE: &str = "+880 1711-975005, +880 1911-310472";
pub const EMAIL: &str = "info@ehighway.tech (placeholder)";
pub const ADDRESS: &str = "Ali Bhaban, Airport Road, Mojumdari,  Sylhet";
pub const SEARCH_PLACEHOLDER: &str = "Search products, services, solutions…";

const CLIENTS: [&str; 6] = [
    "Hiltown Hotel",
    "Grand Akther",
    "Ibn Sina",
    "SCPSC",
    "Relaks Media",
    "Friends Computer",
];

fn client_tiles() -> Block {
    Block::Tiles(CLIENTS.iter().map(|name| name.to_string()).collect())
}

fn opportunity_cards() -> Block {
    Block::Cards(vec![
        Card::text(None, "Partnerships", "Join as reseller/partner. Share work, share growth."),
        Card::text(None, "Bulk Projects", "Institutional setups: hotels, campuses, clinics, factories."),
        Card::text(None, "Custom Solutions", "Tailor-made software and hardware integration."),
    ])
}

pub fn home() -> Page {
    let hero = Hero {
        lead: "One Digital Platform for ".to_string(),
        highlight: "Online".to_string(),
        trail: "Offline, Hardware & Software Support".to_string(),
        lede: "We build, deploy and support complete digital solutions — websites, hotel & retail \
               systems, CCTV & networking, POS, accounting dashboards, and more."
            .to_string(),
        actions: vec![
            Link::solid("Explore Services", Route::Services.path()),
            Link::outline("Get a Free Quote", Route::Contact.path()),
        ],
        chip: "24/7 Support".to_string(),
        badge: "Trusted implementation partner".to_string(),
    };

    let sections = vec![
        Section::new(
            "Mission & Vision",
            "Value-driven service, long-term partnership",
            vec![Block::Cards(vec![
                Card::text(
                    None,
                    "Our Mission",
                    "Empower businesses with reliable, affordable technology — from software to \
                     hardware — so they can focus on growth, not problems.",
                ),
                Card::text(
                    None,
                    "Our Vision",
                    "Become the most trusted digital partner in Sylhet & beyond for hotels, \
                     retail, education, and SMEs — delivering end-to-end solutions under one \
                     umbrella.",
                ),
            ])],
        ),
        Section::new(
            "About Us",
            "Digital platform for online, offline, hardware & software support",
            vec![Block::Cards(vec![
                Card::text(
                    Some(Icon::Monitor),
                    "Web & Apps",
                    "React, MERN, dashboards, hotel & restaurant systems, portals.",
                ),
                Card::text(
                    Some(Icon::Network),
                    "Networking & CCTV",
                    "Design, fiber, PoE, routers, security cameras — installation & support.",
                ),
                Card::text(
                    Some(Icon::Headphones),
                    "Support & Training",
                    "24/7 helpline, staff training, on-site and remote assistance.",
                ),
            ])],
        ),
        Section::new(
            "Our Goals",
            "Quality, transparency, and quick response",
            vec![Block::Cards(vec![
                Card::text(
                    None,
                    "Reliable Delivery",
                    "On-time projects with documented processes and clear milestones.",
                ),
                Card::text(
                    None,
                    "Affordable & Scalable",
                    "Solutions that start small and grow with your business.",
                ),
                Card::text(
                    None,
                    "Local + Global",
                    "Sylhet-based support with global best practices and tools.",
                ),
            ])],
        ),
        Section::new(
            "Our Services",
            "End-to-end products & services under one roof",
            vec![Block::Cards(vec![
                Card::text(
                    Some(Icon::Globe),
                    "Websites & SEO",
                    "React sites, landing pages, SEO, analytics, hosting.",
                ),
                Card::text(
                    Some(Icon::Cpu),
                    "Software (MERN)",
                    "Hotel, restaurant, POS, accounting, OMR, custom apps.",
                ),
                Card::text(
                    Some(Icon::Server),
                    "Cloud & DevOps",
                    "VPS, backups, monitoring, CI/CD, security hardening.",
                ),
                Card::text(
                    Some(Icon::Network),
                    "Networking & CCTV",
                    "Router setup, fiber, PoE, IP cameras, access control.",
                ),
                Card::text(
                    Some(Icon::Headphones),
                    "Support & AMC",
                    "Annual maintenance, SLA, remote & on-site support.",
                ),
                Card::text(
                    Some(Icon::Shield),
                    "Procurement",
                    "Laptops, printers, scanners, PoE switches, accessories.",
                ),
            ])],
        ),
        Section::new(
            "Our Clients",
            "Hotels, restaurants, schools, clinics & SMEs",
            vec![client_tiles()],
        ),
        Section::new(
            "Opportunities",
            "Partner, reseller & project collaboration",
            vec![opportunity_cards()],
        ),
    ];

    Page { route: Some(Route::Home), hero: Some(hero), sections }
}

pub fn about() -> Page {
    Page {
        route: Some(Route::About),
        hero: None,
        sections: vec![Section::new(
            "About Ehighway",
            "Who we are & what we do",
            vec![Block::Cards(vec![
                Card::text(
                    None,
                    "Our Story",
                    "We started in Sylhet delivering practical tech for real businesses — hotels, \
                     retail, schools — focusing on results and long-term support.",
                ),
                Card::bullets(
                    "Why Choose Us",
                    &[
                        "Single partner for software + hardware",
                        "Local support, fast response",
                        "Transparent pricing & documentation",
                    ],
                ),
            ])],
        )],
    }
}

pub fn services() -> Page {
    Page {
        route: Some(Route::Services),
        hero: None,
        sections: vec![Section::new(
            "Services",
            "Everything under one roof",
            vec![Block::Cards(vec![
                Card::text(
                    Some(Icon::Globe),
                    "Websites & SEO",
                    "React/Vite sites, SEO, analytics, hosting, maintenance.",
                ),
                Card::text(
                    Some(Icon::Cpu),
                    "Custom Software (MERN)",
                    "Hotel reservation, POS, accounting, OMR, dashboards.",
                ),
                Card::text(
                    Some(Icon::Server),
                    "Cloud & DevOps",
                    "VPS, backups, monitoring, CI/CD, SSL, hardening.",
                ),
                Card::text(
                    Some(Icon::Network),
                    "Networking & CCTV",
                    "Fiber, PoE, IP camera, access control, PABX, Wi-Fi.",
                ),
                Card::text(
                    Some(Icon::Headphones),
                    "Support & AMC",
                    "Annual maintenance contracts, SLA, trainings.",
                ),
                Card::text(
                    Some(Icon::Shield),
                    "Procurement",
                    "Laptops, printers, scanners, PoE switches & more.",
                ),
            ])],
        )],
    }
}

pub fn clients() -> Page {
    Page {
        route: Some(Route::Clients),
        hero: None,
        sections: vec![Section::new(
            "Clients",
            "Some names we’ve worked with",
            vec![client_tiles()],
        )],
    }
}

pub fn opportunities() -> Page {
    Page {
        route: Some(Route::Opportunities),
        hero: None,
        sections: vec![Section::new(
            "Opportunities",
            "Partner, reseller & project collaboration",
            vec![opportunity_cards()],
        )],
    }
}

pub fn contact() -> Page {
    Page {
        route: Some(Route::Contact),
        hero: None,
        sections: vec![Section::new(
            "Contact Us",
            "We’d love to hear from you",
            vec![Block::ContactForm],
        )],
    }
}

/// Shown for any path outside the route table.
pub fn not_found(path: &str) -> Page {
    Page {
        route: None,
        hero: None,
        sections: vec![Section {
            title: "Page not found".to_string(),
            subtitle: Some(format!("Nothing lives at {path}")),
            blocks: vec![
                Block::Paragraph(
                    "The address may be mistyped, or the page may have moved.".to_string(),
                ),
                Block::Links(vec![Link::solid("Back to home", Route::Home.path())]),
            ],
        }],
    }
}
