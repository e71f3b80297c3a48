//! Static page content: images, services, navigation.
//!
//! Everything here is read-only for the life of the process. The page
//! composer reads these tables; nothing writes them.

/// Full-bleed hero background.
pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?auto=format&fit=crop&w=2000&q=80";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

/// In-page navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Section anchor, without the `#`.
    pub anchor: &'static str,
}

pub const GALLERY_IMAGES: [GalleryImage; 5] = [
    GalleryImage {
        src: "https://images.unsplash.com/photo-1486325212027-8081e485255e?auto=format&fit=crop&w=800&q=80",
        alt: "Modern glass building",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1503387762-592deb58ef4e?auto=format&fit=crop&w=800&q=80",
        alt: "Architectural structure",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1504307651254-35680f356dfd?auto=format&fit=crop&w=800&q=80",
        alt: "Construction crane at sunset",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1590274853856-f22d5ee3d228?auto=format&fit=crop&w=800&q=80",
        alt: "Luxury residence",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1545558014-8692077e9b5c?auto=format&fit=crop&w=800&q=80",
        alt: "Modern interior",
    },
];

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Residential Construction",
        image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?auto=format&fit=crop&w=800&q=80",
        description: "From custom luxury homes to multi-family developments, we bring visionary residential designs to life with uncompromising quality and craftsmanship.",
    },
    Service {
        title: "Commercial Development",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=800&q=80",
        description: "We deliver state-of-the-art commercial spaces — offices, retail centers, and mixed-use developments — engineered for performance and built to impress.",
    },
    Service {
        title: "Renovation & Remodeling",
        image: "https://images.unsplash.com/photo-1574359411659-15573a27fd0c?auto=format&fit=crop&w=800&q=80",
        description: "Breathing new life into existing structures, our renovation team transforms outdated spaces into modern masterpieces while preserving their character.",
    },
];

/// Section anchors, in document order.
pub const HERO_ANCHOR: &str = "hero";
pub const GALLERY_ANCHOR: &str = "gallery";
pub const SERVICES_ANCHOR: &str = "services";

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Gallery",
        anchor: GALLERY_ANCHOR,
    },
    NavLink {
        label: "Services",
        anchor: SERVICES_ANCHOR,
    },
];

/// Call to action in the navbar; points at the services section.
pub const QUOTE_LINK: NavLink = NavLink {
    label: "Get a Quote",
    anchor: SERVICES_ANCHOR,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_existing_sections() {
        for link in NAV_LINKS.iter().chain([&QUOTE_LINK]) {
            assert!([HERO_ANCHOR, GALLERY_ANCHOR, SERVICES_ANCHOR].contains(&link.anchor));
        }
    }

    #[test]
    fn every_image_has_alt_text() {
        assert!(GALLERY_IMAGES.iter().all(|i| !i.alt.is_empty()));
        assert!(SERVICES.iter().all(|s| !s.title.is_empty()));
    }
}
