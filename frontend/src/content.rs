//! Static copy shown on the site.

use crate::Route;

pub struct ServiceSummary {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

impl Testimonial {
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// A service with a long description, opened in a detail dialog.
pub struct CatalogEntry {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
}

pub struct CatalogPage {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub hero_image: &'static str,
    pub grid_heading: &'static str,
    pub grid_tagline: &'static str,
    pub entries: &'static [CatalogEntry],
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ShowcasePage {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub hero_video: &'static str,
    pub hero_image: &'static str,
    pub features: &'static [Feature],
}

pub struct ServicePageLink {
    pub name: &'static str,
    pub route: Route,
}

pub static SERVICE_PAGES: [ServicePageLink; 5] = [
    ServicePageLink { name: "Cleaning", route: Route::Cleaning },
    ServicePageLink { name: "Engineering", route: Route::Engineering },
    ServicePageLink { name: "Laundry", route: Route::Laundry },
    ServicePageLink { name: "Washing Bay", route: Route::WashingBay },
    ServicePageLink { name: "Trading", route: Route::Trading },
];

pub const SERVICES: [ServiceSummary; 6] = [
    ServiceSummary {
        icon: "🏠",
        title: "Residential Cleaning",
        description: "Regular and deep cleaning services for your home. We handle everything from daily maintenance to move-in/move-out cleaning.",
        features: &["Weekly/Monthly Plans", "Deep Cleaning", "Move-in/out", "Eco-friendly Products"],
    },
    ServiceSummary {
        icon: "🏢",
        title: "Commercial Cleaning",
        description: "Professional office and commercial space cleaning. Keep your workspace pristine and productive.",
        features: &["Daily/Weekly Service", "Office Cleaning", "Restroom Sanitization", "Floor Care"],
    },
    ServiceSummary {
        icon: "🛋️",
        title: "Carpet & Upholstery",
        description: "Expert carpet cleaning and upholstery care. Restore the beauty of your furniture and flooring.",
        features: &["Steam Cleaning", "Stain Removal", "Odor Treatment", "Protection Treatment"],
    },
    ServiceSummary {
        icon: "✨",
        title: "Deep Cleaning",
        description: "Thorough deep cleaning for the areas that need extra attention. Perfect for spring cleaning or special occasions.",
        features: &["Kitchen Deep Clean", "Bathroom Sanitization", "Baseboard Cleaning", "Window Cleaning"],
    },
    ServiceSummary {
        icon: "📅",
        title: "One-Time Cleaning",
        description: "Need a one-time clean? Flexible scheduling for special events, parties, or whenever you need extra help.",
        features: &["Flexible Scheduling", "Event Cleaning", "Post-Construction", "Emergency Service"],
    },
    ServiceSummary {
        icon: "🛡️",
        title: "Specialized Services",
        description: "Specialized cleaning for unique situations. We handle challenging cleaning tasks with expertise.",
        features: &["Post-Renovation", "Hoarder Cleanup", "Disaster Recovery", "Sanitization"],
    },
];

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Odongo Solomon",
        role: "Homeowner",
        content: "Albert International Uganda Limited transformed our home! The team was professional, thorough, and respectful. Our house has never looked better.",
        rating: 5,
    },
    Testimonial {
        name: "Olwit Pope",
        role: "Business Owner",
        content: "We've used them for our office cleaning for over a year now. They're reliable, efficient, and always go above and beyond. Our workspace is spotless!",
        rating: 5,
    },
    Testimonial {
        name: "Ocen Moses",
        role: "Property Manager",
        content: "They handle all our rental property turnovers. Fast, detail-oriented, and they always meet our deadlines.",
        rating: 5,
    },
    Testimonial {
        name: "David Thompson Mukasa",
        role: "Homeowner",
        content: "The deep cleaning service was incredible! They cleaned areas I didn't even know needed attention. Worth every penny.",
        rating: 5,
    },
    Testimonial {
        name: "Oula Darius",
        role: "Event Coordinator",
        content: "They saved us during our busy event season, cleaning our venue quickly and professionally so we could focus on our guests.",
        rating: 5,
    },
];

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight { icon: "👥", title: "Expert Team", description: "Trained professionals" },
    Highlight { icon: "🏆", title: "Quality Guaranteed", description: "100% satisfaction" },
    Highlight { icon: "🛡️", title: "Fully Insured", description: "Protected & secure" },
    Highlight { icon: "🕒", title: "Flexible Scheduling", description: "Available 7 days/week" },
];

pub const STATS: [Stat; 4] = [
    Stat { value: "500+", label: "Happy Clients" },
    Stat { value: "98%", label: "Satisfaction" },
    Stat { value: "24/7", label: "Support" },
    Stat { value: "5★", label: "Rating" },
];

pub const CLEANING: CatalogPage = CatalogPage {
    heading: "Professional Cleaning Services",
    tagline: "Experience the difference of pristine cleanliness. We deliver exceptional cleaning solutions tailored to your needs.",
    hero_image: "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=1920&h=1080&fit=crop",
    grid_heading: "Our Services",
    grid_tagline: "From residential to industrial, we offer comprehensive cleaning solutions for every need.",
    entries: &[
        CatalogEntry {
            icon: "🏠",
            title: "Residential Cleaning",
            summary: "Keep your home spotless with our comprehensive residential cleaning services.",
            details: "Regular and one-off cleaning of every room in your home, done by a trained crew that brings its own equipment and eco-friendly products.",
            features: &["General house cleaning", "Bathrooms & toilets", "Kitchens & appliances", "Bedrooms & living rooms", "Dusting & mopping", "Window cleaning", "Balcony cleaning"],
            image: "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=800&h=600&fit=crop",
        },
        CatalogEntry {
            icon: "🏢",
            title: "Office & Commercial Cleaning",
            summary: "Professional cleaning solutions for your business environment.",
            details: "Scheduled cleaning before or after business hours so your staff and visitors always walk into a clean, healthy workplace.",
            features: &["Office spaces", "Conference rooms", "Reception areas", "Desks & equipment", "Floor sanitizing", "Waste management"],
            image: "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&h=600&fit=crop",
        },
        CatalogEntry {
            icon: "🧱",
            title: "Post-Construction Cleaning",
            summary: "Transform your newly built or renovated space into a pristine environment.",
            details: "We remove the dust, paint and debris construction leaves behind and prepare the building for handover.",
            features: &["Removal of cement dust", "Glass cleaning", "Paint removal", "Floor scrubbing", "Final handover cleaning"],
            image: "https://images.unsplash.com/photo-1504307651254-35680f356dfd?w=800&h=600&fit=crop",
        },
        CatalogEntry {
            icon: "✨",
            title: "Deep Cleaning",
            summary: "Intensive cleaning that reaches every corner of your property.",
            details: "A top-to-bottom clean of surfaces, fixtures and furniture that regular cleaning does not reach.",
            features: &["Full interior deep cleaning", "Kitchen deep scrub", "Bathroom scaling removal", "Ceiling & high-surface cleaning", "Mattress & sofa cleaning"],
            image: "https://images.unsplash.com/photo-1628177142898-93e36e4e3a50?w=800&h=600&fit=crop",
        },
        CatalogEntry {
            icon: "🛋️",
            title: "Carpet & Upholstery Cleaning",
            summary: "Revitalize your carpets and furniture with our specialized cleaning.",
            details: "Vacuuming, shampooing and spot treatment that lifts stains and odours from fabric without damaging it.",
            features: &["Carpet vacuuming", "Shampooing", "Stain removal", "Sofa & chair cleaning"],
            image: "https://images.unsplash.com/photo-1527515637462-cff94eecc1ac?w=800&h=600&fit=crop",
        },
        CatalogEntry {
            icon: "🚚",
            title: "Move-In / Move-Out Cleaning",
            summary: "Make your transition smooth with our thorough moving cleaning services.",
            details: "Empty-property cleaning that gets deposits back and lets new occupants move straight in.",
            features: &["Houses", "Apartments", "Offices", "Full sanitization"],
            image: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?w=800&h=600&fit=crop",
        },
        CatalogEntry {
            icon: "🌳",
            title: "Outdoor Cleaning",
            summary: "Maintain pristine outdoor spaces with our comprehensive exterior cleaning.",
            details: "Compounds, walkways, gates and gardens swept, washed and cleared.",
            features: &["Compound sweeping", "Pathways & pavements", "Gate & fence cleaning", "Garden cleaning"],
            image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&h=600&fit=crop",
        },
        CatalogEntry {
            icon: "🏭",
            title: "Industrial Cleaning",
            summary: "Heavy-duty cleaning solutions for industrial facilities.",
            details: "Crews and equipment sized for warehouses and factory floors, including degreasing of machinery.",
            features: &["Warehouses", "Factories", "Machinery cleaning", "Oil & grease removal"],
            image: "https://images.unsplash.com/photo-1581094271901-8022df4466f9?w=800&h=600&fit=crop",
        },
    ],
};

pub const ENGINEERING: CatalogPage = CatalogPage {
    heading: "Engineering & Construction",
    tagline: "From foundations to finishes, we build and maintain structures that last.",
    hero_image: "/construction/building-construction.jpg",
    grid_heading: "What We Build",
    grid_tagline: "Construction, civil works and maintenance delivered by certified engineers.",
    entries: &[
        CatalogEntry {
            icon: "🏠",
            title: "Building Construction",
            summary: "Complete construction of residential and commercial buildings",
            details: "End-to-end building construction from foundation to finishing, with structural integrity, compliance with local codes and high-quality workmanship.",
            features: &["Foundations", "Structural works", "Finishing"],
            image: "/construction/building-construction.jpg",
        },
        CatalogEntry {
            icon: "🔄",
            title: "Renovation & Remodelling",
            summary: "Modernize, restore, or redesign existing structures",
            details: "Structural changes, interior upgrades and better use of space that add value to your property while keeping it safe and compliant.",
            features: &["Structural changes", "Interior upgrades", "Space optimization"],
            image: "/construction/renovation.jpg",
        },
        CatalogEntry {
            icon: "🛣️",
            title: "Road & Drainage Construction",
            summary: "Design and build roads, pathways, and drainage systems",
            details: "Durable roads and efficient drainage, including asphalt paving, concrete roadways and stormwater management.",
            features: &["Asphalt paving", "Concrete roadways", "Stormwater management"],
            image: "/construction/road-construction.jpg",
        },
        CatalogEntry {
            icon: "📍",
            title: "Survey Works",
            summary: "Land and structural survey for planning and compliance",
            details: "Precise land measurements, topographic maps and structural assessments using total stations and GPS.",
            features: &["Land surveys", "Topographic maps", "Structural assessments"],
            image: "/construction/construction-survey.jpg",
        },
        CatalogEntry {
            icon: "⚡",
            title: "Plumbing & Electrical Installation",
            summary: "Professional plumbing and electrical services",
            details: "Installation and maintenance of water systems, drainage, wiring and fixtures by licensed technicians.",
            features: &["Water systems", "Electrical wiring", "Fixtures"],
            image: "/construction/plumbing-electrical.jpg",
        },
        CatalogEntry {
            icon: "⛑️",
            title: "Roofing",
            summary: "Construction and repair of roofs",
            details: "Metal sheet, tile and waterproofing systems, gutters and insulation that protect your property from the elements.",
            features: &["New roofs", "Repairs", "Gutters & insulation"],
            image: "/construction/roofing.jpg",
        },
        CatalogEntry {
            icon: "✅",
            title: "Finishes",
            summary: "High-quality interior and exterior finishes",
            details: "Painting, tiling, plastering and decorative works by skilled artisans using premium materials.",
            features: &["Painting", "Tiling", "Plastering"],
            image: "/construction/finishes.jpg",
        },
        CatalogEntry {
            icon: "🔧",
            title: "General Maintenance",
            summary: "Ongoing maintenance services for buildings",
            details: "Routine checks, preventive maintenance schedules and emergency repairs that keep your property functional and safe.",
            features: &["Preventive maintenance", "Emergency repairs", "System upgrades"],
            image: "/construction/maintenance.jpg",
        },
        CatalogEntry {
            icon: "🚜",
            title: "Machine Hiring",
            summary: "Rent construction machinery with operators",
            details: "Excavators, bulldozers and concrete mixers for hire, regularly maintained and run by certified operators.",
            features: &["Excavators", "Bulldozers", "Concrete mixers"],
            image: "/construction/machinery.jpg",
        },
    ],
};

pub const LAUNDRY: ShowcasePage = ShowcasePage {
    heading: "Laundry & Dry Cleaning",
    tagline: "Fresh, crisp garments collected and delivered on your schedule.",
    hero_video: "/laundry.mp4",
    hero_image: "https://images.unsplash.com/photo-1545173168-9f1947eebb7f?w=1920&h=1080&fit=crop",
    features: &[
        Feature { icon: "🧺", title: "Professional Washing", description: "Thorough garment cleaning using modern machines and fabric-safe detergents." },
        Feature { icon: "👔", title: "Ironing & Pressing", description: "Perfect wrinkle-free finishing for all types of clothes." },
        Feature { icon: "✨", title: "Stain Removal", description: "Expert treatment of tough stains using eco-friendly cleaning solutions." },
        Feature { icon: "⏱️", title: "Fast Delivery", description: "Quick turnaround service guaranteeing fresh garments on time." },
    ],
};

pub const WASHING_BAY: ShowcasePage = ShowcasePage {
    heading: "Car Washing Bay",
    tagline: "Showroom shine inside and out, without the wait.",
    hero_video: "/washing-bay.mp4",
    hero_image: "https://images.unsplash.com/photo-1520340356584-f9917d1eea6f?w=1920&h=1080&fit=crop",
    features: &[
        Feature { icon: "💧", title: "Premium Hand Wash", description: "Gentle exterior cleaning using pH-neutral shampoos and microfiber mitts." },
        Feature { icon: "🚗", title: "Interior Detailing", description: "Deep vacuuming, steam cleaning, and leather conditioning for a factory-fresh feel." },
        Feature { icon: "🛡️", title: "Paint Protection", description: "High-grade wax and ceramic coating applications to keep your vehicle shining." },
        Feature { icon: "🕒", title: "Express Service", description: "Efficient cleaning protocols designed to get you back on the road in under 45 minutes." },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_initial() {
        assert_eq!(TESTIMONIALS[0].initial(), "O");
        let nameless = Testimonial { name: "", role: "", content: "", rating: 0 };
        assert_eq!(nameless.initial(), "");
    }

    #[test]
    fn test_catalogues_are_populated() {
        for page in [&CLEANING, &ENGINEERING] {
            assert!(!page.entries.is_empty());
            assert!(page.entries.iter().all(|entry| !entry.features.is_empty()));
        }
        assert_eq!(LAUNDRY.features.len(), 4);
        assert_eq!(WASHING_BAY.features.len(), 4);
    }
}
