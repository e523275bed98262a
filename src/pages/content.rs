//! Static page copy

/// A titled offering shown as a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
}

const fn offering(title: &'static str, description: &'static str) -> Offering {
    Offering { title, description }
}

pub const SOFTWARE_SERVICES: &[Offering] = &[
    offering("Web Development", "Modern responsive websites & apps."),
    offering("Mobile Apps", "iOS and Android solutions tailored to your needs."),
    offering("Cloud Solutions", "Scalable cloud-based systems & migrations."),
    offering("Software Consulting", "Strategy, architecture & tech guidance."),
];

pub const SOFTWARE_FACILITIES: &[Offering] = &[
    offering("Development Studio", "Dedicated teams working in agile sprints with weekly demos."),
    offering("Cloud Lab", "Staging environments that mirror your production setup."),
    offering("Quality Assurance", "Automated and manual testing before every release."),
];

pub const WEB_DEVELOPMENT: &[Offering] = &[
    offering("Landing Pages", "Fast, focused pages that turn visitors into leads."),
    offering("Web Applications", "Single-page apps and dashboards built on modern frameworks."),
    offering("E-commerce", "Shops with secure checkout and inventory integration."),
    offering("Maintenance", "Hosting, updates and monitoring after launch."),
];

pub const IT_SERVICES: &[Offering] = &[
    offering(
        "Desktop & Laptop Support",
        "Comprehensive hardware and software support for desktops and laptops. Includes upgrades, virus removal, OS installation, and troubleshooting.",
    ),
    offering(
        "Network Solutions",
        "Wi-Fi setup, firewall configuration, VPNs, and troubleshooting for home and business networks.",
    ),
    offering(
        "Cloud Services",
        "Migration to the cloud, cloud backups, Microsoft 365 and Google Workspace support, and ongoing cloud infrastructure management.",
    ),
    offering("Server Setup", "Server setup, configuration and hand-over ready for deployment."),
    offering(
        "Data Recovery",
        "Emergency recovery for hard drives, SSDs, USB drives, and cloud storage with a high success rate.",
    ),
    offering(
        "24/7 IT Support",
        "Round-the-clock IT helpdesk for urgent issues. Remote and onsite support options available.",
    ),
];

pub const DATA_SERVICES: &[Offering] = &[
    offering("Data Collection & Cleaning", "Consistent, deduplicated data from every source you use."),
    offering("ETL/ELT Pipeline Development", "Scheduled pipelines that move and reshape data reliably."),
    offering("Database Design & Optimization", "Schemas and indexes tuned for your workload."),
    offering("Automated Reporting Systems", "Dashboards and reports that refresh themselves."),
    offering("Data Warehouse Setup", "A single source of truth for analytics."),
    offering("Business Data Migration", "Safe moves between systems with validation at each step."),
];

pub const FLOW_SERVICES: &[Offering] = &[
    offering("Dishwashing Support", "Trained staff keeping your dish station running at peak hours."),
    offering("Kitchen Cleaning", "Daily and deep cleaning of back-of-house areas."),
    offering("Hygiene Audits", "Checklists and routines aligned with food safety rules."),
    offering("Flow Planning", "Station layouts and shift plans that remove bottlenecks."),
];

pub const GUIDANCE_REQUIREMENTS: &[&str] = &[
    "Complete the registration form.",
    "Provide valid contact information.",
    "IELTS score of 6.0 or equivalent.",
    "Agree to our terms and conditions.",
    "Submit the form before the deadline.",
];

pub const GUIDANCE_FACILITIES: &[Offering] = &[
    offering("Admission Counselling", "One-to-one guidance on programmes and universities."),
    offering("Visa Assistance", "Document checklists and application review."),
    offering("Accommodation Help", "Support finding housing before arrival."),
    offering("Job Guidance", "Advice on student jobs and careers after graduation."),
];

/// About-page paragraphs per brand
pub fn about(site: crate::site::SiteKey) -> &'static [&'static str] {
    use crate::site::SiteKey;
    match site {
        SiteKey::Software => &[
            "We design and build software for small and medium businesses.",
            "From first sketch to cloud deployment, one team owns your product.",
        ],
        SiteKey::Guidance => &[
            "We help international students find their way into Danish education.",
            "Our advisers have walked the same path and know every step of it.",
        ],
        SiteKey::ItSupport => &[
            "Nordisk Support keeps businesses running with reliable, affordable IT help.",
            "Our technicians work remotely and onsite across Denmark.",
        ],
        SiteKey::FlowSupport => &[
            "We support restaurants and facilities with trained back-of-house staff.",
            "Clean stations and smooth flow, every shift.",
        ],
    }
}
