use crate::models::{
    BrandColors, BrandFonts, BrandGuidelines, BusinessType, Client, ClientProject, Invoice,
    MonthlyRevenue, PaymentStatus, Project, ProjectStatus, ProjectType, Stat, WebsiteStatus,
};

pub(super) fn clients() -> Vec<Client> {
    vec![
        Client::new(
            "1",
            "Mike's Plumbing Services",
            "Mike Johnson",
            BusinessType::Plumbing,
            "(555) 123-4567",
            "mike@mikesplumbing.com",
            WebsiteStatus::Live,
            "Austin, TX",
            "$149",
        ),
        Client::new(
            "2",
            "Elite Electric Co.",
            "Sarah Williams",
            BusinessType::Electrician,
            "(555) 234-5678",
            "sarah@eliteelectric.com",
            WebsiteStatus::Development,
            "Dallas, TX",
            "$199",
        ),
        Client::new(
            "3",
            "Cool Air HVAC",
            "Robert Davis",
            BusinessType::Hvac,
            "(555) 345-6789",
            "rob@coolairhvac.com",
            WebsiteStatus::Live,
            "Houston, TX",
            "$179",
        ),
        Client::new(
            "4",
            "Fast Fix Plumbing",
            "Jennifer Brown",
            BusinessType::Plumbing,
            "(555) 456-7890",
            "jen@fastfixplumbing.com",
            WebsiteStatus::Design,
            "San Antonio, TX",
            "$149",
        ),
        Client::new(
            "5",
            "Bright Light Electrical",
            "Michael Chen",
            BusinessType::Electrician,
            "(555) 567-8901",
            "michael@brightlight.com",
            WebsiteStatus::Live,
            "Phoenix, AZ",
            "$199",
        ),
        Client::new(
            "6",
            "Climate Control Experts",
            "Lisa Martinez",
            BusinessType::Hvac,
            "(555) 678-9012",
            "lisa@climatecontrol.com",
            WebsiteStatus::Development,
            "Denver, CO",
            "$179",
        ),
        Client::new(
            "7",
            "Pro Plumbing Solutions",
            "David Anderson",
            BusinessType::Plumbing,
            "(555) 789-0123",
            "david@proplumbing.com",
            WebsiteStatus::Live,
            "Seattle, WA",
            "$149",
        ),
        Client::new(
            "8",
            "AllTemp HVAC Services",
            "Amanda Taylor",
            BusinessType::Hvac,
            "(555) 890-1234",
            "amanda@alltempac.com",
            WebsiteStatus::Inactive,
            "Portland, OR",
            "$179",
        ),
    ]
}

fn brand(tone: &str, colors: [&str; 3], heading: &str, body: &str) -> BrandGuidelines {
    BrandGuidelines {
        tone_of_voice: Some(tone.to_string()),
        colors: Some(BrandColors {
            primary: Some(colors[0].to_string()),
            secondary: Some(colors[1].to_string()),
            accent: Some(colors[2].to_string()),
        }),
        fonts: Some(BrandFonts {
            heading: Some(heading.to_string()),
            body: Some(body.to_string()),
        }),
    }
}

/// Full profiles for the clients that have one; keyed by the list record's id
pub(super) fn profile(base: &Client) -> Option<Client> {
    let profile = match base.id.as_str() {
        "1" => Client {
            address: Some("123 Main Street".to_string()),
            website_url: Some("https://www.mikesplumbing.com".to_string()),
            join_date: Some("November 2025".to_string()),
            total_paid: Some("$2,980".to_string()),
            business_description: Some(
                "Family-owned plumbing service providing residential and commercial solutions \
                 in the Austin area for over 15 years. Specializing in emergency repairs, \
                 installations, and maintenance."
                    .to_string(),
            ),
            industry: Some("Home Services - Plumbing".to_string()),
            brand_guidelines: Some(brand(
                "Professional yet friendly. We speak directly to homeowners with warmth and \
                 expertise. Avoid jargon, be reassuring, and emphasize our reliability and \
                 quick response times.",
                ["#2563eb", "#1e40af", "#f59e0b"],
                "Montserrat Bold",
                "Open Sans Regular",
            )),
            notes: Some(
                "Prefers communication via email. Very responsive to project updates. \
                 Plans to add blog content in Q2 2026."
                    .to_string(),
            ),
            ..base.clone()
        },
        "2" => Client {
            address: Some("456 Oak Avenue".to_string()),
            join_date: Some("December 2025".to_string()),
            total_paid: Some("$3,200".to_string()),
            business_description: Some(
                "Licensed electrical contractors serving the Dallas-Fort Worth metroplex. \
                 We handle everything from simple repairs to complete rewiring and \
                 commercial installations."
                    .to_string(),
            ),
            industry: Some("Home Services - Electrical".to_string()),
            brand_guidelines: Some(brand(
                "Confident and safety-focused. Emphasize our licensed expertise and \
                 commitment to code compliance. Use clear, straightforward language that \
                 builds trust.",
                ["#eab308", "#ca8a04", "#1f2937"],
                "Roboto Bold",
                "Roboto Regular",
            )),
            ..base.clone()
        },
        "3" => Client {
            address: Some("789 Climate Drive".to_string()),
            website_url: Some("https://www.coolairhvac.com".to_string()),
            join_date: Some("October 2025".to_string()),
            total_paid: Some("$4,120".to_string()),
            business_description: Some(
                "Houston's trusted HVAC specialists providing installation, repair, and \
                 maintenance of heating and cooling systems for residential and commercial \
                 properties."
                    .to_string(),
            ),
            industry: Some("Home Services - HVAC".to_string()),
            brand_guidelines: Some(brand(
                "Knowledgeable and helpful. We educate customers about their HVAC systems \
                 while maintaining a comfortable, approachable tone. Focus on energy \
                 efficiency and comfort.",
                ["#0ea5e9", "#0284c7", "#ec4899"],
                "Inter Bold",
                "Inter Regular",
            )),
            notes: Some(
                "Very active on social media. Prefers monthly performance reports. \
                 Interested in adding a customer portal."
                    .to_string(),
            ),
            ..base.clone()
        },
        _ => return None,
    };
    Some(profile)
}

fn project(
    id: &str,
    client_name: &str,
    project_type: ProjectType,
    status: ProjectStatus,
    dates: (&str, &str),
    progress: u16,
    budget: &str,
) -> Project {
    Project {
        id: id.to_string(),
        client_name: client_name.to_string(),
        project_type,
        status,
        start_date: dates.0.to_string(),
        deadline: dates.1.to_string(),
        progress,
        budget: budget.to_string(),
    }
}

pub(super) fn projects() -> Vec<Project> {
    use ProjectStatus as S;
    use ProjectType as T;

    vec![
        project("1", "Mike's Plumbing Services", T::NewWebsite, S::Live, ("2025-11-15", "2026-01-15"), 100, "$2,500"),
        project("2", "Elite Electric Co.", T::NewWebsite, S::Development, ("2025-12-01", "2026-02-01"), 65, "$3,200"),
        project("3", "Cool Air HVAC", T::Redesign, S::Design, ("2025-12-20", "2026-02-20"), 40, "$2,800"),
        project("4", "Fast Fix Plumbing", T::NewWebsite, S::Planning, ("2026-01-05", "2026-03-05"), 20, "$2,400"),
        project("5", "Bright Light Electrical", T::Seo, S::Live, ("2025-11-01", "2026-01-01"), 100, "$1,500"),
        project("6", "Climate Control Experts", T::NewWebsite, S::Development, ("2025-12-10", "2026-02-10"), 55, "$3,000"),
        project("7", "Pro Plumbing Solutions", T::Maintenance, S::Live, ("2025-10-15", "2026-01-15"), 100, "$800"),
        project("8", "AllTemp HVAC Services", T::Redesign, S::OnHold, ("2025-11-20", "2026-02-20"), 30, "$2,700"),
    ]
}

pub(super) fn client_projects() -> Vec<ClientProject> {
    vec![
        ClientProject {
            id: "1".to_string(),
            project_type: ProjectType::NewWebsite,
            status: ProjectStatus::Live,
            start_date: "2025-11-15".to_string(),
            completed_date: Some("2026-01-15".to_string()),
            progress: 100,
            budget: "$2,500".to_string(),
            description: "Full website design and development with contact forms, service \
                          pages, and SEO optimization"
                .to_string(),
        },
        ClientProject {
            id: "2".to_string(),
            project_type: ProjectType::Seo,
            status: ProjectStatus::Development,
            start_date: "2026-01-20".to_string(),
            completed_date: None,
            progress: 45,
            budget: "$800".to_string(),
            description: "Local SEO optimization and Google My Business setup".to_string(),
        },
    ]
}

pub(super) fn monthly_revenue() -> Vec<MonthlyRevenue> {
    [
        ("Jan", 12400, 35),
        ("Feb", 14200, 38),
        ("Mar", 15800, 40),
        ("Apr", 16500, 41),
        ("May", 17200, 42),
        ("Jun", 18200, 42),
    ]
    .into_iter()
    .map(|(month, revenue, clients)| MonthlyRevenue {
        month,
        revenue,
        clients,
    })
    .collect()
}

pub(super) fn recent_invoices() -> Vec<Invoice> {
    use PaymentStatus as P;

    [
        ("Mike's Plumbing Services", "$149", P::Paid, "2026-01-25", "Monthly Subscription"),
        ("Elite Electric Co.", "$3,200", P::Pending, "2026-01-28", "Website Development"),
        ("Cool Air HVAC", "$179", P::Paid, "2026-01-24", "Monthly Subscription"),
        ("Fast Fix Plumbing", "$2,400", P::Pending, "2026-01-27", "Website Development"),
        ("Bright Light Electrical", "$199", P::Paid, "2026-01-23", "Monthly Subscription"),
        ("Climate Control Experts", "$179", P::Overdue, "2026-01-15", "Monthly Subscription"),
    ]
    .into_iter()
    .map(|(client, amount, status, date, kind)| Invoice {
        client: client.to_string(),
        amount: amount.to_string(),
        status,
        date: date.to_string(),
        kind: kind.to_string(),
    })
    .collect()
}

pub(super) fn dashboard_stats() -> Vec<Stat> {
    vec![
        Stat::new("Total Clients", "42", Some("+8%")),
        Stat::new("Active Projects", "28", Some("+12%")),
        Stat::new("Websites Live", "35", Some("+5%")),
        Stat::new("Monthly Revenue", "$18.2K", Some("+15%")),
    ]
}

pub(super) fn quick_stats() -> Vec<Stat> {
    vec![
        Stat::new("Avg. Project Value", "$2,850", None),
        Stat::new("Completion Rate", "94%", None),
        Stat::new("Client Satisfaction", "4.8/5.0", None),
    ]
}

pub(super) fn revenue_stats(pending: String) -> Vec<Stat> {
    vec![
        Stat::new("Total Revenue", "$94,300", Some("+12%")),
        Stat::new("Monthly Recurring", "$6,854", Some("+8%")),
        Stat::new("Pending Payments", pending, None),
        Stat::new("Overdue", "$358", Some("-2%")),
    ]
}
