mod sample;

use crate::error::DashboardError;
use crate::format;
use crate::models::{
    BusinessType, Client, ClientProject, Invoice, MonthlyRevenue, PaymentStatus, Project, ProjectStatus, Stat,
};

/// How many projects the dashboard lists under "Recent Projects"
const RECENT_PROJECTS: usize = 4;

/// Sum of invoice amounts in `status`; unreadable amounts are logged and skipped
fn outstanding(invoices: &[Invoice], status: PaymentStatus) -> u64 {
    invoices
        .iter()
        .filter(|i| i.status == status)
        .filter_map(|i| match format::parse_currency(&i.amount) {
            Ok(amount) => Some(amount),
            Err(err) => {
                tracing::warn!(client = %i.client, error = %err, "skipping invoice amount");
                None
            }
        })
        .sum()
}

/// The in-memory dataset every view reads from
pub struct SampleData {
    clients: Vec<Client>,
    projects: Vec<Project>,
    client_projects: Vec<ClientProject>,
    monthly_revenue: Vec<MonthlyRevenue>,
    invoices: Vec<Invoice>,
    dashboard_stats: Vec<Stat>,
    quick_stats: Vec<Stat>,
    revenue_stats: Vec<Stat>,
}

impl SampleData {
    pub fn load() -> Self {
        let invoices = sample::recent_invoices();
        let pending = format::whole_currency(outstanding(&invoices, PaymentStatus::Pending));

        let data = Self {
            clients: sample::clients(),
            projects: sample::projects(),
            client_projects: sample::client_projects(),
            monthly_revenue: sample::monthly_revenue(),
            invoices,
            dashboard_stats: sample::dashboard_stats(),
            quick_stats: sample::quick_stats(),
            revenue_stats: sample::revenue_stats(pending),
        };

        tracing::debug!(
            clients = data.clients.len(),
            projects = data.projects.len(),
            invoices = data.invoices.len(),
            "sample data loaded"
        );

        data
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn recent_projects(&self) -> &[Project] {
        &self.projects[..RECENT_PROJECTS.min(self.projects.len())]
    }

    pub fn monthly_revenue(&self) -> &[MonthlyRevenue] {
        &self.monthly_revenue
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn dashboard_stats(&self) -> &[Stat] {
        &self.dashboard_stats
    }

    pub fn quick_stats(&self) -> &[Stat] {
        &self.quick_stats
    }

    pub fn revenue_stats(&self) -> &[Stat] {
        &self.revenue_stats
    }

    pub fn growth_rate(&self) -> &str {
        "+12.5%"
    }

    pub fn average_monthly_revenue(&self) -> u64 {
        let values: Vec<u64> = self.monthly_revenue.iter().map(|m| m.revenue).collect();
        format::average(&values)
    }

    pub fn get_client(&self, id: &str) -> Result<&Client, DashboardError> {
        self.clients
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| DashboardError::ClientNotFound(id.to_string()))
    }

    /// The record shown on a client's detail page, enriched when a full profile exists
    pub fn client_profile(&self, id: &str) -> Result<Client, DashboardError> {
        let base = self.get_client(id)?;
        Ok(sample::profile(base).unwrap_or_else(|| base.clone()))
    }

    /// Trade of the client a project board row belongs to
    pub fn business_type_of(&self, client_name: &str) -> Option<BusinessType> {
        self.clients
            .iter()
            .find(|c| c.business_name == client_name)
            .map(|c| c.business_type)
    }

    pub fn client_projects(&self, id: &str) -> Result<Vec<ClientProject>, DashboardError> {
        self.get_client(id)?;
        Ok(self.client_projects.clone())
    }

    /// Total, In Progress, Completed and On Hold counts over the project board
    pub fn project_stats(&self) -> Vec<Stat> {
        let count = |pred: fn(ProjectStatus) -> bool| {
            self.projects.iter().filter(|p| pred(p.status)).count().to_string()
        };

        vec![
            Stat::new("Total Projects", self.projects.len().to_string(), None),
            Stat::new(
                "In Progress",
                count(|s| !matches!(s, ProjectStatus::Live | ProjectStatus::OnHold)),
                None,
            ),
            Stat::new("Completed", count(|s| s == ProjectStatus::Live), None),
            Stat::new("On Hold", count(|s| s == ProjectStatus::OnHold), None),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WebsiteStatus;

    #[test]
    fn known_clients_get_full_profiles() {
        let data = SampleData::load();

        let mike = data.client_profile("1").unwrap();
        assert_eq!(mike.business_name, "Mike's Plumbing Services");
        assert_eq!(mike.total_paid.as_deref(), Some("$2,980"));
        let brand = mike.brand_guidelines.unwrap();
        assert_eq!(
            brand.fonts.unwrap().heading.as_deref(),
            Some("Montserrat Bold")
        );

        let elite = data.client_profile("2").unwrap();
        assert_eq!(elite.website_url, None);
        assert_eq!(elite.website_status, WebsiteStatus::Development);
    }

    #[test]
    fn other_clients_fall_back_to_list_record() {
        let data = SampleData::load();
        let profile = data.client_profile("6").unwrap();
        assert_eq!(&profile, data.get_client("6").unwrap());
        assert!(profile.brand_guidelines.is_none());
    }

    #[test]
    fn unknown_client_is_an_error() {
        let data = SampleData::load();
        assert_eq!(
            data.client_profile("99"),
            Err(DashboardError::ClientNotFound("99".to_string()))
        );
        assert!(data.client_projects("99").is_err());
    }

    #[test]
    fn project_stats_are_counted() {
        let data = SampleData::load();
        let values: Vec<(String, String)> = data
            .project_stats()
            .into_iter()
            .map(|s| (s.label, s.value))
            .collect();
        assert_eq!(
            values,
            [
                ("Total Projects".to_string(), "8".to_string()),
                ("In Progress".to_string(), "4".to_string()),
                ("Completed".to_string(), "3".to_string()),
                ("On Hold".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn average_revenue_matches_chart() {
        let data = SampleData::load();
        assert_eq!(data.average_monthly_revenue(), 15716);
        assert_eq!(format::compact_currency(data.average_monthly_revenue()), "$15.7K");
    }

    #[test]
    fn pending_payments_sum_pending_invoices() {
        let data = SampleData::load();
        let pending = data
            .revenue_stats()
            .iter()
            .find(|s| s.label == "Pending Payments")
            .map(|s| s.value.clone());
        assert_eq!(pending.as_deref(), Some("$5,600"));
        assert_eq!(outstanding(data.invoices(), PaymentStatus::Overdue), 179);
    }

    #[test]
    fn project_rows_resolve_business_type() {
        let data = SampleData::load();
        assert_eq!(
            data.business_type_of("Elite Electric Co."),
            Some(BusinessType::Electrician)
        );
        assert_eq!(data.business_type_of("Unknown Co."), None);
    }

    #[test]
    fn dashboard_lists_four_recent_projects() {
        let data = SampleData::load();
        assert_eq!(data.recent_projects().len(), 4);
        assert_eq!(data.recent_projects()[3].client_name, "Fast Fix Plumbing");
    }
}
