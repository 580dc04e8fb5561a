use super::{BusinessType, WebsiteStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandFonts {
    pub heading: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandGuidelines {
    pub tone_of_voice: Option<String>,
    pub colors: Option<BrandColors>,
    pub fonts: Option<BrandFonts>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: String,
    pub business_name: String,
    pub contact_person: String,
    pub business_type: BusinessType,
    pub phone: String,
    pub email: String,
    pub website_status: WebsiteStatus,
    pub city: String,
    pub monthly_fee: String,
    pub address: Option<String>,
    pub website_url: Option<String>,
    pub join_date: Option<String>,
    pub total_paid: Option<String>,
    pub notes: Option<String>,
    pub business_description: Option<String>,
    pub industry: Option<String>,
    pub brand_guidelines: Option<BrandGuidelines>,
}

impl Client {
    /// Builds a list record with no profile details
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        business_name: &str,
        contact_person: &str,
        business_type: BusinessType,
        phone: &str,
        email: &str,
        website_status: WebsiteStatus,
        city: &str,
        monthly_fee: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            business_name: business_name.to_string(),
            contact_person: contact_person.to_string(),
            business_type,
            phone: phone.to_string(),
            email: email.to_string(),
            website_status,
            city: city.to_string(),
            monthly_fee: monthly_fee.to_string(),
            address: None,
            website_url: None,
            join_date: None,
            total_paid: None,
            notes: None,
            business_description: None,
            industry: None,
            brand_guidelines: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.website_status == WebsiteStatus::Live
    }
}
