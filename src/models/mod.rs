mod client;
mod project;
mod invoice;
mod status;

pub use client::{BrandColors, BrandFonts, BrandGuidelines, Client};
pub use project::{ClientProject, Project};
pub use invoice::{Invoice, MonthlyRevenue, Stat};
pub use status::{BusinessType, PaymentStatus, ProjectStatus, ProjectType, WebsiteStatus};
