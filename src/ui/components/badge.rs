use tui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::models::{PaymentStatus, ProjectStatus, ProjectType, WebsiteStatus};

const GREEN: Color = Color::Rgb(0x00, 0x87, 0x67);
const AMBER: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
const VIOLET: Color = Color::Rgb(0x59, 0x32, 0xea);
const SKY: Color = Color::Rgb(0x02, 0x84, 0xc7);
const PURPLE: Color = Color::Rgb(0xa8, 0x55, 0xf7);
const RED: Color = Color::Rgb(0xdf, 0x04, 0x04);
const TEAL: Color = Color::Rgb(0x16, 0xc0, 0x98);

pub fn website_status_color(status: WebsiteStatus) -> Color {
    match status {
        WebsiteStatus::Live => GREEN,
        WebsiteStatus::Development => AMBER,
        WebsiteStatus::Design => VIOLET,
        WebsiteStatus::Planning => SKY,
        WebsiteStatus::Inactive => RED,
    }
}

pub fn project_status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Live => GREEN,
        ProjectStatus::Development => AMBER,
        ProjectStatus::Design => VIOLET,
        ProjectStatus::Planning => SKY,
        ProjectStatus::Testing => PURPLE,
        ProjectStatus::OnHold => RED,
    }
}

pub fn payment_status_color(status: PaymentStatus) -> Color {
    match status {
        PaymentStatus::Paid => GREEN,
        PaymentStatus::Pending => AMBER,
        PaymentStatus::Overdue => RED,
    }
}

pub fn project_type_color(project_type: ProjectType) -> Color {
    match project_type {
        ProjectType::NewWebsite => VIOLET,
        ProjectType::Redesign => AMBER,
        ProjectType::Maintenance => TEAL,
        ProjectType::Seo => SKY,
    }
}

pub fn change_color(positive: bool) -> Color {
    if positive { TEAL } else { RED }
}

/// Label drawn as a bracketed pill in the status colour
pub fn badge(label: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}]", label),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
