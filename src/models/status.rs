use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

// Generates the label table and the string conversions for a display enum.
// A leading `menu` also emits `ALL`, the order a status filter cycles through.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        menu $name:ident, $kind:literal, $err:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        labelled_enum! {
            $(#[$meta])*
            $name, $kind, $err {
                $($variant => $label),+
            }
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, $err:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = DashboardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(DashboardError::$err {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

labelled_enum! {
    /// Trade a client works in
    BusinessType, "business", UnknownType {
        Plumbing => "Plumbing",
        Electrician => "Electrician",
        Hvac => "HVAC",
        Other => "Other",
    }
}

labelled_enum! {
    /// Lifecycle of a client's website
    menu WebsiteStatus, "website", UnknownStatus {
        Live => "Live",
        Development => "Development",
        Design => "Design",
        Planning => "Planning",
        Inactive => "Inactive",
    }
}

labelled_enum! {
    ProjectType, "project", UnknownType {
        NewWebsite => "New Website",
        Redesign => "Redesign",
        Maintenance => "Maintenance",
        Seo => "SEO",
    }
}

labelled_enum! {
    menu ProjectStatus, "project", UnknownStatus {
        Planning => "Planning",
        Design => "Design",
        Development => "Development",
        Testing => "Testing",
        Live => "Live",
        OnHold => "On Hold",
    }
}

labelled_enum! {
    PaymentStatus, "payment", UnknownStatus {
        Paid => "Paid",
        Pending => "Pending",
        Overdue => "Overdue",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_variants() {
        for status in ProjectStatus::ALL {
            assert_eq!(status.label().parse::<ProjectStatus>(), Ok(*status));
        }
        assert_eq!("HVAC".parse::<BusinessType>(), Ok(BusinessType::Hvac));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Archived".parse::<WebsiteStatus>().unwrap_err();
        assert_eq!(
            err,
            DashboardError::UnknownStatus {
                kind: "website",
                value: "Archived".to_string()
            }
        );
        assert_eq!(err.to_string(), "unknown website status: Archived");
    }

    #[test]
    fn filter_menus_follow_declaration_order() {
        let labels: Vec<&str> = WebsiteStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Live", "Development", "Design", "Planning", "Inactive"]);
        assert_eq!(ProjectStatus::ALL.last(), Some(&ProjectStatus::OnHold));
    }
}
