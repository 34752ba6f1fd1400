//! Demo records matching the dashboard's built-in mock data.

use chrono::{Datelike, Duration, NaiveDate};

use crate::pipeline::DATE_FORMAT;
use crate::record::{
    Invoice, InvoiceStatus, Report, ReportStatus, ScheduleFrequency, User, UserRole, UserStatus,
};

fn user(id: &str, name: &str, email: &str, role: UserRole, status: UserStatus, created: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        created_at: created.to_string(),
    }
}

pub fn users() -> Vec<User> {
    use UserRole::*;
    use UserStatus::*;
    vec![
        user("1", "Alex Chen", "alex@example.com", Admin, Active, "2024-01-15"),
        user("2", "Sam Rivera", "sam@company.io", Member, Active, "2024-02-03"),
        user("3", "Jordan Lee", "jordan@startup.co", Member, Pending, "2024-02-10"),
        user("4", "Casey Morgan", "casey@example.com", Viewer, Active, "2024-02-18"),
        user("5", "Riley Kim", "riley@company.io", Member, Inactive, "2024-03-01"),
        user("6", "Taylor Brooks", "taylor@startup.co", Admin, Active, "2024-03-12"),
        user("7", "Morgan Hayes", "morgan@example.com", Guest, Pending, "2024-03-20"),
        user("8", "Jamie Fox", "jamie@company.io", Member, Active, "2024-04-02"),
    ]
}

fn invoice(id: &str, date: &str, amount: f64, plan: &str, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_string(),
        date: date.to_string(),
        amount,
        plan: plan.to_string(),
        status,
    }
}

pub fn invoices() -> Vec<Invoice> {
    use InvoiceStatus::*;
    vec![
        invoice("INV-001", "2024-06-01", 299.0, "Pro", Paid),
        invoice("INV-002", "2024-05-01", 299.0, "Pro", Paid),
        invoice("INV-003", "2024-04-01", 99.0, "Starter", Paid),
        invoice("INV-004", "2024-07-01", 299.0, "Pro", Pending),
        invoice("INV-005", "2024-03-15", 899.0, "Enterprise", Overdue),
    ]
}

/// Named date ranges offered by the reports page, resolved against `today`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePreset {
    Last7Days,
    Last30Days,
    Last90Days,
    ThisMonth,
    LastMonth,
}

impl DatePreset {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "last7" | "7d" | "last-7-days" => Some(Self::Last7Days),
            "last30" | "30d" | "last-30-days" => Some(Self::Last30Days),
            "last90" | "90d" | "last-90-days" => Some(Self::Last90Days),
            "this-month" | "thismonth" | "month" => Some(Self::ThisMonth),
            "last-month" | "lastmonth" => Some(Self::LastMonth),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
            Self::ThisMonth => "This month",
            Self::LastMonth => "Last month",
        }
    }

    /// Inclusive `(from, to)` range ending today, or the whole previous
    /// month for [`DatePreset::LastMonth`].
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Last7Days => (today - Duration::days(6), today),
            Self::Last30Days => (today - Duration::days(29), today),
            Self::Last90Days => (today - Duration::days(89), today),
            Self::ThisMonth => (first_of_month(today), today),
            Self::LastMonth => {
                let this_month = first_of_month(today);
                let last_day = this_month - Duration::days(1);
                (first_of_month(last_day), last_day)
            }
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn fmt(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

struct ReportSeed {
    name: &'static str,
    report_type: &'static str,
    category: &'static str,
    range: (NaiveDate, NaiveDate),
    date: NaiveDate,
    status: ReportStatus,
    schedule: Option<ScheduleFrequency>,
    recipients: &'static [&'static str],
    description: &'static str,
}

/// The fifteen demo reports. Their ranges are relative to `today`.
pub fn reports(today: NaiveDate) -> Vec<Report> {
    use ReportStatus::*;
    use ScheduleFrequency::*;

    let last7 = DatePreset::Last7Days.resolve(today);
    let last30 = DatePreset::Last30Days.resolve(today);
    let last90 = DatePreset::Last90Days.resolve(today);
    let this_month = DatePreset::ThisMonth.resolve(today);
    let last_month = DatePreset::LastMonth.resolve(today);
    let old1 = today - Duration::days(120);
    let old2 = today - Duration::days(100);

    let seeds = [
        ReportSeed {
            name: "Weekly Revenue Summary",
            report_type: "CSV",
            category: "Financial",
            range: last7,
            date: today,
            status: Ready,
            schedule: Some(Weekly),
            recipients: &["admin@example.com"],
            description: "Weekly revenue breakdown for the past 7 days",
        },
        ReportSeed {
            name: "Recent User Activity",
            report_type: "PDF",
            category: "Performance",
            range: last7,
            date: today,
            status: Ready,
            schedule: None,
            recipients: &[],
            description: "User activity and engagement metrics for the last week",
        },
        ReportSeed {
            name: "Monthly Revenue Summary",
            report_type: "CSV",
            category: "Financial",
            range: last30,
            date: today,
            status: Ready,
            schedule: Some(Monthly),
            recipients: &["admin@example.com", "finance@example.com"],
            description: "Comprehensive monthly revenue breakdown",
        },
        ReportSeed {
            name: "User Acquisition Report",
            report_type: "PDF",
            category: "Performance",
            range: last30,
            date: today,
            status: Ready,
            schedule: None,
            recipients: &[],
            description: "New user signups and acquisition metrics for the past month",
        },
        ReportSeed {
            name: "Marketing Campaign Performance",
            report_type: "Excel",
            category: "Marketing",
            range: last30,
            date: today,
            status: Ready,
            schedule: Some(Monthly),
            recipients: &["marketing@example.com"],
            description: "Marketing campaign ROI and performance metrics",
        },
        ReportSeed {
            name: "Quarterly Analytics Export",
            report_type: "CSV",
            category: "Operational",
            range: last90,
            date: today,
            status: Ready,
            schedule: None,
            recipients: &[],
            description: "Quarterly analytics data export covering the past 90 days",
        },
        ReportSeed {
            name: "Sales Performance Report",
            report_type: "PDF",
            category: "Sales",
            range: last90,
            date: today,
            status: Generating,
            schedule: None,
            recipients: &[],
            description: "Comprehensive sales performance analysis for Q2",
        },
        ReportSeed {
            name: "Churn Analysis",
            report_type: "Excel",
            category: "Performance",
            range: last90,
            date: today,
            status: Ready,
            schedule: Some(Monthly),
            recipients: &["analytics@example.com"],
            description: "User churn and retention analysis for the quarter",
        },
        ReportSeed {
            name: "Current Month Revenue",
            report_type: "CSV",
            category: "Financial",
            range: this_month,
            date: today,
            status: Ready,
            schedule: Some(Daily),
            recipients: &["admin@example.com"],
            description: "Daily revenue tracking for the current month",
        },
        ReportSeed {
            name: "Monthly User Growth",
            report_type: "PDF",
            category: "Performance",
            range: this_month,
            date: today,
            status: Ready,
            schedule: None,
            recipients: &[],
            description: "User growth metrics for the current month",
        },
        ReportSeed {
            name: "Previous Month Summary",
            report_type: "CSV",
            category: "Financial",
            range: last_month,
            date: last_month.1,
            status: Ready,
            schedule: Some(Monthly),
            recipients: &["admin@example.com"],
            description: "Complete financial summary for the previous month",
        },
        ReportSeed {
            name: "Last Month Billing Overview",
            report_type: "PDF",
            category: "Financial",
            range: last_month,
            date: last_month.1,
            status: Ready,
            schedule: None,
            recipients: &[],
            description: "Billing and invoice overview for last month",
        },
        ReportSeed {
            name: "Previous Month Analytics",
            report_type: "Excel",
            category: "Operational",
            range: last_month,
            date: last_month.1,
            status: Ready,
            schedule: None,
            recipients: &[],
            description: "Operational metrics and analytics for last month",
        },
        ReportSeed {
            name: "Historical Q1 Report",
            report_type: "CSV",
            category: "Financial",
            range: (old2, old1),
            date: old1,
            status: Ready,
            schedule: None,
            recipients: &[],
            description: "Historical Q1 financial report",
        },
        ReportSeed {
            name: "Old Analytics Export",
            report_type: "PDF",
            category: "Operational",
            range: (old2, old1),
            date: old2,
            status: Failed,
            schedule: None,
            recipients: &[],
            description: "Older analytics export (over 90 days old)",
        },
    ];

    seeds
        .into_iter()
        .enumerate()
        .map(|(i, seed)| Report {
            id: (i + 1).to_string(),
            name: seed.name.to_string(),
            report_type: seed.report_type.to_string(),
            category: Some(seed.category.to_string()),
            date: fmt(seed.date),
            date_from: Some(fmt(seed.range.0)),
            date_to: Some(fmt(seed.range.1)),
            status: seed.status,
            scheduled: Some(seed.schedule.is_some()),
            schedule_frequency: seed.schedule,
            email_recipients: (!seed.recipients.is_empty())
                .then(|| seed.recipients.iter().map(|s| s.to_string()).collect()),
            description: Some(seed.description.to_string()),
        })
        .collect()
}
