use crate::pipeline::{filter, paginate, select, view, Query, SortSpec};
use crate::record::{Invoice, InvoiceStatus, Report, ReportStatus, User, UserRole, UserStatus};
use crate::sample;

fn user(id: &str, name: &str, role: UserRole, created: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role,
        status: UserStatus::Active,
        created_at: created.to_string(),
    }
}

fn eight_users() -> Vec<User> {
    use UserRole::*;
    vec![
        user("1", "Ada", Admin, "2024-01-01"),
        user("2", "Ben", Member, "2024-01-02"),
        user("3", "Cleo", Admin, "2024-01-03"),
        user("4", "Dev", Member, "2024-01-04"),
        user("5", "Eli", Guest, "2024-01-05"),
        user("6", "Fay", Member, "2024-01-06"),
        user("7", "Gus", Admin, "2024-01-07"),
        user("8", "Hal", Member, "2024-01-08"),
    ]
}

fn report(id: &str, from: Option<&str>, to: Option<&str>, date: &str) -> Report {
    Report {
        id: id.to_string(),
        name: format!("Report {id}"),
        report_type: "Revenue".to_string(),
        category: None,
        date: date.to_string(),
        date_from: from.map(str::to_string),
        date_to: to.map(str::to_string),
        status: ReportStatus::Ready,
        scheduled: None,
        schedule_frequency: None,
        email_recipients: None,
        description: None,
    }
}

fn ids<T: crate::record::Entity>(items: &[&T]) -> Vec<String> {
    items.iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn member_filter_fits_one_page() {
    let users = eight_users();
    let result = view(&users, &Query::new().with_filter("role", "member"));
    assert_eq!(result.total_count, 4);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.items.len(), 4);
    assert!(result.items.iter().all(|u| u.role == UserRole::Member));
}

#[test]
fn second_page_keeps_original_order() {
    let users = eight_users();
    let result = view(&users, &Query::new().with_page(2));
    assert_eq!(ids(&result.items), vec!["5", "6", "7", "8"]);
    assert_eq!(result.page_start, 5);
    assert_eq!(result.page_end, 8);
    assert_eq!(result.total_count, 8);
    assert_eq!(result.total_pages, 2);
}

#[test]
fn invoice_date_window_is_inclusive() {
    let invoices = sample::invoices();
    let q = Query::new()
        .with_date_from("2024-05-01")
        .with_date_to("2024-06-30");
    let dates: Vec<&str> = filter(&invoices, &q).iter().map(|i| i.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-06-01", "2024-05-01"]);
}

#[test]
fn search_matches_plan_case_insensitively() {
    let invoices = sample::invoices();
    let found = filter(&invoices, &Query::new().with_search("pro"));
    assert_eq!(ids(&found), vec!["INV-001", "INV-002", "INV-004"]);
    let upper = filter(&invoices, &Query::new().with_search("PRO"));
    assert_eq!(ids(&found), ids(&upper));
    let by_id = filter(&invoices, &Query::new().with_search("inv-005"));
    assert_eq!(ids(&by_id), vec!["INV-005"]);
}

#[test]
fn view_is_idempotent() {
    let users = sample::users();
    let q = Query::new()
        .with_search("a")
        .with_filter("status", "active")
        .with_sort(SortSpec::descending("name"))
        .with_page(2)
        .with_page_size(2);
    assert_eq!(view(&users, &q), view(&users, &q));
}

#[test]
fn filter_is_conjunction_of_predicates() {
    let users = sample::users();
    let search = Query::new().with_search("company");
    let role = Query::new().with_filter("role", "member");
    let dates = Query::new().with_date_from("2024-02-01");
    let combined = Query::new()
        .with_search("company")
        .with_filter("role", "member")
        .with_date_from("2024-02-01");

    let by_search = ids(&filter(&users, &search));
    let by_role = ids(&filter(&users, &role));
    let by_dates = ids(&filter(&users, &dates));
    let expected: Vec<String> = users
        .iter()
        .map(|u| u.id.clone())
        .filter(|id| by_search.contains(id) && by_role.contains(id) && by_dates.contains(id))
        .collect();

    assert_eq!(ids(&filter(&users, &combined)), expected);
    assert_eq!(expected, vec!["2", "5", "8"]);
}

#[test]
fn field_filters_match_case_sensitively() {
    let users = eight_users();
    assert!(filter(&users, &Query::new().with_filter("role", "Member")).is_empty());
    assert!(filter(&users, &Query::new().with_filter("role", "MEMBER")).is_empty());
    assert_eq!(filter(&users, &Query::new().with_filter("role", "member")).len(), 4);
}

#[test]
fn multiple_field_filters_must_all_match() {
    let users = sample::users();
    let q = Query::new()
        .with_filter("role", "member")
        .with_filter("status", "active");
    assert_eq!(ids(&filter(&users, &q)), vec!["2", "8"]);

    let by_status = Query::new().with_filter("status", "pending");
    assert_eq!(ids(&filter(&users, &by_status)), vec!["3", "7"]);
    let both = by_status.with_filter("role", "guest");
    assert_eq!(ids(&filter(&users, &both)), vec!["7"]);
}

#[test]
fn empty_filter_values_impose_nothing() {
    let users = sample::users();
    let q = Query::new().with_search("").with_filter("role", "");
    assert_eq!(filter(&users, &q).len(), users.len());
}

#[test]
fn unknown_filter_field_matches_nothing() {
    let users = sample::users();
    assert!(filter(&users, &Query::new().with_filter("plan", "Pro")).is_empty());
}

#[test]
fn pages_reconstruct_the_filtered_list() {
    let reports = sample::reports(chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    let filtered = select(&reports, &Query::new());
    for size in 1..=filtered.len() + 1 {
        let first = paginate(&filtered, 1, size);
        let mut joined = Vec::new();
        for page in 1..=first.total_pages {
            joined.extend(paginate(&filtered, page, size).items);
        }
        assert_eq!(ids(&joined), ids(&filtered), "page size {size}");
    }
}

#[test]
fn out_of_range_pages_clamp() {
    let users = sample::users();
    let refs: Vec<&User> = users.iter().collect();
    assert_eq!(paginate(&refs, 0, 3), paginate(&refs, 1, 3));
    assert_eq!(paginate(&refs, 99, 3), paginate(&refs, 3, 3));
    assert_eq!(paginate(&refs, 99, 3).items.len(), 2);
}

#[test]
fn empty_collection_view() {
    let users: Vec<User> = Vec::new();
    let q = Query::new()
        .with_search("anything")
        .with_filter("role", "admin")
        .with_page(5);
    let result = view(&users, &q);
    assert!(result.items.is_empty());
    assert_eq!(result.total_count, 0);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.page_start, 0);
    assert_eq!(result.page_end, 0);
}

#[test]
fn report_ranges_overlap_the_window() {
    let reports = vec![
        report("before", Some("2024-01-01"), Some("2024-01-31"), "2024-02-01"),
        report("straddles", Some("2024-01-20"), Some("2024-02-10"), "2024-02-11"),
        report("inside", Some("2024-02-05"), Some("2024-02-06"), "2024-02-07"),
        report("after", Some("2024-03-01"), Some("2024-03-31"), "2024-04-01"),
        report("no-range", None, None, "2024-02-15"),
    ];
    let q = Query::new()
        .with_date_from("2024-02-01")
        .with_date_to("2024-02-28");
    assert_eq!(ids(&filter(&reports, &q)), vec!["straddles", "inside", "no-range"]);
}

#[test]
fn only_upper_bound_keeps_records_starting_before_it() {
    let reports = vec![
        report("early", Some("2024-01-01"), Some("2024-01-31"), "2024-02-01"),
        report("late", Some("2024-03-01"), Some("2024-03-31"), "2024-04-01"),
    ];
    let q = Query::new().with_date_to("2024-02-15");
    assert_eq!(ids(&filter(&reports, &q)), vec!["early"]);
}

#[test]
fn malformed_dates_fail_closed() {
    let invoices = sample::invoices();
    assert!(filter(&invoices, &Query::new().with_date_from("2024-05")).is_empty());
    assert!(filter(&invoices, &Query::new().with_date_to("not a date")).is_empty());

    let mut broken = sample::invoices();
    broken[0].date = "06/01/2024".to_string();
    let q = Query::new().with_date_from("2024-01-01");
    let found = filter(&broken, &q);
    assert_eq!(found.len(), 4);
    assert!(found.iter().all(|i| i.id != "INV-001"));
}

#[test]
fn sort_is_stable_and_directional() {
    let invoices = sample::invoices();
    let asc = select(&invoices, &Query::new().with_sort(SortSpec::ascending("amount")));
    assert_eq!(
        ids(&asc),
        vec!["INV-003", "INV-001", "INV-002", "INV-004", "INV-005"]
    );
    let desc = select(&invoices, &Query::new().with_sort(SortSpec::descending("amount")));
    assert_eq!(
        ids(&desc),
        vec!["INV-005", "INV-001", "INV-002", "INV-004", "INV-003"]
    );
    let by_date = select(&invoices, &Query::new().with_sort(SortSpec::ascending("date")));
    assert_eq!(by_date.first().map(|i| i.id.as_str()), Some("INV-005"));
}

#[test]
fn sort_applies_before_pagination() {
    let invoices = vec![
        Invoice {
            id: "A".to_string(),
            date: "2024-01-01".to_string(),
            amount: 50.0,
            plan: "Starter".to_string(),
            status: InvoiceStatus::Paid,
        },
        Invoice {
            id: "B".to_string(),
            date: "2024-01-02".to_string(),
            amount: 10.0,
            plan: "Starter".to_string(),
            status: InvoiceStatus::Paid,
        },
        Invoice {
            id: "C".to_string(),
            date: "2024-01-03".to_string(),
            amount: 30.0,
            plan: "Starter".to_string(),
            status: InvoiceStatus::Paid,
        },
    ];
    let q = Query::new()
        .with_sort(SortSpec::ascending("amount"))
        .with_page_size(2)
        .with_page(2);
    assert_eq!(ids(&view(&invoices, &q).items), vec!["A"]);
}
