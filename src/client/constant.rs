pub const SITE_NAME: &str = "League Dashboard";

/// Page sizes offered by list pages.
pub const PER_PAGE_OPTIONS: [u64; 4] = [5, 10, 25, 50];

/// Notifications listed in the header dropdown.
pub const NOTIFICATION_DROPDOWN_LIMIT: usize = 5;

/// Upcoming items shown on the home page and dashboards.
pub const UPCOMING_LIMIT: u32 = 5;
