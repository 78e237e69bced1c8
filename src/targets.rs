//! The fixed target list.
//!
//! Every page that talked to the backend copied the same hardcoded
//! `API_URL` assignment, so the migration addresses them by name instead of
//! crawling the tree. Order matters only for output stability.

/// Frontend pages to patch, relative to the directory the tool is run from.
pub const DEFAULT_TARGETS: &[&str] = &[
    "frontend/app/atm/transfer/page.tsx",
    "frontend/app/atm/dashboard/page.tsx",
    "frontend/app/atm/deposit/page.tsx",
    "frontend/app/atm/changePin/page.tsx",
    "frontend/app/atm/transactionHistory/page.tsx",
    "frontend/app/atm/withdraw/page.tsx",
    "frontend/app/atm/receipt/page.tsx",
    "frontend/app/atm/converter/page.tsx",
    "frontend/app/atm/emergency/page.tsx",
    "frontend/app/atm/limits/page.tsx",
    "frontend/app/atm/blockCard/page.tsx",
    "frontend/app/atm/login/page.tsx",
    "frontend/app/admin/dashboard/page.jsx",
    "frontend/app/admin/test-connection/page.jsx",
    "frontend/app/admin/settings/page.jsx",
    "frontend/app/admin/atm-monitoring/page.jsx",
    "frontend/app/admin/notifications/page.jsx",
    "frontend/app/admin/analytics/page.jsx",
    "frontend/app/admin/login/page.jsx",
];
