//! Route paths shared by the router, the pages and the API client.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";
pub const CUSTOMER_DETAILS: &str = "/customer-details";

pub const API_LOGIN: &str = "/api/auth/login";
pub const API_ME: &str = "/api/auth/me";
pub const API_LOGOUT: &str = "/api/auth/logout";
pub const API_SELECTION: &str = "/api/payments/selection";
