//! Application-wide constants

pub const USERS_ROUTE: &str = "/api/users";

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 20;

pub const DEFAULT_FIRST_NAME: &str = "John";
pub const DEFAULT_LAST_NAME: &str = "Doe";

pub const ADMIN_ID: &str = "77777777-7777-7777-7777-777777777777";
pub const ADMIN_LOGIN: &str = "Admin";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";
pub const PAGINATION_HEADER: &str = "x-pagination";
