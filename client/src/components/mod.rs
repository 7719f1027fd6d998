//! Presentation components. Only the preference controls live in this
//! repository; the portfolio's page content is composed elsewhere.

pub mod prefs_menu;
