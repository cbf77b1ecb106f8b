pub mod synthetic_page;
