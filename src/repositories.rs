pub mod blogs;
pub mod brands;
pub mod cache;
pub mod categories;
pub mod companies;
pub mod coupons;
pub mod faqs;
pub mod features;
pub mod images;
pub mod locations;
pub mod pages;
pub mod plans;
pub mod staff;
pub mod testimonials;
pub mod users;
pub mod working_hours;
