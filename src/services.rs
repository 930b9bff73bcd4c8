pub mod working_hours;
