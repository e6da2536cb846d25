pub mod ports;
pub mod event_bus;
pub mod page;
pub mod actions;
