pub mod runner;
pub mod threaded_dispatcher;
