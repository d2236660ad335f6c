pub mod app;
pub mod cli;
pub mod config;
pub mod interaction;
pub mod logging;
pub mod output;
pub mod page;
pub mod preview;
pub mod template;

#[cfg(test)]
mod tests;
