#[cfg(test)]
mod support;

#[cfg(test)]
mod config_tests;
