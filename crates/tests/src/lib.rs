#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_client_tests;

#[cfg(test)]
mod ride_client_tests;

#[cfg(test)]
mod admin_client_tests;

#[cfg(test)]
mod session_middleware_tests;

#[cfg(test)]
mod health_tests;
